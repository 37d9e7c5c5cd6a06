//! JWT 클레임과 토큰 쌍 구조체
//!
//! RFC 7519 표준 클레임에 서비스 특화 클레임을 더한 페이로드와,
//! 클라이언트에 전달되는 액세스/리프레시 토큰 세트를 정의합니다.
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// `sub`는 User의 ObjectId hex이며, 프로필 저장소의 `identity_id` 키로
/// 그대로 쓰입니다. 개인정보 보호를 위해 최소한의 정보만 담습니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (User ObjectId hex, 프로필 identity_id)
    pub sub: String,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 사용자 역할 목록 (권한 기반 접근 제어용)
    pub roles: Vec<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 사용자 ID (sub와 동일, 명시적 접근용)
    pub user_id: String,
    /// 사용자 이메일 (선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// JWT 토큰 쌍 구조체
///
/// OAuth 2.0 토큰 응답 형식을 따르는 클라이언트 전달용 세트입니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰, 선택사항)
    pub refresh_token: Option<String>,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
