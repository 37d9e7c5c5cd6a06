//! # Google OAuth 사용자 정보 모델
//!
//! Google OAuth 2.0 인증 플로우에서 반환되는 사용자 정보를
//! 역직렬화하기 위한 데이터 모델을 정의합니다.

use serde::Deserialize;

/// Google OAuth 2.0 UserInfo 엔드포인트 응답 구조체
///
/// `https://www.googleapis.com/oauth2/v2/userinfo` 응답과 호환됩니다.
///
/// ## OAuth 2.0 스코프 요구사항
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `id`, `email`, `verified_email` | `openid`, `email` |
/// | `name`, `given_name`, `family_name`, `picture` | `profile` |
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 식별자 (불변, 숫자 문자열)
    ///
    /// 한 번 할당되면 변경되지 않으므로 OAuth 계정 연결 키로 사용합니다.
    pub id: String,

    /// 사용자 이메일 주소
    ///
    /// 검증 여부는 `verified_email`로 확인해야 합니다.
    pub email: String,

    /// 전체 이름 (표시 이름으로 사용)
    pub name: String,

    /// 이름
    pub given_name: String,

    /// 성
    pub family_name: String,

    /// 프로필 이미지 URL (선택사항)
    pub picture: Option<String>,

    /// Google이 이메일 소유권을 검증했는지 여부
    ///
    /// `false`인 이메일은 계정 탈취 위험이 있으므로 로그인 정책에서
    /// 별도 처리가 필요합니다.
    pub verified_email: bool,
}
