//! # 인증 설정
//!
//! OAuth 클라이언트, JWT 서명/만료, state 비밀값을 환경 변수에서 읽습니다.
//! Spring Security의 `oauth2.client.registration.google` /
//! `jwt.secret` 계열 프로퍼티에 해당합니다.
//!
//! ```bash
//! # Google OAuth (필수. 누락 시 첫 사용 시점에 패닉)
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/v1/auth/google/callback"
//!
//! # JWT
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//!
//! # OAuth 보안
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! ```

use std::env;

fn required(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{} must be set", key))
}

fn with_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn numeric_with_default(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Google OAuth 2.0 클라이언트 설정
///
/// auth/token 엔드포인트는 Google 표준 주소가 기본값입니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> String {
        required("GOOGLE_CLIENT_ID")
    }

    pub fn client_secret() -> String {
        required("GOOGLE_CLIENT_SECRET")
    }

    pub fn redirect_uri() -> String {
        required("GOOGLE_REDIRECT_URI")
    }

    pub fn auth_uri() -> String {
        with_default("GOOGLE_AUTH_URI", "https://accounts.google.com/o/oauth2/auth")
    }

    pub fn token_uri() -> String {
        with_default("GOOGLE_TOKEN_URI", "https://oauth2.googleapis.com/token")
    }
}

/// JWT 토큰 서명/만료 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰 수명 (시간 단위, 기본 24)
    pub fn expiration_hours() -> i64 {
        numeric_with_default("JWT_EXPIRATION_HOURS", 24)
    }

    /// 리프레시 토큰 수명 (일 단위, 기본 7)
    pub fn refresh_expiration_days() -> i64 {
        numeric_with_default("JWT_REFRESH_EXPIRATION_DAYS", 7)
    }
}

/// OAuth state 파라미터 보안 설정
pub struct OAuthConfig;

impl OAuthConfig {
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        })
    }
}

/// 사용자 계정의 인증 수단
///
/// 가입 경로를 기록합니다. GitHub/Microsoft는 아직 플로우가 없지만
/// 계정 충돌 판정에서 "타 OAuth 프로바이더"로 취급됩니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    /// 이메일/패스워드 로컬 계정
    Local,
    /// Google OAuth 2.0
    Google,
    GitHub,
    Microsoft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_serialization_roundtrip() {
        let provider = AuthProvider::Google;

        let json = serde_json::to_string(&provider).unwrap();
        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();

        assert_eq!(provider, deserialized);
    }

    #[test]
    fn test_numeric_default_survives_garbage() {
        unsafe { env::set_var("TEST_NUMERIC_GARBAGE", "abc") };
        assert_eq!(numeric_with_default("TEST_NUMERIC_GARBAGE", 24), 24);
        unsafe { env::remove_var("TEST_NUMERIC_GARBAGE") };

        assert_eq!(numeric_with_default("TEST_NUMERIC_UNSET", 7), 7);
    }
}
