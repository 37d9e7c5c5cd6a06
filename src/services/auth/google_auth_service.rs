//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code Flow (RFC 6749)의 서버 측 절반입니다.
//!
//! 1. `get_login_url`: CSRF 방지 state를 포함한 동의 화면 URL 생성
//! 2. 사용자가 Google에서 동의하면 콜백으로 authorization code가 돌아옴
//! 3. `authenticate_with_code`: state 검증, code를 액세스 토큰으로 교환,
//!    UserInfo 조회, 기존 계정 매칭 또는 신규 가입

use std::sync::Arc;
use serde::de::DeserializeOwned;
use singleton_macro::service;
use crate::{
    config::{AuthProvider, GoogleOAuthConfig, OAuthConfig},
    core::errors::AppError,
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};
use crate::domain::dto::users::response::google_oauth_response::{GoogleTokenResponse, OAuthLoginUrlResponse};
use crate::domain::models::oauth::google_oauth_model::google_user::GoogleUserInfo;

const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// 기존 계정 조회 결과를 로그인/가입/거절로 가르는 판정
enum AccountMatch {
    /// 같은 이메일의 Google 계정. 그대로 로그인
    Login(User),
    /// 처음 보는 이메일. 가입 진행
    Register,
    /// 같은 이메일이 다른 인증 방식으로 등록됨
    Conflict(String),
}

/// Google OAuth 2.0 인증 서비스
///
/// `#[service]` 매크로로 싱글톤 관리되고 UserRepository가 주입됩니다.
#[service]
pub struct GoogleAuthService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl GoogleAuthService {
    /// Google 로그인 URL 생성
    ///
    /// state는 URL과 응답 본문 양쪽에 실어, 콜백에서 동일한 값이
    /// 돌아오는지 클라이언트가 대조할 수 있게 합니다.
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = generate_oauth_state();

        let params = [
            ("client_id", GoogleOAuthConfig::client_id()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
            ("state", state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", GoogleOAuthConfig::auth_uri(), query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// Authorization code로 인증 완료
    pub async fn authenticate_with_code(&self, auth_code: &str, state: &str) -> Result<User, AppError> {
        verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        let existing = self.user_repo.find_by_email(&google_user.email).await?;

        match match_account(existing) {
            AccountMatch::Login(user) => {
                log::info!("Google 사용자 로그인: {}", google_user.email);
                Ok(user)
            }
            AccountMatch::Register => {
                log::info!("새 Google 사용자 등록: {}", google_user.email);
                self.create_google_user(google_user).await
            }
            AccountMatch::Conflict(message) => Err(AppError::ConflictError(message)),
        }
    }

    /// Authorization code를 Google 액세스 토큰으로 교환
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = reqwest::Client::new()
            .post(&GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        read_google_response(response, "Google 토큰 교환").await
    }

    /// 액세스 토큰으로 Google UserInfo 엔드포인트 조회
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = reqwest::Client::new()
            .get(USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        read_google_response(response, "Google 사용자 정보 조회").await
    }

    /// Google 사용자 정보로 신규 계정 생성
    async fn create_google_user(&self, google_user: GoogleUserInfo) -> Result<User, AppError> {
        let username = self.generate_unique_username(&google_user.given_name).await?;

        let user = User::new_oauth(
            google_user.email,
            username,
            google_user.name,
            AuthProvider::Google,
            google_user.id,
            google_user.picture,
        );

        self.user_repo.create(user).await
    }

    /// given_name 기반 사용자명을 만들고, 충돌하면 숫자 접미사를 붙입니다.
    async fn generate_unique_username(&self, base_name: &str) -> Result<String, AppError> {
        let base = slugify_username(base_name);
        let mut candidate = base.clone();

        for counter in 1..=1000 {
            if self.user_repo.find_by_username(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            candidate = format!("{}_{}", base, counter);
        }

        Err(AppError::InternalError("사용자명 생성 실패".to_string()))
    }
}

fn match_account(existing: Option<User>) -> AccountMatch {
    let Some(user) = existing else {
        return AccountMatch::Register;
    };

    match user.auth_provider {
        AuthProvider::Google => AccountMatch::Login(user),
        AuthProvider::Local => AccountMatch::Conflict(
            "이미 해당 이메일로 등록된 로컬 계정이 있습니다. 로컬 로그인을 사용하거나 계정을 연동해주세요.".to_string(),
        ),
        _ => AccountMatch::Conflict(
            "이미 해당 이메일로 다른 OAuth 프로바이더에 등록된 계정이 있습니다.".to_string(),
        ),
    }
}

/// 상태 코드를 확인하고 본문을 역직렬화하는 공통 처리
async fn read_google_response<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(AppError::ExternalServiceError(format!("{} 실패: {}", context, error_text)));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} 응답 파싱 실패: {}", context, e)))
}

fn slugify_username(base_name: &str) -> String {
    base_name.to_lowercase().replace(' ', "_")
}

/// CSRF 방지용 OAuth state 생성
///
/// 예측 불가능한 난수 토큰에 서버 비밀값 해시를 덧붙입니다.
fn generate_oauth_state() -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let nonce = uuid::Uuid::new_v4().simple().to_string();

    let mut hasher = DefaultHasher::new();
    format!("{}:{}", nonce, OAuthConfig::state_secret()).hash(&mut hasher);

    format!("{}{:x}", nonce, hasher.finish())
}

/// OAuth state 검증
// TODO: Redis에 state를 TTL과 함께 저장하고 콜백에서 대조하는 검증으로 교체
fn verify_oauth_state(state: &str) -> Result<(), AppError> {
    if state.is_empty() {
        return Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_email_registers() {
        assert!(matches!(match_account(None), AccountMatch::Register));
    }

    #[test]
    fn test_existing_google_account_logs_in() {
        let user = User::new_oauth(
            "dev@gmail.com".to_string(),
            "dev".to_string(),
            "개발자".to_string(),
            AuthProvider::Google,
            "google-sub-123".to_string(),
            None,
        );

        match match_account(Some(user)) {
            AccountMatch::Login(logged_in) => assert_eq!(logged_in.email, "dev@gmail.com"),
            _ => panic!("Google 계정은 로그인되어야 함"),
        }
    }

    #[test]
    fn test_local_account_with_same_email_conflicts() {
        let user = User::new_local(
            "dev@example.com".to_string(),
            "dev".to_string(),
            "개발자".to_string(),
            "$2b$12$hash".to_string(),
        );

        assert!(matches!(match_account(Some(user)), AccountMatch::Conflict(_)));
    }

    #[test]
    fn test_username_slug_is_lowercase_with_underscores() {
        assert_eq!(slugify_username("Jane Doe"), "jane_doe");
    }

    #[test]
    fn test_empty_oauth_state_is_rejected() {
        assert!(verify_oauth_state("").is_err());
        assert!(verify_oauth_state(&generate_oauth_state()).is_ok());
    }

    #[test]
    fn test_oauth_states_are_unpredictable() {
        assert_ne!(generate_oauth_state(), generate_oauth_state());
    }
}
