//! # 사용자 엔티티
//!
//! 로컬 인증과 OAuth 인증을 하나의 모델로 표현합니다. 저장된 계정의
//! ObjectId hex가 JWT subject이자 프로필 저장소의 `identity_id`입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::oauth::google_oauth_model::oauth_provider::OAuthData;

/// 사용자 엔티티
///
/// `password_hash`는 로컬 계정에만, `oauth_data`는 OAuth 계정에만
/// 존재합니다. 두 필드가 동시에 Some인 문서는 만들어지지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이메일 (unique 인덱스)
    pub email: String,
    /// 사용자명 (unique 인덱스)
    pub username: String,
    pub display_name: String,
    /// bcrypt 해시. OAuth 계정은 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub auth_provider: AuthProvider,
    /// 프로바이더 측 식별 정보. 로컬 계정은 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_data: Option<OAuthData>,
    pub is_active: bool,
    /// 로컬 계정은 false로 시작, OAuth 계정은 프로바이더가 이미 검증함
    pub is_email_verified: bool,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 이메일/비밀번호 가입용 로컬 계정
    pub fn new_local(email: String, username: String, display_name: String, password_hash: String) -> Self {
        let mut user = Self::base(email, username, display_name, AuthProvider::Local);
        user.password_hash = Some(password_hash);
        user
    }

    /// OAuth 콜백에서 처음 본 사용자를 위한 계정
    pub fn new_oauth(
        email: String,
        username: String,
        display_name: String,
        auth_provider: AuthProvider,
        provider_user_id: String,
        provider_profile_image: Option<String>,
    ) -> Self {
        let mut user = Self::base(email, username, display_name, auth_provider);
        user.oauth_data = Some(OAuthData {
            provider_user_id,
            provider_profile_image: provider_profile_image.clone(),
            provider_data: None,
        });
        user.is_email_verified = true;
        user.profile_image_url = provider_profile_image;
        user
    }

    fn base(email: String, username: String, display_name: String, auth_provider: AuthProvider) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            display_name,
            password_hash: None,
            auth_provider,
            oauth_data: None,
            is_active: true,
            is_email_verified: false,
            roles: vec!["user".to_string()],
            profile_image_url: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장된 계정의 hex ID. JWT subject이자 프로필 `identity_id`
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_local_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local)
    }

    /// 비밀번호 로그인 가능 여부. OAuth 계정은 항상 false
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_user() -> User {
        User::new_local(
            "dev@example.com".to_string(),
            "dev".to_string(),
            "개발자".to_string(),
            "$2b$12$hash".to_string(),
        )
    }

    #[test]
    fn test_local_account_starts_unverified_and_can_use_password() {
        let user = local_user();

        assert!(!user.is_email_verified);
        assert!(user.can_authenticate_with_password());
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_oauth_account_is_preverified_and_rejects_password_login() {
        let user = User::new_oauth(
            "dev@gmail.com".to_string(),
            "dev_google".to_string(),
            "개발자".to_string(),
            AuthProvider::Google,
            "google-sub-123".to_string(),
            Some("https://lh3.example.com/photo.jpg".to_string()),
        );

        assert!(user.is_email_verified);
        assert!(!user.can_authenticate_with_password());
        assert!(user.password_hash.is_none());
        assert_eq!(user.profile_image_url.as_deref(), Some("https://lh3.example.com/photo.jpg"));
    }

    #[test]
    fn test_saved_account_exposes_hex_id() {
        let mut user = local_user();
        let oid = ObjectId::new();
        user.id = Some(oid);

        assert_eq!(user.id_string().unwrap(), oid.to_hex());
    }
}
