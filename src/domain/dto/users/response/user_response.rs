//! 사용자 응답 DTO
//!
//! 패스워드 해시 등 내부 필드를 제거한 외부 공개용 사용자 표현입니다.

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;
use crate::config::AuthProvider;

/// 사용자 응답 DTO
///
/// `password_hash`, `oauth_data` 같은 내부 필드는 구조 분해에서 버려집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub display_name: String,

    /// 인증 프로바이더 (Local, Google 등)
    pub auth_provider: AuthProvider,

    /// OAuth 사용자인지 여부 (편의 필드)
    pub is_oauth_user: bool,

    pub is_active: bool,
    pub is_email_verified: bool,
    pub roles: Vec<String>,
    pub profile_image_url: Option<String>,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            username,
            display_name,
            auth_provider,
            is_active,
            is_email_verified,
            roles,
            profile_image_url,
            last_login_at,
            created_at,
            updated_at,
            ..
        } = user;

        let is_oauth_user = !matches!(auth_provider, AuthProvider::Local);

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            username,
            display_name,
            auth_provider,
            is_oauth_user,
            is_active,
            is_email_verified,
            roles,
            profile_image_url,
            last_login_at,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_excludes_password_hash() {
        let user = User::new_local(
            "user@example.com".to_string(),
            "tester".to_string(),
            "Tester".to_string(),
            "bcrypt-hash".to_string(),
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["is_oauth_user"], false);
    }
}
