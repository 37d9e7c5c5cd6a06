//! # 사용자 관리 서비스
//!
//! 계정 가입, 조회, 삭제, 자격 증명 검증을 담당합니다. Spring의
//! UserService + UserDetailsService 역할에 해당합니다.
//!
//! 보안 규칙:
//!
//! - 비밀번호는 환경별 cost(개발 4, 운영 12)의 bcrypt 해시로만 저장
//! - 외부 응답은 항상 DTO로 변환해 해시 등 민감 필드를 제외
//! - 이메일 미존재와 비밀번호 불일치는 같은 메시지로 응답해 계정
//!   존재 여부를 노출하지 않음

use std::sync::Arc;
use bcrypt::hash;
use singleton_macro::service;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::CreateUserRequest,
            response::{UserResponse, CreateUserResponse},
        },
    },
    repositories::users::user_repo::UserRepository,
    core::errors::AppError,
};
use crate::config::PasswordConfig;

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

/// 사용자 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로로 싱글톤 관리되고 UserRepository가 주입됩니다.
///
/// ```rust,ignore
/// let response = UserService::instance().create_user(request).await?;
/// ```
#[service(name = "user")]
pub struct UserService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 등록 (로컬 인증)
    ///
    /// 이메일/사용자명 중복은 리포지토리에서 ConflictError로 올라옵니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, AppError> {
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(
            request.email,
            request.username,
            request.display_name,
            password_hash,
        );

        let created_user = self.user_repo.create(user).await?;

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// ID로 사용자 조회 (민감 필드 제거된 DTO 반환)
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// ID로 사용자 엔티티 조회 (내부용)
    ///
    /// 토큰 갱신처럼 엔티티 자체가 필요한 호출자를 위한 경로입니다.
    /// 외부 응답에는 `get_user_by_id`의 DTO를 쓰세요.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_id(id).await
    }

    /// 사용자 삭제 (물리적 삭제)
    ///
    /// 연관 프로필 데이터는 보존 정리 작업이 아닌 별도 정책으로 다룹니다.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        if !self.user_repo.delete(id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 이메일/비밀번호 자격 증명 검증. 성공 시 토큰 발급용 엔티티 반환
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        check_credentials(&user, password)?;

        Ok(user)
    }
}

/// 조회된 계정에 대한 비밀번호/상태 검증
///
/// 검사 순서가 곧 응답 메시지를 결정합니다. OAuth 계정은 구체적으로
/// 안내하고, 비밀번호 불일치는 이메일 미존재와 같은 메시지를 씁니다.
fn check_credentials(user: &User, password: &str) -> Result<(), AppError> {
    if !user.can_authenticate_with_password() {
        return Err(AppError::AuthenticationError(
            "OAuth 계정입니다. 해당 프로바이더로 로그인해주세요".to_string(),
        ));
    }

    let password_hash = user.password_hash.as_ref()
        .ok_or_else(|| AppError::InternalError("비밀번호 해시가 없습니다".to_string()))?;

    let verify_start = std::time::Instant::now();
    let is_valid = bcrypt::verify(password, password_hash)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
    log::debug!("Password verification took: {:?}", verify_start.elapsed());

    if !is_valid {
        return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
    }

    if !user.is_active {
        return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;

    // 테스트는 최저 cost로 해싱 시간을 줄입니다
    fn local_user(password: &str) -> User {
        let password_hash = hash(password, 4).unwrap();
        User::new_local(
            "dev@example.com".to_string(),
            "dev".to_string(),
            "개발자".to_string(),
            password_hash,
        )
    }

    #[test]
    fn test_correct_password_passes() {
        let user = local_user("correct-horse");

        assert!(check_credentials(&user, "correct-horse").is_ok());
    }

    #[test]
    fn test_wrong_password_uses_generic_message() {
        let user = local_user("correct-horse");

        match check_credentials(&user, "battery-staple") {
            Err(AppError::AuthenticationError(message)) => {
                assert_eq!(message, INVALID_CREDENTIALS);
            }
            other => panic!("인증 에러가 나와야 하는데 {:?}", other),
        }
    }

    #[test]
    fn test_oauth_account_cannot_use_password_login() {
        let user = User::new_oauth(
            "dev@gmail.com".to_string(),
            "dev".to_string(),
            "개발자".to_string(),
            AuthProvider::Google,
            "google-sub-123".to_string(),
            None,
        );

        assert!(matches!(
            check_credentials(&user, "irrelevant"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_inactive_account_is_rejected_even_with_correct_password() {
        let mut user = local_user("correct-horse");
        user.is_active = false;

        match check_credentials(&user, "correct-horse") {
            Err(AppError::AuthenticationError(message)) => {
                assert_eq!(message, "비활성화된 계정입니다");
            }
            other => panic!("인증 에러가 나와야 하는데 {:?}", other),
        }
    }
}
