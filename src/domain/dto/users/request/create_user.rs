//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! Spring Boot의 `@Valid @RequestBody` 패턴처럼 역직렬화와 검증을 함께 수행합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// ## 검증 규칙
///
/// - `email`: RFC 5322 이메일 형식
/// - `username`: 3-30자, 알파벳/숫자/언더스코어만 허용
/// - `display_name`: 1-50자, 유니코드 지원
/// - `password`: 최소 8자, 대문자/소문자/숫자 각 1개 이상
/// - `password_confirm`: `password`와 일치 (구조체 수준 검증)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let req = CreateUserRequest {
///     email: "user@example.com".to_string(),
///     username: "john_doe".to_string(),
///     display_name: "John Doe".to_string(),
///     password: "SecurePass123".to_string(),
///     password_confirm: "SecurePass123".to_string(),
/// };
/// req.validate()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (로그인 식별자)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자명 (URL과 식별자로 사용되므로 안전한 문자만 허용)
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 표시 이름
    #[validate(length(
        min = 1,
        max = 50,
        message = "표시 이름은 1-50자 사이여야 합니다"
    ))]
    pub display_name: String,

    /// 계정 비밀번호
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 비밀번호 확인 (password와 일치해야 함)
    pub password_confirm: String,
}

/// 비밀번호 일치 여부를 검증하는 구조체 수준 검증 함수
fn validate_passwords_match(req: &CreateUserRequest) -> Result<(), ValidationError> {
    if req.password != req.password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

/// 사용자명 형식 검증 (알파벳, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_digit(10));

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            email: "user@example.com".to_string(),
            username: "john_doe".to_string(),
            display_name: "John Doe".to_string(),
            password: "SecurePass123".to_string(),
            password_confirm: "SecurePass123".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut req = valid_request();
        req.password_confirm = "Different123".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_weak_password_rejected() {
        let mut req = valid_request();
        req.password = "alllowercase1".to_string();
        req.password_confirm = req.password.clone();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_username_with_hyphen_rejected() {
        let mut req = valid_request();
        req.username = "john-doe".to_string();
        assert!(req.validate().is_err());
    }
}
