//! # Application Error Handling System
//!
//! 프로필/인증 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler` 메커니즘을 Rust의 타입 시스템과
//! 결합하여 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 철학
//!
//! - **계층별 분류**: 인프라(DB/Redis/외부 API), 비즈니스, 보안 계층 에러를 구분
//! - **자동 HTTP 변환**: `ResponseError` 구현으로 모든 에러가 표준 JSON 응답으로 변환
//! - **컨텍스트 보존**: `thiserror` 기반으로 원본 에러 정보를 손실 없이 전달
//!
//! ## 데이터 보존(retention) 작업에서의 에러 규약
//!
//! 백그라운드 정리 작업은 에러 종류에 따라 동작이 달라집니다:
//!
//! | 에러 | 정리 작업의 동작 |
//! |------|------------------|
//! | `DatabaseError` | 이번 실행 전체를 중단하고 로그 남김. 다음 스케줄에 재시도 |
//! | `SerializationError` | 해당 프로필만 건너뛰고 나머지는 계속 처리 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! impl ProfileService {
//!     async fn get_profile(&self, identity_id: &str) -> AppResult<Profile> {
//!         self.profile_repo.find_by_identity_id(identity_id).await?
//!             .ok_or_else(|| AppError::NotFound(
//!                 format!("Profile for {} not found", identity_id)
//!             ))
//!     }
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `AuthorizationError` | 403 Forbidden |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | 나머지 모든 에러 | 500 Internal Server Error |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트로 `Error` trait을 자동 구현하고,
/// `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환 (저장소 장애)
/// profiles.find_one(doc! { "identity_id": id }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // BSON 역직렬화 실패 (해당 문서만 스킵)
/// let profile: Profile = bson::from_document(doc)
///     .map_err(|e| AppError::SerializationError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산(쿼리, 쓰기, 트랜잭션 커밋) 중 발생하는 오류입니다.
    /// 저장소 자체에 접근할 수 없는 상황을 포함하며, 정리 작업에서는
    /// 이 에러가 발생하면 실행을 통째로 중단합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    ///
    /// Redis 서버와의 통신 오류나 캐시 연산 실패를 나타냅니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 직렬화/역직렬화 에러
    ///
    /// 저장된 문서를 엔티티로 복원하지 못했거나, 페이로드를 BSON으로
    /// 변환하지 못한 경우입니다. 컬렉션 스캔 중 발생하면 문제의 문서만
    /// 건너뛰고 처리를 계속합니다.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 형식 요구사항을 만족하지 않을 때
    /// 발생합니다. 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청한 사용자나 프로필이 존재하지 않을 때 발생합니다.
    /// 404 Not Found로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 중복 이메일 가입 시도 등 비즈니스 규칙 위반 시 발생합니다.
    /// 409 Conflict로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// 잘못된 로그인 정보, 만료된 JWT, OAuth 인증 실패 등
    /// 사용자의 신원을 확인할 수 없을 때 발생합니다. 401로 응답됩니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    ///
    /// 인증은 되었으나 해당 작업을 수행할 역할이 없을 때 발생합니다.
    /// 403 Forbidden으로 응답됩니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러
    ///
    /// Google OAuth 토큰 교환 등 써드파티 API 호출 실패 시 발생합니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류나 의존성 주입 실패 시 발생합니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 표준 JSON 형식으로
    /// 변환합니다. 모든 에러 응답은 `{"error": "message"}` 형태를 따릅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn find_profile(id: &str) -> AppResult<Option<Profile>> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let session = client.start_session().await
///     .context("Failed to start purge transaction session")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Payload must be a JSON object".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Profile not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_serialization_error_response() {
        let error = AppError::SerializationError("invalid BSON document".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
