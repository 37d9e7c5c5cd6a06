//! # 사용자 계정 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 | 성공 응답 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 가입 | 201 Created |
//! | `GET` | `/users/{id}` | 조회 | 200 OK |
//! | `DELETE` | `/users/{id}` | 삭제 | 204 No Content |
//!
//! Spring의 `@RestController`에 대응합니다. `@Autowired` 자리에는
//! `UserService::instance()`, `@Valid` 자리에는 핸들러 첫 줄의
//! `payload.validate()`가 옵니다. 검증 실패는
//! `AppError::ValidationError`를 거쳐 400으로 나갑니다.

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::user_service::UserService;

/// 가입. 이메일/사용자명 중복은 409 Conflict
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = UserService::instance()
        .create_user(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// ID로 조회. 응답 DTO에는 비밀번호 해시가 포함되지 않습니다
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = UserService::instance().get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 삭제. 존재하지 않는 ID는 404
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    UserService::instance().delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
