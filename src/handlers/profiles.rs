//! # Profile HTTP Handlers
//!
//! 프로필 조회/저장과 구독 상태 변경 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/profile` | 내 프로필 조회 | 200 OK |
//! | `POST` | `/profile` | 내 프로필 payload 저장/갱신 | 200 OK |
//! | `POST` | `/profile/subscription` | 구독 상태 변경 | 200 OK |
//!
//! ## 식별자 정책
//!
//! 모든 엔드포인트는 인증 미들웨어를 거치며, 대상 프로필의 식별자는
//! 항상 검증된 토큰의 subject(`AuthenticatedUser::user_id`)에서 옵니다.
//! 경로나 본문으로 받은 식별자는 사용하지 않으므로 다른 사용자의
//! 프로필에 접근할 방법이 없습니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::profiles::request::{UpdateProfileRequest, UpdateSubscriptionRequest};
use crate::services::profiles::profile_service::ProfileService;

/// 내 프로필 조회
///
/// 정리된 프로필은 payload가 `{}`인 채로 200 응답됩니다.
/// 아직 저장된 적 없는 프로필은 404입니다.
#[get("")]
pub async fn get_profile(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ProfileService::instance();
    let profile = service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 내 프로필 payload 저장/갱신
///
/// payload 전체 교체 시맨틱입니다. 최상위가 JSON object가 아니면
/// 400으로 거부됩니다.
#[post("")]
pub async fn update_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProfileService::instance();
    let profile = service
        .update_profile(&user.user_id, payload.into_inner().payload)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 구독 상태 변경
///
/// 해지(`subscribed: false`) 시점부터 보존 유예 기간이 시작됩니다.
#[post("/subscription")]
pub async fn update_subscription(
    user: AuthenticatedUser,
    payload: web::Json<UpdateSubscriptionRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ProfileService::instance();
    let profile = service
        .update_subscription(&user.user_id, payload.subscribed)
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
