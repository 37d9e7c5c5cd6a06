//! API 라우트 구성
//!
//! | 스코프 | 인증 | 내용 |
//! |--------|------|------|
//! | `/health` | 없음 | 헬스체크 |
//! | `/api/v1/users` | 없음 | 가입/조회/삭제 |
//! | `/api/v1/auth` | 없음 (자체 인증 플로우) | 로그인, 토큰, OAuth |
//! | `/api/v1/profile` | user 또는 admin 역할 | payload/구독 상태 |
//!
//! 보호 스코프는 [`AuthMiddleware`]로 감싸고, 핸들러는 미들웨어가
//! 실어준 `AuthenticatedUser`를 추출자로 받습니다.

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_profile_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user)
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::local_login)
            .service(handlers::auth::verify_token)
            .service(handlers::auth::get_current_user)
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::google_login_url)
            .service(handlers::auth::google_oauth_callback)
    );
}

/// 프로필 라우트. 대상 프로필은 항상 토큰의 subject로 결정됩니다
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profile")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::profiles::get_profile)
            .service(handlers::profiles::update_profile)
            .service(handlers::profiles::update_subscription)
    );
}

/// 헬스체크 엔드포인트
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "profile_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "profile_service_backend");
    }
}
