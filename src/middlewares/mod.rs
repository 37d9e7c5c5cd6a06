//! 미들웨어 모듈
//!
//! Spring의 Filter/Interceptor에 해당하는 요청 파이프라인 구성 요소입니다.
//! 현재는 JWT 인증 미들웨어 하나로, Bearer 토큰을 검증해 사용자 정보를
//! request extension에 싣습니다.
//!
//! ```rust,ignore
//! web::scope("/api/v1/profile")
//!     .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
//!     .service(get_profile)
//! ```
//!
//! 공개 스코프에는 아예 wrap을 하지 않거나, 토큰이 있을 때만 검증하는
//! `AuthMiddleware::optional()`을 씁니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
