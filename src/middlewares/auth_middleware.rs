//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//! `/api/v1/profile` 스코프는 이 미들웨어로 보호됩니다.
//!
//! ```rust,ignore
//! web::scope("/api/v1/profile")
//!     .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::auth::authentication_request::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어 설정
///
/// `wrap()` 시점의 선언일 뿐이고, 요청별 판정은
/// [`AuthMiddlewareService`]가 수행합니다.
pub struct AuthMiddleware {
    mode: AuthMode,
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 토큰만 요구하고 역할은 보지 않는 필수 인증
    pub fn required() -> Self {
        Self { mode: AuthMode::Required, required_role: None }
    }

    /// 토큰이 있으면 검증하되 없어도 통과시키는 선택적 인증
    pub fn optional() -> Self {
        Self { mode: AuthMode::Optional, required_role: None }
    }

    /// 나열된 역할 중 하나를 요구하는 필수 인증 (OR 조건)
    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        let roles = roles.into_iter().map(|s| s.to_string()).collect();
        Self {
            mode: AuthMode::Required,
            required_role: Some(RequiredRole::any_of(roles)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_requirement_is_or_semantics() {
        let middleware = AuthMiddleware::required_with_roles(vec!["admin", "moderator"]);

        let required = middleware.required_role.expect("역할 요구가 설정되어야 함");
        assert!(required.is_satisfied(&["moderator".to_string()]));
        assert!(!required.is_satisfied(&["user".to_string()]));
    }

    #[test]
    fn test_plain_constructors_set_mode_only() {
        let required = AuthMiddleware::required();
        assert_eq!(required.mode, AuthMode::Required);
        assert!(required.required_role.is_none());

        let optional = AuthMiddleware::optional();
        assert_eq!(optional.mode, AuthMode::Optional);
        assert!(optional.required_role.is_none());
    }
}
