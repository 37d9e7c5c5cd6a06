//! AuthMiddleware의 요청별 인증 로직
//!
//! 검증된 토큰의 `sub` 클레임이 [`AuthenticatedUser::user_id`]로 들어가며,
//! 프로필 핸들러는 이 값을 `identity_id` 키로 그대로 사용합니다.
//!
//! 인증/역할 판정은 [`decide`]에 순수 함수로 모여 있고, `Service` 구현은
//! 그 판정을 HTTP 응답으로 옮기기만 합니다.
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::auth::authentication_request::{AuthMode, RequiredRole};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

/// [`decide`]의 결과. 요청을 통과시키거나 즉시 응답으로 끊습니다.
#[derive(Debug)]
enum Decision {
    /// 통과. Some이면 핸들러가 쓸 수 있게 extensions에 싣습니다.
    Proceed(Option<AuthenticatedUser>),
    /// 401. 토큰이 없거나 검증 실패
    Unauthorized,
    /// 403. 토큰은 유효하지만 역할이 모자람
    Forbidden,
}

/// 인증 결과와 모드/역할 요건을 합쳐 요청의 운명을 결정합니다.
///
/// Optional 모드는 어떤 경우에도 요청을 끊지 않습니다. 역할이 모자라면
/// 사용자 정보를 싣지 않은 채 익명처럼 통과시킵니다.
fn decide(
    mode: &AuthMode,
    required_role: Option<&RequiredRole>,
    auth_result: Result<AuthenticatedUser, AppError>,
) -> Decision {
    let user = match auth_result {
        Ok(user) => user,
        Err(err) => {
            return match mode {
                AuthMode::Required => {
                    log::warn!("인증 실패: {}", err);
                    Decision::Unauthorized
                }
                AuthMode::Optional => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                    Decision::Proceed(None)
                }
            };
        }
    };

    let role_ok = required_role.is_none_or(|required| required.is_satisfied(&user.roles));

    if role_ok {
        log::debug!("인증 성공: 사용자 ID {}", user.user_id);
        return Decision::Proceed(Some(user));
    }

    match mode {
        AuthMode::Required => {
            log::warn!(
                "권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                user.user_id, user.roles, required_role
            );
            Decision::Forbidden
        }
        AuthMode::Optional => {
            log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
            Decision::Proceed(None)
        }
    }
}

/// 요청 헤더의 JWT를 검증하여 AuthenticatedUser로 변환
fn authenticate_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        auth_provider: claims.auth_provider,
        roles: claims.roles,
    })
}

fn reject<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();
            let auth_result = authenticate_request(&req, &token_service);

            match decide(&mode, required_role.as_ref(), auth_result) {
                Decision::Unauthorized => {
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    return Ok(reject(req, response));
                }
                Decision::Forbidden => {
                    let response = HttpResponse::Forbidden().json(serde_json::json!({
                        "error": "insufficient_permissions",
                        "message": "접근 권한이 부족합니다"
                    }));
                    return Ok(reject(req, response));
                }
                Decision::Proceed(Some(user)) => {
                    req.extensions_mut().insert(user);
                }
                Decision::Proceed(None) => {}
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;

    fn member() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            auth_provider: AuthProvider::Local,
            roles: vec!["user".to_string()],
        }
    }

    fn admin_only() -> RequiredRole {
        RequiredRole::any_of(vec!["admin".to_string()])
    }

    #[test]
    fn test_required_mode_rejects_failed_authentication() {
        let result = Err(AppError::AuthenticationError("토큰 없음".to_string()));

        assert!(matches!(
            decide(&AuthMode::Required, None, result),
            Decision::Unauthorized
        ));
    }

    #[test]
    fn test_required_mode_rejects_missing_role_with_forbidden() {
        let required = admin_only();

        assert!(matches!(
            decide(&AuthMode::Required, Some(&required), Ok(member())),
            Decision::Forbidden
        ));
    }

    #[test]
    fn test_required_mode_passes_user_with_sufficient_role() {
        let required = RequiredRole::any_of(vec!["user".to_string(), "admin".to_string()]);

        match decide(&AuthMode::Required, Some(&required), Ok(member())) {
            Decision::Proceed(Some(user)) => assert_eq!(user.user_id, member().user_id),
            other => panic!("통과해야 하는데 {:?}", other),
        }
    }

    #[test]
    fn test_optional_mode_never_blocks() {
        let failed = Err(AppError::AuthenticationError("토큰 없음".to_string()));
        assert!(matches!(
            decide(&AuthMode::Optional, None, failed),
            Decision::Proceed(None)
        ));

        let required = admin_only();
        assert!(matches!(
            decide(&AuthMode::Optional, Some(&required), Ok(member())),
            Decision::Proceed(None)
        ));
    }
}
