use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 토큰 검증 후 요청 확장에 주입하며, 핸들러는
/// `FromRequest` 추출자로 꺼내 씁니다. `user_id`는 JWT subject이자
/// 프로필 저장소의 `identity_id` 키입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (User ObjectId hex)
    pub user_id: String,

    /// 인증 프로바이더
    pub auth_provider: AuthProvider,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    /// 미들웨어가 싣지 않은 요청에서 추출하면 401입니다. 보호되지 않은
    /// 라우트에 이 추출자를 붙이면 항상 실패하므로 라우트 구성 실수를
    /// 초기에 드러냅니다.
    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extraction_without_middleware_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::from_request(&req, &mut actix_web::dev::Payload::None).await;

        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_extraction_returns_injected_user() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            auth_provider: AuthProvider::Local,
            roles: vec!["user".to_string()],
        });

        let user = AuthenticatedUser::from_request(&req, &mut actix_web::dev::Payload::None)
            .await
            .unwrap();

        assert_eq!(user.user_id, "507f1f77bcf86cd799439011");
    }
}
