//! # Auth HTTP Handlers
//!
//! 로컬 로그인, Google OAuth 콜백, 토큰 검증/갱신 엔드포인트입니다.
//! 어떤 경로로 로그인하든 같은 모양의 토큰 응답을 돌려주므로
//! 클라이언트는 인증 방식을 구분할 필요가 없습니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/auth/login` | 이메일/패스워드 로그인 |
//! | `GET` | `/auth/google/login` | Google 인증 URL 발급 |
//! | `GET` | `/auth/google/callback` | OAuth 콜백, 계정 매칭/생성 |
//! | `POST` | `/auth/verify` | 액세스 토큰 유효성 확인 |
//! | `GET` | `/auth/me` | 토큰 주인의 최신 계정 정보 |
//! | `POST` | `/auth/refresh` | 리프레시 토큰으로 쌍 재발급 |

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenPair;
use crate::domain::{LocalLoginRequest, OAuthCallbackQuery, RefreshTokenRequest};
use crate::services::auth::{GoogleAuthService, TokenService};
use crate::services::users::UserService;

/// 이메일/패스워드 로그인
///
/// 검증 성공 시 JWT 액세스/리프레시 쌍을 발급합니다. 존재하지 않는
/// 이메일과 틀린 패스워드는 같은 메시지로 응답합니다 (계정 존재 노출 방지).
#[post("/login")]
pub async fn local_login(
    payload: web::Json<LocalLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = UserService::instance()
        .verify_password(&payload.email, &payload.password)
        .await?;

    log::info!("로컬 로그인: {}", payload.email);

    issue_login_response(user)
}

/// Google 로그인 URL 발급
///
/// CSRF 방지용 state가 포함된 인증 페이지 URL을 돌려줍니다.
#[get("/google/login")]
pub async fn google_login_url() -> Result<HttpResponse, AppError> {
    let url_response = GoogleAuthService::instance().get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Google OAuth 콜백
///
/// code를 토큰으로 교환하고 이메일 기준으로 계정을 매칭하거나 새로
/// 만든 뒤, 로컬 로그인과 동일한 토큰 응답을 내보냅니다.
#[get("/google/callback")]
pub async fn google_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 사용자가 동의 화면에서 거부한 경우 code 없이 error만 돌아옴
    if let Some(error) = &query.error {
        let detail = query.error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Google OAuth 거부/실패: {} ({})", error, detail);
        return Err(AppError::AuthenticationError(detail.to_string()));
    }

    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = GoogleAuthService::instance()
        .authenticate_with_code(&query.code, &query.state)
        .await?;

    log::info!("Google OAuth 로그인: {}", user.email);

    issue_login_response(user)
}

/// 액세스 토큰 유효성 확인
///
/// 서명과 만료만 확인하며 DB는 조회하지 않습니다.
#[post("/verify")]
pub async fn verify_token(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let token = token_service.extract_bearer_token(bearer_header(&req)?)?;
    let claims = token_service.verify_token(token)?;

    Ok(HttpResponse::Ok().json(json!({
        "valid": true,
        "user_id": claims.sub,
        "auth_provider": claims.auth_provider
    })))
}

/// 토큰 주인의 최신 계정 정보 조회
///
/// verify와 달리 DB를 다시 읽으므로 역할 변경이나 비활성화가 반영됩니다.
#[get("/me")]
pub async fn get_current_user(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let token = token_service.extract_bearer_token(bearer_header(&req)?)?;
    let user_id = token_service.extract_user_id(token)?;

    let user = UserService::instance()
        .find_by_id(&user_id)
        .await
        .map_err(|_| AppError::AuthenticationError("사용자 조회 중 오류가 발생했습니다".to_string()))?
        .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(account_json(&user)))
}

/// 리프레시 토큰으로 토큰 쌍 재발급
///
/// 토큰은 `refresh_token` 쿠키 또는 요청 본문에서 받습니다.
/// 비활성화된 계정은 유효한 토큰을 갖고 있어도 거부됩니다.
#[post("/refresh")]
pub async fn refresh_tokens(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();

    let refresh_token = extract_refresh_token(&req, body.as_deref())?;

    let claims = token_service
        .verify_token(&refresh_token)
        .map_err(|_| AppError::AuthenticationError("리프레시 토큰이 만료되었거나 유효하지 않습니다".to_string()))?;

    let user = UserService::instance()
        .find_by_id(&claims.sub)
        .await
        .map_err(|_| AppError::InternalError("사용자 조회 중 오류가 발생했습니다".to_string()))?
        .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

    if !user.is_active {
        log::warn!("비활성 계정의 토큰 갱신 시도: {}", claims.sub);
        return Err(AppError::AuthenticationError("계정이 비활성화되었습니다".to_string()));
    }

    let token_pair = token_service.generate_token_pair(&user)?;

    log::info!("토큰 갱신: {}", claims.sub);

    Ok(HttpResponse::Ok().json(json!({
        "access_token": token_pair.access_token,
        "refresh_token": token_pair.refresh_token,
        "expires_in": token_pair.expires_in,
        "token_type": "Bearer"
    })))
}

/// 로그인 성공 공통 응답 생성
///
/// 로컬과 OAuth 양쪽 로그인이 같은 구조를 공유합니다.
fn issue_login_response(user: User) -> Result<HttpResponse, AppError> {
    let token_pair = TokenService::instance()
        .generate_token_pair(&user)
        .map_err(|e| {
            log::error!("토큰 생성 실패: {} ({})", user.email, e);
            AppError::InternalError(format!("토큰 생성 실패: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(login_json(&user, &token_pair)))
}

fn login_json(user: &User, token_pair: &TokenPair) -> serde_json::Value {
    json!({
        "user": account_json(user),
        "access_token": token_pair.access_token,
        "refresh_token": token_pair.refresh_token.clone().unwrap_or_default(),
        "expires_in": token_pair.expires_in,
        "token_type": "Bearer"
    })
}

fn account_json(user: &User) -> serde_json::Value {
    json!({
        "id": user.id_string().unwrap_or_default(),
        "username": user.username,
        "email": user.email,
        "roles": user.roles,
        "auth_provider": user.auth_provider,
        "is_active": user.is_active,
        "created_at": user.created_at,
        "updated_at": user.updated_at
    })
}

fn bearer_header(req: &HttpRequest) -> Result<&str, AppError> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))
}

/// 쿠키 우선, 본문 차선으로 리프레시 토큰 추출
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshTokenRequest>,
) -> Result<String, AppError> {
    if let Some(token) = refresh_token_from_cookie(req) {
        return Ok(token);
    }

    if let Some(body) = body {
        if !body.refresh_token.is_empty() {
            return Ok(body.refresh_token.clone());
        }
    }

    Err(AppError::AuthenticationError(
        "리프레시 토큰이 제공되지 않았습니다".to_string()
    ))
}

fn refresh_token_from_cookie(req: &HttpRequest) -> Option<String> {
    let cookie_header = req.headers().get("Cookie")?.to_str().ok()?;

    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| name.trim() == "refresh_token" && !value.trim().is_empty())
        .map(|(_, value)| value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn body_with(token: &str) -> RefreshTokenRequest {
        RefreshTokenRequest {
            refresh_token: token.to_string(),
        }
    }

    #[test]
    fn test_refresh_token_prefers_cookie_over_body() {
        let req = TestRequest::default()
            .insert_header(("Cookie", "session=abc; refresh_token=from_cookie"))
            .to_http_request();

        let token = extract_refresh_token(&req, Some(&body_with("from_body"))).unwrap();
        assert_eq!(token, "from_cookie");
    }

    #[test]
    fn test_refresh_token_falls_back_to_body() {
        let req = TestRequest::default().to_http_request();

        let token = extract_refresh_token(&req, Some(&body_with("from_body"))).unwrap();
        assert_eq!(token, "from_body");
    }

    #[test]
    fn test_empty_cookie_value_is_ignored() {
        let req = TestRequest::default()
            .insert_header(("Cookie", "refresh_token="))
            .to_http_request();

        let token = extract_refresh_token(&req, Some(&body_with("from_body"))).unwrap();
        assert_eq!(token, "from_body");
    }

    #[test]
    fn test_missing_refresh_token_everywhere_is_an_error() {
        let req = TestRequest::default().to_http_request();

        let result = extract_refresh_token(&req, None);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_missing_authorization_header_is_an_error() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(bearer_header(&req), Err(AppError::AuthenticationError(_))));
    }
}
