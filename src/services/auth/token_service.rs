//! # JWT 토큰 서비스
//!
//! HMAC-SHA256으로 서명한 액세스/리프레시 토큰의 발급과 검증을 담당합니다.
//! 토큰의 `sub`는 User의 ObjectId hex이며, 프로필 저장소의 `identity_id`
//! 키로 그대로 쓰입니다. 서명 비밀키와 만료 시간은 [`JwtConfig`]에서 옵니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;
use crate::domain::token::token::{TokenClaims, TokenPair};

/// JWT 발급/검증 서비스
///
/// 상태가 없으므로 `#[service]` 싱글톤으로만 관리하며 주입 의존성이 없습니다.
#[service(name="token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 액세스 토큰 발급 (기본 24시간)
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        sign_token(user, Duration::hours(JwtConfig::expiration_hours()))
    }

    /// 리프레시 토큰 발급 (기본 7일)
    ///
    /// 클레임 구조는 액세스 토큰과 같고 만료만 깁니다. 클라이언트는
    /// Secure HttpOnly 쿠키에 보관하는 것을 권장합니다.
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        sign_token(user, Duration::days(JwtConfig::refresh_expiration_days()))
    }

    /// 액세스/리프레시 토큰 쌍 발급
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user)?,
            refresh_token: Some(self.generate_refresh_token(user)?),
            expires_in: JwtConfig::expiration_hours() * 3600,
        })
    }

    /// 토큰 서명/만료 검증 후 클레임 반환
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode_token(token)
    }

    /// 토큰에서 사용자 ID(subject)만 추출
    pub fn extract_user_id(&self, token: &str) -> Result<String, AppError> {
        Ok(self.verify_token(token)?.sub)
    }

    /// `Bearer {token}` 헤더에서 토큰 부분 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

/// 클레임을 구성해 HS256으로 서명
///
/// ID가 아직 없는 (저장 전) 사용자로는 토큰을 만들 수 없습니다.
fn sign_token(user: &User, ttl: Duration) -> Result<String, AppError> {
    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.clone(),
        auth_provider: user.auth_provider.clone(),
        roles: user.roles.clone(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
        user_id,
        email: Some(user.email.clone()),
    };

    let key = EncodingKey::from_secret(JwtConfig::secret().as_ref());

    encode(&Header::default(), &claims, &key)
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
}

fn decode_token(token: &str) -> Result<TokenClaims, AppError> {
    let key = DecodingKey::from_secret(JwtConfig::secret().as_ref());

    decode::<TokenClaims>(token, &key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            }
            jsonwebtoken::errors::ErrorKind::InvalidToken => {
                AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
            }
            _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn saved_user() -> User {
        let mut user = User::new_local(
            "user@example.com".to_string(),
            "tester".to_string(),
            "Tester".to_string(),
            "bcrypt-hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_signed_token_round_trips_subject_and_roles() {
        let user = saved_user();
        let token = sign_token(&user, Duration::hours(1)).unwrap();

        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.user_id, claims.sub);
        assert_eq!(claims.roles, user.roles);
        assert_eq!(claims.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_unsaved_user_cannot_get_token() {
        // id가 None인 사용자 (아직 DB에 저장되지 않음)
        let user = User::new_local(
            "new@example.com".to_string(),
            "newbie".to_string(),
            "Newbie".to_string(),
            "hash".to_string(),
        );

        let result = sign_token(&user, Duration::hours(1));
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = sign_token(&saved_user(), Duration::hours(1)).unwrap();
        let tampered = format!("{}x", token);

        assert!(decode_token(&tampered).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 이미 만료된 토큰 (음수 TTL)
        let token = sign_token(&saved_user(), Duration::hours(-2)).unwrap();

        let result = decode_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
