//! 인증 서비스 계층
//!
//! 두 개의 싱글톤 서비스로 구성됩니다.
//!
//! - [`TokenService`]: HS256 JWT 발급/검증과 액세스+리프레시 토큰 쌍 관리.
//!   여기서 발급한 토큰의 `sub`가 프로필 저장소의 `identity_id`가 됩니다.
//! - [`GoogleAuthService`]: Google OAuth 2.0 Authorization Code 플로우와
//!   state 파라미터 기반 CSRF 방지.
//!
//! ```rust,ignore
//! let tokens = TokenService::instance().generate_token_pair(&user)?;
//! let login_url = GoogleAuthService::instance().get_login_url()?;
//! ```

pub mod token_service;
pub mod google_auth_service;

pub use token_service::*;
pub use google_auth_service::*;
