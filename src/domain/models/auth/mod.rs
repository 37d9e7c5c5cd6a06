//! # 인증 컨텍스트 모델
//!
//! 인증 미들웨어가 검증을 마친 뒤 요청 확장(request extensions)에 주입하는
//! 모델들을 정의합니다. Spring Security의 `SecurityContextHolder`에 해당합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::{AuthMode, RequiredRole};
