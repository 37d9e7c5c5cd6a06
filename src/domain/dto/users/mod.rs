//! 사용자/인증 API의 요청·응답 DTO
//!
//! - [`request`]: 회원가입([`request::CreateUserRequest`]), 로그인,
//!   토큰 갱신, OAuth 콜백 쿼리
//! - [`response`]: 민감 필드를 제외한 사용자 정보와 OAuth 응답
//!
//! 요청은 핸들러에서 `validate()`를 거치고, 응답은
//! `impl From<User>`로 엔티티에서 변환합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
