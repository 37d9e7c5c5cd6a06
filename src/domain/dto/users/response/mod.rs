//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 도메인의 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@ResponseBody`와 유사하게, 비즈니스 로직 처리 결과를
//! 클라이언트에게 일관된 형태로 전달합니다.
//!
//! ## 응답 DTO 계층
//!
//! - `UserResponse`: 표준 사용자 정보 응답 (민감 정보 제외)
//! - `CreateUserResponse`: 회원가입 완료 응답
//! - `GoogleTokenResponse` / `OAuthLoginUrlResponse`: Google OAuth 플로우 응답
//!
//! ## 보안 고려사항
//!
//! - 비밀번호 해시 등 민감 정보는 응답에 포함하지 않음
//! - 사용자 권한에 따라 필드 노출 제어

pub mod user_response;
pub mod google_oauth_response;

pub use user_response::{UserResponse, CreateUserResponse};
pub use google_oauth_response::{GoogleTokenResponse, OAuthLoginUrlResponse};
