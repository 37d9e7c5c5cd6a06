//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 도메인의 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@RequestBody`와 유사하게, 클라이언트로부터 받은 JSON을
//! 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 이메일, 길이, 패턴 등 기본 형식 규칙 (validator)
//! 3. **비즈니스 검증**: 도메인 특화 규칙 (비밀번호 강도 등)
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 상위 에러 핸들러에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod create_user;
pub mod auth_request;

pub use create_user::CreateUserRequest;
pub use auth_request::{LocalLoginRequest, OAuthCallbackQuery, RefreshTokenRequest};
