//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! entities가 데이터베이스 컬렉션과 매핑되는 영속 객체라면, models는
//! 인증 컨텍스트나 외부 API 응답처럼 저장되지 않는 도메인 개념을 표현합니다.
//!
//! ## Entities vs Models
//!
//! | 구분 | Entities | Models |
//! |------|----------|--------|
//! | 영속성 | MongoDB 컬렉션과 매핑 | 저장되지 않음 |
//! | 예시 | `User`, `Profile` | `AuthenticatedUser`, `TokenClaims` |
//! | 수명 | 데이터베이스 수명 | 요청/토큰 수명 |
//!
//! ## 모듈 구성
//!
//! - `auth`: 미들웨어가 요청에 주입하는 인증 컨텍스트 (`AuthenticatedUser`,
//!   `AuthMode`, `RequiredRole`)
//! - `token`: JWT 클레임과 토큰 쌍 (`TokenClaims`, `TokenPair`)
//! - `oauth`: Google OAuth 플로우의 외부 API 응답 모델

pub mod auth;
pub mod oauth;
pub mod token;
