//! # Google OAuth 2.0 Domain Models
//!
//! Google OAuth 2.0 인증 플로우와 관련된 도메인 모델들을 정의합니다.
//! Google의 OAuth 2.0 API와 OpenID Connect 표준을 준수합니다.
//!
//! ## 모듈 구성
//!
//! - `google_user`: UserInfo API 응답 (`GoogleUserInfo`)
//! - `oauth_provider`: User 엔티티에 내장되는 프로바이더 데이터 (`OAuthData`)

pub mod google_user;
pub mod oauth_provider;
