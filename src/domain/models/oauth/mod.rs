//! # OAuth Domain Models Module
//!
//! OAuth 2.0 인증 플로우와 관련된 도메인 모델들을 정의하는 모듈입니다.
//! 다양한 OAuth 프로바이더(Google, GitHub, Microsoft 등)와의 통합을 위한
//! 타입 안전한 데이터 모델을 제공합니다.
//!
//! ## 현재 지원 프로바이더
//!
//! - **Google**: `google_oauth_model` (UserInfo API 응답, 프로바이더 데이터)
//!
//! 새 프로바이더를 추가할 때는 프로바이더별 하위 모듈을 만들고
//! 해당 API의 응답 구조체를 정의합니다.

pub mod google_oauth_model;
