//! # JWT 토큰 모델
//!
//! JWT 클레임과 토큰 쌍 구조체를 정의합니다.

pub mod token;

pub use token::{TokenClaims, TokenPair};
