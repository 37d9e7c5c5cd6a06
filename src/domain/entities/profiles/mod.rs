//! Profiles Entity Module
//!
//! 반정형 사용자 프로필 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::profiles::Profile;
//!
//! // 빈 페이로드, 미구독 상태로 시작
//! let profile = Profile::new("user_abc".to_string());
//! ```

pub mod profile;

pub use profile::Profile;
