//! 프로필 도메인의 비즈니스 로직을 담당하는 서비스 모듈
//!
//! [`ProfileService`](profile_service::ProfileService)를 통해 프로필 조회,
//! payload 갱신, 구독 상태 변경을 제공합니다. `#[service]` 매크로를 사용하여
//! 싱글톤으로 관리됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::profiles::profile_service::ProfileService;
//!
//! let profile_service = ProfileService::instance();
//! let profile = profile_service.get_profile("507f1f77bcf86cd799439011").await?;
//! ```

pub mod profile_service;

pub use profile_service::ProfileService;
