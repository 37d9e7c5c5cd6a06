//! 프로필 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`ProfileRepository`](profile_repo::ProfileRepository)를 통해 MongoDB 기반
//! 프로필 데이터 관리와 Redis 캐싱을 제공합니다. 정리 작업이 사용하는
//! 조회/일괄 정리 연산도 이 모듈에 구현되어 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::profiles::profile_repo::ProfileRepository;
//!
//! let profile_repo = ProfileRepository::instance();
//! let profile = profile_repo.find_by_identity_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod profile_repo;

pub use profile_repo::ProfileRepository;
