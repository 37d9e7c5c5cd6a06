//! # 데이터 보존 정리 서비스 모듈
//!
//! 구독을 해지한 지 유예 기간이 지난 프로필의 payload를 비우는
//! 보존 정책(retention policy) 구현입니다.
//!
//! ## 구성
//!
//! - [`policy`]: 순수 함수로 구현된 정리 대상 판정 로직과 시계 추상화
//! - [`purge_job`]: 주기적으로 판정과 정리를 수행하는 백그라운드 작업
//!
//! ## 설계 노트
//!
//! 다른 서비스들과 달리 정리 작업은 `#[service]` 싱글톤으로 등록하지
//! 않습니다. 작업 핸들을 소유한 쪽(main)이 시작과 중지를 명시적으로
//! 제어해야 종료 시 남는 백그라운드 태스크가 없기 때문입니다.
//!
//! ```rust,ignore
//! use crate::services::retention::{PurgeJob, SystemClock};
//!
//! let job = PurgeJob::new(profile_repo, Arc::new(SystemClock), grace_period);
//! let handle = job.start(std::time::Duration::from_secs(86_400));
//! // ... 서버 종료 후
//! handle.stop();
//! ```

pub mod policy;
pub mod purge_job;

pub use policy::{is_eligible_for_purge, Clock, SystemClock};
pub use purge_job::{ProfileStore, PurgeJob, PurgeJobHandle, PurgeOutcome};
