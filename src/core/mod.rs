//! # 코어 프레임워크
//!
//! 서비스/리포지토리 계층이 올라서는 바닥 두 장입니다.
//!
//! - [`registry`]: `inventory` 기반 싱글톤 레지스트리. Spring의
//!   ApplicationContext 자리에 해당하며, `#[service]`/`#[repository]`
//!   매크로가 등록한 타입을 `ServiceLocator`가 `Arc<T>`로 꺼내 줍니다.
//! - [`errors`]: 전역 에러 타입 `AppError`와 Actix `ResponseError`
//!   구현. 모든 핸들러가 `Result<HttpResponse, AppError>`를 반환합니다.
//!
//! ```rust,ignore
//! #[repository(name = "profile", collection = "profiles")]
//! struct ProfileRepository {
//!     db: Arc<Database>,        // 자동 주입
//!     redis: Arc<RedisClient>,  // 자동 주입
//! }
//!
//! let repo = ProfileRepository::instance();
//! ```
//!
//! 단, 프로세스 생명주기에 묶여야 하는 컴포넌트(백그라운드 데이터 정리
//! 작업 등)는 의도적으로 ServiceLocator 바깥에서 소유권 기반 핸들로
//! 관리합니다. [`crate::services::retention`] 참고.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
