//! 인증 계정 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 `users` 컬렉션을 관리합니다.
//! 이메일/ID 조회는 Redis 캐시를 먼저 확인하며, `#[repository]` 매크로로
//! 싱글톤으로 관리됩니다. 계정의 ObjectId hex는 프로필 저장소의
//! `identity_id` 키가 됩니다.
//! 
//! # Examples
//! 
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//! 
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;
