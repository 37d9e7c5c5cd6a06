//! 리포지토리 계층
//!
//! `#[repository]` 매크로의 싱글톤으로 관리되는 데이터 액세스
//! 계층입니다. MongoDB가 원본 저장소, Redis가 조회 캐시입니다.
//! [`users`]는 인증 계정, [`profiles`]는 반정형 프로필 문서를 다룹니다.

pub mod users;
pub mod profiles;
