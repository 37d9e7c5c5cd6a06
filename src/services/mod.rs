//! 서비스 계층
//!
//! 비즈니스 로직이 사는 곳입니다. [`users`], [`profiles`], [`auth`]는
//! `#[service]` 매크로의 싱글톤으로 관리되고, [`retention`]의 정리
//! 작업만 예외적으로 소유권 기반 핸들로 main이 직접 들고 있습니다.

pub mod users;
pub mod profiles;
pub mod auth;
pub mod retention;
