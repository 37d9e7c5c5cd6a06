//! # 설정 모듈
//!
//! 환경 변수를 한곳에서 읽는 정적 설정 계층입니다. Spring의
//! `@Configuration` + `application.yml` 조합에 해당하고, `.env` 파일은
//! `PROFILE` 값(prod/dev)에 따라 main에서 골라 로드합니다.
//!
//! - [`data_config`]: 서버 바인딩, 실행 환경, bcrypt cost, 보존 정책
//!   (`RETENTION_GRACE_DAYS`, `PURGE_INTERVAL_SECS`)
//! - [`auth_config`]: JWT 서명/만료, Google OAuth 클라이언트, state 비밀값
//!
//! 파싱 가능한 값은 실패 시 기본값으로 흡수하고, 없으면 동작할 수 없는
//! 값(OAuth 클라이언트 ID 등)만 `expect`로 부팅을 중단시킵니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
