//! 사용자 관리 서비스
//!
//! 계정 가입(bcrypt 해싱, 중복 방지), 조회, 삭제, 이메일/비밀번호 자격
//! 증명 검증을 [`UserService`]가 담당합니다.
//!
//! ```rust,ignore
//! let response = UserService::instance().create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
