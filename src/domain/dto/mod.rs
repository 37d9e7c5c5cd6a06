//! # 데이터 전송 객체 (DTO)
//!
//! Spring의 `@RequestBody`/`@ResponseBody`에 해당하는 API 경계
//! 구조체입니다. 엔티티와 달리 민감 필드(password_hash 등)를 싣지
//! 않고, 검증도 도메인 불변식이 아닌 입력 형식(validator)을 봅니다.
//!
//! - [`users`]: 회원가입, 로그인, 토큰 갱신, OAuth 요청/응답
//! - [`profiles`]: 프로필 payload, 구독 상태 요청/응답

pub mod users;
pub mod profiles;

pub use users::*;
pub use profiles::*;
