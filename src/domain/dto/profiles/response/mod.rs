//! # 프로필 관련 응답 DTO 모듈
//!
//! 프로필 도메인의 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! MongoDB 내부 `_id`는 노출하지 않고 외부 식별자(`identity_id`)만 반환합니다.

pub mod profile_response;

pub use profile_response::ProfileResponse;
