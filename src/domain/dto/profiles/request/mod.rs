//! # 프로필 관련 요청 DTO 모듈
//!
//! 프로필 도메인의 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! payload는 스키마가 고정되지 않은 JSON이므로 필드 단위 검증 대신
//! 최상위가 JSON object인지만 확인합니다.

pub mod update_profile;
pub mod update_subscription;

pub use update_profile::UpdateProfileRequest;
pub use update_subscription::UpdateSubscriptionRequest;
