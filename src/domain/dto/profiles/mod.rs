//! # Profile Data Transfer Objects Module
//!
//! 프로필 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 프로필은 반정형(semi-structured) JSON payload를 다루므로,
//! 사용자 DTO와 달리 payload 자체는 `serde_json::Value`로 받되
//! 최상위 형태(JSON object 여부)만 검증합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! profiles/
//! ├── request/                       # 클라이언트 → 서버 요청 DTO
//! │   ├── update_profile.rs         # 프로필 payload 저장/갱신 요청
//! │   └── update_subscription.rs    # 구독 상태 변경 요청
//! └── response/                      # 서버 → 클라이언트 응답 DTO
//!     └── profile_response.rs       # 프로필 조회/갱신 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
