//! # 도메인 계층
//!
//! 비즈니스 객체와 API 계약이 모여 있습니다.
//!
//! - [`entities`]: MongoDB 문서와 1:1로 매핑되는 영속 객체.
//!   인증 계정([`entities::users::User`])과 외부 identity id로 키잉되는
//!   반정형 프로필([`entities::profiles::Profile`])
//! - [`dto`]: API 경계의 요청/응답 구조. `validator` derive로 입력을
//!   검증하고, 응답은 민감 필드를 제외한 채 `From<Entity>`로 변환
//! - [`models`]: 외부 시스템 경계 모델 (JWT 클레임/토큰 쌍, Google
//!   OAuth 사용자 정보, 인증 컨텍스트)
//!
//! 전형적인 흐름은 DTO 검증 → 엔티티 생성/영속화 → 응답 DTO 변환입니다.
//!
//! ```rust,ignore
//! request.validate()?;
//! let user = User::new_local(request.email, request.username,
//!                            request.display_name, password_hash);
//! let saved = user_repository.create(user).await?;
//! let response = UserResponse::from(saved);
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
