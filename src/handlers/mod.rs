//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 공통 패턴
//!
//! 1. `web::Json`/`web::Query`/`web::Path`로 입력 추출
//! 2. `validate()`로 입력 검증 (실패 시 400)
//! 3. `Service::instance()`로 싱글톤 서비스 획득
//! 4. 비즈니스 로직 위임 후 `Result<HttpResponse, AppError>` 반환
//!
//! 에러는 `AppError`의 `ResponseError` 구현이 일관된 JSON 에러 응답으로
//! 변환합니다. 인증이 필요한 리소스는 라우트 구성에서 `AuthMiddleware`를
//! 거치며, 핸들러는 `AuthenticatedUser` 추출자로 인증 정보를 받습니다.
//!
//! ## 모듈 구성
//!
//! - [`users`]: 사용자 CRUD
//! - [`auth`]: 로컬/Google 로그인, 토큰 검증/갱신
//! - [`profiles`]: 프로필 payload와 구독 상태

pub mod users;
pub mod auth;
pub mod profiles;
