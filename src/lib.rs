//! 프로필 서비스 백엔드
//!
//! Rust 기반의 사용자 프로필 및 인증 서비스입니다.
//! 반정형 JSON 프로필 저장, JWT 토큰 기반 인증, Google OAuth 2.0 소셜 로그인,
//! 구독 해지 후 유예 기간이 지난 프로필을 비우는 주기적 보존 정리,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 로컬 계정 생성, 조회, 계정 삭제
//! - **프로필 관리**: 외부 식별자로 키잉되는 반정형 JSON payload 저장
//! - **구독 상태 추적**: 상태 전환 시각 기록, 해지 시점부터 보존 유예 시작
//! - **보존 정리 작업**: 유예 기간 경과 프로필의 payload를 `{}`로 치환 (행 보존)
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **OAuth 2.0**: Google 소셜 로그인 지원
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 프로필/사용자 데이터 영구 저장
//! - **Redis**: 캐싱 레이어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Handlers     │     │    PurgeJob     │ ← 주기적 보존 정리
//! └─────────────────┘     └─────────────────┘
//!          │                       │
//!          ▼                       │
//! ┌─────────────────┐              │
//! │    Services     │              │
//! └─────────────────┘              │
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────────────────────────────┐
//! │             Repositories                │
//! └─────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use profile_service_backend::services::profiles::ProfileService;
//! use profile_service_backend::services::users::UserService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let profile_service = ProfileService::instance();
//!
//! let profile = profile_service.get_profile(&user_id).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
