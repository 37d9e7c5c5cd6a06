//! # 프로필 관리 서비스 구현
//!
//! 프로필 조회, payload 갱신, 구독 상태 변경의 비즈니스 로직을 구현합니다.
//! 식별자는 항상 인증 미들웨어가 검증한 토큰의 subject에서 오며,
//! 경로나 본문으로 받은 식별자는 신뢰하지 않습니다.

use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::profiles::response::ProfileResponse,
    repositories::profiles::profile_repo::ProfileRepository,
};
use singleton_macro::service;

/// 프로필 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// ProfileRepository가 자동으로 주입됩니다.
///
/// ## 에러 처리 전략
///
/// - **NotFound**: 프로필이 아직 생성되지 않음
/// - **ValidationError**: payload 형식 위반 (핸들러 레이어에서 검증)
/// - **DatabaseError**: 저장소 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let profile_service = ProfileService::instance();
/// let profile = profile_service
///     .update_profile(&user.user_id, serde_json::json!({ "theme": "dark" }))
///     .await?;
/// ```
#[service(name = "profile")]
pub struct ProfileService {
    /// 프로필 리포지토리 (자동 주입)
    profile_repo: Arc<ProfileRepository>,
}

impl ProfileService {
    /// 프로필 조회
    ///
    /// 정리된 프로필도 문서(행)는 남아 있으므로 payload가 `{}`인 채로
    /// 정상 반환됩니다. 프로필을 한 번도 저장하지 않은 사용자는 NotFound입니다.
    pub async fn get_profile(&self, identity_id: &str) -> Result<ProfileResponse, AppError> {
        let profile = self.profile_repo
            .find_by_identity_id(identity_id)
            .await?
            .ok_or_else(|| AppError::NotFound("프로필을 찾을 수 없습니다".to_string()))?;

        Ok(ProfileResponse::from(profile))
    }

    /// 프로필 payload 저장/갱신
    ///
    /// 전체 교체 시맨틱입니다. 프로필이 없으면 기본 구독 상태(미구독)로
    /// 새로 생성됩니다. payload가 JSON object인지는 핸들러의 DTO 검증이
    /// 보장합니다.
    pub async fn update_profile(
        &self,
        identity_id: &str,
        payload: serde_json::Value,
    ) -> Result<ProfileResponse, AppError> {
        let profile = self.profile_repo
            .upsert_payload(identity_id, payload)
            .await?;

        log::info!("📦 프로필 payload 갱신: {}", identity_id);

        Ok(ProfileResponse::from(profile))
    }

    /// 구독 상태 변경
    ///
    /// 상태가 실제로 바뀔 때만 전환 시각이 기록됩니다. 해지 시점부터
    /// 보존 유예 기간이 시작되고, 재구독하면 정리 대상에서 빠집니다.
    pub async fn update_subscription(
        &self,
        identity_id: &str,
        subscribed: bool,
    ) -> Result<ProfileResponse, AppError> {
        let profile = self.profile_repo
            .set_subscription(identity_id, subscribed)
            .await?;

        log::info!(
            "🔄 구독 상태 변경: {} (subscribed={})",
            identity_id,
            subscribed
        );

        Ok(ProfileResponse::from(profile))
    }
}
