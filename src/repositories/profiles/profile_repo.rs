//! # 프로필 리포지토리 구현
//!
//! 프로필 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//! 정리 작업을 위한 후보 조회와 단일 트랜잭션 payload 정리도 여기서 처리합니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime as ChronoDateTime, Utc};
use futures_util::TryStreamExt;
use log::warn;
use mongodb::{
    bson::{self, doc, DateTime, Document},
    options::IndexOptions,
    IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::profiles::Profile,
    services::retention::ProfileStore,
};
use singleton_macro::repository;

/// 프로필 데이터 액세스 리포지토리
///
/// 프로필은 외부 식별자(`identity_id`)로 키잉되는 반정형 JSON 문서입니다.
/// 조회는 Redis 캐시 우선, 쓰기는 MongoDB 후 캐시 무효화 패턴을 따릅니다.
///
/// ## 캐싱 전략
///
/// - **개별 프로필**: `profile:{identity_id}`, TTL 10분
/// - **쓰기 후 무효화**: payload/구독 상태 변경과 정리 작업 모두 해당
///
/// ## 인덱스
///
/// `identity_id`(unique), `subscribed + state_changed_at`(정리 스캔용)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = ProfileRepository::instance();
/// let profile = repo.upsert_payload("user_abc", serde_json::json!({ "theme": "dark" })).await?;
/// ```
#[repository(name = "profile", collection = "profiles")]
pub struct ProfileRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ProfileRepository {
    /// 외부 식별자로 프로필 조회
    ///
    /// 캐시 키는 매크로의 `cache_key()`를 사용합니다 (`profile:{identity_id}`).
    pub async fn find_by_identity_id(&self, identity_id: &str) -> Result<Option<Profile>, AppError> {
        let cache_key = self.cache_key(identity_id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Profile>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let profile = self.collection::<Profile>()
            .find_one(doc! { "identity_id": identity_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref profile) = profile {
            let _ = self.redis
                .set_with_expiry(&cache_key, profile, 600)
                .await;
        }

        Ok(profile)
    }

    /// 프로필 payload 저장/갱신 (upsert)
    ///
    /// payload 전체를 교체합니다. 구독 상태와 상태 전환 시각은 건드리지
    /// 않습니다. 프로필이 없으면 기본 상태(미구독, 전환 시각 없음)로
    /// 새로 만듭니다.
    pub async fn upsert_payload(
        &self,
        identity_id: &str,
        payload: serde_json::Value,
    ) -> Result<Profile, AppError> {
        let payload_bson = bson::to_bson(&payload)
            .map_err(|e| AppError::SerializationError(e.to_string()))?;
        let now = DateTime::now();

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let profile = self.collection::<Profile>()
            .find_one_and_update(
                doc! { "identity_id": identity_id },
                doc! {
                    "$set": { "payload": payload_bson, "updated_at": now },
                    "$setOnInsert": {
                        "identity_id": identity_id,
                        "subscribed": false,
                        "created_at": now,
                    },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("upsert가 문서를 반환하지 않았습니다".to_string()))?;

        let _ = self.invalidate_cache(identity_id).await;

        Ok(profile)
    }

    /// 구독 상태 변경
    ///
    /// `subscribed`와 `state_changed_at`은 항상 하나의 `$set`으로 함께
    /// 기록됩니다. 목표 상태가 현재 상태와 같으면 전환 시각을 덮어쓰지
    /// 않고 기존 문서를 그대로 반환합니다.
    pub async fn set_subscription(
        &self,
        identity_id: &str,
        subscribed: bool,
    ) -> Result<Profile, AppError> {
        // 동일 상태 재전송은 전환 시각을 갱신하지 않음
        if let Some(existing) = self.find_by_identity_id(identity_id).await? {
            if existing.subscribed == subscribed {
                return Ok(existing);
            }
        }

        let now = DateTime::now();

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let profile = self.collection::<Profile>()
            .find_one_and_update(
                doc! { "identity_id": identity_id },
                doc! {
                    "$set": {
                        "subscribed": subscribed,
                        "state_changed_at": now,
                        "updated_at": now,
                    },
                    "$setOnInsert": {
                        "identity_id": identity_id,
                        "payload": {},
                        "created_at": now,
                    },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("upsert가 문서를 반환하지 않았습니다".to_string()))?;

        let _ = self.invalidate_cache(identity_id).await;

        Ok(profile)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Profile>();

        // 외부 식별자 유니크 인덱스
        let identity_index = IndexModel::builder()
            .keys(doc! { "identity_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("identity_id_unique".to_string())
                .build())
            .build();

        // 정리 스캔용 복합 인덱스 (미구독 프로필 조회)
        let retention_index = IndexModel::builder()
            .keys(doc! { "subscribed": 1, "state_changed_at": 1 })
            .options(IndexOptions::builder()
                .name("subscribed_state_changed_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([identity_index, retention_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    /// 미구독 프로필 전체 조회
    ///
    /// 쿼리는 `subscribed: false`만 좁히고, 유예 기간 판정은 호출자가
    /// 메모리에서 수행합니다. 역직렬화에 실패한 문서는 경고 로그를 남기고
    /// 건너뛰어 나머지 스캔을 계속합니다.
    async fn find_unsubscribed(&self) -> Result<Vec<Profile>, AppError> {
        let mut cursor = self.collection::<Document>()
            .find(doc! { "subscribed": false })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut profiles = Vec::new();

        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            if let Some(profile) = decode_profile(document) {
                profiles.push(profile);
            }
        }

        Ok(profiles)
    }

    /// 후보 프로필들의 payload를 단일 트랜잭션으로 `{}` 치환
    ///
    /// 스캔과 정리 사이에 구독 상태가 바뀐 프로필을 덮어쓰지 않도록
    /// 트랜잭션 안에서 `subscribed: false`와 전환 시각 기준을 다시
    /// 확인합니다. 문서(행)는 보존되고 payload만 비워집니다.
    async fn clear_payloads(
        &self,
        identity_ids: &[String],
        cutoff: ChronoDateTime<Utc>,
    ) -> Result<u64, AppError> {
        if identity_ids.is_empty() {
            return Ok(0);
        }

        let client = self.db.client();
        let mut session = client
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        session
            .start_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let now = DateTime::now();
        let filter = doc! {
            "identity_id": { "$in": identity_ids },
            "subscribed": false,
            "state_changed_at": { "$lte": DateTime::from_chrono(cutoff) },
        };
        let update = doc! {
            "$set": { "payload": {}, "updated_at": now },
        };

        let result = self.collection::<Profile>()
            .update_many(filter, update)
            .session(&mut session)
            .await;

        let cleared = match result {
            Ok(update_result) => {
                session
                    .commit_transaction()
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
                update_result.modified_count
            }
            Err(e) => {
                let _ = session.abort_transaction().await;
                return Err(AppError::DatabaseError(e.to_string()));
            }
        };

        // 정리된 프로필들의 캐시 무효화
        for identity_id in identity_ids {
            let _ = self.invalidate_cache(identity_id).await;
        }

        Ok(cleared)
    }
}

/// 커서에서 꺼낸 문서 하나를 프로필로 복원
///
/// 깨진 문서 하나가 전체 스캔을 막아서는 안 되므로, 역직렬화 실패는
/// 경고 로그를 남기고 None으로 건너뜁니다.
fn decode_profile(document: Document) -> Option<Profile> {
    match bson::from_document::<Profile>(document) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!("⚠️ 프로필 역직렬화 실패, 건너뜀: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_document(identity_id: &str) -> Document {
        doc! {
            "identity_id": identity_id,
            "payload": { "theme": "dark" },
            "subscribed": false,
            "state_changed_at": DateTime::now(),
            "created_at": DateTime::now(),
            "updated_at": DateTime::now(),
        }
    }

    #[test]
    fn test_valid_document_decodes() {
        let profile = decode_profile(valid_document("user_abc")).expect("정상 문서는 복원되어야 함");

        assert_eq!(profile.identity_id, "user_abc");
        assert!(!profile.subscribed);
    }

    #[test]
    fn test_corrupt_document_is_skipped_without_poisoning_siblings() {
        // subscribed가 bool이 아닌 깨진 문서
        let mut corrupt = valid_document("user_corrupt");
        corrupt.insert("subscribed", "yes");

        let decoded: Vec<Profile> = [corrupt, valid_document("user_ok")]
            .into_iter()
            .filter_map(decode_profile)
            .collect();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].identity_id, "user_ok");
    }
}
