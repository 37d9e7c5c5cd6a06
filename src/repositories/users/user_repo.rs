//! # 인증 계정 리포지토리
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다. MongoDB가 원본이고
//! Redis는 조회 캐시로만 씁니다. 캐시 실패는 조회 실패로 승격하지
//! 않습니다 (DB 결과가 항상 우선).

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
};
use singleton_macro::repository;

/// 인증 계정 데이터 액세스 리포지토리
///
/// 계정의 ObjectId hex는 프로필 저장소의 `identity_id` 키가 되므로,
/// 여기서 발급되는 ID가 시스템 전체의 사용자 식별자입니다.
///
/// ## 캐시 키
///
/// - ID 조회: 매크로의 `cache_key()` (`user:{id}`), TTL 10분
/// - 이메일 조회: `user:email:{email}`, TTL 10분
/// - 사용자명 조회는 가입/OAuth 닉네임 생성 시에만 쓰여 캐싱하지 않음
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

const CACHE_TTL_SECS: usize = 600;

impl UserRepository {
    /// 이메일로 계정 조회 (캐시 우선)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.lookup(doc! { "email": email }).await?;
        self.cache_if_found(&cache_key, user.as_ref()).await;

        Ok(user)
    }

    /// 사용자명으로 계정 조회
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.lookup(doc! { "username": username }).await
    }

    /// ObjectId hex로 계정 조회 (캐시 우선)
    ///
    /// 토큰 검증 후 매 요청마다 불리는 가장 뜨거운 경로입니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;
        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.lookup(doc! { "_id": object_id }).await?;
        self.cache_if_found(&cache_key, user.as_ref()).await;

        Ok(user)
    }

    /// 새 계정 저장
    ///
    /// 이메일/사용자명 중복은 유니크 인덱스가 최종 방어선이지만,
    /// 의미 있는 에러 메시지를 위해 저장 전에 먼저 확인합니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// 계정 삭제 (물리 삭제)
    ///
    /// 해당 계정의 프로필 문서는 건드리지 않습니다. 프로필 정리는
    /// 보존 작업의 몫입니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.collection::<User>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        let _ = self.invalidate_cache(id).await;
        let _ = self.invalidate_collection_cache(None).await;

        Ok(true)
    }

    /// 인덱스 보장 (초기화 시 1회)
    ///
    /// 기존 데이터에 중복이 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = unique_index(doc! { "email": 1 }, "email_unique");
        let username_index = unique_index(doc! { "username": 1 }, "username_unique");
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder().name("created_at_desc".to_string()).build())
            .build();

        self.collection::<User>()
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn lookup(&self, filter: mongodb::bson::Document) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn cache_if_found(&self, cache_key: &str, user: Option<&User>) {
        if let Some(user) = user {
            let _ = self.redis.set_with_expiry(cache_key, user, CACHE_TTL_SECS).await;
        }
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

fn unique_index(keys: mongodb::bson::Document, name: &str) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).name(name.to_string()).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_object_id_is_a_validation_error() {
        assert!(matches!(
            parse_object_id("not-a-hex-id"),
            Err(AppError::ValidationError(_))
        ));
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
    }
}
