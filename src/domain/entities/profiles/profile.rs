//! Profile Entity Implementation
//!
//! 외부 identity id로 키잉되는 반정형 사용자 프로필 엔티티입니다.
//! 페이로드는 스키마 제약 없는 JSON 문서로 저장되며, 구독 상태와
//! 상태 변경 시각이 데이터 보존 정책의 판단 근거가 됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

fn empty_payload() -> serde_json::Value {
    serde_json::json!({})
}

/// 사용자 프로필 엔티티
///
/// `identity_id`는 인증 계층이 발급한 외부 식별자(JWT subject)이며
/// 컬렉션에서 unique 인덱스로 보장됩니다.
///
/// `subscribed`와 `state_changed_at`은 항상 같은 update 문서에서 함께
/// 변경됩니다. 구독 해지 후 유예 기간이 지나면 정리 작업이 `payload`를
/// 빈 문서로 교체하며, 행 자체는 절대 삭제하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 외부 identity provider가 발급한 사용자 식별자 (unique)
    pub identity_id: String,
    /// 반정형 프로필 본문. 기본값은 빈 JSON 객체
    #[serde(default = "empty_payload")]
    pub payload: serde_json::Value,
    /// 구독 여부. 생성 시 기본값 false
    #[serde(default)]
    pub subscribed: bool,
    /// 구독 상태가 마지막으로 바뀐 시각. 한 번도 바뀐 적 없으면 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_changed_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Profile {
    /// 새 프로필 생성
    ///
    /// 빈 페이로드, 미구독 상태로 시작합니다. `state_changed_at`은
    /// 첫 구독 상태 변경 전까지 None으로 유지됩니다.
    pub fn new(identity_id: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            identity_id,
            payload: empty_payload(),
            subscribed: false,
            state_changed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 페이로드가 비어 있는지(이미 purge된 상태인지) 확인
    ///
    /// 빈 문서를 다시 비우는 것은 no-op이므로 정리 작업은 멱등적입니다.
    pub fn is_payload_empty(&self) -> bool {
        match &self.payload {
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Null => true,
            _ => false,
        }
    }

    /// 상태 변경 시각을 chrono UTC 시각으로 변환
    ///
    /// 보존 정책 평가 함수는 chrono 타입으로 동작하므로
    /// BSON DateTime과의 경계 변환을 여기서 담당합니다.
    pub fn state_changed_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.state_changed_at.map(|dt| dt.to_chrono())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = Profile::new("user_abc".to_string());

        assert_eq!(profile.identity_id, "user_abc");
        assert!(!profile.subscribed);
        assert!(profile.state_changed_at.is_none());
        assert!(profile.is_payload_empty());
    }

    #[test]
    fn test_payload_empty_check() {
        let mut profile = Profile::new("user_abc".to_string());
        assert!(profile.is_payload_empty());

        profile.payload = serde_json::json!({ "language_scores": { "ielts": 7.5 } });
        assert!(!profile.is_payload_empty());

        // purge 후 상태
        profile.payload = serde_json::json!({});
        assert!(profile.is_payload_empty());
    }

    #[test]
    fn test_missing_fields_deserialize_with_defaults() {
        // 과거에 저장된 문서에 payload/subscribed가 없어도 기본값으로 복원
        let doc = mongodb::bson::doc! {
            "identity_id": "user_legacy",
            "created_at": DateTime::now(),
            "updated_at": DateTime::now(),
        };

        let profile: Profile = mongodb::bson::from_document(doc).unwrap();
        assert!(!profile.subscribed);
        assert!(profile.is_payload_empty());
        assert!(profile.state_changed_at.is_none());
    }
}
