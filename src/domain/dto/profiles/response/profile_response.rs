use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;

use crate::domain::entities::profiles::Profile;

/// 프로필 응답 DTO
///
/// MongoDB 내부 `_id`는 제외하고 외부 식별자와 payload, 구독 상태를 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// 외부 식별자 (JWT subject와 동일)
    pub identity_id: String,
    /// 반정형 프로필 payload (정리된 프로필은 `{}`)
    pub payload: serde_json::Value,
    pub subscribed: bool,
    /// 마지막 구독 상태 전환 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_changed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let Profile {
            identity_id,
            payload,
            subscribed,
            state_changed_at,
            created_at,
            updated_at,
            ..
        } = profile;

        Self {
            identity_id,
            payload,
            subscribed,
            state_changed_at,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_hides_internal_id() {
        let profile = Profile::new("user_abc".to_string());
        let response = ProfileResponse::from(profile);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["identity_id"], "user_abc");
        assert_eq!(json["subscribed"], false);
    }
}
