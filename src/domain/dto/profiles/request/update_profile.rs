//! 프로필 저장/갱신 요청 DTO
//!
//! 프로필 payload 전체를 교체하는 요청 데이터 구조를 정의합니다.
//! payload는 반정형 JSON이므로 내부 스키마는 검증하지 않습니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 프로필 payload 저장/갱신 요청 DTO
///
/// payload 전체를 교체(replace)하는 시맨틱입니다. 부분 병합(merge)은
/// 지원하지 않으므로 클라이언트는 항상 전체 문서를 전송해야 합니다.
///
/// ```rust,ignore
/// let req = UpdateProfileRequest {
///     payload: serde_json::json!({ "nickname": "ruster", "theme": "dark" }),
/// };
/// req.validate()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_payload_is_object"))]
pub struct UpdateProfileRequest {
    /// 저장할 프로필 payload (최상위는 반드시 JSON object)
    pub payload: serde_json::Value,
}

/// payload 최상위가 JSON object인지 검증
///
/// 배열이나 스칼라를 최상위로 허용하면 정리 작업의 `{}` 치환 시맨틱과
/// 충돌하므로 object만 허용합니다.
fn validate_payload_is_object(req: &UpdateProfileRequest) -> Result<(), ValidationError> {
    if !req.payload.is_object() {
        return Err(ValidationError::new("payload_not_object")
            .with_message("payload는 JSON object여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_payload_passes() {
        let req = UpdateProfileRequest {
            payload: json!({ "nickname": "ruster" }),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_object_payload_passes() {
        let req = UpdateProfileRequest { payload: json!({}) };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_array_payload_rejected() {
        let req = UpdateProfileRequest {
            payload: json!([1, 2, 3]),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_scalar_payload_rejected() {
        let req = UpdateProfileRequest {
            payload: json!("just a string"),
        };
        assert!(req.validate().is_err());
    }
}
