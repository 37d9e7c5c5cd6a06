//! 구독 상태 변경 요청 DTO
use serde::{Deserialize, Serialize};

/// 구독 상태 변경 요청 DTO
///
/// `subscribed`를 `false`로 내리는 순간부터 보존 유예 기간이 시작되고,
/// 다시 `true`로 올리면 정리 대상에서 제외됩니다. 상태 전환 시각 기록은
/// 서버가 관리하므로 클라이언트는 목표 상태만 전송합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubscriptionRequest {
    /// 목표 구독 상태
    pub subscribed: bool,
}
