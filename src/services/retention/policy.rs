//! # 보존 정책 판정 로직
//!
//! 프로필이 정리 대상인지 판정하는 순수 함수와 시계 추상화를 정의합니다.
//! 데이터베이스나 스케줄러에 의존하지 않으므로 단위 테스트만으로
//! 경계 조건을 전부 검증할 수 있습니다.

use chrono::{DateTime, Duration, Utc};

/// 현재 시각을 제공하는 시계 추상화
///
/// 정리 작업은 실제 시계 대신 이 트레이트를 주입받습니다.
/// 테스트에서는 고정 시각을 반환하는 구현으로 바꿔치기해
/// 유예 기간 경계를 결정적으로 검증합니다.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계 (운영 기본 구현)
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 프로필이 정리 대상인지 판정
///
/// 다음 조건을 모두 만족할 때만 `true`를 반환합니다:
///
/// 1. 구독 중이 아님 (`subscribed == false`)
/// 2. 상태 전환 시각이 기록되어 있음
/// 3. 전환 이후 경과 시간이 유예 기간 이상 (경계 포함)
///
/// 전환 시각이 없는 미구독 프로필은 해지 시점을 알 수 없으므로
/// 정리하지 않습니다. 전환 시각이 미래인 경우(시계 역전)도 경과
/// 시간이 음수가 되어 정리되지 않습니다.
pub fn is_eligible_for_purge(
    subscribed: bool,
    state_changed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    grace_period: Duration,
) -> bool {
    if subscribed {
        return false;
    }

    match state_changed_at {
        Some(changed_at) => now.signed_duration_since(changed_at) >= grace_period,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grace_30_days() -> Duration {
        Duration::days(30)
    }

    #[test]
    fn test_subscribed_profile_never_eligible() {
        let now = Utc::now();
        // 구독 중이면 전환 시각이 아무리 오래됐어도 대상이 아님
        let long_ago = now - Duration::days(400);
        assert!(!is_eligible_for_purge(true, Some(long_ago), now, grace_30_days()));
    }

    #[test]
    fn test_missing_state_change_not_eligible() {
        let now = Utc::now();
        assert!(!is_eligible_for_purge(false, None, now, grace_30_days()));
    }

    #[test]
    fn test_within_grace_period_not_eligible() {
        let now = Utc::now();
        let changed_at = now - Duration::days(29);
        assert!(!is_eligible_for_purge(false, Some(changed_at), now, grace_30_days()));
    }

    #[test]
    fn test_past_grace_period_eligible() {
        let now = Utc::now();
        let changed_at = now - Duration::days(31);
        assert!(is_eligible_for_purge(false, Some(changed_at), now, grace_30_days()));
    }

    #[test]
    fn test_exact_boundary_is_eligible() {
        let now = Utc::now();
        // 경계는 포함: 정확히 30일 경과한 시점부터 대상
        let changed_at = now - Duration::days(30);
        assert!(is_eligible_for_purge(false, Some(changed_at), now, grace_30_days()));
    }

    #[test]
    fn test_one_second_before_boundary_not_eligible() {
        let now = Utc::now();
        let changed_at = now - Duration::days(30) + Duration::seconds(1);
        assert!(!is_eligible_for_purge(false, Some(changed_at), now, grace_30_days()));
    }

    #[test]
    fn test_future_state_change_not_eligible() {
        let now = Utc::now();
        // 시계 역전으로 전환 시각이 미래인 경우
        let future = now + Duration::days(1);
        assert!(!is_eligible_for_purge(false, Some(future), now, grace_30_days()));
    }

    #[test]
    fn test_zero_grace_period_purges_immediately() {
        let now = Utc::now();
        assert!(is_eligible_for_purge(false, Some(now), now, Duration::zero()));
    }
}
