//! # 주기적 보존 정리 작업
//!
//! 유예 기간이 지난 미구독 프로필의 payload를 비우는 백그라운드 작업입니다.
//!
//! ## 실행 모델
//!
//! - 하나의 태스크가 주기(tick)마다 스캔과 정리를 순차 실행하므로
//!   실행이 겹치지 않습니다. 한 번의 실행이 주기보다 길어지면
//!   다음 실행이 그만큼 늦어질 뿐입니다.
//! - 실행 중 저장소 오류가 나면 해당 실행을 로그와 함께 중단하고,
//!   다음 주기에 처음부터 다시 시도합니다. 별도 재시도는 없습니다.
//! - 정리는 저장소 구현이 단일 트랜잭션으로 수행하므로 부분 정리
//!   상태가 남지 않습니다.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{error, info};

use crate::core::errors::AppError;
use crate::domain::entities::profiles::Profile;
use crate::services::retention::policy::{is_eligible_for_purge, Clock};

/// 정리 작업이 필요로 하는 저장소 연산
///
/// 정리 작업은 구체 리포지토리 대신 이 트레이트에 의존합니다.
/// 테스트에서는 인메모리 구현으로 바꿔치기합니다.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// 미구독 프로필 전체 조회 (유예 기간 판정은 호출자 몫)
    async fn find_unsubscribed(&self) -> Result<Vec<Profile>, AppError>;

    /// 후보 프로필들의 payload를 단일 트랜잭션으로 `{}` 치환
    ///
    /// 스캔 이후 상태가 바뀐 프로필을 보호하기 위해 구현은 트랜잭션
    /// 안에서 `cutoff` 기준 자격을 다시 확인해야 합니다.
    /// 실제로 정리된 건수를 반환합니다.
    async fn clear_payloads(
        &self,
        identity_ids: &[String],
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AppError>;
}

/// 한 번의 정리 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeOutcome {
    /// 스캔된 미구독 프로필 수
    pub scanned: usize,
    /// 유예 기간 판정을 통과한 후보 수
    pub eligible: usize,
    /// 실제로 payload가 비워진 건수
    pub cleared: u64,
}

/// 보존 정리 작업
///
/// 시계와 저장소를 주입받아 `run_once`로 한 사이클을 수행하고,
/// `start`로 주기 실행 태스크를 띄웁니다.
pub struct PurgeJob {
    store: Arc<dyn ProfileStore>,
    clock: Arc<dyn Clock>,
    grace_period: Duration,
}

impl PurgeJob {
    pub fn new(store: Arc<dyn ProfileStore>, clock: Arc<dyn Clock>, grace_period: Duration) -> Self {
        Self {
            store,
            clock,
            grace_period,
        }
    }

    /// 한 번의 정리 사이클 실행
    ///
    /// 스캔 → 메모리 판정 → 트랜잭션 정리 순서로 진행합니다.
    /// 후보가 없으면 트랜잭션을 열지 않고 바로 끝납니다.
    /// 저장소 오류는 그대로 전파되어 호출자가 실행 단위로 처리합니다.
    pub async fn run_once(&self) -> Result<PurgeOutcome, AppError> {
        let started = std::time::Instant::now();
        let now = self.clock.now();

        info!("🔄 보존 정리 시작: 미구독 프로필 스캔");
        let candidates = self.store.find_unsubscribed().await?;
        let scanned = candidates.len();

        let eligible: Vec<String> = candidates
            .into_iter()
            .filter(|profile| {
                is_eligible_for_purge(
                    profile.subscribed,
                    profile.state_changed_at_utc(),
                    now,
                    self.grace_period,
                )
            })
            .map(|profile| profile.identity_id)
            .collect();

        if eligible.is_empty() {
            info!(
                "✅ 보존 정리 완료: 스캔 {}건, 정리 대상 없음 ({:?})",
                scanned,
                started.elapsed()
            );
            return Ok(PurgeOutcome {
                scanned,
                eligible: 0,
                cleared: 0,
            });
        }

        info!("🧹 payload 정리 단계: 후보 {}건", eligible.len());
        let cutoff = now - self.grace_period;
        let cleared = self.store.clear_payloads(&eligible, cutoff).await?;

        info!(
            "✅ 보존 정리 완료: 스캔 {}건, 후보 {}건, 정리 {}건 ({:?})",
            scanned,
            eligible.len(),
            cleared,
            started.elapsed()
        );

        Ok(PurgeOutcome {
            scanned,
            eligible: eligible.len(),
            cleared,
        })
    }

    /// 주기 실행 태스크 시작
    ///
    /// 첫 실행은 한 주기가 지난 뒤 수행됩니다. 반환된 핸들을 통해서만
    /// 중지할 수 있으며, 핸들을 잃어버리면 작업도 제어할 수 없으므로
    /// 소유권은 애플리케이션 수명을 관리하는 쪽(main)에 둡니다.
    pub fn start(self, interval: StdDuration) -> PurgeJobHandle {
        let handle = actix_web::rt::spawn(async move {
            let mut ticker = actix_web::rt::time::interval(interval);
            // interval의 첫 tick은 즉시 완료되므로 소비하고 시작
            ticker.tick().await;

            loop {
                ticker.tick().await;

                if let Err(e) = self.run_once().await {
                    // 실행 단위 중단, 다음 주기가 유일한 복구 경로
                    error!("❌ 보존 정리 실패, 다음 주기에 재시도합니다: {}", e);
                }
            }
        });

        info!("🚀 보존 정리 작업 시작 (주기: {:?})", interval);

        PurgeJobHandle { handle }
    }
}

/// 실행 중인 정리 작업의 소유 핸들
///
/// 전역 싱글톤이 아니라 값으로 소유됩니다. 드롭하지 말고
/// `stop`으로 명시적으로 중지하세요.
pub struct PurgeJobHandle {
    handle: actix_web::rt::task::JoinHandle<()>,
}

impl PurgeJobHandle {
    /// 정리 작업 중지
    ///
    /// 진행 중인 트랜잭션은 드라이버가 정리하며, 커밋되지 않은
    /// 변경은 남지 않습니다.
    pub fn stop(self) {
        self.handle.abort();
        info!("🛑 보존 정리 작업 중지");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime as BsonDateTime;
    use std::sync::Mutex;

    /// 고정 시각을 반환하는 테스트 시계
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// 인메모리 프로필 저장소
    ///
    /// `clear_payloads`는 실제 저장소와 동일하게 cutoff 기준 자격을
    /// 다시 확인한 뒤 payload를 `{}`로 치환합니다.
    struct InMemoryStore {
        profiles: Mutex<Vec<Profile>>,
        fail_scan: bool,
        fail_clear: bool,
    }

    impl InMemoryStore {
        fn new(profiles: Vec<Profile>) -> Self {
            Self {
                profiles: Mutex::new(profiles),
                fail_scan: false,
                fail_clear: false,
            }
        }

        fn payload_of(&self, identity_id: &str) -> serde_json::Value {
            self.profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.identity_id == identity_id)
                .map(|p| p.payload.clone())
                .unwrap()
        }
    }

    #[async_trait]
    impl ProfileStore for InMemoryStore {
        async fn find_unsubscribed(&self) -> Result<Vec<Profile>, AppError> {
            if self.fail_scan {
                return Err(AppError::DatabaseError("연결 끊김".to_string()));
            }
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .filter(|p| !p.subscribed)
                .cloned()
                .collect())
        }

        async fn clear_payloads(
            &self,
            identity_ids: &[String],
            cutoff: DateTime<Utc>,
        ) -> Result<u64, AppError> {
            if self.fail_clear {
                return Err(AppError::DatabaseError("트랜잭션 실패".to_string()));
            }
            let mut profiles = self.profiles.lock().unwrap();
            let mut cleared = 0;
            for profile in profiles.iter_mut() {
                let still_eligible = !profile.subscribed
                    && profile
                        .state_changed_at_utc()
                        .map(|t| t <= cutoff)
                        .unwrap_or(false);
                if identity_ids.contains(&profile.identity_id)
                    && still_eligible
                    && !profile.is_payload_empty()
                {
                    profile.payload = serde_json::json!({});
                    cleared += 1;
                }
            }
            Ok(cleared)
        }
    }

    fn profile(identity_id: &str, subscribed: bool, changed_days_ago: Option<i64>, now: DateTime<Utc>) -> Profile {
        let mut p = Profile::new(identity_id.to_string());
        p.payload = serde_json::json!({ "nickname": identity_id });
        p.subscribed = subscribed;
        p.state_changed_at = changed_days_ago
            .map(|days| BsonDateTime::from_chrono(now - Duration::days(days)));
        p
    }

    fn job(store: Arc<InMemoryStore>, now: DateTime<Utc>) -> PurgeJob {
        PurgeJob::new(store, Arc::new(FixedClock(now)), Duration::days(30))
    }

    #[actix_web::test]
    async fn test_run_once_clears_only_eligible_profiles() {
        let now = Utc::now();
        let store = Arc::new(InMemoryStore::new(vec![
            profile("old_unsub", false, Some(31), now),
            profile("fresh_unsub", false, Some(29), now),
            profile("subscribed", true, Some(400), now),
            profile("no_timestamp", false, None, now),
        ]));

        let outcome = job(store.clone(), now).run_once().await.unwrap();

        assert_eq!(outcome.scanned, 3); // 구독 중인 프로필은 스캔에서 제외
        assert_eq!(outcome.eligible, 1);
        assert_eq!(outcome.cleared, 1);
        assert_eq!(store.payload_of("old_unsub"), serde_json::json!({}));
        assert_ne!(store.payload_of("fresh_unsub"), serde_json::json!({}));
        assert_ne!(store.payload_of("subscribed"), serde_json::json!({}));
        assert_ne!(store.payload_of("no_timestamp"), serde_json::json!({}));
    }

    #[actix_web::test]
    async fn test_exact_boundary_profile_is_cleared() {
        let now = Utc::now();
        let store = Arc::new(InMemoryStore::new(vec![profile("boundary", false, Some(30), now)]));

        let outcome = job(store.clone(), now).run_once().await.unwrap();

        assert_eq!(outcome.cleared, 1);
        assert_eq!(store.payload_of("boundary"), serde_json::json!({}));
    }

    #[actix_web::test]
    async fn test_no_candidates_skips_clear() {
        let now = Utc::now();
        let store = Arc::new(InMemoryStore::new(vec![profile("fresh", false, Some(1), now)]));

        let outcome = job(store.clone(), now).run_once().await.unwrap();

        assert_eq!(outcome.scanned, 1);
        assert_eq!(outcome.eligible, 0);
        assert_eq!(outcome.cleared, 0);
    }

    #[actix_web::test]
    async fn test_double_run_is_idempotent() {
        let now = Utc::now();
        let store = Arc::new(InMemoryStore::new(vec![profile("old", false, Some(40), now)]));
        let job = job(store.clone(), now);

        let first = job.run_once().await.unwrap();
        assert_eq!(first.cleared, 1);

        // 두 번째 실행: 이미 비워진 payload는 다시 정리되지 않음
        let second = job.run_once().await.unwrap();
        assert_eq!(second.eligible, 1);
        assert_eq!(second.cleared, 0);
        assert_eq!(store.payload_of("old"), serde_json::json!({}));
    }

    #[actix_web::test]
    async fn test_scan_failure_aborts_run() {
        let now = Utc::now();
        let mut store = InMemoryStore::new(vec![profile("old", false, Some(40), now)]);
        store.fail_scan = true;
        let store = Arc::new(store);

        let result = job(store.clone(), now).run_once().await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        // 실패한 실행은 아무것도 바꾸지 않음
        assert_ne!(store.payload_of("old"), serde_json::json!({}));
    }

    #[actix_web::test]
    async fn test_clear_failure_propagates() {
        let now = Utc::now();
        let mut store = InMemoryStore::new(vec![profile("old", false, Some(40), now)]);
        store.fail_clear = true;
        let store = Arc::new(store);

        let result = job(store, now).run_once().await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_resubscribed_between_scan_and_clear_is_protected() {
        let now = Utc::now();
        let store = Arc::new(InMemoryStore::new(vec![profile("flipper", false, Some(40), now)]));

        // 스캔 결과를 흉내내 후보 목록은 이미 확정됐다고 가정하고,
        // 정리 직전에 재구독이 일어난 상황
        store.profiles.lock().unwrap()[0].subscribed = true;

        let cleared = store
            .clear_payloads(&["flipper".to_string()], now - Duration::days(30))
            .await
            .unwrap();

        assert_eq!(cleared, 0);
        assert_ne!(store.payload_of("flipper"), serde_json::json!({}));
    }
}
