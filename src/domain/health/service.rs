use std::sync::OnceLock;
use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};

/// 서버 시작 시간
static START_TIME: OnceLock<Instant> = OnceLock::new();

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Degraded 상태 임계값
const DEGRADED_THRESHOLD: Duration = Duration::from_millis(500);

/// main에서 서버 시작 시 호출
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

fn uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// 데이터베이스 ping을 포함한 헬스 체크
pub async fn check_health(db: &DatabaseConnection) -> HealthStatus {
    let database = check_database(db).await;

    HealthStatus {
        status: determine_health_state(&database),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: uptime_secs(),
        checks: HealthChecks { database },
    }
}

async fn check_database(db: &DatabaseConnection) -> CheckResult {
    let start = Instant::now();
    let result = timeout(HEALTH_CHECK_TIMEOUT, db.ping()).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(())) => CheckResult::success(latency_ms),
        Ok(Err(e)) => {
            tracing::error!("Database health check failed: {}", e);
            CheckResult::failure(latency_ms, e.to_string())
        }
        Err(_) => {
            tracing::error!("Database health check timed out");
            CheckResult::failure(latency_ms, "Timeout".to_string())
        }
    }
}

fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        return HealthState::Unhealthy;
    }

    match check.latency_ms {
        Some(latency) if latency >= DEGRADED_THRESHOLD.as_millis() as u64 => HealthState::Degraded,
        _ => HealthState::Healthy,
    }
}
