use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::common::DatabaseError;

/// Runs `SELECT 1` and returns the round-trip time
///
/// Used by the readiness probe; any driver error becomes
/// [`DatabaseError::HealthCheckFailed`].
pub async fn check_health(db: &DatabaseConnection) -> Result<Duration, DatabaseError> {
    let started = Instant::now();
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());

    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("PostgreSQL: {}", e)))?;

    let elapsed = started.elapsed();
    debug!(latency_ms = elapsed.as_millis() as u64, "PostgreSQL health check passed");
    Ok(elapsed)
}
