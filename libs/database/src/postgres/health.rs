use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::error::DatabaseError;

/// Readiness probe: pings the pool.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}
