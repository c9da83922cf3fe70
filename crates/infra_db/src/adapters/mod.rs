//! Domain Adapters
//!
//! PostgreSQL implementations of the domain ports. Each adapter:
//! - Implements the domain's port trait
//! - Translates between domain records and database rows
//! - Uses the repository layer for the SQL itself
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_db::adapters::{PostgresAuthorAdapter, PostgresOppositionAdapter};
//!
//! let authors: Arc<dyn AuthorPort> = Arc::new(PostgresAuthorAdapter::new(pool.clone()));
//! let oppositions: Arc<dyn OppositionPort> = Arc::new(PostgresOppositionAdapter::new(pool));
//! ```

pub mod author;
pub mod opposition;

pub use author::PostgresAuthorAdapter;
pub use opposition::PostgresOppositionAdapter;

use std::time::Instant;

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult};

/// Runs `SELECT 1` against the pool and reports the outcome for `adapter_id`
pub(crate) async fn ping(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    let (status, message) = match result {
        Ok(_) => (AdapterHealth::Healthy, None),
        Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
    };

    HealthCheckResult {
        adapter_id: adapter_id.to_string(),
        status,
        latency_ms,
        message,
        checked_at: Utc::now(),
    }
}
