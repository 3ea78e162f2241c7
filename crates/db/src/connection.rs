//! Per-request database connection guard.

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use crate::DbPool;

/// A pooled connection held for the lifetime of one request.
///
/// Dropping the guard hands the connection back to the pool, so it is
/// released on every exit path of the owning handler, including early
/// returns and unwinding.
pub struct ScopedConnection {
    conn: PoolConnection<Postgres>,
    acquired_at: Instant,
}

impl ScopedConnection {
    /// Check a connection out of `pool`, waiting up to the pool's acquire timeout.
    pub async fn acquire(pool: &DbPool) -> Result<Self, sqlx::Error> {
        let conn = pool.acquire().await?;
        tracing::debug!("Database connection acquired");
        Ok(Self {
            conn,
            acquired_at: Instant::now(),
        })
    }
}

impl Deref for ScopedConnection {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        tracing::debug!(
            held_ms = self.acquired_at.elapsed().as_millis() as u64,
            "Database connection released"
        );
    }
}
