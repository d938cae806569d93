mod comments;
mod games;

use sqlx::PgPool;

use crate::error::Result;

/// Database connection wrapper. Cloning shares the underlying pool; every
/// query leases a connection from the pool and returns it when the future
/// completes, whether the query succeeded or failed.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Liveness probe: lease a connection and run a trivial query.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
