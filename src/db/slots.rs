use sqlx::SqlitePool;

use super::{StoreError, MIGRATOR};
use crate::models::slot::{Slot, SlotSeed};

/// Owned handle to the slot table. Every operation checks a connection out of
/// the pool for a single statement (or one transaction) and hands it back.
#[derive(Clone)]
pub struct SlotStore {
    pool: SqlitePool,
}

impl SlotStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the schema and insert any default slot that is not there yet.
    /// Existing rows keep their capacity and remaining count.
    pub async fn initialize(&self, seeds: &[SlotSeed]) -> Result<(), StoreError> {
        MIGRATOR.run(&self.pool).await?;

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for seed in seeds {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO slots (name, capacity, remaining) VALUES (?1, ?2, ?2)",
            )
            .bind(&seed.name)
            .bind(seed.capacity)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }
        tx.commit().await?;

        tracing::info!(
            "Slot table ready ({} configured, {} newly seeded)",
            seeds.len(),
            inserted
        );
        Ok(())
    }

    pub async fn list_slots(&self) -> Result<Vec<Slot>, StoreError> {
        let slots = sqlx::query_as::<_, Slot>(
            "SELECT name, remaining, capacity FROM slots ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(slots)
    }

    /// Take one seat from `name`. Returns false when the slot is full or does
    /// not exist; callers cannot tell the two apart.
    pub async fn try_reserve(&self, name: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE slots SET remaining = remaining - 1 WHERE name = ?1 AND remaining > 0",
        )
        .bind(name)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Restore every slot to its own capacity. Returns the number of slots touched.
    pub async fn reset_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE slots SET remaining = capacity")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
