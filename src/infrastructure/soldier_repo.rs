use sqlx::{Executor, Sqlite, SqlitePool};

use crate::domain::models::{Soldier, SoldierId};
use crate::error::{PlannerError, Result};

pub struct SoldierRepository {
    pool: SqlitePool,
}

const SOLDIER_COLUMNS: &str = "id, name, rank, role, total_services, is_available";

impl SoldierRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =================================================================
    // 1. Roster Operations
    // =================================================================

    pub async fn add_soldier(
        &self,
        name: &str,
        rank: &str,
        role: &str,
        is_available: bool,
    ) -> Result<SoldierId> {
        let id = sqlx::query(
            "INSERT INTO soldiers (name, rank, role, total_services, is_available)
             VALUES (?1, ?2, ?3, 0, ?4)",
        )
        .bind(name)
        .bind(rank)
        .bind(role)
        .bind(is_available)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();
        Ok(id)
    }

    pub async fn get_soldier(&self, soldier_id: SoldierId) -> Result<Soldier> {
        sqlx::query_as::<_, Soldier>(&format!(
            "SELECT {SOLDIER_COLUMNS} FROM soldiers WHERE id = ?"
        ))
        .bind(soldier_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(PlannerError::SoldierNotFound(soldier_id))
    }

    pub async fn list_by_name(&self) -> Result<Vec<Soldier>> {
        let soldiers = sqlx::query_as::<_, Soldier>(&format!(
            "SELECT {SOLDIER_COLUMNS} FROM soldiers ORDER BY name ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(soldiers)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM soldiers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Name and fairness counter are not editable here.
    pub async fn update_soldier(
        &self,
        soldier_id: SoldierId,
        rank: &str,
        role: &str,
        is_available: bool,
    ) -> Result<()> {
        let result = sqlx::query(
            "UPDATE soldiers SET rank = ?1, role = ?2, is_available = ?3 WHERE id = ?4",
        )
        .bind(rank)
        .bind(role)
        .bind(is_available)
        .bind(soldier_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PlannerError::SoldierNotFound(soldier_id));
        }
        Ok(())
    }

    pub async fn delete_soldier(&self, soldier_id: SoldierId) -> Result<()> {
        // ON DELETE CASCADE removes assignments and unavailability records
        let result = sqlx::query("DELETE FROM soldiers WHERE id = ?")
            .bind(soldier_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PlannerError::SoldierNotFound(soldier_id));
        }
        Ok(())
    }

    // =================================================================
    // 2. Generator Operations (run inside the caller's transaction)
    // =================================================================

    /// Whole roster, unordered.
    pub async fn list_soldiers<'e, E>(executor: E) -> Result<Vec<Soldier>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let soldiers = sqlx::query_as::<_, Soldier>(&format!(
            "SELECT {SOLDIER_COLUMNS} FROM soldiers"
        ))
        .fetch_all(executor)
        .await?;
        Ok(soldiers)
    }

    pub async fn increment_service_count<'e, E>(executor: E, soldier_id: SoldierId) -> Result<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE soldiers SET total_services = total_services + 1 WHERE id = ?")
            .bind(soldier_id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PlannerError::SoldierNotFound(soldier_id));
        }
        Ok(())
    }
}
