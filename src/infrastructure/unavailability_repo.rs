use chrono::NaiveDate;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::domain::models::{SoldierId, Unavailability, UnavailabilityId, UnavailabilityRow};
use crate::error::{PlannerError, Result};

pub struct UnavailabilityRepository {
    pool: SqlitePool,
}

impl UnavailabilityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(
        &self,
        soldier_id: SoldierId,
        date: NaiveDate,
        reason: &str,
    ) -> Result<UnavailabilityId> {
        let id = sqlx::query("INSERT INTO unavailabilities (soldier_id, date, reason) VALUES (?1, ?2, ?3)")
            .bind(soldier_id)
            .bind(date)
            .bind(reason)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        Ok(id)
    }

    pub async fn delete(&self, unavailability_id: UnavailabilityId) -> Result<()> {
        let result = sqlx::query("DELETE FROM unavailabilities WHERE id = ?")
            .bind(unavailability_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PlannerError::UnavailabilityNotFound(unavailability_id));
        }
        Ok(())
    }

    /// Records dated `from` or later, earliest first.
    pub async fn list_upcoming(&self, from: NaiveDate) -> Result<Vec<UnavailabilityRow>> {
        let rows = sqlx::query_as::<_, UnavailabilityRow>(
            "SELECT u.id, u.soldier_id, s.name AS soldier_name, u.date, u.reason
             FROM unavailabilities u
             JOIN soldiers s ON s.id = u.soldier_id
             WHERE u.date >= ?
             ORDER BY u.date ASC, u.id ASC",
        )
        .bind(from)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Generator input: every record on exactly `date`.
    pub async fn list_for_date<'e, E>(executor: E, date: NaiveDate) -> Result<Vec<Unavailability>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, Unavailability>(
            "SELECT id, soldier_id, date, reason FROM unavailabilities WHERE date = ?",
        )
        .bind(date)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }
}
