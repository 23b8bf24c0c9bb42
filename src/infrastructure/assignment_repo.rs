use chrono::NaiveDate;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::domain::models::{AssignmentId, AssignmentRow, SoldierId};
use crate::error::Result;

pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =====================
    // read side
    // =====================

    /// The date's schedule in creation order, with soldier name and rank.
    pub async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<AssignmentRow>> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            "SELECT a.id, a.soldier_id, s.name AS soldier_name, s.rank AS soldier_rank,
                    a.date, a.shift_type, a.confirmed
             FROM assignments a
             JOIN soldiers s ON s.id = a.soldier_id
             WHERE a.date = ?
             ORDER BY a.id ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Marks every assignment of the date confirmed. Returns the number of rows touched.
    pub async fn confirm_date(&self, date: NaiveDate) -> Result<u64> {
        let result = sqlx::query("UPDATE assignments SET confirmed = 1 WHERE date = ?")
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // =====================
    // generator side (caller's transaction)
    // =====================

    pub async fn delete_for_date<'e, E>(executor: E, date: NaiveDate) -> Result<u64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM assignments WHERE date = ?")
            .bind(date)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// New assignments always start unconfirmed.
    pub async fn create_assignment<'e, E>(
        executor: E,
        soldier_id: SoldierId,
        date: NaiveDate,
        shift_type: &str,
    ) -> Result<AssignmentId>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id = sqlx::query(
            "INSERT INTO assignments (soldier_id, date, shift_type, confirmed) VALUES (?1, ?2, ?3, 0)",
        )
        .bind(soldier_id)
        .bind(date)
        .bind(shift_type)
        .execute(executor)
        .await?
        .last_insert_rowid();
        Ok(id)
    }
}
