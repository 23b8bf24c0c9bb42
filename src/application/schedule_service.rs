use std::collections::HashSet;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::application::dto::GenerationReport;
use crate::application::time::parse_date;
use crate::domain::duty_roster::DutyRoster;
use crate::domain::models::{Assignment, SoldierId};
use crate::domain::schedule_logic::plan_day;
use crate::error::Result;
use crate::infrastructure::assignment_repo::AssignmentRepository;
use crate::infrastructure::soldier_repo::SoldierRepository;
use crate::infrastructure::unavailability_repo::UnavailabilityRepository;

/// Daily schedule generator.
///
/// Every run replaces the target date's assignments and bumps the fairness
/// counter of each picked soldier. Running twice for the same date keeps the
/// one-assignment-per-slot structure but may pick different soldiers the
/// second time, because the first run already raised the counters.
pub struct ScheduleService {
    pool: SqlitePool,
    roster: DutyRoster,
}

impl ScheduleService {
    pub fn new(pool: SqlitePool, roster: DutyRoster) -> Self {
        Self { pool, roster }
    }

    pub fn roster(&self) -> &DutyRoster {
        &self.roster
    }

    /// Generates the schedule for a `YYYY-MM-DD` date.
    ///
    /// An unparsable date fails before the store is touched. Everything else
    /// (reset, reads, inserts, counter updates) runs in one transaction, so a
    /// store failure leaves the previous schedule and counters as they were,
    /// and readers never see the date half-written.
    pub async fn generate(&self, date_str: &str) -> Result<GenerationReport> {
        let date = parse_date(date_str)?;

        match self.generate_in_transaction(date).await {
            Ok(report) => {
                tracing::info!(
                    date = %report.date,
                    filled = report.filled(),
                    required = report.required_slots.len(),
                    replaced = report.replaced,
                    "Schedule generated"
                );
                for slot in &report.unfilled_slots {
                    tracing::warn!(date = %date, slot = %slot, "No eligible soldier for slot");
                }
                Ok(report)
            }
            Err(e) => {
                tracing::error!(date = %date, error = %e, "Schedule generation rolled back");
                Err(e)
            }
        }
    }

    async fn generate_in_transaction(&self, date: NaiveDate) -> Result<GenerationReport> {
        // 1. transaction start (dropped without commit => rollback)
        let mut tx = self.pool.begin().await?;

        // 2. reset, unconditionally
        let replaced = AssignmentRepository::delete_for_date(&mut *tx, date).await?;

        // 3. who is off on that date
        let unavailable: HashSet<SoldierId> =
            UnavailabilityRepository::list_for_date(&mut *tx, date)
                .await?
                .into_iter()
                .map(|u| u.soldier_id)
                .collect();

        // 4. greedy fill over the fixed slot order
        let soldiers = SoldierRepository::list_soldiers(&mut *tx).await?;
        let plan = plan_day(&self.roster, &soldiers, &unavailable);

        // 5. write back
        let mut assignments = Vec::with_capacity(plan.picks.len());
        for pick in &plan.picks {
            let id = AssignmentRepository::create_assignment(&mut *tx, pick.soldier_id, date, &pick.slot).await?;
            SoldierRepository::increment_service_count(&mut *tx, pick.soldier_id).await?;

            tracing::debug!(date = %date, slot = %pick.slot, soldier_id = pick.soldier_id, "Slot filled");
            assignments.push(Assignment {
                id,
                soldier_id: pick.soldier_id,
                date,
                shift_type: pick.slot.clone(),
                confirmed: false,
            });
        }

        // 6. commit
        tx.commit().await?;

        Ok(GenerationReport {
            date,
            required_slots: self.roster.slots.clone(),
            assignments,
            unfilled_slots: plan.unfilled,
            replaced,
        })
    }
}
