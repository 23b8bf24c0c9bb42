use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::{Assignment, AssignmentRow};

/// Outcome of `ScheduleService::generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub date: NaiveDate,
    pub required_slots: Vec<String>,
    /// In slot order
    pub assignments: Vec<Assignment>,
    /// Slots that had no eligible candidate
    pub unfilled_slots: Vec<String>,
    /// Rows deleted by the reset step
    pub replaced: u64,
}

impl GenerationReport {
    pub fn filled(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_complete(&self) -> bool {
        self.unfilled_slots.is_empty()
    }
}

/// Schedule page for a single date
#[derive(Debug, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub assignments: Vec<AssignmentRow>,
}

impl DaySchedule {
    pub fn is_confirmed(&self) -> bool {
        !self.assignments.is_empty() && self.assignments.iter().all(|a| a.confirmed)
    }
}

/// What a soldier or unavailability mutation did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// Machine-readable acknowledgement of a single-record mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordChange {
    pub id: i64,
    pub change: ChangeKind,
}

impl RecordChange {
    pub fn created(id: i64) -> Self {
        Self { id, change: ChangeKind::Created }
    }

    pub fn updated(id: i64) -> Self {
        Self { id, change: ChangeKind::Updated }
    }

    pub fn deleted(id: i64) -> Self {
        Self { id, change: ChangeKind::Deleted }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationReport {
    pub date: NaiveDate,
    pub confirmed: u64,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub total_soldiers: i64,
    pub today: NaiveDate,
    pub tomorrow: Option<NaiveDate>,
}
