use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

pub type SoldierId = i64;
pub type AssignmentId = i64;
pub type UnavailabilityId = i64;

// --- 1. Soldier ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Soldier {
    pub id: SoldierId,
    pub name: String,
    pub rank: String,
    /// Capability tag, matched by substring against slot labels
    pub role: String,
    /// Fairness counter. Only the schedule generator changes it.
    pub total_services: i64,
    pub is_available: bool,
}

// --- 2. Assignment ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Assignment {
    pub id: AssignmentId,
    pub soldier_id: SoldierId,
    pub date: NaiveDate,
    pub shift_type: String,
    pub confirmed: bool,
}

// --- 3. Unavailability ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Unavailability {
    pub id: UnavailabilityId,
    pub soldier_id: SoldierId,
    pub date: NaiveDate,
    pub reason: String,
}

// --- joined rows (display) ---

/// Assignment joined with the assigned soldier's name and rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct AssignmentRow {
    pub id: AssignmentId,
    pub soldier_id: SoldierId,
    pub soldier_name: String,
    pub soldier_rank: String,
    pub date: NaiveDate,
    pub shift_type: String,
    pub confirmed: bool,
}

/// Unavailability joined with the soldier's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UnavailabilityRow {
    pub id: UnavailabilityId,
    pub soldier_id: SoldierId,
    pub soldier_name: String,
    pub date: NaiveDate,
    pub reason: String,
}
