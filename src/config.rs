use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::duty_roster::DutyRoster;
use crate::error::{PlannerError, Result};

pub const DEFAULT_DATABASE_PATH: &str = "instance/dutyplanner.db";

/// Process-wide settings. The roster (slot list and role keywords) is the
/// same for every date.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// SQLite file, created together with its parent directory if missing
    pub database_path: PathBuf,
    pub max_connections: u32,
    pub roster: DutyRoster,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            max_connections: 5,
            roster: DutyRoster::default(),
        }
    }
}

impl PlannerConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Default::default()
        }
    }

    pub fn with_roster(mut self, roster: DutyRoster) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Reads a roster from JSON:
///
/// ```json
/// { "slots": ["Σκοπιά 00:00-02:00", "Κουζίνα Πρωί"], "role_keywords": ["Σκοπιά", "Κουζίνα"] }
/// ```
pub fn load_roster(path: &Path) -> Result<DutyRoster> {
    let text = fs::read_to_string(path)
        .map_err(|e| PlannerError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let roster: DutyRoster = serde_json::from_str(&text)
        .map_err(|e| PlannerError::Config(format!("invalid roster in '{}': {e}", path.display())))?;

    roster.validate().map_err(PlannerError::Config)?;
    Ok(roster)
}
