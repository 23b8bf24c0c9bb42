use std::fs;

use sqlx::{
    sqlite::{
        SqliteConnectOptions,
        SqlitePoolOptions,
    },
    SqlitePool,
};

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

use application::schedule_service::ScheduleService;
use config::PlannerConfig;
use domain::duty_roster::DutyRoster;
use error::{PlannerError, Result};
use infrastructure::assignment_repo::AssignmentRepository;
use infrastructure::soldier_repo::SoldierRepository;
use infrastructure::unavailability_repo::UnavailabilityRepository;

// Holds every repository plus the generator
pub struct AppServices {
    pub soldier: SoldierRepository,
    pub unavailability: UnavailabilityRepository,
    pub assignment: AssignmentRepository,
    pub schedule: ScheduleService,
}

impl AppServices {
    pub fn new(pool: SqlitePool, roster: DutyRoster) -> Self {
        Self {
            // the pool is reference counted, clones are cheap
            soldier: SoldierRepository::new(pool.clone()),
            unavailability: UnavailabilityRepository::new(pool.clone()),
            assignment: AssignmentRepository::new(pool.clone()),
            schedule: ScheduleService::new(pool, roster),
        }
    }
}

/// Opens (creating if needed) the SQLite database and applies migrations.
pub async fn connect(config: &PlannerConfig) -> Result<SqlitePool> {
    // --- parent directory (idempotent) ---
    if let Some(dir) = config.database_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| {
            PlannerError::Config(format!("cannot create '{}': {e}", dir.display()))
        })?;
    }

    tracing::debug!(path = %config.database_path.display(), "Opening database");

    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// `connect` + `AppServices::new` with the configured roster.
pub async fn open(config: &PlannerConfig) -> Result<AppServices> {
    let pool = connect(config).await?;
    Ok(AppServices::new(pool, config.roster.clone()))
}
