use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use duty_planner_lib::application::commands;
use duty_planner_lib::application::dto::{
    ConfirmationReport, Dashboard, DaySchedule, GenerationReport, RecordChange,
};
use duty_planner_lib::application::time::format_date;
use duty_planner_lib::config::{load_roster, PlannerConfig, DEFAULT_DATABASE_PATH};
use duty_planner_lib::domain::duty_roster::DutyRoster;
use duty_planner_lib::domain::models::{Soldier, UnavailabilityRow};
use duty_planner_lib::error::Result;
use duty_planner_lib::AppServices;

#[derive(Parser)]
#[command(name = "duty-planner")]
#[command(version)]
#[command(about = "Fair daily duty rotation: soldiers, unavailability and schedules", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "DUTY_PLANNER_DB", default_value = DEFAULT_DATABASE_PATH)]
    db: PathBuf,

    /// JSON file with `slots` and `role_keywords`, replacing the built-in roster
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Soldier count, today and tomorrow
    Dashboard,

    /// Roster management
    Soldier {
        #[command(subcommand)]
        command: SoldierCommands,
    },

    /// Date-specific unavailability
    Unavailability {
        #[command(subcommand)]
        command: UnavailabilityCommands,
    },

    /// Daily schedules
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
}

#[derive(Subcommand)]
enum SoldierCommands {
    /// Adds a soldier
    Add {
        name: String,

        /// Capability tag, e.g. "Σκοπιά" or "Σκοπιά, Κουζίνα"
        #[arg(long)]
        role: String,

        #[arg(long, default_value = "")]
        rank: String,

        /// Register as globally unavailable
        #[arg(long)]
        unavailable: bool,
    },
    /// Lists soldiers by name
    List,
    /// Changes rank, role or availability
    Edit {
        id: i64,

        #[arg(long)]
        rank: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        available: Option<bool>,
    },
    /// Deletes a soldier with their assignments and unavailability
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum UnavailabilityCommands {
    /// Marks a soldier unavailable on a date (YYYY-MM-DD)
    Add {
        soldier_id: i64,
        date: String,
        reason: String,
    },
    /// Lists today's and future records
    List,
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ScheduleCommands {
    /// Generates (or regenerates) the schedule of a date (YYYY-MM-DD)
    Generate { date: String },
    /// Shows the schedule of a date
    Show { date: String },
    /// Confirms every assignment of a date
    Confirm { date: String },
    /// Lists the daily slots and the role keywords that gate them
    Slots,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("failed to encode output: {e}"),
    }
}

fn print_soldiers(soldiers: &[Soldier]) {
    println!("{:>4}  {:<24} {:<14} {:<24} {:>8}  available", "id", "name", "rank", "role", "services");
    for s in soldiers {
        println!(
            "{:>4}  {:<24} {:<14} {:<24} {:>8}  {}",
            s.id,
            s.name,
            s.rank,
            s.role,
            s.total_services,
            if s.is_available { "yes" } else { "no" }
        );
    }
}

fn print_unavailability(rows: &[UnavailabilityRow]) {
    if rows.is_empty() {
        println!("(no upcoming unavailability)");
        return;
    }
    for r in rows {
        println!("{:>4}  {}  {:<24} {}", r.id, format_date(r.date), r.soldier_name, r.reason);
    }
}

fn print_schedule(schedule: &DaySchedule) {
    println!("Schedule for {}", format_date(schedule.date));
    if schedule.assignments.is_empty() {
        println!("(no assignments)");
        return;
    }
    for a in &schedule.assignments {
        println!(
            "  {:<28} {} {} [{}]",
            a.shift_type,
            a.soldier_rank,
            a.soldier_name,
            if a.confirmed { "confirmed" } else { "pending" }
        );
    }
}

fn print_report(report: &GenerationReport) {
    println!(
        "Schedule generated for {}: {}/{} slots filled",
        format_date(report.date),
        report.filled(),
        report.required_slots.len()
    );
    for slot in &report.unfilled_slots {
        println!("  unfilled: {slot}");
    }
}

fn print_roster(roster: &DutyRoster) {
    for (index, slot) in roster.slots.iter().enumerate() {
        match roster.required_keyword(slot) {
            Some(keyword) => println!("{:>2}. {:<28} role: {keyword}", index + 1, slot),
            None => println!("{:>2}. {:<28} open to any role", index + 1, slot),
        }
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("Soldiers: {}", dashboard.total_soldiers);
    println!("Today:    {}", format_date(dashboard.today));
    if let Some(tomorrow) = dashboard.tomorrow {
        println!("Tomorrow: {}", format_date(tomorrow));
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = PlannerConfig::new(cli.db);
    if let Some(path) = &cli.config {
        config = config.with_roster(load_roster(path)?);
    }
    let services: AppServices = duty_planner_lib::open(&config).await?;
    let json = cli.json;

    match cli.command {
        Commands::Dashboard => {
            let dashboard = commands::dashboard(&services).await?;
            if json { print_json(&dashboard) } else { print_dashboard(&dashboard) }
        }

        Commands::Soldier { command } => match command {
            SoldierCommands::Add { name, role, rank, unavailable } => {
                let id = commands::add_soldier(&services, &name, &rank, &role, !unavailable).await?;
                if json {
                    print_json(&RecordChange::created(id))
                } else {
                    println!("Soldier {name} added (id {id})")
                }
            }
            SoldierCommands::List => {
                let soldiers = commands::list_soldiers(&services).await?;
                if json { print_json(&soldiers) } else { print_soldiers(&soldiers) }
            }
            SoldierCommands::Edit { id, rank, role, available } => {
                let current = commands::get_soldier(&services, id).await?;
                commands::edit_soldier(
                    &services,
                    id,
                    rank.as_deref().unwrap_or(&current.rank),
                    role.as_deref().unwrap_or(&current.role),
                    available.unwrap_or(current.is_available),
                )
                .await?;
                if json {
                    print_json(&RecordChange::updated(id))
                } else {
                    println!("Soldier {} updated", current.name)
                }
            }
            SoldierCommands::Delete { id } => {
                let soldier = commands::get_soldier(&services, id).await?;
                commands::delete_soldier(&services, id).await?;
                if json {
                    print_json(&RecordChange::deleted(id))
                } else {
                    println!("Soldier {} deleted", soldier.name)
                }
            }
        },

        Commands::Unavailability { command } => match command {
            UnavailabilityCommands::Add { soldier_id, date, reason } => {
                let id = commands::add_unavailability(&services, soldier_id, &date, &reason).await?;
                if json {
                    print_json(&RecordChange::created(id))
                } else {
                    println!("Unavailability record added (id {id})")
                }
            }
            UnavailabilityCommands::List => {
                let rows = commands::list_upcoming_unavailability(&services).await?;
                if json { print_json(&rows) } else { print_unavailability(&rows) }
            }
            UnavailabilityCommands::Delete { id } => {
                commands::delete_unavailability(&services, id).await?;
                if json {
                    print_json(&RecordChange::deleted(id))
                } else {
                    println!("Unavailability record deleted")
                }
            }
        },

        Commands::Schedule { command } => match command {
            ScheduleCommands::Generate { date } => {
                let report = commands::generate_schedule(&services, &date).await?;
                if json { print_json(&report) } else { print_report(&report) }
            }
            ScheduleCommands::Show { date } => {
                let schedule = commands::show_schedule(&services, &date).await?;
                if json { print_json(&schedule) } else { print_schedule(&schedule) }
            }
            ScheduleCommands::Confirm { date } => {
                let report = commands::confirm_schedule(&services, &date).await?;
                if json {
                    print_json(&report)
                } else {
                    println!("{} assignments confirmed for {}", report.confirmed, format_date(report.date))
                }
            }
            ScheduleCommands::Slots => {
                let roster = services.schedule.roster();
                if json { print_json(roster) } else { print_roster(roster) }
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
