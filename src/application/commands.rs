use crate::application::dto::{ConfirmationReport, Dashboard, DaySchedule, GenerationReport};
use crate::application::time::{next_day, parse_date, today};
use crate::domain::models::{Soldier, SoldierId, UnavailabilityId, UnavailabilityRow};
use crate::error::{PlannerError, Result};
use crate::AppServices;

const NAME_MAX: usize = 120;
const RANK_MAX: usize = 60;
const ROLE_MAX: usize = 120;
const REASON_MAX: usize = 255;

/// Trims and checks a required text field.
fn required(field: &str, value: &str, max_chars: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PlannerError::Validation(format!("{field} is required")));
    }
    optional(field, value, max_chars)
}

fn optional(field: &str, value: &str, max_chars: usize) -> Result<String> {
    let value = value.trim();
    if value.chars().count() > max_chars {
        return Err(PlannerError::Validation(format!(
            "{field} is longer than {max_chars} characters"
        )));
    }
    Ok(value.to_string())
}

// --- Dashboard ---
pub async fn dashboard(services: &AppServices) -> Result<Dashboard> {
    let today = today();
    Ok(Dashboard {
        total_soldiers: services.soldier.count().await?,
        today,
        tomorrow: next_day(today),
    })
}

// --- Soldiers ---
pub async fn add_soldier(
    services: &AppServices,
    name: &str,
    rank: &str,
    role: &str,
    is_available: bool,
) -> Result<SoldierId> {
    let name = required("name", name, NAME_MAX)?;
    let rank = optional("rank", rank, RANK_MAX)?;
    let role = required("role", role, ROLE_MAX)?;

    let id = services.soldier.add_soldier(&name, &rank, &role, is_available).await?;
    tracing::info!(soldier_id = id, name = %name, role = %role, "Soldier added");
    Ok(id)
}

pub async fn list_soldiers(services: &AppServices) -> Result<Vec<Soldier>> {
    services.soldier.list_by_name().await
}

pub async fn get_soldier(services: &AppServices, soldier_id: SoldierId) -> Result<Soldier> {
    services.soldier.get_soldier(soldier_id).await
}

pub async fn edit_soldier(
    services: &AppServices,
    soldier_id: SoldierId,
    rank: &str,
    role: &str,
    is_available: bool,
) -> Result<()> {
    let rank = optional("rank", rank, RANK_MAX)?;
    let role = required("role", role, ROLE_MAX)?;

    services.soldier.update_soldier(soldier_id, &rank, &role, is_available).await?;
    tracing::info!(soldier_id, role = %role, is_available, "Soldier updated");
    Ok(())
}

pub async fn delete_soldier(services: &AppServices, soldier_id: SoldierId) -> Result<()> {
    services.soldier.delete_soldier(soldier_id).await?;
    tracing::info!(soldier_id, "Soldier deleted");
    Ok(())
}

// --- Unavailability ---
pub async fn add_unavailability(
    services: &AppServices,
    soldier_id: SoldierId,
    date_str: &str,
    reason: &str,
) -> Result<UnavailabilityId> {
    let reason = required("reason", reason, REASON_MAX)?;
    let date = parse_date(date_str)?;
    // surfaces a clean not-found instead of a foreign key error
    services.soldier.get_soldier(soldier_id).await?;

    let id = services.unavailability.add(soldier_id, date, &reason).await?;
    tracing::info!(unavailability_id = id, soldier_id, date = %date, "Unavailability added");
    Ok(id)
}

pub async fn delete_unavailability(
    services: &AppServices,
    unavailability_id: UnavailabilityId,
) -> Result<()> {
    services.unavailability.delete(unavailability_id).await?;
    tracing::info!(unavailability_id, "Unavailability deleted");
    Ok(())
}

/// Today's and future records
pub async fn list_upcoming_unavailability(services: &AppServices) -> Result<Vec<UnavailabilityRow>> {
    services.unavailability.list_upcoming(today()).await
}

// --- Schedule ---
pub async fn generate_schedule(services: &AppServices, date_str: &str) -> Result<GenerationReport> {
    services.schedule.generate(date_str).await
}

pub async fn show_schedule(services: &AppServices, date_str: &str) -> Result<DaySchedule> {
    let date = parse_date(date_str)?;
    let assignments = services.assignment.list_for_date(date).await?;
    Ok(DaySchedule { date, assignments })
}

/// Confirms every assignment of the date.
pub async fn confirm_schedule(services: &AppServices, date_str: &str) -> Result<ConfirmationReport> {
    let date = parse_date(date_str)?;
    let confirmed = services.assignment.confirm_date(date).await?;
    tracing::info!(date = %date, confirmed, "Schedule confirmed");
    Ok(ConfirmationReport { date, confirmed })
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("name", "  Παπαδόπουλος ", NAME_MAX).unwrap(), "Παπαδόπουλος");
    }

    #[test]
    fn test_required_rejects_blank() {
        let err = required("role", "   ", ROLE_MAX).unwrap_err();
        assert!(matches!(err, PlannerError::Validation(msg) if msg == "role is required"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 60 Greek letters are 120 bytes but fit the rank limit
        let rank = "Δ".repeat(RANK_MAX);
        assert!(optional("rank", &rank, RANK_MAX).is_ok());
        assert!(optional("rank", &format!("{rank}Δ"), RANK_MAX).is_err());
    }
}
