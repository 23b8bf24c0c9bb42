mod tools;

#[cfg(test)]
mod command_tests {
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use duty_planner_lib::{
        application::commands::*,
        application::time::{format_date, next_day, today},
        config::PlannerConfig,
        domain::duty_roster::DutyRoster,
        error::PlannerError,
        AppServices,
    };

    use crate::tools;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create memory pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    async fn setup_test_services() -> AppServices {
        AppServices::new(setup_test_db().await, DutyRoster::default())
    }

    #[tokio::test]
    async fn test_full_scenario() {
        let services = setup_test_services().await;

        // 1. roster
        let names = [
            ("Αθανασίου", "Σκοπιά"),
            ("Βλάχος", "Σκοπιά"),
            ("Γιαννάκης", "Σκοπιά"),
            ("Δούκας", "Θαλαμοφύλακας"),
            ("Ευθυμίου", "Κουζίνα"),
        ];
        let mut ids = Vec::new();
        for (name, role) in names {
            ids.push(add_soldier(&services, name, "Στρατιώτης", role, true).await.unwrap());
        }
        let spare = add_soldier(&services, "Ζερβός", "", "Σκοπιά", true).await.unwrap();

        // 2. first watch soldier is on leave
        add_unavailability(&services, ids[0], "2026-06-01", "Άδεια").await.unwrap();

        // 3. generate
        let report = generate_schedule(&services, "2026-06-01").await.unwrap();
        tools::show_output::show_generation_report_debug_data(&report);
        assert!(report.is_complete());
        assert!(report.assignments.iter().all(|a| a.soldier_id != ids[0]));
        assert!(report.assignments.iter().any(|a| a.soldier_id == spare));

        // 4. view and confirm
        let schedule = show_schedule(&services, "2026-06-01").await.unwrap();
        tools::show_output::show_day_schedule_debug_data(&schedule.assignments);
        assert_eq!(schedule.assignments.len(), 5);
        assert!(!schedule.is_confirmed());

        let confirmation = confirm_schedule(&services, "2026-06-01").await.unwrap();
        assert_eq!(confirmation.confirmed, 5);
        assert_eq!(confirmation.date, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
        let schedule = show_schedule(&services, "2026-06-01").await.unwrap();
        assert!(schedule.is_confirmed());

        // 5. counters moved only for assigned soldiers
        let roster = list_soldiers(&services).await.unwrap();
        tools::show_output::show_roster_debug_data(&roster);
        let on_leave = roster.iter().find(|s| s.id == ids[0]).unwrap();
        assert_eq!(on_leave.total_services, 0);
        assert_eq!(roster.iter().map(|s| s.total_services).sum::<i64>(), 5);
    }

    #[tokio::test]
    async fn test_regenerate_resets_confirmation() {
        let services = setup_test_services().await;
        add_soldier(&services, "Ηλίας", "", "Κουζίνα", true).await.unwrap();

        generate_schedule(&services, "2026-06-01").await.unwrap();
        confirm_schedule(&services, "2026-06-01").await.unwrap();
        generate_schedule(&services, "2026-06-01").await.unwrap();

        let schedule = show_schedule(&services, "2026-06-01").await.unwrap();
        assert_eq!(schedule.assignments.len(), 1);
        assert!(!schedule.assignments[0].confirmed);
    }

    #[tokio::test]
    async fn test_soldier_validation() {
        let services = setup_test_services().await;

        let no_name = add_soldier(&services, "  ", "", "Σκοπιά", true).await;
        assert!(matches!(no_name, Err(PlannerError::Validation(_))));

        let no_role = add_soldier(&services, "Θωμάς", "", "", true).await;
        assert!(matches!(no_role, Err(PlannerError::Validation(_))));

        let id = add_soldier(&services, " Θωμάς ", " Δεκανέας ", " Σκοπιά ", true).await.unwrap();
        let soldier = get_soldier(&services, id).await.unwrap();
        assert_eq!(soldier.name, "Θωμάς");
        assert_eq!(soldier.rank, "Δεκανέας");
        assert_eq!(soldier.role, "Σκοπιά");

        let blank_role = edit_soldier(&services, id, "", " ", true).await;
        assert!(matches!(blank_role, Err(PlannerError::Validation(_))));

        edit_soldier(&services, id, "", "Κουζίνα", false).await.unwrap();
        let soldier = get_soldier(&services, id).await.unwrap();
        assert_eq!(soldier.role, "Κουζίνα");
        assert!(!soldier.is_available);

        delete_soldier(&services, id).await.unwrap();
        assert!(matches!(get_soldier(&services, id).await, Err(PlannerError::SoldierNotFound(_))));
    }

    #[tokio::test]
    async fn test_unavailability_commands() {
        let services = setup_test_services().await;
        let id = add_soldier(&services, "Ιωάννου", "", "Σκοπιά", true).await.unwrap();

        let bad_date = add_unavailability(&services, id, "2026/06/01", "Άδεια").await;
        assert!(matches!(bad_date, Err(PlannerError::InvalidDateFormat(_))));

        let no_reason = add_unavailability(&services, id, "2026-06-01", "").await;
        assert!(matches!(no_reason, Err(PlannerError::Validation(_))));

        let no_soldier = add_unavailability(&services, 777, "2026-06-01", "Άδεια").await;
        assert!(matches!(no_soldier, Err(PlannerError::SoldierNotFound(777))));

        // upcoming list is relative to the real clock
        let tomorrow = next_day(today()).unwrap();
        let record = add_unavailability(&services, id, &format_date(tomorrow), "Άδεια").await.unwrap();
        let upcoming = list_upcoming_unavailability(&services).await.unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, record);

        delete_unavailability(&services, record).await.unwrap();
        assert!(list_upcoming_unavailability(&services).await.unwrap().is_empty());
        assert!(matches!(
            delete_unavailability(&services, record).await,
            Err(PlannerError::UnavailabilityNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_schedule_commands_reject_bad_dates() {
        let services = setup_test_services().await;
        for result in [
            show_schedule(&services, "2026-6-31").await.map(|_| ()),
            confirm_schedule(&services, "yesterday").await.map(|_| ()),
            generate_schedule(&services, "").await.map(|_| ()),
            confirm_schedule(&services, " 2026-06-01").await.map(|_| ()),
            show_schedule(&services, "+2026-06-01").await.map(|_| ()),
        ] {
            assert!(matches!(result, Err(PlannerError::InvalidDateFormat(_))));
        }
    }

    #[tokio::test]
    async fn test_dashboard() {
        let services = setup_test_services().await;
        add_soldier(&services, "Κωνσταντίνου", "", "Σκοπιά", true).await.unwrap();
        add_soldier(&services, "Λάμπρου", "", "Κουζίνα", false).await.unwrap();

        let dashboard = dashboard(&services).await.unwrap();
        assert_eq!(dashboard.total_soldiers, 2);
        assert_eq!(dashboard.tomorrow, next_day(dashboard.today));
    }

    #[tokio::test]
    async fn test_open_file_database() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = PlannerConfig::new(dir.path().join("nested").join("duty.db")).with_max_connections(1);

        let services = duty_planner_lib::open(&config).await.unwrap();
        add_soldier(&services, "Μαρκου", "", "Σκοπιά", true).await.unwrap();
        generate_schedule(&services, "2026-06-01").await.unwrap();

        // reopen: data persisted, migrations idempotent
        drop(services);
        let services = duty_planner_lib::open(&config).await.unwrap();
        assert_eq!(show_schedule(&services, "2026-06-01").await.unwrap().assignments.len(), 1);
    }
}
