#![allow(dead_code)]

use duty_planner_lib::application::dto::GenerationReport;
use duty_planner_lib::domain::models::{AssignmentRow, Soldier};

pub fn show_day_schedule_debug_data(rows: &[AssignmentRow]) {
    println!("\n=======================================================");
    println!("[DEBUG] schedule ({} assignments)", rows.len());
    println!("=======================================================");
    for row in rows {
        println!(
            "   #{:<4} {} | {:<24} -> {} {} (id {}){}",
            row.id,
            row.date,
            row.shift_type,
            row.soldier_rank,
            row.soldier_name,
            row.soldier_id,
            if row.confirmed { " ✔" } else { "" }
        );
    }
    println!("=======================================================\n");
}

pub fn show_generation_report_debug_data(report: &GenerationReport) {
    println!("\n=======================================================");
    println!(
        "[DEBUG] generation {} : {}/{} filled, {} replaced",
        report.date,
        report.filled(),
        report.required_slots.len(),
        report.replaced
    );
    println!("=======================================================");
    for a in &report.assignments {
        println!("   ┣ {:<24} -> soldier {}", a.shift_type, a.soldier_id);
    }
    for slot in &report.unfilled_slots {
        println!("   ┣ {:<24} -> (none)", slot);
    }
    println!("=======================================================\n");
}

pub fn show_roster_debug_data(soldiers: &[Soldier]) {
    println!("\n-------------------------------------------------------");
    for s in soldiers {
        println!(
            "   {} {} [{}] services={} available={}",
            s.id, s.name, s.role, s.total_services, s.is_available
        );
    }
    println!("-------------------------------------------------------\n");
}
