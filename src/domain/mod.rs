pub mod models;
pub mod duty_roster;
pub mod schedule_logic;
