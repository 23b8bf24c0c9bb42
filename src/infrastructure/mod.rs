pub mod soldier_repo;
pub mod unavailability_repo;
pub mod assignment_repo;
