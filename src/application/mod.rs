pub mod commands;
pub mod dto;
pub mod schedule_service;
pub mod time;
