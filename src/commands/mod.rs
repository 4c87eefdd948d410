pub mod config;
pub mod day;
pub mod list;
pub mod week;
