pub mod bedtime;
pub mod config;
pub mod model;
