pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod runner;
pub mod telemetry;

pub use error::{Result, RigError};
