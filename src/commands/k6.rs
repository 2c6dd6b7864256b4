//! k6 command implementation

use crate::config::Config;
use crate::error::Result;
use crate::runner::{K6Runner, Runner};
use colored::Colorize;
use std::path::Path;

/// Execute the k6 command
pub fn execute_k6(config: &Config, script: &Path, duration: &str, vus: u32) -> Result<()> {
    let runner = K6Runner::from_config(&config.k6);

    if runner.is_available() {
        println!("{} k6 version: {}", "✓".green(), runner.version()?);
    }

    println!("{} Running k6 script: {}\n", "→".blue(), script.display());
    let report = runner.run(script, duration, vus)?;

    if !report.is_empty() {
        println!("{report}");
    }
    println!("{} k6 run completed", "✓".green());

    Ok(())
}
