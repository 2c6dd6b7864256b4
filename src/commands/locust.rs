//! Locust command implementation
//!
//! Renders the runner's structured result as JSON; the status line at the
//! end mirrors what the result already says.

use crate::config::Config;
use crate::error::Result;
use crate::runner::{LocustOptions, LocustRunner, RunStatus};
use colored::Colorize;
use std::path::Path;

/// Execute the locust command
pub fn execute_locust(
    config: &Config,
    test_file: &Path,
    host: Option<&str>,
    users: Option<u32>,
    spawn_rate: Option<u32>,
    run_time: Option<&str>,
    web_ui: bool,
) -> Result<()> {
    let defaults = &config.locust;
    let options = LocustOptions {
        host: host.unwrap_or(&defaults.host).to_string(),
        users: users.unwrap_or(defaults.users),
        spawn_rate: spawn_rate.unwrap_or(defaults.spawn_rate),
        run_time: run_time.unwrap_or(&defaults.run_time).to_string(),
        headless: if web_ui { false } else { defaults.headless },
    };

    let runner = LocustRunner::from_config(defaults);

    println!("{} Running Locust test: {}\n", "→".blue(), test_file.display());
    let result = runner.run(test_file, &options)?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    match result.status {
        RunStatus::Success => println!("\n{} Locust run completed", "✓".green()),
        RunStatus::Failure => println!("\n{} Locust run reported errors", "✗".red()),
    }

    Ok(())
}
