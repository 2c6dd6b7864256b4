//! Gatling command implementation

use crate::config::Config;
use crate::error::Result;
use crate::runner::{BuildTool, GatlingRunner};
use colored::Colorize;
use std::path::Path;

/// Execute the gatling command
pub fn execute_gatling(
    config: &Config,
    dir: &Path,
    simulation: Option<&str>,
    build_tool: Option<&str>,
) -> Result<()> {
    let build_tool: BuildTool = build_tool
        .unwrap_or(&config.gatling.build_tool)
        .parse()?;

    println!(
        "{} Running Gatling simulation in: {}\n",
        "→".blue(),
        dir.display()
    );

    let runner = GatlingRunner::new();
    let report = runner.run(dir, simulation, build_tool)?;

    if !report.is_empty() {
        println!("{report}");
    }
    println!("{} Gatling run completed", "✓".green());

    Ok(())
}
