//! JMeter command implementation

use crate::config::Config;
use crate::error::Result;
use crate::runner::{JmeterOptions, JmeterRunner};
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

/// Execute the jmeter command
pub fn execute_jmeter(
    config: &Config,
    plan: &Path,
    duration: Option<u32>,
    threads: Option<u32>,
    timeout_secs: Option<u64>,
    gui: bool,
) -> Result<()> {
    let runner = JmeterRunner::from_config(&config.jmeter);
    let options = JmeterOptions {
        duration_secs: duration,
        threads,
        timeout: timeout_secs.map(Duration::from_secs),
    };

    if gui {
        println!("{} Launching JMeter GUI: {}", "→".blue(), plan.display());
        let launch = runner.launch_gui(plan, &options)?;
        println!("{} JMeter GUI launched (pid {})", "✓".green(), launch.pid);
        return Ok(());
    }

    println!("{} Running JMeter test plan: {}\n", "→".blue(), plan.display());
    let report = runner.run(plan, &options)?;

    if !report.is_empty() {
        println!("{report}");
    }
    println!("{} JMeter run completed", "✓".green());

    Ok(())
}
