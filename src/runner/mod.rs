//! Runners for the supported load-testing tools
//!
//! Each runner resolves its inputs, builds a command line for one external
//! tool, executes it and normalizes the outcome. Runners share no state;
//! concurrent invocations are independent.

pub mod exec;
pub mod gatling;
pub mod jmeter;
pub mod k6;
pub mod locust;

pub use gatling::{BuildTool, GatlingRunner};
pub use jmeter::{GuiLaunch, JmeterOptions, JmeterRunner};
pub use k6::K6Runner;
pub use locust::{LocustOptions, LocustRunResult, LocustRunner};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Terminal status of a tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    #[serde(rename = "error")]
    Failure,
}

/// Captured outcome of a completed child process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: RunStatus,
    /// Exit code of the tool (-1 if terminated by signal)
    pub exit_code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

/// Trait for runners whose binary is known up front
///
/// Gatling is not covered: its entry point is a wrapper script located
/// inside the simulation directory, so availability is only decided at
/// run time.
pub trait Runner {
    /// Tool name for messages and log lines
    fn tool_name(&self) -> &'static str;

    /// Configured binary path or bare name
    fn binary(&self) -> &str;

    /// Version-probe argument understood by the tool
    fn version_arg(&self) -> &'static str {
        "--version"
    }

    /// Check if the tool is available (installed)
    fn is_available(&self) -> bool {
        std::process::Command::new(self.binary())
            .arg(self.version_arg())
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Get the version string reported by the tool
    fn version(&self) -> Result<String> {
        let output = std::process::Command::new(self.binary())
            .arg(self.version_arg())
            .output()?;

        if output.status.success() {
            // Some tools (JMeter) print the version banner on stdout,
            // others on stderr.
            let text = if output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stderr).trim().to_string()
            } else {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            };
            Ok(text)
        } else {
            Err(crate::error::RigError::Unexpected(format!(
                "Failed to get {} version",
                self.tool_name()
            )))
        }
    }
}
