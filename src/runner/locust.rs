//! Locust runner implementation
//!
//! Unlike the other tools, Locust reports a structured result: the caller
//! receives status plus both captured streams, and decides what to render.

use super::exec::{resolve_artifact, resolve_binary, run_captured, ArtifactKind};
use super::{Runner, RunStatus};
use crate::config::LocustConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Per-run options for a Locust test
#[derive(Debug, Clone)]
pub struct LocustOptions {
    /// Target host URL to load test
    pub host: String,
    /// Number of concurrent users to simulate
    pub users: u32,
    /// Users started per second during ramp-up
    pub spawn_rate: u32,
    /// Test duration in Locust's grammar ("30s", "1m")
    pub run_time: String,
    /// Batch mode; when false Locust serves its web control UI instead
    pub headless: bool,
}

impl From<&LocustConfig> for LocustOptions {
    fn from(config: &LocustConfig) -> Self {
        Self {
            host: config.host.clone(),
            users: config.users,
            spawn_rate: config.spawn_rate,
            run_time: config.run_time.clone(),
            headless: config.headless,
        }
    }
}

/// Structured outcome of a Locust run
///
/// `status` switches on the exit code alone; both streams are carried
/// regardless of outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocustRunResult {
    pub status: RunStatus,
    /// Captured standard output
    pub output: String,
    /// Captured standard error
    pub error: String,
}

/// Runner for Locust test files
#[derive(Debug, Clone, Default)]
pub struct LocustRunner {
    /// Path to the locust binary (defaults to "locust" in PATH)
    binary: String,
}

impl LocustRunner {
    pub fn new() -> Self {
        Self {
            binary: "locust".to_string(),
        }
    }

    pub fn from_config(config: &LocustConfig) -> Self {
        Self {
            binary: config.binary.clone(),
        }
    }

    pub fn with_path<S: Into<String>>(path: S) -> Self {
        Self { binary: path.into() }
    }

    fn build_args(test_file: &Path, options: &LocustOptions) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            test_file.display().to_string(),
            "--host".to_string(),
            options.host.clone(),
        ];
        if options.headless {
            args.push("--headless".to_string());
            args.push("-u".to_string());
            args.push(options.users.to_string());
            args.push("-r".to_string());
            args.push(options.spawn_rate.to_string());
            args.push("-t".to_string());
            args.push(options.run_time.clone());
        }
        args
    }

    /// Run a Locust test file, blocking until the tool exits.
    ///
    /// The test file is any script Locust accepts, so only existence is
    /// validated, not the extension.
    pub fn run(&self, test_file: &Path, options: &LocustOptions) -> Result<LocustRunResult> {
        let test_file = resolve_artifact(test_file, ArtifactKind::File { extension: None })?;
        let binary = resolve_binary("Locust", &self.binary)?;
        debug!("Locust binary path: {}", binary.display());

        let mut cmd = Command::new(binary);
        cmd.args(Self::build_args(&test_file, options));

        let result = run_captured(&mut cmd)?;
        Ok(LocustRunResult {
            status: result.status,
            output: result.stdout,
            error: result.stderr,
        })
    }
}

impl Runner for LocustRunner {
    fn tool_name(&self) -> &'static str {
        "Locust"
    }

    fn binary(&self) -> &str {
        &self.binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocustConfig;

    fn default_options() -> LocustOptions {
        LocustOptions::from(&LocustConfig::default())
    }

    #[test]
    fn test_build_args_headless() {
        let options = default_options();
        let args = LocustRunner::build_args(Path::new("locustfile.py"), &options);
        assert_eq!(
            args,
            vec![
                "-f",
                "locustfile.py",
                "--host",
                "http://localhost:8089",
                "--headless",
                "-u",
                "100",
                "-r",
                "10",
                "-t",
                "30s"
            ]
        );
    }

    #[test]
    fn test_build_args_web_ui_omits_load_flags() {
        let options = LocustOptions {
            headless: false,
            ..default_options()
        };
        let args = LocustRunner::build_args(Path::new("locustfile.py"), &options);
        assert_eq!(args, vec!["-f", "locustfile.py", "--host", "http://localhost:8089"]);
    }

    #[test]
    fn test_result_serializes_status_as_lowercase() {
        let result = LocustRunResult {
            status: RunStatus::Success,
            output: "ok".to_string(),
            error: String::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");

        let result = LocustRunResult {
            status: RunStatus::Failure,
            output: String::new(),
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "error");
    }
}
