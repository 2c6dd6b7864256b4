//! k6 runner implementation

use super::exec::{expect_success, resolve_artifact, resolve_binary, run_captured, ArtifactKind};
use super::Runner;
use crate::config::K6Config;
use crate::error::Result;
use std::path::Path;
use std::process::Command;
use tracing::debug;

const TOOL_LABEL: &str = "k6 test";

/// Runner for k6 test scripts
#[derive(Debug, Clone, Default)]
pub struct K6Runner {
    /// Path to k6 binary (defaults to "k6" in PATH)
    binary: String,
}

impl K6Runner {
    pub fn new() -> Self {
        Self {
            binary: "k6".to_string(),
        }
    }

    pub fn from_config(config: &K6Config) -> Self {
        Self {
            binary: config.binary.clone(),
        }
    }

    pub fn with_path<S: Into<String>>(path: S) -> Self {
        Self { binary: path.into() }
    }

    fn build_args(script: &Path, duration: &str, vus: u32) -> Vec<String> {
        vec![
            "run".to_string(),
            "-d".to_string(),
            duration.to_string(),
            "-u".to_string(),
            vus.to_string(),
            script.display().to_string(),
        ]
    }

    /// Run a `.js` script, blocking until k6 exits.
    ///
    /// `duration` is an opaque string in k6's own duration grammar
    /// ("30s", "1m"); a malformed value surfaces as a tool-level error
    /// from the child, not from here.
    pub fn run(&self, script: &Path, duration: &str, vus: u32) -> Result<String> {
        let script = resolve_artifact(script, ArtifactKind::File { extension: Some("js") })?;
        let binary = resolve_binary("k6", &self.binary)?;
        debug!("k6 binary path: {}", binary.display());

        let mut cmd = Command::new(binary);
        cmd.args(Self::build_args(&script, duration, vus));

        let result = run_captured(&mut cmd)?;
        expect_success(TOOL_LABEL, result)
    }
}

impl Runner for K6Runner {
    fn tool_name(&self) -> &'static str {
        "k6"
    }

    fn binary(&self) -> &str {
        &self.binary
    }

    fn version_arg(&self) -> &'static str {
        "version"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k6_runner_creation() {
        let runner = K6Runner::new();
        assert_eq!(runner.binary, "k6");

        let runner = K6Runner::with_path("/usr/local/bin/k6");
        assert_eq!(runner.binary, "/usr/local/bin/k6");
    }

    #[test]
    fn test_build_args_order() {
        let args = K6Runner::build_args(Path::new("load.js"), "30s", 10);
        assert_eq!(args, vec!["run", "-d", "30s", "-u", "10", "load.js"]);
    }

    #[test]
    fn test_duration_passed_through_unparsed() {
        // Malformed durations are the tool's problem, not ours
        let args = K6Runner::build_args(Path::new("load.js"), "not-a-duration", 1);
        assert_eq!(args[2], "not-a-duration");
    }
}
