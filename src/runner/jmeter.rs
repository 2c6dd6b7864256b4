//! JMeter runner implementation
//!
//! Runs `.jmx` test plans in non-GUI mode and captures the console summary,
//! or launches the interactive GUI as a detached process.

use super::exec::{
    expect_success, resolve_artifact, resolve_binary, run_captured, run_captured_timeout,
    spawn_detached, ArtifactKind,
};
use super::Runner;
use crate::config::JmeterConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tracing::{debug, info};

const TOOL_LABEL: &str = "JMeter test";

/// Per-run options for a JMeter test plan
#[derive(Debug, Clone, Default)]
pub struct JmeterOptions {
    /// Test duration in seconds, passed as `-J duration=<s>`
    pub duration_secs: Option<u32>,
    /// Virtual user count, passed as `-J threads=<n>`
    pub threads: Option<u32>,
    /// Wall-clock limit for the non-GUI run; the child is killed when it
    /// expires. No limit by default.
    pub timeout: Option<Duration>,
}

/// Acknowledgment for a detached GUI launch
///
/// Deliberately a distinct type from the synchronous run's return value:
/// nobody waits on the GUI process, so no real result can exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiLaunch {
    pub pid: u32,
}

/// Runner for JMeter test plans
#[derive(Debug, Clone, Default)]
pub struct JmeterRunner {
    /// Path to the JMeter binary (defaults to "jmeter" in PATH)
    binary: String,
    /// Extra JVM options forwarded to the child as JAVA_OPTS
    java_opts: Option<String>,
}

impl JmeterRunner {
    pub fn new() -> Self {
        Self {
            binary: "jmeter".to_string(),
            java_opts: None,
        }
    }

    pub fn from_config(config: &JmeterConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            java_opts: config.java_opts.clone(),
        }
    }

    pub fn with_path<S: Into<String>>(path: S) -> Self {
        Self {
            binary: path.into(),
            java_opts: None,
        }
    }

    pub fn with_java_opts<S: Into<String>>(mut self, opts: S) -> Self {
        self.java_opts = Some(opts.into());
        self
    }

    fn build_args(plan: &Path, options: &JmeterOptions, non_gui: bool) -> Vec<String> {
        let mut args = Vec::new();
        if non_gui {
            args.push("-n".to_string());
        }
        args.push("-t".to_string());
        args.push(plan.display().to_string());
        if let Some(threads) = options.threads {
            args.push("-J".to_string());
            args.push(format!("threads={threads}"));
        }
        if let Some(duration) = options.duration_secs {
            args.push("-J".to_string());
            args.push(format!("duration={duration}"));
        }
        args
    }

    fn command(&self, plan: &Path, options: &JmeterOptions, non_gui: bool) -> Result<Command> {
        let binary = resolve_binary("JMeter", &self.binary)?;
        info!("JMeter binary path: {}", binary.display());

        let mut cmd = Command::new(binary);
        cmd.args(Self::build_args(plan, options, non_gui));

        if let Some(ref java_opts) = self.java_opts {
            debug!("JMETER_JAVA_OPTS: {java_opts}");
            let base = std::env::var("JAVA_OPTS").unwrap_or_default();
            cmd.env("JAVA_OPTS", format!("{base} {java_opts}").trim().to_string());
        }

        Ok(cmd)
    }

    /// Run a test plan in non-GUI mode, blocking until the tool exits.
    ///
    /// Returns the tool's own console report (stdout) verbatim on success.
    pub fn run(&self, plan: &Path, options: &JmeterOptions) -> Result<String> {
        let plan = resolve_artifact(plan, ArtifactKind::File { extension: Some("jmx") })?;
        let mut cmd = self.command(&plan, options, true)?;

        let result = match options.timeout {
            Some(timeout) => run_captured_timeout(&mut cmd, timeout, TOOL_LABEL)?,
            None => run_captured(&mut cmd)?,
        };

        expect_success(TOOL_LABEL, result)
    }

    /// Launch the JMeter GUI on a test plan, detached.
    ///
    /// Fire-and-forget: the process is not awaited and no output is
    /// captured, so tool-level failures cannot be observed here.
    pub fn launch_gui(&self, plan: &Path, options: &JmeterOptions) -> Result<GuiLaunch> {
        let plan = resolve_artifact(plan, ArtifactKind::File { extension: Some("jmx") })?;
        let mut cmd = self.command(&plan, options, false)?;

        let pid = spawn_detached(&mut cmd)?;
        info!("JMeter GUI launched (pid {pid})");
        Ok(GuiLaunch { pid })
    }
}

impl Runner for JmeterRunner {
    fn tool_name(&self) -> &'static str {
        "JMeter"
    }

    fn binary(&self) -> &str {
        &self.binary
    }
}
