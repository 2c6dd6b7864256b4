//! Gatling runner implementation
//!
//! Gatling simulations live inside a Maven or Gradle project; the runner
//! drives the project's own wrapper script rather than a standalone binary.

use super::exec::{expect_success, resolve_artifact, run_captured, ArtifactKind};
use crate::error::{Result, RigError};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;
use tracing::debug;

const TOOL_LABEL: &str = "Gatling simulation";

/// Build tool driving the simulation project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    /// Wrapper script name inside the simulation directory
    fn wrapper_name(self) -> &'static str {
        match (self, cfg!(windows)) {
            (BuildTool::Maven, true) => "mvnw.cmd",
            (BuildTool::Maven, false) => "mvnw",
            (BuildTool::Gradle, true) => "gradlew.cmd",
            (BuildTool::Gradle, false) => "gradlew",
        }
    }
}

impl FromStr for BuildTool {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mvn" | "maven" => Ok(BuildTool::Maven),
            "gradle" => Ok(BuildTool::Gradle),
            other => Err(RigError::ConfigError(format!(
                "Unsupported Gatling build tool: {other}. Supported: mvn, gradle"
            ))),
        }
    }
}

/// Runner for Gatling simulation projects
#[derive(Debug, Clone, Copy, Default)]
pub struct GatlingRunner;

impl GatlingRunner {
    pub fn new() -> Self {
        Self
    }

    fn locate_wrapper(directory: &Path, build_tool: BuildTool) -> Result<PathBuf> {
        let wrapper = directory.join(build_tool.wrapper_name());
        if wrapper.is_file() {
            Ok(wrapper)
        } else {
            Err(RigError::ToolNotFound {
                tool: build_tool.wrapper_name().to_string(),
                path: directory.to_path_buf(),
            })
        }
    }

    fn build_args(
        directory: &Path,
        simulation_class: Option<&str>,
        build_tool: BuildTool,
    ) -> Vec<String> {
        match build_tool {
            BuildTool::Maven => {
                let mut args = vec!["io.gatling:gatling-maven-plugin:test".to_string()];
                if let Some(class) = simulation_class {
                    args.push(format!("-Dgatling.simulationClass={class}"));
                }
                args.push(format!("-Dgatling.directory={}", directory.display()));
                args
            }
            BuildTool::Gradle => {
                let mut args = vec!["gatlingRun".to_string()];
                if let Some(class) = simulation_class {
                    args.push(format!("--simulation={class}"));
                }
                args
            }
        }
    }

    /// Run a simulation project, blocking until the build tool exits.
    ///
    /// The wrapper script is executed with the simulation directory as
    /// working directory.
    pub fn run(
        &self,
        directory: &Path,
        simulation_class: Option<&str>,
        build_tool: BuildTool,
    ) -> Result<String> {
        let directory = resolve_artifact(directory, ArtifactKind::Directory)?;
        let wrapper = Self::locate_wrapper(&directory, build_tool)?;
        debug!("Gatling wrapper: {}", wrapper.display());

        let mut cmd = Command::new(wrapper);
        cmd.args(Self::build_args(&directory, simulation_class, build_tool));
        cmd.current_dir(&directory);

        let result = run_captured(&mut cmd)?;
        expect_success(TOOL_LABEL, result)
    }
}
