//! Dispatch layer: selects a runner for a request and owns the lifetime
//! of materialized artifacts
//!
//! Callers hand over either a filesystem path or raw uploaded content.
//! Content is written to a uniquely-named temp file carrying the tool's
//! expected extension, and that file is removed once the runner returns,
//! on the error path as much as the success path.

use crate::config::Config;
use crate::error::{Result, RigError};
use crate::runner::{
    BuildTool, GatlingRunner, GuiLaunch, JmeterOptions, JmeterRunner, K6Runner, LocustOptions,
    LocustRunResult, LocustRunner,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Supported load-testing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Jmeter,
    K6,
    Locust,
    Gatling,
}

impl ToolKind {
    /// Suffix given to a materialized upload, or None when the tool's
    /// artifact is a directory and uploads make no sense.
    fn temp_suffix(self) -> Option<&'static str> {
        match self {
            ToolKind::Jmeter => Some(".jmx"),
            ToolKind::K6 => Some(".js"),
            ToolKind::Locust => Some(".py"),
            ToolKind::Gatling => None,
        }
    }
}

/// Tool-specific configuration for one invocation
#[derive(Debug, Clone)]
pub enum ToolOptions {
    Jmeter { options: JmeterOptions, gui: bool },
    K6 { duration: String, vus: u32 },
    Locust(LocustOptions),
    Gatling {
        simulation_class: Option<String>,
        build_tool: BuildTool,
    },
}

impl ToolOptions {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolOptions::Jmeter { .. } => ToolKind::Jmeter,
            ToolOptions::K6 { .. } => ToolKind::K6,
            ToolOptions::Locust(_) => ToolKind::Locust,
            ToolOptions::Gatling { .. } => ToolKind::Gatling,
        }
    }
}

/// The test artifact, either already on disk or as uploaded bytes
#[derive(Debug, Clone)]
pub enum ArtifactSource {
    Path(PathBuf),
    Content(Vec<u8>),
}

/// One runner invocation, created immediately before dispatch and
/// discarded after the call returns
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub artifact: ArtifactSource,
    pub options: ToolOptions,
}

/// Normalized runner outcome
///
/// The detached GUI launch keeps its own variant so callers cannot
/// mistake the acknowledgment for a real test report.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The tool's own console report (JMeter, k6, Gatling)
    Report(String),
    /// Locust's structured result
    Locust(LocustRunResult),
    /// JMeter GUI was launched, nobody is waiting on it
    GuiLaunched(GuiLaunch),
}

/// Dispatch a request to the matching runner.
pub fn dispatch(config: &Config, request: &RunRequest) -> Result<RunOutcome> {
    match &request.artifact {
        ArtifactSource::Path(path) => run_tool(config, path, &request.options),
        ArtifactSource::Content(bytes) => {
            let suffix = request.options.kind().temp_suffix().ok_or_else(|| {
                RigError::InvalidArtifactType {
                    expected: "a simulation directory, not uploaded content".to_string(),
                    path: PathBuf::from("<uploaded content>"),
                }
            })?;

            let mut temp_file = NamedTempFile::with_suffix(suffix)?;
            temp_file.write_all(bytes)?;
            temp_file.flush()?;

            // NamedTempFile removes itself on drop, so the cleanup
            // obligation holds whether run_tool succeeds or not.
            run_tool(config, temp_file.path(), &request.options)
        }
    }
}

fn run_tool(config: &Config, artifact: &Path, options: &ToolOptions) -> Result<RunOutcome> {
    match options {
        ToolOptions::Jmeter { options, gui } => {
            let runner = JmeterRunner::from_config(&config.jmeter);
            if *gui {
                Ok(RunOutcome::GuiLaunched(runner.launch_gui(artifact, options)?))
            } else {
                Ok(RunOutcome::Report(runner.run(artifact, options)?))
            }
        }
        ToolOptions::K6 { duration, vus } => {
            let runner = K6Runner::from_config(&config.k6);
            Ok(RunOutcome::Report(runner.run(artifact, duration, *vus)?))
        }
        ToolOptions::Locust(options) => {
            let runner = LocustRunner::from_config(&config.locust);
            Ok(RunOutcome::Locust(runner.run(artifact, options)?))
        }
        ToolOptions::Gatling {
            simulation_class,
            build_tool,
        } => {
            let runner = GatlingRunner::new();
            Ok(RunOutcome::Report(runner.run(
                artifact,
                simulation_class.as_deref(),
                *build_tool,
            )?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_suffix_mapping() {
        assert_eq!(ToolKind::Jmeter.temp_suffix(), Some(".jmx"));
        assert_eq!(ToolKind::K6.temp_suffix(), Some(".js"));
        assert_eq!(ToolKind::Locust.temp_suffix(), Some(".py"));
        assert_eq!(ToolKind::Gatling.temp_suffix(), None);
    }

    #[test]
    fn test_gatling_rejects_uploaded_content() {
        let config = Config::default();
        let request = RunRequest {
            artifact: ArtifactSource::Content(b"not a directory".to_vec()),
            options: ToolOptions::Gatling {
                simulation_class: None,
                build_tool: BuildTool::Maven,
            },
        };

        let err = dispatch(&config, &request).unwrap_err();
        assert!(matches!(err, RigError::InvalidArtifactType { .. }));
    }
}
