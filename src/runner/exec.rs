//! Shared path resolution and process execution helpers
//!
//! All four runners funnel through this module: artifact and binary
//! resolution happens before any child process is spawned, and every
//! synchronous invocation is captured into an [`ExecutionResult`].

use super::{ExecutionResult, RunStatus};
use crate::error::{Result, RigError};
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// What an artifact path is expected to resolve to
#[derive(Debug, Clone, Copy)]
pub enum ArtifactKind {
    /// Regular file, optionally with a required extension (without the dot)
    File { extension: Option<&'static str> },
    /// Directory (Gatling simulation projects)
    Directory,
}

/// Resolve a user-supplied artifact path to an absolute path, validating
/// existence and kind before anything is executed.
pub fn resolve_artifact(path: &Path, kind: ArtifactKind) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|_| RigError::ArtifactNotFound(path.to_path_buf()))?;

    match kind {
        ArtifactKind::File { extension } => {
            if !resolved.is_file() {
                return Err(RigError::InvalidArtifactType {
                    expected: "a regular file".to_string(),
                    path: path.to_path_buf(),
                });
            }
            if let Some(ext) = extension {
                let actual = resolved.extension().and_then(|e| e.to_str());
                if actual != Some(ext) {
                    return Err(RigError::InvalidArtifactType {
                        expected: format!(".{ext} file"),
                        path: path.to_path_buf(),
                    });
                }
            }
        }
        ArtifactKind::Directory => {
            if !resolved.is_dir() {
                return Err(RigError::InvalidArtifactType {
                    expected: "a directory".to_string(),
                    path: path.to_path_buf(),
                });
            }
        }
    }

    Ok(resolved)
}

/// Resolve a configured binary location.
///
/// Values containing a path separator must point at an existing file;
/// bare names are searched on `PATH`. Either way a missing binary is a
/// hard precondition failure, reported before any spawn.
pub fn resolve_binary(tool: &str, configured: &str) -> Result<PathBuf> {
    let candidate = Path::new(configured);
    let is_bare_name = candidate.components().count() == 1
        && matches!(candidate.components().next(), Some(Component::Normal(_)));

    if is_bare_name {
        search_path(configured).ok_or_else(|| RigError::ToolNotFound {
            tool: tool.to_string(),
            path: candidate.to_path_buf(),
        })
    } else {
        candidate.canonicalize().map_err(|_| RigError::ToolNotFound {
            tool: tool.to_string(),
            path: candidate.to_path_buf(),
        })
    }
}

fn search_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Run a command to completion, capturing both output streams.
pub fn run_captured(cmd: &mut Command) -> Result<ExecutionResult> {
    debug!("Executing command: {}", display_command(cmd));

    let output = cmd.output()?;
    let result = ExecutionResult {
        status: if output.status.success() {
            RunStatus::Success
        } else {
            RunStatus::Failure
        },
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    debug!("Return code: {}", result.exit_code);
    Ok(result)
}

/// Run a command with a wall-clock deadline, killing the child when the
/// deadline expires. Output streams are drained on reader threads so a
/// chatty child cannot deadlock on a full pipe.
pub fn run_captured_timeout(
    cmd: &mut Command,
    timeout: Duration,
    label: &str,
) -> Result<ExecutionResult> {
    debug!(
        "Executing command with {}s timeout: {}",
        timeout.as_secs(),
        display_command(cmd)
    );

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    let stdout_reader = drain_on_thread(child.stdout.take());
    let stderr_reader = drain_on_thread(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(RigError::ToolTimeout {
                label: label.to_string(),
                seconds: timeout.as_secs(),
            });
        }
        std::thread::sleep(Duration::from_millis(50));
    };

    let stdout = join_reader(stdout_reader);
    let stderr = join_reader(stderr_reader);

    Ok(ExecutionResult {
        status: if status.success() {
            RunStatus::Success
        } else {
            RunStatus::Failure
        },
        exit_code: status.code().unwrap_or(-1),
        stdout,
        stderr,
    })
}

fn drain_on_thread<R: Read + Send + 'static>(
    stream: Option<R>,
) -> Option<std::thread::JoinHandle<Vec<u8>>> {
    stream.map(|mut reader| {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            buf
        })
    })
}

fn join_reader(handle: Option<std::thread::JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).to_string())
        .unwrap_or_default()
}

/// Launch a command detached: stdio nulled, not awaited. Returns the pid.
pub fn spawn_detached(cmd: &mut Command) -> Result<u32> {
    debug!("Launching detached: {}", display_command(cmd));

    let child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(child.id())
}

/// Shared result interpreter for the plain-text tools: zero exit returns
/// stdout verbatim, non-zero exit becomes a failure embedding stderr.
pub fn expect_success(label: &str, result: ExecutionResult) -> Result<String> {
    if result.is_success() {
        Ok(result.stdout)
    } else {
        Err(RigError::ToolExecutionFailure {
            label: label.to_string(),
            exit_code: result.exit_code,
            stderr: result.stderr,
        })
    }
}

fn display_command(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().to_string()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().to_string()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_artifact_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.jmx");

        let err = resolve_artifact(&missing, ArtifactKind::File { extension: Some("jmx") })
            .unwrap_err();
        assert!(matches!(err, RigError::ArtifactNotFound(_)));
    }

    #[test]
    fn test_resolve_artifact_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let plan = dir.path().join("plan.txt");
        fs::write(&plan, "not a jmx").unwrap();

        let err = resolve_artifact(&plan, ArtifactKind::File { extension: Some("jmx") })
            .unwrap_err();
        assert!(matches!(err, RigError::InvalidArtifactType { .. }));
        assert!(err.to_string().contains(".jmx file"));
    }

    #[test]
    fn test_resolve_artifact_directory_vs_file() {
        let dir = tempfile::tempdir().unwrap();

        // A directory passed where a file is expected
        let err = resolve_artifact(dir.path(), ArtifactKind::File { extension: None })
            .unwrap_err();
        assert!(matches!(err, RigError::InvalidArtifactType { .. }));

        // And the other way around
        let file = dir.path().join("sim.scala");
        fs::write(&file, "class Sim").unwrap();
        let err = resolve_artifact(&file, ArtifactKind::Directory).unwrap_err();
        assert!(matches!(err, RigError::InvalidArtifactType { .. }));
    }

    #[test]
    fn test_resolve_artifact_accepts_matching_file() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("load.js");
        fs::write(&script, "export default function() {}").unwrap();

        let resolved =
            resolve_artifact(&script, ArtifactKind::File { extension: Some("js") }).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("load.js"));
    }

    #[test]
    fn test_resolve_binary_explicit_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("bin").join("k6");

        let err = resolve_binary("k6", missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RigError::ToolNotFound { .. }));
    }

    #[test]
    fn test_resolve_binary_explicit_path_exists() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("k6");
        fs::write(&bin, "").unwrap();

        let resolved = resolve_binary("k6", bin.to_str().unwrap()).unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_expect_success_embeds_stderr() {
        let result = ExecutionResult {
            status: RunStatus::Failure,
            exit_code: 1,
            stdout: String::new(),
            stderr: "boom".to_string(),
        };

        let err = expect_success("JMeter test", result).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Error executing JMeter test"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_expect_success_returns_stdout_verbatim() {
        let result = ExecutionResult {
            status: RunStatus::Success,
            exit_code: 0,
            stdout: "... end of run\n".to_string(),
            stderr: String::new(),
        };

        assert_eq!(expect_success("k6 test", result).unwrap(), "... end of run\n");
    }
}
