#![cfg(unix)]

use loadrig::config::{Config, K6Config};
use loadrig::dispatch::{dispatch, ArtifactSource, RunOutcome, RunRequest, ToolOptions};
use loadrig::RigError;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn config_with_k6(stub: &Path) -> Config {
    Config {
        k6: K6Config {
            binary: stub.display().to_string(),
        },
        ..Config::default()
    }
}

fn k6_request(artifact: ArtifactSource) -> RunRequest {
    RunRequest {
        artifact,
        options: ToolOptions::K6 {
            duration: "30s".to_string(),
            vus: 10,
        },
    }
}

#[test]
fn dispatch_runs_tool_on_existing_path() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "k6", r#"echo "$@""#);
    let script = dir.path().join("load.js");
    fs::write(&script, "export default function() {}").unwrap();

    let config = config_with_k6(&stub);
    let request = k6_request(ArtifactSource::Path(script));

    match dispatch(&config, &request).unwrap() {
        RunOutcome::Report(report) => assert!(report.contains("load.js")),
        other => panic!("expected Report, got {other:?}"),
    }
}

#[test]
fn dispatch_materializes_content_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    // The stub echoes its argv; the last argument is the temp file path.
    let stub = write_stub(dir.path(), "k6", r#"echo "$@""#);

    let config = config_with_k6(&stub);
    let request = k6_request(ArtifactSource::Content(
        b"export default function() {}".to_vec(),
    ));

    let report = match dispatch(&config, &request).unwrap() {
        RunOutcome::Report(report) => report,
        other => panic!("expected Report, got {other:?}"),
    };

    let temp_path = report.split_whitespace().last().unwrap().to_string();
    assert!(temp_path.ends_with(".js"));
    assert!(
        !Path::new(&temp_path).exists(),
        "materialized artifact must be deleted after the runner returns"
    );
}

#[test]
fn dispatch_cleans_up_on_failure_path() {
    let dir = tempfile::tempdir().unwrap();
    // Record the argv, then fail
    let stub = write_stub(
        dir.path(),
        "k6",
        r#"echo "$@" > "$(dirname "$0")/args.txt"
echo boom >&2
exit 1"#,
    );

    let config = config_with_k6(&stub);
    let request = k6_request(ArtifactSource::Content(b"broken script".to_vec()));

    let err = dispatch(&config, &request).unwrap_err();
    assert!(err.to_string().contains("Error executing k6 test"));

    let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
    let temp_path = args.split_whitespace().last().unwrap().to_string();
    assert!(
        !Path::new(&temp_path).exists(),
        "temp file must be deleted on the error path too"
    );
}

#[test]
fn dispatch_rejects_content_for_gatling() {
    let config = Config::default();
    let request = RunRequest {
        artifact: ArtifactSource::Content(b"whatever".to_vec()),
        options: ToolOptions::Gatling {
            simulation_class: None,
            build_tool: loadrig::runner::BuildTool::Maven,
        },
    };

    let err = dispatch(&config, &request).unwrap_err();
    assert!(matches!(err, RigError::InvalidArtifactType { .. }));
}
