// tests/resolve_executable.rs

use std::path::Path;

use vscode_test_launcher::errors::LaunchError;
use vscode_test_launcher::launch::{prepare_launch, resolve_executable, resolve_launch, AmbientEnv};
use vscode_test_launcher_test_utils::builders::{ExplicitLaunchBuilder, ImplicitLaunchBuilder};
use vscode_test_launcher_test_utils::fakes::RecordingAcquirer;

#[tokio::test]
async fn missing_executable_and_version_asks_for_latest_stable() {
    let acquirer = RecordingAcquirer::returning("/cache/vscode-stable/code");
    let request = ImplicitLaunchBuilder::new("/ext", "/ext/tests").build();

    let resolved = resolve_executable(&request, &acquirer).await.unwrap();

    assert_eq!(acquirer.requests(), vec![None]);
    assert_eq!(
        resolved.executable_path(),
        Some(Path::new("/cache/vscode-stable/code"))
    );
}

#[tokio::test]
async fn version_selector_is_forwarded_to_acquirer() {
    let acquirer = RecordingAcquirer::returning("/cache/vscode-1.85.0/code");
    let request = ExplicitLaunchBuilder::new(["--help"]).version("1.85.0").build();

    resolve_executable(&request, &acquirer).await.unwrap();

    assert_eq!(acquirer.requests(), vec![Some("1.85.0".to_string())]);
}

#[tokio::test]
async fn given_executable_skips_acquisition() {
    let acquirer = RecordingAcquirer::returning("/should/not/be/used");
    let request = ImplicitLaunchBuilder::new("/ext", "/ext/tests")
        .executable("/opt/code/code")
        .version("insiders")
        .build();

    let resolved = resolve_executable(&request, &acquirer).await.unwrap();

    assert!(acquirer.requests().is_empty());
    assert_eq!(resolved, request);
}

#[tokio::test]
async fn empty_executable_is_treated_as_absent() {
    let acquirer = RecordingAcquirer::returning("/cache/code");
    let request = ImplicitLaunchBuilder::new("/ext", "/ext/tests").executable("").build();

    let resolved = resolve_executable(&request, &acquirer).await.unwrap();

    assert_eq!(acquirer.requests().len(), 1);
    assert_eq!(resolved.executable_path(), Some(Path::new("/cache/code")));
}

#[tokio::test]
async fn acquisition_failure_propagates() {
    let acquirer = RecordingAcquirer::failing("network unreachable");
    let request = ImplicitLaunchBuilder::new("/ext", "/ext/tests").build();

    match resolve_launch(&request, &acquirer, &AmbientEnv::default()).await {
        Err(LaunchError::Acquisition(e)) => {
            assert!(e.to_string().contains("network unreachable"));
        }
        other => panic!("expected acquisition error, got {:?}", other),
    }
}

#[test]
fn prepare_requires_resolved_executable() {
    let request = ImplicitLaunchBuilder::new("/ext", "/ext/tests").build();

    match prepare_launch(&request, &AmbientEnv::default()) {
        Err(LaunchError::ConfigError(msg)) => assert!(msg.contains("no executable path")),
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[test]
fn prepare_builds_args_and_env() {
    let request = ImplicitLaunchBuilder::new("/ext", "/ext/tests")
        .executable("/opt/code/code")
        .env("MOCHA_GREP", "smoke")
        .build();
    let ambient = AmbientEnv::from_pairs([("PATH", "/usr/bin")]);

    let launch = prepare_launch(&request, &ambient).unwrap();

    assert_eq!(launch.executable, Path::new("/opt/code/code"));
    assert_eq!(launch.args.len(), 3);
    assert_eq!(launch.env.len(), 2);
    assert_eq!(
        launch.env.get(std::ffi::OsStr::new("MOCHA_GREP")).map(|v| v.as_os_str()),
        Some(std::ffi::OsStr::new("smoke"))
    );
}
