// tests/local_acquirer.rs

use std::sync::Arc;

use vscode_test_launcher::errors::LaunchError;
use vscode_test_launcher::fs::mock::MockFileSystem;
use vscode_test_launcher::launch::acquire::platform_executable;
use vscode_test_launcher::launch::{resolve_executable, BinaryAcquirer, LocalInstallAcquirer};
use vscode_test_launcher_test_utils::builders::ImplicitLaunchBuilder;

fn acquirer_with(fs: &MockFileSystem) -> LocalInstallAcquirer {
    LocalInstallAcquirer::with_fs("/cache", Arc::new(fs.clone()))
}

#[tokio::test]
async fn no_version_uses_stable_install() {
    let fs = MockFileSystem::new();
    let exe = platform_executable("/cache/vscode-stable".as_ref());
    fs.add_file(&exe, "binary");

    let path = acquirer_with(&fs).acquire(None).await.unwrap();

    assert_eq!(path, exe);
}

#[tokio::test]
async fn version_selects_install_directory() {
    let fs = MockFileSystem::new();
    let exe = platform_executable("/cache/vscode-1.85.0".as_ref());
    fs.add_file(&exe, "binary");
    fs.add_file(platform_executable("/cache/vscode-stable".as_ref()), "other");

    let path = acquirer_with(&fs).acquire(Some("1.85.0")).await.unwrap();

    assert_eq!(path, exe);
}

#[tokio::test]
async fn missing_install_fails() {
    let fs = MockFileSystem::new();
    fs.add_dir("/cache");

    let err = acquirer_with(&fs).acquire(Some("insiders")).await.unwrap_err();

    assert!(err.to_string().contains("insiders"));
}

#[tokio::test]
async fn install_without_executable_fails() {
    let fs = MockFileSystem::new();
    fs.add_dir("/cache/vscode-stable");

    let err = acquirer_with(&fs).acquire(None).await.unwrap_err();

    assert!(err.to_string().contains("does not contain an executable"));
}

#[tokio::test]
async fn resolver_surfaces_missing_install_as_acquisition_error() {
    let fs = MockFileSystem::new();
    let request = ImplicitLaunchBuilder::new("/ext", "/ext/tests").version("1.2.3").build();

    let result = resolve_executable(&request, &acquirer_with(&fs)).await;

    assert!(matches!(result, Err(LaunchError::Acquisition(_))));
}
