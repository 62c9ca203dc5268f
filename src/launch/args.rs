// src/launch/args.rs

//! Command-line argument assembly for the implicit launch shape.

use std::ffi::OsString;
use std::path::Path;

use crate::types::{ImplicitLaunch, LaunchRequest};

/// Build the ordered argument list for an implicit launch:
///
/// 1. the test workspace, if any (opened by the host on start)
/// 2. `--extensionDevelopmentPath=<path>`
/// 3. `--extensionTestsPath=<path>`
/// 4. `--locale=<locale>` (default `en`)
/// 5. any additional launch arguments, in order
///
/// Arguments are handed to the process as discrete values, never through a
/// shell, so nothing here is quoted or escaped.
pub fn build_launch_args(launch: &ImplicitLaunch) -> Vec<OsString> {
    let mut args = Vec::with_capacity(4 + launch.additional_launch_args.len());

    if let Some(ref workspace) = launch.test_workspace {
        args.push(workspace.as_os_str().to_os_string());
    }

    args.push(flag_with_path(
        "--extensionDevelopmentPath=",
        &launch.extension_development_path,
    ));
    args.push(flag_with_path(
        "--extensionTestsPath=",
        &launch.extension_tests_path,
    ));
    args.push(OsString::from(format!(
        "--locale={}",
        launch.locale_or_default()
    )));

    args.extend(launch.additional_launch_args.iter().map(OsString::from));
    args
}

/// Arguments for any request shape: built for implicit, verbatim for explicit.
pub fn launch_args_for(request: &LaunchRequest) -> Vec<OsString> {
    match request {
        LaunchRequest::Implicit(launch) => build_launch_args(launch),
        LaunchRequest::Explicit(launch) => {
            launch.launch_args.iter().map(OsString::from).collect()
        }
    }
}

fn flag_with_path(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push(path.as_os_str());
    arg
}
