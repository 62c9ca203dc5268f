// src/types.rs

//! Launch request and resolved-launch data model.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::errors::LaunchError;

/// Locale passed to the test host when the request doesn't name one.
pub const DEFAULT_LOCALE: &str = "en";

/// Environment overrides for the test runner.
///
/// A `None` value means "unset" and is treated as an absent override.
pub type TestRunnerEnv = BTreeMap<String, Option<String>>;

/// Final result of a launch: `Ok(0)` on a clean exit, otherwise an error.
pub type ProcessOutcome = std::result::Result<i32, LaunchError>;

/// What the caller asked to launch.
///
/// Exactly one shape is active per invocation and the two are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRequest {
    /// Arguments are derived from extension/test paths, workspace and locale.
    Implicit(ImplicitLaunch),
    /// The caller supplies the complete argument list.
    Explicit(ExplicitLaunch),
}

/// Semantic launch configuration; arguments are built by
/// [`crate::launch::args::build_launch_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicitLaunch {
    pub executable_path: Option<PathBuf>,
    pub version: Option<String>,
    /// Root of the extension under test (`--extensionDevelopmentPath`).
    pub extension_development_path: PathBuf,
    /// Test runner entry point (`--extensionTestsPath`).
    pub extension_tests_path: PathBuf,
    pub extension_tests_env: TestRunnerEnv,
    /// Folder or workspace file opened by the host on start.
    pub test_workspace: Option<PathBuf>,
    pub additional_launch_args: Vec<String>,
    pub locale: Option<String>,
}

impl ImplicitLaunch {
    pub fn new(
        extension_development_path: impl Into<PathBuf>,
        extension_tests_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            executable_path: None,
            version: None,
            extension_development_path: extension_development_path.into(),
            extension_tests_path: extension_tests_path.into(),
            extension_tests_env: TestRunnerEnv::new(),
            test_workspace: None,
            additional_launch_args: Vec::new(),
            locale: None,
        }
    }

    /// Locale to launch with, falling back to [`DEFAULT_LOCALE`].
    pub fn locale_or_default(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}

/// Caller-supplied argument list, passed to the host verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitLaunch {
    pub executable_path: Option<PathBuf>,
    pub version: Option<String>,
    pub launch_args: Vec<String>,
    pub extension_tests_env: TestRunnerEnv,
}

impl ExplicitLaunch {
    pub fn new(launch_args: Vec<String>) -> Self {
        Self {
            executable_path: None,
            version: None,
            launch_args,
            extension_tests_env: TestRunnerEnv::new(),
        }
    }
}

impl LaunchRequest {
    pub fn executable_path(&self) -> Option<&Path> {
        match self {
            LaunchRequest::Implicit(l) => l.executable_path.as_deref(),
            LaunchRequest::Explicit(l) => l.executable_path.as_deref(),
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            LaunchRequest::Implicit(l) => l.version.as_deref(),
            LaunchRequest::Explicit(l) => l.version.as_deref(),
        }
    }

    pub fn extension_tests_env(&self) -> &TestRunnerEnv {
        match self {
            LaunchRequest::Implicit(l) => &l.extension_tests_env,
            LaunchRequest::Explicit(l) => &l.extension_tests_env,
        }
    }

    /// Return a copy of this request with the executable path filled in.
    pub fn with_executable_path(mut self, path: PathBuf) -> Self {
        match &mut self {
            LaunchRequest::Implicit(l) => l.executable_path = Some(path),
            LaunchRequest::Explicit(l) => l.executable_path = Some(path),
        }
        self
    }

    /// Return a copy of this request with the version selector replaced.
    pub fn with_version(mut self, version: Option<String>) -> Self {
        match &mut self {
            LaunchRequest::Implicit(l) => l.version = version,
            LaunchRequest::Explicit(l) => l.version = version,
        }
        self
    }

    /// Short name of the active shape, used in logs.
    pub fn shape(&self) -> &'static str {
        match self {
            LaunchRequest::Implicit(_) => "implicit",
            LaunchRequest::Explicit(_) => "explicit",
        }
    }
}

impl From<ImplicitLaunch> for LaunchRequest {
    fn from(value: ImplicitLaunch) -> Self {
        LaunchRequest::Implicit(value)
    }
}

impl From<ExplicitLaunch> for LaunchRequest {
    fn from(value: ExplicitLaunch) -> Self {
        LaunchRequest::Explicit(value)
    }
}

/// Everything needed to spawn the test host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLaunch {
    pub executable: PathBuf,
    pub args: Vec<OsString>,
    /// Complete child environment (ambient merged with overrides).
    pub env: BTreeMap<OsString, OsString>,
}
