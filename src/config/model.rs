// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::launch::acquire::DEFAULT_CACHE_DIR;
use crate::types::LaunchRequest;

/// Launch configuration as read from a TOML file.
///
/// ```toml
/// version = "1.85.0"
/// extension_development_path = "."
/// extension_tests_path = "./out/test/suite/index.js"
/// test_workspace = "./fixtures/ws"
/// additional_launch_args = ["--disable-extensions"]
///
/// [extension_tests_env]
/// MOCHA_GREP = "smoke"
/// ```
///
/// Setting `launch_args` selects the explicit shape, in which case none of
/// the implicit fields may be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLaunchConfig {
    /// Path to an already-installed executable. If absent, one is acquired.
    #[serde(default)]
    pub executable_path: Option<PathBuf>,

    /// Version selector for acquisition; absent means latest stable.
    #[serde(default)]
    pub version: Option<String>,

    /// Where the local acquirer looks for installs.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    #[serde(default)]
    pub extension_development_path: Option<PathBuf>,

    #[serde(default)]
    pub extension_tests_path: Option<PathBuf>,

    #[serde(default)]
    pub test_workspace: Option<PathBuf>,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub additional_launch_args: Option<Vec<String>>,

    /// Complete argument list for the explicit shape, passed verbatim.
    #[serde(default)]
    pub launch_args: Option<Vec<String>>,

    /// Extra environment for the test runner, on top of the ambient one.
    #[serde(default)]
    pub extension_tests_env: BTreeMap<String, String>,
}

/// Validated launch configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub request: LaunchRequest,
    pub cache_dir: PathBuf,
}

impl LaunchConfig {
    /// Only constructed from validated input; see `validate.rs`.
    pub(crate) fn new_unchecked(request: LaunchRequest, cache_dir: Option<PathBuf>) -> Self {
        Self {
            request,
            cache_dir: cache_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
        }
    }

    /// Resolve relative paths against `root`.
    ///
    /// The explicit shape's `launch_args` are never touched.
    pub fn rebase(mut self, root: &Path) -> Self {
        self.cache_dir = rebase_path(root, &self.cache_dir);

        match &mut self.request {
            LaunchRequest::Implicit(launch) => {
                rebase_opt(root, &mut launch.executable_path);
                launch.extension_development_path =
                    rebase_path(root, &launch.extension_development_path);
                launch.extension_tests_path = rebase_path(root, &launch.extension_tests_path);
                rebase_opt(root, &mut launch.test_workspace);
            }
            LaunchRequest::Explicit(launch) => {
                rebase_opt(root, &mut launch.executable_path);
            }
        }

        self
    }
}

fn rebase_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn rebase_opt(root: &Path, path: &mut Option<PathBuf>) {
    if let Some(p) = path.as_mut() {
        *p = rebase_path(root, p);
    }
}
