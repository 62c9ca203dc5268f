// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::{LaunchConfig, RawLaunchConfig};
use crate::errors::{LaunchError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Load a launch file from a given path and return the raw `RawLaunchConfig`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawLaunchConfig> {
    load_from_path_with(&RealFileSystem, path)
}

/// Same as [`load_from_path`], reading through the given filesystem.
pub fn load_from_path_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawLaunchConfig> {
    let path = path.as_ref();
    if !fs.exists(path) {
        return Err(LaunchError::ConfigError(format!(
            "launch file {:?} does not exist",
            path
        )));
    }
    let contents = fs.read_to_string(path)?;

    let config: RawLaunchConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a launch file from path, validate it, and resolve relative paths
/// against the file's directory.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LaunchConfig> {
    load_and_validate_with(&RealFileSystem, path)
}

pub fn load_and_validate_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<LaunchConfig> {
    let path = path.as_ref();
    let raw_config = load_from_path_with(fs, path)?;
    let config = LaunchConfig::try_from(raw_config)?;
    Ok(config.rebase(&config_root_dir(path)))
}

/// Figure out the directory relative paths in a launch file refer to.
///
/// - If the path has a non-empty parent (e.g. "ci/VscodeTest.toml"), we use
///   that directory.
/// - If it's just a bare filename like "VscodeTest.toml" (parent = ""),
///   we fall back to the current working directory.
pub fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Default launch file, relative to the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("VscodeTest.toml")
}
