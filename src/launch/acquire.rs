// src/launch/acquire.rs

//! Binary acquisition seam.
//!
//! Obtaining a runnable copy of the target application (download, unpack,
//! cache) lives outside this crate. The launcher only talks to a
//! [`BinaryAcquirer`], which maps an optional version selector to a local
//! executable path.
//!
//! [`LocalInstallAcquirer`] is the implementation the CLI uses: it looks up
//! an already-extracted install in a cache directory laid out as
//! `<cache_dir>/vscode-<version>/`.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::debug;

use crate::fs::{FileSystem, RealFileSystem};

/// Version directory used when no selector is given.
pub const LATEST_STABLE: &str = "stable";

/// Default cache directory, relative to the project root.
pub const DEFAULT_CACHE_DIR: &str = ".vscode-test";

/// Trait abstracting how an executable is obtained for a version selector.
///
/// `None` means "latest stable".
pub trait BinaryAcquirer: Send + Sync {
    fn acquire(
        &self,
        version: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = Result<PathBuf>> + Send + '_>>;
}

/// Resolves versions against installs that are already present on disk.
#[derive(Debug, Clone)]
pub struct LocalInstallAcquirer {
    cache_dir: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl LocalInstallAcquirer {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(cache_dir, Arc::new(RealFileSystem))
    }

    pub fn with_fs(cache_dir: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            fs,
        }
    }

    /// Directory an install of `version` is expected in.
    pub fn install_dir(&self, version: Option<&str>) -> PathBuf {
        let version = version.unwrap_or(LATEST_STABLE);
        self.cache_dir.join(format!("vscode-{version}"))
    }

    fn locate(&self, version: Option<&str>) -> Result<PathBuf> {
        let install_dir = self.install_dir(version);
        if !self.fs.is_dir(&install_dir) {
            bail!(
                "no install for version '{}' found at {:?}",
                version.unwrap_or(LATEST_STABLE),
                install_dir
            );
        }

        let executable = platform_executable(&install_dir);
        if !self.fs.is_file(&executable) {
            bail!(
                "install directory {:?} does not contain an executable at {:?}",
                install_dir,
                executable
            );
        }

        debug!(?executable, "found cached install");
        Ok(executable)
    }
}

impl BinaryAcquirer for LocalInstallAcquirer {
    fn acquire(
        &self,
        version: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = Result<PathBuf>> + Send + '_>> {
        let result = self.locate(version);
        Box::pin(async move { result })
    }
}

/// Location of the executable inside an extracted install for this platform.
pub fn platform_executable(install_dir: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        install_dir.join("Code.exe")
    } else if cfg!(target_os = "macos") {
        install_dir.join("Visual Studio Code.app/Contents/MacOS/Electron")
    } else {
        install_dir.join("VSCode-linux-x64").join("code")
    }
}
