// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::loader::default_config_path;

/// Command-line arguments for `vscode-test-launcher`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vscode-test-launcher",
    version,
    about = "Launch VS Code in extension test host mode and report the test result.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the launch file (TOML).
    ///
    /// Default: `VscodeTest.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Use this executable instead of the one in the launch file or cache.
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Version to acquire when no executable is given (e.g. "1.85.0",
    /// "insiders"). Overrides `version` from the launch file.
    #[arg(long = "version-selector", value_name = "VERSION")]
    pub version_selector: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `VSCODE_TEST_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the command line, but don't launch anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
