// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod launch;
pub mod logging;
pub mod types;

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use anyhow::anyhow;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::LaunchConfig;
use crate::engine::{ProcessEvent, Supervisor, SupervisorCore};
use crate::errors::{LaunchError, Result};
use crate::exec::{ConsoleSink, OutputFilter, OutputSink, ProcessBackend, RealProcessBackend};
use crate::launch::acquire::{BinaryAcquirer, LocalInstallAcquirer};
use crate::launch::env::AmbientEnv;
use crate::launch::resolve::{prepare_launch, resolve_executable, resolve_launch};
use crate::types::{LaunchRequest, ResolvedLaunch};

pub use crate::types::{ExplicitLaunch, ImplicitLaunch, ProcessOutcome};

/// Launch the test host for `request` and wait for it to exit.
///
/// Resolves to `Ok(0)` when the host exits with code 0. Any other exit
/// yields [`LaunchError::TestsFailed`]; acquisition problems fail
/// immediately with [`LaunchError::Acquisition`].
///
/// Uses the current process environment, a real child process and the
/// console for forwarded output. See [`run_tests_with`] to inject those.
pub async fn run_tests<A>(request: &LaunchRequest, acquirer: &A) -> Result<i32>
where
    A: BinaryAcquirer + ?Sized,
{
    run_tests_with(
        request,
        acquirer,
        AmbientEnv::capture(),
        RealProcessBackend::new(),
        ConsoleSink,
    )
    .await
}

/// [`run_tests`] with every collaborator passed in explicitly.
///
/// Note: if the backend reports a spawn error and never reports
/// termination, the returned future never completes.
pub async fn run_tests_with<A, B, S>(
    request: &LaunchRequest,
    acquirer: &A,
    ambient: AmbientEnv,
    mut backend: B,
    sink: S,
) -> Result<i32>
where
    A: BinaryAcquirer + ?Sized,
    B: ProcessBackend,
    S: OutputSink,
{
    let launch = resolve_launch(request, acquirer, &ambient).await?;
    info!(
        shape = request.shape(),
        executable = ?launch.executable,
        "launching extension test host"
    );

    let (event_tx, event_rx) = mpsc::channel::<ProcessEvent>(64);
    backend.spawn(launch, event_tx).await?;

    let supervisor = Supervisor::new(SupervisorCore::new(OutputFilter::default()), event_rx, sink);
    supervisor.run().await
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - launch file loading and CLI overrides
/// - the local install acquirer
/// - the launch itself
/// - Ctrl-C handling (the only way to abandon a hung test host)
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_and_validate(&args.config)?;
    let request = apply_overrides(cfg.request.clone(), &args);

    let acquirer = LocalInstallAcquirer::new(cfg.cache_dir.clone());

    if args.dry_run {
        print!("{}", dry_run_report(&cfg, &request, &acquirer).await?);
        return Ok(0);
    }

    tokio::select! {
        outcome = run_tests(&request, &acquirer) => outcome,
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(|e| anyhow!("failed to listen for Ctrl+C: {e}"))?;
            warn!("interrupted; abandoning test host");
            Err(LaunchError::Other(anyhow!("interrupted by Ctrl+C")))
        }
    }
}

/// Apply `--executable` / `--version-selector` on top of the launch file.
///
/// A version only matters when no executable is known, so a version
/// override next to an executable path is logged and otherwise has no
/// effect.
pub fn apply_overrides(mut request: LaunchRequest, args: &CliArgs) -> LaunchRequest {
    if let Some(ref executable) = args.executable {
        request = request.with_executable_path(executable.clone());
    }
    if let Some(ref version) = args.version_selector {
        let has_executable = request
            .executable_path()
            .is_some_and(|path| !path.as_os_str().is_empty());
        if has_executable {
            warn!(
                version = %version,
                "--version-selector has no effect when an executable path is set"
            );
        }
        request = request.with_version(Some(version.clone()));
    }
    request
}

/// Describe what would be launched, without spawning anything.
///
/// Acquisition failures are reported in the text rather than treated as
/// fatal so the rest of the launch can still be inspected.
pub async fn dry_run_report<A>(
    cfg: &LaunchConfig,
    request: &LaunchRequest,
    acquirer: &A,
) -> Result<String>
where
    A: BinaryAcquirer + ?Sized,
{
    let acquired = resolve_executable(request, acquirer).await;

    let mut out = String::new();
    write_dry_run(&mut out, cfg, request, acquired)
        .map_err(|e| anyhow!("failed to format dry-run report: {e}"))?;
    Ok(out)
}

fn write_dry_run(
    out: &mut String,
    cfg: &LaunchConfig,
    request: &LaunchRequest,
    acquired: Result<LaunchRequest>,
) -> fmt::Result {
    writeln!(out, "vscode-test-launcher dry-run")?;
    writeln!(out, "  shape = {}", request.shape())?;
    writeln!(out, "  cache_dir = {}", cfg.cache_dir.display())?;
    writeln!(out, "  version = {}", request.version().unwrap_or("latest stable"))?;

    let resolved = match acquired {
        Ok(resolved) => resolved,
        Err(e) => {
            writeln!(out, "  executable: <unresolved: {e}>")?;
            request
                .clone()
                .with_executable_path(PathBuf::from("<unresolved>"))
        }
    };

    match prepare_launch(&resolved, &AmbientEnv::default()) {
        Ok(launch) => write_launch(out, &launch, request),
        Err(e) => writeln!(out, "  failed to prepare launch: {e}"),
    }
}

fn write_launch(out: &mut String, launch: &ResolvedLaunch, request: &LaunchRequest) -> fmt::Result {
    writeln!(out, "  executable: {}", launch.executable.display())?;
    writeln!(out, "  args ({}):", launch.args.len())?;
    for arg in &launch.args {
        writeln!(out, "    {}", arg.to_string_lossy())?;
    }

    let overrides = request.extension_tests_env();
    if !overrides.is_empty() {
        writeln!(out, "  env overrides:")?;
        for (key, value) in overrides {
            match value {
                Some(v) => writeln!(out, "    {key}={v}")?,
                None => writeln!(out, "    {key} (unset)")?,
            }
        }
    }
    Ok(())
}
