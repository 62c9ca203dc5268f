// src/launch/resolve.rs

//! Configuration resolution: make sure an executable is available, then
//! turn a [`LaunchRequest`] into a spawnable [`ResolvedLaunch`].

use tracing::{debug, info};

use crate::errors::{LaunchError, Result};
use crate::launch::acquire::BinaryAcquirer;
use crate::launch::args::launch_args_for;
use crate::launch::env::{merge_env, AmbientEnv};
use crate::types::{LaunchRequest, ResolvedLaunch};

/// Ensure the request carries an executable path.
///
/// If none is present (or it is empty) the acquirer is asked for the
/// request's version, or for latest stable when no version is given.
/// Acquisition failures are returned as [`LaunchError::Acquisition`].
pub async fn resolve_executable<A>(request: &LaunchRequest, acquirer: &A) -> Result<LaunchRequest>
where
    A: BinaryAcquirer + ?Sized,
{
    if let Some(path) = request.executable_path() {
        if !path.as_os_str().is_empty() {
            debug!(executable = ?path, "using caller-supplied executable");
            return Ok(request.clone());
        }
    }

    let version = request.version();
    info!(
        version = version.unwrap_or("latest stable"),
        "no executable path given; acquiring one"
    );

    let path = acquirer
        .acquire(version)
        .await
        .map_err(LaunchError::Acquisition)?;

    if path.as_os_str().is_empty() {
        return Err(LaunchError::Acquisition(anyhow::anyhow!(
            "acquirer returned an empty executable path"
        )));
    }

    Ok(request.clone().with_executable_path(path))
}

/// Build the argument list and environment for an already-resolved request.
pub fn prepare_launch(request: &LaunchRequest, ambient: &AmbientEnv) -> Result<ResolvedLaunch> {
    let executable = match request.executable_path() {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => {
            return Err(LaunchError::ConfigError(
                "launch request has no executable path; resolve it first".to_string(),
            ));
        }
    };

    let args = launch_args_for(request);
    if ambient.is_empty() {
        debug!("ambient environment is empty; child sees only the overrides");
    }
    let env = merge_env(ambient, request.extension_tests_env());

    debug!(
        shape = request.shape(),
        ?executable,
        ?args,
        overrides = request.extension_tests_env().len(),
        "prepared launch"
    );

    Ok(ResolvedLaunch {
        executable,
        args,
        env,
    })
}

/// Resolve the executable, then build arguments and environment.
pub async fn resolve_launch<A>(
    request: &LaunchRequest,
    acquirer: &A,
    ambient: &AmbientEnv,
) -> Result<ResolvedLaunch>
where
    A: BinaryAcquirer + ?Sized,
{
    let resolved = resolve_executable(request, acquirer).await?;
    prepare_launch(&resolved, ambient)
}
