// src/engine/report.rs

use tracing::info;

use crate::errors::LaunchError;
use crate::types::ProcessOutcome;

/// Turn the test host's exit code into the launch result.
///
/// Exactly `0` is success; anything else, including an unknown code from a
/// signal-terminated process, is a generic failure.
pub fn report_exit(code: Option<i32>) -> ProcessOutcome {
    match code {
        Some(code) => info!(exit_code = code, "Exit code:   {code}"),
        None => info!("Exit code:   unknown"),
    }

    if code != Some(0) {
        return Err(LaunchError::TestsFailed);
    }

    info!("Done");
    Ok(0)
}
