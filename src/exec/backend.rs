// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The launcher talks to a `ProcessBackend` instead of spawning processes
//! directly. The backend starts the test host and reports everything that
//! happens to it as [`ProcessEvent`]s on the given channel.
//!
//! - `RealProcessBackend` spawns an OS process via [`super::process`].
//! - Tests can provide their own backend that replays scripted events.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::mpsc;

use crate::engine::ProcessEvent;
use crate::errors::Result;
use crate::types::ResolvedLaunch;

use super::process::run_process;

/// Trait abstracting how the test host process is started.
pub trait ProcessBackend: Send {
    /// Start the process described by `launch`.
    ///
    /// Implementations must not block until the process exits; they report
    /// its lifecycle through `events`, ending with `ProcessEvent::Exited`
    /// when the process terminates.
    fn spawn(
        &mut self,
        launch: ResolvedLaunch,
        events: mpsc::Sender<ProcessEvent>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Backend that runs the test host as a real child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealProcessBackend;

impl RealProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessBackend for RealProcessBackend {
    fn spawn(
        &mut self,
        launch: ResolvedLaunch,
        events: mpsc::Sender<ProcessEvent>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            tokio::spawn(run_process(launch, events));
            Ok(())
        })
    }
}
