// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::exec::OutputSink;
use crate::types::ProcessOutcome;

use super::core::SupervisorCore;
use super::report::report_exit;
use super::{ProcessEvent, SupervisorCommand};

/// Drives the supervisor core in response to `ProcessEvent`s and writes
/// forwarded output to an `OutputSink`.
///
/// This is a pure IO shell around `SupervisorCore`, which contains all the
/// lifecycle semantics.
pub struct Supervisor<S: OutputSink> {
    core: SupervisorCore,
    event_rx: mpsc::Receiver<ProcessEvent>,
    sink: S,
}

impl<S: OutputSink> fmt::Debug for Supervisor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supervisor")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: OutputSink> Supervisor<S> {
    pub fn new(core: SupervisorCore, event_rx: mpsc::Receiver<ProcessEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Consume events until the process terminates, then report.
    ///
    /// The returned future completes exactly once, on the termination event.
    /// If the event channel closes without one (e.g. the executable could
    /// not be spawned), the future never completes.
    pub async fn run(mut self) -> ProcessOutcome {
        info!("supervising test host");

        let mut outcome = None;
        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    debug!("process event channel closed");
                    break;
                }
            };

            debug!(?event, "supervisor received event");

            let step = self.core.step(event);
            for command in step.commands {
                if let Some(result) = self.execute_command(command) {
                    outcome = Some(result);
                }
            }

            if !step.keep_running {
                debug!("process terminated; stopping supervisor");
                break;
            }
        }

        match outcome {
            Some(outcome) => outcome,
            None => {
                warn!(
                    state = ?self.core.state(),
                    "process event channel closed without a termination event; result stays pending"
                );
                std::future::pending().await
            }
        }
    }

    /// Execute a single command from the core, returning the outcome once
    /// the process has been reported.
    fn execute_command(&mut self, command: SupervisorCommand) -> Option<ProcessOutcome> {
        match command {
            SupervisorCommand::Forward(line) => {
                self.sink.emit(&line);
                None
            }
            SupervisorCommand::Report(code) => Some(report_exit(code)),
        }
    }
}
