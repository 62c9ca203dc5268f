// src/engine/core.rs

//! Pure supervisor state machine.
//!
//! This module contains a synchronous, deterministic "core" that consumes
//! [`ProcessEvent`]s and produces:
//! - an updated [`ProcessState`]
//! - a list of commands describing what the IO shell should do next
//!
//! The async shell (`engine::runtime::Supervisor`) is responsible for reading
//! events from the channel, writing forwarded output to the sink and
//! completing the launch result.
//!
//! The core is intended to be unit tested without any Tokio, channels or
//! processes.

use tracing::{debug, error, info};

use crate::engine::{ProcessEvent, ProcessState};
use crate::exec::filter::OutputFilter;
use crate::exec::sink::OutputLine;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorCommand {
    /// Write this line to the output sink.
    Forward(OutputLine),
    /// The process terminated; report this exit code.
    Report(Option<i32>),
}

/// Decision returned by the core after handling a single `ProcessEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorStep {
    pub commands: Vec<SupervisorCommand>,
    /// Whether the outer loop should keep consuming events.
    pub keep_running: bool,
}

impl SupervisorStep {
    fn proceed(commands: Vec<SupervisorCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }

    fn finish(commands: Vec<SupervisorCommand>) -> Self {
        Self {
            commands,
            keep_running: false,
        }
    }
}

#[derive(Debug)]
pub struct SupervisorCore {
    state: ProcessState,
    filter: OutputFilter,
}

impl SupervisorCore {
    pub fn new(filter: OutputFilter) -> Self {
        Self {
            state: ProcessState::Created,
            filter,
        }
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Exited(_))
    }

    /// Handle a single process event.
    ///
    /// Only `Exited` produces a `Report` command. Errors are logged and
    /// recorded in the state but never complete the result. Anything after
    /// `Exited` is ignored.
    pub fn step(&mut self, event: ProcessEvent) -> SupervisorStep {
        if self.is_terminated() {
            debug!(?event, "ignoring event after process termination");
            return SupervisorStep::finish(Vec::new());
        }

        match event {
            ProcessEvent::Spawned { pid } => {
                info!(?pid, "test host spawned");
                if self.state == ProcessState::Created {
                    self.transition(ProcessState::Spawned);
                }
                SupervisorStep::proceed(Vec::new())
            }
            ProcessEvent::Stdout(chunk) => {
                self.mark_running();
                let forwarded = self.filter.filter_stdout(&chunk);
                if forwarded.is_none() {
                    debug!("suppressed idle heartbeat on stdout");
                }
                SupervisorStep::proceed(forward(forwarded))
            }
            ProcessEvent::Stderr(chunk) => {
                self.mark_running();
                let forwarded = self.filter.filter_stderr(&chunk);
                if forwarded.is_none() {
                    debug!("suppressed terminal warning on stderr");
                }
                SupervisorStep::proceed(forward(forwarded))
            }
            ProcessEvent::Error(message) => {
                error!(error = %message, "Test error");
                self.transition(ProcessState::Errored);
                SupervisorStep::proceed(Vec::new())
            }
            ProcessEvent::Exited { code } => {
                self.transition(ProcessState::Exited(code));
                SupervisorStep::finish(vec![SupervisorCommand::Report(code)])
            }
        }
    }

    fn mark_running(&mut self) {
        if matches!(self.state, ProcessState::Created | ProcessState::Spawned) {
            self.transition(ProcessState::Running);
        }
    }

    fn transition(&mut self, next: ProcessState) {
        debug!(from = ?self.state, to = ?next, "process state transition");
        self.state = next;
    }
}

fn forward(line: Option<OutputLine>) -> Vec<SupervisorCommand> {
    line.map(SupervisorCommand::Forward).into_iter().collect()
}

impl Default for SupervisorCore {
    fn default() -> Self {
        Self::new(OutputFilter::default())
    }
}
