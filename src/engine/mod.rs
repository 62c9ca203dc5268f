// src/engine/mod.rs

//! Supervision engine for the test host process.
//!
//! This module ties together:
//! - the process lifecycle state machine
//! - output filtering and forwarding
//! - translation of the termination event into the launch result
//!
//! The pure core state machine lives in [`core`]; the async/IO shell that
//! drains the event channel is implemented in [`runtime`]; [`report`] turns
//! an exit code into the final outcome.

/// Events flowing from the process backend into the supervisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// The OS process was created.
    Spawned { pid: Option<u32> },
    /// A chunk of standard output.
    Stdout(String),
    /// A chunk of standard error.
    Stderr(String),
    /// The process could not be spawned, or failed asynchronously.
    Error(String),
    /// The process terminated. `None` if killed by a signal.
    Exited { code: Option<i32> },
}

/// Lifecycle of the supervised process.
///
/// `Created -> Spawned -> Running -> {Errored | Exited}`. `Errored` can still
/// be followed by `Exited`, which is always final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Created,
    Spawned,
    Running,
    Errored,
    Exited(Option<i32>),
}

pub mod core;
pub mod report;
pub mod runtime;

pub use self::core::{SupervisorCommand, SupervisorCore, SupervisorStep};
pub use report::report_exit;
pub use runtime::Supervisor;
