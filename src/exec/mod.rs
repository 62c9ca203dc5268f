// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the test host, using
//! `tokio::process::Command`, and reporting back to the supervisor via
//! `ProcessEvent`s.
//!
//! - [`backend`] provides the `ProcessBackend` trait and the
//!   `RealProcessBackend` used in production, which tests can replace with a
//!   scripted implementation.
//! - [`process`] spawns the child and pumps its output streams.
//! - [`filter`] drops known-benign noise from the output.
//! - [`sink`] is where surviving output ends up.

pub mod backend;
pub mod filter;
pub mod process;
pub mod sink;

pub use backend::{ProcessBackend, RealProcessBackend};
pub use filter::OutputFilter;
pub use sink::{ConsoleSink, OutputLine, OutputSink};
