// src/exec/filter.rs

//! Suppression of known-benign noise in the test host's output.
//!
//! Filtering only changes what reaches the [`OutputSink`](super::OutputSink);
//! it never affects the launch result.

use super::sink::OutputLine;

/// Heartbeat the host's update service prints on stdout while idle.
pub const IDLE_HEARTBEAT_MARKER: &str = "update#setState idle";

/// Terminal-compatibility warning printed on stderr when there is no TTY.
pub const TTY_WARNING_MARKER: &str = "stty: stdin";

#[derive(Debug, Clone)]
pub struct OutputFilter {
    stdout_markers: Vec<String>,
    stderr_markers: Vec<String>,
}

impl Default for OutputFilter {
    fn default() -> Self {
        Self {
            stdout_markers: vec![IDLE_HEARTBEAT_MARKER.to_string()],
            stderr_markers: vec![TTY_WARNING_MARKER.to_string()],
        }
    }
}

impl OutputFilter {
    pub fn new(stdout_markers: Vec<String>, stderr_markers: Vec<String>) -> Self {
        Self {
            stdout_markers,
            stderr_markers,
        }
    }

    /// `None` if the stdout chunk contains a suppressed marker.
    pub fn filter_stdout(&self, chunk: &str) -> Option<OutputLine> {
        if contains_any(chunk, &self.stdout_markers) {
            return None;
        }
        Some(OutputLine::Stdout(chunk.to_string()))
    }

    /// `None` if the stderr chunk contains a suppressed marker.
    pub fn filter_stderr(&self, chunk: &str) -> Option<OutputLine> {
        if contains_any(chunk, &self.stderr_markers) {
            return None;
        }
        Some(OutputLine::Stderr(chunk.to_string()))
    }
}

fn contains_any(chunk: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| chunk.contains(m.as_str()))
}
