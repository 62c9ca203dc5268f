// src/exec/sink.rs

//! Destination for test host output that survived filtering.

/// A chunk of child output, tagged with the stream it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// The caller's logging sink for forwarded output.
pub trait OutputSink: Send {
    fn emit(&mut self, line: &OutputLine);
}

/// Writes stdout chunks to stdout and stderr chunks to stderr with an
/// `Error: ` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn emit(&mut self, line: &OutputLine) {
        match line {
            OutputLine::Stdout(s) => println!("{}", trim_newline(s)),
            OutputLine::Stderr(s) => eprintln!("Error: {}", trim_newline(s)),
        }
    }
}

fn trim_newline(s: &str) -> &str {
    s.trim_end_matches(['\r', '\n'])
}
