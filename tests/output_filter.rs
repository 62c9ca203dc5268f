// tests/output_filter.rs

use vscode_test_launcher::exec::filter::{IDLE_HEARTBEAT_MARKER, TTY_WARNING_MARKER};
use vscode_test_launcher::exec::{OutputFilter, OutputLine};

#[test]
fn idle_heartbeat_on_stdout_is_suppressed() {
    let filter = OutputFilter::default();
    assert_eq!(filter.filter_stdout("update#setState idle\n"), None);
    assert_eq!(
        filter.filter_stdout("[main 12:00:01] update#setState idle\n"),
        None
    );
}

#[test]
fn other_stdout_is_forwarded_verbatim() {
    let filter = OutputFilter::default();
    assert_eq!(
        filter.filter_stdout("  3 passing (12ms)\n"),
        Some(OutputLine::Stdout("  3 passing (12ms)\n".to_string()))
    );
    assert_eq!(
        filter.filter_stdout("update#setState checking for updates\n"),
        Some(OutputLine::Stdout(
            "update#setState checking for updates\n".to_string()
        ))
    );
}

#[test]
fn tty_warning_on_stderr_is_suppressed() {
    let filter = OutputFilter::default();
    assert_eq!(
        filter.filter_stderr("stty: stdin isn't a terminal\n"),
        None
    );
}

#[test]
fn other_stderr_is_forwarded_as_error_line() {
    let filter = OutputFilter::default();
    let line = filter.filter_stderr("Error: Cannot find module 'mocha'\n");
    assert_eq!(
        line,
        Some(OutputLine::Stderr(
            "Error: Cannot find module 'mocha'\n".to_string()
        ))
    );
}

#[test]
fn markers_only_apply_to_their_own_stream() {
    let filter = OutputFilter::default();
    assert!(filter.filter_stderr(IDLE_HEARTBEAT_MARKER).is_some());
    assert!(filter.filter_stdout(TTY_WARNING_MARKER).is_some());
}

#[test]
fn custom_markers_replace_defaults() {
    let filter = OutputFilter::new(vec!["noise".to_string()], Vec::new());
    assert_eq!(filter.filter_stdout("some noise here"), None);
    assert!(filter.filter_stdout(IDLE_HEARTBEAT_MARKER).is_some());
    assert!(filter.filter_stderr(TTY_WARNING_MARKER).is_some());
}
