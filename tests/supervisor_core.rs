// tests/supervisor_core.rs

use tokio::sync::mpsc;
use vscode_test_launcher::engine::{
    ProcessEvent, ProcessState, Supervisor, SupervisorCommand, SupervisorCore,
};
use vscode_test_launcher::exec::OutputLine;
use vscode_test_launcher_test_utils::fakes::RecordingSink;
use vscode_test_launcher_test_utils::{init_tracing, with_timeout};

#[test]
fn follows_created_spawned_running_exited() {
    init_tracing();
    let mut core = SupervisorCore::default();
    assert_eq!(core.state(), ProcessState::Created);

    let step = core.step(ProcessEvent::Spawned { pid: Some(1) });
    assert!(step.keep_running);
    assert!(step.commands.is_empty());
    assert_eq!(core.state(), ProcessState::Spawned);

    let step = core.step(ProcessEvent::Stdout("hello\n".to_string()));
    assert_eq!(core.state(), ProcessState::Running);
    assert_eq!(
        step.commands,
        vec![SupervisorCommand::Forward(OutputLine::Stdout(
            "hello\n".to_string()
        ))]
    );

    let step = core.step(ProcessEvent::Exited { code: Some(0) });
    assert!(!step.keep_running);
    assert_eq!(step.commands, vec![SupervisorCommand::Report(Some(0))]);
    assert_eq!(core.state(), ProcessState::Exited(Some(0)));
}

#[test]
fn suppressed_output_produces_no_commands() {
    let mut core = SupervisorCore::default();

    let step = core.step(ProcessEvent::Stdout("update#setState idle\n".to_string()));
    assert!(step.commands.is_empty());
    assert!(step.keep_running);

    let step = core.step(ProcessEvent::Stderr("stty: stdin isn't a terminal\n".to_string()));
    assert!(step.commands.is_empty());
    assert_eq!(core.state(), ProcessState::Running);
}

#[test]
fn error_does_not_complete_the_result() {
    let mut core = SupervisorCore::default();

    let step = core.step(ProcessEvent::Error("spawn ENOENT".to_string()));
    assert!(step.keep_running);
    assert!(step.commands.is_empty());
    assert_eq!(core.state(), ProcessState::Errored);
}

#[test]
fn exit_after_error_is_authoritative() {
    let mut core = SupervisorCore::default();
    core.step(ProcessEvent::Spawned { pid: None });
    core.step(ProcessEvent::Error("pipe closed".to_string()));

    let step = core.step(ProcessEvent::Exited { code: Some(0) });
    assert_eq!(step.commands, vec![SupervisorCommand::Report(Some(0))]);
    assert_eq!(core.state(), ProcessState::Exited(Some(0)));
}

#[test]
fn events_after_exit_are_ignored() {
    let mut core = SupervisorCore::default();
    core.step(ProcessEvent::Exited { code: None });

    let step = core.step(ProcessEvent::Stdout("late output\n".to_string()));
    assert!(step.commands.is_empty());
    assert!(!step.keep_running);

    let step = core.step(ProcessEvent::Exited { code: Some(0) });
    assert!(step.commands.is_empty());
    assert_eq!(core.state(), ProcessState::Exited(None));
}

#[tokio::test]
async fn supervisor_stops_at_exit_while_sender_is_still_open() {
    init_tracing();
    let (tx, rx) = mpsc::channel(8);
    for event in [
        ProcessEvent::Spawned { pid: Some(7) },
        ProcessEvent::Stdout("ok\n".to_string()),
        ProcessEvent::Exited { code: Some(0) },
        ProcessEvent::Stdout("late\n".to_string()),
    ] {
        tx.send(event).await.unwrap();
    }
    let sink = RecordingSink::new();

    let outcome = with_timeout(Supervisor::new(SupervisorCore::default(), rx, sink.clone()).run()).await;

    assert_eq!(outcome.unwrap(), 0);
    assert_eq!(sink.lines(), vec![OutputLine::Stdout("ok\n".to_string())]);
    drop(tx);
}
