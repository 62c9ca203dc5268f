// src/exec/process.rs

//! Test host process runner.

use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::engine::ProcessEvent;
use crate::types::ResolvedLaunch;

/// Spawn the test host and report its lifecycle on `events`.
///
/// - The executable is started directly, never through a shell.
/// - The child environment is exactly `launch.env`.
/// - Both output streams are drained to the end before `Exited` is sent,
///   so termination is always the last event.
/// - A failed spawn produces a single `Error` event and no `Exited`.
/// - If the receiving side of `events` is dropped before the child exits,
///   the child is killed and no further events are sent.
pub async fn run_process(launch: ResolvedLaunch, events: mpsc::Sender<ProcessEvent>) {
    info!(
        executable = ?launch.executable,
        args = ?launch.args,
        "starting test host process"
    );

    let mut cmd = Command::new(&launch.executable);
    cmd.args(&launch.args)
        .env_clear()
        .envs(&launch.env)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            error!(
                executable = ?launch.executable,
                error = %e,
                "failed to spawn test host"
            );
            let _ = events
                .send(ProcessEvent::Error(format!(
                    "failed to spawn {:?}: {e}",
                    launch.executable
                )))
                .await;
            return;
        }
    };

    let _ = events.send(ProcessEvent::Spawned { pid: child.id() }).await;

    let stdout_reader = child
        .stdout
        .take()
        .map(|out| tokio::spawn(forward_stream(out, events.clone(), ProcessEvent::Stdout)));
    let stderr_reader = child
        .stderr
        .take()
        .map(|err| tokio::spawn(forward_stream(err, events.clone(), ProcessEvent::Stderr)));

    let readers = [stdout_reader, stderr_reader];
    let finished = tokio::select! {
        status = drain_and_wait(&mut child, readers) => Some(status),
        _ = events.closed() => None,
    };

    match finished {
        Some(Ok(status)) => {
            debug!(exit_code = ?status.code(), "test host process exited");
            let _ = events
                .send(ProcessEvent::Exited {
                    code: status.code(),
                })
                .await;
        }
        Some(Err(e)) => {
            error!(error = %e, "waiting for test host process failed");
            let _ = events
                .send(ProcessEvent::Error(format!(
                    "waiting for test host process failed: {e}"
                )))
                .await;
        }
        None => {
            warn!(pid = ?child.id(), "launch abandoned; killing test host");
            if let Err(e) = child.kill().await {
                error!(error = %e, "failed to kill abandoned test host");
            }
        }
    }
}

/// Wait for both output readers to hit EOF, then reap the child.
async fn drain_and_wait(
    child: &mut Child,
    readers: [Option<JoinHandle<()>>; 2],
) -> std::io::Result<ExitStatus> {
    for reader in readers.into_iter().flatten() {
        if let Err(e) = reader.await {
            debug!(error = %e, "output reader task ended abnormally");
        }
    }
    child.wait().await
}

/// Forward newline-delimited chunks of `stream` as events until EOF.
///
/// Invalid UTF-8 is replaced rather than ending the stream.
async fn forward_stream<R>(
    stream: R,
    events: mpsc::Sender<ProcessEvent>,
    wrap: fn(String) -> ProcessEvent,
) where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let chunk = String::from_utf8_lossy(&buf).into_owned();
                if events.send(wrap(chunk)).await.is_err() {
                    debug!("event receiver dropped; stopping output reader");
                    break;
                }
            }
            Err(e) => {
                debug!(error = %e, "reading child output failed");
                break;
            }
        }
    }
}
