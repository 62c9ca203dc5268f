use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use vscode_test_launcher::engine::ProcessEvent;
use vscode_test_launcher::errors::Result;
use vscode_test_launcher::exec::{OutputLine, OutputSink, ProcessBackend};
use vscode_test_launcher::launch::BinaryAcquirer;
use vscode_test_launcher::types::ResolvedLaunch;

/// A fake acquirer that:
/// - records every version selector it was asked for
/// - returns a fixed path, or fails with a fixed message.
#[derive(Clone)]
pub struct RecordingAcquirer {
    result: std::result::Result<PathBuf, String>,
    requests: Arc<Mutex<Vec<Option<String>>>>,
}

impl RecordingAcquirer {
    pub fn returning(path: &str) -> Self {
        Self {
            result: Ok(PathBuf::from(path)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<Option<String>> {
        self.requests.lock().unwrap().clone()
    }
}

impl BinaryAcquirer for RecordingAcquirer {
    fn acquire(
        &self,
        version: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<PathBuf>> + Send + '_>> {
        self.requests
            .lock()
            .unwrap()
            .push(version.map(str::to_string));
        let result = self.result.clone().map_err(anyhow::Error::msg);
        Box::pin(async move { result })
    }
}

/// A fake process backend that:
/// - records the `ResolvedLaunch` it was asked to spawn
/// - replays a fixed list of events from a background task, then drops
///   its sender.
pub struct ScriptedBackend {
    events: Vec<ProcessEvent>,
    launched: Arc<Mutex<Vec<ResolvedLaunch>>>,
}

impl ScriptedBackend {
    pub fn new(events: Vec<ProcessEvent>) -> Self {
        Self {
            events,
            launched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a clean run: spawn, the given stdout chunks, then exit.
    pub fn exiting_with(code: Option<i32>, stdout: &[&str]) -> Self {
        let mut events = vec![ProcessEvent::Spawned { pid: Some(4242) }];
        events.extend(stdout.iter().map(|s| ProcessEvent::Stdout(s.to_string())));
        events.push(ProcessEvent::Exited { code });
        Self::new(events)
    }

    /// Handle to the launches seen by this backend.
    pub fn launched(&self) -> Arc<Mutex<Vec<ResolvedLaunch>>> {
        Arc::clone(&self.launched)
    }
}

impl ProcessBackend for ScriptedBackend {
    fn spawn(
        &mut self,
        launch: ResolvedLaunch,
        events: mpsc::Sender<ProcessEvent>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        self.launched.lock().unwrap().push(launch);
        let script = std::mem::take(&mut self.events);

        Box::pin(async move {
            tokio::spawn(async move {
                for event in script {
                    if events.send(event).await.is_err() {
                        break;
                    }
                }
            });
            Ok(())
        })
    }
}

/// Output sink that keeps every forwarded line.
#[derive(Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<OutputLine>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines.lock().unwrap().clone()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, line: &OutputLine) {
        self.lines.lock().unwrap().push(line.clone());
    }
}
