use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use session_logging::{session_debug, session_info, session_warn};
use tokio::runtime::Runtime;

use crate::api::{ApiSettings, ReqwestApi, WebhookApi};
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::{ApiError, ClipboardError, EngineEvent, RequestId, RevertEpoch, RevertTimer};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

enum EngineCommand {
    FetchPage {
        cursor: Option<String>,
    },
    Generate {
        request_id: RequestId,
        webhook_ids: Vec<String>,
    },
    WriteClipboard {
        request_id: RequestId,
        text: String,
    },
    ScheduleRevert {
        epoch: RevertEpoch,
        delay: Duration,
    },
    CancelRevert,
    Shutdown,
}

/// Front door to the IO side. Commands run on a tokio runtime owned by a
/// background thread; results come back as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, EngineError> {
        let api = ReqwestApi::new(settings)?;
        Self::with_parts(Arc::new(api), Arc::new(SystemClipboard))
    }

    pub fn with_parts(
        api: Arc<dyn WebhookApi>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("webhook-engine-worker")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("webhook-engine".to_string())
            .spawn(move || run_loop(runtime, cmd_rx, event_tx, api, clipboard))?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, cursor: Option<String>) {
        self.send(EngineCommand::FetchPage { cursor });
    }

    pub fn generate(&self, request_id: RequestId, webhook_ids: Vec<String>) {
        self.send(EngineCommand::Generate {
            request_id,
            webhook_ids,
        });
    }

    /// Writes the artifact of `request_id`; the ack carries the same id.
    pub fn write_clipboard(&self, request_id: RequestId, text: impl Into<String>) {
        self.send(EngineCommand::WriteClipboard {
            request_id,
            text: text.into(),
        });
    }

    /// Replaces any pending revert.
    pub fn schedule_revert(&self, epoch: RevertEpoch, delay: Duration) {
        self.send(EngineCommand::ScheduleRevert { epoch, delay });
    }

    pub fn cancel_revert(&self) {
        self.send(EngineCommand::CancelRevert);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            session_warn!("engine thread is gone; command dropped");
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }
}

fn run_loop(
    runtime: Runtime,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    api: Arc<dyn WebhookApi>,
    clipboard: Arc<dyn ClipboardWriter>,
) {
    let mut revert = RevertTimer::new();
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Shutdown => break,
            EngineCommand::ScheduleRevert { epoch, delay } => {
                session_debug!("scheduling copied revert epoch={} delay={:?}", epoch, delay);
                let event_tx = event_tx.clone();
                revert.schedule(runtime.handle(), delay, move || {
                    let _ = event_tx.send(EngineEvent::RevertElapsed { epoch });
                });
            }
            EngineCommand::CancelRevert => {
                if revert.cancel() {
                    session_debug!("cancelled pending copied revert");
                }
            }
            command => {
                let api = api.clone();
                let clipboard = clipboard.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), clipboard, command).await;
                    if let Some(event) = event {
                        let _ = event_tx.send(event);
                    }
                });
            }
        }
    }

    revert.cancel();
    runtime.shutdown_background();
    session_info!("engine stopped");
}

async fn handle_command(
    api: &dyn WebhookApi,
    clipboard: Arc<dyn ClipboardWriter>,
    command: EngineCommand,
) -> Option<EngineEvent> {
    match command {
        EngineCommand::FetchPage { cursor } => {
            session_info!("FetchPage cursor={:?}", cursor);
            let result = api.list_webhooks(cursor.as_deref()).await;
            match &result {
                Ok(page) => session_info!(
                    "FetchPage cursor={:?} webhooks={} next={:?}",
                    cursor,
                    page.webhooks.len(),
                    page.next_cursor
                ),
                Err(err) => session_warn!("FetchPage cursor={:?} failed: {}", cursor, err),
            }
            Some(EngineEvent::PageFetched { cursor, result })
        }
        EngineCommand::Generate {
            request_id,
            webhook_ids,
        } => {
            session_info!(
                "Generate request_id={} webhook_count={}",
                request_id,
                webhook_ids.len()
            );
            let result = api.generate_handler(&webhook_ids).await;
            if let Err(err) = &result {
                session_warn!("Generate request_id={} failed: {}", request_id, err);
            }
            Some(EngineEvent::HandlerGenerated { request_id, result })
        }
        EngineCommand::WriteClipboard { request_id, text } => {
            let result = tokio::task::spawn_blocking(move || clipboard.write_text(&text))
                .await
                .unwrap_or(Err(ClipboardError::Aborted));
            if let Err(err) = &result {
                session_warn!("clipboard write request_id={} failed: {}", request_id, err);
            }
            Some(EngineEvent::ClipboardWritten { request_id, result })
        }
        EngineCommand::ScheduleRevert { .. } | EngineCommand::CancelRevert | EngineCommand::Shutdown => {
            None
        }
    }
}
