//! Webhook engine: API client, clipboard access and effect execution.
mod api;
mod clipboard;
mod engine;
mod timer;
mod types;

pub use api::{ApiSettings, ReqwestApi, WebhookApi};
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use engine::{EngineError, EngineHandle};
pub use timer::RevertTimer;
pub use types::{
    ApiError, ClipboardError, EngineEvent, FailureKind, RequestId, RevertEpoch, WebhookPage,
    WebhookRecord,
};
