use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;
pub type RevertEpoch = u64;

/// One webhook as returned by `GET /api/webhooks`. Fields other than `id`
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebhookRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPage {
    pub webhooks: Vec<WebhookRecord>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateBody<'a> {
    pub webhook_ids: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedHandler {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageFetched {
        cursor: Option<String>,
        result: Result<WebhookPage, ApiError>,
    },
    HandlerGenerated {
        request_id: RequestId,
        result: Result<String, ApiError>,
    },
    ClipboardWritten {
        request_id: RequestId,
        result: Result<(), ClipboardError>,
    },
    RevertElapsed {
        epoch: RevertEpoch,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("clipboard task aborted")]
    Aborted,
}
