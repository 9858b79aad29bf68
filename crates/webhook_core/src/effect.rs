use std::time::Duration;

use crate::{Cursor, RequestId, RevertEpoch, WebhookId};

/// Work the runtime must carry out on behalf of [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page; `None` is the first page.
    FetchPage { cursor: Option<Cursor> },
    GenerateHandler {
        request_id: RequestId,
        webhook_ids: Vec<WebhookId>,
    },
    /// Copy the artifact produced by `request_id`.
    WriteClipboard { request_id: RequestId, text: String },
    /// Replaces any previously scheduled revert.
    ScheduleCopiedRevert { epoch: RevertEpoch, delay: Duration },
    CancelCopiedRevert,
    ObserveSentinel,
    ReleaseSentinel,
}
