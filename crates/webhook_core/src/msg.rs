#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The list view came up; loads the first page.
    Mounted,
    /// The list view is being torn down.
    Unmounted,
    /// Observer report for the load-more sentinel (0.0 hidden, 1.0 fully shown).
    SentinelVisibility { ratio: f32 },
    /// Explicit request for the next page, e.g. a retry after a failure.
    LoadMoreRequested,
    /// A page arrived for the fetch issued with `cursor`.
    PageLoaded {
        cursor: Option<crate::Cursor>,
        page: crate::Page,
    },
    /// The fetch issued with `cursor` failed.
    PageFailed {
        cursor: Option<crate::Cursor>,
        reason: String,
    },
    /// User checked or unchecked a webhook row.
    WebhookToggled(crate::WebhookId),
    /// User clicked Generate.
    GenerateClicked,
    GenerationSucceeded {
        request_id: crate::RequestId,
        code: String,
    },
    GenerationFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// User clicked Copy in the result view.
    CopyClicked,
    /// The artifact of `request_id` is on the clipboard.
    ClipboardWritten { request_id: crate::RequestId },
    ClipboardFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// The revert timer for `epoch` fired.
    CopiedRevertElapsed { epoch: crate::RevertEpoch },
    /// User closed the result view.
    DismissClicked,
}
