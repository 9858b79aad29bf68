//! Webhook browser core: pure state machine and view-model helpers.
mod clipboard;
mod effect;
mod generation;
mod msg;
mod pages;
mod selection;
mod state;
mod update;
mod view_model;
mod visibility;

pub use clipboard::{ClipboardFeedback, RevertEpoch, COPIED_REVERT_DELAY};
pub use effect::Effect;
pub use generation::{GenerationRequest, GenerationState, GenerationWorkflow, RequestId};
pub use msg::Msg;
pub use pages::{Cursor, Page, PageStore, Webhook, WebhookId};
pub use selection::SelectionSet;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, DialogView, WebhookRowView};
pub use visibility::{VisibilityTrigger, VISIBILITY_THRESHOLD};
