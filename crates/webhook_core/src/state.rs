use crate::view_model::{AppViewModel, DialogView, WebhookRowView};
use crate::{
    ClipboardFeedback, GenerationState, GenerationWorkflow, PageStore, SelectionSet,
    VisibilityTrigger,
};

/// Everything one browsing session owns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mounted: bool,
    pages: PageStore,
    trigger: VisibilityTrigger,
    selection: SelectionSet,
    generation: GenerationWorkflow,
    feedback: ClipboardFeedback,
    load_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .pages
            .flatten()
            .map(|webhook| WebhookRowView {
                id: webhook.id.clone(),
                attributes: webhook
                    .attributes
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
                checked: self.selection.contains(&webhook.id),
            })
            .collect();

        let dialog = match self.generation.state() {
            GenerationState::Idle => DialogView::Closed,
            GenerationState::Generating { .. } => DialogView::Generating,
            GenerationState::Ready { code, .. } => DialogView::Ready {
                code: code.clone(),
                copied: self.feedback.is_copied(),
            },
        };

        AppViewModel {
            rows,
            selected_count: self.selection.count(),
            has_more: self.pages.has_more(),
            loading_more: self.pages.is_fetching(),
            show_sentinel: self.pages.has_loaded_any() && self.pages.has_more(),
            can_generate: !self.selection.is_empty() && !self.generation.is_generating(),
            load_error: self.load_error.clone(),
            dialog,
            dirty: self.dirty,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn pages(&self) -> &PageStore {
        &self.pages
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn generation(&self) -> &GenerationWorkflow {
        &self.generation
    }

    pub fn feedback(&self) -> &ClipboardFeedback {
        &self.feedback
    }

    pub fn trigger(&self) -> &VisibilityTrigger {
        &self.trigger
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    pub(crate) fn pages_mut(&mut self) -> &mut PageStore {
        &mut self.pages
    }

    pub(crate) fn trigger_mut(&mut self) -> &mut VisibilityTrigger {
        &mut self.trigger
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub(crate) fn generation_mut(&mut self) -> &mut GenerationWorkflow {
        &mut self.generation
    }

    pub(crate) fn feedback_mut(&mut self) -> &mut ClipboardFeedback {
        &mut self.feedback
    }

    pub(crate) fn set_load_error(&mut self, error: Option<String>) {
        self.load_error = error;
    }
}
