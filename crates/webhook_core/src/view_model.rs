use crate::WebhookId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub rows: Vec<WebhookRowView>,
    pub selected_count: usize,
    pub has_more: bool,
    pub loading_more: bool,
    /// The load-more sentinel is rendered below the last row.
    pub show_sentinel: bool,
    pub can_generate: bool,
    pub load_error: Option<String>,
    pub dialog: DialogView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRowView {
    pub id: WebhookId,
    pub attributes: Vec<(String, String)>,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogView {
    #[default]
    Closed,
    Generating,
    Ready { code: String, copied: bool },
}
