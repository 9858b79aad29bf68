use std::collections::BTreeMap;

pub type WebhookId = String;
pub type Cursor = String;

/// A webhook record as listed by the API. Everything beyond `id` is carried
/// through untouched for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    pub id: WebhookId,
    pub attributes: BTreeMap<String, String>,
}

impl Webhook {
    pub fn new(id: impl Into<WebhookId>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub webhooks: Vec<Webhook>,
    /// `None` marks the last page.
    pub next_cursor: Option<Cursor>,
}

/// The fetch currently in flight, identified by the cursor it was issued for.
/// `cursor: None` is the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    cursor: Option<Cursor>,
}

/// Ordered pages in fetch order, with at most one fetch outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageStore {
    pages: Vec<Page>,
    pending: Option<PendingFetch>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// True until a page without `next_cursor` has been appended. Before the
    /// first page arrives there is always more to load.
    pub fn has_more(&self) -> bool {
        match self.pages.last() {
            Some(page) => page.next_cursor.is_some(),
            None => true,
        }
    }

    pub fn has_loaded_any(&self) -> bool {
        !self.pages.is_empty()
    }

    /// Starts the next fetch. Returns the cursor to request (`Some(None)` for
    /// the first page), or `None` when a fetch is in flight or the chain has
    /// ended.
    pub fn begin_load(&mut self) -> Option<Option<Cursor>> {
        if self.is_fetching() || !self.has_more() {
            return None;
        }
        let cursor = self.pages.last().and_then(|page| page.next_cursor.clone());
        self.pending = Some(PendingFetch {
            cursor: cursor.clone(),
        });
        Some(cursor)
    }

    /// Appends a fetched page. Responses for anything other than the
    /// outstanding cursor are dropped and `false` is returned.
    pub fn apply_loaded(&mut self, cursor: Option<&str>, page: Page) -> bool {
        if !self.is_pending_for(cursor) {
            return false;
        }
        self.pending = None;
        self.pages.push(page);
        true
    }

    /// Clears the in-flight flag after a failed fetch. Pages are untouched.
    pub fn apply_failed(&mut self, cursor: Option<&str>) -> bool {
        if !self.is_pending_for(cursor) {
            return false;
        }
        self.pending = None;
        true
    }

    fn is_pending_for(&self, cursor: Option<&str>) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.cursor.as_deref() == cursor)
    }

    /// All loaded webhooks in load order. Each call starts a fresh pass.
    pub fn flatten(&self) -> impl Iterator<Item = &Webhook> + '_ {
        self.pages.iter().flat_map(|page| page.webhooks.iter())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.flatten().any(|webhook| webhook.id == id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn webhook_count(&self) -> usize {
        self.pages.iter().map(|page| page.webhooks.len()).sum()
    }
}
