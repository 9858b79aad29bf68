use crate::WebhookId;

/// Chosen webhook ids. Membership is what matters; ids are kept in the order
/// they were picked so the generation request lists them that way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    ids: Vec<WebhookId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(index) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id.to_owned());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn snapshot(&self) -> Vec<WebhookId> {
        self.ids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("a"));
        assert!(selection.contains("a"));
        assert!(!selection.toggle("a"));
        assert!(!selection.contains("a"));
        assert_eq!(selection, SelectionSet::new());
    }

    #[test]
    fn snapshot_keeps_pick_order() {
        let mut selection = SelectionSet::new();
        selection.toggle("b");
        selection.toggle("a");
        selection.toggle("c");
        selection.toggle("a");
        assert_eq!(selection.snapshot(), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(selection.count(), 2);
    }
}
