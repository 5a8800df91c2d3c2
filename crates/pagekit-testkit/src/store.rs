use std::cell::Cell;
use std::collections::HashMap;

/// In-memory element store standing in for the document
///
/// Maps element ids to text content and counts lookups, so tests can
/// verify that a template cache skipped the store entirely.
pub struct ElementStore {
    elements: HashMap<String, String>,
    lookups: Cell<usize>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            lookups: Cell::new(0),
        }
    }

    /// Register an element's text content under an id.
    pub fn insert(&mut self, id: &str, text: &str) {
        self.elements.insert(id.to_string(), text.to_string());
    }

    /// Look up an element's text content, recording the access.
    pub fn text_content(&self, id: &str) -> Option<String> {
        self.lookups.set(self.lookups.get() + 1);
        self.elements.get(id).cloned()
    }

    /// How many lookups have been performed.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}
