use std::collections::HashMap;
use std::sync::RwLock;

use crate::application::ports::AnswerCache;

/// Answer cache that lives only as long as the process.
#[derive(Default)]
pub struct InMemoryAnswerCache {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryAnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl AnswerCache for InMemoryAnswerCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn put(&self, key: String, value: String) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, value);
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
