use std::collections::HashSet;

use crate::expression::CanonicalKey;

/// Canonical keys already reported during one search.
#[derive(Debug, Default)]
pub struct DeduplicationRegistry {
    seen: HashSet<CanonicalKey>,
}

impl DeduplicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as seen, returning whether it had been seen before.
    pub fn test_and_set(&mut self, key: &CanonicalKey) -> bool {
        if self.seen.contains(key) {
            return true;
        }
        self.seen.insert(key.clone());
        false
    }

    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
