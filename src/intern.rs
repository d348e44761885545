use ahash::AHashSet;
use std::sync::Arc;

/// Deduplicating store for run strings.
///
/// Equal run strings occurring anywhere in the trie share one allocation.
/// The table lives on the trie handle, so the shared strings live at least
/// as long as the tree that references them.
#[derive(Debug, Default)]
pub(crate) struct Interner {
    table: AHashSet<Arc<str>>,
}

impl Interner {
    /// Returns the shared allocation for `content`, inserting it on first
    /// sight.
    pub(crate) fn intern(&mut self, content: &str) -> Arc<str> {
        if let Some(existing) = self.table.get(content) {
            Arc::clone(existing)
        } else {
            let shared: Arc<str> = Arc::from(content);
            self.table.insert(Arc::clone(&shared));
            shared
        }
    }

    /// Number of distinct strings interned.
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Total bytes of interned string content.
    pub(crate) fn content_bytes(&self) -> usize {
        self.table.iter().map(|entry| entry.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_content_shares_storage() {
        let mut interner = Interner::default();
        let first = interner.intern("CGG");
        let second = interner.intern("CGG");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(interner.len(), 1);
        assert_eq!(interner.content_bytes(), 3);
    }

    #[test]
    fn test_distinct_content_is_distinct() {
        let mut interner = Interner::default();
        let cgg = interner.intern("CGG");
        let tta = interner.intern("TTA");

        assert!(!Arc::ptr_eq(&cgg, &tta));
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.content_bytes(), 6);
    }
}
