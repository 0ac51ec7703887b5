use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::loader::PatternFile;
use crate::matcher::PatternSet;

/// Holds the active pattern set with copy-on-reload snapshots.
///
/// Readers take an `Arc` snapshot per decision. A reload builds a complete
/// new set and swaps the reference, so a concurrent reader never observes a
/// partially updated list.
#[derive(Debug, Default)]
pub struct PatternStore {
    current: RwLock<Arc<PatternSet>>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern set active at this instant.
    pub fn snapshot(&self) -> Arc<PatternSet> {
        self.current
            .read()
            .expect("pattern store lock poisoned")
            .clone()
    }

    /// Atomically replace the active set.
    pub fn install(&self, set: PatternSet) {
        tracing::debug!(patterns = set.len(), "pattern set installed");
        *self.current.write().expect("pattern store lock poisoned") = Arc::new(set);
    }

    /// Reload from raw resource bytes. `None` means the pattern file was
    /// deleted or never existed; masking is disabled.
    pub fn reload_from_bytes(&self, bytes: Option<&[u8]>) {
        self.install(PatternSet::from_bytes(bytes));
    }

    /// Reload from a pattern file on disk, failing open on any read error.
    pub fn reload_from_path(&self, path: &Path) {
        self.install(PatternFile::read_or_default(path));
    }
}
