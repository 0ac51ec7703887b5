//! Masking driver: ties the pattern decision to value extraction and hands
//! the resulting ranges to a host-owned renderer.
//!
//! The host (an editor integration) owns file watching and decoration
//! drawing. This crate owns everything between "the pattern file changed" or
//! "a document changed" and "these exact ranges should be redacted".

use std::path::Path;
use std::sync::Arc;

use hide_core::{ValueExtractor, ValueRange};
use hide_patterns::{PatternSet, PatternStore};

/// Host-side rendering capability. An empty slice clears every decoration
/// previously applied to the document.
pub trait Renderer {
    fn set_masked_ranges(&mut self, document_id: &str, ranges: &[ValueRange]);
}

pub struct MaskEngine {
    store: PatternStore,
    extractor: ValueExtractor,
}

impl MaskEngine {
    pub fn new() -> Self {
        Self {
            store: PatternStore::new(),
            extractor: ValueExtractor::new(),
        }
    }

    /// Replace the active pattern set from raw resource bytes. `None` means
    /// the pattern file was deleted or never existed.
    pub fn reload_patterns(&self, bytes: Option<&[u8]>) {
        self.store.reload_from_bytes(bytes);
    }

    /// Replace the active pattern set from a pattern file on disk, failing
    /// open on any read error.
    pub fn reload_patterns_from_path(&self, path: &Path) {
        self.store.reload_from_path(path);
    }

    /// Current pattern snapshot, for hosts that inspect the active set.
    pub fn patterns(&self) -> Arc<PatternSet> {
        self.store.snapshot()
    }

    /// Whether the document at `relative_path` (forward-slash separated,
    /// relative to the project root) is in scope for masking.
    pub fn decide(&self, relative_path: &str) -> bool {
        self.store
            .snapshot()
            .should_mask(relative_path, base_name(relative_path))
    }

    /// Recompute masked ranges for a document and push them to the renderer.
    /// Out-of-scope documents get an empty range list so stale decorations
    /// are cleared.
    pub fn refresh(
        &self,
        document_id: &str,
        relative_path: &str,
        text: &str,
        renderer: &mut dyn Renderer,
    ) {
        if self.decide(relative_path) {
            let ranges = self.extractor.extract_text(text);
            tracing::debug!(document_id, ranges = ranges.len(), "masking document");
            renderer.set_masked_ranges(document_id, &ranges);
        } else {
            renderer.set_masked_ranges(document_id, &[]);
        }
    }
}

impl Default for MaskEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Final segment of a forward-slash relative path.
fn base_name(relative_path: &str) -> &str {
    match relative_path.rsplit_once('/') {
        Some((_, base)) => base,
        None => relative_path,
    }
}
