//! Pattern loading and gitignore-style matching for the hide masking engine
//!
//! A pattern file (`.hide`) holds one glob per line. `PatternSet` decides
//! whether a file is in scope for masking; `PatternStore` holds the active
//! set and swaps it atomically on reload.

pub mod loader;
pub mod matcher;
pub mod store;

pub use loader::{LoadError, PATTERN_FILE_NAME, PatternFile, find_pattern_file};
pub use matcher::PatternSet;
pub use store::PatternStore;
