//! Pattern-file discovery and reading
//!
//! Reading always has a fail-open form: a missing or unreadable pattern file
//! yields the empty set so masking is disabled instead of getting in the
//! user's way.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::matcher::PatternSet;

/// File name of the pattern resource searched for in a project tree.
pub const PATTERN_FILE_NAME: &str = ".hide";

/// Directories never descended into while looking for a pattern file.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "target"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read pattern file: {0}")]
    Io(#[from] std::io::Error),

    #[error("pattern file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub struct PatternFile;

impl PatternFile {
    /// Strict read: I/O and encoding failures surface as errors.
    pub fn read(path: &Path) -> Result<PatternSet, LoadError> {
        let bytes = std::fs::read(path)?;
        let text = std::str::from_utf8(&bytes)?;

        Ok(PatternSet::parse(text))
    }

    /// Fail-open read: any failure is logged at debug and yields the empty
    /// set.
    pub fn read_or_default(path: &Path) -> PatternSet {
        match Self::read(path) {
            Ok(set) => set,
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    "pattern file unavailable, masking disabled: {err}"
                );
                PatternSet::default()
            }
        }
    }
}

/// Locate the first pattern file under `root`, skipping dependency and VCS
/// directories, in walk order.
pub fn find_pattern_file(root: &Path) -> Option<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry))
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_type().is_file() && entry.file_name() == PATTERN_FILE_NAME)
        .map(|entry| entry.into_path())
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
