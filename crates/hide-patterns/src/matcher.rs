use glob::{MatchOptions, Pattern};

/// Gitignore-style matching: `**` crosses path separators, `*` / `?` /
/// character classes do not, and wildcards match leading dots.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// An ordered set of glob patterns from a pattern file.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Parse pattern-file text: one glob per line, blank lines and `#`
    /// comments skipped. Globs that fail to compile are dropped silently;
    /// they can never match, and one bad line must not break the rest of
    /// the file.
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| Pattern::new(line).ok())
            .collect();

        Self { patterns }
    }

    /// Decode raw pattern-resource bytes. `None` (resource absent) and
    /// invalid UTF-8 both yield the empty set, disabling masking rather
    /// than raising.
    pub fn from_bytes(bytes: Option<&[u8]>) -> Self {
        match bytes {
            Some(raw) => match std::str::from_utf8(raw) {
                Ok(text) => Self::parse(text),
                Err(_) => {
                    tracing::debug!("pattern resource is not valid UTF-8, masking disabled");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Decide whether a file is in scope for masking. Patterns containing a
    /// slash match the workspace-relative path, all others match the base
    /// name, mirroring gitignore. First match wins.
    pub fn should_mask(&self, relative_path: &str, base_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| Self::matches(pattern, relative_path, base_name))
    }

    /// Raw text of the first matching pattern, for log output.
    pub fn matching_pattern(&self, relative_path: &str, base_name: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|pattern| Self::matches(pattern, relative_path, base_name))
            .map(|pattern| pattern.as_str())
    }

    fn matches(pattern: &Pattern, relative_path: &str, base_name: &str) -> bool {
        let subject = if pattern.as_str().contains('/') {
            relative_path
        } else {
            base_name
        };

        pattern.matches_with(subject, MATCH_OPTIONS)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_never_masks() {
        let set = PatternSet::default();

        assert!(!set.should_mask(".env", ".env"));
        assert!(!set.should_mask("config/secrets.yaml", "secrets.yaml"));
    }

    #[test]
    fn test_slashless_pattern_matches_base_name() {
        let set = PatternSet::parse("*.env\ncredentials");

        assert!(set.should_mask("deploy/prod.env", "prod.env"));
        assert!(set.should_mask("home/user/.aws/credentials", "credentials"));
        assert!(!set.should_mask("deploy/prod.envrc", "prod.envrc"));
    }

    #[test]
    fn test_slash_pattern_matches_relative_path() {
        let set = PatternSet::parse("secrets/*.json");

        assert!(set.should_mask("secrets/db.json", "db.json"));
        // `*` does not cross `/`, and the pattern is anchored to the path
        // root, so a nested secrets directory does not match.
        assert!(!set.should_mask("config/secrets/db.json", "db.json"));
    }

    #[test]
    fn test_double_star_crosses_directories() {
        let set = PatternSet::parse("**/secrets/*.json");

        assert!(set.should_mask("config/secrets/db.json", "db.json"));
        assert!(set.should_mask("secrets/db.json", "db.json"));
        assert!(!set.should_mask("config/secrets/nested/db.json", "db.json"));
    }

    #[test]
    fn test_wildcard_matches_dotfiles() {
        let set = PatternSet::parse("*.env");

        assert!(set.should_mask(".env", ".env"));
        assert!(!set.should_mask("other.txt", "other.txt"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let set = PatternSet::parse("# secrets\n\n  \n*.pem\n  # indented comment\n");

        assert_eq!(set.len(), 1);
        assert!(set.should_mask("certs/server.pem", "server.pem"));
    }

    #[test]
    fn test_malformed_glob_is_dropped() {
        // `a**` is not a valid component in glob syntax; the line is dropped
        // and the rest of the file still applies.
        let set = PatternSet::parse("a**\n*.key");

        assert_eq!(set.len(), 1);
        assert!(set.should_mask("id.key", "id.key"));
    }

    #[test]
    fn test_matching_pattern_reports_first_match() {
        let set = PatternSet::parse("*.env\n*");

        assert_eq!(set.matching_pattern("prod.env", "prod.env"), Some("*.env"));
        assert_eq!(set.matching_pattern("notes.txt", "notes.txt"), Some("*"));
        assert_eq!(set.matching_pattern("dir/notes.txt", "notes.txt"), Some("*"));
    }

    #[test]
    fn test_from_bytes_fails_open() {
        assert!(PatternSet::from_bytes(None).is_empty());
        assert!(PatternSet::from_bytes(Some(&[0xff, 0xfe, 0x00])).is_empty());
        assert_eq!(PatternSet::from_bytes(Some(b"*.env\n")).len(), 1);
    }

    #[test]
    fn test_character_class() {
        let set = PatternSet::parse("secret[0-9].txt");

        assert!(set.should_mask("secret1.txt", "secret1.txt"));
        assert!(!set.should_mask("secretx.txt", "secretx.txt"));
    }
}
