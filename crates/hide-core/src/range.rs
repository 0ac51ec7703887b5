use serde::{Deserialize, Serialize};

/// A half-open interval of character columns on a single line, marking text
/// a renderer should redact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl ValueRange {
    pub fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_serialization() {
        let range = ValueRange::new(3, 7, 13);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"line":3,"start":7,"end":13}"#);

        let parsed: ValueRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }
}
