//! Per-line value-range extraction

use regex::Regex;

use crate::range::ValueRange;

/// Finds the value portion of `key = value` / `key: value` lines.
///
/// Extraction is line-local and never fails: a line without a delimiter, or
/// one whose computed range would be empty, simply produces no range.
pub struct ValueExtractor {
    value_re: Regex,
}

impl ValueExtractor {
    pub fn new() -> Self {
        Self {
            // First `=` or `:` on the line; group 1 is everything after the
            // delimiter and any whitespace that follows it.
            value_re: Regex::new(r"(?:=|:)\s*(.*)").unwrap(),
        }
    }

    /// Scan an ordered sequence of lines, yielding at most one range per
    /// line (only the first delimiter on a line counts).
    pub fn extract<'a, I>(&self, lines: I) -> Vec<ValueRange>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .enumerate()
            .filter_map(|(index, line)| self.extract_line(index, line))
            .collect()
    }

    /// Split raw document text on `\n` / `\r\n` line boundaries and scan.
    pub fn extract_text(&self, text: &str) -> Vec<ValueRange> {
        self.extract(
            text.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    fn extract_line(&self, index: usize, line: &str) -> Option<ValueRange> {
        let value = self.value_re.captures(line)?.get(1)?;

        // JSON-ish lines carry a trailing comma; drop exactly one. The comma
        // sits outside the emitted range either way.
        let inspected = value.as_str().strip_suffix(',').unwrap_or(value.as_str());

        // Surrounding quotes stay visible; the range covers only the inside.
        // Mismatched pairs are left alone.
        let quoted = (inspected.starts_with('"') && inspected.ends_with('"'))
            || (inspected.starts_with('\u{2018}') && inspected.ends_with('\u{2019}'));
        let trim = usize::from(quoted);

        // Columns are character counts, not byte offsets, so trimming the
        // multi-byte curly quotes lands on the right column.
        let value_column = line[..value.start()].chars().count();
        let start = value_column + trim;
        let end = value_column + inspected.chars().count() - trim;

        (start < end).then_some(ValueRange::new(index, start, end))
    }
}

impl Default for ValueExtractor {
    fn default() -> Self {
        Self::new()
    }
}
