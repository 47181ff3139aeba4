//! Line index for error-reporting line numbers and snippet extraction.
//!
//! Scan-once byte-offset index: the error reporter only ever converts a byte
//! position to a 1-based line number and extracts the rest of that line as a
//! snippet, so no UTF-16 or column tracking is carried here.

/// Maps byte offsets in a source buffer to 1-based line numbers and back,
/// and extracts single-line snippets for diagnostics.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line (line 0 always starts at 0).
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Build an index over `text` by scanning for `\n` bytes once.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line number containing byte offset `pos`, per spec.md §4.8
    /// ("compute 1-based line number by counting newlines in
    /// `buffer[0..pos]`").
    pub fn line_number(&self, pos: usize) -> usize {
        let line0 = self.line_starts.partition_point(|&start| start <= pos).saturating_sub(1);
        line0 + 1
    }

    /// The snippet from `pos` up to (but not including) the next newline or
    /// end of string, per spec.md §7 ("extracts the token span up to the
    /// next newline or EOS for context").
    pub fn snippet<'a>(&self, text: &'a str, pos: usize) -> &'a str {
        let pos = pos.min(text.len());
        let end = text[pos..].find('\n').map_or(text.len(), |rel| pos + rel);
        &text[pos..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_number_counts_newlines_before_position() {
        let text = "a: 1;\nb: 2;\nc: 3;";
        let index = LineIndex::new(text);
        assert_eq!(index.line_number(0), 1);
        assert_eq!(index.line_number(6), 2);
        assert_eq!(index.line_number(12), 3);
    }

    #[test]
    fn snippet_stops_at_newline_or_eos() {
        let text = "a: 1;\nb: 2;";
        let index = LineIndex::new(text);
        assert_eq!(index.snippet(text, 6), "b: 2;");
        assert_eq!(index.snippet(text, 0), "a: 1;");
    }
}
