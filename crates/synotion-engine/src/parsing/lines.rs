/// The body of a document split into addressable lines.
///
/// Block parsers receive this together with a start index rather than a
/// re-sliced copy of the remaining input, so "lines consumed" is always an
/// offset into the same array.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceLines<'a> {
    /// Splits `body` on line endings (`\n` or `\r\n`). A trailing newline does
    /// not produce an extra empty line.
    pub fn new(body: &'a str) -> Self {
        Self {
            lines: body.lines().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.lines.get(idx).copied()
    }

    /// Lines from `start` to the end of input.
    pub fn rest(&self, start: usize) -> &[&'a str] {
        self.lines.get(start..).unwrap_or(&[])
    }

    /// Length of the contiguous run of lines starting at `start` that satisfy
    /// `pred`.
    pub fn run_len(&self, start: usize, pred: impl Fn(&str) -> bool) -> usize {
        self.rest(start).iter().take_while(|l| pred(**l)).count()
    }
}

/// Whether a line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines() {
        let lines = SourceLines::new("a\nb\r\nc\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(1), Some("b"));
        assert_eq!(lines.get(3), None);
    }

    #[test]
    fn empty_body_has_no_lines() {
        assert!(SourceLines::new("").is_empty());
    }

    #[test]
    fn interior_blank_lines_are_kept() {
        let lines = SourceLines::new("a\n\n\nb");
        assert_eq!(lines.len(), 4);
        assert!(is_blank(lines.get(1).unwrap()));
    }

    #[test]
    fn rest_past_end_is_empty() {
        let lines = SourceLines::new("a\nb");
        assert!(lines.rest(5).is_empty());
        assert_eq!(lines.rest(1), &["b"]);
    }

    #[test]
    fn run_len_stops_at_first_mismatch() {
        let lines = SourceLines::new("- a\n- b\nc\n- d");
        assert_eq!(lines.run_len(0, |l| l.starts_with('-')), 2);
        assert_eq!(lines.run_len(2, |l| l.starts_with('-')), 0);
        assert_eq!(lines.run_len(3, |l| l.starts_with('-')), 1);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert!(is_blank("   \t"));
        assert!(!is_blank("  x "));
    }
}
