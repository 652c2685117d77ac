//! Offset to line-number mapping.
//!
//! Lines are 1-based and counted by `\n` only: a `\r\n` pair is one break and
//! a lone `\r` is not a break. Masking preserves every `\n`, so an index built
//! from masked text agrees with one built from the original.
//!
//! For a single lookup use [`line_at`]; for repeated lookups (rendering
//! snippets, tails) build a [`LineIndex`] once and query it in O(log L).

/// 1-based line containing byte `offset`: the number of `\n` bytes strictly
/// before it, plus one.
///
/// Offsets past the end are clamped to the end of `text`.
pub fn line_at(text: &str, offset: u32) -> u32 {
    let end = (offset as usize).min(text.len());
    let newlines = memchr::memchr_iter(b'\n', &text.as_bytes()[..end]).count();
    u32::try_from(newlines).map_or(u32::MAX, |n| n.saturating_add(1))
}

/// Pre-computed table of line start offsets.
///
/// # Example
///
/// ```
/// use bracer_scan::LineIndex;
///
/// let source = "line1\nline2\nline3";
/// let index = LineIndex::build(source);
///
/// assert_eq!(index.line_col(source, 0), (1, 1));
/// assert_eq!(index.line_col(source, 8), (2, 3));
/// assert_eq!(index.line_text(source, 3), Some("line3"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of each line start.
    /// `starts[0] = 0`, `starts[1]` = byte after the first `\n`, etc.
    starts: Vec<u32>,
    /// Length of the indexed text, used to bound the last line.
    len: u32,
}

impl LineIndex {
    /// Build the table in one pass over `text`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scanned sources are capped at u32::MAX bytes"
    )]
    pub fn build(text: &str) -> Self {
        let mut starts = vec![0u32];
        starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| (i + 1) as u32));
        LineIndex {
            starts,
            len: u32::try_from(text.len()).unwrap_or(u32::MAX),
        }
    }

    /// 1-based line containing byte `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count never exceeds the u32 byte length"
    )]
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        idx as u32 + 1
    }

    /// 1-based `(line, column)` of byte `offset`.
    ///
    /// The column counts characters, not bytes, from the line start.
    pub fn line_col(&self, text: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self.line_start(line).unwrap_or(0) as usize;
        let offset = (offset as usize).min(text.len()).max(start);
        let col = text
            .get(start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset where `line` (1-based) starts, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.starts.get(idx as usize).copied()
    }

    /// Text of `line` (1-based) without its line break.
    pub fn line_text<'t>(&self, text: &'t str, line: u32) -> Option<&'t str> {
        let start = self.line_start(line)? as usize;
        let end = self
            .line_start(line + 1)
            .map_or(self.len as usize, |next| next as usize - 1);
        let raw = text.get(start..end)?;
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }

    /// Number of lines. An empty text has one (empty) line; a trailing
    /// newline starts a final empty line.
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.starts.len()).unwrap_or(u32::MAX)
    }

    /// The last `n` lines as `(line_number, text)` pairs, in order.
    ///
    /// A trailing newline's empty final line is not counted, so the tail of
    /// `"a\nb\n"` with `n = 1` is `[(2, "b")]`.
    pub fn tail<'t>(&self, text: &'t str, n: u32) -> Vec<(u32, &'t str)> {
        let mut last = self.line_count();
        if last > 1 && self.line_start(last) == Some(self.len) {
            last -= 1;
        }
        let first = last.saturating_sub(n) + 1;
        (first..=last)
            .filter_map(|line| self.line_text(text, line).map(|t| (line, t)))
            .collect()
    }
}
