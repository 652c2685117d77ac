//! String/comment classifier producing `(CharClass, start, len)` runs.
//!
//! The classifier is the first of the two scanning passes. It tracks whether
//! the scan position is in plain code, a string literal, a line comment or a
//! block comment, and hands out maximal runs of equally classified bytes.
//! Delimiters inside anything but [`CharClass::Code`] are payload, not
//! structure, and the matcher never sees them.
//!
//! # Rules
//!
//! In code, `"`, `'` and `` ` `` open a string, `//` opens a line comment and
//! `/*` opens a block comment. A string ends at the next unescaped copy of its
//! own quote, a line comment just before `\n` (the newline is code again), a
//! block comment just after `*/`. Strings may span lines. An unterminated
//! construct runs to EOF and leaves [`ScanState::mode`] non-code.
//!
//! Every run boundary sits on an ASCII byte or at EOF, so runs always start
//! and end on UTF-8 char boundaries.

use crate::cursor::Cursor;
use crate::SourceBuffer;

/// What the classifier is currently inside of.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    #[default]
    Code,
    InString,
    InLineComment,
    InBlockComment,
}

/// Classification of a run of source bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Structural code; delimiters here count.
    Code,
    /// Inside a string literal, including both quotes.
    StringLiteral,
    /// A `//` comment up to (not including) the newline.
    LineComment,
    /// A `/* ... */` comment, including both markers.
    BlockComment,
}

impl CharClass {
    /// Returns `true` for runs whose bytes are masked out of the balance check.
    #[inline]
    pub fn is_masked(self) -> bool {
        !matches!(self, CharClass::Code)
    }
}

/// How a backslash before a quote is interpreted inside a string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EscapePolicy {
    /// A quote is escaped iff the raw byte right before it is `\`.
    ///
    /// This misreads an escaped backslash before a real terminator:
    /// `"a\\"` is taken as an escaped quote and the string stays open.
    #[default]
    Lookbehind,
    /// Each `\` escapes exactly the byte after it, so `"a\\"` closes and
    /// `"a\\\"` stays open.
    Forward,
}

/// Mutable state threaded through one classification run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    mode: ScanMode,
    /// Quote byte of the open string; meaningful only in `InString`.
    string_delimiter: u8,
    /// Offset where the current string or comment began.
    opened_at: u32,
}

impl ScanState {
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// The quote character of the open string, if inside one.
    pub fn string_delimiter(&self) -> Option<char> {
        match self.mode {
            ScanMode::InString => Some(char::from(self.string_delimiter)),
            _ => None,
        }
    }

    /// Where the open string or comment started, if not in code.
    pub fn opened_at(&self) -> Option<u32> {
        match self.mode {
            ScanMode::Code => None,
            _ => Some(self.opened_at),
        }
    }

    fn enter(&mut self, mode: ScanMode, at: u32) {
        self.mode = mode;
        self.opened_at = at;
    }
}

/// A maximal run of equally classified bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub class: CharClass,
    /// Byte offset of the first byte in the run.
    pub start: u32,
    /// Length of the run in bytes (never zero).
    pub len: u32,
}

impl Segment {
    /// One past the last byte of the run.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    /// The run as a `usize` range, for slicing the source.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end() as usize
    }
}

/// Allocation-free classifier over a [`Cursor`].
///
/// Yields [`Segment`]s in source order until EOF. Adjacent segments may
/// share a class (two back-to-back strings are two segments), but together
/// they always cover the source exactly once.
pub struct Classifier<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
    escape: EscapePolicy,
}

impl<'a> Classifier<'a> {
    pub fn new(cursor: Cursor<'a>, escape: EscapePolicy) -> Self {
        Self {
            cursor,
            state: ScanState::default(),
            escape,
        }
    }

    /// State after the last segment handed out. Once the classifier is
    /// exhausted this is the state at end of input.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Produce the next run, or `None` at EOF.
    pub fn next_segment(&mut self) -> Option<Segment> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let class = match self.cursor.current() {
            b'"' | b'\'' | b'`' => self.string(start),
            b'/' if self.cursor.peek() == b'/' => self.line_comment(start),
            b'/' if self.cursor.peek() == b'*' => self.block_comment(start),
            _ => self.code(),
        };
        Some(Segment {
            class,
            start,
            len: self.cursor.pos() - start,
        })
    }

    // ─── Code ────────────────────────────────────────────────────────────

    /// Consume plain code up to the next string or comment opener.
    ///
    /// Always consumes at least one byte: a lone `/` (division, closing tag)
    /// is code and the search resumes after it.
    fn code(&mut self) -> CharClass {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_code_delim() {
                b'/' if !matches!(self.cursor.peek(), b'/' | b'*') => self.cursor.advance(),
                _ => break,
            }
        }
        CharClass::Code
    }

    // ─── Strings ─────────────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> CharClass {
        let quote = self.cursor.current();
        self.state.enter(ScanMode::InString, start);
        self.state.string_delimiter = quote;
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                0 if self.cursor.is_eof() => break,
                b'\\' => {
                    self.cursor.advance();
                    if self.escape == EscapePolicy::Forward && !self.cursor.is_eof() {
                        // The escaped byte is consumed whatever it is.
                        self.cursor.advance();
                    }
                }
                _ => {
                    // At `quote`.
                    let escaped =
                        self.escape == EscapePolicy::Lookbehind && self.cursor.prev() == b'\\';
                    self.cursor.advance();
                    if !escaped {
                        self.state.enter(ScanMode::Code, self.cursor.pos());
                        break;
                    }
                }
            }
        }
        CharClass::StringLiteral
    }

    // ─── Comments ────────────────────────────────────────────────────────

    fn line_comment(&mut self, start: u32) -> CharClass {
        self.state.enter(ScanMode::InLineComment, start);
        self.cursor.advance_n(2); // `//`
        self.cursor.eat_until_newline_or_eof();
        if !self.cursor.is_eof() {
            // Stopped at `\n`, which belongs to the code that follows.
            self.state.enter(ScanMode::Code, self.cursor.pos());
        }
        CharClass::LineComment
    }

    fn block_comment(&mut self, start: u32) -> CharClass {
        self.state.enter(ScanMode::InBlockComment, start);
        self.cursor.advance_n(2); // `/*`
        if self.cursor.skip_to_block_comment_end() {
            self.state.enter(ScanMode::Code, self.cursor.pos());
        }
        CharClass::BlockComment
    }
}

impl Iterator for Classifier<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        self.next_segment()
    }
}

/// Returns the masked stand-in for a byte inside a string or comment.
///
/// Line breaks survive so that line numbers computed on masked text match
/// the original.
#[inline]
fn mask_byte(byte: u8) -> char {
    match byte {
        b'\n' => '\n',
        b'\r' => '\r',
        _ => ' ',
    }
}

/// Mask strings and comments with the default escape policy.
///
/// See [`mask_with`].
pub fn mask(text: &str) -> String {
    mask_with(text, EscapePolicy::default())
}

/// Return a copy of `text` with every string and comment byte replaced by a
/// space, except line breaks.
///
/// The result has the same byte length and the same `\n` positions as the
/// input, and code bytes are untouched.
pub fn mask_with(text: &str, escape: EscapePolicy) -> String {
    let buf = SourceBuffer::new(text);
    let bytes = buf.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    for segment in Classifier::new(buf.cursor(), escape) {
        let range = segment.range();
        match text.get(range.clone()) {
            Some(code) if !segment.class.is_masked() => out.push_str(code),
            _ => out.extend(bytes[range].iter().map(|&b| mask_byte(b))),
        }
    }
    out
}

/// Classify every byte of `text`.
///
/// The returned vector is parallel to `text.as_bytes()`.
pub fn classify(text: &str, escape: EscapePolicy) -> Vec<CharClass> {
    let buf = SourceBuffer::new(text);
    let mut classes = Vec::with_capacity(buf.len() as usize);
    for segment in Classifier::new(buf.cursor(), escape) {
        classes.extend(std::iter::repeat(segment.class).take(segment.len as usize));
    }
    classes
}

#[cfg(test)]
mod tests;
