//! Two-pass delimiter balance scan.
//!
//! Runs the [`Classifier`] over a sentinel buffer and feeds each code run to
//! the [`Matcher`]. The first violation stops matching; the classifier is
//! then drained so [`ScanOutcome::end_state`] always describes end of input.

use crate::classifier::{Classifier, EscapePolicy, ScanMode, ScanState};
use crate::delimiter::DelimiterSet;
use crate::matcher::{Matcher, UnclosedPolicy};
use crate::{Diagnostic, SourceBuffer};

/// Knobs for one scan. The default matches [`scan_delimiter_balance`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    pub escape: EscapePolicy,
    pub delimiters: DelimiterSet,
    pub unclosed: UnclosedPolicy,
}

impl ScanOptions {
    #[must_use]
    pub fn with_escape(mut self, escape: EscapePolicy) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub fn with_delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.delimiters = delimiters;
        self
    }

    #[must_use]
    pub fn with_unclosed(mut self, unclosed: UnclosedPolicy) -> Self {
        self.unclosed = unclosed;
        self
    }
}

/// Result of [`scan`]: the verdict plus where the classifier ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanOutcome {
    pub diagnostic: Diagnostic,
    /// Classifier state at end of input. Non-code means an unterminated
    /// string or block comment (or a trailing line comment with no newline).
    pub end_state: ScanState,
}

impl ScanOutcome {
    pub fn end_mode(&self) -> ScanMode {
        self.end_state.mode()
    }

    /// `true` if input ended inside a string or block comment.
    ///
    /// A line comment running into EOF is normal and does not count.
    pub fn ended_unterminated(&self) -> bool {
        matches!(
            self.end_state.mode(),
            ScanMode::InString | ScanMode::InBlockComment
        )
    }
}

/// Scan `text` with explicit options.
pub fn scan(text: &str, options: &ScanOptions) -> ScanOutcome {
    let buf = SourceBuffer::new(text);
    let mut classifier = Classifier::new(buf.cursor(), options.escape);
    let mut matcher = Matcher::new(text, options.delimiters);

    let mut violation = None;
    for segment in classifier.by_ref() {
        violation = matcher.feed(segment);
        if violation.is_some() {
            break;
        }
    }
    // Drain so the end state reflects EOF even after an early violation.
    for _ in classifier.by_ref() {}

    ScanOutcome {
        diagnostic: violation.unwrap_or_else(|| matcher.finish(options.unclosed)),
        end_state: classifier.state(),
    }
}

/// Check whether `(){}[]<>` in `text` are balanced, ignoring any that
/// appear inside string literals or comments.
///
/// Pure and deterministic: the same text always yields the same
/// [`Diagnostic`]. Only the first violation is reported.
///
/// ```
/// use bracer_scan::{scan_delimiter_balance, Diagnostic};
///
/// assert_eq!(scan_delimiter_balance("f(\"(\") // )"), Diagnostic::Balanced);
/// assert_eq!(scan_delimiter_balance("(]").to_string(),
///            "Mismatched closing ']' at line 1 (opened by '(' at index 0)");
/// ```
pub fn scan_delimiter_balance(text: &str) -> Diagnostic {
    scan(text, &ScanOptions::default()).diagnostic
}

#[cfg(test)]
mod tests;
