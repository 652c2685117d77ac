//! The single result of a delimiter scan.

use std::fmt;

/// Outcome of one delimiter balance scan.
///
/// Exactly one is produced per scan. Violations carry the offending
/// character, its 1-based line and its byte offset; a mismatch also carries
/// the opener it collided with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// Every opener was closed by the matching closer.
    Balanced,
    /// A closer appeared with nothing open.
    UnmatchedClosing {
        character: char,
        line: u32,
        offset: u32,
    },
    /// A closer met an opener of a different kind.
    MismatchedClosing {
        character: char,
        line: u32,
        offset: u32,
        /// The opener on top of the stack when `character` arrived.
        expected_opener: char,
        /// Byte offset of that opener.
        opener_index: u32,
    },
    /// Input ended with this opener still open.
    UnclosedOpening {
        character: char,
        line: u32,
        offset: u32,
    },
}

impl Diagnostic {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Diagnostic::Balanced)
    }

    /// The offending delimiter character, if any.
    pub fn character(&self) -> Option<char> {
        match *self {
            Diagnostic::Balanced => None,
            Diagnostic::UnmatchedClosing { character, .. }
            | Diagnostic::MismatchedClosing { character, .. }
            | Diagnostic::UnclosedOpening { character, .. } => Some(character),
        }
    }

    /// 1-based line of the offending delimiter, if any.
    pub fn line(&self) -> Option<u32> {
        match *self {
            Diagnostic::Balanced => None,
            Diagnostic::UnmatchedClosing { line, .. }
            | Diagnostic::MismatchedClosing { line, .. }
            | Diagnostic::UnclosedOpening { line, .. } => Some(line),
        }
    }

    /// Byte offset of the offending delimiter, if any.
    pub fn offset(&self) -> Option<u32> {
        match *self {
            Diagnostic::Balanced => None,
            Diagnostic::UnmatchedClosing { offset, .. }
            | Diagnostic::MismatchedClosing { offset, .. }
            | Diagnostic::UnclosedOpening { offset, .. } => Some(offset),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Diagnostic::Balanced => write!(f, "Balanced"),
            Diagnostic::UnmatchedClosing {
                character,
                line,
                offset,
            } => write!(
                f,
                "Unmatched closing '{character}' at line {line}, char {offset}"
            ),
            Diagnostic::MismatchedClosing {
                character,
                line,
                expected_opener,
                opener_index,
                ..
            } => write!(
                f,
                "Mismatched closing '{character}' at line {line} \
                 (opened by '{expected_opener}' at index {opener_index})"
            ),
            Diagnostic::UnclosedOpening {
                character, line, ..
            } => write!(f, "Unclosed '{character}' at line {line}"),
        }
    }
}
