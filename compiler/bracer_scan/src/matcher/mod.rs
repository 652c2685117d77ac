//! Stack-based delimiter matcher.
//!
//! The second scanning pass. Consumes [`Segment`]s from the classifier,
//! looks only at [`CharClass::Code`](crate::CharClass::Code) bytes and keeps
//! a stack of open delimiters. The first closer that has nothing to close,
//! or closes the wrong kind, ends the scan (first-failure-wins). If input
//! runs out with openers left, one of them is reported as unclosed.

use smallvec::SmallVec;

use crate::classifier::Segment;
use crate::delimiter::{Delimiter, DelimiterSet};
use crate::line_index::line_at;
use crate::Diagnostic;

/// One currently open delimiter and where it was opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DelimiterFrame {
    pub delimiter: Delimiter,
    /// Byte offset of the opening character.
    pub offset: u32,
}

impl DelimiterFrame {
    /// The opening character of this frame.
    pub fn character(&self) -> char {
        self.delimiter.open()
    }
}

/// Open delimiters, bottom (outermost) to top (innermost).
///
/// Only ever pushed and popped at the top, so read bottom-to-top it is
/// exactly the unclosed openers in the order they were opened.
#[derive(Clone, Debug, Default)]
pub struct DelimiterStack {
    frames: SmallVec<[DelimiterFrame; 32]>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: DelimiterFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<DelimiterFrame> {
        self.frames.pop()
    }

    /// The innermost open delimiter.
    pub fn top(&self) -> Option<&DelimiterFrame> {
        self.frames.last()
    }

    /// The outermost open delimiter.
    pub fn bottom(&self) -> Option<&DelimiterFrame> {
        self.frames.first()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &DelimiterFrame> {
        self.frames.iter()
    }
}

/// Which open delimiter to report when input ends with several open.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnclosedPolicy {
    /// The earliest-opened frame: the widest structural gap.
    #[default]
    Outermost,
    /// The most recently opened frame.
    Innermost,
}

/// Delimiter matcher for one scan.
///
/// Holds the original source only to turn offsets into line numbers when a
/// violation is found.
pub struct Matcher<'a> {
    source: &'a str,
    delimiters: DelimiterSet,
    stack: DelimiterStack,
}

impl<'a> Matcher<'a> {
    pub fn new(source: &'a str, delimiters: DelimiterSet) -> Self {
        Self {
            source,
            delimiters,
            stack: DelimiterStack::new(),
        }
    }

    /// Currently open delimiters.
    pub fn stack(&self) -> &DelimiterStack {
        &self.stack
    }

    /// Process every code byte of `segment`.
    ///
    /// Returns the violation that ends the scan, if one occurs. Masked
    /// segments are skipped entirely.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "segment lengths fit in u32"
    )]
    pub fn feed(&mut self, segment: Segment) -> Option<Diagnostic> {
        if segment.class.is_masked() {
            return None;
        }
        let bytes = self.source.as_bytes().get(segment.range())?;
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(diag) = self.step(segment.start + i as u32, byte) {
                return Some(diag);
            }
        }
        None
    }

    /// Process one code byte at `offset`.
    pub fn step(&mut self, offset: u32, byte: u8) -> Option<Diagnostic> {
        if let Some(delimiter) = Delimiter::from_open(byte) {
            if self.delimiters.contains(delimiter) {
                self.stack.push(DelimiterFrame { delimiter, offset });
            }
            return None;
        }

        let delimiter = Delimiter::from_close(byte)?;
        if !self.delimiters.contains(delimiter) {
            return None;
        }
        let Some(opener) = self.stack.pop() else {
            return Some(Diagnostic::UnmatchedClosing {
                character: delimiter.close(),
                line: line_at(self.source, offset),
                offset,
            });
        };
        if opener.delimiter == delimiter {
            return None;
        }
        Some(Diagnostic::MismatchedClosing {
            character: delimiter.close(),
            line: line_at(self.source, offset),
            offset,
            expected_opener: opener.character(),
            opener_index: opener.offset,
        })
    }

    /// Verdict at end of input, after every segment was fed without a
    /// violation.
    pub fn finish(&self, policy: UnclosedPolicy) -> Diagnostic {
        let frame = match policy {
            UnclosedPolicy::Outermost => self.stack.bottom(),
            UnclosedPolicy::Innermost => self.stack.top(),
        };
        match frame {
            None => Diagnostic::Balanced,
            Some(frame) => Diagnostic::UnclosedOpening {
                character: frame.character(),
                line: line_at(self.source, frame.offset),
                offset: frame.offset,
            },
        }
    }
}
