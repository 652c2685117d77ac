//! Delimiter balance scanner for JS/TS/JSX-like source text.
//!
//! Standalone core with no `bracer_*` dependencies. The scan runs in two
//! passes over a sentinel-terminated [`SourceBuffer`]:
//!
//! 1. The [`Classifier`] splits the text into runs of code, string literal,
//!    line comment and block comment.
//! 2. The [`Matcher`] walks the code runs with a [`DelimiterStack`] and stops
//!    at the first closer that does not fit.
//!
//! The result is a single [`Diagnostic`]. Offsets are byte offsets into the
//! original text and line numbers are 1-based; masking never moves a newline,
//! so both stay valid for the masked text from [`mask`] as well.
//!
//! ```
//! use bracer_scan::{scan_delimiter_balance, Diagnostic};
//!
//! let diag = scan_delimiter_balance("{ // }\n}");
//! assert_eq!(diag, Diagnostic::Balanced);
//! ```

mod classifier;
mod cursor;
mod delimiter;
mod diagnostic;
mod line_index;
mod matcher;
mod scan;
mod source_buffer;

pub use classifier::{
    classify, mask, mask_with, CharClass, Classifier, EscapePolicy, ScanMode, ScanState, Segment,
};
pub use cursor::Cursor;
pub use delimiter::{Delimiter, DelimiterSet};
pub use diagnostic::Diagnostic;
pub use line_index::{line_at, LineIndex};
pub use matcher::{DelimiterFrame, DelimiterStack, Matcher, UnclosedPolicy};
pub use scan::{scan, scan_delimiter_balance, ScanOptions, ScanOutcome};
pub use source_buffer::SourceBuffer;
