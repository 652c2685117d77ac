//! Embedded error documentation for `bracer explain`.
//!
//! Each code has a markdown file in this directory explaining the problem,
//! with an example and the usual fixes. The files are embedded at compile
//! time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `XNNNN.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Balance errors (B0xxx)
    (ErrorCode::B0001, include_str!("B0001.md")),
    (ErrorCode::B0002, include_str!("B0002.md")),
    (ErrorCode::B0003, include_str!("B0003.md")),
    // Warnings (W0xxx)
    (ErrorCode::W0001, include_str!("W0001.md")),
    (ErrorCode::W0002, include_str!("W0002.md")),
];
