//! Error codes for all delimiter diagnostics.
//!
//! Each code is a unique identifier (e.g. `B0002`) used for `bracer explain`
//! lookups and in JSON output.

use std::fmt;

/// Error codes for all delimiter diagnostics.
///
/// Format: one letter plus four digits:
/// - B0xxx: balance errors (the scan verdict)
/// - W0xxx: warnings about where the classifier ended up
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Closing delimiter with nothing open
    B0001,
    /// Closing delimiter of the wrong kind
    B0002,
    /// Opening delimiter never closed
    B0003,
    /// Input ends inside a string literal
    W0001,
    /// Input ends inside a block comment
    W0002,
}

impl ErrorCode {
    /// Every code, in documentation order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::B0001,
        ErrorCode::B0002,
        ErrorCode::B0003,
        ErrorCode::W0001,
        ErrorCode::W0002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::B0001 => "B0001",
            ErrorCode::B0002 => "B0002",
            ErrorCode::B0003 => "B0003",
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
        }
    }

    /// One-line summary, listed by `bracer explain` next to each code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::B0001 => "unmatched closing delimiter",
            ErrorCode::B0002 => "mismatched closing delimiter",
            ErrorCode::B0003 => "unclosed opening delimiter",
            ErrorCode::W0001 => "file ends inside a string literal",
            ErrorCode::W0002 => "file ends inside a block comment",
        }
    }

    /// Check if this code is reported as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W0001 | ErrorCode::W0002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
