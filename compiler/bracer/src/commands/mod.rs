//! Command handlers for the `bracer` CLI.
//!
//! Each command writes to the streams it is given and returns a [`Status`];
//! only `main` turns that into a process exit code.

mod check;
mod explain;
mod mask;

pub use check::{check_files, check_source, run_check, Checked};
pub use explain::explain_error;
pub use mask::run_mask;

/// How a command finished, ordered from best to worst.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    /// Every file scanned was balanced.
    Balanced,
    /// At least one file has a delimiter error.
    Violation,
    /// Usage error or a file could not be read.
    Failure,
}

impl Status {
    /// Process exit code.
    pub fn code(self) -> i32 {
        match self {
            Status::Balanced => 0,
            Status::Violation => 1,
            Status::Failure => 2,
        }
    }

    /// The worse of two statuses.
    #[must_use]
    pub fn worst(self, other: Status) -> Status {
        self.max(other)
    }
}
