//! Reporting layer for delimiter scans.
//!
//! Turns a [`bracer_scan::ScanOutcome`] into [`Report`]s with stable error
//! codes, and renders them for people ([`TerminalEmitter`]) or tools
//! ([`JsonEmitter`]). Every code has embedded long-form docs for
//! `bracer explain`.

mod convert;
pub mod emitter;
mod error_code;
pub mod errors;
mod report;

pub use convert::reports_for;
pub use emitter::{ColorMode, JsonEmitter, ReportEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use report::{Label, Location, Report, Severity};
