//! The `explain` command: display documentation for an error code.

use std::io::Write;

use bracer_report::{ErrorCode, ErrorDocs};

use super::Status;

/// Print the long-form docs for `code_str` to `out`.
pub fn explain_error<O: Write, E: Write>(code_str: &str, out: &mut O, err: &mut E) -> Status {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(err, "Unknown error code: {code_str}");
        let _ = writeln!(err);
        let _ = writeln!(
            err,
            "Codes have the format BXXXX (errors) or WXXXX (warnings) where X is a digit."
        );
        let _ = writeln!(err, "Known codes:");
        for known in ErrorCode::ALL {
            let _ = writeln!(err, "  {known}  {}", known.description());
        }
        return Status::Failure;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = writeln!(out, "{doc}");
        Status::Balanced
    } else {
        let _ = writeln!(err, "No documentation available for {code}");
        Status::Failure
    }
}
