//! The `mask` command: print a file with strings and comments blanked out.

use std::io::Write;

use bracer_scan::mask_with;

use crate::input::read_source;
use crate::options::MaskOptions;

use super::Status;

/// Write the masked text of `options.path` to `out`.
///
/// The output has the same length and line breaks as the file, so it can
/// be diffed against the original line by line.
pub fn run_mask<O: Write, E: Write>(options: &MaskOptions, out: &mut O, err: &mut E) -> Status {
    let source = match read_source(&options.path) {
        Ok(source) => source,
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            return Status::Failure;
        }
    };
    let masked = mask_with(&source.text, options.escape);
    tracing::debug!(path = %source.display_path(), bytes = masked.len(), "masked");
    let _ = out.write_all(masked.as_bytes());
    let _ = out.flush();
    Status::Balanced
}
