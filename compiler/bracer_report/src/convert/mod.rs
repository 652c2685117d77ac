//! Turn a [`ScanOutcome`] into renderable [`Report`]s.

use bracer_scan::{Diagnostic, LineIndex, ScanMode, ScanOutcome};

use crate::{ErrorCode, Location, Report};

/// Build the reports for one scanned source.
///
/// A balanced scan that ended in code yields nothing. A violation yields
/// one error, and ending inside a string or block comment adds a warning
/// pointing at where that construct was opened.
pub fn reports_for(outcome: &ScanOutcome, source: &str) -> Vec<Report> {
    let index = LineIndex::build(source);
    let locate = |offset| Location::resolve(&index, source, offset);
    let mut reports = Vec::new();

    match outcome.diagnostic {
        Diagnostic::Balanced => {}
        Diagnostic::UnmatchedClosing {
            character, offset, ..
        } => {
            reports.push(
                Report::error(ErrorCode::B0001)
                    .with_message(format!("unmatched closing delimiter `{character}`"))
                    .with_label(locate(offset), "nothing is open here")
                    .with_suggestion(format!(
                        "remove this `{character}` or add the opener it closes"
                    )),
            );
        }
        Diagnostic::MismatchedClosing {
            character,
            offset,
            expected_opener,
            opener_index,
            ..
        } => {
            let expected = closer_for(expected_opener);
            reports.push(
                Report::error(ErrorCode::B0002)
                    .with_message(format!("mismatched closing delimiter `{character}`"))
                    .with_label(
                        locate(offset),
                        format!("expected `{expected}` to close `{expected_opener}`"),
                    )
                    .with_secondary_label(
                        locate(opener_index),
                        format!("`{expected_opener}` opened here"),
                    )
                    .with_suggestion(format!(
                        "close `{expected_opener}` with `{expected}` before this `{character}`"
                    )),
            );
        }
        Diagnostic::UnclosedOpening {
            character, offset, ..
        } => {
            let mut report = Report::error(ErrorCode::B0003)
                .with_message(format!("unclosed delimiter `{character}`"))
                .with_label(locate(offset), "opened here, never closed")
                .with_suggestion(format!("add a matching `{}`", closer_for(character)));
            if outcome.ended_unterminated() {
                report = report.with_note(
                    "the file also ends inside a string or comment; \
                     closers after it were not checked",
                );
            }
            reports.push(report);
        }
    }

    if let Some(opened_at) = outcome.end_state.opened_at() {
        match outcome.end_mode() {
            ScanMode::InString => {
                let quote = outcome.end_state.string_delimiter().unwrap_or('"');
                reports.push(
                    Report::warning(ErrorCode::W0001)
                        .with_message("file ends inside a string literal")
                        .with_label(locate(opened_at), format!("`{quote}` string starts here"))
                        .with_note("delimiters after this quote were treated as text"),
                );
            }
            ScanMode::InBlockComment => {
                reports.push(
                    Report::warning(ErrorCode::W0002)
                        .with_message("file ends inside a block comment")
                        .with_label(locate(opened_at), "comment starts here")
                        .with_suggestion("close the comment with `*/`"),
                );
            }
            ScanMode::Code | ScanMode::InLineComment => {}
        }
    }

    reports
}

/// The closer paired with `opener`, or `opener` itself if it isn't one.
fn closer_for(opener: char) -> char {
    u8::try_from(opener)
        .ok()
        .and_then(bracer_scan::Delimiter::from_open)
        .map_or(opener, bracer_scan::Delimiter::close)
}
