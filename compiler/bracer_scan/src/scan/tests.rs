use super::*;
use pretty_assertions::assert_eq;

// === Scenarios ===

#[test]
fn balanced_function_body() {
    assert_eq!(
        scan_delimiter_balance("func() { return [1,2]; }"),
        Diagnostic::Balanced
    );
}

#[test]
fn bracket_closed_by_paren() {
    assert_eq!(
        scan_delimiter_balance("func() { return [1,2); }"),
        Diagnostic::MismatchedClosing {
            character: ')',
            line: 1,
            offset: 20,
            expected_opener: '[',
            opener_index: 16,
        }
    );
}

#[test]
fn brace_inside_jsx_attribute_is_masked() {
    assert_eq!(
        scan_delimiter_balance(r#"<div className="a}b">{x}</div>"#),
        Diagnostic::Balanced
    );
}

#[test]
fn brace_inside_line_comment_is_masked() {
    assert_eq!(scan_delimiter_balance("{ // }\n}"), Diagnostic::Balanced);
}

#[test]
fn empty_text_is_balanced() {
    assert_eq!(scan_delimiter_balance(""), Diagnostic::Balanced);
}

#[test]
fn unmatched_closer_on_later_line() {
    let text = "const a = [1, 2];\nconst b = 3);\n";
    assert_eq!(
        scan_delimiter_balance(text),
        Diagnostic::UnmatchedClosing {
            character: ')',
            line: 2,
            offset: 29,
        }
    );
}

#[test]
fn unclosed_reports_outermost_opener_line() {
    let text = "function f() {\n  if (x) {\n    g();\n";
    assert_eq!(
        scan_delimiter_balance(text),
        Diagnostic::UnclosedOpening {
            character: '{',
            line: 1,
            offset: 13,
        }
    );
}

#[test]
fn delimiters_in_every_masked_construct() {
    let text = "f(\"(\", '[', `{`) /* ) ] } */ // >\n";
    assert_eq!(scan_delimiter_balance(text), Diagnostic::Balanced);
}

#[test]
fn jsx_comment_inside_braces() {
    let text = "<div>{/* } */}</div>";
    assert_eq!(scan_delimiter_balance(text), Diagnostic::Balanced);
}

// === Options ===

#[test]
fn no_angle_skips_arrow_functions() {
    let text = "const f = (x) => { return x; };";
    assert_eq!(
        scan_delimiter_balance(text),
        Diagnostic::UnmatchedClosing {
            character: '>',
            line: 1,
            offset: 15,
        }
    );
    let options = ScanOptions::default().with_delimiters(DelimiterSet::NoAngle);
    assert_eq!(scan(text, &options).diagnostic, Diagnostic::Balanced);
}

#[test]
fn innermost_option() {
    let options = ScanOptions::default().with_unclosed(UnclosedPolicy::Innermost);
    assert_eq!(
        scan("{\n  (", &options).diagnostic,
        Diagnostic::UnclosedOpening {
            character: '(',
            line: 2,
            offset: 4,
        }
    );
}

#[test]
fn escape_policy_changes_verdict() {
    // `"a\\" (`: an escaped backslash, then the real closing quote.
    let text = "\"a\\\\\" (";

    let lookbehind = scan(text, &ScanOptions::default());
    assert_eq!(lookbehind.diagnostic, Diagnostic::Balanced);
    assert_eq!(lookbehind.end_mode(), ScanMode::InString);
    assert!(lookbehind.ended_unterminated());

    let forward = scan(
        text,
        &ScanOptions::default().with_escape(EscapePolicy::Forward),
    );
    assert_eq!(
        forward.diagnostic,
        Diagnostic::UnclosedOpening {
            character: '(',
            line: 1,
            offset: 6,
        }
    );
    assert_eq!(forward.end_mode(), ScanMode::Code);
}

// === End State ===

#[test]
fn end_state_in_code() {
    let outcome = scan("a()", &ScanOptions::default());
    assert_eq!(outcome.end_mode(), ScanMode::Code);
    assert_eq!(outcome.end_state.opened_at(), None);
    assert!(!outcome.ended_unterminated());
}

#[test]
fn unterminated_string_hides_closers() {
    let outcome = scan("f(\"oops);\n", &ScanOptions::default());
    assert_eq!(
        outcome.diagnostic,
        Diagnostic::UnclosedOpening {
            character: '(',
            line: 1,
            offset: 1,
        }
    );
    assert_eq!(outcome.end_mode(), ScanMode::InString);
    assert_eq!(outcome.end_state.string_delimiter(), Some('"'));
    assert_eq!(outcome.end_state.opened_at(), Some(2));
}

#[test]
fn trailing_line_comment_is_not_unterminated() {
    let outcome = scan("x(); // done", &ScanOptions::default());
    assert_eq!(outcome.end_mode(), ScanMode::InLineComment);
    assert!(!outcome.ended_unterminated());
}

#[test]
fn end_state_after_early_violation() {
    let outcome = scan(") /* never closed", &ScanOptions::default());
    assert_eq!(
        outcome.diagnostic,
        Diagnostic::UnmatchedClosing {
            character: ')',
            line: 1,
            offset: 0,
        }
    );
    assert_eq!(outcome.end_mode(), ScanMode::InBlockComment);
    assert_eq!(outcome.end_state.opened_at(), Some(2));
}

#[test]
fn multibyte_text_keeps_byte_offsets() {
    let text = "let s = \"\u{1F600}\"; f(\u{e9}]";
    assert_eq!(
        scan_delimiter_balance(text),
        Diagnostic::MismatchedClosing {
            character: ']',
            line: 1,
            offset: 20,
            expected_opener: '(',
            opener_index: 17,
        }
    );
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scan {
    use super::super::{scan, scan_delimiter_balance, ScanOptions};
    use crate::{classify, line_at, mask, CharClass, Delimiter, Diagnostic, EscapePolicy};
    use proptest::prelude::*;

    /// Snippets that carry delimiters only inside strings and comments.
    const NOISE: &[&str] = &[
        "\"}\"",
        "'(('",
        "`]>`",
        "// }\n",
        "/* ) ] */",
        "\"a // b\"",
        "'/* x'",
        "/* \"{ */",
        "`multi\n) line`",
    ];

    /// Build a balanced text from a stream of ops.
    ///
    /// Ops `0..4` open a delimiter, `4..6` close the innermost one (if any),
    /// the rest emit filler. With `noise`, ops `10..` also emit a [`NOISE`]
    /// snippet. Whatever is still open at the end is closed in order.
    fn build(ops: &[u8], noise: bool) -> String {
        let mut out = String::new();
        let mut open: Vec<Delimiter> = Vec::new();
        for (i, &op) in ops.iter().enumerate() {
            match op {
                0..=3 => {
                    let delimiter = Delimiter::ALL[usize::from(op)];
                    out.push(delimiter.open());
                    open.push(delimiter);
                }
                4 | 5 => {
                    if let Some(delimiter) = open.pop() {
                        out.push(delimiter.close());
                    }
                }
                6 => out.push('x'),
                7 => out.push('\n'),
                8 => out.push(' '),
                9 => out.push(';'),
                _ if noise => out.push_str(NOISE[i % NOISE.len()]),
                _ => out.push('y'),
            }
        }
        while let Some(delimiter) = open.pop() {
            out.push(delimiter.close());
        }
        out
    }

    fn newlines(text: &str) -> u32 {
        u32::try_from(text.bytes().filter(|&b| b == b'\n').count()).unwrap_or(u32::MAX)
    }

    proptest! {
        #[test]
        fn balanced_sequences_are_balanced(ops in proptest::collection::vec(0u8..10, 0..300)) {
            let text = build(&ops, false);
            prop_assert_eq!(scan_delimiter_balance(&text), Diagnostic::Balanced);
        }

        #[test]
        fn trailing_closer_is_unmatched(ops in proptest::collection::vec(0u8..10, 0..200)) {
            let mut text = build(&ops, false);
            let offset = u32::try_from(text.len()).unwrap_or(u32::MAX);
            let line = newlines(&text) + 1;
            text.push(')');
            prop_assert_eq!(
                scan_delimiter_balance(&text),
                Diagnostic::UnmatchedClosing { character: ')', line, offset }
            );
        }

        #[test]
        fn trailing_opener_is_unclosed(ops in proptest::collection::vec(0u8..10, 0..200)) {
            let mut text = build(&ops, false);
            let offset = u32::try_from(text.len()).unwrap_or(u32::MAX);
            let line = newlines(&text) + 1;
            text.push('(');
            prop_assert_eq!(
                scan_delimiter_balance(&text),
                Diagnostic::UnclosedOpening { character: '(', line, offset }
            );
        }

        #[test]
        fn masked_delimiters_do_not_count(ops in proptest::collection::vec(0u8..14, 0..300)) {
            let text = build(&ops, true);
            prop_assert_eq!(scan_delimiter_balance(&text), Diagnostic::Balanced);
        }

        #[test]
        fn mask_preserves_length_and_newlines(text in "[a-z(){}\\[\\]<>\"'`/*\\\\ \n\r\u{e9}]{0,200}") {
            let masked = mask(&text);
            prop_assert_eq!(masked.len(), text.len());
            for (i, (a, b)) in text.bytes().zip(masked.bytes()).enumerate() {
                prop_assert_eq!(a == b'\n', b == b'\n', "newline mismatch at {}", i);
            }
        }

        #[test]
        fn report_lines_agree_on_masked_text(text in "[a-z(){}\\[\\]<>\"'`/*\\\\ \n]{0,200}") {
            let masked = mask(&text);
            if let Some(offset) = scan_delimiter_balance(&text).offset() {
                prop_assert_eq!(line_at(&text, offset), line_at(&masked, offset));
            }
        }

        #[test]
        fn scanning_masked_text_gives_same_verdict(text in "[a-z(){}\\[\\]<>\"'`/*\\\\ \n]{0,200}") {
            let masked = mask(&text);
            prop_assert_eq!(scan_delimiter_balance(&masked), scan_delimiter_balance(&text));
        }

        #[test]
        fn reported_offset_points_at_code_delimiter(text in "[a-z(){}\\[\\]<>\"'`/* \n]{0,200}") {
            let diag = scan_delimiter_balance(&text);
            if let (Some(offset), Some(character)) = (diag.offset(), diag.character()) {
                let offset = offset as usize;
                prop_assert_eq!(text.as_bytes()[offset], character as u8);
                prop_assert_eq!(classify(&text, EscapePolicy::default())[offset], CharClass::Code);
            }
        }

        #[test]
        fn scan_is_deterministic(text in "[a-z(){}\\[\\]<>\"'`/*\\\\ \n]{0,200}") {
            let options = ScanOptions::default().with_escape(EscapePolicy::Forward);
            prop_assert_eq!(scan(&text, &options), scan(&text, &options));
        }
    }
}
