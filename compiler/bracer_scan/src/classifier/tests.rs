use super::*;
use pretty_assertions::assert_eq;

/// Collect `(class, source_slice)` pairs for readable assertions.
fn segments(text: &str, escape: EscapePolicy) -> Vec<(CharClass, &str)> {
    let buf = SourceBuffer::new(text);
    Classifier::new(buf.cursor(), escape)
        .map(|s| (s.class, &text[s.range()]))
        .collect()
}

fn end_state(text: &str, escape: EscapePolicy) -> ScanState {
    let buf = SourceBuffer::new(text);
    let mut classifier = Classifier::new(buf.cursor(), escape);
    while classifier.next_segment().is_some() {}
    classifier.state()
}

// === Code ===

#[test]
fn empty_source_yields_nothing() {
    assert!(segments("", EscapePolicy::Lookbehind).is_empty());
    assert_eq!(end_state("", EscapePolicy::Lookbehind).mode(), ScanMode::Code);
}

#[test]
fn plain_code_is_one_segment() {
    assert_eq!(
        segments("func() { return [1,2]; }", EscapePolicy::Lookbehind),
        vec![(CharClass::Code, "func() { return [1,2]; }")]
    );
}

#[test]
fn lone_slash_stays_code() {
    assert_eq!(
        segments("a / b </div>", EscapePolicy::Lookbehind),
        vec![(CharClass::Code, "a / b </div>")]
    );
}

#[test]
fn trailing_slash_stays_code() {
    assert_eq!(
        segments("x /", EscapePolicy::Lookbehind),
        vec![(CharClass::Code, "x /")]
    );
}

// === Strings ===

#[test]
fn double_quoted_string() {
    assert_eq!(
        segments(r#"<div className="a}b">"#, EscapePolicy::Lookbehind),
        vec![
            (CharClass::Code, "<div className="),
            (CharClass::StringLiteral, r#""a}b""#),
            (CharClass::Code, ">"),
        ]
    );
}

#[test]
fn each_quote_kind_opens_a_string() {
    assert_eq!(
        segments("f('(', \"[\", `{`)", EscapePolicy::Lookbehind),
        vec![
            (CharClass::Code, "f("),
            (CharClass::StringLiteral, "'('"),
            (CharClass::Code, ", "),
            (CharClass::StringLiteral, "\"[\""),
            (CharClass::Code, ", "),
            (CharClass::StringLiteral, "`{`"),
            (CharClass::Code, ")"),
        ]
    );
}

#[test]
fn other_quotes_inside_string_are_payload() {
    assert_eq!(
        segments(r#""it's" x"#, EscapePolicy::Lookbehind),
        vec![
            (CharClass::StringLiteral, r#""it's""#),
            (CharClass::Code, " x"),
        ]
    );
}

#[test]
fn comment_markers_inside_string_are_payload() {
    assert_eq!(
        segments(r#"u = "http://x/*"; }"#, EscapePolicy::Lookbehind),
        vec![
            (CharClass::Code, "u = "),
            (CharClass::StringLiteral, r#""http://x/*""#),
            (CharClass::Code, "; }"),
        ]
    );
}

#[test]
fn string_spans_newlines() {
    assert_eq!(
        segments("`a\n}`;", EscapePolicy::Lookbehind),
        vec![
            (CharClass::StringLiteral, "`a\n}`"),
            (CharClass::Code, ";"),
        ]
    );
}

#[test]
fn back_to_back_strings_are_separate_segments() {
    assert_eq!(
        segments(r#""a""b""#, EscapePolicy::Lookbehind),
        vec![
            (CharClass::StringLiteral, r#""a""#),
            (CharClass::StringLiteral, r#""b""#),
        ]
    );
}

#[test]
fn escaped_quote_keeps_string_open() {
    for escape in [EscapePolicy::Lookbehind, EscapePolicy::Forward] {
        assert_eq!(
            segments(r#""a\"}" ]"#, escape),
            vec![
                (CharClass::StringLiteral, r#""a\"}""#),
                (CharClass::Code, " ]"),
            ],
            "escape policy {escape:?}"
        );
    }
}

#[test]
fn unterminated_string_runs_to_eof() {
    let text = "x = \"open (";
    assert_eq!(
        segments(text, EscapePolicy::Lookbehind),
        vec![
            (CharClass::Code, "x = "),
            (CharClass::StringLiteral, "\"open ("),
        ]
    );
    let state = end_state(text, EscapePolicy::Lookbehind);
    assert_eq!(state.mode(), ScanMode::InString);
    assert_eq!(state.string_delimiter(), Some('"'));
    assert_eq!(state.opened_at(), Some(4));
}

// === Escape Policies ===

#[test]
fn lookbehind_misreads_escaped_backslash() {
    // `"a\\"` is a complete string, but the quote follows a backslash.
    let text = r#""a\\" }"#;
    assert_eq!(
        segments(text, EscapePolicy::Lookbehind),
        vec![(CharClass::StringLiteral, text)]
    );
    assert_eq!(
        end_state(text, EscapePolicy::Lookbehind).mode(),
        ScanMode::InString
    );
}

#[test]
fn forward_closes_after_escaped_backslash() {
    assert_eq!(
        segments(r#""a\\" }"#, EscapePolicy::Forward),
        vec![
            (CharClass::StringLiteral, r#""a\\""#),
            (CharClass::Code, " }"),
        ]
    );
}

#[test]
fn forward_keeps_escaped_quote_after_escaped_backslash() {
    let text = r#""a\\\"" }"#;
    assert_eq!(
        segments(text, EscapePolicy::Forward),
        vec![
            (CharClass::StringLiteral, r#""a\\\"""#),
            (CharClass::Code, " }"),
        ]
    );
}

#[test]
fn forward_trailing_backslash_at_eof() {
    let text = "'abc\\";
    assert_eq!(
        segments(text, EscapePolicy::Forward),
        vec![(CharClass::StringLiteral, text)]
    );
    assert_eq!(end_state(text, EscapePolicy::Forward).mode(), ScanMode::InString);
}

// === Line Comments ===

#[test]
fn line_comment_ends_before_newline() {
    assert_eq!(
        segments("{ // }\n}", EscapePolicy::Lookbehind),
        vec![
            (CharClass::Code, "{ "),
            (CharClass::LineComment, "// }"),
            (CharClass::Code, "\n}"),
        ]
    );
}

#[test]
fn line_comment_at_eof() {
    let text = "x // (";
    assert_eq!(
        segments(text, EscapePolicy::Lookbehind),
        vec![(CharClass::Code, "x "), (CharClass::LineComment, "// (")]
    );
    assert_eq!(
        end_state(text, EscapePolicy::Lookbehind).mode(),
        ScanMode::InLineComment
    );
}

#[test]
fn quotes_inside_line_comment_are_payload() {
    assert_eq!(
        segments("// don't\n(", EscapePolicy::Lookbehind),
        vec![
            (CharClass::LineComment, "// don't"),
            (CharClass::Code, "\n("),
        ]
    );
}

// === Block Comments ===

#[test]
fn block_comment_is_one_segment() {
    assert_eq!(
        segments("a /* } */ b", EscapePolicy::Lookbehind),
        vec![
            (CharClass::Code, "a "),
            (CharClass::BlockComment, "/* } */"),
            (CharClass::Code, " b"),
        ]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        segments("/*\n(\n*/)", EscapePolicy::Lookbehind),
        vec![
            (CharClass::BlockComment, "/*\n(\n*/"),
            (CharClass::Code, ")"),
        ]
    );
}

#[test]
fn slash_star_slash_does_not_close() {
    let text = "/*/ (";
    assert_eq!(
        segments(text, EscapePolicy::Lookbehind),
        vec![(CharClass::BlockComment, text)]
    );
    let state = end_state(text, EscapePolicy::Lookbehind);
    assert_eq!(state.mode(), ScanMode::InBlockComment);
    assert_eq!(state.opened_at(), Some(0));
}

#[test]
fn jsx_comment_inside_braces() {
    assert_eq!(
        segments("{/* <b> */}", EscapePolicy::Lookbehind),
        vec![
            (CharClass::Code, "{"),
            (CharClass::BlockComment, "/* <b> */"),
            (CharClass::Code, "}"),
        ]
    );
}

// === Masking ===

#[test]
fn mask_replaces_payload_with_spaces() {
    assert_eq!(
        mask(r#"<div className="a}b">{x}</div>"#),
        r#"<div className=     >{x}</div>"#
    );
}

#[test]
fn mask_keeps_newlines_in_every_mode() {
    let text = "a('x\ny') /* (\n */ // [\r\n]";
    let masked = mask(text);
    assert_eq!(masked, "a(  \n  )     \n        \r\n]");
    assert_eq!(masked.len(), text.len());
}

#[test]
fn mask_multibyte_payload_keeps_byte_length() {
    let text = "f(\"caf\u{e9} \u{1F600}\")";
    let masked = mask(text);
    assert_eq!(masked.len(), text.len());
    assert!(masked.starts_with("f("));
    assert!(masked.ends_with(')'));
    assert!(masked[2..masked.len() - 1].bytes().all(|b| b == b' '));
}

#[test]
fn mask_keeps_multibyte_code() {
    let text = "<p>\u{e9}t\u{e9}</p>";
    assert_eq!(mask(text), text);
}

#[test]
fn mask_with_forward_policy() {
    assert_eq!(mask_with(r#""\\" ]"#, EscapePolicy::Forward), "     ]");
    assert_eq!(mask_with(r#""\\" ]"#, EscapePolicy::Lookbehind), "      ");
}

// === Classify ===

#[test]
fn classify_is_parallel_to_bytes() {
    let text = "a'b'//c\nd";
    let classes = classify(text, EscapePolicy::Lookbehind);
    assert_eq!(classes.len(), text.len());
    assert_eq!(
        classes,
        vec![
            CharClass::Code,
            CharClass::StringLiteral,
            CharClass::StringLiteral,
            CharClass::StringLiteral,
            CharClass::LineComment,
            CharClass::LineComment,
            CharClass::LineComment,
            CharClass::Code,
            CharClass::Code,
        ]
    );
}

#[test]
fn is_masked_only_for_non_code() {
    assert!(!CharClass::Code.is_masked());
    assert!(CharClass::StringLiteral.is_masked());
    assert!(CharClass::LineComment.is_masked());
    assert!(CharClass::BlockComment.is_masked());
}
