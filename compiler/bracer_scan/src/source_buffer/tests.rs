use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("{ x }");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"{ x }");
    assert_eq!(buf.as_sentinel_bytes()[5], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "<p>caf\u{e9} \u{1F600}</p>";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source: String = "(".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.as_sentinel_bytes().len(),
            len
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("a/*");
    for &b in &buf.as_sentinel_bytes()[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

#[test]
fn full_cache_line_source_still_has_sentinel() {
    // 64 bytes of source needs a second cache line for the sentinel
    let source = "x".repeat(64);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
    assert_eq!(buf.as_sentinel_bytes()[64], 0);
}

// === Cursor ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("[]");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'[');
    assert_eq!(cursor.source_len(), 2);
}
