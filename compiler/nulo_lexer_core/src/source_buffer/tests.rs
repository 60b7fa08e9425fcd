use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.as_str(), "");
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("func");
    assert_eq!(buf.len(), 4);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"func");
    assert_eq!(buf.as_sentinel_bytes()[4], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "a \u{1F600} b"; // emoji (4 bytes)
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_str(), source);
}

#[test]
fn from_str_matches_new() {
    let buf = SourceBuffer::from("x = 1");
    assert_eq!(buf.as_str(), "x = 1");
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source: String = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.as_sentinel_bytes().len(),
            len
        );
        assert!(buf.as_sentinel_bytes().len() > len, "no room for sentinel");
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.as_sentinel_bytes()[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === Line Count ===

#[test]
fn line_count_without_newlines() {
    assert_eq!(SourceBuffer::new("").line_count(), 1);
    assert_eq!(SourceBuffer::new("func").line_count(), 1);
}

#[test]
fn line_count_counts_line_feeds_only() {
    assert_eq!(SourceBuffer::new("a\nb\n").line_count(), 3);
    // Carriage returns do not start a new line.
    assert_eq!(SourceBuffer::new("a\r\nb\rc").line_count(), 2);
}

// === Interior Null Detection ===

#[test]
fn detects_interior_null() {
    let buf = SourceBuffer::new("ab\0cd");
    assert_eq!(buf.interior_nulls(), vec![2]);
}

#[test]
fn detects_multiple_interior_nulls() {
    let buf = SourceBuffer::new("\0ab\0c\0");
    assert_eq!(buf.interior_nulls(), vec![0, 3, 5]);
}

#[test]
fn no_false_positive_nulls() {
    let buf = SourceBuffer::new("func add(a, b) {\n  return a;\n}");
    assert!(buf.interior_nulls().is_empty());
}

// === Large Source ===

#[test]
fn large_source() {
    let source: String = "x".repeat(100_000);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.len(), 100_000);
    assert_eq!(buf.as_sentinel_bytes()[100_000], 0);
    assert_eq!(buf.as_sentinel_bytes().len() % CACHE_LINE, 0);
}

// === Cursor and Scanner Creation ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn scanner_starts_on_line_one() {
    let buf = SourceBuffer::new("\n\nx");
    let scanner = buf.scanner();
    assert_eq!(scanner.line(), 1);
    assert_eq!(scanner.current(), 0);
    assert_eq!(scanner.token_start(), 0);
}
