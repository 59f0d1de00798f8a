use super::*;

#[test]
fn test_single_line_positions() {
    let map = SourceMap::new("hello world");
    assert_eq!(map.line_count(), 1);
    assert_eq!(map.offset_to_position(0), Position::new(1, 1));
    assert_eq!(map.offset_to_position(6), Position::new(1, 7));
}

#[test]
fn test_multi_line_positions() {
    let source = "abc\ndefgh\nij";
    let map = SourceMap::new(source);
    assert_eq!(map.offset_to_position(0), Position::new(1, 1)); // 'a'
    assert_eq!(map.offset_to_position(2), Position::new(1, 3)); // 'c'
    assert_eq!(map.offset_to_position(3), Position::new(1, 4)); // '\n'
    assert_eq!(map.offset_to_position(4), Position::new(2, 1)); // 'd'
    assert_eq!(map.offset_to_position(7), Position::new(2, 4)); // 'g'
    assert_eq!(map.offset_to_position(10), Position::new(3, 1)); // 'i'
}

#[test]
fn test_position_of_span_uses_start() {
    let map = SourceMap::new("let x = 1\nprint(x / 0)\n");
    assert_eq!(map.position(Span::new(18, 19)), Position::new(2, 9));
}

#[test]
fn test_unicode_columns_count_characters() {
    let map = SourceMap::new("αβγ\nδε");
    assert_eq!(map.offset_to_position(2), Position::new(1, 2)); // 'β'
    assert_eq!(map.offset_to_position(4), Position::new(1, 3)); // 'γ'
    assert_eq!(map.offset_to_position(7), Position::new(2, 1)); // 'δ'
}

#[test]
fn test_empty_source() {
    let map = SourceMap::new("");
    assert_eq!(map.line_count(), 1);
    assert_eq!(map.offset_to_position(0), Position::START);
}

#[test]
fn test_offset_past_end_clamps() {
    let map = SourceMap::new("ab");
    assert_eq!(map.offset_to_position(40), Position::new(1, 3));
}

#[test]
fn test_trailing_newline_starts_new_line() {
    let map = SourceMap::new("line1\nline2\n");
    assert_eq!(map.line_count(), 3);
    assert_eq!(map.line_of(12), 3);
}

#[test]
fn test_line_text() {
    let map = SourceMap::new("first\r\nsecond\nthird");
    assert_eq!(map.line_text(1), Some("first"));
    assert_eq!(map.line_text(2), Some("second"));
    assert_eq!(map.line_text(3), Some("third"));
    assert_eq!(map.line_text(0), None);
    assert_eq!(map.line_text(4), None);
}
