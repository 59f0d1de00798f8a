use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_chain() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected expression, found `)`")
        .with_span(Span::new(4, 5))
        .with_note("an expression was expected here");

    assert!(diag.is_error());
    assert_eq!(diag.span, Some(Span::new(4, 5)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(
        diag.to_string(),
        "error[E1002]: expected expression, found `)`"
    );
}

#[test]
fn test_warning_severity() {
    let diag = Diagnostic::warning(ErrorCode::E6001);
    assert_eq!(diag.severity, Severity::Warning);
    assert!(!diag.is_error());
}

#[test]
fn test_resolve_position_prefers_explicit_position() {
    let map = SourceMap::new("a\nb");
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_span(Span::new(2, 3))
        .with_position(Position::new(9, 9));
    assert_eq!(diag.resolve_position(Some(&map)), Some(Position::new(9, 9)));
}

#[test]
fn test_resolve_position_from_span() {
    let map = SourceMap::new("a\nbc");
    let diag = Diagnostic::error(ErrorCode::E1001).with_span(Span::new(3, 4));
    assert_eq!(diag.resolve_position(Some(&map)), Some(Position::new(2, 2)));
    assert_eq!(diag.resolve_position(None), None);
}
