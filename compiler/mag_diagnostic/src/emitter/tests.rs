use mag_ir::{Position, SourceMap, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

#[test]
fn test_escape_json() {
    assert_eq!(escape_json("hello"), "hello");
    assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
    assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
    assert_eq!(escape_json("path\\file"), "path\\\\file");
    assert_eq!(escape_json("\u{1}"), "\\u0001");
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_terminal_renders_header_location_and_snippet() {
    let source = SourceMap::new("let x = 1\nlet = 2\n");
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(source)
        .with_file_path("main.mag");

    emitter.emit(
        &Diagnostic::error(ErrorCode::E1001)
            .with_message("expected identifier, found `=`")
            .with_span(Span::new(14, 15)),
    );

    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        out,
        "error[E1001]: expected identifier, found `=`\n  \
         --> main.mag:2:5\n  \
         |\n\
         2 | let = 2\n  \
         |     ^\n"
    );
}

#[test]
fn test_terminal_without_location() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(
        &Diagnostic::error(ErrorCode::E6001)
            .with_message("boom")
            .with_note("while running"),
    );

    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(out, "error[E6001]: boom\n  = note: while running\n");
}

#[test]
fn test_terminal_position_only() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(
        &Diagnostic::error(ErrorCode::E6001)
            .with_message("division by zero")
            .with_position(Position::new(3, 10)),
    );

    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(out, "error[E6001]: division by zero\n  --> 3:10\n");
}

#[test]
fn test_json_array_shape() {
    let mut emitter = JsonEmitter::new(Vec::new()).with_source(SourceMap::new("x\n\"y"));
    emitter.begin();
    emitter.emit_all(&[
        Diagnostic::error(ErrorCode::E0001)
            .with_message("unterminated string")
            .with_span(Span::new(2, 4)),
        Diagnostic::error(ErrorCode::E6001).with_message("say \"hi\""),
    ]);
    emitter.end();

    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        out,
        "[{\"code\":\"E0001\",\"severity\":\"error\",\"message\":\"unterminated string\",\"line\":2,\"column\":1,\"notes\":[]},\
         {\"code\":\"E6001\",\"severity\":\"error\",\"message\":\"say \\\"hi\\\"\",\"line\":null,\"column\":null,\"notes\":[]}]\n"
    );
}
