use std::io;

use pretty_assertions::assert_eq;

use super::*;

fn written(host: ConsoleHost<Vec<u8>, Vec<u8>>) -> (String, String) {
    let (out, err) = host.into_writers();
    (
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn emit_writes_one_line_per_call() {
    let host = ConsoleHost::new(Vec::new(), Vec::new());
    host.emit("hello");
    host.emit("");
    host.emit("world");

    let (out, err) = written(host);
    assert_eq!(out, "hello\n\nworld\n");
    assert_eq!(err, "");
}

#[test]
fn runtime_error_goes_to_error_writer() {
    let host = ConsoleHost::new(Vec::new(), Vec::new());
    host.emit("5");
    host.report_runtime_error(Position::new(3, 10), "division by zero");

    let (out, err) = written(host);
    assert_eq!(out, "5\n");
    assert_eq!(err, "3:10: runtime error: division by zero\n");
}

#[test]
fn label_prefixes_location() {
    let host = ConsoleHost::new(Vec::new(), Vec::new()).with_label("main.mag");
    host.report_runtime_error(Position::new(1, 4), "undefined variable: x");

    let (_, err) = written(host);
    assert_eq!(err, "main.mag:1:4: runtime error: undefined variable: x\n");
}

#[test]
fn colors_wrap_severity() {
    let host = ConsoleHost::new(Vec::new(), Vec::new()).with_colors(true);
    host.report_runtime_error(Position::new(2, 2), "boom");

    let (_, err) = written(host);
    assert!(err.contains("\x1b[1;31mruntime error\x1b[0m"));
    assert!(err.ends_with(": boom\n"));
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn failing_writers_do_not_surface() {
    let host = ConsoleHost::new(BrokenPipe, BrokenPipe);
    host.emit("lost");
    host.report_runtime_error(Position::START, "also lost");
}
