use mag_host::{HostEvent, RecordingHost};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn lookup_by_name() {
    for name in ["print", "len", "str"] {
        let builtin = Builtin::lookup(name);
        assert_eq!(builtin.map(Builtin::name), Some(name));
    }
    assert_eq!(Builtin::lookup("println"), None);
}

#[test]
fn print_emits_display_text() {
    let host = RecordingHost::new();
    let result = Builtin::Print.call(&[Value::from("")], &host);
    assert_eq!(result, Ok(Value::Nil));
    Builtin::Print.call(&[Value::Int(7)], &host).ok();
    assert_eq!(
        host.events(),
        vec![
            HostEvent::Output(String::new()),
            HostEvent::Output("7".to_string())
        ]
    );
}

#[test]
fn len_counts_characters() {
    let host = RecordingHost::new();
    assert_eq!(
        Builtin::Len.call(&[Value::from("héllo")], &host),
        Ok(Value::Int(5))
    );
    assert_eq!(
        Builtin::Len.call(&[Value::Int(3)], &host),
        Err(EvalErrorKind::TypeMismatch {
            expected: "str",
            got: "int"
        })
    );
    assert!(host.is_empty());
}

#[test]
fn str_converts_any_value() {
    let host = RecordingHost::new();
    assert_eq!(
        Builtin::Str.call(&[Value::Bool(false)], &host),
        Ok(Value::from("false"))
    );
}

#[test]
fn wrong_argument_count_is_rejected() {
    let host = RecordingHost::new();
    assert_eq!(
        Builtin::Print
            .call(&[], &host)
            .map_err(|e| e.to_string()),
        Err("print expects 1 argument, got 0".to_string())
    );
    assert!(host.is_empty());
}
