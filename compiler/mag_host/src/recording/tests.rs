#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn records_output_then_error_in_call_order() {
    let host = RecordingHost::new();
    host.emit("5");
    host.report_runtime_error(Position::new(3, 10), "division by zero");

    assert_eq!(
        host.events(),
        vec![
            HostEvent::Output("5".to_string()),
            HostEvent::RuntimeError(Position::new(3, 10), "division by zero".to_string()),
        ]
    );
}

#[test]
fn fresh_host_has_no_events() {
    let host = RecordingHost::new();
    assert!(host.is_empty());
    assert_eq!(host.events(), Vec::new());
}

#[test]
fn empty_text_is_an_event() {
    let host = RecordingHost::new();
    host.emit("");
    assert_eq!(host.len(), 1);
    assert_eq!(host.events(), vec![HostEvent::Output(String::new())]);
}

#[test]
fn output_and_errors_split_by_channel() {
    let host = RecordingHost::new();
    host.emit("a");
    host.report_runtime_error(Position::new(1, 2), "boom");
    host.emit("b");

    assert_eq!(host.output(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(host.errors(), vec![(Position::new(1, 2), "boom".to_string())]);
}

#[test]
fn take_events_drains() {
    let host = RecordingHost::new();
    host.emit("x");
    assert_eq!(host.take_events(), vec![HostEvent::Output("x".to_string())]);
    assert!(host.is_empty());
}

#[test]
fn clear_empties_recording() {
    let host = RecordingHost::new();
    host.emit("x");
    host.report_runtime_error(Position::START, "y");
    host.clear();
    assert!(host.is_empty());
}

#[test]
fn replay_preserves_order_and_source() {
    let source = RecordingHost::new();
    source.emit("one");
    source.report_runtime_error(Position::new(4, 1), "bad");
    source.emit("two");

    let target = RecordingHost::new();
    source.replay_into(&target);

    assert_eq!(target.events(), source.events());
    assert_eq!(source.len(), 3);
}

#[test]
fn concurrent_writers_lose_nothing() {
    use std::sync::Arc;
    use std::thread;

    let host = Arc::new(RecordingHost::new());
    let host2 = Arc::clone(&host);

    let worker = thread::spawn(move || {
        for _ in 0..100 {
            host2.emit("a");
        }
    });
    for _ in 0..100 {
        host.emit("b");
    }
    worker.join().unwrap();

    assert_eq!(host.len(), 200);
}

fn arb_event() -> impl Strategy<Value = HostEvent> {
    prop_oneof![
        ".*".prop_map(HostEvent::Output),
        (1u32..10_000, 1u32..500, ".*").prop_map(|(line, column, message)| {
            HostEvent::RuntimeError(Position::new(line, column), message)
        }),
    ]
}

proptest! {
    #[test]
    fn observes_calls_in_issue_order(events in proptest::collection::vec(arb_event(), 0..64)) {
        let host = RecordingHost::new();
        for event in &events {
            event.deliver_to(&host);
        }
        prop_assert_eq!(host.events(), events);
    }

    #[test]
    fn position_is_recorded_verbatim(line in any::<u32>(), column in any::<u32>()) {
        let host = RecordingHost::new();
        host.report_runtime_error(Position::new(line, column), "m");
        let errors = host.errors();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].0, Position::new(line, column));
    }
}
