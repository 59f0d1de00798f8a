use std::thread;
use std::time::Duration;

use mag_host::{recording_host, HostEvent, Position};
use mag_ir::SourceMap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn run_with(source: &str, policy: ErrorPolicy) -> (RunOutcome, Vec<HostEvent>) {
    let parsed = mag_parse::parse(source);
    assert!(
        parsed.diagnostics.is_empty(),
        "test program does not parse: {:?}",
        parsed.diagnostics
    );
    let host = recording_host();
    let mut interp = InterpreterBuilder::new()
        .host(host.clone())
        .error_policy(policy)
        .build();
    let outcome = interp.run(&parsed.program, &SourceMap::new(source));
    (outcome, host.take_events())
}

fn run(source: &str) -> (RunOutcome, Vec<HostEvent>) {
    run_with(source, ErrorPolicy::Abort)
}

fn output(text: &str) -> HostEvent {
    HostEvent::Output(text.to_string())
}

fn error(line: u32, column: u32, message: &str) -> HostEvent {
    HostEvent::RuntimeError(Position::new(line, column), message.to_string())
}

#[test]
fn output_then_division_by_zero() {
    let (outcome, events) = run("print(5)\nlet zero = 0\nprint(10 / zero)\nprint(6)");
    assert_eq!(
        events,
        vec![output("5"), error(3, 10, "division by zero")]
    );
    assert_eq!(outcome, RunOutcome::Aborted(Position::new(3, 10)));
}

#[test]
fn empty_program_produces_no_events() {
    let (outcome, events) = run("");
    assert_eq!(events, vec![]);
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(outcome.is_success());
}

#[test]
fn program_without_output_or_errors() {
    let (outcome, events) = run("let a = 1\nlet b = a * 2\nb = b + a");
    assert!(events.is_empty());
    assert_eq!(outcome, RunOutcome::Completed);
}

#[test]
fn empty_print_is_still_an_event() {
    let (_, events) = run("print(\"\")\nprint(\"\")");
    assert_eq!(events, vec![output(""), output("")]);
}

#[test]
fn abort_stops_after_first_error() {
    let (outcome, events) = run("print(1)\nprint(x)\nprint(2)");
    assert_eq!(
        events,
        vec![output("1"), error(2, 7, "undefined variable: x")]
    );
    assert_eq!(outcome.error_count(), 1);
}

#[test]
fn continue_runs_later_statements() {
    let (outcome, events) = run_with(
        "print(1)\nprint(x)\nprint(2)\nprint(2 % 0)\nprint(3)",
        ErrorPolicy::Continue,
    );
    assert_eq!(
        events,
        vec![
            output("1"),
            error(2, 7, "undefined variable: x"),
            output("2"),
            error(4, 9, "modulo by zero"),
            output("3"),
        ]
    );
    assert_eq!(outcome, RunOutcome::CompletedWithErrors(2));
}

#[test]
fn failing_statement_is_unwound() {
    let source = "let n = 0\nwhile n < 5 {\n  print(n)\n  n = n + 1\n  if n == 2 { print(n / 0) }\n}\nprint(\"after\")";
    let (_, events) = run_with(source, ErrorPolicy::Continue);
    assert_eq!(
        events,
        vec![
            output("0"),
            output("1"),
            error(5, 23, "division by zero"),
            output("after"),
        ]
    );
}

#[test]
fn bindings_before_a_failure_survive() {
    let (_, events) = run_with(
        "let a = 1\nif true { a = 10\n let b = a / 0 }\nprint(a)",
        ErrorPolicy::Continue,
    );
    assert_eq!(events[1], output("10"));
}

#[test]
fn errors_point_at_the_operator() {
    let (_, events) = run("let big = 9223372036854775807\nlet y = 0 +\n  big + 1");
    assert_eq!(events, vec![error(3, 7, "integer overflow in addition")]);
}

#[test]
fn condition_must_be_bool() {
    let (_, events) = run("if 1 { print(1) }");
    assert_eq!(events, vec![error(1, 4, "condition must be bool, got int")]);
}

#[test]
fn logical_operators_short_circuit() {
    let (outcome, events) = run("print(false && 1 / 0 == 0)\nprint(true || undefined)");
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(events, vec![output("false"), output("true")]);
}

#[test]
fn logical_operators_need_bools() {
    let (_, events) = run("print(1 && true)");
    assert_eq!(
        events,
        vec![error(1, 9, "operator `&&` cannot be applied to int")]
    );
}

#[test]
fn undefined_function_and_arity() {
    let (_, events) = run_with("shout(1)\nlen(\"a\", \"b\")", ErrorPolicy::Continue);
    assert_eq!(
        events,
        vec![
            error(1, 1, "undefined function: shout"),
            error(2, 1, "len expects 1 argument, got 2"),
        ]
    );
}

#[test]
fn assignment_to_unbound_name() {
    let (_, events) = run("let x = 1\ny = x");
    assert_eq!(events, vec![error(2, 1, "undefined variable: y")]);
}

#[test]
fn blocks_scope_their_bindings() {
    let (_, events) = run(
        "let x = 1\nif true {\n  let x = \"inner\"\n  print(x)\n}\nprint(x)\nlet n = 0\nwhile n < 3 { n = n + 1 }\nprint(n)",
    );
    assert_eq!(events, vec![output("inner"), output("1"), output("3")]);
}

#[test]
fn else_if_chain_picks_one_branch() {
    let source = "let n = 15\nif n % 15 == 0 { print(\"fizzbuzz\") }\nelse if n % 3 == 0 { print(\"fizz\") }\nelse { print(n) }";
    let (_, events) = run(source);
    assert_eq!(events, vec![output("fizzbuzz")]);
}

#[test]
fn builtins_compose() {
    let (_, events) = run("print(len(\"héllo\" + str(42)))\nprint(str(nil) + str(1 < 2))");
    assert_eq!(events, vec![output("7"), output("niltrue")]);
}

#[test]
fn globals_persist_across_runs() {
    let host = recording_host();
    let mut interp = InterpreterBuilder::new().host(host.clone()).build();

    let first = mag_parse::parse("let total = 40");
    interp.run(&first.program, &SourceMap::new("let total = 40"));
    let second = mag_parse::parse("print(total + 2)");
    interp.run(&second.program, &SourceMap::new("print(total + 2)"));

    assert_eq!(host.output(), vec!["42".to_string()]);
    assert_eq!(interp.env().lookup("total"), Some(&Value::Int(40)));
}

#[test]
fn builder_defaults_and_prepared_env() {
    let mut env = Environment::new();
    env.define("greeting", Value::from("hi"));
    let host = recording_host();
    let mut interp = InterpreterBuilder::new()
        .host(host.clone())
        .env(env)
        .build();
    assert_eq!(interp.error_policy(), ErrorPolicy::Abort);

    let source = "print(greeting)";
    interp.run(&mag_parse::parse(source).program, &SourceMap::new(source));
    assert_eq!(host.output(), vec!["hi".to_string()]);
}

#[test]
fn error_policy_parse_and_display() {
    assert_eq!(ErrorPolicy::parse("continue"), Some(ErrorPolicy::Continue));
    assert_eq!(ErrorPolicy::parse("abort"), Some(ErrorPolicy::Abort));
    assert_eq!(ErrorPolicy::parse("retry"), None);
    assert_eq!(ErrorPolicy::Continue.to_string(), "continue");
}

#[test]
fn raised_interrupt_stops_before_first_statement() {
    let host = recording_host();
    let handle = InterruptHandle::new();
    handle.interrupt();
    let mut interp = InterpreterBuilder::new()
        .host(host.clone())
        .interrupt(handle.clone())
        .build();

    let source = "print(1)";
    let outcome = interp.run(&mag_parse::parse(source).program, &SourceMap::new(source));
    assert_eq!(outcome, RunOutcome::Interrupted { errors: 0 });
    assert!(host.is_empty());

    handle.reset();
    let outcome = interp.run(&mag_parse::parse(source).program, &SourceMap::new(source));
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(host.output(), vec!["1".to_string()]);
}

#[test]
fn interrupt_stops_an_infinite_loop() {
    let source = "let i = 0\nwhile true { i = i + 1 }";
    let program = mag_parse::parse(source).program;
    let mut interp = InterpreterBuilder::new()
        .host(mag_host::null_host())
        .build();
    let handle = interp.interrupt_handle();

    let raiser = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        handle.interrupt();
    });
    let outcome = interp.run(&program, &SourceMap::new(source));
    assert!(raiser.join().is_ok());
    assert_eq!(outcome, RunOutcome::Interrupted { errors: 0 });
}

#[test]
fn interrupt_keeps_the_count_of_earlier_errors() {
    let source = "print(1 / 0)\nprint(nope)\nwhile true { print(2) }";
    let program = mag_parse::parse(source).program;
    let host = recording_host();
    let mut interp = InterpreterBuilder::new()
        .host(host.clone())
        .error_policy(ErrorPolicy::Continue)
        .build();
    let handle = interp.interrupt_handle();

    let raiser = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        handle.interrupt();
    });
    let outcome = interp.run(&program, &SourceMap::new(source));
    assert!(raiser.join().is_ok());

    assert_eq!(outcome, RunOutcome::Interrupted { errors: 2 });
    assert_eq!(outcome.error_count(), 2);
    assert!(!outcome.is_success());
    assert_eq!(host.errors().len(), 2);
}

#[test]
fn long_operator_chain_evaluates() {
    let source = format!("print({})", vec!["1"; 3_000].join(" + "));
    let (_, events) = run(&source);
    assert_eq!(events, vec![output("3000")]);
}

#[test]
fn separate_interpreters_on_threads_stay_separate() {
    let programs = [
        "let i = 0\nwhile i < 200 { print(\"a\" + str(i)); i = i + 1 }\nprint(1 / 0)",
        "let i = 0\nwhile i < 200 { print(\"b\" + str(i)); i = i + 1 }",
    ];
    let results: Vec<_> = thread::scope(|scope| {
        let workers: Vec<_> = programs
            .iter()
            .map(|source| scope.spawn(move || run(source)))
            .collect();
        workers.into_iter().map(|w| w.join().ok()).collect()
    });

    let [Some((first, a_events)), Some((second, b_events))] = results.as_slice() else {
        panic!("worker thread panicked");
    };
    assert_eq!(*first, RunOutcome::Aborted(Position::new(3, 9)));
    assert_eq!(*second, RunOutcome::Completed);
    assert_eq!(a_events.len(), 201);
    assert_eq!(b_events.len(), 200);
    assert!(b_events.iter().all(|e| matches!(e, HostEvent::Output(t) if t.starts_with('b'))));
    assert!(a_events[..200]
        .iter()
        .all(|e| matches!(e, HostEvent::Output(t) if t.starts_with('a'))));
}

proptest! {
    /// Host calls arrive in exactly the order the program makes them.
    #[test]
    fn events_follow_program_order(lines in prop::collection::vec(prop::option::of(any::<i32>()), 0..40)) {
        let source = lines
            .iter()
            .map(|line| match line {
                Some(n) => format!("print({n})"),
                None => "print(1 / 0)".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n");
        let expected: Vec<HostEvent> = lines
            .iter()
            .zip(1u32..)
            .map(|(line, number)| match line {
                Some(n) => output(&n.to_string()),
                None => error(number, 9, "division by zero"),
            })
            .collect();

        let (_, events) = run_with(&source, ErrorPolicy::Continue);
        prop_assert_eq!(events, expected);
    }
}
