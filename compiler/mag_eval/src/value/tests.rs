use pretty_assertions::assert_eq;

use super::*;

#[test]
fn display_is_the_printed_form() {
    assert_eq!(Value::Int(-42).to_string(), "-42");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::from("hi \"there\"").to_string(), "hi \"there\"");
    assert_eq!(Value::Str(String::new()).to_string(), "");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn type_names() {
    let names: Vec<_> = [Value::from(1), Value::from(false), Value::from("s"), Value::Nil]
        .iter()
        .map(Value::type_name)
        .collect();
    assert_eq!(names, vec!["int", "bool", "str", "nil"]);
}

#[test]
fn only_bools_are_conditions() {
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::Int(1).as_bool(), None);
    assert_eq!(Value::Nil.as_bool(), None);
}
