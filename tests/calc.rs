use longnum::calc::{evaluate, CalcError};

use std::io::Cursor;

fn run(input: &str) -> String {
    let mut out = Vec::new();
    evaluate(Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_err(input: &str) -> CalcError {
    let mut out = Vec::new();
    evaluate(Cursor::new(input), &mut out).unwrap_err()
}

#[test]
fn adds_two_literals() {
    assert_eq!(run("A B +"), "15\n");
}

#[test]
fn binary_operators_apply_top_of_stack_first() {
    // `-` pops the top as its left operand, so `5 3 -` is 3 - 5.
    assert_eq!(run("5 3 -"), "-2\n");
    assert_eq!(run("A 64 /"), "A\n");
}

#[test]
fn leftover_stack_prints_top_first() {
    assert_eq!(run("1 2 3"), "3\n2\n1\n");
}

#[test]
fn relational_operators_push_zero_or_one() {
    assert_eq!(run("5 3 <"), "1\n");
    assert_eq!(run("3 5 <"), "0\n");
    assert_eq!(run("7 7 =="), "1\n");
    assert_eq!(run("7 8 !="), "1\n");
}

#[test]
fn unary_operators() {
    assert_eq!(run("5 _"), "-5\n");
    assert_eq!(run("91 ~"), "C\n");
}

#[test]
fn division_by_zero_prints_nan() {
    assert_eq!(run("0 5 /"), "NaN\n");
    assert_eq!(run("0 5 %"), "NaN\n");
}

#[test]
fn tokens_split_across_lines_and_whitespace() {
    assert_eq!(run("A\n  B\t+\n"), "15\n");
}

#[test]
fn empty_input_produces_empty_output() {
    assert_eq!(run(""), "");
}

#[test]
fn invalid_literal_is_an_error() {
    assert!(matches!(run_err("5 G +"), CalcError::InvalidNumber(t) if t == "G"));
}

#[test]
fn operator_without_operands_is_an_error() {
    assert!(matches!(run_err("+"), CalcError::StackUnderflow("+")));
    assert!(matches!(run_err("5 *"), CalcError::StackUnderflow("*")));
    assert!(matches!(run_err("~"), CalcError::StackUnderflow("~")));
}
