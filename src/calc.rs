//! Command-driven stack calculator
//!
//! Thin glue over the `Int` engine: reads whitespace-separated tokens from
//! an input source, maintains an operand stack, dispatches operators, and
//! finally writes the stack's text renderings to an output sink, top
//! first.
//!
//! Binary operators pop `n1` (the stack top) and then `n2`, and push
//! `op(n1, n2)` — so `5 3 -` leaves `-2`. Relational operators push their
//! boolean result as `0` or `1`. `_` negates and `~` takes the integer
//! square root. Every other token is a hexadecimal literal; a literal that
//! parses to NaN stops evaluation with an error.

use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, Write};

use crate::num::Int;

/// Errors from evaluating a token stream.
#[derive(Debug)]
pub enum CalcError {
    /// Reading the input or writing the output failed.
    Io(io::Error),
    /// A literal token was not a valid hexadecimal number.
    InvalidNumber(String),
    /// An operator found fewer operands on the stack than it needs.
    StackUnderflow(&'static str),
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Io(err) => write!(f, "i/o error: {err}"),
            CalcError::InvalidNumber(token) => write!(f, "invalid number: {token}"),
            CalcError::StackUnderflow(op) => {
                write!(f, "not enough operands for operator {op}")
            }
        }
    }
}

impl std::error::Error for CalcError {}

impl From<io::Error> for CalcError {
    fn from(err: io::Error) -> Self {
        CalcError::Io(err)
    }
}

/// Evaluates a whitespace-separated token stream and renders the final
/// stack to `output`, one value per line, top first.
pub fn evaluate<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), CalcError> {
    let mut stack: Vec<Int> = Vec::new();

    for line in input.lines() {
        for token in line?.split_whitespace() {
            match token {
                "+" => binary(&mut stack, "+", |n1, n2| n1 + n2)?,
                "-" => binary(&mut stack, "-", |n1, n2| n1 - n2)?,
                "*" => binary(&mut stack, "*", |n1, n2| n1 * n2)?,
                "/" => binary(&mut stack, "/", |n1, n2| n1 / n2)?,
                "%" => binary(&mut stack, "%", |n1, n2| n1 % n2)?,
                "==" => relational(&mut stack, "==", |n1, n2| n1 == n2)?,
                "!=" => relational(&mut stack, "!=", |n1, n2| n1 != n2)?,
                "<" => relational(&mut stack, "<", |n1, n2| n1 < n2)?,
                "<=" => relational(&mut stack, "<=", |n1, n2| n1 <= n2)?,
                ">" => relational(&mut stack, ">", |n1, n2| n1 > n2)?,
                ">=" => relational(&mut stack, ">=", |n1, n2| n1 >= n2)?,
                "_" => unary(&mut stack, "_", |n| -n)?,
                "~" => unary(&mut stack, "~", |n| n.isqrt())?,
                literal => {
                    let value = Int::from_hex(literal);
                    if value.is_nan() {
                        return Err(CalcError::InvalidNumber(literal.to_string()));
                    }
                    stack.push(value);
                }
            }
        }
    }

    for value in stack.iter().rev() {
        writeln!(output, "{value}")?;
    }
    output.flush()?;
    Ok(())
}

fn pop(stack: &mut Vec<Int>, op: &'static str) -> Result<Int, CalcError> {
    stack.pop().ok_or(CalcError::StackUnderflow(op))
}

fn binary(
    stack: &mut Vec<Int>,
    op: &'static str,
    apply: impl Fn(&Int, &Int) -> Int,
) -> Result<(), CalcError> {
    let n1 = pop(stack, op)?;
    let n2 = pop(stack, op)?;
    stack.push(apply(&n1, &n2));
    Ok(())
}

fn relational(
    stack: &mut Vec<Int>,
    op: &'static str,
    apply: impl Fn(&Int, &Int) -> bool,
) -> Result<(), CalcError> {
    let n1 = pop(stack, op)?;
    let n2 = pop(stack, op)?;
    stack.push(Int::from(i64::from(apply(&n1, &n2))));
    Ok(())
}

fn unary(
    stack: &mut Vec<Int>,
    op: &'static str,
    apply: impl Fn(&Int) -> Int,
) -> Result<(), CalcError> {
    let n = pop(stack, op)?;
    stack.push(apply(&n));
    Ok(())
}
