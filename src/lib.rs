//! Arbitrary-precision signed integer arithmetic
//!
//! This crate provides an exact, unbounded signed integer type (`Int`)
//! together with a small stack calculator built on top of it.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! operation is a pure, terminating computation over owned data, with no
//! shared mutable state between values and no runtime dependencies.
//!
//! # Module overview
//!
//! - `buffer`
//!   Crate-private growable block storage. Values own their block buffers
//!   exclusively; copying deep-duplicates, moving transfers ownership.
//!
//! - `num`
//!   The `Int` value type and its arithmetic engine: ripple carry/borrow
//!   addition and subtraction, Karatsuba multiplication, Knuth Algorithm D
//!   division with remainder, NaN-aware partial ordering, Newton-iteration
//!   integer square root, and hexadecimal text conversion.
//!
//! - `calc`
//!   A command-driven stack calculator: tokenizes an input stream,
//!   dispatches operators to the `num` engine, and writes the resulting
//!   stack to an output sink. Thin glue over the public `Int` contract.
//!
//! # Design goals
//!
//! - Explicit semantics: invalid values are the in-domain `NaN` marker,
//!   never panics or error signals, until a narrowing conversion or text
//!   rendering makes them observable.
//! - Minimal and explicit APIs.
//! - No runtime dependencies.

mod buffer;

pub mod calc;
pub mod num;

pub use num::Int;
