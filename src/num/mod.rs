//! Arbitrary-precision signed integer
//!
//! This module defines `Int`, an exact signed integer of unbounded
//! magnitude, together with its arithmetic engine.
//!
//! The representation is a tagged sum: a value is either the `NaN` marker
//! (invalid/undefined) or a sign paired with a canonical little-endian
//! sequence of 32-bit blocks. An empty block sequence denotes zero, whose
//! stored sign is meaningless and ignored by every comparison.
//!
//! `NaN` is produced by malformed hex text, by division with a
//! zero-magnitude divisor, and by the square root of a negative value. It
//! absorbs through every arithmetic operator and renders as `"NaN"`;
//! comparisons treat it as unordered.
//!
//! The engine is split by concern:
//! - `addsub`: ripple carry/borrow magnitude arithmetic plus signed dispatch
//! - `mul`: single-block schoolbook base case plus recursive Karatsuba
//! - `div`: Knuth Algorithm D normalized long division
//! - `cmp`: NaN-aware partial ordering
//! - `sqrt`: Newton-iteration integer square root
//! - `conv`: hex text rendering and machine-integer narrowing

mod addsub;
mod cmp;
mod conv;
mod core;
mod div;
mod mul;
mod sqrt;

pub use self::conv::NarrowError;
pub use self::core::Int;
