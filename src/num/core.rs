//! Value representation and construction
//!
//! An `Int` is either the `NaN` marker or a sign plus a canonical
//! magnitude: a little-endian sequence of 32-bit blocks with no
//! most-significant zero blocks. The empty magnitude is zero.

use crate::buffer::{Block, BlockBuf};

/// Hex digits per 32-bit block.
pub(crate) const DIGITS_PER_BLOCK: usize = (Block::BITS / 4) as usize;

/// Sign of a nonzero value. Zero stores a sign too, but it is a
/// don't-care: comparisons and rendering ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub(crate) fn flip(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Sign of a product (or quotient) of two operands.
    pub(crate) fn combine(self, other: Sign) -> Sign {
        if self == other { Sign::Pos } else { Sign::Neg }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Repr {
    /// Invalid/undefined value. Carries no magnitude or sign.
    Nan,
    Num { sign: Sign, mag: BlockBuf },
}

/// Arbitrary-precision signed integer.
///
/// Supports exact addition, subtraction, multiplication, division with
/// remainder, NaN-aware comparison, integer square root, and hexadecimal
/// text conversion, over operands of unbounded magnitude.
///
/// Invalid values are represented in-domain by [`Int::nan`] rather than by
/// errors: malformed text parses to NaN, division by zero yields NaN, and
/// NaN absorbs through every subsequent operation.
///
/// ```
/// use longnum::Int;
///
/// let a = Int::from_hex("A");
/// let b = Int::from_hex("B");
/// assert_eq!((&a + &b).to_string(), "15");
/// ```
#[derive(Clone, Debug)]
pub struct Int(pub(crate) Repr);

impl Int {
    /// The value zero.
    pub fn zero() -> Self {
        Int(Repr::Num {
            sign: Sign::Pos,
            mag: BlockBuf::new(),
        })
    }

    /// The invalid-value marker.
    pub fn nan() -> Self {
        Int(Repr::Nan)
    }

    /// Returns `true` when the value is the NaN marker.
    pub fn is_nan(&self) -> bool {
        matches!(self.0, Repr::Nan)
    }

    /// Parses a hexadecimal literal with an optional leading minus sign.
    ///
    /// Digits are case-insensitive and grouped from the least-significant
    /// end into 32-bit blocks. An empty string (or a bare `-`) and any
    /// non-hex character yield [`Int::nan`] instead of an error.
    ///
    /// ```
    /// use longnum::Int;
    ///
    /// assert_eq!(Int::from_hex("-ff").to_string(), "-FF");
    /// assert!(Int::from_hex("12G3").is_nan());
    /// ```
    pub fn from_hex(text: &str) -> Self {
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Neg, rest),
            None => (Sign::Pos, text),
        };
        if digits.is_empty() {
            return Int::nan();
        }

        let bytes = digits.as_bytes();
        let mut mag = BlockBuf::new();
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(DIGITS_PER_BLOCK);
            let mut block: Block = 0;
            for &byte in &bytes[start..end] {
                match (byte as char).to_digit(16) {
                    Some(digit) => block = block << 4 | digit,
                    None => return Int::nan(),
                }
            }
            mag.push(block);
            end = start;
        }
        Int::from_parts(sign, mag)
    }

    /// Builds a value from a sign and a magnitude, canonicalizing by
    /// stripping most-significant zero blocks.
    pub(crate) fn from_parts(sign: Sign, mut mag: BlockBuf) -> Self {
        mag.trim();
        Int(Repr::Num { sign, mag })
    }
}

impl Default for Int {
    fn default() -> Self {
        Int::zero()
    }
}
