//! Conversions and text rendering
//!
//! `Int` converts losslessly from `i64`, narrows back to `i64` with a
//! domain error on NaN or overflow, and converts to `bool` with the
//! engine's historical inverted convention: `true` exactly when the
//! magnitude is empty. `Display` renders uppercase hexadecimal with an
//! optional leading minus, `"0"` for zero, and `"NaN"` for NaN.

use std::fmt::{self, Display, Formatter};

use crate::buffer::{Block, BlockBuf};
use crate::num::core::{Int, Repr, Sign};

/// Domain errors from narrowing an `Int` to a machine integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrowError {
    /// NaN is not representable by any machine integer.
    Nan,
    /// The magnitude exceeds the representable signed range.
    Overflow,
}

impl From<i64> for Int {
    fn from(n: i64) -> Self {
        let sign = if n < 0 { Sign::Neg } else { Sign::Pos };
        // unsigned_abs keeps i64::MIN exact; its negation would overflow.
        let mut rest = n.unsigned_abs();
        let mut mag = BlockBuf::new();
        while rest > 0 {
            mag.push(rest as Block);
            rest >>= Block::BITS;
        }
        Int(Repr::Num { sign, mag })
    }
}

impl TryFrom<&Int> for i64 {
    type Error = NarrowError;

    /// Reconstructs the value by shifting in blocks from most-significant
    /// to least-significant and reapplying the sign, with `i64::MIN`
    /// handled exactly.
    fn try_from(value: &Int) -> Result<Self, Self::Error> {
        let (sign, mag) = match &value.0 {
            Repr::Nan => return Err(NarrowError::Nan),
            Repr::Num { sign, mag } => (*sign, mag),
        };
        if mag.len() > 2 {
            return Err(NarrowError::Overflow);
        }
        let mut abs = 0u64;
        for i in (0..mag.len()).rev() {
            abs = abs << Block::BITS | u64::from(mag[i]);
        }
        match sign {
            Sign::Pos if abs <= i64::MAX as u64 => Ok(abs as i64),
            Sign::Neg if abs < 1u64 << 63 => Ok(-(abs as i64)),
            Sign::Neg if abs == 1u64 << 63 => Ok(i64::MIN),
            _ => Err(NarrowError::Overflow),
        }
    }
}

impl TryFrom<Int> for i64 {
    type Error = NarrowError;

    fn try_from(value: Int) -> Result<Self, Self::Error> {
        i64::try_from(&value)
    }
}

/// Historical inverted boolean convention: `true` exactly when the
/// magnitude is empty. NaN carries no magnitude and so also reads `true`.
impl From<&Int> for bool {
    fn from(value: &Int) -> bool {
        match &value.0 {
            Repr::Nan => true,
            Repr::Num { mag, .. } => mag.is_empty(),
        }
    }
}

impl Display for Int {
    /// Uppercase hexadecimal: blocks from most-significant down, the top
    /// block without leading zero nibbles, the rest zero-padded to eight.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Nan => f.write_str("NaN"),
            Repr::Num { mag, .. } if mag.is_empty() => f.write_str("0"),
            Repr::Num { sign, mag } => {
                if *sign == Sign::Neg {
                    f.write_str("-")?;
                }
                let top = mag.len() - 1;
                write!(f, "{:X}", mag[top])?;
                for i in (0..top).rev() {
                    write!(f, "{:08X}", mag[i])?;
                }
                Ok(())
            }
        }
    }
}
