//! NaN-aware partial ordering
//!
//! `Int` forms a partial order, not a total one: any comparison involving
//! NaN is unordered, so every relational operator except `!=` returns
//! `false` for it. Zero compares equal to zero regardless of stored sign.
//! Equality is derived from order-equivalence.

use std::cmp::Ordering;

use crate::buffer::BlockBuf;
use crate::num::core::{Int, Repr, Sign};

/// Total order on canonical magnitudes: block count first, then blocks
/// from most-significant down.
pub(crate) fn mag_cmp(a: &BlockBuf, b: &BlockBuf) -> Ordering {
    let by_len = a.len().cmp(&b.len());
    if by_len != Ordering::Equal {
        return by_len;
    }
    for i in (0..a.len()).rev() {
        let by_block = a[i].cmp(&b[i]);
        if by_block != Ordering::Equal {
            return by_block;
        }
    }
    Ordering::Equal
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Int) -> Option<Ordering> {
        match (&self.0, &other.0) {
            (Repr::Num { sign: sa, mag: ma }, Repr::Num { sign: sb, mag: mb }) => {
                if ma.is_empty() && mb.is_empty() {
                    return Some(Ordering::Equal);
                }
                match (sa, sb) {
                    (Sign::Neg, Sign::Pos) => Some(Ordering::Less),
                    (Sign::Pos, Sign::Neg) => Some(Ordering::Greater),
                    _ => {
                        let abs = mag_cmp(ma, mb);
                        Some(if *sa == Sign::Neg { abs.reverse() } else { abs })
                    }
                }
            }
            _ => None,
        }
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Int) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}
