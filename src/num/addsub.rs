//! Addition and subtraction
//!
//! Unsigned magnitude arithmetic uses a 64-bit accumulator per 32-bit
//! block to capture carry and borrow. The signed operators dispatch on the
//! operand signs: same-sign addition adds magnitudes, opposite-sign
//! addition subtracts the smaller magnitude from the larger and takes the
//! larger operand's sign. Subtraction mirrors the same dispatch rather
//! than literally negating and adding; the results are identical.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::buffer::{Block, BlockBuf};
use crate::num::cmp::mag_cmp;
use crate::num::core::{Int, Repr, Sign};

/// Unsigned magnitude addition with ripple carry.
///
/// The result is at most one block longer than the longer operand.
pub(crate) fn mag_add(left: &BlockBuf, right: &BlockBuf) -> BlockBuf {
    let mut out = BlockBuf::new();
    let mut carry = 0u64;
    let mut i = 0;
    while i < left.len() || i < right.len() || carry != 0 {
        let wide = u64::from(left.get(i)) + u64::from(right.get(i)) + carry;
        out.push(wide as Block);
        carry = wide >> Block::BITS;
        i += 1;
    }
    out
}

/// Unsigned magnitude subtraction with ripple borrow.
///
/// Requires `left >= right`; callers establish this with [`mag_cmp`].
pub(crate) fn mag_sub(left: &BlockBuf, right: &BlockBuf) -> BlockBuf {
    let mut out = BlockBuf::new();
    let mut borrow = 0u64;
    for i in 0..left.len() {
        let mut l = u64::from(left.get(i));
        let r = u64::from(right.get(i)) + borrow;
        if r > l {
            l += 1u64 << Block::BITS;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push((l - r) as Block);
    }
    out.trim();
    out
}

fn add_values(a: &Int, b: &Int) -> Int {
    match (&a.0, &b.0) {
        (Repr::Num { sign: sa, mag: ma }, Repr::Num { sign: sb, mag: mb }) => {
            if sa == sb {
                Int::from_parts(*sa, mag_add(ma, mb))
            } else {
                match mag_cmp(ma, mb) {
                    Ordering::Equal => Int::zero(),
                    Ordering::Less => Int::from_parts(*sb, mag_sub(mb, ma)),
                    Ordering::Greater => Int::from_parts(*sa, mag_sub(ma, mb)),
                }
            }
        }
        _ => Int::nan(),
    }
}

fn sub_values(a: &Int, b: &Int) -> Int {
    match (&a.0, &b.0) {
        (Repr::Num { sign: sa, mag: ma }, Repr::Num { sign: sb, mag: mb }) => {
            if sa != sb {
                // -x - y = -(x + y); x - (-y) = x + y
                Int::from_parts(*sa, mag_add(ma, mb))
            } else {
                match mag_cmp(ma, mb) {
                    Ordering::Equal => Int::zero(),
                    Ordering::Less => Int::from_parts(sa.flip(), mag_sub(mb, ma)),
                    Ordering::Greater => Int::from_parts(*sa, mag_sub(ma, mb)),
                }
            }
        }
        _ => Int::nan(),
    }
}

impl Add<&Int> for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Int {
        add_values(self, rhs)
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Int) -> Int {
        add_values(&self, &rhs)
    }
}

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, rhs: &Int) {
        *self = add_values(self, rhs);
    }
}

impl Sub<&Int> for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Int {
        sub_values(self, rhs)
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Int) -> Int {
        sub_values(&self, &rhs)
    }
}

impl SubAssign<&Int> for Int {
    fn sub_assign(&mut self, rhs: &Int) {
        *self = sub_values(self, rhs);
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        self.clone().neg()
    }
}

impl Neg for Int {
    type Output = Int;

    fn neg(mut self) -> Int {
        if let Repr::Num { sign, .. } = &mut self.0 {
            *sign = sign.flip();
        }
        self
    }
}
