//! Karatsuba multiplication
//!
//! The base case multiplies a multi-block magnitude by a single block with
//! carry propagation. The recursive case splits both operands at
//! `m = max(len1, len2) / 2` blocks and combines three recursive products:
//!
//! ```text
//! z2 = high1 * high2
//! z0 = low1 * low2
//! z1 = (low1 + high1) * (low2 + high2) - z2 - z0
//! product = (z2 << 2m blocks) + (z1 << m blocks) + z0
//! ```
//!
//! Three recursive multiplications per level instead of four makes the
//! whole multiply sub-quadratic in the operand length. The product sign is
//! the product of the operand signs, applied after the unsigned multiply.

use std::ops::{Mul, MulAssign};

use crate::buffer::{Block, BlockBuf};
use crate::num::addsub::{mag_add, mag_sub};
use crate::num::core::{Int, Repr};

/// Schoolbook multiply of a magnitude by one block.
pub(crate) fn single_mul(mag: &BlockBuf, factor: Block) -> BlockBuf {
    let mut out = BlockBuf::new();
    let wide_factor = u64::from(factor);
    let mut carry = 0u64;
    let mut i = 0;
    while i < mag.len() || carry != 0 {
        let wide = u64::from(mag.get(i)) * wide_factor + carry;
        out.push(wide as Block);
        carry = wide >> Block::BITS;
        i += 1;
    }
    out.trim();
    out
}

/// Shifts a magnitude left by whole blocks (multiplies by 2^(32*blocks)).
fn block_shift(mag: &mut BlockBuf, blocks: usize) {
    if mag.is_empty() || blocks == 0 {
        return;
    }
    for _ in 0..blocks {
        mag.push(0);
    }
    for i in (blocks..mag.len()).rev() {
        mag.swap(i, i - blocks);
    }
}

/// Splits off the `m` least-significant blocks; returns (high, low), both
/// canonical.
fn split(mag: &BlockBuf, m: usize) -> (BlockBuf, BlockBuf) {
    let mut low = BlockBuf::new();
    let mut high = BlockBuf::new();
    for i in 0..m.min(mag.len()) {
        low.push(mag[i]);
    }
    for i in m..mag.len() {
        high.push(mag[i]);
    }
    low.trim();
    high.trim();
    (high, low)
}

/// Unsigned Karatsuba product of two canonical magnitudes.
pub(crate) fn karatsuba(a: &BlockBuf, b: &BlockBuf) -> BlockBuf {
    if a.is_empty() || b.is_empty() {
        return BlockBuf::new();
    }
    if a.len() == 1 {
        return single_mul(b, a[0]);
    }
    if b.len() == 1 {
        return single_mul(a, b[0]);
    }

    let m = a.len().max(b.len()) / 2;
    let (high1, low1) = split(a, m);
    let (high2, low2) = split(b, m);

    let z2 = karatsuba(&high1, &high2);
    let z0 = karatsuba(&low1, &low2);
    let cross = karatsuba(&mag_add(&low1, &high1), &mag_add(&low2, &high2));
    let z1 = mag_sub(&cross, &mag_add(&z2, &z0));

    let mut acc = z2;
    block_shift(&mut acc, m);
    acc = mag_add(&acc, &z1);
    block_shift(&mut acc, m);
    mag_add(&acc, &z0)
}

impl Mul<&Int> for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Int {
        match (&self.0, &rhs.0) {
            (Repr::Num { sign: sa, mag: ma }, Repr::Num { sign: sb, mag: mb }) => {
                Int::from_parts(sa.combine(*sb), karatsuba(ma, mb))
            }
            _ => Int::nan(),
        }
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Int) -> Int {
        &self * &rhs
    }
}

impl MulAssign<&Int> for Int {
    fn mul_assign(&mut self, rhs: &Int) {
        *self = &*self * rhs;
    }
}
