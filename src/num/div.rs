//! Division with remainder (Knuth Algorithm D)
//!
//! `div_rem` produces a quotient and remainder over magnitudes, with two
//! fast paths: a dividend shorter than the divisor divides to zero, and a
//! single-block divisor runs one O(n) pass with a 64-bit accumulator. The
//! general case is Algorithm D: both operands are normalized by a left bit
//! shift until the divisor's top block has its high bit set, each quotient
//! block is estimated from the divisor's top two blocks and the dividend
//! window's top three, corrected downward by at most two decrements, and a
//! final add-back step repairs the rare remaining overestimate. The
//! remainder is de-normalized by the inverse right shift.
//!
//! Sign convention: both the quotient sign and the remainder sign are the
//! product of the operand signs. The remainder does not follow the
//! dividend's sign; this intentionally nonstandard rule is part of the
//! public contract.
//!
//! A zero-magnitude divisor (or a NaN operand) yields NaN quotient and
//! remainder rather than an error.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::buffer::{Block, BlockBuf};
use crate::num::core::{Int, Repr};

impl Int {
    /// Divides, returning `(quotient, remainder)` such that for a nonzero
    /// divisor `|self| = |divisor| * |quotient| + |remainder|` with
    /// `|remainder| < |divisor|`. Both results carry the product of the
    /// operand signs; both are NaN when the divisor is zero or either
    /// operand is NaN.
    pub fn div_rem(&self, divisor: &Int) -> (Int, Int) {
        match (&self.0, &divisor.0) {
            (Repr::Num { sign: su, mag: u }, Repr::Num { sign: sv, mag: v })
                if !v.is_empty() =>
            {
                let (q, r) = mag_div_rem(u, v);
                let sign = su.combine(*sv);
                (Int::from_parts(sign, q), Int::from_parts(sign, r))
            }
            _ => (Int::nan(), Int::nan()),
        }
    }
}

fn mag_div_rem(u: &BlockBuf, v: &BlockBuf) -> (BlockBuf, BlockBuf) {
    if u.len() < v.len() {
        return (BlockBuf::new(), u.clone());
    }
    if v.len() == 1 {
        return single_div(u, v[0]);
    }
    algorithm_d(u, v)
}

/// Single-pass long division by one block, most-significant first.
fn single_div(u: &BlockBuf, v: Block) -> (BlockBuf, BlockBuf) {
    let divisor = u64::from(v);
    let mut q = BlockBuf::zeroed(u.len());
    let mut rem = 0u64;
    for i in (0..u.len()).rev() {
        let window = rem << Block::BITS | u64::from(u[i]);
        q[i] = (window / divisor) as Block;
        rem = window % divisor;
    }
    q.trim();
    let mut r = BlockBuf::new();
    if rem != 0 {
        r.push(rem as Block);
    }
    (q, r)
}

/// Multi-block long division, Knuth's Algorithm D.
///
/// Requires `u.len() >= v.len() >= 2` and canonical operands.
fn algorithm_d(u: &BlockBuf, v: &BlockBuf) -> (BlockBuf, BlockBuf) {
    let m = u.len();
    let n = v.len();
    let base = 1u64 << Block::BITS;

    // Normalize so the divisor's top block has its high bit set. The
    // u64 widening keeps the complementary shift defined when s == 0.
    let s = v[n - 1].leading_zeros();
    let mut vn = BlockBuf::zeroed(n);
    let mut un = BlockBuf::zeroed(m + 1);
    for i in (1..n).rev() {
        vn[i] = (v[i] << s) | (u64::from(v[i - 1]) >> (Block::BITS - s)) as Block;
    }
    vn[0] = v[0] << s;
    un[m] = (u64::from(u[m - 1]) >> (Block::BITS - s)) as Block;
    for i in (1..m).rev() {
        un[i] = (u[i] << s) | (u64::from(u[i - 1]) >> (Block::BITS - s)) as Block;
    }
    un[0] = u[0] << s;

    let top = u64::from(vn[n - 1]);
    let next = u64::from(vn[n - 2]);
    let mut q = BlockBuf::zeroed(m - n + 1);

    for j in (0..=m - n).rev() {
        // Estimate the quotient block from the top two divisor blocks and
        // the top three blocks of the current dividend window, then lower
        // the estimate by at most two.
        let head = (u64::from(un[j + n]) << Block::BITS) | u64::from(un[j + n - 1]);
        let mut qhat = head / top;
        let mut rhat = head - qhat * top;
        while qhat >= base
            || qhat * next > (rhat << Block::BITS) + u64::from(un[j + n - 2])
        {
            qhat -= 1;
            rhat += top;
            if rhat >= base {
                break;
            }
        }

        // Multiply and subtract from the window, rippling the borrow.
        let mut borrow = 0i64;
        for i in 0..n {
            let p = qhat * u64::from(vn[i]);
            let t = i64::from(un[i + j]) - borrow - (p & 0xFFFF_FFFF) as i64;
            un[i + j] = t as Block;
            borrow = (p >> Block::BITS) as i64 - (t >> Block::BITS);
        }
        let t = i64::from(un[j + n]) - borrow;
        un[j + n] = t as Block;

        q[j] = qhat as Block;
        if t < 0 {
            // Estimate was one too high: put one divisor back.
            q[j] -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let wide = u64::from(un[i + j]) + u64::from(vn[i]) + carry;
                un[i + j] = wide as Block;
                carry = wide >> Block::BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as Block);
        }
    }
    q.trim();

    // De-normalize the remainder.
    let mut r = BlockBuf::zeroed(n);
    for i in 0..n - 1 {
        r[i] = (un[i] >> s) | (u64::from(un[i + 1]) << (Block::BITS - s)) as Block;
    }
    r[n - 1] = un[n - 1] >> s;
    r.trim();
    (q, r)
}

impl Div<&Int> for &Int {
    type Output = Int;

    fn div(self, rhs: &Int) -> Int {
        self.div_rem(rhs).0
    }
}

impl Div for Int {
    type Output = Int;

    fn div(self, rhs: Int) -> Int {
        self.div_rem(&rhs).0
    }
}

impl DivAssign<&Int> for Int {
    fn div_assign(&mut self, rhs: &Int) {
        *self = self.div_rem(rhs).0;
    }
}

impl Rem<&Int> for &Int {
    type Output = Int;

    fn rem(self, rhs: &Int) -> Int {
        self.div_rem(rhs).1
    }
}

impl Rem for Int {
    type Output = Int;

    fn rem(self, rhs: Int) -> Int {
        self.div_rem(&rhs).1
    }
}

impl RemAssign<&Int> for Int {
    fn rem_assign(&mut self, rhs: &Int) {
        *self = self.div_rem(rhs).1;
    }
}
