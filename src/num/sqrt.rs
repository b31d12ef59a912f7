//! Integer square root
//!
//! Newton iteration `x <- (x + n/x) / 2` over the division engine. The
//! initial guess has roughly half the input's block count with its top
//! block set to 1, which always overshoots the true root, so the sequence
//! decreases monotonically until consecutive iterates differ by at most
//! one; the earlier iterate is then the floor of the root. Convergence
//! takes a number of steps logarithmic in the input's bit length.
//!
//! The calculator exposes this as its unary `~` operator; despite the
//! complement-style spelling it computes the square root, not a bitwise
//! complement, and always has.

use crate::buffer::BlockBuf;
use crate::num::core::{Int, Repr, Sign};

impl Int {
    /// Floor of the square root.
    ///
    /// Negative input has no root in this domain and yields NaN, as does a
    /// NaN input. Zero's stored sign is ignored.
    ///
    /// ```
    /// use longnum::Int;
    ///
    /// assert_eq!(Int::from_hex("91").isqrt().to_string(), "C");
    /// assert!(Int::from_hex("-4").isqrt().is_nan());
    /// ```
    pub fn isqrt(&self) -> Int {
        let (sign, mag) = match &self.0 {
            Repr::Nan => return Int::nan(),
            Repr::Num { sign, mag } => (*sign, mag),
        };
        if mag.is_empty() {
            return Int::zero();
        }
        if sign == Sign::Neg {
            return Int::nan();
        }

        // Overshooting first guess: 2^(32 * ((n+1)/2)).
        let guess_len = (mag.len() + 1) / 2 + 1;
        let mut guess = BlockBuf::zeroed(guess_len);
        guess[guess_len - 1] = 1;
        let mut x = Int::from_parts(Sign::Pos, guess);

        let zero = Int::zero();
        let one = Int::from(1i64);
        loop {
            let mut next = &x + &(self / &x);
            next.halve();
            let diff = &next - &x;
            if diff == zero || diff == one {
                return x;
            }
            x = next;
        }
    }

    /// Halves in place: right shift by one bit, propagating the low bit of
    /// each more-significant block into the top bit of the next lower one.
    fn halve(&mut self) {
        if let Repr::Num { mag, .. } = &mut self.0 {
            for i in 0..mag.len() {
                let carry_in = mag.get(i + 1) & 1;
                mag[i] = (mag[i] >> 1) | (carry_in << 31);
            }
            mag.trim();
        }
    }
}
