// src/integer_math/power.rs

use num::BigInt;

/// Replaces `rot` with `rot^(2^n)` by `n` in-place squarings.
///
/// `n = 0` leaves the value untouched.
pub fn two_power(rot: &mut BigInt, n: u64) {
    for _ in 0..n {
        let square = &*rot * &*rot;
        *rot = square;
    }
}
