// src/integer_math/product.rs

use num::{BigInt, One};

use crate::core::array::IntegerArray;
use crate::core::pool::IntegerPool;

/// Balanced product tree over `arr[from..=to]` inclusive.
///
/// Halving the range keeps the operand sizes balanced at every level,
/// which is what keeps the total bit cost essentially linear; a left fold
/// would be quadratic in the worst case.
pub fn prod(pool: &mut IntegerPool, arr: &[BigInt], from: usize, to: usize) -> BigInt {
    let n = to - from;
    if n == 0 {
        let mut rot = pool.pop();
        rot.clone_from(&arr[from]);
        return rot;
    }
    let x = prod(pool, arr, from, to - n / 2 - 1);
    let y = prod(pool, arr, to - n / 2, to);
    let rot = &x * &y;
    pool.push(x);
    pool.push(y);
    rot
}

/// Product of a whole array. The empty product is 1.
pub fn array_prod(pool: &mut IntegerPool, a: &IntegerArray) -> BigInt {
    if a.is_empty() {
        let mut rot = pool.pop();
        rot.set_one();
        rot
    } else {
        prod(pool, a.as_slice(), 0, a.len() - 1)
    }
}
