// src/coprime_base/split.rs

use log::warn;
use num::BigInt;

use crate::core::array::IntegerArray;
use crate::core::pool::IntegerPool;
use crate::integer_math::prime_power::ppi;
use crate::integer_math::product::prod;

/// Distributes the prime content of `a` across the coprime set
/// `p[from..=to]`, appending `ppi(a, p_i)` to `ret` for each element in
/// order.
///
/// Each node of the subdivision recurses on the already-reduced value
/// `ppi(a, prod(range))` rather than on the original `a`; that reuse is
/// what keeps the total cost essentially linear in the bit length.
pub fn split(
    pool: &mut IntegerPool,
    ret: &mut IntegerArray,
    a: &BigInt,
    p: &[BigInt],
    from: usize,
    to: usize,
) {
    let n = to - from;

    let x = prod(pool, p, from, to);
    let b = ppi(pool, a, &x);
    pool.push(x);

    if n == 0 {
        ret.add(&b);
        pool.push(b);
        return;
    }

    split(pool, ret, &b, p, from, to - n / 2 - 1);
    split(pool, ret, &b, p, to - n / 2, to);
    pool.push(b);
}

/// Array version of [`split`]. An empty base is a caller error: reported,
/// and the call is a no-op.
pub fn array_split(pool: &mut IntegerPool, ret: &mut IntegerArray, a: &BigInt, p: &IntegerArray) {
    if p.is_empty() {
        warn!("array_split called with an empty base");
        return;
    }
    split(pool, ret, a, p.as_slice(), 0, p.len() - 1);
}
