// src/coprime_base/extend.rs

use log::warn;
use num::{BigInt, One};

use crate::coprime_base::append::append_cb;
use crate::coprime_base::split::array_split;
use crate::core::array::IntegerArray;
use crate::core::pool::IntegerPool;
use crate::integer_math::prime_power::ppi_ppo;
use crate::integer_math::product::array_prod;

/// Extends the coprime set `p` by one integer `b`, appending the natural
/// coprime base of `p ∪ {b}` to `ret`.
///
/// The part of `b` coprime to every element of `p` is emitted directly;
/// the rest is distributed over `p` with [`array_split`] and refined
/// pairwise with [`append_cb`].
pub fn cbextend(pool: &mut IntegerPool, ret: &mut IntegerArray, p: &IntegerArray, b: &BigInt) {
    if p.is_empty() {
        if !b.is_one() {
            ret.add(b);
        }
        return;
    }

    let x = array_prod(pool, p);
    let (a, r) = ppi_ppo(pool, b, &x);
    pool.push(x);

    if !r.is_one() {
        ret.add(&r);
    }
    pool.push(r);

    let mut s = IntegerArray::with_capacity(p.len());
    array_split(pool, &mut s, &a, p);
    pool.push(a);

    // A size mismatch means a lower layer is broken; refuse to emit a
    // corrupted base.
    if p.len() != s.len() {
        warn!(
            "cbextend: split produced {} parts for a base of {} elements",
            s.len(),
            p.len()
        );
        return;
    }
    for i in 0..p.len() {
        append_cb(pool, ret, &p[i], &s[i]);
    }
}
