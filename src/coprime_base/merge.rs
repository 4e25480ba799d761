// src/coprime_base/merge.rs

use log::warn;

use crate::coprime_base::extend::cbextend;
use crate::core::array::IntegerArray;
use crate::core::pool::IntegerPool;
use crate::integer_math::product::array_prod;

fn bit(i: usize, k: usize) -> bool {
    k & (1 << i) != 0
}

/// Merges two coprime sets, appending the natural coprime base of
/// `p ∪ q` to `ret`.
///
/// Elements of `q` are folded in along their index bits: round `i`
/// extends the running base by the product of the `q_k` with bit `i`
/// clear, then by the product of those with bit `i` set, so
/// `ceil(log2 |q|)` rounds separate every element of `q` from every
/// other. An empty `p` or `q` degrades to copying the other.
pub fn cbmerge(pool: &mut IntegerPool, ret: &mut IntegerArray, p: &IntegerArray, q: &IntegerArray) {
    if p.is_empty() && q.is_empty() {
        warn!("cbmerge called with two empty bases");
        return;
    }
    if q.is_empty() {
        warn!("cbmerge: q is empty, copying p");
        ret.append_all(p);
        return;
    }
    if p.is_empty() {
        warn!("cbmerge: p is empty, copying q");
        ret.append_all(q);
        return;
    }

    let n = q.len();
    // Smallest b >= 1 with 2^b >= n.
    let mut b = 1;
    while (1usize << b) < n {
        b += 1;
    }

    let mut s = IntegerArray::with_capacity(p.len());
    s.append_all(p);

    let mut r = IntegerArray::with_capacity(n);
    for i in 0..b {
        r.clear();
        for k in 0..n {
            if !bit(i, k) {
                r.add(&q[k]);
            }
        }
        let x = array_prod(pool, &r);
        let mut t = IntegerArray::with_capacity(s.len());
        cbextend(pool, &mut t, &s, &x);
        pool.push(x);

        r.clear();
        for k in 0..n {
            if bit(i, k) {
                r.add(&q[k]);
            }
        }
        let x = array_prod(pool, &r);
        s = IntegerArray::with_capacity(t.len());
        cbextend(pool, &mut s, &t, &x);
        pool.push(x);
    }

    ret.append_all(&s);
}
