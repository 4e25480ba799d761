// src/factor/find.rs

use log::warn;
use num::{BigInt, One};

use crate::coprime_base::split::array_split;
use crate::core::array::IntegerArray;
use crate::core::pool::IntegerPool;
use crate::factor::factor_triple::FactorTriple;
use crate::factor::reduce::reduce;
use crate::integer_math::prime_power::{ppi, ppi_ppo};
use crate::integer_math::product::{array_prod, prod};

/// Factors `a` over the coprime set `p[from..=to]`, where `a0` is the
/// original input the recursion started from.
///
/// At a leaf, `a` must reduce to 1 over the single base element; any
/// leftover means a prime of `a` lies outside the base, which fails the
/// whole recursion. When the leaf confirms a base element that is not
/// `a0` itself, the triple `(a0, p, a0/p)` is recorded and the routine
/// also returns failure so the surrounding conjunction short-circuits:
/// one exposed factor per original input.
pub fn find_factor(
    pool: &mut IntegerPool,
    out: &mut Vec<FactorTriple>,
    a0: &BigInt,
    a: &BigInt,
    p: &[BigInt],
    from: usize,
    to: usize,
) -> bool {
    let n = to - from;
    if n == 0 {
        let (_, c) = reduce(pool, &p[from], a);
        let mut ok = true;
        if !c.is_one() {
            ok = false;
        } else if *a0 != p[from] {
            let cofactor = a0 / &p[from];
            out.push(FactorTriple::new(a0, &p[from], &cofactor));
            ok = false;
        }
        pool.push(c);
        return ok;
    }

    let y = prod(pool, p, from, to - n / 2 - 1);
    let (b, c) = ppi_ppo(pool, a, &y);
    pool.push(y);

    let ok = find_factor(pool, out, a0, &b, p, from, to - n / 2 - 1)
        && find_factor(pool, out, a0, &c, p, to - n / 2, to);
    pool.push(b);
    pool.push(c);
    ok
}

/// Factors `a` over the coprime base `p`. An empty base is reported and
/// fails.
pub fn array_find_factor(
    pool: &mut IntegerPool,
    out: &mut Vec<FactorTriple>,
    a: &BigInt,
    p: &IntegerArray,
) -> bool {
    if p.is_empty() {
        warn!("array_find_factor called with an empty base");
        return false;
    }
    find_factor(pool, out, a, a, p.as_slice(), 0, p.len() - 1)
}

/// Factors every element of `s[from..=to]` over the base `p`, recording
/// at most one triple per element that splits.
///
/// At each node the base is pruned to the elements that fully account
/// for their share of the range's product; primes absent from the range
/// are never tested further down.
pub fn find_factors(
    pool: &mut IntegerPool,
    out: &mut Vec<FactorTriple>,
    s: &[BigInt],
    from: usize,
    to: usize,
    p: &IntegerArray,
) {
    let n = to - from;

    let x = array_prod(pool, p);
    let y = prod(pool, s, from, to);
    let z = ppi(pool, &x, &y);
    pool.push(x);

    let mut d = IntegerArray::with_capacity(p.len());
    array_split(pool, &mut d, &z, p);
    pool.push(z);

    let mut q = IntegerArray::with_capacity(p.len());
    for i in 0..p.len() {
        if d[i] == p[i] {
            q.add(&p[i]);
        }
    }

    if n == 0 {
        array_find_factor(pool, out, &y, &q);
    } else {
        find_factors(pool, out, s, from, to - n / 2 - 1, &q);
        find_factors(pool, out, s, to - n / 2, to, &q);
    }
    pool.push(y);
}

/// Factors each element of a set over the base `p`. Empty input is
/// reported and ignored.
pub fn array_find_factors(
    pool: &mut IntegerPool,
    out: &mut Vec<FactorTriple>,
    s: &IntegerArray,
    p: &IntegerArray,
) {
    if s.is_empty() {
        warn!("array_find_factors called with an empty input set");
        return;
    }
    find_factors(pool, out, s.as_slice(), 0, s.len() - 1, p);
}
