// src/coprime_base/append.rs

use num::{BigInt, Integer, One};

use crate::core::array::IntegerArray;
use crate::core::pool::IntegerPool;
use crate::integer_math::power::two_power;
use crate::integer_math::prime_power::{gcd_ppg_pple, ppi_ppo};

/// Appends the natural coprime base of `{a, b}` to `out`.
///
/// `a` is first separated into the part coprime to `b` (emitted directly)
/// and the part sharing primes with `b`. The shared part is then unwound
/// against `b` by repeated prime-power comparison with doubled exponents,
/// recursing on strictly smaller values until everything left is pairwise
/// coprime. Every emitted element is > 1 by construction.
pub fn append_cb(pool: &mut IntegerPool, out: &mut IntegerArray, a: &BigInt, b: &BigInt) {
    // Recursion bottoms out when b has collapsed to 1.
    if b.is_one() {
        if !a.is_one() {
            out.add(a);
        }
        return;
    }

    let (a1, r) = ppi_ppo(pool, a, b);
    if !r.is_one() {
        out.add(&r);
    }
    pool.push(r);

    let (mut g, mut h, c) = gcd_ppg_pple(pool, &a1, b);
    pool.push(a1);

    let c0 = c;
    let mut x = pool.pop();
    x.clone_from(&c0);
    let mut n: u64 = 1;

    loop {
        // (g, h, c) <- (gcd, ppg, pple)(h, g^2)
        let squared = &g * &g;
        let (g_next, h_next, c) = gcd_ppg_pple(pool, &h, &squared);
        pool.push(squared);
        pool.push(g);
        pool.push(h);
        g = g_next;
        h = h_next;

        let d = c.gcd(b);
        x *= &d;

        // y <- d^(2^(n-1))
        let mut y = pool.pop();
        y.clone_from(&d);
        two_power(&mut y, n - 1);

        let rest = &c / &y;
        append_cb(pool, out, &rest, &d);
        pool.push(rest);
        pool.push(c);
        pool.push(d);
        pool.push(y);

        if h.is_one() {
            break;
        }
        n += 1;
    }
    pool.push(g);
    pool.push(h);

    let rest = b / &x;
    append_cb(pool, out, &rest, &c0);
    pool.push(rest);
    pool.push(x);
    pool.push(c0);
}
