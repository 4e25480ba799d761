// src/factor/reduce.rs

use num::{BigInt, Zero};

use crate::core::pool::IntegerPool;

/// Strips every factor `p` out of `a`: returns `(i, c)` with
/// `a = p^i * c` and `p` not dividing `c`.
///
/// Recursing on `(p^2, a/p)` finds the exponent with O(log i) divisions
/// instead of i. `p` must be greater than 1.
pub fn reduce(pool: &mut IntegerPool, p: &BigInt, a: &BigInt) -> (u64, BigInt) {
    if !(a % p).is_zero() {
        let mut c = pool.pop();
        c.clone_from(a);
        return (0, c);
    }

    let p_squared = p * p;
    let shrunk = a / p;
    let (j, b) = reduce(pool, &p_squared, &shrunk);
    pool.push(p_squared);
    pool.push(shrunk);

    if (&b % p).is_zero() {
        let c = &b / p;
        pool.push(b);
        (2 * j + 2, c)
    } else {
        (2 * j + 1, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(p: u64, a: u64) -> (u64, BigInt) {
        let mut pool = IntegerPool::new();
        reduce(&mut pool, &BigInt::from(p), &BigInt::from(a))
    }

    #[test]
    fn test_reduce_40_by_2() {
        // 40 = 2^3 * 5
        assert_eq!(run(2, 40), (3, BigInt::from(5)));
    }

    #[test]
    fn test_reduce_nondivisor_leaves_a_untouched() {
        assert_eq!(run(3, 40), (0, BigInt::from(40)));
    }

    #[test]
    fn test_reduce_exact_prime_power() {
        assert_eq!(run(7, 343), (3, BigInt::from(1)));
        assert_eq!(run(2, 1024), (10, BigInt::from(1)));
    }

    #[test]
    fn test_reduce_composite_base() {
        // 6^2 * 5 = 180; the base need not be prime.
        assert_eq!(run(6, 180), (2, BigInt::from(5)));
    }
}
