// src/integer_math/prime_power.rs

use num::{BigInt, Integer, One};

use crate::core::pool::IntegerPool;

/// Computes `(gcd(a, b), ppi(a, b), ppo(a, b))` for positive `a` and `b`.
///
/// `ppi(a, b)` is the largest divisor of `a` built only from primes that
/// divide `b`; `ppo(a, b)` is the complementary part `a / ppi(a, b)`.
/// Each round folds `gcd(ppi, ppo)` back into `ppi`, so the iteration
/// count is bounded by the largest prime exponent in `a`.
pub fn gcd_ppi_ppo(pool: &mut IntegerPool, a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut ppi = a.gcd(b);
    let mut gcd = pool.pop();
    gcd.clone_from(&ppi);
    let mut ppo = a / &ppi;
    loop {
        let g = ppi.gcd(&ppo);
        if g.is_one() {
            break;
        }
        ppi *= &g;
        ppo /= &g;
    }
    (gcd, ppi, ppo)
}

/// Computes `(ppi(a, b), ppo(a, b))`, discarding the gcd.
pub fn ppi_ppo(pool: &mut IntegerPool, a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (gcd, ppi, ppo) = gcd_ppi_ppo(pool, a, b);
    pool.push(gcd);
    (ppi, ppo)
}

/// Computes `ppi(a, b)` alone.
pub fn ppi(pool: &mut IntegerPool, a: &BigInt, b: &BigInt) -> BigInt {
    let (gcd, ppi, ppo) = gcd_ppi_ppo(pool, a, b);
    pool.push(gcd);
    pool.push(ppo);
    ppi
}

/// Computes `(gcd(a, b), ppg(a, b), pple(a, b))` for positive `a` and `b`.
///
/// `ppg(a, b)` is the largest divisor of `a` whose per-prime exponents
/// strictly exceed those of `b`; `pple(a, b)` is `a / ppg(a, b)`. Same
/// shape as [`gcd_ppi_ppo`] with the roles of the two parts swapped.
pub fn gcd_ppg_pple(pool: &mut IntegerPool, a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut pple = a.gcd(b);
    let mut gcd = pool.pop();
    gcd.clone_from(&pple);
    let mut ppg = a / &pple;
    loop {
        let g = ppg.gcd(&pple);
        if g.is_one() {
            break;
        }
        ppg *= &g;
        pple /= &g;
    }
    (gcd, ppg, pple)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_gcd_ppi_ppo_360_over_6() {
        // 360 = 2^3 * 3^2 * 5; the primes of 6 contribute 8 * 9 = 72.
        let mut pool = IntegerPool::new();
        let (gcd, ppi, ppo) = gcd_ppi_ppo(&mut pool, &big(360), &big(6));
        assert_eq!(gcd, big(6));
        assert_eq!(ppi, big(72));
        assert_eq!(ppo, big(5));
    }

    #[test]
    fn test_ppi_ppo_multiply_back_and_are_coprime() {
        let mut pool = IntegerPool::new();
        let a = big(2 * 2 * 3 * 7 * 7 * 11);
        let b = big(7 * 13);
        let (ppi, ppo) = ppi_ppo(&mut pool, &a, &b);
        assert_eq!(&ppi * &ppo, a);
        assert_eq!(ppi.gcd(&ppo), big(1));
        assert_eq!(ppi, big(49));
    }

    #[test]
    fn test_ppi_against_one_is_one() {
        let mut pool = IntegerPool::new();
        assert_eq!(ppi(&mut pool, &big(360), &big(1)), big(1));
    }

    #[test]
    fn test_gcd_ppg_pple_splits_by_exponent() {
        // a = 2^2 * 3, b = 2 * 3^2: only the exponent of 2 in a exceeds b's.
        let mut pool = IntegerPool::new();
        let (gcd, ppg, pple) = gcd_ppg_pple(&mut pool, &big(12), &big(18));
        assert_eq!(gcd, big(6));
        assert_eq!(ppg, big(4));
        assert_eq!(pple, big(3));
    }

    #[test]
    fn test_gcd_ppg_pple_of_equal_inputs() {
        // No exponent of a exceeds its own, so ppg = 1 and pple = a.
        let mut pool = IntegerPool::new();
        let (_, ppg, pple) = gcd_ppg_pple(&mut pool, &big(360), &big(360));
        assert_eq!(ppg, big(1));
        assert_eq!(pple, big(360));
    }
}
