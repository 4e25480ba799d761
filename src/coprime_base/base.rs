// src/coprime_base/base.rs

use log::warn;
use num::{BigInt, One, Zero};

use crate::coprime_base::merge::cbmerge;
use crate::core::array::IntegerArray;
use crate::core::pool::IntegerPool;

/// Ranges smaller than this are not worth a rayon task.
const PARALLEL_CUTOFF: usize = 8;

/// Appends the natural coprime base of `s[from..=to]` to `ret`.
///
/// The range is halved, each half is solved recursively, and the two
/// sub-bases are merged with [`cbmerge`]. Zero entries are invalid and
/// skipped with a warning; entries equal to 1 are absorbed.
pub fn cb(pool: &mut IntegerPool, ret: &mut IntegerArray, s: &[BigInt], from: usize, to: usize) {
    let n = to - from;
    if n == 0 {
        if s[from].is_zero() {
            warn!("cb: skipping zero entry");
        } else if !s[from].is_one() {
            ret.add(&s[from]);
        }
        return;
    }

    let mut p = IntegerArray::with_capacity(n);
    let mut q = IntegerArray::with_capacity(n);
    cb(pool, &mut p, s, from, to - n / 2 - 1);
    cb(pool, &mut q, s, to - n / 2, to);
    cbmerge(pool, ret, &p, &q);
}

/// Parallel variant of [`cb`]: the two half-ranges run as sibling rayon
/// tasks and the merge stays on the calling thread.
///
/// The task that remains on the calling worker keeps using `pool`; the
/// task that may be stolen by another worker builds into its own freshly
/// initialized pool, so no pool is ever shared across threads. Ranges
/// below a small cutoff fall back to the sequential recursion.
pub fn cb_par(pool: &mut IntegerPool, ret: &mut IntegerArray, s: &[BigInt], from: usize, to: usize) {
    let n = to - from;
    if n < PARALLEL_CUTOFF {
        cb(pool, ret, s, from, to);
        return;
    }

    let mid = to - n / 2 - 1;
    let right_from = to - n / 2;
    let (p, q) = rayon::join(
        {
            let pool = &mut *pool;
            move || {
                let mut p = IntegerArray::with_capacity(n);
                cb_par(pool, &mut p, s, from, mid);
                p
            }
        },
        move || {
            let mut own_pool = IntegerPool::new();
            let mut q = IntegerArray::with_capacity(n);
            cb_par(&mut own_pool, &mut q, s, right_from, to);
            q
        },
    );
    cbmerge(pool, ret, &p, &q);
}

/// Natural coprime base of a whole array. Empty input is reported and
/// ignored.
pub fn array_cb(pool: &mut IntegerPool, ret: &mut IntegerArray, s: &IntegerArray) {
    if s.is_empty() {
        warn!("array_cb called with an empty input set");
        return;
    }
    cb(pool, ret, s.as_slice(), 0, s.len() - 1);
}

/// Parallel version of [`array_cb`].
pub fn array_cb_par(pool: &mut IntegerPool, ret: &mut IntegerArray, s: &IntegerArray) {
    if s.is_empty() {
        warn!("array_cb_par called with an empty input set");
        return;
    }
    cb_par(pool, ret, s.as_slice(), 0, s.len() - 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array_of(values: &[u64]) -> IntegerArray {
        IntegerArray::from(values.iter().map(|&v| BigInt::from(v)).collect::<Vec<_>>())
    }

    fn sorted(a: &IntegerArray) -> Vec<BigInt> {
        let mut values: Vec<BigInt> = a.iter().cloned().collect();
        values.sort();
        values
    }

    fn compute(values: &[u64]) -> Vec<BigInt> {
        let mut pool = IntegerPool::new();
        let mut ret = IntegerArray::new();
        array_cb(&mut pool, &mut ret, &array_of(values));
        sorted(&ret)
    }

    #[test]
    fn test_cb_of_single_element() {
        assert_eq!(compute(&[12]), vec![BigInt::from(12)]);
        assert_eq!(compute(&[1]), Vec::<BigInt>::new());
        // Zero is invalid input; it is skipped with a diagnostic.
        assert_eq!(compute(&[0]), Vec::<BigInt>::new());
    }

    #[test]
    fn test_cb_of_empty_array_is_a_noop() {
        let mut pool = IntegerPool::new();
        let mut ret = IntegerArray::new();
        array_cb(&mut pool, &mut ret, &IntegerArray::new());
        assert!(ret.is_empty());
    }

    #[test]
    fn test_cb_absorbs_ones() {
        assert_eq!(compute(&[1, 6, 1, 10, 1]), compute(&[6, 10]));
    }

    #[test]
    fn test_cb_parallel_matches_sequential() {
        let values: Vec<u64> = (2u64..40).map(|k| k * (k + 1)).collect();
        let input = IntegerArray::from(values.iter().map(|&v| BigInt::from(v)).collect::<Vec<_>>());

        let mut pool = IntegerPool::new();
        let mut serial = IntegerArray::new();
        array_cb(&mut pool, &mut serial, &input);

        let mut par_pool = IntegerPool::new();
        let mut parallel = IntegerArray::new();
        array_cb_par(&mut par_pool, &mut parallel, &input);

        assert_eq!(sorted(&serial), sorted(&parallel));
    }
}
