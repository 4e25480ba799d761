// src/factor/factor_triple.rs

use num::BigInt;
use serde::{Deserialize, Serialize};

/// One exposed factorization: `original = factor * cofactor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorTriple {
    pub original: BigInt,
    pub factor: BigInt,
    pub cofactor: BigInt,
}

impl FactorTriple {
    pub fn new(original: &BigInt, factor: &BigInt, cofactor: &BigInt) -> Self {
        FactorTriple {
            original: original.clone(),
            factor: factor.clone(),
            cofactor: cofactor.clone(),
        }
    }

    /// True when the recorded parts actually multiply back to the
    /// original.
    pub fn is_consistent(&self) -> bool {
        &self.factor * &self.cofactor == self.original
    }
}

impl std::fmt::Display for FactorTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} = {} * {}", self.original, self.factor, self.cofactor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_check() {
        let good = FactorTriple::new(&BigInt::from(35), &BigInt::from(5), &BigInt::from(7));
        assert!(good.is_consistent());
        let bad = FactorTriple::new(&BigInt::from(35), &BigInt::from(5), &BigInt::from(11));
        assert!(!bad.is_consistent());
    }

    #[test]
    fn test_display() {
        let triple = FactorTriple::new(&BigInt::from(35), &BigInt::from(5), &BigInt::from(7));
        assert_eq!(triple.to_string(), "35 = 5 * 7");
    }
}
