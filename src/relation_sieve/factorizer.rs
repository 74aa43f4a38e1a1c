// src/relation_sieve/factorizer.rs

use rayon::prelude::*;

use crate::error::FactorizationError;
use crate::factor_base::FactorBase;
use crate::relation_sieve::relation::Relation;
use crate::relation_sieve::sieve::SmoothCandidate;

// All numbers below 2^64.8 have 15 or fewer distinct prime factors.
// http://oeis.org/A001221
pub const MAX_DISTINCT_PRIME_FACTORS: usize = 15;

pub struct RelationFactorizer;

impl RelationFactorizer {
    /// Fully factors a confirmed-smooth y over the base. A residual other
    /// than 1 means the sieve admitted a relation that was not smooth; that
    /// is an internal-consistency error, never a normal outcome.
    pub fn factor(
        candidate: SmoothCandidate,
        base: &FactorBase,
    ) -> Result<Relation, FactorizationError> {
        let mut factors: Vec<(usize, u32)> = Vec::with_capacity(MAX_DISTINCT_PRIME_FACTORS);
        let mut remaining = candidate.y;

        for (index, prime) in base.primes().iter().enumerate() {
            let p = prime.value();
            if remaining % p != 0 {
                continue;
            }
            let mut exponent = 0u32;
            while remaining % p == 0 {
                remaining /= p;
                exponent += 1;
            }
            factors.push((index, exponent));
            if remaining == 1 {
                break;
            }
        }

        if remaining != 1 {
            return Err(FactorizationError::UnexpectedFactorizationFailure(format!(
                "y = {} admitted as smooth left residual {}",
                candidate.y, remaining
            )));
        }

        let mut exponents = vec![0u32; base.len()];
        for (index, exponent) in factors {
            exponents[index] = exponent;
        }
        Ok(Relation {
            x: candidate.x,
            y: candidate.y,
            exponents,
        })
    }

    /// Factors every candidate in parallel, preserving ascending-x order.
    pub fn factor_all(
        candidates: &[SmoothCandidate],
        base: &FactorBase,
    ) -> Result<Vec<Relation>, FactorizationError> {
        candidates
            .par_iter()
            .map(|&c| Self::factor(c, base))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validated::GreaterThanOne;
    use crate::integer_math::prime_factory::PrimeFactory;

    fn active_base_8051() -> FactorBase {
        FactorBase::from_primes(PrimeFactory::first_primes(10).unwrap())
            .filter_quadratic_residues(GreaterThanOne::new(8051).unwrap())
            .unwrap()
    }

    #[test]
    fn test_factor_recovers_exponents() {
        // Active base for 8051 is [2, 5, 7, 13, 23].
        let base = active_base_8051();
        let rel = RelationFactorizer::factor(SmoothCandidate { x: 99, y: 1750 }, &base).unwrap();
        assert_eq!(rel.exponents, vec![1, 3, 1, 0, 0]); // 1750 = 2 · 5³ · 7

        let rel = RelationFactorizer::factor(SmoothCandidate { x: 90, y: 49 }, &base).unwrap();
        assert_eq!(rel.exponents, vec![0, 0, 2, 0, 0]); // 49 = 7²
    }

    #[test]
    fn test_exponents_reconstruct_y() {
        let base = active_base_8051();
        for candidate in [
            SmoothCandidate { x: 91, y: 230 },
            SmoothCandidate { x: 93, y: 598 },
            SmoothCandidate { x: 106, y: 3185 },
        ] {
            let rel = RelationFactorizer::factor(candidate, &base).unwrap();
            let rebuilt: u64 = rel
                .exponents
                .iter()
                .zip(base.primes())
                .map(|(&e, p)| p.value().pow(e))
                .product();
            assert_eq!(rebuilt, candidate.y);
        }
    }

    #[test]
    fn test_non_smooth_input_is_an_invariant_violation() {
        let base = active_base_8051();
        let result = RelationFactorizer::factor(SmoothCandidate { x: 92, y: 413 }, &base);
        assert!(matches!(
            result,
            Err(FactorizationError::UnexpectedFactorizationFailure(_))
        ));
    }

    #[test]
    fn test_factor_all_preserves_order() {
        let base = active_base_8051();
        let candidates = [
            SmoothCandidate { x: 90, y: 49 },
            SmoothCandidate { x: 91, y: 230 },
            SmoothCandidate { x: 93, y: 598 },
        ];
        let relations = RelationFactorizer::factor_all(&candidates, &base).unwrap();
        let xs: Vec<u64> = relations.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![90, 91, 93]);
    }
}
