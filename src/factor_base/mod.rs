// src/factor_base/mod.rs

use log::{debug, info};
use rayon::prelude::*;

use crate::core::validated::{GreaterThanOne, Prime};
use crate::error::FactorizationError;
use crate::integer_math::legendre::is_quadratic_residue;

/// Ordered, ascending sequence of distinct primes. The index of a prime in
/// this sequence is the canonical column index for the matrix stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorBase {
    primes: Vec<Prime>,
}

impl FactorBase {
    pub fn from_primes(primes: Vec<Prime>) -> Self {
        debug_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        FactorBase { primes }
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn primes(&self) -> &[Prime] {
        &self.primes
    }

    pub fn largest(&self) -> Option<Prime> {
        self.primes.last().copied()
    }

    /// A base prime that divides n outright, if any. Such a prime is a
    /// factor of n in its own right and makes sieving unnecessary.
    pub fn divisor_of(&self, n: GreaterThanOne) -> Option<Prime> {
        self.primes
            .iter()
            .copied()
            .find(|p| n.get() % p.value() == 0 && p.value() < n.get())
    }

    /// Keeps the primes for which n is a quadratic residue, preserving
    /// order. The per-prime tests are independent and run in parallel.
    pub fn filter_quadratic_residues(
        &self,
        n: GreaterThanOne,
    ) -> Result<FactorBase, FactorizationError> {
        let passing: Vec<Prime> = self
            .primes
            .par_iter()
            .copied()
            .filter(|p| is_quadratic_residue(n.get(), p.value()))
            .collect();

        if passing.is_empty() {
            return Err(FactorizationError::NoQuadraticResidues);
        }

        info!(
            "factor base: {} of {} primes admit {} as a quadratic residue, max = {}",
            passing.len(),
            self.primes.len(),
            n.get(),
            passing[passing.len() - 1]
        );
        debug!(
            "active primes: {:?}",
            passing.iter().map(|p| p.value()).collect::<Vec<_>>()
        );

        Ok(FactorBase { primes: passing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer_math::prime_factory::PrimeFactory;

    fn base_of(count: usize) -> FactorBase {
        FactorBase::from_primes(PrimeFactory::first_primes(count).unwrap())
    }

    #[test]
    fn test_filter_preserves_order_and_keeps_two() {
        let n = GreaterThanOne::new(8051).unwrap();
        let active = base_of(10).filter_quadratic_residues(n).unwrap();
        let values: Vec<u64> = active.primes().iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![2, 5, 7, 13, 23]);
    }

    #[test]
    fn test_filter_for_3599() {
        let n = GreaterThanOne::new(3599).unwrap();
        let active = base_of(10).filter_quadratic_residues(n).unwrap();
        let values: Vec<u64> = active.primes().iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![2, 5, 7]);
    }

    #[test]
    fn test_divisor_short_circuit() {
        let n = GreaterThanOne::new(77).unwrap();
        let base = base_of(10);
        assert_eq!(base.divisor_of(n).unwrap().value(), 7);

        let coprime = GreaterThanOne::new(8051).unwrap();
        assert!(base.divisor_of(coprime).is_none());
    }

    #[test]
    fn test_divisor_ignores_n_itself() {
        let n = GreaterThanOne::new(13).unwrap();
        assert!(base_of(10).divisor_of(n).is_none());
    }
}
