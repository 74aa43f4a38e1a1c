// src/core/factorizer.rs

use log::{debug, info, warn};

use crate::config::SieveConfig;
use crate::congruence::CongruenceExtractor;
use crate::core::cancellation_token::CancellationToken;
use crate::core::validated::{GreaterThanOne, Positive};
use crate::error::FactorizationError;
use crate::factor_base::FactorBase;
use crate::integer_math::prime_factory::PrimeFactory;
use crate::matrix::gaussian_matrix::GaussianMatrix;
use crate::relation_sieve::factorizer::RelationFactorizer;
use crate::relation_sieve::sieve::SmoothRelationSieve;

/// Pipeline position of a factorization attempt. Terminal states are
/// `Done` and `Failed`; every retry re-enters at `Sieving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorizationState {
    BuildingBase,
    Filtering,
    Sieving,
    Factoring,
    SolvingLinearSystem,
    ExtractingCongruence,
    Done,
    Failed,
}

/// Single-polynomial quadratic sieve over one u64 composite.
///
/// Sequences prime-base construction, quadratic-residue filtering, the
/// smoothness scan, relation factorization, GF(2) elimination and
/// congruence extraction, retrying the retryable failures with a doubled
/// window up to the configured budget.
pub struct QuadraticSieve {
    n: GreaterThanOne,
    search_multiplier: Positive,
    factor_base_size: GreaterThanOne,
    config: SieveConfig,
    cancel_token: CancellationToken,
    state: FactorizationState,
}

impl QuadraticSieve {
    pub fn new(
        n: u64,
        search_multiplier: u64,
        factor_base_size: u64,
    ) -> Result<Self, FactorizationError> {
        Self::with_config(
            n,
            search_multiplier,
            factor_base_size,
            SieveConfig::default(),
            CancellationToken::new(),
        )
    }

    pub fn with_config(
        n: u64,
        search_multiplier: u64,
        factor_base_size: u64,
        config: SieveConfig,
        cancel_token: CancellationToken,
    ) -> Result<Self, FactorizationError> {
        let n = GreaterThanOne::new(n).map_err(|_| {
            FactorizationError::InvalidInput(format!("n must be greater than 1, got {}", n))
        })?;
        let search_multiplier = Positive::new(search_multiplier).map_err(|_| {
            FactorizationError::InvalidInput("search multiplier must be positive".to_string())
        })?;
        let factor_base_size = GreaterThanOne::new(factor_base_size).map_err(|_| {
            FactorizationError::InvalidInput(format!(
                "factor base size must be greater than 1, got {}",
                factor_base_size
            ))
        })?;

        Ok(QuadraticSieve {
            n,
            search_multiplier,
            factor_base_size,
            config,
            cancel_token,
            state: FactorizationState::BuildingBase,
        })
    }

    pub fn state(&self) -> FactorizationState {
        self.state
    }

    pub fn factor(&mut self) -> Result<(u64, u64), FactorizationError> {
        let result = self.run();
        self.state = match result {
            Ok(_) => FactorizationState::Done,
            Err(_) => FactorizationState::Failed,
        };
        result
    }

    fn run(&mut self) -> Result<(u64, u64), FactorizationError> {
        let n = self.n.get();
        info!("factoring {} (factor base size {})", n, self.factor_base_size.get());

        self.state = FactorizationState::BuildingBase;
        let primes = PrimeFactory::first_primes(self.factor_base_size.get() as usize)?;
        let raw_base = FactorBase::from_primes(primes);

        self.state = FactorizationState::Filtering;
        if let Some(p) = raw_base.divisor_of(self.n) {
            // A base prime dividing n is already a factor; no sieving needed.
            let p = p.value();
            info!("factor base prime {} divides {}", p, n);
            return Ok((p, n / p));
        }
        let base = raw_base.filter_quadratic_residues(self.n)?;

        let base_window = self
            .search_multiplier
            .get()
            .saturating_mul(base.len() as u64);
        let max_relations = base.len() + self.config.relation_margin;

        let mut last_error = FactorizationError::NoNontrivialCongruenceFound;
        for attempt in 0..=self.config.retry_budget {
            if self.cancel_token.is_cancellation_requested() {
                return Err(FactorizationError::Cancelled);
            }
            let window = base_window
                .saturating_mul(1u64.checked_shl(attempt).unwrap_or(u64::MAX))
                .min(self.config.max_sieve_window);
            if attempt > 0 {
                info!("attempt {}: window enlarged to {}", attempt + 1, window);
            }

            self.state = FactorizationState::Sieving;
            let candidates =
                match SmoothRelationSieve::collect(self.n, &base, window, max_relations) {
                    Ok(candidates) => candidates,
                    Err(err @ FactorizationError::InsufficientSmoothRelations { .. }) => {
                        warn!("{}", err);
                        last_error = err;
                        continue;
                    }
                    Err(err) => return Err(err),
                };

            self.state = FactorizationState::Factoring;
            let relations = RelationFactorizer::factor_all(&candidates, &base)?;
            debug!("factored {} relations over the base", relations.len());

            self.state = FactorizationState::SolvingLinearSystem;
            let mut matrix = GaussianMatrix::new(&relations, base.len());
            let vectors = match matrix.null_space() {
                Ok(vectors) => vectors,
                Err(err @ FactorizationError::SingularSystemNoSolution) => {
                    warn!("{}", err);
                    last_error = err;
                    continue;
                }
                Err(err) => return Err(err),
            };

            self.state = FactorizationState::ExtractingCongruence;
            for subset in &vectors {
                match CongruenceExtractor::extract(self.n, &base, &relations, subset) {
                    Ok((p, q)) => {
                        debug_assert_eq!(p * q, n);
                        info!("{} = {} × {}", n, p, q);
                        return Ok((p, q));
                    }
                    Err(FactorizationError::TrivialCongruence) => continue,
                    Err(err) => return Err(err),
                }
            }
            warn!("all {} null-space vectors were trivial", vectors.len());
            last_error = FactorizationError::NoNontrivialCongruenceFound;
        }

        Err(last_error)
    }
}

/// Primary entry point: a nontrivial factor pair of n, or a typed failure.
/// Requires n > 1, search_multiplier > 0, factor_base_size > 1.
pub fn factorize(
    n: u64,
    search_multiplier: u64,
    factor_base_size: u64,
) -> Result<(u64, u64), FactorizationError> {
    QuadraticSieve::new(n, search_multiplier, factor_base_size)?.factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            factorize(1, 5, 10),
            Err(FactorizationError::InvalidInput(_))
        ));
        assert!(matches!(
            factorize(8051, 0, 10),
            Err(FactorizationError::InvalidInput(_))
        ));
        assert!(matches!(
            factorize(8051, 5, 1),
            Err(FactorizationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_factorize_8051() {
        let (p, q) = factorize(8051, 5, 10).unwrap();
        assert_eq!((p, q), (83, 97));
    }

    #[test]
    fn test_divisor_short_circuit() {
        assert_eq!(factorize(77, 5, 10).unwrap(), (7, 11));
        assert_eq!(factorize(100, 5, 10).unwrap(), (2, 50));
    }

    #[test]
    fn test_cancellation_before_first_window() {
        let token = CancellationToken::new();
        token.cancel();
        let mut qs = QuadraticSieve::with_config(
            8051,
            5,
            10,
            SieveConfig::default(),
            token,
        )
        .unwrap();
        assert_eq!(qs.factor(), Err(FactorizationError::Cancelled));
        assert_eq!(qs.state(), FactorizationState::Failed);
    }

    #[test]
    fn test_terminal_state_done() {
        let mut qs = QuadraticSieve::new(8051, 5, 10).unwrap();
        assert!(qs.factor().is_ok());
        assert_eq!(qs.state(), FactorizationState::Done);
    }

    #[test]
    fn test_retry_budget_beyond_shift_width_terminates() {
        // Window doubling saturates once attempt reaches the u64 shift
        // width; a large configured budget must not panic.
        let config = SieveConfig {
            retry_budget: 64,
            max_sieve_window: 32,
            ..SieveConfig::default()
        };
        let mut qs =
            QuadraticSieve::with_config(8051, 5, 2, config, CancellationToken::new()).unwrap();
        assert!(matches!(
            qs.factor(),
            Err(FactorizationError::InsufficientSmoothRelations { .. })
        ));
    }

    #[test]
    fn test_minimum_base_terminates() {
        // Base of [2, 3] degenerates to [2] after filtering for 8051; the
        // window never yields enough power-of-two relations.
        let result = factorize(8051, 5, 2);
        assert!(matches!(
            result,
            Err(FactorizationError::InsufficientSmoothRelations { .. })
                | Err(FactorizationError::NoQuadraticResidues)
        ));
    }
}
