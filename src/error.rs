// src/error.rs

use thiserror::Error;

/// Every way a factorization attempt can fail.
///
/// `InsufficientSmoothRelations`, `SingularSystemNoSolution` and
/// `TrivialCongruence` are retryable: the orchestrator widens the sieve
/// window and tries again before surfacing them. Everything else is
/// terminal on first occurrence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorizationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("prime base generation failed: {0}")]
    PrimeBaseGeneration(String),

    #[error("no factor base prime admits n as a quadratic residue")]
    NoQuadraticResidues,

    #[error("sieve window exhausted with {found} smooth relations, need at least {needed}")]
    InsufficientSmoothRelations { found: usize, needed: usize },

    #[error("GF(2) system has no null-space vector")]
    SingularSystemNoSolution,

    #[error("internal invariant violated: {0}")]
    UnexpectedFactorizationFailure(String),

    #[error("congruence of squares was trivial")]
    TrivialCongruence,

    #[error("all null-space vectors produced trivial congruences")]
    NoNontrivialCongruenceFound,

    #[error("intermediate product exceeds the 64-bit working width")]
    IntegerOverflow,

    #[error("factorization cancelled")]
    Cancelled,
}

impl FactorizationError {
    /// Conditions the orchestrator may recover from by sieving a wider window.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FactorizationError::InsufficientSmoothRelations { .. }
                | FactorizationError::SingularSystemNoSolution
                | FactorizationError::TrivialCongruence
        )
    }
}
