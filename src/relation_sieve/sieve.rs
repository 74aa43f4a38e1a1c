// src/relation_sieve/sieve.rs

use log::{info, warn};
use rayon::prelude::*;

use crate::core::validated::GreaterThanOne;
use crate::error::FactorizationError;
use crate::factor_base::FactorBase;
use crate::integer_math::arithmetic::integer_sqrt_ceil;

/// A sieve hit: x with y = x² − n confirmed B-smooth over the active base.
/// The exponent vector is recovered later by the relation factorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothCandidate {
    pub x: u64,
    pub y: u64,
}

pub struct SmoothRelationSieve;

impl SmoothRelationSieve {
    /// Scans x = ⌈√n⌉, ⌈√n⌉+1, … over `window` candidates and keeps the x
    /// whose y = x² − n is B-smooth, in ascending x order, truncated at
    /// `max_relations`. Per-candidate smoothness tests are independent and
    /// sharded across the rayon pool.
    ///
    /// Fails with `InsufficientSmoothRelations` when the window is
    /// exhausted below |base| + 1 hits, the minimum that guarantees a
    /// GF(2) null space.
    pub fn collect(
        n: GreaterThanOne,
        base: &FactorBase,
        window: u64,
        max_relations: usize,
    ) -> Result<Vec<SmoothCandidate>, FactorizationError> {
        let start = integer_sqrt_ceil(n.get());
        let end = Self::clamp_window(n, start, window)?;

        let mut found: Vec<SmoothCandidate> = (start..end)
            .into_par_iter()
            .filter_map(|x| {
                // Round-up start makes x² − n non-negative; y = 0 (n a
                // perfect square) carries no smoothness information.
                let y = (x as u128 * x as u128 - n.get() as u128) as u64;
                if y == 0 {
                    return None;
                }
                if Self::is_b_smooth(y, base) {
                    Some(SmoothCandidate { x, y })
                } else {
                    None
                }
            })
            .collect();

        info!(
            "sieve: {} smooth of {} candidates starting at {}",
            found.len(),
            end - start,
            start
        );
        if found.len() > max_relations {
            info!("sieve: capping at {} relations", max_relations);
            found.truncate(max_relations);
        }

        let needed = base.len() + 1;
        if found.len() < needed {
            return Err(FactorizationError::InsufficientSmoothRelations {
                found: found.len(),
                needed,
            });
        }
        Ok(found)
    }

    /// True when y divides down to exactly 1 over the base primes.
    pub fn is_b_smooth(y: u64, base: &FactorBase) -> bool {
        let mut remaining = y;
        for prime in base.primes() {
            let p = prime.value();
            while remaining % p == 0 {
                remaining /= p;
            }
            if remaining == 1 {
                return true;
            }
        }
        false
    }

    /// Largest end bound (exclusive) so that every scanned x² − n still
    /// fits in u64. Overflow on the very first candidate is unrecoverable;
    /// a partially clamped window is scanned with a warning.
    fn clamp_window(
        n: GreaterThanOne,
        start: u64,
        window: u64,
    ) -> Result<u64, FactorizationError> {
        let fits = |x: u64| x as u128 * x as u128 - n.get() as u128 <= u64::MAX as u128;

        if !fits(start) {
            return Err(FactorizationError::IntegerOverflow);
        }
        let end = start.checked_add(window).ok_or(FactorizationError::IntegerOverflow)?;
        if fits(end - 1) {
            return Ok(end);
        }

        // y grows monotonically in x, so the admissible prefix is a range.
        let mut lo = start; // fits
        let mut hi = end - 1; // does not fit
        while lo + 1 < hi {
            let mid = lo + (hi - lo) / 2;
            if fits(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        warn!(
            "sieve: window clamped from {} to {} candidates to stay within 64 bits",
            window,
            lo + 1 - start
        );
        Ok(lo + 1)
    }
}
