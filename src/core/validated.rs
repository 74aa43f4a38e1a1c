// src/core/validated.rs

use std::fmt;

use crate::error::FactorizationError;

/// An integer known to be strictly greater than one.
///
/// The sieve target n and the factor base size both live behind this check,
/// so the numeric stages never re-validate their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GreaterThanOne(u64);

impl GreaterThanOne {
    pub fn new(value: u64) -> Result<Self, FactorizationError> {
        if value <= 1 {
            return Err(FactorizationError::InvalidInput(format!(
                "expected a value greater than 1, got {}",
                value
            )));
        }
        Ok(GreaterThanOne(value))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// An integer known to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive(u64);

impl Positive {
    pub fn new(value: u64) -> Result<Self, FactorizationError> {
        if value == 0 {
            return Err(FactorizationError::InvalidInput(
                "expected a positive value, got 0".to_string(),
            ));
        }
        Ok(Positive(value))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A validated prime. Constructed by `PrimeFactory` or by explicit trusted
/// input through `new`, which runs a deterministic trial-division check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prime(u64);

impl Prime {
    pub fn new(value: u64) -> Result<Self, FactorizationError> {
        if !is_prime_trial_division(value) {
            return Err(FactorizationError::InvalidInput(format!(
                "{} is not prime",
                value
            )));
        }
        Ok(Prime(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Prime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_prime_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
