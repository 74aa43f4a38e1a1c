// src/relation_sieve/relation.rs

use std::cmp::Ordering;

/// One smooth relation: x just above √n, y = x² − n, and y's full
/// factorization over the active base as a column-indexed exponent vector.
/// Only fully factored y values are ever stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub x: u64,
    pub y: u64,
    pub exponents: Vec<u32>,
}

impl Relation {
    /// Exponent parities, the row this relation contributes to the GF(2)
    /// matrix.
    pub fn parity_row(&self) -> Vec<bool> {
        self.exponents.iter().map(|&e| e % 2 == 1).collect()
    }
}

impl PartialOrd for Relation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Relation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x)
    }
}
