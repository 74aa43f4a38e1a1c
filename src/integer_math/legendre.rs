// src/integer_math/legendre.rs

use crate::integer_math::arithmetic::mod_pow;

pub struct Legendre;

impl Legendre {
    /// Euler's criterion: n^((p-1)/2) mod p. Result 1 for a quadratic
    /// residue, p-1 for a non-residue, 0 when p divides n.
    pub fn symbol(n: u64, p: u64) -> u64 {
        mod_pow(n, (p - 1) / 2, p)
    }
}

/// True when n has a square root mod p. For p = 2 the exponent collapses
/// to zero and the symbol is always 1, so 2 is retained without a special
/// parity rule.
pub fn is_quadratic_residue(n: u64, p: u64) -> bool {
    Legendre::symbol(n, p) == 1
}
