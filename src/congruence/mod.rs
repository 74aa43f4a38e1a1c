// src/congruence/mod.rs

use log::debug;

use crate::core::validated::GreaterThanOne;
use crate::error::FactorizationError;
use crate::factor_base::FactorBase;
use crate::integer_math::arithmetic::{mod_pow, mul_mod};
use crate::integer_math::gcd::GCD;
use crate::relation_sieve::relation::Relation;

pub struct CongruenceExtractor;

impl CongruenceExtractor {
    /// Turns one null-space vector into a factor pair, or reports the
    /// congruence as trivial.
    ///
    /// X = Π x_i mod n. Y is the exact square root of Π y_i, recombined by
    /// halving each prime's summed exponent, never by a lossy numeric
    /// root; the null-space construction guarantees every sum is even.
    /// When X ≢ ±Y (mod n), gcd(X − Y, n) is a nontrivial factor.
    pub fn extract(
        n: GreaterThanOne,
        base: &FactorBase,
        relations: &[Relation],
        subset: &[usize],
    ) -> Result<(u64, u64), FactorizationError> {
        let modulus = n.get();

        let mut exponent_sums = vec![0u64; base.len()];
        let mut x_product = 1u64;
        for &i in subset {
            x_product = mul_mod(x_product, relations[i].x, modulus);
            for (col, &e) in relations[i].exponents.iter().enumerate() {
                exponent_sums[col] += e as u64;
            }
        }

        let mut y_root = 1u64;
        for (prime, &sum) in base.primes().iter().zip(&exponent_sums) {
            if sum % 2 != 0 {
                return Err(FactorizationError::UnexpectedFactorizationFailure(format!(
                    "odd combined exponent {} for prime {} in a null-space vector",
                    sum, prime
                )));
            }
            if sum > 0 {
                y_root = mul_mod(y_root, mod_pow(prime.value(), sum / 2, modulus), modulus);
            }
        }

        if x_product == y_root || x_product == (modulus - y_root) % modulus {
            debug!(
                "trivial congruence: X = {} ≡ ±{} (mod {})",
                x_product, y_root, modulus
            );
            return Err(FactorizationError::TrivialCongruence);
        }

        let difference = (x_product + modulus - y_root) % modulus;
        let g = GCD::find_gcd_pair(difference, modulus);
        if g <= 1 || g >= modulus {
            // Cannot happen for a genuine non-trivial congruence of squares.
            return Err(FactorizationError::UnexpectedFactorizationFailure(format!(
                "gcd({}, {}) = {} is trivial despite X ≢ ±Y",
                difference, modulus, g
            )));
        }

        let quotient = modulus / g;
        Ok((g.min(quotient), g.max(quotient)))
    }
}
