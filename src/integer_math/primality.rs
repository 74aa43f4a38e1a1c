// src/integer_math/primality.rs

use crate::core::static_random::StaticRandom;
use crate::integer_math::arithmetic::mod_pow;

const SMALL_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Fermat probable-prime test with `rounds` uniformly random witnesses in
/// [2, n). Composites slip through with vanishing probability (Carmichael
/// numbers aside); a prime is never reported composite.
pub fn is_probable_prime(n: u64, rounds: u32, rng: &mut StaticRandom) -> bool {
    if n < 2 {
        return false;
    }
    if SMALL_PRIMES.contains(&n) {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    for _ in 0..rounds {
        let witness = rng.next_range(2, n);
        if mod_pow(witness, n - 1, n) != 1 {
            return false;
        }
    }
    true
}
