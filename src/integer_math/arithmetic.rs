// src/integer_math/arithmetic.rs

/// Modular multiplication through a u128 intermediate, so the product of
/// two operands below the modulus can never wrap. This width guarantee is a
/// correctness requirement of the sieve, not a tuning choice.
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    debug_assert!(modulus > 1);
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Binary (square-and-multiply) modular exponentiation.
/// Reduces `base` into [0, modulus) first; O(log exp) multiplications.
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    debug_assert!(modulus > 1);
    let mut result = 1u64;
    let mut base = base % modulus;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }
    result
}

/// Floor integer square root by Newton iteration.
pub fn integer_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut c = 1u64;
    let mut d = (1 + n) / 2;
    let mut e = (d + n / d) / 2;
    while c != d && c != e {
        c = d;
        d = e;
        e = (e + n / e) / 2;
    }
    d.min(e)
}

/// Smallest x with x² ≥ n. The sieve scan must start here: rounding down
/// would produce a negative x² − n for its first candidate.
pub fn integer_sqrt_ceil(n: u64) -> u64 {
    let root = integer_sqrt(n);
    if root * root < n {
        root + 1
    } else {
        root
    }
}
