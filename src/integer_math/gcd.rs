// src/integer_math/gcd.rs

pub struct GCD;

impl GCD {
    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        let mut a = left;
        let mut b = right;
        while b != 0 {
            let temp = b;
            b = a % b;
            a = temp;
        }
        a
    }

    pub fn find_gcd(numbers: &[u64]) -> u64 {
        numbers.iter().fold(0, |acc, &x| Self::find_gcd_pair(acc, x))
    }

    pub fn are_coprime(numbers: &[u64]) -> bool {
        Self::find_gcd(numbers) == 1
    }
}
