// src/integer_math/prime_factory.rs

use log::debug;

use crate::core::validated::Prime;
use crate::error::FactorizationError;

pub struct PrimeFactory;

impl PrimeFactory {
    /// The first `count` primes in ascending order, by trial division
    /// against the primes already found. Candidates after 2 and 3 are odd,
    /// so only odd divisors are ever tested.
    pub fn first_primes(count: usize) -> Result<Vec<Prime>, FactorizationError> {
        if count < 2 {
            return Err(FactorizationError::PrimeBaseGeneration(format!(
                "factor base needs at least 2 primes, requested {}",
                count
            )));
        }

        let mut values = Vec::with_capacity(count);
        values.push(2u64);
        values.push(3u64);

        let mut candidate = values[values.len() - 1];
        while values.len() < count {
            candidate += 2;
            let is_prime = values
                .iter()
                .skip(1) // candidates are odd
                .take_while(|&&p| p * p <= candidate)
                .all(|&p| candidate % p != 0);
            if is_prime {
                values.push(candidate);
            }
        }

        debug!(
            "prime base: {} primes, largest {}",
            values.len(),
            values[values.len() - 1]
        );

        values.into_iter().map(Prime::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_primes_known_prefix() {
        let primes = PrimeFactory::first_primes(10).unwrap();
        let values: Vec<u64> = primes.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_first_primes_thirtieth() {
        let primes = PrimeFactory::first_primes(30).unwrap();
        assert_eq!(primes.len(), 30);
        assert_eq!(primes[29].value(), 113);
    }

    #[test]
    fn test_count_below_two_is_rejected() {
        assert!(matches!(
            PrimeFactory::first_primes(1),
            Err(FactorizationError::PrimeBaseGeneration(_))
        ));
        assert!(PrimeFactory::first_primes(0).is_err());
    }

    #[test]
    fn test_minimum_base() {
        let primes = PrimeFactory::first_primes(2).unwrap();
        assert_eq!(primes[0].value(), 2);
        assert_eq!(primes[1].value(), 3);
    }
}
