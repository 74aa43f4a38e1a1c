// src/integer_math/mod.rs

pub mod arithmetic;
pub mod gcd;
pub mod legendre;
pub mod primality;
pub mod prime_factory;
