// src/relation_sieve/mod.rs

pub mod factorizer;
pub mod relation;
pub mod sieve;
