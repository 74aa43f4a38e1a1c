// src/lib.rs

pub mod config;
pub mod congruence;
pub mod core;
pub mod error;
pub mod factor_base;
pub mod integer_math;
pub mod matrix;
pub mod relation_sieve;

pub use crate::core::factorizer::{factorize, FactorizationState, QuadraticSieve};
pub use crate::error::FactorizationError;
