// src/core/mod.rs

pub mod cancellation_token;
pub mod factorizer;
pub mod static_random;
pub mod validated;
