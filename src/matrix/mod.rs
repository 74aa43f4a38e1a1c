// src/matrix/mod.rs

pub mod gaussian_matrix;
