//! # Ring Module
//!
//! Provides the [`Ring`] struct for the finite rings Z_m, plus exact linear algebra over them
//! (see [`matrix_ops`]).

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd, is_coprime};
pub use math::{Ring, Z26, scalar_inverse};
pub use matrix_ops::{adjugate, determinant, determinant_mod, matrix_inverse};
