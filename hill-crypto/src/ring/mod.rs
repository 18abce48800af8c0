//! # Ring Arithmetic Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_m and the
//! matrix operations the Hill cipher builds on top of them.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
