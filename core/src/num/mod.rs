//! Numeric traits used for index arithmetic.
//!
//! This module re-exports the traits from the `num` crate that the rest of
//! the crate relies on, most importantly `Integer::mod_floor()`, which is the
//! floored modulo that circular indexing is built on.

pub use num::{CheckedMul, Integer, Zero};
use std::fmt;
use std::hash::Hash;

/// "Trait alias" for number types that can be used as coordinates.
///
/// Coordinates are either signed raw indices (`isize`) or unsigned extents
/// and zero-based positions (`usize`).
pub trait NdVecNum:
    'static + fmt::Debug + fmt::Display + Default + Copy + Eq + Hash + Ord + Send + Sync + Integer
{
}
impl NdVecNum for isize {}
impl NdVecNum for usize {}
