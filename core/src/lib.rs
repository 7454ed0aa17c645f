//! Circular (wraparound) indexing for N-dimensional arrays.
//!
//! A [`CircularContainer`] wraps any backing container that implements
//! [`Backing`] and remaps every index modulo the extent of its axis, so any
//! integer (negative, zero, or past the end) resolves to a valid cell. The
//! 1-dimensional [`CircularSequence`] additionally supports deleting and
//! inserting elements at circular positions.
//!
//! Elementwise operations go through the [`fuse`] engine, which builds its
//! result with the same backing kind as its operands and keeps circular
//! operands circular.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod axis;
pub mod backing;
mod circular;
mod dim;
mod error;
pub mod fuse;
pub mod ndarray;
pub mod ndvec;
pub mod num;
pub mod remap;
mod sequence;

pub use axis::Axis;
pub use backing::{Allocate, Backing, IndexStyle, SameKind, SequenceBacking};
pub use circular::{CircularContainer, CircularSequence};
pub use dim::{Dim, Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};
pub use error::{CircularError, CircularResult};

/// Capability traits, for glob imports.
pub mod traits {
    pub use crate::backing::{Allocate, Backing, SameKind, SequenceBacking};
    pub use crate::dim::Dim;
    pub use crate::fuse::{Kind, Merge, Operand};
    pub use crate::num::{Integer, NdVecNum};
}

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::traits::*;

    pub use crate::axis::Axis;
    pub use crate::backing::IndexStyle;
    pub use crate::circular::{CircularContainer, CircularSequence};
    pub use crate::dim::{Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};
    pub use crate::error::{CircularError, CircularResult};
    pub use crate::fuse::Scalar;
    pub use crate::ndarray::{NdArray, OffsetArray};
    pub use crate::ndvec::aliases::*;
    pub use crate::ndvec::NdVec;
}

#[cfg(test)]
mod tests;
