//! Dimensionality trait, which provides a number of dimensions.

use std::fmt;
use std::hash::Hash;

use crate::axis::{ndim_axes, Axis};
use crate::num::NdVecNum;

/// Dimensionality of a container or vector.
///
/// This trait is only implemented for the six structs `Dim1D`, `Dim2D`,
/// `Dim3D`, `Dim4D`, `Dim5D`, and `Dim6D`. (Circular containers do not
/// support more than six dimensions.)
pub trait Dim:
    'static + fmt::Debug + Default + Copy + Eq + Hash + Send + Sync + private::Sealed
{
    /// Number of dimensions.
    const NDIM: usize;

    /// Array type used for vectors with components of type `N`.
    type Array<N: NdVecNum>: fmt::Debug
        + Default
        + Clone
        + Eq
        + Hash
        + Send
        + Sync
        + AsRef<[N]>
        + AsMut<[N]>;

    /// Returns an array of the axes of this many dimensions.
    fn axes() -> &'static [Axis] {
        ndim_axes(Self::NDIM)
    }
}

/// 1 dimension.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim1D;
/// 2 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim2D;
/// 3 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim3D;
/// 4 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim4D;
/// 5 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim5D;
/// 6 dimensions.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim6D;

macro_rules! impl_dim {
    ($($dim:ident = $ndim:literal),+ $(,)?) => {
        $(
            impl Dim for $dim {
                const NDIM: usize = $ndim;
                type Array<N: NdVecNum> = [N; $ndim];
            }
        )+
    };
}

impl_dim!(
    Dim1D = 1,
    Dim2D = 2,
    Dim3D = 3,
    Dim4D = 4,
    Dim5D = 5,
    Dim6D = 6,
);

// Make `Dim` a "sealed trait."
// https://rust-lang.github.io/api-guidelines/future-proofing.html#c-sealed
mod private {
    use super::*;

    pub trait Sealed {}
    impl Sealed for Dim1D {}
    impl Sealed for Dim2D {}
    impl Sealed for Dim3D {}
    impl Sealed for Dim4D {}
    impl Sealed for Dim5D {}
    impl Sealed for Dim6D {}
}
