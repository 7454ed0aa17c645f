//! N-dimensional vectors.
//!
//! `NdVec`s are used for shapes (`UVec`), zero-based positions (`UVec`), and
//! signed raw indices and origins (`IVec`). Now that generic associated types
//! are stable, the array type behind a vector comes straight from `Dim`.
//!
//! Generic-dimensioned vectors can't implement `Copy` (the array type is only
//! known to be `Clone`), so `some_ndvec.clone()` is common in generic code.
//! It never allocates.

use itertools::Itertools;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

pub mod aliases;
mod iter;

pub use aliases::*;
pub use iter::Positions;

use crate::axis::Axis;
use crate::dim::Dim;
use crate::num::{CheckedMul, NdVecNum, Zero};

/// `D`-dimensional vector with coordinates of type `N`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct NdVec<D: Dim, N: NdVecNum>(pub D::Array<N>);

// Implement `Copy` when `D` is known.
impl<D: Dim, N: NdVecNum> Copy for NdVec<D, N> where D::Array<N>: Copy {}

impl<D: Dim, N: NdVecNum> fmt::Display for NdVec<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_slice().iter().join(", "))
    }
}

// Implement indexing using `Axis`.
impl<D: Dim, N: NdVecNum> Index<Axis> for NdVec<D, N> {
    type Output = N;

    #[inline]
    fn index(&self, axis: Axis) -> &N {
        &self.0.as_ref()[axis as usize]
    }
}
impl<D: Dim, N: NdVecNum> IndexMut<Axis> for NdVec<D, N> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut N {
        &mut self.0.as_mut()[axis as usize]
    }
}

impl<D: Dim, N: NdVecNum> Add for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_fn(|ax| self[ax] + other[ax])
    }
}
impl<D: Dim, N: NdVecNum> Sub for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_fn(|ax| self[ax] - other[ax])
    }
}

impl<D: Dim, N: NdVecNum> NdVec<D, N> {
    /// Creates a vector consisting of all zeros.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }
    /// Creates a vector using `value` for all components.
    #[inline]
    pub fn repeat(value: N) -> Self {
        Self::from_fn(|_| value)
    }

    /// Creates a vector by evaluating `generator` for each axis.
    #[inline]
    pub fn from_fn(mut generator: impl FnMut(Axis) -> N) -> Self {
        let mut ret: Self = Self::default();
        for &ax in D::axes() {
            ret[ax] = generator(ax);
        }
        ret
    }
    /// Creates a vector from a slice of components, or returns `None` if the
    /// slice does not have exactly `D::NDIM` components.
    #[inline]
    pub fn from_slice(components: &[N]) -> Option<Self> {
        if components.len() != D::NDIM {
            return None;
        }
        Some(Self::from_fn(|ax| components[ax as usize]))
    }
    /// Creates a new vector by applying `f` to each component of this one.
    #[inline]
    pub fn map<M: NdVecNum>(&self, mut f: impl FnMut(Axis, N) -> M) -> NdVec<D, M> {
        NdVec::from_fn(|ax| f(ax, self[ax]))
    }

    /// Returns the components of the vector as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[N] {
        self.0.as_ref()
    }
    /// Returns an iterator over the components of the vector, paired with
    /// their axes.
    #[inline]
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Axis, N)> {
        D::axes().iter().map(move |&ax| (ax, self[ax]))
    }

    /// Returns the product of the components of the vector.
    #[inline]
    pub fn product(&self) -> N {
        self.as_slice().iter().fold(N::one(), |a, &b| a * b)
    }
    /// Returns the product of the components of the vector, or `None` if it
    /// overflows.
    #[inline]
    pub fn checked_product(&self) -> Option<N>
    where
        N: CheckedMul,
    {
        self.as_slice()
            .iter()
            .try_fold(N::one(), |a, b| a.checked_mul(b))
    }

    /// Returns the first axis whose component is zero, if any.
    #[inline]
    pub fn zero_axis(&self) -> Option<Axis> {
        self.iter().find(|(_, n)| n.is_zero()).map(|(ax, _)| ax)
    }
}

impl<D: Dim> IVec<D> {
    /// Converts the `IVec` to a `UVec`, or returns `None` if any component is
    /// negative.
    #[inline]
    pub fn to_uvec(&self) -> Option<UVec<D>> {
        let mut ret = UVec::origin();
        for (ax, n) in self.iter() {
            ret[ax] = if n < 0 { return None } else { n as usize };
        }
        Some(ret)
    }
}

impl<D: Dim> UVec<D> {
    /// Converts the `UVec` to an `IVec`.
    ///
    /// Components are extents or positions of an existing container, which
    /// never exceed `isize::MAX`.
    #[inline]
    pub fn to_ivec(&self) -> IVec<D> {
        self.map(|_, n| n as isize)
    }

    /// Returns an iterator over all positions within a container of this
    /// shape, with the X axis varying fastest.
    #[inline]
    pub fn positions(&self) -> Positions<D> {
        Positions::new(self.clone())
    }

    /// Converts a position into a "flattened" `usize` index for a
    /// container of this shape, with the X axis varying fastest.
    ///
    /// # Panics
    ///
    /// This method panics if `pos` is out of range.
    #[inline]
    pub fn flatten_idx(&self, pos: &UVec<D>) -> usize {
        let mut ret = 0;
        let mut stride = 1;
        for (ax, len) in self.iter() {
            assert!(pos[ax] < len, "position {} out of range {}", pos, self);
            ret += pos[ax] * stride;
            stride *= len;
        }
        ret
    }

    /// Converts a "flattened" `usize` index into a position for a container
    /// of this shape. This is the inverse of `flatten_idx()`.
    ///
    /// # Panics
    ///
    /// This method panics if `idx` is out of range.
    #[inline]
    pub fn unflatten_idx(&self, mut idx: usize) -> UVec<D> {
        assert!(idx < self.product(), "index {} out of range {}", idx, self);
        let mut ret = UVec::origin();
        for (ax, len) in self.iter() {
            ret[ax] = idx % len;
            idx /= len;
        }
        ret
    }
}
