//! Elementwise operations over containers, with broadcasting.
//!
//! An elementwise operation reads every operand at each position of the
//! broadcast shape and collects the results into a new container. Two things
//! vary by operand:
//!
//! - How a broadcast position is read. A plain container pins each axis of
//!   extent 1 to its origin; a circular container wraps the position along
//!   every axis, which agrees with the plain rule whenever the position is in
//!   range.
//! - What kind of container the result is. Each operand reports a [`Kind`]
//!   tag naming its backing kind, and tags are combined pairwise with
//!   [`Merge`]: circular wins over plain, the left operand wins ties, and
//!   [`Neutral`] (from scalars) defers to the other operand.
//!
//! The result container is produced by the winning tag through the
//! [`SameKind`] factory of its backing, so a circular operand over an
//! `OffsetArray` gives a circular result over an `OffsetArray` with the same
//! origin.
//!
//! To let a new backing kind take part in elementwise operations, implement
//! [`Operand`] for references to it with [`Plain`] as its kind, using
//! [`read_plain()`] for the read rule.

use log::trace;

use crate::backing::{Backing, SameKind};
use crate::circular::CircularContainer;
use crate::dim::{Dim, Dim1D};
use crate::error::{CircularError, CircularResult};
use crate::ndarray::{NdArray, OffsetArray};
use crate::ndvec::UVec;

mod ops;

/// Value that can be read at every position of a broadcast shape.
pub trait Operand<D: Dim> {
    /// Element type.
    type Elem;
    /// Tag that decides the kind of container an operation produces.
    type Kind;

    /// Returns the shape that this operand contributes to broadcasting.
    fn shape(&self) -> UVec<D>;
    /// Returns the element at a zero-based position of the broadcast shape.
    ///
    /// `pos` must be within the broadcast of this operand's shape.
    fn read(&self, pos: &UVec<D>) -> &Self::Elem;
    /// Returns the tag for this operand.
    fn kind(&self) -> Self::Kind;
}

/// Strategy for building the result of an elementwise operation.
pub trait Kind<D: Dim> {
    /// Container type holding elements of type `U`.
    type Output<U>;

    /// Builds a container of shape `shape`, initializing each element by
    /// calling `f` with its zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    fn build<U>(
        self,
        shape: UVec<D>,
        f: impl FnMut(UVec<D>) -> U,
    ) -> CircularResult<Self::Output<U>>;
}

/// Combination of two operand tags into the tag for their result.
pub trait Merge<Rhs> {
    /// Combined tag.
    type Output;

    /// Combines two tags.
    fn merge(self, rhs: Rhs) -> Self::Output;
}

/// Tag for a plain (non-circular) container of type `B`.
#[derive(Debug)]
pub struct Plain<'a, B>(pub &'a B);

/// Tag for a circular container over a backing container of type `B`.
#[derive(Debug)]
pub struct Circular<'a, B>(pub &'a B);

/// Tag for an operand that does not determine the kind of the result.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Neutral;

impl<'a, B: SameKind<D>, D: Dim> Kind<D> for Plain<'a, B> {
    type Output<U> = B::Like<U>;

    fn build<U>(self, shape: UVec<D>, f: impl FnMut(UVec<D>) -> U) -> CircularResult<B::Like<U>> {
        trace!("Building plain result with shape {}", shape);
        self.0.build_like(shape, f)
    }
}
impl<'a, B: SameKind<D>, D: Dim> Kind<D> for Circular<'a, B> {
    type Output<U> = CircularContainer<B::Like<U>, D>;

    fn build<U>(
        self,
        shape: UVec<D>,
        f: impl FnMut(UVec<D>) -> U,
    ) -> CircularResult<CircularContainer<B::Like<U>, D>> {
        trace!("Building circular result with shape {}", shape);
        self.0.build_like(shape, f).map(CircularContainer::wrap)
    }
}

impl<'a, 'b, A, B> Merge<Plain<'b, B>> for Plain<'a, A> {
    type Output = Self;

    fn merge(self, _rhs: Plain<'b, B>) -> Self {
        self
    }
}
impl<'a, 'b, A, B> Merge<Circular<'b, B>> for Plain<'a, A> {
    type Output = Circular<'b, B>;

    fn merge(self, rhs: Circular<'b, B>) -> Circular<'b, B> {
        rhs
    }
}
impl<'a, 'b, A, B> Merge<Plain<'b, B>> for Circular<'a, A> {
    type Output = Self;

    fn merge(self, _rhs: Plain<'b, B>) -> Self {
        self
    }
}
impl<'a, 'b, A, B> Merge<Circular<'b, B>> for Circular<'a, A> {
    type Output = Self;

    fn merge(self, _rhs: Circular<'b, B>) -> Self {
        self
    }
}
impl<'a, A> Merge<Neutral> for Plain<'a, A> {
    type Output = Self;

    fn merge(self, _rhs: Neutral) -> Self {
        self
    }
}
impl<'a, A> Merge<Neutral> for Circular<'a, A> {
    type Output = Self;

    fn merge(self, _rhs: Neutral) -> Self {
        self
    }
}
impl<'b, B> Merge<Plain<'b, B>> for Neutral {
    type Output = Plain<'b, B>;

    fn merge(self, rhs: Plain<'b, B>) -> Plain<'b, B> {
        rhs
    }
}
impl<'b, B> Merge<Circular<'b, B>> for Neutral {
    type Output = Circular<'b, B>;

    fn merge(self, rhs: Circular<'b, B>) -> Circular<'b, B> {
        rhs
    }
}

/// Single value that broadcasts to every position.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Scalar<T>(pub T);

impl<'a, T, D: Dim> Operand<D> for &'a Scalar<T> {
    type Elem = T;
    type Kind = Neutral;

    #[inline]
    fn shape(&self) -> UVec<D> {
        UVec::repeat(1)
    }
    #[inline]
    fn read(&self, _pos: &UVec<D>) -> &T {
        &self.0
    }
    #[inline]
    fn kind(&self) -> Neutral {
        Neutral
    }
}

impl<'a, B: SameKind<D>, D: Dim> Operand<D> for &'a CircularContainer<B, D> {
    type Elem = B::Elem;
    type Kind = Circular<'a, B>;

    #[inline]
    fn shape(&self) -> UVec<D> {
        CircularContainer::shape(self)
    }
    #[inline]
    fn read(&self, pos: &UVec<D>) -> &B::Elem {
        let shape = CircularContainer::shape(self);
        // `pos` is nonnegative, so the remainder is the floored modulo.
        let offset = UVec::from_fn(|ax| pos[ax] % shape[ax]);
        self.inner().cell(&(offset.to_ivec() + self.origin()))
    }
    #[inline]
    fn kind(&self) -> Circular<'a, B> {
        Circular(CircularContainer::inner(*self))
    }
}

/// Reads a plain container at a zero-based position of a broadcast shape,
/// pinning each axis of extent 1 to the container's origin.
#[inline]
pub fn read_plain<'a, B: Backing<D>, D: Dim>(backing: &'a B, pos: &UVec<D>) -> &'a B::Elem {
    let shape = backing.shape();
    let offset = UVec::from_fn(|ax| if shape[ax] == 1 { 0 } else { pos[ax] });
    backing.cell(&(offset.to_ivec() + backing.origin()))
}

macro_rules! impl_plain_operand {
    ([$($generic:tt)*] $backing:ty, $dim:ty) => {
        impl<'a, $($generic)*> Operand<$dim> for &'a $backing {
            type Elem = T;
            type Kind = Plain<'a, $backing>;

            #[inline]
            fn shape(&self) -> UVec<$dim> {
                Backing::shape(*self)
            }
            #[inline]
            fn read(&self, pos: &UVec<$dim>) -> &T {
                read_plain(*self, pos)
            }
            #[inline]
            fn kind(&self) -> Plain<'a, $backing> {
                Plain(*self)
            }
        }
    };
}

impl_plain_operand!([T, D: Dim] NdArray<T, D>, D);
impl_plain_operand!([T, D: Dim] OffsetArray<T, D>, D);
impl_plain_operand!([T] Vec<T>, Dim1D);

/// Type of the container built by tag `K` with elements of type `U`.
pub type Fused<K, D, U> = <K as Kind<D>>::Output<U>;

/// Computes the shape that two shapes broadcast to.
///
/// Along each axis the extents must be equal, or one of them must be 1, in
/// which case the other is used.
///
/// # Errors
///
/// Returns `CircularError::ShapeMismatch` if the shapes are incompatible.
pub fn broadcast_shape<D: Dim>(lhs: &UVec<D>, rhs: &UVec<D>) -> CircularResult<UVec<D>> {
    let mut ret = UVec::origin();
    for &ax in D::axes() {
        ret[ax] = match (lhs[ax], rhs[ax]) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => {
                return Err(CircularError::ShapeMismatch {
                    lhs: lhs.as_slice().to_vec(),
                    rhs: rhs.as_slice().to_vec(),
                })
            }
        };
    }
    Ok(ret)
}

/// Applies `f` to every element of an operand, collecting the results into a
/// container of the operand's kind.
///
/// # Errors
///
/// Returns `CircularError::Allocation` if the result cannot be allocated.
pub fn map<D, A, U>(
    a: A,
    mut f: impl FnMut(&A::Elem) -> U,
) -> CircularResult<Fused<A::Kind, D, U>>
where
    D: Dim,
    A: Operand<D>,
    A::Kind: Kind<D>,
{
    let shape = a.shape();
    a.kind().build(shape, |pos| f(a.read(&pos)))
}

/// Applies `f` to every pair of elements of two broadcast operands,
/// collecting the results into a container whose kind is the merge of the
/// operands' kinds.
///
/// # Errors
///
/// Returns `CircularError::ShapeMismatch` if the operands' shapes are
/// incompatible, or `CircularError::Allocation` if the result cannot be
/// allocated.
pub fn zip_with<D, A, B, U>(
    a: A,
    b: B,
    mut f: impl FnMut(&A::Elem, &B::Elem) -> U,
) -> CircularResult<Fused<<A::Kind as Merge<B::Kind>>::Output, D, U>>
where
    D: Dim,
    A: Operand<D>,
    B: Operand<D>,
    A::Kind: Merge<B::Kind>,
    <A::Kind as Merge<B::Kind>>::Output: Kind<D>,
{
    let shape = broadcast_shape(&a.shape(), &b.shape())?;
    trace!(
        "Broadcasting shapes {} and {} to {}",
        a.shape(),
        b.shape(),
        shape,
    );
    a.kind()
        .merge(b.kind())
        .build(shape, |pos| f(a.read(&pos), b.read(&pos)))
}
