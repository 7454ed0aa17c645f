//! Capabilities that a container must provide to back a circular container.
//!
//! A circular container never touches its elements directly; everything goes
//! through these traits after the indices have been wrapped. Any container
//! that implements them (dense, offset, strided, ...) can be made circular.
//!
//! Positions passed to `Backing` methods are always *absolute* indices
//! already inside `origin..origin+shape`, so implementations may panic on
//! out-of-range positions the same way `Index` does.

use crate::dim::{Dim, Dim1D};
use crate::error::CircularResult;
use crate::ndvec::{IVec, UVec};

#[cfg(feature = "ndarray")]
mod external;
mod vec;

/// Preferred way to address the elements of a container.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IndexStyle {
    /// Elements are cheapest to reach by a single linear index in the
    /// container's native order.
    Linear,
    /// Elements are cheapest to reach by one index per axis.
    #[default]
    Cartesian,
}

/// `D`-dimensional container of elements with a fixed shape.
pub trait Backing<D: Dim> {
    /// Element type.
    type Elem;
    /// Error returned when the container rejects a write or a structural
    /// change.
    type Error: std::error::Error + 'static;
    /// Iterator over references to all elements, in native order.
    type Iter<'a>: Iterator<Item = &'a Self::Elem>
    where
        Self: 'a;

    /// Returns the extent of the container along each axis.
    fn shape(&self) -> UVec<D>;
    /// Returns the first valid index along each axis.
    ///
    /// `origin + shape` must be representable as an `isize` along every axis.
    fn origin(&self) -> IVec<D> {
        IVec::origin()
    }
    /// Returns the preferred access pattern.
    fn index_style(&self) -> IndexStyle {
        IndexStyle::Cartesian
    }
    /// Returns the total number of elements.
    fn len(&self) -> usize {
        self.shape().product()
    }
    /// Returns true if the container has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at an absolute position.
    fn cell(&self, pos: &IVec<D>) -> &Self::Elem;
    /// Returns a mutable reference to the element at an absolute position.
    fn cell_mut(&mut self, pos: &IVec<D>) -> &mut Self::Elem;
    /// Overwrites the element at an absolute position.
    fn set_cell(&mut self, pos: &IVec<D>, value: Self::Elem) -> Result<(), Self::Error> {
        *self.cell_mut(pos) = value;
        Ok(())
    }

    /// Returns the absolute position of the element with linear index `idx`
    /// in the container's native order.
    ///
    /// The default order has the X axis varying fastest.
    fn linear_pos(&self, idx: usize) -> IVec<D> {
        self.shape().unflatten_idx(idx).to_ivec() + self.origin()
    }
    /// Returns a reference to the element with linear index `idx`.
    fn linear_cell(&self, idx: usize) -> &Self::Elem {
        self.cell(&self.linear_pos(idx))
    }
    /// Returns a mutable reference to the element with linear index `idx`.
    fn linear_cell_mut(&mut self, idx: usize) -> &mut Self::Elem {
        let pos = self.linear_pos(idx);
        self.cell_mut(&pos)
    }
    /// Overwrites the element with linear index `idx`.
    fn set_linear_cell(&mut self, idx: usize, value: Self::Elem) -> Result<(), Self::Error> {
        let pos = self.linear_pos(idx);
        self.set_cell(&pos, value)
    }

    /// Returns an iterator over all the elements, in native order.
    fn iter(&self) -> Self::Iter<'_>;
    /// Returns whether any element equals `value`.
    fn contains(&self, value: &Self::Elem) -> bool
    where
        Self::Elem: PartialEq,
    {
        self.iter().any(|x| x == value)
    }
}

/// Container that can be freshly allocated with a given shape.
pub trait Allocate<D: Dim>: Backing<D> + Sized {
    /// Allocates a container of shape `shape`, initializing each element by
    /// calling `f` with its zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    fn allocate(shape: UVec<D>, f: impl FnMut(UVec<D>) -> Self::Elem) -> CircularResult<Self>;
}

/// Container that can produce new containers of the same kind with a
/// different element type and shape.
///
/// Generic algorithms that build a result "like" an input use this, so the
/// result keeps the input's storage strategy and any kind-specific
/// parameters (such as the origin of an `OffsetArray`).
pub trait SameKind<D: Dim>: Backing<D> {
    /// Container of the same kind with element type `U`.
    type Like<U>: SameKind<D, Elem = U>;

    /// Builds a same-kind container of shape `shape`, initializing each
    /// element by calling `f` with its zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    fn build_like<U>(
        &self,
        shape: UVec<D>,
        f: impl FnMut(UVec<D>) -> U,
    ) -> CircularResult<Self::Like<U>>;

    /// Builds a same-kind container of shape `shape` filled with default
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    fn similar<U: Default>(&self, shape: UVec<D>) -> CircularResult<Self::Like<U>> {
        self.build_like(shape, |_| U::default())
    }
}

/// 1-dimensional container whose length can change.
///
/// Positions are absolute indices within `origin..origin+len`.
pub trait SequenceBacking: Backing<Dim1D> {
    /// Removes and returns the element at `pos`, shifting all following
    /// elements down by one.
    fn remove(&mut self, pos: isize) -> Result<Self::Elem, Self::Error>;
    /// Inserts `value` immediately before the element at `pos`.
    fn insert(&mut self, pos: isize, value: Self::Elem) -> Result<(), Self::Error>;
    /// Removes the elements at `positions`, which are sorted, unique, and in
    /// range, returning them in the same order.
    ///
    /// Either all the elements are removed or, on error, none are.
    fn remove_sorted(&mut self, positions: &[isize]) -> Result<Vec<Self::Elem>, Self::Error>;
}

/// Splits `items` into the elements at the sorted zero-based `offsets` and
/// the rest, in a single pass.
pub(crate) fn partition_sorted<T>(items: Vec<T>, offsets: &[usize]) -> (Vec<T>, Vec<T>) {
    let mut removed = Vec::with_capacity(offsets.len());
    let mut kept = Vec::with_capacity(items.len().saturating_sub(offsets.len()));
    let mut targets = offsets.iter().peekable();
    for (i, item) in items.into_iter().enumerate() {
        if targets.peek() == Some(&&i) {
            targets.next();
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    (removed, kept)
}
