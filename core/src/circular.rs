//! Circular containers.

use log::trace;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};

use crate::axis::Axis;
use crate::backing::{Allocate, Backing, IndexStyle, SameKind};
use crate::dim::{Dim, Dim1D};
use crate::error::{CircularError, CircularResult};
use crate::fuse;
use crate::ndvec::{IVec, NdVec, UVec};
use crate::remap;

/// `D`-dimensional adapter that gives a backing container of type `B`
/// circular indexing.
///
/// Every index is wrapped modulo the extent of its axis before it reaches the
/// backing container, so any integer is a valid index as long as the extent
/// is nonzero. The adapter owns its backing container and stores nothing
/// else; shape, origin, iteration order, and equality all come from `B`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CircularContainer<B, D: Dim> {
    data: B,
    _dim: PhantomData<D>,
}

/// 1-dimensional circular container, which additionally supports deleting and
/// inserting elements at circular positions.
pub type CircularSequence<B> = CircularContainer<B, Dim1D>;

impl<B: fmt::Debug, D: Dim> fmt::Debug for CircularContainer<B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CircularContainer").field(&self.data).finish()
    }
}
impl<B: fmt::Display, D: Dim> fmt::Display for CircularContainer<B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CircularContainer({})", self.data)
    }
}

impl<B: Backing<D>, D: Dim> From<B> for CircularContainer<B, D> {
    fn from(data: B) -> Self {
        Self::wrap(data)
    }
}

impl<B: Backing<D>, D: Dim> CircularContainer<B, D> {
    /// Wraps a backing container without copying it. Any shape is accepted,
    /// including ones with zero extents; indexing such a container fails with
    /// `CircularError::ZeroExtent`.
    #[inline]
    pub fn wrap(data: B) -> Self {
        trace!(
            "Wrapping {:?}-indexed backing with shape {} in CircularContainer",
            data.index_style(),
            data.shape(),
        );
        Self {
            data,
            _dim: PhantomData,
        }
    }

    /// Returns a reference to the backing container.
    #[inline]
    pub fn inner(&self) -> &B {
        &self.data
    }
    /// Returns a mutable reference to the backing container.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.data
    }
    /// Returns the backing container.
    #[inline]
    pub fn into_inner(self) -> B {
        self.data
    }

    /// Returns the number of dimensions.
    #[inline]
    pub const fn ndim(&self) -> usize {
        D::NDIM
    }
    /// Returns the extent of the backing container along each axis.
    #[inline]
    pub fn shape(&self) -> UVec<D> {
        self.data.shape()
    }
    /// Returns the extent of the backing container along one axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> usize {
        self.data.shape()[axis]
    }
    /// Returns the first valid index of the backing container along each
    /// axis.
    #[inline]
    pub fn origin(&self) -> IVec<D> {
        self.data.origin()
    }
    /// Returns the range of indices the backing container declares along one
    /// axis. Indices outside this range are still valid; they wrap into it.
    #[inline]
    pub fn range(&self, axis: Axis) -> Range<isize> {
        let first = self.data.origin()[axis];
        first..first + self.extent(axis) as isize
    }
    /// Returns the declared range of indices along each axis.
    #[inline]
    pub fn ranges(&self) -> impl '_ + Iterator<Item = (Axis, Range<isize>)> {
        D::axes().iter().map(move |&ax| (ax, self.range(ax)))
    }
    /// Returns the preferred access pattern of the backing container.
    #[inline]
    pub fn index_style(&self) -> IndexStyle {
        self.data.index_style()
    }
    /// Returns the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Returns true if the container has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Wraps a raw index into the backing container's declared range.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if any axis has extent 0.
    #[inline]
    pub fn wrap_pos(&self, pos: &IVec<D>) -> CircularResult<IVec<D>, B::Error> {
        remap::wrap_pos(pos, &self.data.origin(), &self.data.shape()).map_err(CircularError::widen)
    }
    /// Wraps a raw linear index into `0..len`.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if the container is empty.
    #[inline]
    pub fn wrap_linear(&self, idx: isize) -> CircularResult<usize, B::Error> {
        remap::wrap_linear(idx, self.data.len()).ok_or(CircularError::ZeroExtent { axis: None })
    }

    /// Returns a reference to the element at a circular position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if any axis has extent 0.
    #[inline]
    pub fn get(&self, pos: &IVec<D>) -> CircularResult<&B::Elem, B::Error> {
        let pos = self.wrap_pos(pos)?;
        Ok(self.data.cell(&pos))
    }
    /// Returns a mutable reference to the element at a circular position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if any axis has extent 0.
    #[inline]
    pub fn get_mut(&mut self, pos: &IVec<D>) -> CircularResult<&mut B::Elem, B::Error> {
        let pos = self.wrap_pos(pos)?;
        Ok(self.data.cell_mut(&pos))
    }
    /// Overwrites the element at a circular position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if any axis has extent 0, or
    /// `CircularError::Backing` if the backing container rejects the value.
    #[inline]
    pub fn set(&mut self, pos: &IVec<D>, value: B::Elem) -> CircularResult<(), B::Error> {
        let pos = self.wrap_pos(pos)?;
        self.data
            .set_cell(&pos, value)
            .map_err(CircularError::Backing)
    }

    /// Returns a reference to the element at a circular linear index, in the
    /// backing container's native order.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if the container is empty.
    #[inline]
    pub fn get_linear(&self, idx: isize) -> CircularResult<&B::Elem, B::Error> {
        let idx = self.wrap_linear(idx)?;
        Ok(self.data.linear_cell(idx))
    }
    /// Returns a mutable reference to the element at a circular linear index.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if the container is empty.
    #[inline]
    pub fn get_linear_mut(&mut self, idx: isize) -> CircularResult<&mut B::Elem, B::Error> {
        let idx = self.wrap_linear(idx)?;
        Ok(self.data.linear_cell_mut(idx))
    }
    /// Overwrites the element at a circular linear index.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if the container is empty, or
    /// `CircularError::Backing` if the backing container rejects the value.
    #[inline]
    pub fn set_linear(&mut self, idx: isize, value: B::Elem) -> CircularResult<(), B::Error> {
        let idx = self.wrap_linear(idx)?;
        self.data
            .set_linear_cell(idx, value)
            .map_err(CircularError::Backing)
    }

    /// Returns a reference to the element at a circular position given as a
    /// slice of exactly `D::NDIM` indices, or as a single linear index.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Arity` if the number of indices is wrong, or
    /// `CircularError::ZeroExtent` if an index cannot be wrapped.
    pub fn get_dyn(&self, indices: &[isize]) -> CircularResult<&B::Elem, B::Error> {
        match DynIndex::<D>::parse(indices)? {
            DynIndex::Multi(pos) => self.get(&pos),
            DynIndex::Linear(idx) => self.get_linear(idx),
        }
    }
    /// Overwrites the element at a circular position given as a slice of
    /// exactly `D::NDIM` indices, or as a single linear index.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Arity` if the number of indices is wrong,
    /// `CircularError::ZeroExtent` if an index cannot be wrapped, or
    /// `CircularError::Backing` if the backing container rejects the value.
    pub fn set_dyn(&mut self, indices: &[isize], value: B::Elem) -> CircularResult<(), B::Error> {
        match DynIndex::<D>::parse(indices)? {
            DynIndex::Multi(pos) => self.set(&pos, value),
            DynIndex::Linear(idx) => self.set_linear(idx, value),
        }
    }

    /// Returns an iterator over each element of the backing container exactly
    /// once, in its native order. Iteration does not wrap.
    #[inline]
    pub fn iter(&self) -> B::Iter<'_> {
        self.data.iter()
    }
    /// Returns whether any element equals `value`.
    #[inline]
    pub fn contains(&self, value: &B::Elem) -> bool
    where
        B::Elem: PartialEq,
    {
        self.data.contains(value)
    }
}

impl<B: Allocate<D>, D: Dim> CircularContainer<B, D> {
    /// Allocates a circular container of shape `shape` with every element set
    /// to a copy of `value`.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    pub fn filled(value: B::Elem, shape: UVec<D>) -> CircularResult<Self>
    where
        B::Elem: Clone,
    {
        Self::from_fn(shape, |_| value.clone())
    }

    /// Allocates a circular container of shape `shape`, initializing each
    /// element by calling `f` with its zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    pub fn from_fn(shape: UVec<D>, f: impl FnMut(UVec<D>) -> B::Elem) -> CircularResult<Self> {
        B::allocate(shape, f).map(Self::wrap)
    }

    /// Allocates a circular container with the extents given as a slice of
    /// exactly `D::NDIM` signed integers, with every element set to a copy of
    /// `value`.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Arity` if the number of extents is wrong,
    /// `CircularError::InvalidExtent` if any extent is negative, or
    /// `CircularError::Allocation` if the shape has too many elements.
    pub fn with_extents(value: B::Elem, extents: &[isize]) -> CircularResult<Self>
    where
        B::Elem: Clone,
    {
        let extents = IVec::<D>::from_slice(extents).ok_or(CircularError::Arity {
            expected: D::NDIM,
            got: extents.len(),
        })?;
        if let Some((axis, extent)) = extents.iter().find(|&(_, n)| n < 0) {
            return Err(CircularError::InvalidExtent { axis, extent });
        }
        Self::filled(value, extents.map(|_, n| n as usize))
    }
}

impl<B: SameKind<D>, D: Dim> CircularContainer<B, D> {
    /// Builds a circular container over a backing container of the same kind
    /// as this one, with element type `U` and shape `shape`, initializing each
    /// element by calling `f` with its zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    pub fn build_like<U>(
        &self,
        shape: UVec<D>,
        f: impl FnMut(UVec<D>) -> U,
    ) -> CircularResult<CircularContainer<B::Like<U>, D>> {
        self.data.build_like(shape, f).map(CircularContainer::wrap)
    }

    /// Builds a circular container over a backing container of the same kind
    /// as this one, with element type `U` and shape `shape`, filled with
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the shape has too many elements.
    pub fn similar<U: Default>(
        &self,
        shape: UVec<D>,
    ) -> CircularResult<CircularContainer<B::Like<U>, D>> {
        self.data.similar(shape).map(CircularContainer::wrap)
    }

    /// Creates a new circular container of the same kind and shape by
    /// applying a function to every element.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the result cannot be allocated.
    pub fn map<U>(
        &self,
        f: impl FnMut(&B::Elem) -> U,
    ) -> CircularResult<CircularContainer<B::Like<U>, D>> {
        fuse::map(self, f)
    }
}

impl<B: Backing<D>, D: Dim> Index<IVec<D>> for CircularContainer<B, D> {
    type Output = B::Elem;

    /// # Panics
    ///
    /// This method panics if any axis has extent 0.
    #[inline]
    fn index(&self, pos: IVec<D>) -> &B::Elem {
        self.get(&pos).unwrap_or_else(|e| panic!("{}", e))
    }
}
impl<B: Backing<D>, D: Dim> IndexMut<IVec<D>> for CircularContainer<B, D> {
    /// # Panics
    ///
    /// This method panics if any axis has extent 0.
    #[inline]
    fn index_mut(&mut self, pos: IVec<D>) -> &mut B::Elem {
        self.get_mut(&pos).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<B: Backing<Dim1D>> Index<isize> for CircularSequence<B> {
    type Output = B::Elem;

    /// # Panics
    ///
    /// This method panics if the sequence is empty.
    #[inline]
    fn index(&self, idx: isize) -> &B::Elem {
        self.get(&NdVec([idx])).unwrap_or_else(|e| panic!("{}", e))
    }
}
impl<B: Backing<Dim1D>> IndexMut<isize> for CircularSequence<B> {
    /// # Panics
    ///
    /// This method panics if the sequence is empty.
    #[inline]
    fn index_mut(&mut self, idx: isize) -> &mut B::Elem {
        self.get_mut(&NdVec([idx])).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'a, B: Backing<D>, D: Dim> IntoIterator for &'a CircularContainer<B, D>
where
    B: 'a,
{
    type Item = &'a B::Elem;
    type IntoIter = B::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Index given as a slice, after its arity has been checked.
enum DynIndex<D: Dim> {
    Multi(IVec<D>),
    Linear(isize),
}
impl<D: Dim> DynIndex<D> {
    fn parse<E: std::error::Error + 'static>(indices: &[isize]) -> CircularResult<Self, E> {
        if let Some(pos) = IVec::from_slice(indices) {
            Ok(Self::Multi(pos))
        } else if let &[idx] = indices {
            Ok(Self::Linear(idx))
        } else {
            Err(CircularError::Arity {
                expected: D::NDIM,
                got: indices.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::fmt;

    use super::*;
    use crate::dim::{Dim2D, Dim3D};
    use crate::ndarray::{Array1D, Array2D, Array3D, NdArray, OffsetArray};

    fn grid() -> CircularContainer<Array2D<i32>, Dim2D> {
        // 3 wide, 2 tall:
        // 3 4 5
        // 0 1 2
        CircularContainer::wrap(NdArray::from_flat_slice(NdVec([3, 2]), vec![0, 1, 2, 3, 4, 5]))
    }

    #[test]
    fn test_get_wraps_each_axis() {
        let g = grid();
        assert_eq!(Ok(&4), g.get(&NdVec([1, 1])));
        assert_eq!(Ok(&4), g.get(&NdVec([4, -1])));
        assert_eq!(Ok(&4), g.get(&NdVec([-2, 3])));
        assert_eq!(Ok(&2), g.get(&NdVec([-1, 0])));
        assert_eq!(5, g[NdVec([-1, -1])]);
    }

    #[test]
    fn test_set_then_get_same_cell() {
        let mut g = grid();
        g.set(&NdVec([0, 0]), 100).unwrap();
        assert_eq!(100, g[NdVec([3, 2])]);
        assert_eq!(100, g[NdVec([-3, -2])]);
        *g.get_mut(&NdVec([5, 7])).unwrap() = 7;
        assert_eq!(Ok(&7), g.get(&NdVec([2, 1])));
        g[NdVec([-1, 0])] = -1;
        assert_eq!(&[100, 1, -1, 3, 4, 7], g.inner().as_flat_slice());
    }

    #[test]
    fn test_linear_indexing() {
        let mut g = grid();
        assert_eq!(Ok(&0), g.get_linear(6));
        assert_eq!(Ok(&5), g.get_linear(-1));
        assert_eq!(Ok(&3), g.get_linear(-9));
        g.set_linear(13, 10).unwrap();
        assert_eq!(10, g[NdVec([1, 0])]);
    }

    #[test]
    fn test_dyn_indexing_checks_arity_only() {
        let mut g = grid();
        assert_eq!(Ok(&4), g.get_dyn(&[1, 1]));
        assert_eq!(Ok(&4), g.get_dyn(&[1000, -999]));
        assert_eq!(Ok(&4), g.get_dyn(&[10]));
        assert_eq!(
            Err(CircularError::Arity { expected: 2, got: 3 }),
            g.get_dyn(&[0, 0, 0]),
        );
        assert_eq!(
            Err(CircularError::Arity { expected: 2, got: 0 }),
            g.get_dyn(&[]),
        );
        g.set_dyn(&[-1], 50).unwrap();
        assert_eq!(Ok(&50), g.get_dyn(&[2, 1]));
        assert!(g.set_dyn(&[1, 2, 3, 4], 0).is_err());
    }

    #[test]
    fn test_zero_extent_is_domain_error() {
        let g: CircularContainer<Array2D<i32>, Dim2D> =
            CircularContainer::wrap(NdArray::from_flat_slice(NdVec([4, 0]), vec![]));
        assert_eq!(
            Err(CircularError::ZeroExtent { axis: Some(Axis::Y) }),
            g.get(&NdVec([0, 0])),
        );
        assert_eq!(
            Err(CircularError::ZeroExtent { axis: None }),
            g.get_linear(0),
        );
        assert_eq!(0, g.iter().count());
        assert!(g.is_empty());
    }

    #[test]
    #[should_panic(expected = "extent is 0")]
    fn test_index_zero_extent_panics() {
        let s = CircularSequence::wrap(Vec::<u8>::new());
        let _ = s[0];
    }

    #[test]
    fn test_shape_queries_forward() {
        let g = CircularContainer::wrap(OffsetArray::one_based(grid().into_inner()).unwrap());
        assert_eq!(NdVec([3, 2]), g.shape());
        assert_eq!(2, g.ndim());
        assert_eq!(3, g.extent(Axis::X));
        assert_eq!(1..4, g.range(Axis::X));
        assert_eq!(
            vec![(Axis::X, 1..4), (Axis::Y, 1..3)],
            g.ranges().collect::<Vec<_>>(),
        );
        assert_eq!(IndexStyle::Linear, g.index_style());
        assert_eq!(6, g.len());
        // Index 1 is the first element of a 1-based array, and index 0 wraps
        // to the last.
        assert_eq!(Ok(&0), g.get(&NdVec([1, 1])));
        assert_eq!(Ok(&5), g.get(&NdVec([0, 0])));
    }

    #[test]
    fn test_index_range_ending_at_isize_max() {
        let pair: Array1D<i32> = NdArray::from_flat_slice(NdVec([2]), vec![1, 2]);
        assert!(OffsetArray::new(pair.clone(), NdVec([isize::MAX])).is_err());

        let s = CircularSequence::wrap(OffsetArray::new(pair, NdVec([isize::MAX - 2])).unwrap());
        assert_eq!(isize::MAX - 2..isize::MAX, s.range(Axis::X));
        assert_eq!(Ok(&2), s.get(&NdVec([0])));
        assert_eq!(Ok(&1), s.get(&NdVec([isize::MAX])));
        assert_eq!(Ok(&2), s.get(&NdVec([isize::MIN])));
        assert_eq!(Ok(&2), s.get_linear(-1));
    }

    #[test]
    fn test_iteration_does_not_wrap() {
        let g = grid();
        assert_eq!(vec![0, 1, 2, 3, 4, 5], g.iter().copied().collect::<Vec<_>>());
        let mut total = 0;
        for x in &g {
            total += x;
        }
        assert_eq!(15, total);
        assert!(g.contains(&5));
        assert!(!g.contains(&6));
    }

    #[test]
    fn test_clone_is_independent() {
        let a = grid();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set(&NdVec([0, 0]), -7).unwrap();
        assert_eq!(Ok(&0), a.get(&NdVec([0, 0])));
        assert_ne!(a, b);
    }

    #[test]
    fn test_filled_and_with_extents() {
        let c: CircularContainer<Array3D<char>, _> =
            CircularContainer::filled('.', NdVec([2, 3, 4])).unwrap();
        assert_eq!(24, c.len());
        assert!(c.iter().all(|&ch| ch == '.'));

        let c: CircularContainer<Array3D<u8>, Dim3D> =
            CircularContainer::with_extents(1, &[1, 0, 2]).unwrap();
        assert_eq!(NdVec([1, 0, 2]), c.shape());
        assert_eq!(
            Err(CircularError::InvalidExtent { axis: Axis::Z, extent: -2 }),
            CircularContainer::<Array3D<u8>, Dim3D>::with_extents(1, &[1, 1, -2]),
        );
        assert_eq!(
            Err(CircularError::Arity { expected: 3, got: 2 }),
            CircularContainer::<Array3D<u8>, Dim3D>::with_extents(1, &[1, 1]),
        );
        assert!(matches!(
            CircularContainer::<Array3D<u8>, Dim3D>::filled(0, NdVec([usize::MAX, 2, 2])),
            Err(CircularError::Allocation { .. }),
        ));
    }

    #[test]
    fn test_similar_keeps_backing_kind() {
        let g = CircularContainer::wrap(OffsetArray::one_based(grid().into_inner()).unwrap());
        let s: CircularContainer<OffsetArray<bool, Dim2D>, Dim2D> =
            g.similar(NdVec([5, 1])).unwrap();
        assert_eq!(NdVec([5, 1]), s.shape());
        assert_eq!(NdVec([1, 1]), s.origin());
        assert_eq!(Ok(&false), s.get(&NdVec([-12, 40])));

        let b = g.build_like(NdVec([2, 2]), |pos| pos[Axis::X] + pos[Axis::Y]).unwrap();
        assert_eq!(vec![0, 1, 1, 2], b.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn test_formatting_nests_backing() {
        let s = CircularSequence::wrap(vec![1, 2]);
        assert_eq!("CircularContainer([1, 2])", format!("{:?}", s));
        let s = CircularSequence::wrap(NdArray::from_flat_slice(NdVec([2]), vec![1, 2]));
        assert_eq!("CircularContainer([1, 2] (shape [2]))", s.to_string());
    }

    /// Backing container that refuses to store negative numbers.
    #[derive(Debug, Clone, PartialEq)]
    struct NonNegative(Vec<i32>);

    #[derive(Debug, Clone, PartialEq)]
    struct NegativeValue(i32);
    impl fmt::Display for NegativeValue {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "negative value {}", self.0)
        }
    }
    impl std::error::Error for NegativeValue {}

    impl Backing<Dim1D> for NonNegative {
        type Elem = i32;
        type Error = NegativeValue;
        type Iter<'a> = std::slice::Iter<'a, i32> where Self: 'a;

        fn shape(&self) -> UVec<Dim1D> {
            NdVec([self.0.len()])
        }
        fn cell(&self, pos: &IVec<Dim1D>) -> &i32 {
            &self.0[pos[Axis::X] as usize]
        }
        fn cell_mut(&mut self, pos: &IVec<Dim1D>) -> &mut i32 {
            &mut self.0[pos[Axis::X] as usize]
        }
        fn set_cell(&mut self, pos: &IVec<Dim1D>, value: i32) -> Result<(), NegativeValue> {
            if value < 0 {
                return Err(NegativeValue(value));
            }
            *self.cell_mut(pos) = value;
            Ok(())
        }
        fn iter(&self) -> Self::Iter<'_> {
            self.0.iter()
        }
    }

    #[test]
    fn test_backing_errors_propagate_unchanged() {
        let mut s = CircularSequence::wrap(NonNegative(vec![1, 2, 3]));
        assert_eq!(
            Err(CircularError::Backing(NegativeValue(-4))),
            s.set(&NdVec([7]), -4),
        );
        assert_eq!(Err(CircularError::Backing(NegativeValue(-1))), s.set_linear(0, -1));
        assert_eq!(Ok(()), s.set(&NdVec([-1]), 30));
        assert_eq!(&[1, 2, 30], &s.inner().0[..]);
        assert_eq!("negative value -5", s.set_dyn(&[0], -5).unwrap_err().to_string());

        let empty = CircularSequence::wrap(NonNegative(vec![]));
        assert_eq!(
            Err(CircularError::ZeroExtent { axis: Some(Axis::X) }),
            empty.get(&NdVec([0])),
        );
    }

    #[test]
    fn test_widen_keeps_infallible_errors_comparable() {
        let s: CircularSequence<Vec<u8>> = CircularSequence::wrap(vec![]);
        let err: CircularError<Infallible> = s.get_linear(3).unwrap_err();
        assert_eq!(CircularError::ZeroExtent { axis: None }, err);
    }
}
