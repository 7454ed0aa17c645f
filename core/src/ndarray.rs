//! N-dimensional arrays.

use itertools::Itertools;
use std::convert::Infallible;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::axis::Axis;
use crate::backing::{partition_sorted, Allocate, Backing, IndexStyle, SameKind, SequenceBacking};
use crate::dim::*;
use crate::error::{CircularError, CircularResult};
use crate::ndvec::{IVec, NdVec, UVec};

/// `D`-dimensional array of values of type `T`.
///
/// The minimum coordinate of the array is always 0 along all axes. Elements
/// are stored in a flat `Vec` with the X axis varying fastest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NdArray<T, D: Dim> {
    size: UVec<D>,
    data: Vec<T>,
}

impl<T, D: Dim> Index<UVec<D>> for NdArray<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, pos: UVec<D>) -> &T {
        &self.data[self.size.flatten_idx(&pos)]
    }
}
impl<T, D: Dim> IndexMut<UVec<D>> for NdArray<T, D> {
    #[inline]
    fn index_mut(&mut self, pos: UVec<D>) -> &mut T {
        let idx = self.size.flatten_idx(&pos);
        &mut self.data[idx]
    }
}

impl<T: fmt::Display, D: Dim> fmt::Display for NdArray<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] (shape {})", self.data.iter().join(", "), self.size)
    }
}

impl<T, D: Dim> NdArray<T, D> {
    /// Creates an `NdArray` from a flat vector.
    ///
    /// # Panics
    ///
    /// This function panics if the length of `data` does not match `size`.
    #[inline]
    pub fn from_flat_slice(size: UVec<D>, data: impl Into<Vec<T>>) -> Self {
        let data = data.into();
        assert_eq!(size.product(), data.len(), "Wrong size for NdArray");
        Self { size, data }
    }

    /// Returns the flat data behind the array as a slice.
    #[inline]
    pub fn as_flat_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the size of the array along each axis.
    #[inline]
    pub fn size(&self) -> &UVec<D> {
        &self.size
    }

    /// Returns an iterator over all the elements in the array, enumerated by
    /// their positions.
    #[inline]
    pub fn iter_enumerated(&self) -> impl '_ + Iterator<Item = (UVec<D>, &T)> {
        self.size.positions().zip(&self.data)
    }

    /// Creates a new array of the same size and shape by applying a function to
    /// every element in the array.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> NdArray<U, D> {
        NdArray::from_flat_slice(self.size.clone(), self.data.iter().map(f).collect_vec())
    }

    /// Returns the index into `data` of an absolute position.
    fn flat_idx(&self, pos: &IVec<D>) -> usize {
        let pos = pos
            .to_uvec()
            .unwrap_or_else(|| panic!("position {} out of range {}", pos, self.size));
        self.size.flatten_idx(&pos)
    }
}

/// Allocates a flat vector for a container of shape `shape`, initializing
/// each element by calling `f` with its position in X-fastest order.
pub(crate) fn allocate_flat<D: Dim, T>(
    shape: &UVec<D>,
    f: impl FnMut(UVec<D>) -> T,
) -> CircularResult<Vec<T>> {
    let allocation_error = || CircularError::Allocation {
        shape: shape.as_slice().to_vec(),
    };
    check_index_range(&IVec::origin(), shape)?;
    let count = shape.checked_product().ok_or_else(allocation_error)?;
    let mut data = Vec::new();
    data.try_reserve_exact(count)
        .map_err(|_| allocation_error())?;
    data.extend(shape.positions().map(f));
    Ok(data)
}

/// Checks that every index in `origin..origin+shape` along each axis,
/// including the exclusive end, is representable as an `isize`.
fn check_index_range<D: Dim>(origin: &IVec<D>, shape: &UVec<D>) -> CircularResult<()> {
    let representable = D::axes().iter().all(|&ax| {
        isize::try_from(shape[ax])
            .ok()
            .and_then(|extent| origin[ax].checked_add(extent))
            .is_some()
    });
    if representable {
        Ok(())
    } else {
        Err(CircularError::Allocation {
            shape: shape.as_slice().to_vec(),
        })
    }
}

impl<T, D: Dim> Backing<D> for NdArray<T, D> {
    type Elem = T;
    type Error = Infallible;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn shape(&self) -> UVec<D> {
        self.size.clone()
    }
    #[inline]
    fn index_style(&self) -> IndexStyle {
        IndexStyle::Linear
    }
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn cell(&self, pos: &IVec<D>) -> &T {
        &self.data[self.flat_idx(pos)]
    }
    #[inline]
    fn cell_mut(&mut self, pos: &IVec<D>) -> &mut T {
        let idx = self.flat_idx(pos);
        &mut self.data[idx]
    }

    #[inline]
    fn linear_cell(&self, idx: usize) -> &T {
        &self.data[idx]
    }
    #[inline]
    fn linear_cell_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.data.iter()
    }
}

impl<T, D: Dim> Allocate<D> for NdArray<T, D> {
    fn allocate(shape: UVec<D>, f: impl FnMut(UVec<D>) -> T) -> CircularResult<Self> {
        let data = allocate_flat(&shape, f)?;
        Ok(Self { size: shape, data })
    }
}

impl<T, D: Dim> SameKind<D> for NdArray<T, D> {
    type Like<U> = NdArray<U, D>;

    fn build_like<U>(
        &self,
        shape: UVec<D>,
        f: impl FnMut(UVec<D>) -> U,
    ) -> CircularResult<NdArray<U, D>> {
        NdArray::allocate(shape, f)
    }
}

impl<T> SequenceBacking for NdArray<T, Dim1D> {
    fn remove(&mut self, pos: isize) -> Result<T, Infallible> {
        let idx = self.flat_idx(&IVec::from_fn(|_| pos));
        let ret = self.data.remove(idx);
        self.size[Axis::X] -= 1;
        Ok(ret)
    }

    fn insert(&mut self, pos: isize, value: T) -> Result<(), Infallible> {
        let idx = self.flat_idx(&IVec::from_fn(|_| pos));
        self.data.insert(idx, value);
        self.size[Axis::X] += 1;
        Ok(())
    }

    fn remove_sorted(&mut self, positions: &[isize]) -> Result<Vec<T>, Infallible> {
        let offsets = positions.iter().map(|&p| p as usize).collect_vec();
        let (removed, kept) = partition_sorted(std::mem::take(&mut self.data), &offsets);
        self.data = kept;
        self.size[Axis::X] = self.data.len();
        Ok(removed)
    }
}

/// `D`-dimensional array whose minimum coordinate along each axis is an
/// arbitrary `origin`, such as 1 for a 1-based array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OffsetArray<T, D: Dim> {
    array: NdArray<T, D>,
    origin: IVec<D>,
}

impl<T, D: Dim> AsRef<NdArray<T, D>> for OffsetArray<T, D> {
    fn as_ref(&self) -> &NdArray<T, D> {
        &self.array
    }
}

impl<T, D: Dim> Index<&IVec<D>> for OffsetArray<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, pos: &IVec<D>) -> &T {
        self.cell(pos)
    }
}
impl<T, D: Dim> IndexMut<&IVec<D>> for OffsetArray<T, D> {
    #[inline]
    fn index_mut(&mut self, pos: &IVec<D>) -> &mut T {
        self.cell_mut(pos)
    }
}

impl<T: fmt::Display, D: Dim> fmt::Display for OffsetArray<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] (shape {}, origin {})",
            self.array.data.iter().join(", "),
            self.array.size,
            self.origin,
        )
    }
}

impl<T, D: Dim> OffsetArray<T, D> {
    /// Creates an `OffsetArray` whose minimum coordinate is `origin`.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the range of indices along
    /// some axis would extend past `isize::MAX`.
    #[inline]
    pub fn new(array: NdArray<T, D>, origin: IVec<D>) -> CircularResult<Self> {
        check_index_range(&origin, &array.size)?;
        Ok(Self { array, origin })
    }
    /// Creates a 1-based `OffsetArray`.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::Allocation` if the range of indices along
    /// some axis would extend past `isize::MAX`.
    #[inline]
    pub fn one_based(array: NdArray<T, D>) -> CircularResult<Self> {
        Self::new(array, IVec::repeat(1))
    }

    /// Returns the zero-based array behind this one.
    #[inline]
    pub fn into_inner(self) -> NdArray<T, D> {
        self.array
    }

    fn relative(&self, pos: &IVec<D>) -> IVec<D> {
        pos.clone() - self.origin.clone()
    }
}

impl<T, D: Dim> Backing<D> for OffsetArray<T, D> {
    type Elem = T;
    type Error = Infallible;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn shape(&self) -> UVec<D> {
        self.array.shape()
    }
    #[inline]
    fn origin(&self) -> IVec<D> {
        self.origin.clone()
    }
    #[inline]
    fn index_style(&self) -> IndexStyle {
        self.array.index_style()
    }
    #[inline]
    fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    fn cell(&self, pos: &IVec<D>) -> &T {
        self.array.cell(&self.relative(pos))
    }
    #[inline]
    fn cell_mut(&mut self, pos: &IVec<D>) -> &mut T {
        let pos = self.relative(pos);
        self.array.cell_mut(&pos)
    }

    #[inline]
    fn linear_cell(&self, idx: usize) -> &T {
        self.array.linear_cell(idx)
    }
    #[inline]
    fn linear_cell_mut(&mut self, idx: usize) -> &mut T {
        self.array.linear_cell_mut(idx)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.array.iter()
    }
}

impl<T, D: Dim> Allocate<D> for OffsetArray<T, D> {
    /// Allocates a zero-based `OffsetArray`.
    fn allocate(shape: UVec<D>, f: impl FnMut(UVec<D>) -> T) -> CircularResult<Self> {
        Self::new(NdArray::allocate(shape, f)?, IVec::origin())
    }
}

impl<T, D: Dim> SameKind<D> for OffsetArray<T, D> {
    type Like<U> = OffsetArray<U, D>;

    /// Builds an `OffsetArray` with the same origin as this one.
    fn build_like<U>(
        &self,
        shape: UVec<D>,
        f: impl FnMut(UVec<D>) -> U,
    ) -> CircularResult<OffsetArray<U, D>> {
        check_index_range(&self.origin, &shape)?;
        OffsetArray::new(NdArray::allocate(shape, f)?, self.origin.clone())
    }
}

impl<T> SequenceBacking for OffsetArray<T, Dim1D> {
    fn remove(&mut self, pos: isize) -> Result<T, Infallible> {
        self.array.remove(pos - self.origin[Axis::X])
    }

    /// # Panics
    ///
    /// This method panics if the grown range of indices would extend past
    /// `isize::MAX`, the same way `Vec::insert` panics on capacity overflow.
    fn insert(&mut self, pos: isize, value: T) -> Result<(), Infallible> {
        let grown = NdVec([self.array.len() + 1]);
        assert!(
            check_index_range(&self.origin, &grown).is_ok(),
            "index range overflow",
        );
        self.array.insert(pos - self.origin[Axis::X], value)
    }

    fn remove_sorted(&mut self, positions: &[isize]) -> Result<Vec<T>, Infallible> {
        let first = self.origin[Axis::X];
        let relative = positions.iter().map(|&p| p - first).collect_vec();
        self.array.remove_sorted(&relative)
    }
}

/// 1D array of values of type `T`.
pub type Array1D<T> = NdArray<T, Dim1D>;
/// 2D array of values of type `T`.
pub type Array2D<T> = NdArray<T, Dim2D>;
/// 3D array of values of type `T`.
pub type Array3D<T> = NdArray<T, Dim3D>;
/// 4D array of values of type `T`.
pub type Array4D<T> = NdArray<T, Dim4D>;
/// 5D array of values of type `T`.
pub type Array5D<T> = NdArray<T, Dim5D>;
/// 6D array of values of type `T`.
pub type Array6D<T> = NdArray<T, Dim6D>;
