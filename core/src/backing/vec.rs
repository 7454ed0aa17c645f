//! `Vec` as a 1-dimensional backing container.

use itertools::Itertools;
use std::convert::Infallible;

use super::{partition_sorted, Allocate, Backing, IndexStyle, SameKind, SequenceBacking};
use crate::axis::Axis;
use crate::dim::Dim1D;
use crate::error::CircularResult;
use crate::ndarray::allocate_flat;
use crate::ndvec::{IVec, NdVec, UVec};

impl<T> Backing<Dim1D> for Vec<T> {
    type Elem = T;
    type Error = Infallible;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn shape(&self) -> UVec<Dim1D> {
        NdVec([Vec::len(self)])
    }
    #[inline]
    fn index_style(&self) -> IndexStyle {
        IndexStyle::Linear
    }
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn cell(&self, pos: &IVec<Dim1D>) -> &T {
        &self[pos[Axis::X] as usize]
    }
    #[inline]
    fn cell_mut(&mut self, pos: &IVec<Dim1D>) -> &mut T {
        &mut self[pos[Axis::X] as usize]
    }

    #[inline]
    fn linear_pos(&self, idx: usize) -> IVec<Dim1D> {
        NdVec([idx as isize])
    }
    #[inline]
    fn linear_cell(&self, idx: usize) -> &T {
        &self[idx]
    }
    #[inline]
    fn linear_cell_mut(&mut self, idx: usize) -> &mut T {
        &mut self[idx]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> Allocate<Dim1D> for Vec<T> {
    fn allocate(shape: UVec<Dim1D>, f: impl FnMut(UVec<Dim1D>) -> T) -> CircularResult<Self> {
        allocate_flat(&shape, f)
    }
}

impl<T> SameKind<Dim1D> for Vec<T> {
    type Like<U> = Vec<U>;

    fn build_like<U>(
        &self,
        shape: UVec<Dim1D>,
        f: impl FnMut(UVec<Dim1D>) -> U,
    ) -> CircularResult<Vec<U>> {
        allocate_flat(&shape, f)
    }
}

impl<T> SequenceBacking for Vec<T> {
    #[inline]
    fn remove(&mut self, pos: isize) -> Result<T, Infallible> {
        Ok(Vec::remove(self, pos as usize))
    }

    #[inline]
    fn insert(&mut self, pos: isize, value: T) -> Result<(), Infallible> {
        Vec::insert(self, pos as usize, value);
        Ok(())
    }

    fn remove_sorted(&mut self, positions: &[isize]) -> Result<Vec<T>, Infallible> {
        let offsets = positions.iter().map(|&p| p as usize).collect_vec();
        let (removed, kept) = partition_sorted(std::mem::take(self), &offsets);
        *self = kept;
        Ok(removed)
    }
}
