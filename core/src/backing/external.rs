//! Arrays from the `ndarray` crate as backing containers.
//!
//! `ndarray` axis `k` is circular axis `k`, so the X axis is the outermost
//! (slowest) axis of a standard-layout array. Linear indices follow
//! `ndarray`'s logical row-major order, which matches memory order only for
//! standard-layout arrays; other arrays prefer Cartesian indexing.

use ::ndarray::{Array, Ix1, Ix2, Ix3, Ix4, Ix5, Ix6};
use std::convert::Infallible;

use super::{Allocate, Backing, IndexStyle, SameKind};
use crate::dim::*;
use crate::error::{CircularError, CircularResult};
use crate::fuse::{read_plain, Operand, Plain};
use crate::ndarray::allocate_flat;
use crate::ndvec::{IVec, NdVec, UVec};

/// Returns a vector with the order of its components reversed.
fn reversed<D: Dim>(v: &UVec<D>) -> UVec<D> {
    let components = v.as_slice();
    UVec::from_fn(|ax| components[D::NDIM - 1 - ax.index()])
}

macro_rules! impl_ndarray_backing {
    ($($ix:ty => $dim:ty),+ $(,)?) => {
        $(
            impl<T> Backing<$dim> for Array<T, $ix> {
                type Elem = T;
                type Error = Infallible;
                type Iter<'a> = ::ndarray::iter::Iter<'a, T, $ix> where Self: 'a;

                #[inline]
                fn shape(&self) -> UVec<$dim> {
                    NdVec::from_fn(|ax| self.len_of(::ndarray::Axis(ax.index())))
                }
                #[inline]
                fn index_style(&self) -> IndexStyle {
                    if self.is_standard_layout() {
                        IndexStyle::Linear
                    } else {
                        IndexStyle::Cartesian
                    }
                }
                #[inline]
                fn len(&self) -> usize {
                    Array::len(self)
                }

                #[inline]
                fn cell(&self, pos: &IVec<$dim>) -> &T {
                    &self[pos.0.map(|i| i as usize)]
                }
                #[inline]
                fn cell_mut(&mut self, pos: &IVec<$dim>) -> &mut T {
                    &mut self[pos.0.map(|i| i as usize)]
                }

                /// Returns the position of the element with linear index
                /// `idx` in row-major order.
                fn linear_pos(&self, mut idx: usize) -> IVec<$dim> {
                    let mut ret = IVec::origin();
                    for &ax in <$dim as Dim>::axes().iter().rev() {
                        let extent = self.len_of(::ndarray::Axis(ax.index()));
                        ret[ax] = (idx % extent) as isize;
                        idx /= extent;
                    }
                    ret
                }

                #[inline]
                fn iter(&self) -> Self::Iter<'_> {
                    Array::iter(self)
                }
            }

            impl<T> Allocate<$dim> for Array<T, $ix> {
                /// Allocates a standard-layout array.
                fn allocate(
                    shape: UVec<$dim>,
                    mut f: impl FnMut(UVec<$dim>) -> T,
                ) -> CircularResult<Self> {
                    // Positions of the reversed shape in X-fastest order are
                    // the reversed positions of `shape` in row-major order.
                    let data = allocate_flat(&reversed(&shape), |pos| f(reversed(&pos)))?;
                    Array::from_shape_vec(shape.0, data).map_err(|_| CircularError::Allocation {
                        shape: shape.as_slice().to_vec(),
                    })
                }
            }

            impl<T> SameKind<$dim> for Array<T, $ix> {
                type Like<U> = Array<U, $ix>;

                fn build_like<U>(
                    &self,
                    shape: UVec<$dim>,
                    f: impl FnMut(UVec<$dim>) -> U,
                ) -> CircularResult<Array<U, $ix>> {
                    <Array<U, $ix> as Allocate<$dim>>::allocate(shape, f)
                }
            }

            impl<'a, T> Operand<$dim> for &'a Array<T, $ix> {
                type Elem = T;
                type Kind = Plain<'a, Array<T, $ix>>;

                #[inline]
                fn shape(&self) -> UVec<$dim> {
                    Backing::shape(*self)
                }
                #[inline]
                fn read(&self, pos: &UVec<$dim>) -> &T {
                    read_plain(*self, pos)
                }
                #[inline]
                fn kind(&self) -> Plain<'a, Array<T, $ix>> {
                    Plain(*self)
                }
            }
        )+
    };
}

impl_ndarray_backing!(
    Ix1 => Dim1D,
    Ix2 => Dim2D,
    Ix3 => Dim3D,
    Ix4 => Dim4D,
    Ix5 => Dim5D,
    Ix6 => Dim6D,
);

#[cfg(test)]
mod tests {
    use ::ndarray::{arr2, Array2, ShapeBuilder};

    use super::*;
    use crate::axis::Axis;
    use crate::circular::CircularContainer;
    use crate::fuse::zip_with;

    #[test]
    fn test_ndarray_row_major_linear_order() {
        // 2 rows (X) by 3 columns (Y).
        let c = CircularContainer::wrap(arr2(&[[1, 2, 3], [4, 5, 6]]));
        assert_eq!(NdVec([2, 3]), c.shape());
        assert_eq!(IndexStyle::Linear, c.index_style());
        assert_eq!(Ok(&6), c.get(&NdVec([1, 2])));
        assert_eq!(Ok(&6), c.get(&NdVec([-1, -1])));
        assert_eq!(Ok(&2), c.get_linear(1));
        assert_eq!(Ok(&4), c.get_linear(-3));
        assert_eq!(
            vec![1, 2, 3, 4, 5, 6],
            c.iter().copied().collect::<Vec<_>>(),
        );
    }

    #[test]
    fn test_ndarray_fortran_layout_is_cartesian() {
        let a = Array2::from_shape_vec((2, 3).f(), vec![1, 4, 2, 5, 3, 6]).unwrap();
        let c = CircularContainer::wrap(a);
        assert_eq!(IndexStyle::Cartesian, c.index_style());
        // Linear indices still follow logical row-major order.
        assert_eq!(Ok(&2), c.get_linear(1));
        assert_eq!(Ok(&5), c.get(&NdVec([3, 4])));
    }

    #[test]
    fn test_ndarray_allocate() {
        let c: CircularContainer<Array2<(usize, usize)>, Dim2D> =
            CircularContainer::from_fn(NdVec([2, 3]), |pos| (pos[Axis::X], pos[Axis::Y])).unwrap();
        assert!(c.inner().is_standard_layout());
        assert_eq!(&(1, 2), &c.inner()[[1, 2]]);
        assert_eq!(Ok(&(0, 2)), c.get_linear(2));
    }

    #[test]
    fn test_ndarray_fusion() {
        let a = arr2(&[[1, 2], [3, 4]]);
        let b = CircularContainer::wrap(arr2(&[[10], [20]]));
        let sum = zip_with(&a, &b, |x, y| x + y).unwrap();
        assert_eq!(arr2(&[[11, 12], [23, 24]]), sum.into_inner());
    }
}
