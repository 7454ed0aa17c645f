//! Arithmetic operators on circular containers.

use std::ops::{Add, Div, Mul, Rem, Sub};

use super::zip_with;
use crate::backing::SameKind;
use crate::circular::CircularContainer;
use crate::dim::Dim;

macro_rules! impl_elementwise_op {
    ($($op_trait:ident :: $op_fn:ident as $op:tt),+ $(,)?) => {
        $(
            /// Applies the operator elementwise, broadcasting axes of extent
            /// 1. The result is a circular container of the left operand's
            /// backing kind.
            ///
            /// # Panics
            ///
            /// This method panics if the shapes cannot be broadcast together
            /// or the result cannot be allocated. Use [`zip_with()`] to
            /// handle those cases as errors.
            impl<'a, 'b, B, C, D> $op_trait<&'b CircularContainer<C, D>> for &'a CircularContainer<B, D>
            where
                D: Dim,
                B: SameKind<D>,
                C: SameKind<D>,
                B::Elem: Clone + $op_trait<C::Elem>,
                C::Elem: Clone,
            {
                type Output = CircularContainer<B::Like<<B::Elem as $op_trait<C::Elem>>::Output>, D>;

                fn $op_fn(self, rhs: &'b CircularContainer<C, D>) -> Self::Output {
                    zip_with(self, rhs, |l, r| l.clone() $op r.clone())
                        .unwrap_or_else(|e| panic!("{}", e))
                }
            }
        )+
    };
}

impl_elementwise_op!(
    Add::add as +,
    Sub::sub as -,
    Mul::mul as *,
    Div::div as /,
    Rem::rem as %,
);

#[cfg(test)]
mod tests {
    use crate::ndarray::{Array2D, NdArray, OffsetArray};
    use crate::prelude::*;

    fn circ(size: [usize; 2], data: Vec<i32>) -> CircularContainer<Array2D<i32>, Dim2D> {
        CircularContainer::wrap(NdArray::from_flat_slice(NdVec(size), data))
    }

    #[test]
    fn test_operators_elementwise() {
        let a = circ([2, 2], vec![1, 2, 3, 4]);
        let b = circ([2, 2], vec![10, 20, 30, 40]);
        assert_eq!(&[11, 22, 33, 44], (&a + &b).inner().as_flat_slice());
        assert_eq!(&[9, 18, 27, 36], (&b - &a).inner().as_flat_slice());
        assert_eq!(&[10, 40, 90, 160], (&a * &b).inner().as_flat_slice());
        assert_eq!(&[10, 10, 10, 10], (&b / &a).inner().as_flat_slice());
        assert_eq!(&[1, 2, 3, 4], (&a % &b).inner().as_flat_slice());
    }

    #[test]
    fn test_operators_broadcast() {
        let grid = circ([3, 2], vec![0, 1, 2, 3, 4, 5]);
        let row = circ([3, 1], vec![100, 200, 300]);
        let sum = &grid + &row;
        assert_eq!(NdVec([3, 2]), sum.shape());
        assert_eq!(&[100, 201, 302, 103, 204, 305], sum.inner().as_flat_slice());
    }

    #[test]
    fn test_operators_keep_left_backing_kind() {
        let a = CircularContainer::wrap(OffsetArray::new(
            NdArray::from_flat_slice(NdVec([2, 1]), vec![1, 2]),
            NdVec([-3, 5]),
        ).unwrap());
        let b = circ([2, 1], vec![3, 4]);
        let c: CircularContainer<OffsetArray<i32, Dim2D>, Dim2D> = &a * &b;
        assert_eq!(NdVec([-3, 5]), c.origin());
        assert_eq!(vec![3, 8], c.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "cannot broadcast shape [2, 2] with shape [3, 2]")]
    fn test_operator_shape_mismatch_panics() {
        let a = circ([2, 2], vec![0; 4]);
        let b = circ([3, 2], vec![0; 6]);
        let _ = &a + &b;
    }
}
