//! Wraparound arithmetic.
//!
//! Every index `i` along an axis whose valid indices are `first..first+len`
//! is remapped to `((i - first) mod len) + first`, using floored modulo so
//! that negative indices wrap from the end. The mapping is total for all
//! integers as long as `len` is nonzero.

use crate::axis::Axis;
use crate::dim::Dim;
use crate::error::{CircularError, CircularResult};
use crate::ndvec::{IVec, UVec};
use crate::num::Integer;

/// Wraps the index `i` into the range `first..first+len`, or returns `None`
/// if `len` is zero.
///
/// The subtraction is done in `i128` so that no combination of `isize`
/// arguments can overflow.
#[inline]
pub fn wrap_index(i: isize, first: isize, len: usize) -> Option<isize> {
    if len == 0 {
        return None;
    }
    let offset = (i as i128 - first as i128).mod_floor(&(len as i128));
    // `offset < len`, and backings keep `first + len` representable, so this
    // cannot overflow.
    Some(first + offset as isize)
}

/// Wraps the linear index `i` into the range `0..len`, or returns `None` if
/// `len` is zero.
#[inline]
pub fn wrap_linear(i: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((i as i128).mod_floor(&(len as i128)) as usize)
}

/// Wraps each component of `pos` into the corresponding range
/// `origin..origin+shape`.
///
/// # Errors
///
/// Returns `CircularError::ZeroExtent` naming the first axis with extent 0.
#[inline]
pub fn wrap_pos<D: Dim>(
    pos: &IVec<D>,
    origin: &IVec<D>,
    shape: &UVec<D>,
) -> CircularResult<IVec<D>> {
    let mut ret = IVec::origin();
    for &ax in D::axes() {
        ret[ax] = wrap_index(pos[ax], origin[ax], shape[ax]).ok_or_else(|| zero_extent(ax))?;
    }
    Ok(ret)
}

/// Wraps each component of `pos` into `0..shape`, returning a zero-based
/// position.
///
/// # Errors
///
/// Returns `CircularError::ZeroExtent` naming the first axis with extent 0.
#[inline]
pub fn wrap_offset<D: Dim>(pos: &IVec<D>, shape: &UVec<D>) -> CircularResult<UVec<D>> {
    let mut ret = UVec::origin();
    for &ax in D::axes() {
        ret[ax] = wrap_linear(pos[ax], shape[ax]).ok_or_else(|| zero_extent(ax))?;
    }
    Ok(ret)
}

fn zero_extent(axis: Axis) -> CircularError {
    CircularError::ZeroExtent { axis: Some(axis) }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::dim::Dim2D;
    use crate::ndvec::NdVec;

    #[test]
    fn test_wrap_index_zero_based() {
        assert_eq!(Some(4), wrap_index(-1, 0, 5));
        assert_eq!(Some(4), wrap_index(4, 0, 5));
        assert_eq!(Some(4), wrap_index(9, 0, 5));
        assert_eq!(Some(0), wrap_index(5, 0, 5));
        assert_eq!(Some(0), wrap_index(-5, 0, 5));
        assert_eq!(None, wrap_index(3, 0, 0));
    }

    #[test]
    fn test_wrap_index_one_based() {
        // Valid indices are 1..=3.
        assert_eq!(Some(3), wrap_index(0, 1, 3));
        assert_eq!(Some(1), wrap_index(4, 1, 3));
        assert_eq!(Some(2), wrap_index(-1, 1, 3));
        assert_eq!(Some(3), wrap_index(3, 1, 3));
    }

    #[test]
    fn test_wrap_index_extremes() {
        assert_eq!(Some(isize::MAX % 7), wrap_index(isize::MAX, 0, 7));
        assert_eq!(Some(-8), wrap_index(isize::MIN, -10, 10));
        assert_eq!(Some(isize::MIN), wrap_index(isize::MAX, isize::MIN, 1));
    }

    #[test]
    fn test_wrap_pos_reports_axis() {
        let shape: UVec<Dim2D> = NdVec([3, 0]);
        let err = wrap_pos(&NdVec([1, 1]), &IVec::origin(), &shape).unwrap_err();
        assert_eq!(CircularError::ZeroExtent { axis: Some(Axis::Y) }, err);
    }

    #[test]
    fn test_wrap_pos_with_origin() {
        let shape: UVec<Dim2D> = NdVec([3, 4]);
        let origin: IVec<Dim2D> = NdVec([1, -2]);
        assert_eq!(Ok(NdVec([3, 1])), wrap_pos(&NdVec([0, 5]), &origin, &shape));
        assert_eq!(Ok(NdVec([2, 3])), wrap_offset(&NdVec([-1, 7]), &shape));
    }

    proptest! {
        #[test]
        fn test_wrap_index_in_range(i: isize, first in -1000..1000_isize, len in 1..1000_usize) {
            let wrapped = wrap_index(i, first, len).unwrap();
            prop_assert!(first <= wrapped && wrapped < first + len as isize);
        }

        #[test]
        fn test_wrap_index_periodic(i in -100_000..100_000_isize, first in -50..50_isize, len in 1..500_usize) {
            let l = len as isize;
            let wrapped = wrap_index(i, first, len);
            prop_assert_eq!(wrapped, wrap_index(i + l, first, len));
            prop_assert_eq!(wrapped, wrap_index(i - l, first, len));
        }

        #[test]
        fn test_wrap_index_is_identity_in_range(first in -50..50_isize, len in 1..500_usize, k in 0..500_usize) {
            let k = k % len;
            let i = first + k as isize;
            prop_assert_eq!(Some(i), wrap_index(i, first, len));
        }

        #[test]
        fn test_wrap_linear_matches_wrap_index(i: isize, len in 1..1000_usize) {
            prop_assert_eq!(
                wrap_index(i, 0, len).map(|w| w as usize),
                wrap_linear(i, len)
            );
        }
    }
}
