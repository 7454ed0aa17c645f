//! Enumeration of axes.
//!
//! These are used for indexing specific components of an `NdVec` and for
//! reporting which axis an index could not be wrapped along.

use std::fmt;

pub use Axis::*;

/// Enumeration of the six axes a circular container can have.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (axis 0).
    X = 0,
    /// Y axis (axis 1).
    Y = 1,
    /// Z axis (axis 2).
    Z = 2,
    /// W axis (axis 3).
    W = 3,
    /// U axis (axis 4).
    U = 4,
    /// V axis (axis 5).
    V = 5,
}

impl Axis {
    /// Returns the name of the axis.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::W => "W",
            Axis::U => "U",
            Axis::V => "V",
        }
    }

    /// Returns the position of this axis in an index tuple.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// List of axes in order.
pub const AXES: &[Axis] = &[Axis::X, Axis::Y, Axis::Z, Axis::W, Axis::U, Axis::V];

/// Returns a list of axes up to some number of dimensions.
#[inline]
pub fn ndim_axes(ndim: usize) -> &'static [Axis] {
    &AXES[..ndim]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_iter() {
        assert_eq!(vec![Axis::X, Axis::Y, Axis::Z, Axis::W], ndim_axes(4));
    }

    #[test]
    fn test_axis_index_matches_order() {
        for (i, &ax) in AXES.iter().enumerate() {
            assert_eq!(i, ax.index());
        }
        assert_eq!("W", W.to_string());
    }
}
