//! Errors produced by circular containers.

use std::convert::Infallible;
use thiserror::Error;

use crate::axis::Axis;

/// Result type returned by fallible circular container routines.
///
/// `E` is the error type of the backing container, which is propagated
/// unchanged through `CircularError::Backing`.
pub type CircularResult<T, E = Infallible> = Result<T, CircularError<E>>;

/// Error encountered while indexing, constructing, or combining circular
/// containers.
///
/// Every variant except `Backing` is raised by the adapter itself; `Backing`
/// carries an error from the wrapped container without reinterpreting it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircularError<E = Infallible>
where
    E: std::error::Error + 'static,
{
    /// Wrong number of indices (neither `expected` indices nor a single
    /// linear index).
    #[error("expected {expected} indices or 1 linear index, got {got}")]
    Arity {
        /// Number of dimensions of the container.
        expected: usize,
        /// Number of indices supplied.
        got: usize,
    },

    /// Attempted to wrap an index along an axis with extent 0, or a linear
    /// index into a container with no elements (`axis` is `None`).
    #[error("cannot wrap index {}: extent is 0", wrap_target(.axis))]
    ZeroExtent {
        /// Axis that has extent 0, or `None` for linear indexing.
        axis: Option<Axis>,
    },

    /// Requested shape has a negative extent.
    #[error("invalid extent {extent} along {axis} axis")]
    InvalidExtent {
        /// Axis with the invalid extent.
        axis: Axis,
        /// Requested extent.
        extent: isize,
    },

    /// Requested shape describes more elements than can be allocated.
    #[error("cannot allocate container with shape {shape:?}")]
    Allocation {
        /// Requested shape.
        shape: Vec<usize>,
    },

    /// Operands of an elementwise operation cannot be broadcast together.
    #[error("cannot broadcast shape {lhs:?} with shape {rhs:?}")]
    ShapeMismatch {
        /// Shape accumulated so far.
        lhs: Vec<usize>,
        /// Shape of the offending operand.
        rhs: Vec<usize>,
    },

    /// Error raised by the backing container.
    #[error(transparent)]
    Backing(E),
}

fn wrap_target(axis: &Option<Axis>) -> String {
    match axis {
        Some(ax) => format!("along {} axis", ax),
        None => "into empty container".to_string(),
    }
}

impl CircularError<Infallible> {
    /// Converts an error that cannot have come from a backing container into
    /// one with any backing error type.
    pub fn widen<E: std::error::Error + 'static>(self) -> CircularError<E> {
        match self {
            Self::Arity { expected, got } => CircularError::Arity { expected, got },
            Self::ZeroExtent { axis } => CircularError::ZeroExtent { axis },
            Self::InvalidExtent { axis, extent } => CircularError::InvalidExtent { axis, extent },
            Self::Allocation { shape } => CircularError::Allocation { shape },
            Self::ShapeMismatch { lhs, rhs } => CircularError::ShapeMismatch { lhs, rhs },
            Self::Backing(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e: CircularError = CircularError::ZeroExtent { axis: Some(Axis::Y) };
        assert_eq!("cannot wrap index along Y axis: extent is 0", e.to_string());
        let e: CircularError = CircularError::ZeroExtent { axis: None };
        assert_eq!("cannot wrap index into empty container: extent is 0", e.to_string());
        let e: CircularError = CircularError::Arity { expected: 3, got: 2 };
        assert_eq!("expected 3 indices or 1 linear index, got 2", e.to_string());
    }

    #[test]
    fn test_widen_preserves_variant() {
        let e: CircularError = CircularError::InvalidExtent { axis: Axis::X, extent: -2 };
        let widened: CircularError<std::fmt::Error> = e.widen();
        assert_eq!(
            CircularError::InvalidExtent { axis: Axis::X, extent: -2 },
            widened,
        );
    }
}
