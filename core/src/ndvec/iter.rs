//! Iterator over the positions of a container with a given shape.

use super::UVec;
use crate::dim::Dim;

/// Iterator over the zero-based positions of a container, with the X axis
/// varying fastest.
#[derive(Debug, Clone)]
pub struct Positions<D: Dim> {
    size: UVec<D>,
    next: Option<UVec<D>>,
}
impl<D: Dim> Positions<D> {
    /// Returns an iterator over all positions in `[0, size)`. The iterator is
    /// empty if any component of `size` is zero.
    #[inline]
    pub fn new(size: UVec<D>) -> Self {
        let next = match size.zero_axis() {
            Some(_) => None,
            None => Some(UVec::origin()),
        };
        Self { size, next }
    }
}
impl<D: Dim> Iterator for Positions<D> {
    type Item = UVec<D>;

    #[inline]
    fn next(&mut self) -> Option<UVec<D>> {
        let ret = self.next.clone()?;
        let next = self.next.as_mut()?;
        // Odometer: bump the X axis, carrying into later axes.
        let carried_out = D::axes().iter().all(|&ax| {
            next[ax] += 1;
            if next[ax] < self.size[ax] {
                return false;
            }
            next[ax] = 0;
            true
        });
        if carried_out {
            self.next = None;
        }
        Some(ret)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.next {
            Some(next) => self.size.product() - self.size.flatten_idx(next),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}
impl<D: Dim> ExactSizeIterator for Positions<D> {}
