//! Deletion and insertion at circular positions in 1-dimensional containers.

use itertools::Itertools;
use log::debug;

use crate::axis::Axis;
use crate::backing::SequenceBacking;
use crate::circular::CircularSequence;
use crate::error::{CircularError, CircularResult};
use crate::ndvec::NdVec;

impl<B: SequenceBacking> CircularSequence<B> {
    /// Wraps `idx` into the declared range of the sequence.
    fn wrap_seq_index(&self, idx: isize) -> CircularResult<isize, B::Error> {
        Ok(self.wrap_pos(&NdVec([idx]))?[Axis::X])
    }

    /// Removes and returns the element at a circular index, shifting all
    /// following elements down by one.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if the sequence is empty, or
    /// `CircularError::Backing` if the backing container cannot shrink.
    pub fn delete_at(&mut self, idx: isize) -> CircularResult<B::Elem, B::Error> {
        let pos = self.wrap_seq_index(idx)?;
        self.inner_mut()
            .remove(pos)
            .map_err(CircularError::Backing)
    }

    /// Removes the elements at a batch of circular indices and returns them
    /// in ascending order of position.
    ///
    /// Every index is wrapped against the length of the sequence *before*
    /// any element is removed, so later indices are not shifted by earlier
    /// removals. Indices that wrap to the same position remove that element
    /// only once. An empty batch removes nothing, even from an empty
    /// sequence. If every position is covered, the sequence becomes empty.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if the batch is nonempty and the
    /// sequence is empty, or `CircularError::Backing` if the backing
    /// container cannot shrink. The sequence is unchanged on error.
    pub fn delete_at_many(
        &mut self,
        indices: impl IntoIterator<Item = isize>,
    ) -> CircularResult<Vec<B::Elem>, B::Error> {
        let positions: Vec<isize> = indices
            .into_iter()
            .map(|idx| self.wrap_seq_index(idx))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .sorted()
            .dedup()
            .collect();
        if positions.is_empty() {
            return Ok(vec![]);
        }
        debug!(
            "Deleting {} of {} elements from circular sequence",
            positions.len(),
            self.len(),
        );
        self.inner_mut()
            .remove_sorted(&positions)
            .map_err(CircularError::Backing)
    }

    /// Inserts `value` so that it ends up at the wrapped position of `idx`,
    /// shifting the element previously there and all following elements up
    /// by one.
    ///
    /// # Errors
    ///
    /// Returns `CircularError::ZeroExtent` if the sequence is empty, or
    /// `CircularError::Backing` if the backing container cannot grow.
    pub fn insert_at(&mut self, idx: isize, value: B::Elem) -> CircularResult<(), B::Error> {
        let pos = self.wrap_seq_index(idx)?;
        self.inner_mut()
            .insert(pos, value)
            .map_err(CircularError::Backing)
    }
}
