//! Bridging the traversal protocol to `std::iter::Iterator`.

use inlay_common::{Result, try_step};

use crate::sequence::Sequence;

impl<T, C> IntoIterator for Sequence<T, C> {
    type Item = Result<T>;
    type IntoIter = SequenceIter<T, C>;

    /// Adapts the sequence to a standard iterator.
    ///
    /// The iterator owns the sequence and takes over its disposal: it
    /// disposes on the step that observes exhaustion, or on drop when the
    /// caller stops early. Protocol errors (a backtracked clone, for
    /// instance) surface as `Err` items.
    fn into_iter(self) -> SequenceIter<T, C> {
        SequenceIter {
            seq: self,
            done: false,
        }
    }
}

/// Iterator over a sequence's elements, created by `Sequence`'s
/// [`IntoIterator`] impl.
pub struct SequenceIter<T, C> {
    seq: Sequence<T, C>,
    /// Set once the sequence reported exhaustion and was disposed.
    done: bool,
}

impl<T, C> Iterator for SequenceIter<T, C> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }
        let presence = try_step!(self.seq.advance());
        match presence.into_option() {
            Some(value) => Some(Ok(value)),
            None => {
                self.done = true;
                try_step!(self.seq.dispose());
                None
            }
        }
    }
}

impl<T, C> Drop for SequenceIter<T, C> {
    fn drop(&mut self) {
        if !self.done {
            // Dispose errors have no reporting channel from a drop.
            let _ = self.seq.dispose();
        }
    }
}
