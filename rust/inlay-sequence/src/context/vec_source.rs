//! A finite, removable context backed by an owned vector.

use inlay_common::{Result, error::Error};

use crate::{backtrack::BacktrackDetector, presence::Presence, sequence::Sequence};

/// Returns a sequence over the elements of `items`, in order.
///
/// Unlike a generated sequence, a vector-backed sequence has a real backing
/// store, so [`remove_current`](Sequence::remove_current) is supported: it
/// drops the element most recently produced and yields the element that takes
/// its place.
///
/// # Examples
///
/// ```
/// use inlay_sequence::from_vec;
///
/// let mut seq = from_vec(vec![1, 2, 3]);
/// assert_eq!(seq.advance().unwrap().value().unwrap(), 1);
/// // Drop the 1; removal also steps to the next element.
/// assert_eq!(seq.remove_current().unwrap().value().unwrap(), 2);
/// assert_eq!(seq.advance().unwrap().value().unwrap(), 3);
/// assert!(seq.advance().unwrap().is_absent());
/// seq.dispose().unwrap();
/// ```
pub fn from_vec<T: Clone>(items: Vec<T>) -> Sequence<T, VecContext<T>> {
    VecContext::sequence(items)
}

/// Traversal state of a [`from_vec`] sequence.
#[derive(Clone)]
pub struct VecContext<T> {
    items: Vec<T>,
    /// Position of the next element to produce.
    next: usize,
    /// Index of the element most recently produced, if any.
    current: Option<usize>,
    detector: BacktrackDetector,
}

impl<T: Clone> VecContext<T> {
    fn sequence(items: Vec<T>) -> Sequence<T, VecContext<T>> {
        Sequence::new(
            VecContext {
                items,
                next: 0,
                current: None,
                detector: BacktrackDetector::borrow(),
            },
            Self::advance,
            Self::remove,
            Self::dispose,
        )
    }

    /// Produces the element at `next` and records it as current, or reports
    /// exhaustion.
    fn produce_next(context: &mut Self) -> Presence<T> {
        if context.next < context.items.len() {
            let value = context.items[context.next].clone();
            context.current = Some(context.next);
            context.next += 1;
            Presence::Present(value)
        } else {
            context.current = None;
            Presence::Absent
        }
    }

    fn advance(context: &mut Self) -> Result<Presence<T>> {
        context.detector.detect_backtrack()?;
        Ok(Self::produce_next(context))
    }

    fn remove(context: &mut Self) -> Result<Presence<T>> {
        let Some(current) = context.current else {
            return Err(Error::invalid_state(
                "remove_current without a current element",
            ));
        };
        context.detector.detect_backtrack()?;

        context.items.remove(current);
        // The element after the removed one slid into its slot.
        context.next = current;
        Ok(Self::produce_next(context))
    }

    fn dispose(context: &mut Self) -> Result<Presence<T>> {
        context.detector.release()?;
        Ok(Presence::Absent)
    }
}

impl<T> VecContext<T> {
    /// The elements not yet removed, in their current order.
    pub fn remaining(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inlay_common::error::ErrorKind;

    #[test]
    fn test_in_order_traversal() {
        let mut seq = from_vec(vec![10, 20, 30]);
        assert_eq!(seq.advance().unwrap(), Presence::Present(10));
        assert_eq!(seq.advance().unwrap(), Presence::Present(20));
        assert_eq!(seq.advance().unwrap(), Presence::Present(30));
        assert_eq!(seq.advance().unwrap(), Presence::Absent);
        seq.dispose().unwrap();
    }

    #[test]
    fn test_empty_vec_is_exhausted_immediately() {
        let mut seq = from_vec(Vec::<i32>::new());
        assert_eq!(seq.advance().unwrap(), Presence::Absent);
        seq.dispose().unwrap();
    }

    #[test]
    fn test_remove_drops_current_and_yields_next() {
        let mut seq = from_vec(vec![1, 2, 3, 4]);
        assert_eq!(seq.advance().unwrap(), Presence::Present(1));
        assert_eq!(seq.remove_current().unwrap(), Presence::Present(2));
        assert_eq!(seq.advance().unwrap(), Presence::Present(3));
        assert_eq!(seq.remove_current().unwrap(), Presence::Present(4));
        assert_eq!(seq.context().remaining(), &[2, 4]);
        seq.dispose().unwrap();
    }

    #[test]
    fn test_chained_removes_drain_the_vec() {
        let mut seq = from_vec(vec![1, 2, 3]);
        assert_eq!(seq.advance().unwrap(), Presence::Present(1));
        assert_eq!(seq.remove_current().unwrap(), Presence::Present(2));
        assert_eq!(seq.remove_current().unwrap(), Presence::Present(3));
        assert_eq!(seq.remove_current().unwrap(), Presence::Absent);
        assert!(seq.context().remaining().is_empty());
        seq.dispose().unwrap();
    }

    #[test]
    fn test_remove_of_last_element_reports_exhaustion() {
        let mut seq = from_vec(vec![5]);
        assert_eq!(seq.advance().unwrap(), Presence::Present(5));
        assert_eq!(seq.remove_current().unwrap(), Presence::Absent);
        seq.dispose().unwrap();
    }

    #[test]
    fn test_remove_before_advance_fails() {
        let mut seq = from_vec(vec![1, 2]);
        let err = seq.remove_current().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidState { .. }));
        seq.dispose().unwrap();
    }

    #[test]
    fn test_remove_after_exhaustion_fails() {
        let mut seq = from_vec(vec![1]);
        seq.advance().unwrap();
        assert_eq!(seq.advance().unwrap(), Presence::Absent);
        let err = seq.remove_current().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidState { .. }));
        seq.dispose().unwrap();
    }

    #[test]
    fn test_stale_copy_advance_faults() {
        let mut a = from_vec(vec![1, 2, 3, 4]);
        let mut b = a.clone();
        a.advance().unwrap();
        a.advance().unwrap();
        let err = b.advance().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::BacktrackDetected { .. }));
        a.dispose().unwrap();
    }
}
