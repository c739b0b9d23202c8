//! The trivially exhausted context.

use std::marker::PhantomData;

use inlay_common::{Result, error::Error};

use crate::{presence::Presence, sequence::Sequence};

/// Returns a sequence that is exhausted from the start.
///
/// The context carries no state at all, which also makes it an example of a
/// context opting out of backtrack protection: with nothing to traverse there
/// is nothing a stale copy could corrupt.
pub fn empty<T>() -> Sequence<T, EmptyContext<T>> {
    Sequence::new(
        EmptyContext {
            _marker: PhantomData,
        },
        EmptyContext::advance,
        EmptyContext::remove,
        EmptyContext::dispose,
    )
}

/// Traversal state of an [`empty`] sequence.
#[derive(Clone)]
pub struct EmptyContext<T> {
    _marker: PhantomData<T>,
}

impl<T> EmptyContext<T> {
    fn advance(_context: &mut Self) -> Result<Presence<T>> {
        Ok(Presence::Absent)
    }

    fn remove(_context: &mut Self) -> Result<Presence<T>> {
        Err(Error::invalid_state(
            "remove_current without a current element",
        ))
    }

    fn dispose(_context: &mut Self) -> Result<Presence<T>> {
        Ok(Presence::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inlay_common::error::ErrorKind;

    #[test]
    fn test_exhausted_from_the_start() {
        let mut seq = empty::<String>();
        assert_eq!(seq.advance().unwrap(), Presence::Absent);
        assert_eq!(seq.advance().unwrap(), Presence::Absent);
        seq.dispose().unwrap();
    }

    #[test]
    fn test_remove_fails() {
        let mut seq = empty::<u8>();
        seq.advance().unwrap();
        let err = seq.remove_current().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidState { .. }));
        seq.dispose().unwrap();
    }
}
