//! The sequence value and its three-operation traversal protocol.

use inlay_common::{Result, error::Error};

use crate::presence::Presence;

/// The uniform shape of the three operations interpreting a sequence context.
///
/// A step mutates the context in place and reports the element it produced
/// (or exhaustion). Steps are plain function pointers: they carry no state of
/// their own, so storing three of them alongside the context adds no
/// allocation and keeps the whole sequence a single copyable value.
pub type StepFn<T, C> = fn(&mut C) -> Result<Presence<T>>;

/// A single-owner, struct-like value that lazily produces a run of elements.
///
/// A `Sequence` bundles an opaque context value with three operation pointers
/// that interpret it: `advance` produces the next element, `remove` drops the
/// current element from the backing source (where one exists), and `dispose`
/// releases any pooled resources the context holds. Composing sequences means
/// building a larger context around a smaller one and supplying a new pointer
/// triple — never a heap allocation.
///
/// Cloning a sequence clones its context. The clone is an independent
/// traversal snapshot, which is cheap but reintroduces one hazard: advancing
/// a stale clone after a newer one has progressed would silently reprocess or
/// skip elements. Contexts that embed a [`BacktrackDetector`] turn that
/// hazard into an immediate [`BacktrackDetected`] error.
///
/// [`BacktrackDetector`]: crate::backtrack::BacktrackDetector
/// [`BacktrackDetected`]: inlay_common::error::ErrorKind::BacktrackDetected
pub struct Sequence<T, C> {
    advance: StepFn<T, C>,
    remove: StepFn<T, C>,
    dispose: StepFn<T, C>,
    context: C,
    disposed: bool,
}

impl<T, C> Sequence<T, C> {
    /// Creates a sequence from a context and its operation pointers.
    ///
    /// This is the raw construction entry point meant for context
    /// implementations; consumers obtain sequences through named factories
    /// such as [`generate`](crate::context::generate) or
    /// [`from_vec`](crate::context::from_vec).
    pub fn new(
        context: C,
        advance: StepFn<T, C>,
        remove: StepFn<T, C>,
        dispose: StepFn<T, C>,
    ) -> Sequence<T, C> {
        Sequence {
            advance,
            remove,
            dispose,
            context,
            disposed: false,
        }
    }

    /// Produces the next element, or `Absent` once the sequence is exhausted.
    ///
    /// Calling `advance` after [`dispose`](Sequence::dispose) is not a
    /// supported pattern, but its behavior is well-defined: the sequence
    /// reports `Absent` without touching the context again.
    #[inline]
    pub fn advance(&mut self) -> Result<Presence<T>> {
        if self.disposed {
            return Ok(Presence::Absent);
        }
        (self.advance)(&mut self.context)
    }

    /// Removes the element most recently produced by `advance` from the
    /// backing source, then produces the element that follows it.
    ///
    /// Only meaningful immediately after an `advance` that returned an
    /// element. Contexts without a removable backing source (pure generators,
    /// for instance) fail with `UnsupportedOperation`; calling out of order
    /// fails with `InvalidState`.
    #[inline]
    pub fn remove_current(&mut self) -> Result<Presence<T>> {
        if self.disposed {
            return Err(Error::invalid_state("remove_current called after dispose"));
        }
        (self.remove)(&mut self.context)
    }

    /// Releases any pooled or external resources held by the context.
    ///
    /// Must be called exactly once per constructed sequence, on normal
    /// exhaustion and on early termination alike. A second call fails with
    /// `InvalidState`.
    pub fn dispose(&mut self) -> Result<()> {
        if self.disposed {
            return Err(Error::invalid_state("sequence already disposed"));
        }
        self.disposed = true;
        (self.dispose)(&mut self.context).map(|_| ())
    }

    /// Returns a shared reference to the underlying context.
    ///
    /// Intended for contexts that wrap other sequences and need to inspect
    /// the inner state they aggregate.
    pub fn context(&self) -> &C {
        &self.context
    }
}

/// Cloning forks the traversal: the context is copied, the operation pointers
/// are shared. Only one of the resulting snapshots should keep traversing.
impl<T, C: Clone> Clone for Sequence<T, C> {
    fn clone(&self) -> Self {
        Sequence {
            advance: self.advance,
            remove: self.remove,
            dispose: self.dispose,
            context: self.context.clone(),
            disposed: self.disposed,
        }
    }
}
