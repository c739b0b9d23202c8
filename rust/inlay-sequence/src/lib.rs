//! Allocation-free, struct-based lazy sequences.
//!
//! This crate is the iteration backbone for combinator layers that must not
//! allocate per traversal. A [`Sequence`] is a single value: an opaque,
//! value-type context plus three plain function pointers that interpret it.
//! Advancing, removing, or disposing mutates the context in place through a
//! fixed protocol, so composing operators means wrapping contexts in larger
//! contexts — never boxing an iterator object.
//!
//! # Core Concepts
//!
//! ## The traversal protocol
//!
//! Every step has the same shape ([`StepFn`]): mutate the context, report a
//! [`Presence`] — the next element, or the fact that the sequence is
//! exhausted. A consumer loops on [`Sequence::advance`] while elements are
//! present, may call [`Sequence::remove_current`] right after a produced
//! element to drop it from a removable source, and calls
//! [`Sequence::dispose`] exactly once when done, whether it exhausted the
//! sequence or stopped early.
//!
//! ## Copy hazard and backtrack detection
//!
//! Contexts are ordinary cloneable values, so a consumer can accidentally
//! keep a stale snapshot of a traversal and step it after a newer copy has
//! moved on — silently reprocessing or skipping elements. Contexts embed a
//! pooled [`BacktrackDetector`] that turns such replays into an immediate
//! `BacktrackDetected` error instead.
//!
//! ## Contexts
//!
//! Concrete traversal states live in [`context`]: [`generate`] /
//! [`generate_with`] (infinite seed-and-transform generators), [`from_vec`]
//! (finite, removable vector source) and [`empty`]. Each factory returns a
//! ready `Sequence`; the raw [`Sequence::new`] constructor is the extension
//! point for new context kinds.
//!
//! # Example
//!
//! ```
//! use inlay_sequence::generate;
//!
//! let mut powers = generate(1u64, |x| x * 2);
//! let mut total = 0;
//! for _ in 0..8 {
//!     total += powers.advance().unwrap().value().unwrap();
//! }
//! powers.dispose().unwrap();
//! assert_eq!(total, 255);
//! ```

pub mod backtrack;
pub mod context;
pub mod iter;
pub mod presence;
pub mod sequence;

pub use backtrack::{BacktrackDetector, DetectorPool};
pub use context::{empty, from_vec, generate, generate_with};
pub use iter::SequenceIter;
pub use presence::Presence;
pub use sequence::{Sequence, StepFn};
