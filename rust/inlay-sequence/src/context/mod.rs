//! Concrete context implementations plugged into the sequence engine.
//!
//! Each submodule supplies a context type (the value-type traversal state),
//! its three step implementations, and a named factory function — the only
//! construction surface consumers are expected to use.

pub mod empty;
pub mod generator;
pub mod vec_source;

pub use empty::{EmptyContext, empty};
pub use generator::{GeneratorContext, ParamGeneratorContext, generate, generate_with};
pub use vec_source::{VecContext, from_vec};
