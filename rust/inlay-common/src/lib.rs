//! Core definitions (error type and result alias), relied upon by all inlay-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
