//! boundstr - bounded string library and combat demo
//!
//! Two small exercises in one crate:
//! - [`string::BoundedString`], a fixed-capacity owning string buffer with
//!   append, comparison, search, and in-place replacement
//! - [`combat`], the turn-based console loop behind the `arena` binary

pub mod combat;
pub mod string;
pub mod theme;

pub use string::{BoundedString, StringError};
