//! Combat module
//!
//! The turn-based console loop behind the `arena` binary:
//! - Units with health clamped to `0..=100`
//! - Attack resolution (one point of damage per swing)
//! - Kill tallying with enemy respawns
//! - Event rendering through [`crate::theme`] and [`crate::string`]

mod arena;
mod unit;

pub use arena::{Arena, ArenaConfig};
pub use unit::{Unit, MAX_HEALTH};
