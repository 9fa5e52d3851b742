//! # Aegis State
//!
//! The game state the HUD reads each frame.
//!
//! This crate provides:
//! - Actors (player, battle NPCs, other characters, objects)
//! - The per-frame target set (target, soft target, focus, target-of-target)
//! - Job gauge snapshots
//! - Capability traits for the state provider, hostility probe and target commands
//! - A memory-backed hostility probe
//! - A static, JSON-loadable provider for previews and tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod actor;
pub mod gauge;
pub mod memory;
pub mod provider;
pub mod snapshot;
pub mod targets;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::actor::*;
    pub use crate::gauge::*;
    pub use crate::memory::*;
    pub use crate::provider::*;
    pub use crate::snapshot::*;
    pub use crate::targets::*;
}

pub use prelude::*;
