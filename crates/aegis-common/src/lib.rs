//! # Aegis Common
//!
//! Common types, utilities, and shared abstractions for the Aegis HUD.
//!
//! This crate provides foundational types used across all Aegis crates:
//! - ID types (JobId, ActorHandle)
//! - Color types (Rgba, ColorSet)
//! - Screen-space geometry (BarRect)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::*;
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::ids::*;
}

pub use prelude::*;
