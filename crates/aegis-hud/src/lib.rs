//! # Aegis HUD
//!
//! Per-frame heads-up display composition for a running game client.
//!
//! Each frame the [`HudWindow`] reads a [`aegis_state::TargetSet`], decides
//! whether to draw at all, lays out every bar around the viewport center,
//! resolves colors per actor and hands draw calls to a [`DrawSink`]. The
//! player's job selects a [`JobVariant`] that swaps in or adds gauge widgets.
//!
//! This crate provides:
//! - Text formatting (name abbreviation, truncation, K/M magnitudes)
//! - Bar layout from per-slot offsets
//! - The visibility gate
//! - Actor color resolution
//! - Bar and outlined-text rendering
//! - Job variants and their gauges
//! - The frame orchestrator and click regions
//! - TOML configuration
//! - An egui-backed draw sink and overlay

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod bar;
pub mod color;
pub mod config;
pub mod job;
pub mod layout;
pub mod overlay;
pub mod sink;
pub mod text;
pub mod visibility;
pub mod window;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bar::*;
    pub use crate::color::*;
    pub use crate::config::*;
    pub use crate::job::*;
    pub use crate::layout::*;
    pub use crate::overlay::*;
    pub use crate::sink::*;
    pub use crate::text::*;
    pub use crate::visibility::*;
    pub use crate::window::*;
}

pub use prelude::*;
