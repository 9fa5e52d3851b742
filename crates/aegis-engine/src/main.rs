//! # Aegis
//!
//! Headless preview of the HUD: loads a configuration and a frozen game
//! snapshot, runs overlay frames through egui without a window, and replays a
//! click on the first clickable bar.
//!
//! ```text
//! aegis [snapshot.json] [config.toml] [--frames N]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod demo;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("aegis=info".parse()?))
        .init();

    info!("Aegis preview starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let args = app::PreviewArgs::parse();
    let summary = app::run(&args)?;

    info!(
        drawn = summary.drawn_frames,
        gated = summary.gated_frames,
        primitives = summary.last_primitive_count,
        clicked = ?summary.clicked.map(|h| h.object_id),
        "Aegis preview complete"
    );
    Ok(())
}
