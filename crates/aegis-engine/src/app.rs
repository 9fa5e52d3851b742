//! Headless preview loop.
//!
//! Drives the overlay through an egui context with no window or renderer
//! attached. Target commands are queued during a frame and applied to the
//! scene before the next one, the way the game applies them.

use std::path::PathBuf;

use aegis_common::ActorHandle;
use aegis_hud::{HudConfig, HudOverlay, HudWindow};
use aegis_state::{StaticState, TargetCommandSink};
use anyhow::{Context as _, Result};
use clap::Parser;
use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
use tracing::{debug, info, warn};

use crate::demo;

/// Preview viewport size.
const VIEWPORT: (f32, f32) = (1920.0, 1080.0);

/// Default number of frames to run.
const DEFAULT_FRAMES: u32 = 3;

/// Command-line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "aegis", version)]
#[command(about = "Run HUD frames headless over a game snapshot")]
pub struct PreviewArgs {
    /// Snapshot JSON; the built-in demo scene when absent.
    pub snapshot: Option<PathBuf>,

    /// Configuration TOML; the platform config path when absent.
    pub config: Option<PathBuf>,

    /// Frames to draw before the scripted click.
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u32,
}

impl Default for PreviewArgs {
    fn default() -> Self {
        Self {
            snapshot: None,
            config: None,
            frames: DEFAULT_FRAMES,
        }
    }
}

/// What a preview run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSummary {
    /// Frames that drew bars.
    pub drawn_frames: u32,
    /// Frames stopped by the gate.
    pub gated_frames: u32,
    /// Tessellated primitives in the last frame.
    pub last_primitive_count: usize,
    /// Actor targeted by the scripted click.
    pub clicked: Option<ActorHandle>,
}

/// Target commands issued during one frame.
#[derive(Debug, Default)]
struct CommandQueue(Vec<ActorHandle>);

impl TargetCommandSink for CommandQueue {
    fn set_target(&mut self, actor: ActorHandle) {
        self.0.push(actor);
    }
}

/// Preview state.
struct Preview {
    ctx: egui::Context,
    overlay: HudOverlay,
    window: HudWindow,
    scene: StaticState,
    summary: PreviewSummary,
}

impl Preview {
    fn new(window: HudWindow, scene: StaticState) -> Self {
        Self {
            ctx: egui::Context::default(),
            overlay: HudOverlay::default(),
            window,
            scene,
            summary: PreviewSummary::default(),
        }
    }

    /// Run one frame with the given input events.
    fn frame(&mut self, events: Vec<Event>) -> aegis_hud::FrameReport {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(
                Pos2::ZERO,
                egui::vec2(VIEWPORT.0, VIEWPORT.1),
            )),
            events,
            ..Default::default()
        };

        let mut queue = CommandQueue::default();
        let mut report = None;
        let output = self.ctx.run(input, |ctx| {
            report = Some(self.overlay.show(
                ctx,
                &self.window,
                &self.scene,
                &self.scene,
                &mut queue,
            ));
        });

        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        self.summary.last_primitive_count = primitives.len();

        for handle in queue.0 {
            self.scene.set_target(handle);
            self.summary.clicked = Some(handle);
        }

        let report = report.unwrap_or_else(aegis_hud::FrameReport::gated);
        if report.is_drawn() {
            self.summary.drawn_frames += 1;
        } else {
            self.summary.gated_frames += 1;
        }
        debug!(
            state = ?report.state,
            variant = ?report.variant,
            regions = report.click_regions.len(),
            primitives = primitives.len(),
            "frame"
        );
        report
    }

    /// Press and release the primary button at `pos` over two frames.
    fn click(&mut self, pos: Pos2) {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        };
        self.frame(vec![Event::PointerMoved(pos), button(true)]);
        self.frame(vec![button(false)]);
    }
}

/// Run the preview.
pub fn run(args: &PreviewArgs) -> Result<PreviewSummary> {
    let config = match &args.config {
        Some(path) => HudConfig::load_from(path),
        None => HudConfig::load(),
    }
    .context("loading configuration")?;

    let scene = match &args.snapshot {
        Some(path) => StaticState::load_from(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?,
        None => {
            info!("No snapshot given, using the demo scene");
            demo::scene()
        }
    };

    let mut preview = Preview::new(HudWindow::new(config), scene);
    let mut last = None;
    for _ in 0..args.frames {
        last = Some(preview.frame(Vec::new()));
    }

    match last.as_ref().and_then(|r| r.click_regions.first()) {
        Some(region) => {
            let center = region.rect.center();
            info!(role = region.role.name(), "Clicking first bar");
            preview.click(Pos2::new(center.x, center.y));
        }
        None => warn!("Nothing clickable was drawn"),
    }

    info!(
        "Ran {} frames ({} drawn, {} gated)",
        preview.summary.drawn_frames + preview.summary.gated_frames,
        preview.summary.drawn_frames,
        preview.summary.gated_frames
    );
    Ok(preview.summary)
}
