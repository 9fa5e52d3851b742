//! egui backend.
//!
//! [`EguiSink`] paints draw calls onto an [`egui::Painter`]. [`HudOverlay`]
//! runs a [`HudWindow`] frame in a full-screen foreground area and turns a
//! primary click into a target command.

use aegis_common::{BarRect, Rgba};
use aegis_state::{HostilityProbe, StateProvider, TargetCommandSink};
use egui::{Align2, Color32, Context, FontId, Painter, Pos2, Rect, Stroke};
use glam::Vec2;

use crate::sink::DrawSink;
use crate::window::{FrameReport, HudWindow};

fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), color.a())
}

fn to_pos2(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn to_rect(rect: BarRect) -> Rect {
    Rect::from_min_max(to_pos2(rect.min), to_pos2(rect.max()))
}

/// A [`DrawSink`] over an egui painter.
pub struct EguiSink<'a> {
    painter: &'a Painter,
    font: FontId,
}

impl<'a> EguiSink<'a> {
    /// Paint with the given font.
    pub fn new(painter: &'a Painter, font: FontId) -> Self {
        Self { painter, font }
    }
}

impl DrawSink for EguiSink<'_> {
    fn fill_rect(&mut self, rect: BarRect, color: Rgba) {
        self.painter.rect_filled(to_rect(rect), 0.0, to_color32(color));
    }

    fn fill_rect_gradient(&mut self, rect: BarRect, corners: [Rgba; 4]) {
        let rect = to_rect(rect);
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), to_color32(corners[0]));
        mesh.colored_vertex(rect.right_top(), to_color32(corners[1]));
        mesh.colored_vertex(rect.right_bottom(), to_color32(corners[2]));
        mesh.colored_vertex(rect.left_bottom(), to_color32(corners[3]));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(egui::Shape::mesh(mesh));
    }

    fn stroke_rect(&mut self, rect: BarRect, color: Rgba) {
        self.painter
            .rect_stroke(to_rect(rect), 0.0, Stroke::new(1.0, to_color32(color)));
    }

    fn text(&mut self, pos: Vec2, color: Rgba, text: &str) {
        self.painter.text(
            to_pos2(pos),
            Align2::LEFT_TOP,
            text,
            self.font.clone(),
            to_color32(color),
        );
    }

    fn text_size(&self, text: &str) -> Vec2 {
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), self.font.clone(), Color32::WHITE);
        let size = galley.size();
        Vec2::new(size.x, size.y)
    }
}

/// Shows the HUD as a full-screen egui overlay.
#[derive(Debug, Clone)]
pub struct HudOverlay {
    font: FontId,
}

impl Default for HudOverlay {
    fn default() -> Self {
        Self::new(FontId::proportional(14.0))
    }
}

impl HudOverlay {
    /// Overlay with a label font.
    #[must_use]
    pub fn new(font: FontId) -> Self {
        Self { font }
    }

    /// Draw one frame and handle a click on any of its bars.
    pub fn show(
        &self,
        ctx: &Context,
        window: &HudWindow,
        state: &dyn StateProvider,
        probe: &dyn HostilityProbe,
        targets: &mut dyn TargetCommandSink,
    ) -> FrameReport {
        let screen = ctx.screen_rect();
        let viewport = Vec2::new(screen.width(), screen.height());

        let report = egui::Area::new(egui::Id::new("aegis_hud"))
            .fixed_pos(screen.min)
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                let mut sink = EguiSink::new(ui.painter(), self.font.clone());
                window.draw(state, probe, viewport, &mut sink)
            })
            .inner;

        let click = ctx.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = click {
            report.dispatch_click(Vec2::new(pos.x - screen.min.x, pos.y - screen.min.y), targets);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_common::{ActorHandle, JobId};
    use aegis_state::{Actor, ActorKind, StaticState};
    use egui::{Event, Modifiers, PointerButton, RawInput};

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0))
    }

    fn raw_input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        }
    }

    fn scene() -> StaticState {
        StaticState::with_player(
            Actor::new(
                ActorHandle::new(7),
                "Local Player",
                ActorKind::Player {
                    job: JobId::GUNBREAKER,
                },
            )
            .with_health(80, 100),
        )
    }

    #[test]
    fn test_color_conversion() {
        let c = to_color32(Rgba::rgba(10, 20, 30, 255));
        assert_eq!(c, Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_overlay_paints_shapes() {
        let ctx = Context::default();
        let overlay = HudOverlay::default();
        let window = HudWindow::default();
        let mut state = scene();
        let probe = state.clone();

        let mut report = None;
        let output = ctx.run(raw_input(Vec::new()), |ctx| {
            report = Some(overlay.show(ctx, &window, &probe, &probe, &mut state));
        });

        let report = report.unwrap();
        assert!(report.is_drawn());
        assert!(!output.shapes.is_empty());
        assert_eq!(state.target, None);
    }

    #[test]
    fn test_click_on_health_bar_targets_player() {
        let ctx = Context::default();
        let overlay = HudOverlay::default();
        let window = HudWindow::default();
        let snapshot = scene();
        let mut targets = snapshot.clone();

        // center of the default health bar on a 1920x1080 screen
        let pos = Pos2::new(665.0, 1025.0);
        let press = vec![
            Event::PointerMoved(pos),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::default(),
            },
        ];
        let release = vec![Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::default(),
        }];

        for events in [press, release] {
            let _ = ctx.run(raw_input(events), |ctx| {
                overlay.show(ctx, &window, &snapshot, &snapshot, &mut targets);
            });
        }

        assert_eq!(targets.target, Some(ActorHandle::new(7)));
    }
}
