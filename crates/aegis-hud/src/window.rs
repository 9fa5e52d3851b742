//! The per-frame orchestrator.
//!
//! [`HudWindow::draw`] runs one frame to completion: gate check, target
//! capture, variant selection, then every step of the variant in order. Bars
//! bound to an actor come back as [`ClickRegion`]s in the [`FrameReport`];
//! nothing is remembered between frames.

use aegis_common::{ActorHandle, BarRect, ColorSet, Rgba};
use aegis_state::{
    Actor, GaugeState, HostilityProbe, StateProvider, TargetCommandSink, TargetSet, Vital,
};
use glam::Vec2;
use tracing::{debug, trace};

use crate::bar::{draw_bar, draw_outlined_text};
use crate::color::ColorResolver;
use crate::config::HudConfig;
use crate::job::{HudStep, JobVariant};
use crate::layout::{compute_rect, BarRole, LabelAnchor};
use crate::sink::DrawSink;
use crate::text::{kilo_format, short_name};
use crate::visibility::TransientSignals;

/// Widest percentage label, used to size the percentage field.
const PERCENT_FIELD: &str = "100";

/// Mana-like resource palette.
const RESOURCE_COLORS: ColorSet = ColorSet::new(
    ColorSet::GAUGE_BACKGROUND,
    Rgba::from_abgr(0xFFE6_CD00),
    Rgba::from_abgr(0xFFD8_DF3C),
    Rgba::BLACK,
);

/// Outcome of the gate for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// Nothing was drawn.
    Gated,
    /// Bars were drawn.
    Drawing,
}

/// A drawn bar that retargets on click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickRegion {
    /// Screen area.
    pub rect: BarRect,
    /// Actor to target.
    pub actor: ActorHandle,
    /// Which bar produced it.
    pub role: BarRole,
}

/// What one frame produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Gate outcome.
    pub state: FrameState,
    /// Variant used, when drawing.
    pub variant: Option<JobVariant>,
    /// Click regions in draw order.
    pub click_regions: Vec<ClickRegion>,
}

impl FrameReport {
    /// A frame that drew nothing.
    #[must_use]
    pub fn gated() -> Self {
        Self {
            state: FrameState::Gated,
            variant: None,
            click_regions: Vec::new(),
        }
    }

    /// Whether anything was drawn.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.state == FrameState::Drawing
    }

    /// The region under `pos`. Later regions are on top.
    #[must_use]
    pub fn hit_test(&self, pos: Vec2) -> Option<&ClickRegion> {
        self.click_regions.iter().rev().find(|r| r.rect.contains(pos))
    }

    /// Issue a target command for a click at `pos`, returning the new target.
    pub fn dispatch_click(
        &self,
        pos: Vec2,
        targets: &mut dyn TargetCommandSink,
    ) -> Option<ActorHandle> {
        let region = self.hit_test(pos)?;
        debug!(
            role = region.role.name(),
            object_id = region.actor.object_id,
            "bar clicked, setting target"
        );
        targets.set_target(region.actor);
        Some(region.actor)
    }
}

/// The HUD.
#[derive(Debug, Clone, Default)]
pub struct HudWindow {
    config: HudConfig,
}

impl HudWindow {
    /// Create a HUD from validated configuration.
    #[must_use]
    pub fn new(config: HudConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Hide or show the HUD.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.config.hide_hud = hidden;
    }

    /// Toggle drawing regardless of the game's own widgets.
    pub fn set_force_visible(&mut self, force_visible: bool) {
        self.config.force_visible = force_visible;
    }

    /// Draw one frame for a viewport of the given size.
    pub fn draw(
        &self,
        state: &dyn StateProvider,
        probe: &dyn HostilityProbe,
        viewport: Vec2,
        sink: &mut dyn DrawSink,
    ) -> FrameReport {
        let signals = TransientSignals::read(state);
        if !self.config.gate().should_render(&signals) {
            trace!(?signals, "hud gated");
            return FrameReport::gated();
        }

        let Some(targets) = TargetSet::capture(state) else {
            trace!("no local player");
            return FrameReport::gated();
        };

        let variant = targets
            .player
            .job()
            .map_or(JobVariant::UnitFrameOnly, JobVariant::for_job);
        let gauge = variant.gauge_job().and_then(|job| state.job_gauge(job));
        trace!(?variant, has_gauge = gauge.is_some(), "drawing hud");

        let mut frame = FrameContext {
            config: &self.config,
            resolver: ColorResolver::new(
                &self.config.job_colors,
                &self.config.npc_colors,
                probe,
            ),
            center: viewport / 2.0,
            sink,
            regions: Vec::new(),
        };

        for step in variant.steps() {
            match step {
                HudStep::Health => frame.health(&targets.player),
                HudStep::PrimaryResource => frame.primary_resource(&targets.player),
                HudStep::JobGauge => frame.job_gauge(variant, gauge.as_ref()),
                HudStep::Target => {
                    if let Some(target) = &targets.target {
                        frame.target(target, targets.target_of_target.as_ref());
                    }
                }
                HudStep::Focus => {
                    if let Some(focus) = &targets.focus {
                        frame.focus(focus);
                    }
                }
            }
        }

        FrameReport {
            state: FrameState::Drawing,
            variant: Some(variant),
            click_regions: frame.regions,
        }
    }
}

/// Everything one frame's steps share.
struct FrameContext<'a> {
    config: &'a HudConfig,
    resolver: ColorResolver<'a>,
    center: Vec2,
    sink: &'a mut dyn DrawSink,
    regions: Vec<ClickRegion>,
}

impl FrameContext<'_> {
    fn rect(&self, role: BarRole) -> BarRect {
        compute_rect(self.config.bars.spec(role), self.center)
    }

    fn anchor(&self, rect: BarRect) -> LabelAnchor {
        LabelAnchor::new(rect, self.config.label)
    }

    fn register(&mut self, rect: BarRect, actor: &Actor, role: BarRole) {
        self.regions.push(ClickRegion {
            rect,
            actor: actor.handle,
            role,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        self.sink.text_size(text).x
    }

    fn health(&mut self, player: &Actor) {
        let rect = self.rect(BarRole::Health);
        let anchor = self.anchor(rect);
        let ratio = fill_ratio(&player.health);

        let name = short_name(&player.name, self.config.label.name_length);
        draw_outlined_text(self.sink, &name, anchor.left());

        let max_hp = format!("{:>6} | ", kilo_format(player.health.max));
        let field = self.text_width(PERCENT_FIELD);
        let max_width = self.text_width(&max_hp);
        draw_outlined_text(self.sink, &max_hp, anchor.right(max_width, field));
        draw_outlined_text(
            self.sink,
            &percent_label(&player.health),
            anchor.right(field, 0.0),
        );

        let colors = self.resolver.resolve(player);
        draw_bar(self.sink, rect, ratio, &colors);
        self.register(rect, player, BarRole::Health);
    }

    fn primary_resource(&mut self, player: &Actor) {
        if let Some(resource) = &player.resource {
            let rect = self.rect(BarRole::PrimaryResource);
            draw_bar(self.sink, rect, fill_ratio(resource), &RESOURCE_COLORS);
        }
    }

    fn job_gauge(&mut self, variant: JobVariant, gauge: Option<&GaugeState>) {
        variant.draw_gauge(self.sink, &self.config.bars, self.center, gauge);
    }

    fn target(&mut self, target: &Actor, target_of_target: Option<&Actor>) {
        let rect = self.rect(BarRole::Target);
        let anchor = self.anchor(rect);

        if target.is_character() {
            let ratio = fill_ratio(&target.health);
            let colors = self.resolver.resolve(target);
            draw_bar(self.sink, rect, ratio, &colors);

            let percent = percent_label(&target.health);
            let field = self.text_width(PERCENT_FIELD);
            let percent_width = self.text_width(&percent);
            draw_outlined_text(self.sink, &percent, anchor.left_field(field, percent_width));

            let max_hp = format!(" | {:<6}", kilo_format(target.health.max));
            draw_outlined_text(self.sink, &max_hp, anchor.left_field(field, 0.0));
        } else {
            draw_bar(self.sink, rect, 1.0, &self.resolver.object());
        }

        let name = short_name(&target.name, self.config.label.name_length);
        let name_width = self.text_width(&name);
        draw_outlined_text(self.sink, &name, anchor.right(name_width, 0.0));
        self.register(rect, target, BarRole::Target);

        if let Some(actor) = target_of_target {
            self.target_of_target(actor);
        }
    }

    fn target_of_target(&mut self, actor: &Actor) {
        if !actor.is_character() {
            return;
        }

        let rect = self.rect(BarRole::TargetOfTarget);
        let name = short_name(&actor.name, self.config.label.short_name_length);
        let pos = self.anchor(rect).centered(self.text_width(&name));
        draw_outlined_text(self.sink, &name, pos);

        let colors = self.resolver.resolve(actor);
        draw_bar(self.sink, rect, fill_ratio(&actor.health), &colors);
        self.register(rect, actor, BarRole::TargetOfTarget);
    }

    fn focus(&mut self, focus: &Actor) {
        let rect = self.rect(BarRole::Focus);

        if focus.is_character() {
            let colors = self.resolver.resolve(focus);
            draw_bar(self.sink, rect, fill_ratio(&focus.health), &colors);
        } else {
            draw_bar(self.sink, rect, 1.0, &self.resolver.object());
        }

        let name = short_name(&focus.name, self.config.label.short_name_length);
        let pos = self.anchor(rect).centered(self.text_width(&name));
        draw_outlined_text(self.sink, &name, pos);
        self.register(rect, focus, BarRole::Focus);
    }
}

/// Fill ratio clamped to `[0, 1]`; zero when the maximum is zero.
fn fill_ratio(vital: &Vital) -> f32 {
    vital.ratio().clamp(0.0, 1.0)
}

/// Right-aligned whole percentage, capped at 100.
fn percent_label(vital: &Vital) -> String {
    let capped = Vital::new(vital.current.min(vital.max), vital.max);
    format!("{:>3}", capped.percent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DrawCommand, RecordingSink};
    use aegis_common::JobId;
    use aegis_state::{ActorKind, BattleNpcKind, StaticState, FADE_WIDGET, PARAMETER_WIDGET};

    const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

    fn player(job: JobId) -> Actor {
        Actor::new(ActorHandle::new(1), "John Smith", ActorKind::Player { job })
            .with_health(54_000, 108_000)
            .with_resource(10_000, 10_000)
    }

    fn enemy(id: u32) -> Actor {
        Actor::new(
            ActorHandle::new(id),
            "Striking Dummy",
            ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::Enemy,
            },
        )
        .with_health(1_000, 1_000)
        .with_combat(true)
    }

    fn draw(window: &HudWindow, state: &StaticState) -> (FrameReport, RecordingSink) {
        let mut sink = RecordingSink::new();
        let report = window.draw(state, state, VIEWPORT, &mut sink);
        (report, sink)
    }

    #[test]
    fn test_no_player_is_gated() {
        let state = StaticState::default();
        let (report, sink) = draw(&HudWindow::default(), &state);
        assert_eq!(report, FrameReport::gated());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_hidden_is_gated() {
        let state = StaticState::with_player(player(JobId::BARD));
        let mut window = HudWindow::default();
        window.set_hidden(true);
        let (report, sink) = draw(&window, &state);
        assert!(!report.is_drawn());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_parameter_widget_suppresses_when_not_forced() {
        let mut state = StaticState::with_player(player(JobId::BARD));
        state.set_addon(PARAMETER_WIDGET, true);
        state.set_addon(FADE_WIDGET, false);

        let mut window = HudWindow::default();
        assert!(draw(&window, &state).0.is_drawn());

        window.set_force_visible(false);
        assert!(!draw(&window, &state).0.is_drawn());

        state.set_addon(FADE_WIDGET, true);
        assert!(draw(&window, &state).0.is_drawn());
    }

    #[test]
    fn test_player_only_frame() {
        let state = StaticState::with_player(player(JobId::BARD));
        let (report, sink) = draw(&HudWindow::default(), &state);

        assert_eq!(report.variant, Some(JobVariant::UnitFrameOnly));
        assert_eq!(report.click_regions.len(), 1);
        assert_eq!(report.click_regions[0].role, BarRole::Health);
        // health + resource bars, each bg + fill + border
        assert_eq!(sink.strokes().count(), 2);
        assert_eq!(sink.gradients().count(), 2);
    }

    #[test]
    fn test_health_labels() {
        let state = StaticState::with_player(player(JobId::BARD));
        let (_, sink) = draw(&HudWindow::default(), &state);

        let labels: Vec<&str> = sink.texts().step_by(9).collect();
        assert_eq!(labels, vec!["J. SMITH", "  108K | ", " 50"]);
    }

    #[test]
    fn test_health_label_positions() {
        let state = StaticState::with_player(player(JobId::BARD));
        let (report, sink) = draw(&HudWindow::default(), &state);
        let rect = report.click_regions[0].rect;

        let foreground: Vec<Vec2> = sink
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { pos, color, .. } if *color == Rgba::WHITE => Some(*pos),
                _ => None,
            })
            .collect();

        let y = rect.min.y - 22.0;
        assert_eq!(foreground[0], Vec2::new(rect.min.x + 5.0, y));
        // "  108K | " is 9 glyphs, the percentage field 3
        assert_eq!(foreground[1], Vec2::new(rect.max().x - 5.0 - 21.0 - 63.0, y));
        assert_eq!(foreground[2], Vec2::new(rect.max().x - 5.0 - 21.0, y));
    }

    #[test]
    fn test_resource_bar_needs_resource() {
        let mut me = player(JobId::BARD);
        me.resource = None;
        let state = StaticState::with_player(me);
        let (_, sink) = draw(&HudWindow::default(), &state);
        assert_eq!(sink.strokes().count(), 1);
    }

    #[test]
    fn test_target_labels_and_tot() {
        let mut state = StaticState::with_player(player(JobId::BARD));
        state.insert(enemy(10).targeting(ActorHandle::new(1)));
        state.target = Some(ActorHandle::new(10));

        let (report, sink) = draw(&HudWindow::default(), &state);
        let roles: Vec<_> = report.click_regions.iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![BarRole::Health, BarRole::Target, BarRole::TargetOfTarget]
        );

        let labels: Vec<&str> = sink.texts().step_by(9).collect();
        assert_eq!(
            labels,
            vec!["J. SMITH", "  108K | ", " 50", "100", " | 1,000 ", "S. DUMMY", "J. SMITH"]
        );
    }

    #[test]
    fn test_object_target_is_full_friendly_bar() {
        let mut state = StaticState::with_player(player(JobId::BARD));
        state.insert(Actor::new(ActorHandle::new(20), "Aetheryte", ActorKind::Object));
        state.target = Some(ActorHandle::new(20));

        let window = HudWindow::default();
        let (report, sink) = draw(&window, &state);
        let target = report.click_regions[1];
        assert_eq!(target.role, BarRole::Target);
        assert_eq!(report.click_regions.len(), 2);

        assert!(sink.commands.contains(&DrawCommand::Fill {
            rect: target.rect,
            color: window.config().npc_colors.friendly.background,
        }));
        assert!(sink.gradients().any(|r| *r == target.rect));
        assert_eq!(sink.texts().step_by(9).last(), Some("AETHERYTE"));
    }

    #[test]
    fn test_focus_bar() {
        let mut state = StaticState::with_player(player(JobId::BARD));
        state.insert(enemy(30).with_health(0, 0));
        state.focus_target = Some(ActorHandle::new(30));

        let (report, sink) = draw(&HudWindow::default(), &state);
        let focus = report.click_regions.last().copied().unwrap();
        assert_eq!(focus.role, BarRole::Focus);
        assert_eq!(focus.rect.width(), 120.0);
        // zero max health draws no fill
        assert_eq!(sink.gradients().filter(|r| r.min == focus.rect.min).count(), 0);

        let name = "S. DUMMY";
        let x = focus.rect.min.x + 60.0 - (name.len() as f32 * 7.0) / 2.0;
        assert!(sink.commands.contains(&DrawCommand::Text {
            pos: Vec2::new(x, focus.rect.min.y - 22.0),
            color: Rgba::WHITE,
            text: name.to_string(),
        }));
    }

    #[test]
    fn test_percent_label_truncates_and_caps() {
        assert_eq!(percent_label(&Vital::new(999, 1000)), " 99");
        assert_eq!(percent_label(&Vital::new(1000, 1000)), "100");
        assert_eq!(percent_label(&Vital::new(250, 100)), "100");
        assert_eq!(percent_label(&Vital::new(5, 0)), "  0");
    }

    #[test]
    fn test_overfull_health_is_clamped() {
        let me = player(JobId::BARD).with_health(200, 100);
        let state = StaticState::with_player(me);
        let (report, sink) = draw(&HudWindow::default(), &state);
        let rect = report.click_regions[0].rect;
        assert_eq!(sink.gradients().next().copied(), Some(rect));
        assert!(sink.texts().any(|t| t == "100"));
    }

    #[test]
    fn test_dispatch_click_last_region_wins() {
        let report = FrameReport {
            state: FrameState::Drawing,
            variant: Some(JobVariant::UnitFrameOnly),
            click_regions: vec![
                ClickRegion {
                    rect: BarRect::new(Vec2::ZERO, Vec2::new(100.0, 100.0)),
                    actor: ActorHandle::new(1),
                    role: BarRole::Target,
                },
                ClickRegion {
                    rect: BarRect::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0)),
                    actor: ActorHandle::new(2),
                    role: BarRole::TargetOfTarget,
                },
            ],
        };

        let mut state = StaticState::default();
        assert_eq!(
            report.dispatch_click(Vec2::new(75.0, 75.0), &mut state),
            Some(ActorHandle::new(2))
        );
        assert_eq!(state.target, Some(ActorHandle::new(2)));

        assert_eq!(
            report.dispatch_click(Vec2::new(10.0, 10.0), &mut state),
            Some(ActorHandle::new(1))
        );
        assert_eq!(report.dispatch_click(Vec2::new(500.0, 500.0), &mut state), None);
        assert_eq!(state.target, Some(ActorHandle::new(1)));
    }
}
