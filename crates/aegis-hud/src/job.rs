//! Job variants.
//!
//! A closed set of draw sequences selected from the local player's job. Each
//! variant lists its steps and owns the drawing of its gauge widget; the
//! shared health, resource and target bars live in the window.

use aegis_common::{ColorSet, JobId, Rgba};
use aegis_state::{DarkKnightGauge, GaugeState, GunbreakerGauge, WarriorGauge};
use glam::Vec2;

use crate::bar::draw_bar;
use crate::layout::{compute_rect, segments, stacked_above, BarLayout};
use crate::sink::DrawSink;

/// Cartridge color.
const POWDER: Rgba = Rgba::from_abgr(0xFFFE_AD43);
/// Beast gauge color.
const BEAST: Rgba = Rgba::rgb(230, 116, 42);
/// Blood gauge color.
const BLOOD: Rgba = Rgba::rgb(164, 22, 52);
/// Gap between gauge segments and stacked meters.
const GAUGE_GAP: f32 = 2.0;
/// Full scale of the beast and blood gauges.
const METER_MAX: f32 = 100.0;

/// One step of a frame's draw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudStep {
    /// Player health bar.
    Health,
    /// Player mana-like resource bar.
    PrimaryResource,
    /// The variant's gauge widget.
    JobGauge,
    /// Target bar, with target-of-target nested inside.
    Target,
    /// Focus bar.
    Focus,
}

/// The active draw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobVariant {
    /// Unit frames only.
    #[default]
    UnitFrameOnly,
    /// Cartridge gauge instead of the resource bar.
    Gunbreaker,
    /// Beast gauge instead of the resource bar.
    Warrior,
    /// Blood gauge stacked above the resource bar.
    DarkKnight,
}

impl JobVariant {
    /// Select the variant for a job. Unknown jobs get unit frames.
    #[must_use]
    pub fn for_job(job: JobId) -> Self {
        match job {
            JobId::GUNBREAKER => Self::Gunbreaker,
            JobId::WARRIOR => Self::Warrior,
            JobId::DARK_KNIGHT => Self::DarkKnight,
            _ => Self::UnitFrameOnly,
        }
    }

    /// Draw steps in order.
    #[must_use]
    pub const fn steps(self) -> &'static [HudStep] {
        use HudStep::{Focus, Health, JobGauge, PrimaryResource, Target};
        match self {
            Self::UnitFrameOnly => &[Health, PrimaryResource, Target, Focus],
            Self::Gunbreaker | Self::Warrior => &[Health, JobGauge, Target, Focus],
            Self::DarkKnight => &[Health, PrimaryResource, JobGauge, Target, Focus],
        }
    }

    /// The job whose gauge this variant reads.
    #[must_use]
    pub const fn gauge_job(self) -> Option<JobId> {
        match self {
            Self::UnitFrameOnly => None,
            Self::Gunbreaker => Some(JobId::GUNBREAKER),
            Self::Warrior => Some(JobId::WARRIOR),
            Self::DarkKnight => Some(JobId::DARK_KNIGHT),
        }
    }

    /// Draw the gauge widget. A missing or mismatched snapshot draws empty.
    pub fn draw_gauge(
        self,
        sink: &mut dyn DrawSink,
        layout: &BarLayout,
        center: Vec2,
        gauge: Option<&GaugeState>,
    ) {
        match self {
            Self::UnitFrameOnly => {}
            Self::Gunbreaker => {
                let ammo = match gauge {
                    Some(GaugeState::Gunbreaker(GunbreakerGauge { ammo })) => *ammo,
                    _ => 0,
                };
                let rect = compute_rect(&layout.gauge, center);
                let colors = ColorSet::solid(POWDER);
                for (i, segment) in segments(rect, usize::from(GunbreakerGauge::MAX_AMMO), GAUGE_GAP)
                    .enumerate()
                {
                    let filled = usize::from(ammo) > i;
                    draw_bar(sink, segment, if filled { 1.0 } else { 0.0 }, &colors);
                }
            }
            Self::Warrior => {
                let beast = match gauge {
                    Some(GaugeState::Warrior(WarriorGauge { beast })) => *beast,
                    _ => 0,
                };
                let rect = compute_rect(&layout.gauge, center);
                draw_bar(sink, rect, meter_ratio(beast), &ColorSet::solid(BEAST));
            }
            Self::DarkKnight => {
                let blood = match gauge {
                    Some(GaugeState::DarkKnight(DarkKnightGauge { blood })) => *blood,
                    _ => 0,
                };
                let below = compute_rect(&layout.primary_resource, center);
                let rect = stacked_above(below, GAUGE_GAP);
                draw_bar(sink, rect, meter_ratio(blood), &ColorSet::solid(BLOOD));
            }
        }
    }
}

fn meter_ratio(value: u8) -> f32 {
    (f32::from(value) / METER_MAX).clamp(0.0, 1.0)
}
