//! Bar geometry around the viewport center.
//!
//! Every slot is the viewport center plus a signed offset. Nothing is clamped
//! to the viewport: a misconfigured slot draws off-screen.

use aegis_common::BarRect;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Size and offset of one bar slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Horizontal offset of the top-left corner from the viewport center.
    pub offset_x: f32,
    /// Vertical offset of the top-left corner from the viewport center.
    pub offset_y: f32,
}

impl BarSpec {
    /// Create a bar spec.
    #[must_use]
    pub const fn new(width: f32, height: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            width,
            height,
            offset_x,
            offset_y,
        }
    }

    /// Size as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

/// The bar slots the HUD knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarRole {
    /// Local player health.
    Health,
    /// Local player mana-like resource.
    PrimaryResource,
    /// Current target.
    Target,
    /// Focus target.
    Focus,
    /// Target of the current target.
    TargetOfTarget,
    /// Job gauge widget.
    Gauge,
}

impl BarRole {
    /// Every role.
    pub const ALL: [Self; 6] = [
        Self::Health,
        Self::PrimaryResource,
        Self::Target,
        Self::Focus,
        Self::TargetOfTarget,
        Self::Gauge,
    ];

    /// Name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::PrimaryResource => "primary resource",
            Self::Target => "target",
            Self::Focus => "focus",
            Self::TargetOfTarget => "target-of-target",
            Self::Gauge => "gauge",
        }
    }
}

/// Horizontal distance of the player and target bars from the center.
const SIDE_OFFSET: f32 = 160.0;
/// Vertical distance of the bar row below the center.
const ROW_OFFSET: f32 = 460.0;
/// Gap between neighbouring bars in the row.
const ROW_GAP: f32 = 2.0;

/// Slot specs for every role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarLayout {
    /// Player health bar.
    pub health: BarSpec,
    /// Player resource bar.
    pub primary_resource: BarSpec,
    /// Target bar.
    pub target: BarSpec,
    /// Focus bar.
    pub focus: BarSpec,
    /// Target-of-target bar.
    pub target_of_target: BarSpec,
    /// Job gauge.
    pub gauge: BarSpec,
}

impl Default for BarLayout {
    fn default() -> Self {
        let (health_w, health_h) = (270.0, 50.0);
        let (target_w, target_h) = (270.0, 50.0);
        let (small_w, small_h) = (120.0, 20.0);

        Self {
            health: BarSpec::new(health_w, health_h, -health_w - SIDE_OFFSET, ROW_OFFSET),
            primary_resource: BarSpec::new(254.0, 13.0, -127.0, ROW_OFFSET - 27.0),
            target: BarSpec::new(target_w, target_h, SIDE_OFFSET, ROW_OFFSET),
            focus: BarSpec::new(
                small_w,
                small_h,
                -SIDE_OFFSET - health_w - small_w - ROW_GAP,
                ROW_OFFSET,
            ),
            target_of_target: BarSpec::new(
                small_w,
                small_h,
                SIDE_OFFSET + target_w + ROW_GAP,
                ROW_OFFSET,
            ),
            gauge: BarSpec::new(254.0, 13.0, -127.0, ROW_OFFSET - 27.0),
        }
    }
}

impl BarLayout {
    /// Spec for a role.
    #[must_use]
    pub fn spec(&self, role: BarRole) -> &BarSpec {
        match role {
            BarRole::Health => &self.health,
            BarRole::PrimaryResource => &self.primary_resource,
            BarRole::Target => &self.target,
            BarRole::Focus => &self.focus,
            BarRole::TargetOfTarget => &self.target_of_target,
            BarRole::Gauge => &self.gauge,
        }
    }
}

/// Where labels sit relative to their bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Distance of the label line above the bar's top edge.
    pub offset_y: f32,
    /// Inset from the bar's left and right edges.
    pub padding: f32,
    /// Name length on the wide bars.
    pub name_length: usize,
    /// Name length on the narrow bars.
    pub short_name_length: usize,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            offset_y: 22.0,
            padding: 5.0,
            name_length: 16,
            short_name_length: 12,
        }
    }
}

/// Rectangle of a slot for a given viewport center.
#[must_use]
pub fn compute_rect(spec: &BarSpec, center: Vec2) -> BarRect {
    BarRect::new(center + spec.offset(), spec.size())
}

/// Splits a bar into `count` equal segments separated by `gap` pixels.
///
/// Each segment is `(width - gap * count) / count` wide, matching the
/// cartridge gauge's historical spacing.
pub fn segments(rect: BarRect, count: usize, gap: f32) -> impl Iterator<Item = BarRect> {
    let n = count.max(1) as f32;
    let width = ((rect.width() - gap * n) / n).floor();
    (0..count).map(move |i| {
        BarRect::new(
            Vec2::new(rect.min.x + (width + gap) * i as f32, rect.min.y),
            Vec2::new(width, rect.height()),
        )
    })
}

/// The same rectangle moved up by its own height plus `gap`.
#[must_use]
pub fn stacked_above(rect: BarRect, gap: f32) -> BarRect {
    rect.translated(Vec2::new(0.0, -(rect.height() + gap)))
}

/// Positions labels above a bar.
#[derive(Debug, Clone, Copy)]
pub struct LabelAnchor {
    rect: BarRect,
    style: LabelStyle,
}

impl LabelAnchor {
    /// Anchor labels to a bar.
    #[must_use]
    pub fn new(rect: BarRect, style: LabelStyle) -> Self {
        Self { rect, style }
    }

    fn y(&self) -> f32 {
        self.rect.min.y - self.style.offset_y
    }

    /// Left-aligned, inset by the padding.
    #[must_use]
    pub fn left(&self) -> Vec2 {
        Vec2::new(self.rect.min.x + self.style.padding, self.y())
    }

    /// Left edge of a field of `field_width` placed right after the left padding,
    /// with `text_width` of content right-aligned inside it.
    #[must_use]
    pub fn left_field(&self, field_width: f32, text_width: f32) -> Vec2 {
        Vec2::new(
            self.rect.min.x + self.style.padding + field_width - text_width,
            self.y(),
        )
    }

    /// Right-aligned so the text ends `trailing` pixels before the right padding.
    #[must_use]
    pub fn right(&self, text_width: f32, trailing: f32) -> Vec2 {
        Vec2::new(
            self.rect.max().x - self.style.padding - trailing - text_width,
            self.y(),
        )
    }

    /// Horizontally centered over the bar.
    #[must_use]
    pub fn centered(&self, text_width: f32) -> Vec2 {
        Vec2::new(
            self.rect.min.x + self.rect.width() / 2.0 - text_width / 2.0,
            self.y(),
        )
    }
}
