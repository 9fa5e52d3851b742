//! Color types shared by configuration and rendering.

use serde::{Deserialize, Serialize};

/// An unmultiplied RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Opaque black, used for every bar border.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// Opaque white, used for label text.
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Creates a color with alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Unpacks an immediate-mode packed `0xAABBGGRR` value.
    #[must_use]
    pub const fn from_abgr(packed: u32) -> Self {
        Self([
            (packed & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 24) & 0xFF) as u8,
        ])
    }

    /// Packs into `0xAABBGGRR`.
    #[must_use]
    pub const fn to_abgr(self) -> u32 {
        (self.0[0] as u32)
            | ((self.0[1] as u32) << 8)
            | ((self.0[2] as u32) << 16)
            | ((self.0[3] as u32) << 24)
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Alpha channel.
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0[3]
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self([self.0[0], self.0[1], self.0[2], alpha])
    }

    /// Brightens (positive factor) or darkens (negative factor) the color.
    ///
    /// A positive factor moves each channel toward white by that fraction of
    /// the remaining distance; a negative factor scales each channel by
    /// `1 + factor`. Alpha is untouched.
    #[must_use]
    pub fn adjust(self, factor: f32) -> Self {
        let factor = factor.clamp(-1.0, 1.0);
        let channel = |c: u8| -> u8 {
            let c = f32::from(c) / 255.0;
            let out = if factor < 0.0 {
                c * (1.0 + factor)
            } else {
                (1.0 - c) * factor + c
            };
            (out * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Self([
            channel(self.0[0]),
            channel(self.0[1]),
            channel(self.0[2]),
            self.0[3],
        ])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// The four color stops every bar is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    /// Full-size background fill.
    pub background: Rgba,
    /// Left stop of the proportional fill.
    pub gradient_left: Rgba,
    /// Right stop of the proportional fill.
    pub gradient_right: Rgba,
    /// Outline color.
    pub border: Rgba,
}

impl ColorSet {
    /// Translucent black behind gauges and resource bars.
    pub const GAUGE_BACKGROUND: Rgba = Rgba::from_abgr(0x8800_0000);

    /// Creates a color set from explicit stops.
    #[must_use]
    pub const fn new(background: Rgba, gradient_left: Rgba, gradient_right: Rgba, border: Rgba) -> Self {
        Self {
            background,
            gradient_left,
            gradient_right,
            border,
        }
    }

    /// Derives a full color set from one base color.
    #[must_use]
    pub fn from_base(base: Rgba) -> Self {
        Self {
            background: base.adjust(-0.7).with_alpha(0x88),
            gradient_left: base.adjust(-0.1),
            gradient_right: base.adjust(0.1),
            border: Rgba::BLACK,
        }
    }

    /// A flat fill over the standard gauge background.
    #[must_use]
    pub const fn solid(fill: Rgba) -> Self {
        Self::new(Self::GAUGE_BACKGROUND, fill, fill, Rgba::BLACK)
    }
}
