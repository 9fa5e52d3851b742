//! Job gauge snapshots.
//!
//! Each gauge is only interpreted by the job variant that owns it. The shared
//! layout and color code never looks inside.

use aegis_common::JobId;
use serde::{Deserialize, Serialize};

/// Gunbreaker cartridge gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GunbreakerGauge {
    /// Loaded cartridges.
    pub ammo: u8,
}

impl GunbreakerGauge {
    /// Maximum cartridges.
    pub const MAX_AMMO: u8 = 2;
}

/// Warrior beast gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarriorGauge {
    /// Beast gauge, 0-100.
    pub beast: u8,
}

/// Dark Knight blood gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DarkKnightGauge {
    /// Blood gauge, 0-100.
    pub blood: u8,
}

/// A job-specific resource snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "job", rename_all = "snake_case")]
pub enum GaugeState {
    /// Gunbreaker cartridges.
    Gunbreaker(GunbreakerGauge),
    /// Warrior beast gauge.
    Warrior(WarriorGauge),
    /// Dark Knight blood gauge.
    DarkKnight(DarkKnightGauge),
}

impl GaugeState {
    /// The job this gauge belongs to.
    #[must_use]
    pub const fn job(&self) -> JobId {
        match self {
            Self::Gunbreaker(_) => JobId::GUNBREAKER,
            Self::Warrior(_) => JobId::WARRIOR,
            Self::DarkKnight(_) => JobId::DARK_KNIGHT,
        }
    }
}
