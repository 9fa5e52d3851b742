//! ID types for jobs and actors.

use serde::{Deserialize, Serialize};

/// Stable integer key identifying a player's class or job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u32);

impl JobId {
    /// Gladiator
    pub const GLADIATOR: Self = Self(1);
    /// Pugilist
    pub const PUGILIST: Self = Self(2);
    /// Marauder
    pub const MARAUDER: Self = Self(3);
    /// Lancer
    pub const LANCER: Self = Self(4);
    /// Archer
    pub const ARCHER: Self = Self(5);
    /// Conjurer
    pub const CONJURER: Self = Self(6);
    /// Thaumaturge
    pub const THAUMATURGE: Self = Self(7);
    /// Paladin
    pub const PALADIN: Self = Self(19);
    /// Monk
    pub const MONK: Self = Self(20);
    /// Warrior
    pub const WARRIOR: Self = Self(21);
    /// Dragoon
    pub const DRAGOON: Self = Self(22);
    /// Bard
    pub const BARD: Self = Self(23);
    /// White Mage
    pub const WHITE_MAGE: Self = Self(24);
    /// Black Mage
    pub const BLACK_MAGE: Self = Self(25);
    /// Arcanist
    pub const ARCANIST: Self = Self(26);
    /// Summoner
    pub const SUMMONER: Self = Self(27);
    /// Scholar
    pub const SCHOLAR: Self = Self(28);
    /// Rogue
    pub const ROGUE: Self = Self(29);
    /// Ninja
    pub const NINJA: Self = Self(30);
    /// Machinist
    pub const MACHINIST: Self = Self(31);
    /// Dark Knight
    pub const DARK_KNIGHT: Self = Self(32);
    /// Astrologian
    pub const ASTROLOGIAN: Self = Self(33);
    /// Samurai
    pub const SAMURAI: Self = Self(34);
    /// Red Mage
    pub const RED_MAGE: Self = Self(35);
    /// Blue Mage
    pub const BLUE_MAGE: Self = Self(36);
    /// Gunbreaker
    pub const GUNBREAKER: Self = Self(37);
    /// Dancer
    pub const DANCER: Self = Self(38);

    /// Every combat class and job the HUD has colors for.
    ///
    /// Configuration validation requires a color entry for each of these.
    pub const KNOWN: [Self; 27] = [
        Self::GLADIATOR,
        Self::PUGILIST,
        Self::MARAUDER,
        Self::LANCER,
        Self::ARCHER,
        Self::CONJURER,
        Self::THAUMATURGE,
        Self::PALADIN,
        Self::MONK,
        Self::WARRIOR,
        Self::DRAGOON,
        Self::BARD,
        Self::WHITE_MAGE,
        Self::BLACK_MAGE,
        Self::ARCANIST,
        Self::SUMMONER,
        Self::SCHOLAR,
        Self::ROGUE,
        Self::NINJA,
        Self::MACHINIST,
        Self::DARK_KNIGHT,
        Self::ASTROLOGIAN,
        Self::SAMURAI,
        Self::RED_MAGE,
        Self::BLUE_MAGE,
        Self::GUNBREAKER,
        Self::DANCER,
    ];

    /// Creates a job ID from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Three-letter abbreviation, if this is a known job.
    #[must_use]
    pub const fn abbreviation(self) -> Option<&'static str> {
        let abbr = match self.0 {
            1 => "GLA",
            2 => "PGL",
            3 => "MRD",
            4 => "LNC",
            5 => "ARC",
            6 => "CNJ",
            7 => "THM",
            19 => "PLD",
            20 => "MNK",
            21 => "WAR",
            22 => "DRG",
            23 => "BRD",
            24 => "WHM",
            25 => "BLM",
            26 => "ACN",
            27 => "SMN",
            28 => "SCH",
            29 => "ROG",
            30 => "NIN",
            31 => "MCH",
            32 => "DRK",
            33 => "AST",
            34 => "SAM",
            35 => "RDM",
            36 => "BLU",
            37 => "GNB",
            38 => "DNC",
            _ => return None,
        };
        Some(abbr)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.abbreviation() {
            Some(abbr) => write!(f, "{abbr} ({})", self.0),
            None => write!(f, "job {}", self.0),
        }
    }
}

/// Handle identifying a live actor for one frame.
///
/// Carries the object id used for target commands and the base address the
/// hostility probe reads from. Never retained across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorHandle {
    /// Game object id
    pub object_id: u32,
    /// Base address of the actor structure (0 when unknown)
    #[serde(default)]
    pub address: usize,
}

impl ActorHandle {
    /// Creates a handle with no known address.
    #[must_use]
    pub const fn new(object_id: u32) -> Self {
        Self {
            object_id,
            address: 0,
        }
    }

    /// Creates a handle with a base address.
    #[must_use]
    pub const fn with_address(object_id: u32, address: usize) -> Self {
        Self {
            object_id,
            address,
        }
    }

    /// Checks if the handle carries a readable address.
    #[must_use]
    pub const fn has_address(self) -> bool {
        self.address != 0
    }
}
