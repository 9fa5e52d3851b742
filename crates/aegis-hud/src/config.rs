//! HUD configuration.
//!
//! Read-only during a frame. Loaded from and saved to TOML; loading validates
//! so that a broken color table fails at startup and never mid-frame.

use std::fs;
use std::path::{Path, PathBuf};

use aegis_common::{ConfigError, HudError, HudResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::color::{JobColorTable, NpcColors};
use crate::layout::{BarLayout, BarRole, LabelStyle};
use crate::visibility::VisibilityGate;

/// Configuration file name.
const CONFIG_FILE: &str = "aegis.toml";

/// HUD configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Hide the HUD entirely.
    pub hide_hud: bool,
    /// Draw even while the game's own parameter widget is showing.
    pub force_visible: bool,
    /// Bar slot sizes and offsets.
    pub bars: BarLayout,
    /// Label placement.
    pub label: LabelStyle,
    /// NPC color sets.
    pub npc_colors: NpcColors,
    /// Player color sets by job id.
    pub job_colors: JobColorTable,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            hide_hud: false,
            force_visible: true,
            bars: BarLayout::default(),
            label: LabelStyle::default(),
            npc_colors: NpcColors::default(),
            job_colors: JobColorTable::default(),
        }
    }
}

impl HudConfig {
    /// Load configuration from the default file location.
    pub fn load() -> HudResult<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load and validate configuration from a specific path.
    ///
    /// A missing file yields defaults. A file that does not parse or does not
    /// validate is an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> HudResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> HudResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> HudResult<String> {
        toml::to_string_pretty(self).map_err(|e| HudError::Serialization(e.to_string()))
    }

    /// Save configuration to the default file location.
    pub fn save(&self) -> HudResult<()> {
        self.save_to(Self::config_path())
    }

    /// Save configuration to a specific path, creating its directory.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> HudResult<()> {
        let path = path.as_ref();
        let contents = self.to_toml()?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, contents)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check everything a frame relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(job) = self.job_colors.missing_known().next() {
            warn!(%job, "job color table incomplete");
            return Err(ConfigError::MissingJobColor { job });
        }

        for role in BarRole::ALL {
            let spec = self.bars.spec(role);
            if !(spec.width > 0.0 && spec.height > 0.0) {
                return Err(ConfigError::InvalidBar {
                    role: role.name(),
                    reason: format!("size {}x{} is not positive", spec.width, spec.height),
                });
            }
            if !(spec.offset_x.is_finite() && spec.offset_y.is_finite()) {
                return Err(ConfigError::InvalidBar {
                    role: role.name(),
                    reason: "offset is not finite".to_string(),
                });
            }
        }

        Ok(())
    }

    /// The visibility gate these settings describe.
    #[must_use]
    pub fn gate(&self) -> VisibilityGate {
        VisibilityGate::new(self.hide_hud, self.force_visible)
    }

    /// Default configuration file: `aegis/aegis.toml` under the platform
    /// config directory, or the working directory when there is none.
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(CONFIG_FILE),
            |dir| dir.join("aegis").join(CONFIG_FILE),
        )
    }
}
