//! Whether the HUD draws at all this frame.

use aegis_state::{StateProvider, FADE_WIDGET, PARAMETER_WIDGET};

/// Transient game-UI signals read at the start of a frame.
///
/// A widget whose lookup failed is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransientSignals {
    /// Whether a local player exists.
    pub player_present: bool,
    /// Visibility of the game's own parameter widget.
    pub parameter_widget: Option<bool>,
    /// Visibility of the fade-transition widget.
    pub fade_widget: Option<bool>,
}

impl TransientSignals {
    /// Read the signals from the state provider.
    pub fn read(state: &dyn StateProvider) -> Self {
        Self {
            player_present: state.local_player().is_some(),
            parameter_widget: state.addon_visible(PARAMETER_WIDGET),
            fade_widget: state.addon_visible(FADE_WIDGET),
        }
    }
}

/// The once-per-frame visibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityGate {
    /// The user hid the HUD.
    pub hidden: bool,
    /// Skip the game-UI occlusion check.
    pub force_visible: bool,
}

impl VisibilityGate {
    /// Create a gate from the two configuration flags.
    #[must_use]
    pub const fn new(hidden: bool, force_visible: bool) -> Self {
        Self {
            hidden,
            force_visible,
        }
    }

    /// Decide whether to render.
    ///
    /// Hidden always wins, then force-visible. Otherwise the HUD is only
    /// suppressed while the game's parameter widget is known visible and the
    /// fade widget is known not visible. Unreadable signals fail open.
    #[must_use]
    pub fn should_render(&self, signals: &TransientSignals) -> bool {
        if self.hidden {
            return false;
        }
        if self.force_visible {
            return true;
        }

        !signals.player_present
            || signals.parameter_widget != Some(true)
            || signals.fade_widget != Some(false)
    }
}
