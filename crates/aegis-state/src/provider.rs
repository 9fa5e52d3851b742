//! Capability traits the HUD consumes and produces.

use aegis_common::{ActorHandle, JobId};
use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::gauge::GaugeState;

/// Name of the game's own parameter (HP/MP) widget.
pub const PARAMETER_WIDGET: &str = "_ParameterWidget";

/// Name of the game's fade-transition widget.
pub const FADE_WIDGET: &str = "FadeMiddle";

/// Read access to live game state.
///
/// Every call is synchronous and cheap. Absence is `None`, never an error.
pub trait StateProvider {
    /// The local player, absent during loading screens.
    fn local_player(&self) -> Option<Actor>;

    /// The current hard target.
    fn target(&self) -> Option<Actor>;

    /// The current soft target.
    fn soft_target(&self) -> Option<Actor>;

    /// The focus target.
    fn focus_target(&self) -> Option<Actor>;

    /// Look up any actor by handle.
    fn actor(&self, handle: ActorHandle) -> Option<Actor>;

    /// Gauge snapshot for a job.
    fn job_gauge(&self, job: JobId) -> Option<GaugeState>;

    /// Whether a named game widget is visible. `None` when the lookup fails.
    fn addon_visible(&self, name: &str) -> Option<bool>;
}

/// Hostility as read from the game, not from the combat flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hostility {
    /// Will not attack.
    Friendly,
    /// Will attack.
    Hostile,
    /// Could not be determined.
    #[default]
    Unknown,
}

/// Best-effort hostility read for battle NPCs.
pub trait HostilityProbe {
    /// Probe one actor.
    fn probe(&self, actor: &Actor) -> Hostility;
}

/// Receives the one command the HUD issues.
pub trait TargetCommandSink {
    /// Make this actor the current target.
    fn set_target(&mut self, actor: ActorHandle);
}
