//! The actors one frame addresses.

use crate::actor::Actor;
use crate::provider::StateProvider;

/// Local player plus every optional target slot, read once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSet {
    /// The local player.
    pub player: Actor,
    /// Soft target if present, otherwise the hard target.
    pub target: Option<Actor>,
    /// The focus target.
    pub focus: Option<Actor>,
    /// Whoever the target is targeting, characters only.
    pub target_of_target: Option<Actor>,
}

impl TargetSet {
    /// Read the target set from a provider.
    ///
    /// Returns `None` when there is no local player; every other slot simply
    /// ends up empty when the provider has nothing for it.
    pub fn capture(state: &dyn StateProvider) -> Option<Self> {
        let player = state.local_player()?;
        let target = state.soft_target().or_else(|| state.target());
        let target_of_target = target
            .as_ref()
            .and_then(|t| t.target)
            .and_then(|handle| state.actor(handle))
            .filter(Actor::is_character);

        Some(Self {
            player,
            target,
            focus: state.focus_target(),
            target_of_target,
        })
    }
}
