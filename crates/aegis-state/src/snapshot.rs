//! A static, in-memory game state.
//!
//! Used by the preview driver (loaded from JSON) and as the test double for
//! every capability trait in [`crate::provider`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use aegis_common::{ActorHandle, HudError, HudResult, JobId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::actor::Actor;
use crate::gauge::GaugeState;
use crate::provider::{Hostility, HostilityProbe, StateProvider, TargetCommandSink};

/// A frozen game state snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticState {
    /// Handle of the local player within `actors`.
    pub player: Option<ActorHandle>,
    /// Hard target.
    pub target: Option<ActorHandle>,
    /// Soft target.
    pub soft_target: Option<ActorHandle>,
    /// Focus target.
    pub focus_target: Option<ActorHandle>,
    /// Every actor in the scene.
    pub actors: Vec<Actor>,
    /// Job gauges.
    pub gauges: Vec<GaugeState>,
    /// Widget visibility by widget name; missing names fail the lookup.
    pub addons: BTreeMap<String, bool>,
    /// Memory-derived hostility by object id; missing ids probe as unknown.
    pub hostility: BTreeMap<u32, Hostility>,
}

impl StaticState {
    /// A scene holding only the local player.
    #[must_use]
    pub fn with_player(player: Actor) -> Self {
        let mut state = Self {
            player: Some(player.handle),
            ..Self::default()
        };
        state.insert(player);
        state
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> HudResult<Self> {
        serde_json::from_str(json).map_err(|e| HudError::Snapshot(e.to_string()))
    }

    /// Load a snapshot from a JSON file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> HudResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let state = Self::from_json(&contents)?;
        info!(
            "Loaded snapshot from {} ({} actors)",
            path.display(),
            state.actors.len()
        );
        Ok(state)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> HudResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HudError::Serialization(e.to_string()))
    }

    /// Add an actor, replacing any with the same object id.
    pub fn insert(&mut self, actor: Actor) {
        let id = actor.handle.object_id;
        match self.actors.iter_mut().find(|a| a.handle.object_id == id) {
            Some(existing) => *existing = actor,
            None => self.actors.push(actor),
        }
    }

    /// Set a job gauge, replacing the previous one for the same job.
    pub fn set_gauge(&mut self, gauge: GaugeState) {
        self.gauges.retain(|g| g.job() != gauge.job());
        self.gauges.push(gauge);
    }

    /// Set a widget's visibility.
    pub fn set_addon(&mut self, name: impl Into<String>, visible: bool) {
        self.addons.insert(name.into(), visible);
    }

    /// Set an actor's probed hostility.
    pub fn set_hostility(&mut self, handle: ActorHandle, hostility: Hostility) {
        self.hostility.insert(handle.object_id, hostility);
    }

    fn find(&self, handle: Option<ActorHandle>) -> Option<Actor> {
        handle.and_then(|h| self.actor(h))
    }
}

impl StateProvider for StaticState {
    fn local_player(&self) -> Option<Actor> {
        self.find(self.player)
    }

    fn target(&self) -> Option<Actor> {
        self.find(self.target)
    }

    fn soft_target(&self) -> Option<Actor> {
        self.find(self.soft_target)
    }

    fn focus_target(&self) -> Option<Actor> {
        self.find(self.focus_target)
    }

    fn actor(&self, handle: ActorHandle) -> Option<Actor> {
        self.actors
            .iter()
            .find(|a| a.handle.object_id == handle.object_id)
            .cloned()
    }

    fn job_gauge(&self, job: JobId) -> Option<GaugeState> {
        self.gauges.iter().find(|g| g.job() == job).copied()
    }

    fn addon_visible(&self, name: &str) -> Option<bool> {
        self.addons.get(name).copied()
    }
}

impl HostilityProbe for StaticState {
    fn probe(&self, actor: &Actor) -> Hostility {
        self.hostility
            .get(&actor.handle.object_id)
            .copied()
            .unwrap_or_default()
    }
}

impl TargetCommandSink for StaticState {
    fn set_target(&mut self, actor: ActorHandle) {
        debug!(object_id = actor.object_id, "target set");
        self.target = Some(actor);
    }
}
