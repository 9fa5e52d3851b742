//! Actors as seen by the HUD for one frame.

use aegis_common::{ActorHandle, JobId};
use serde::{Deserialize, Serialize};

/// A current/maximum pair such as health or mana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vital {
    /// Current value.
    pub current: u32,
    /// Maximum value.
    pub max: u32,
}

impl Vital {
    /// Create a new vital.
    #[must_use]
    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    /// Fill ratio, `0.0` when the maximum is zero.
    ///
    /// Not clamped: a current above the maximum yields a ratio above one.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        if self.max > 0 {
            self.current as f32 / self.max as f32
        } else {
            0.0
        }
    }

    /// Whole-number percentage, truncated.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.ratio() * 100.0) as u32
    }
}

/// Battle NPC sub-kind as reported by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleNpcKind {
    /// Targetable part of a larger enemy (raw kind 1).
    Part,
    /// Player pet.
    Pet,
    /// Companion chocobo.
    Chocobo,
    /// Regular enemy.
    Enemy,
    /// Duty support partner.
    Partner,
    /// Anything the HUD does not recognize.
    Unknown(u8),
}

impl BattleNpcKind {
    /// Map a raw sub-kind byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Part,
            2 => Self::Pet,
            3 => Self::Chocobo,
            5 => Self::Enemy,
            9 => Self::Partner,
            other => Self::Unknown(other),
        }
    }

    /// Whether this sub-kind can be hostile at all.
    #[must_use]
    pub const fn can_be_hostile(self) -> bool {
        matches!(self, Self::Enemy | Self::Part)
    }
}

/// What kind of object an actor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActorKind {
    /// Another player (or the local player).
    Player {
        /// Current class or job.
        job: JobId,
    },
    /// A combat NPC.
    BattleNpc {
        /// Game-reported sub-kind.
        sub_kind: BattleNpcKind,
    },
    /// A non-combat character (vendors, quest givers).
    EventNpc,
    /// A non-character object (aetherytes, treasure coffers).
    Object,
}

impl ActorKind {
    /// Characters carry health; objects do not.
    #[must_use]
    pub const fn is_character(self) -> bool {
        !matches!(self, Self::Object)
    }
}

/// A read-only actor snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Handle for target commands and memory probes.
    pub handle: ActorHandle,
    /// Display name.
    pub name: String,
    /// Actor kind.
    #[serde(flatten)]
    pub kind: ActorKind,
    /// Health.
    #[serde(default)]
    pub health: Vital,
    /// Primary (mana-like) resource, if the actor has one.
    #[serde(default)]
    pub resource: Option<Vital>,
    /// Engaged in combat.
    #[serde(default)]
    pub in_combat: bool,
    /// The actor this actor is targeting.
    #[serde(default)]
    pub target: Option<ActorHandle>,
}

impl Actor {
    /// Create an actor with empty vitals.
    pub fn new(handle: ActorHandle, name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            handle,
            name: name.into(),
            kind,
            health: Vital::default(),
            resource: None,
            in_combat: false,
            target: None,
        }
    }

    /// Set health.
    pub fn with_health(mut self, current: u32, max: u32) -> Self {
        self.health = Vital::new(current, max);
        self
    }

    /// Set the primary resource.
    pub fn with_resource(mut self, current: u32, max: u32) -> Self {
        self.resource = Some(Vital::new(current, max));
        self
    }

    /// Set combat engagement.
    pub fn with_combat(mut self, in_combat: bool) -> Self {
        self.in_combat = in_combat;
        self
    }

    /// Set this actor's own target.
    pub fn targeting(mut self, target: ActorHandle) -> Self {
        self.target = Some(target);
        self
    }

    /// The player's job, if this is a player.
    #[must_use]
    pub fn job(&self) -> Option<JobId> {
        match self.kind {
            ActorKind::Player { job } => Some(job),
            _ => None,
        }
    }

    /// Characters carry health; objects do not.
    #[must_use]
    pub fn is_character(&self) -> bool {
        self.kind.is_character()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vital_ratio() {
        assert_eq!(Vital::new(50, 100).ratio(), 0.5);
        assert_eq!(Vital::new(10, 0).ratio(), 0.0);
        assert_eq!(Vital::new(999, 1000).percent(), 99);
    }

    #[test]
    fn test_battle_npc_kind_from_raw() {
        assert_eq!(BattleNpcKind::from_raw(5), BattleNpcKind::Enemy);
        assert_eq!(BattleNpcKind::from_raw(1), BattleNpcKind::Part);
        assert_eq!(BattleNpcKind::from_raw(42), BattleNpcKind::Unknown(42));
        assert!(BattleNpcKind::Part.can_be_hostile());
        assert!(!BattleNpcKind::Pet.can_be_hostile());
    }

    #[test]
    fn test_actor_job() {
        let player = Actor::new(
            ActorHandle::new(1),
            "Some Body",
            ActorKind::Player {
                job: JobId::GUNBREAKER,
            },
        );
        assert_eq!(player.job(), Some(JobId::GUNBREAKER));

        let coffer = Actor::new(ActorHandle::new(2), "Coffer", ActorKind::Object);
        assert_eq!(coffer.job(), None);
        assert!(!coffer.is_character());
    }

    #[test]
    fn test_actor_deserialize_flattened_kind() {
        let json = r#"{
            "handle": { "object_id": 7 },
            "name": "Striking Dummy",
            "kind": "battle_npc",
            "sub_kind": "enemy",
            "health": { "current": 10, "max": 20 }
        }"#;
        let actor: Actor = serde_json::from_str(json).unwrap();
        assert_eq!(
            actor.kind,
            ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::Enemy
            }
        );
        assert_eq!(actor.health.ratio(), 0.5);
        assert!(!actor.in_combat);
    }
}
