//! Color resolution for arbitrary actors.
//!
//! Players are colored by job. Battle NPCs go through three tiers: the combat
//! flag, then the memory-derived hostility probe, then neutral. The
//! "aggroed but not yet engaged" state has no detection and is never produced.

use std::collections::BTreeMap;

use aegis_common::{ColorSet, JobId, Rgba};
use aegis_state::{Actor, ActorKind, Hostility, HostilityProbe};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Color sets for NPC classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcColors {
    /// Will not attack.
    pub friendly: ColorSet,
    /// In combat.
    pub hostile: ColorSet,
    /// Everything else.
    pub neutral: ColorSet,
}

impl Default for NpcColors {
    fn default() -> Self {
        Self {
            friendly: ColorSet::from_base(Rgba::rgb(0, 145, 6)),
            hostile: ColorSet::from_base(Rgba::rgb(205, 25, 25)),
            neutral: ColorSet::from_base(Rgba::rgb(218, 157, 46)),
        }
    }
}

/// Job id to color set.
///
/// Serialized as a map keyed by the decimal job id, since TOML keys are strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobColorTable(BTreeMap<JobId, ColorSet>);

impl JobColorTable {
    /// An empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Colors for a job.
    #[must_use]
    pub fn get(&self, job: JobId) -> Option<&ColorSet> {
        self.0.get(&job)
    }

    /// Set the colors for a job.
    pub fn insert(&mut self, job: JobId, colors: ColorSet) {
        self.0.insert(job, colors);
    }

    /// Remove a job's colors.
    pub fn remove(&mut self, job: JobId) -> Option<ColorSet> {
        self.0.remove(&job)
    }

    /// Known jobs without an entry.
    pub fn missing_known(&self) -> impl Iterator<Item = JobId> + '_ {
        JobId::KNOWN
            .iter()
            .copied()
            .filter(|job| !self.0.contains_key(job))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for JobColorTable {
    fn default() -> Self {
        const BASES: [(JobId, Rgba); 27] = [
            (JobId::GLADIATOR, Rgba::rgb(168, 210, 230)),
            (JobId::PALADIN, Rgba::rgb(168, 210, 230)),
            (JobId::PUGILIST, Rgba::rgb(214, 156, 0)),
            (JobId::MONK, Rgba::rgb(214, 156, 0)),
            (JobId::MARAUDER, Rgba::rgb(207, 38, 33)),
            (JobId::WARRIOR, Rgba::rgb(207, 38, 33)),
            (JobId::LANCER, Rgba::rgb(65, 100, 205)),
            (JobId::DRAGOON, Rgba::rgb(65, 100, 205)),
            (JobId::ARCHER, Rgba::rgb(145, 186, 94)),
            (JobId::BARD, Rgba::rgb(145, 186, 94)),
            (JobId::CONJURER, Rgba::rgb(255, 240, 220)),
            (JobId::WHITE_MAGE, Rgba::rgb(255, 240, 220)),
            (JobId::THAUMATURGE, Rgba::rgb(165, 121, 214)),
            (JobId::BLACK_MAGE, Rgba::rgb(165, 121, 214)),
            (JobId::ARCANIST, Rgba::rgb(45, 155, 120)),
            (JobId::SUMMONER, Rgba::rgb(45, 155, 120)),
            (JobId::SCHOLAR, Rgba::rgb(134, 87, 255)),
            (JobId::ROGUE, Rgba::rgb(175, 25, 100)),
            (JobId::NINJA, Rgba::rgb(175, 25, 100)),
            (JobId::MACHINIST, Rgba::rgb(110, 225, 214)),
            (JobId::DARK_KNIGHT, Rgba::rgb(209, 38, 204)),
            (JobId::ASTROLOGIAN, Rgba::rgb(255, 231, 74)),
            (JobId::SAMURAI, Rgba::rgb(228, 109, 4)),
            (JobId::RED_MAGE, Rgba::rgb(232, 123, 123)),
            (JobId::BLUE_MAGE, Rgba::rgb(0, 185, 247)),
            (JobId::GUNBREAKER, Rgba::rgb(121, 109, 48)),
            (JobId::DANCER, Rgba::rgb(226, 176, 175)),
        ];

        Self(
            BASES
                .iter()
                .map(|&(job, base)| (job, ColorSet::from_base(base)))
                .collect(),
        )
    }
}

impl Serialize for JobColorTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(job, colors)| (job.raw().to_string(), colors)))
    }
}

impl<'de> Deserialize<'de> for JobColorTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, ColorSet>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, colors)| {
                key.parse::<u32>()
                    .map(|id| (JobId::new(id), colors))
                    .map_err(|_| serde::de::Error::custom(format!("invalid job id `{key}`")))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Self)
    }
}

/// How an actor is classified for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorClass {
    /// A player, colored by job.
    Job(JobId),
    /// Non-hostile NPC.
    Friendly,
    /// NPC in combat.
    Hostile,
    /// Fallback.
    Neutral,
}

/// Maps actors to color sets.
#[derive(Clone, Copy)]
pub struct ColorResolver<'a> {
    jobs: &'a JobColorTable,
    npcs: &'a NpcColors,
    probe: &'a dyn HostilityProbe,
}

impl std::fmt::Debug for ColorResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorResolver")
            .field("jobs", &self.jobs.len())
            .field("npcs", self.npcs)
            .finish_non_exhaustive()
    }
}

impl<'a> ColorResolver<'a> {
    /// Create a resolver over the configured tables.
    pub fn new(jobs: &'a JobColorTable, npcs: &'a NpcColors, probe: &'a dyn HostilityProbe) -> Self {
        Self { jobs, npcs, probe }
    }

    /// Classify an actor.
    #[must_use]
    pub fn classify(&self, actor: &Actor) -> ActorClass {
        match actor.kind {
            ActorKind::Player { job } => ActorClass::Job(job),
            ActorKind::BattleNpc { .. } if actor.in_combat => ActorClass::Hostile,
            ActorKind::BattleNpc { .. } => match self.probe.probe(actor) {
                Hostility::Friendly => ActorClass::Friendly,
                Hostility::Hostile | Hostility::Unknown => ActorClass::Neutral,
            },
            ActorKind::EventNpc | ActorKind::Object => ActorClass::Neutral,
        }
    }

    /// Colors for a classification. Never fails.
    #[must_use]
    pub fn colors_for(&self, class: ActorClass) -> ColorSet {
        match class {
            ActorClass::Job(job) => match self.jobs.get(job) {
                Some(colors) => *colors,
                None => {
                    tracing::trace!(%job, "no job colors, using neutral");
                    self.npcs.neutral
                }
            },
            ActorClass::Friendly => self.npcs.friendly,
            ActorClass::Hostile => self.npcs.hostile,
            ActorClass::Neutral => self.npcs.neutral,
        }
    }

    /// Colors for an actor.
    #[must_use]
    pub fn resolve(&self, actor: &Actor) -> ColorSet {
        self.colors_for(self.classify(actor))
    }

    /// Colors for bars of non-character objects.
    #[must_use]
    pub fn object(&self) -> ColorSet {
        self.npcs.friendly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_common::ActorHandle;
    use aegis_state::{BattleNpcKind, MemoryHostilityProbe, MemoryImage, StaticState};
    use proptest::prelude::*;

    fn npc(in_combat: bool) -> Actor {
        Actor::new(
            ActorHandle::new(5),
            "Wolf",
            ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::Enemy,
            },
        )
        .with_combat(in_combat)
    }

    #[test]
    fn test_player_uses_job_colors() {
        let jobs = JobColorTable::default();
        let npcs = NpcColors::default();
        let probe = StaticState::default();
        let resolver = ColorResolver::new(&jobs, &npcs, &probe);

        let player = Actor::new(
            ActorHandle::new(1),
            "Tank Person",
            ActorKind::Player {
                job: JobId::GUNBREAKER,
            },
        );
        assert_eq!(resolver.classify(&player), ActorClass::Job(JobId::GUNBREAKER));
        assert_eq!(
            resolver.resolve(&player),
            *jobs.get(JobId::GUNBREAKER).unwrap()
        );
    }

    #[test]
    fn test_in_combat_npc_is_hostile() {
        let jobs = JobColorTable::default();
        let npcs = NpcColors::default();
        let mut probe = StaticState::default();
        probe.set_hostility(ActorHandle::new(5), Hostility::Friendly);
        let resolver = ColorResolver::new(&jobs, &npcs, &probe);

        assert_eq!(resolver.resolve(&npc(true)), npcs.hostile);
    }

    #[test]
    fn test_hostility_tiers() {
        let jobs = JobColorTable::default();
        let npcs = NpcColors::default();
        let mut probe = StaticState::default();

        probe.set_hostility(ActorHandle::new(5), Hostility::Friendly);
        assert_eq!(
            ColorResolver::new(&jobs, &npcs, &probe).classify(&npc(false)),
            ActorClass::Friendly
        );

        probe.set_hostility(ActorHandle::new(5), Hostility::Hostile);
        assert_eq!(
            ColorResolver::new(&jobs, &npcs, &probe).classify(&npc(false)),
            ActorClass::Neutral
        );

        probe.hostility.clear();
        assert_eq!(
            ColorResolver::new(&jobs, &npcs, &probe).classify(&npc(false)),
            ActorClass::Neutral
        );
    }

    #[test]
    fn test_other_kinds_are_neutral() {
        let jobs = JobColorTable::default();
        let npcs = NpcColors::default();
        let probe = StaticState::default();
        let resolver = ColorResolver::new(&jobs, &npcs, &probe);

        let vendor = Actor::new(ActorHandle::new(8), "Vendor", ActorKind::EventNpc).with_combat(true);
        assert_eq!(resolver.resolve(&vendor), npcs.neutral);
        assert_eq!(resolver.object(), npcs.friendly);
    }

    #[test]
    fn test_unrecognized_npc_sub_kind_is_neutral() {
        let jobs = JobColorTable::default();
        let npcs = NpcColors::default();
        let probe = MemoryHostilityProbe::new(MemoryImage::new());
        let resolver = ColorResolver::new(&jobs, &npcs, &probe);

        let stranger = Actor::new(
            ActorHandle::with_address(6, 0x4000_0000),
            "Stranger",
            ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::from_raw(42),
            },
        );
        assert_eq!(resolver.classify(&stranger), ActorClass::Neutral);
        assert_eq!(resolver.resolve(&stranger), npcs.neutral);

        let pet = Actor::new(
            ActorHandle::with_address(7, 0x4000_0000),
            "Carbuncle",
            ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::Pet,
            },
        );
        assert_eq!(resolver.classify(&pet), ActorClass::Friendly);
    }

    #[test]
    fn test_missing_job_falls_back_to_neutral() {
        let mut jobs = JobColorTable::default();
        jobs.remove(JobId::DANCER);
        let npcs = NpcColors::default();
        let probe = StaticState::default();
        let resolver = ColorResolver::new(&jobs, &npcs, &probe);

        assert_eq!(resolver.colors_for(ActorClass::Job(JobId::DANCER)), npcs.neutral);
        assert_eq!(resolver.colors_for(ActorClass::Job(JobId::new(999))), npcs.neutral);
    }

    #[test]
    fn test_default_table_covers_known_jobs() {
        let jobs = JobColorTable::default();
        assert_eq!(jobs.missing_known().count(), 0);
        assert_eq!(jobs.len(), JobId::KNOWN.len());
    }

    #[test]
    fn test_job_table_string_keys() {
        let mut jobs = JobColorTable::empty();
        jobs.insert(JobId::BARD, ColorSet::solid(Rgba::WHITE));
        let json = serde_json::to_string(&jobs).unwrap();
        assert!(json.starts_with("{\"23\":"));

        let err = serde_json::from_str::<JobColorTable>(r#"{"bard": {"background":[0,0,0,0],"gradient_left":[0,0,0,0],"gradient_right":[0,0,0,0],"border":[0,0,0,0]}}"#);
        assert!(err.is_err());
    }

    fn any_kind() -> impl Strategy<Value = ActorKind> {
        prop_oneof![
            any::<u32>().prop_map(|id| ActorKind::Player { job: JobId::new(id) }),
            any::<u8>().prop_map(|raw| ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::from_raw(raw)
            }),
            Just(ActorKind::EventNpc),
            Just(ActorKind::Object),
        ]
    }

    fn any_hostility() -> impl Strategy<Value = Option<Hostility>> {
        prop_oneof![
            Just(None),
            Just(Some(Hostility::Friendly)),
            Just(Some(Hostility::Hostile)),
            Just(Some(Hostility::Unknown)),
        ]
    }

    proptest! {
        #[test]
        fn prop_unrecognized_sub_kind_is_never_friendly(raw in any::<u8>(), engagement in any::<u8>(), nameplate in any::<u8>()) {
            let sub_kind = BattleNpcKind::from_raw(raw);
            prop_assume!(matches!(sub_kind, BattleNpcKind::Unknown(_)));

            let mut image = MemoryImage::new();
            image.poke_hostility(0x4000_0000, engagement, nameplate);
            let probe = MemoryHostilityProbe::new(image);
            let jobs = JobColorTable::default();
            let npcs = NpcColors::default();
            let resolver = ColorResolver::new(&jobs, &npcs, &probe);

            let actor = Actor::new(
                ActorHandle::with_address(9, 0x4000_0000),
                "Anyone",
                ActorKind::BattleNpc { sub_kind },
            );
            prop_assert_eq!(resolver.classify(&actor), ActorClass::Neutral);
        }

        #[test]
        fn prop_resolver_is_total(kind in any_kind(), in_combat in any::<bool>(), hostility in any_hostility()) {
            let jobs = JobColorTable::default();
            let npcs = NpcColors::default();
            let mut probe = StaticState::default();
            let actor = Actor::new(ActorHandle::new(3), "Anyone", kind).with_combat(in_combat);
            if let Some(h) = hostility {
                probe.set_hostility(actor.handle, h);
            }
            let resolver = ColorResolver::new(&jobs, &npcs, &probe);

            let colors = resolver.resolve(&actor);
            let known = [npcs.friendly, npcs.hostile, npcs.neutral];
            match resolver.classify(&actor) {
                ActorClass::Job(job) => {
                    prop_assert_eq!(colors, jobs.get(job).copied().unwrap_or(npcs.neutral));
                }
                _ => prop_assert!(known.contains(&colors)),
            }
        }
    }
}
