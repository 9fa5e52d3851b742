//! Built-in scene used when no snapshot file is given.

use aegis_common::{ActorHandle, JobId};
use aegis_state::{
    Actor, ActorKind, BattleNpcKind, GaugeState, GunbreakerGauge, Hostility, StaticState,
};

/// Local player handle in the demo scene.
pub const PLAYER: ActorHandle = ActorHandle::new(1);

/// A Gunbreaker fighting a wolf, with a passive NPC on focus.
pub fn scene() -> StaticState {
    let mut state = StaticState::with_player(
        Actor::new(
            PLAYER,
            "Aster Vale",
            ActorKind::Player {
                job: JobId::GUNBREAKER,
            },
        )
        .with_health(98_250, 112_400)
        .with_resource(10_000, 10_000)
        .with_combat(true),
    );

    state.insert(
        Actor::new(
            ActorHandle::new(0x4000_0010),
            "Dread Wolf",
            ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::Enemy,
            },
        )
        .with_health(1_240_000, 2_650_000)
        .with_combat(true)
        .targeting(PLAYER),
    );
    state.insert(
        Actor::new(
            ActorHandle::new(0x4000_0022),
            "Sleeping Treant",
            ActorKind::BattleNpc {
                sub_kind: BattleNpcKind::Enemy,
            },
        )
        .with_health(48_000, 48_000),
    );

    state.target = Some(ActorHandle::new(0x4000_0010));
    state.focus_target = Some(ActorHandle::new(0x4000_0022));
    state.set_hostility(ActorHandle::new(0x4000_0022), Hostility::Friendly);
    state.set_gauge(GaugeState::Gunbreaker(GunbreakerGauge { ammo: 1 }));
    state
}
