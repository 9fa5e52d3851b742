//! Hostility read from actor memory.
//!
//! The engagement flag alone cannot tell a passive NPC from an aggressive one
//! that has not yet pulled. The game keeps two bytes on the actor that can.
//! All raw reads go through [`MemoryReader`]; [`InProcessMemory`] is the only
//! unsafe code in the workspace.

use std::collections::HashMap;

use crate::actor::{Actor, ActorKind, BattleNpcKind};
use crate::provider::{Hostility, HostilityProbe};

/// Offset of the byte that is non-zero for NPCs able to engage.
pub const ENGAGEMENT_OFFSET: usize = 0x1980;

/// Offset of the nameplate state byte; `1` marks a non-hostile plate.
pub const NAMEPLATE_OFFSET: usize = 0x193C;

/// Reads single bytes of actor memory.
pub trait MemoryReader {
    /// Read one byte, `None` if the address is not readable.
    fn read_u8(&self, address: usize) -> Option<u8>;
}

/// [`HostilityProbe`] backed by raw actor memory.
#[derive(Debug, Clone)]
pub struct MemoryHostilityProbe<R> {
    reader: R,
}

impl<R: MemoryReader> MemoryHostilityProbe<R> {
    /// Wrap a memory reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: MemoryReader> HostilityProbe for MemoryHostilityProbe<R> {
    fn probe(&self, actor: &Actor) -> Hostility {
        let ActorKind::BattleNpc { sub_kind } = actor.kind else {
            return Hostility::Unknown;
        };
        if let BattleNpcKind::Unknown(raw) = sub_kind {
            tracing::trace!(object_id = actor.handle.object_id, raw, "unrecognized sub-kind");
            return Hostility::Unknown;
        }
        if !sub_kind.can_be_hostile() {
            return Hostility::Friendly;
        }

        if !actor.handle.has_address() {
            return Hostility::Unknown;
        }

        let base = actor.handle.address;
        let (Some(engagement), Some(nameplate)) = (
            self.reader.read_u8(base + ENGAGEMENT_OFFSET),
            self.reader.read_u8(base + NAMEPLATE_OFFSET),
        ) else {
            tracing::trace!(object_id = actor.handle.object_id, "hostility bytes unreadable");
            return Hostility::Unknown;
        };

        if engagement != 0 && nameplate != 1 {
            Hostility::Hostile
        } else {
            Hostility::Friendly
        }
    }
}

/// Reads bytes straight out of the current process.
#[derive(Debug)]
pub struct InProcessMemory {
    _private: (),
}

impl InProcessMemory {
    /// Create a reader over this process's memory.
    ///
    /// # Safety
    ///
    /// Every non-zero address later passed to [`MemoryReader::read_u8`] must
    /// point to readable memory of this process. In practice that means actor
    /// base addresses obtained from the game's object table during the current
    /// frame, plus the fixed hostility offsets.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl MemoryReader for InProcessMemory {
    #[allow(unsafe_code)]
    fn read_u8(&self, address: usize) -> Option<u8> {
        if address == 0 {
            return None;
        }
        // SAFETY: readability of non-null addresses is the contract of `new`.
        Some(unsafe { std::ptr::read_volatile(address as *const u8) })
    }
}

/// A sparse byte map standing in for process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryImage {
    bytes: HashMap<usize, u8>,
}

impl MemoryImage {
    /// Create an empty image; every read misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one byte.
    pub fn poke(&mut self, address: usize, value: u8) {
        self.bytes.insert(address, value);
    }

    /// Store both hostility bytes for an actor based at `base`.
    pub fn poke_hostility(&mut self, base: usize, engagement: u8, nameplate: u8) {
        self.poke(base + ENGAGEMENT_OFFSET, engagement);
        self.poke(base + NAMEPLATE_OFFSET, nameplate);
    }
}

impl MemoryReader for MemoryImage {
    fn read_u8(&self, address: usize) -> Option<u8> {
        self.bytes.get(&address).copied()
    }
}
