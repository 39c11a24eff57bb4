// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Identifiers for tracked vehicles, their slots, and their panels.

use crate::error::ShifterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of simultaneously tracked vehicles.
pub const MAX_PLAYERS: usize = 2;

/// Number of panels a single slot may own.
pub const MAX_PANEL_COUNT: usize = 20;

/// Opaque identifier of a vehicle, supplied by the host game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// A validated index into the fixed set of player slots.
///
/// Holding a `SlotIndex` guarantees `index < MAX_PLAYERS`, so slot arrays
/// can be indexed without bounds failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Returns the slot for `index`, or `None` if it exceeds `MAX_PLAYERS`.
    #[inline]
    pub const fn new(index: usize) -> Option<Self> {
        if index < MAX_PLAYERS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The first player's slot.
    pub const FIRST: Self = Self(0);

    /// Returns the raw ordinal.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Iterates over every slot in ascending order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..MAX_PLAYERS).map(SlotIndex)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = ShifterError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        SlotIndex::new(index).ok_or(ShifterError::InvalidSlot(index))
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// Identifies a registered panel by its owning slot and registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId {
    /// The slot that owns the panel.
    pub slot: SlotIndex,
    /// Position of the panel within the slot's collection.
    pub ordinal: usize,
}
