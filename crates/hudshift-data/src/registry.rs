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

//! Fixed-capacity storage of player slots and their panels.

use crate::amount::AmountData;
use crate::bases::ShifterBases;
use crate::panel::Panel;
use hudshift_core::{
    EntityId, PanelHandle, PanelId, ShifterError, ShifterResult, ShifterSettings, SlotIndex,
    MAX_PANEL_COUNT, MAX_PLAYERS,
};

/// Everything owned by one player slot.
#[derive(Debug)]
pub struct PlayerSlot {
    tracked: Option<EntityId>,
    /// Transient motion state of the tracked vehicle.
    pub amount: AmountData,
    panels: Vec<Panel>,
}

impl PlayerSlot {
    fn new() -> Self {
        Self {
            tracked: None,
            amount: AmountData::default(),
            panels: Vec::with_capacity(MAX_PANEL_COUNT),
        }
    }

    /// The entity currently bound to this slot.
    pub fn tracked(&self) -> Option<EntityId> {
        self.tracked
    }

    /// The slot's panels in registration order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Splits the slot into its motion state and its panels so both can be
    /// advanced in the same pass.
    pub fn split_mut(&mut self) -> (&mut AmountData, &mut [Panel]) {
        (&mut self.amount, &mut self.panels)
    }

    fn set_visible(&mut self, visible: bool) {
        for panel in &mut self.panels {
            panel.set_visible(visible);
        }
    }

    fn clear(&mut self) {
        self.tracked = None;
        self.amount.reset();
        self.panels.clear();
    }
}

/// Owns the per-slot panel collections and motion state, plus the
/// intensity bases shared by every slot.
#[derive(Debug)]
pub struct ShifterRegistry {
    settings: ShifterSettings,
    bases: ShifterBases,
    slots: [PlayerSlot; MAX_PLAYERS],
}

impl ShifterRegistry {
    /// Creates an empty registry with default settings.
    pub fn new() -> Self {
        Self {
            settings: ShifterSettings::default(),
            bases: ShifterBases::default(),
            slots: std::array::from_fn(|_| PlayerSlot::new()),
        }
    }

    /// Recomputes the derived bases from `settings`.
    ///
    /// Affects subsequent updates only. Invalid settings are rejected and
    /// the previous bases stay in effect.
    pub fn apply_settings(&mut self, settings: &ShifterSettings) -> ShifterResult<()> {
        settings.validate()?;
        self.settings = *settings;
        self.bases = ShifterBases::from_settings(settings);
        log::debug!("Applied shifter settings: {:?}", self.bases);
        Ok(())
    }

    /// The settings currently in effect.
    pub fn settings(&self) -> &ShifterSettings {
        &self.settings
    }

    /// The bases derived from the current settings.
    pub fn bases(&self) -> ShifterBases {
        self.bases
    }

    /// Appends a panel to `slot`.
    ///
    /// Fails with [`ShifterError::CapacityExceeded`] once the slot holds
    /// `MAX_PANEL_COUNT` panels; existing panels are left untouched.
    pub fn register(
        &mut self,
        handle: Box<dyn PanelHandle>,
        slot: SlotIndex,
        name: impl Into<String>,
    ) -> ShifterResult<PanelId> {
        let entry = &mut self.slots[slot.get()];
        if entry.panels.len() >= MAX_PANEL_COUNT {
            return Err(ShifterError::CapacityExceeded {
                slot,
                capacity: MAX_PANEL_COUNT,
            });
        }

        let panel = Panel::new(handle, name);
        log::debug!(
            "Registered panel '{}' on {} at {:?}",
            panel.name(),
            slot,
            panel.origin()
        );
        entry.panels.push(panel);

        Ok(PanelId {
            slot,
            ordinal: entry.panels.len() - 1,
        })
    }

    /// Binds `entity` to `slot`, replacing any previous binding.
    ///
    /// An entity is tracked by at most one slot: if another slot already
    /// tracks `entity`, that binding is dropped.
    pub fn track(&mut self, slot: SlotIndex, entity: EntityId) {
        if let Some(previous) = self.slot_of(entity).filter(|&s| s != slot) {
            log::debug!("Moving {entity} from {previous} to {slot}");
            self.slots[previous.get()].tracked = None;
        } else {
            log::debug!("Tracking {entity} on {slot}");
        }
        self.slots[slot.get()].tracked = Some(entity);
    }

    /// The entity bound to `slot`, if any.
    pub fn tracked_entity(&self, slot: SlotIndex) -> Option<EntityId> {
        self.slots[slot.get()].tracked
    }

    /// Finds the slot tracking `entity`.
    pub fn slot_of(&self, entity: EntityId) -> Option<SlotIndex> {
        SlotIndex::all().find(|slot| self.slots[slot.get()].tracked == Some(entity))
    }

    /// Clears every slot. Intended to run once between sessions.
    pub fn flush(&mut self) {
        for slot in SlotIndex::all() {
            self.flush_slot(slot);
        }
    }

    /// Clears the tracked entity, motion state and panels of `slot` only.
    pub fn flush_slot(&mut self, slot: SlotIndex) {
        let entry = &mut self.slots[slot.get()];
        log::debug!("Flushing {} ({} panels)", slot, entry.panels.len());
        entry.clear();
    }

    /// Hides every panel owned by `entity`'s slot.
    ///
    /// Returns `false` without doing anything if `entity` is not tracked.
    pub fn hide(&mut self, entity: EntityId) -> bool {
        self.set_visible(entity, false)
    }

    /// Shows every panel owned by `entity`'s slot.
    ///
    /// Returns `false` without doing anything if `entity` is not tracked.
    pub fn show(&mut self, entity: EntityId) -> bool {
        self.set_visible(entity, true)
    }

    fn set_visible(&mut self, entity: EntityId, visible: bool) -> bool {
        match self.slot_of(entity) {
            Some(slot) => {
                self.slots[slot.get()].set_visible(visible);
                true
            }
            None => {
                log::trace!("Ignoring visibility change for untracked {entity}");
                false
            }
        }
    }

    /// Read access to a slot.
    pub fn slot(&self, slot: SlotIndex) -> &PlayerSlot {
        &self.slots[slot.get()]
    }

    /// Mutable access to a slot.
    pub fn slot_mut(&mut self, slot: SlotIndex) -> &mut PlayerSlot {
        &mut self.slots[slot.get()]
    }

    /// Diagnostic names of `slot`'s panels, in registration order.
    pub fn panel_names(&self, slot: SlotIndex) -> Vec<&str> {
        self.slots[slot.get()]
            .panels
            .iter()
            .map(Panel::name)
            .collect()
    }

    /// Total number of registered panels across all slots.
    pub fn panel_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.panels.len()).sum()
    }
}

impl Default for ShifterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
