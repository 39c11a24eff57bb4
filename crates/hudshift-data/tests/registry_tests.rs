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


use hudshift_core::math::{Vec2, Vec3};
use hudshift_core::{
    EntityId, PanelHandle, ShifterError, ShifterSettings, SlotIndex, MAX_PANEL_COUNT,
};
use hudshift_data::ShifterRegistry;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct PanelState {
    position: Vec2,
    visible: bool,
}

/// A panel whose state stays observable after it is handed to the registry.
#[derive(Clone)]
struct MockPanel(Arc<Mutex<PanelState>>);

impl MockPanel {
    fn at(x: f32, y: f32) -> Self {
        MockPanel(Arc::new(Mutex::new(PanelState {
            position: Vec2::new(x, y),
            visible: true,
        })))
    }

    fn visible(&self) -> bool {
        self.0.lock().unwrap().visible
    }
}

impl PanelHandle for MockPanel {
    fn anchored_position(&self) -> Vec2 {
        self.0.lock().unwrap().position
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        self.0.lock().unwrap().position = position;
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.lock().unwrap().visible = visible;
    }
}

fn slot(index: usize) -> SlotIndex {
    SlotIndex::new(index).unwrap()
}

#[test]
fn test_register_captures_origin() {
    let mut registry = ShifterRegistry::new();
    let id = registry
        .register(Box::new(MockPanel::at(12.0, -4.0)), slot(0), "speedometer")
        .unwrap();

    assert_eq!(id.slot, slot(0));
    assert_eq!(id.ordinal, 0);

    let panel = &registry.slot(slot(0)).panels()[0];
    assert_eq!(panel.origin(), Vec2::new(12.0, -4.0));
    assert_eq!(panel.motion.shifted_position, Vec2::new(12.0, -4.0));
    assert_eq!(registry.panel_names(slot(0)), vec!["speedometer"]);
    assert!(registry.slot(slot(1)).panels().is_empty());
}

#[test]
fn test_register_beyond_capacity_fails() {
    let mut registry = ShifterRegistry::new();
    for i in 0..MAX_PANEL_COUNT {
        registry
            .register(Box::new(MockPanel::at(i as f32, 0.0)), slot(0), format!("p{i}"))
            .unwrap();
    }

    let result = registry.register(Box::new(MockPanel::at(99.0, 99.0)), slot(0), "overflow");
    assert_eq!(
        result,
        Err(ShifterError::CapacityExceeded {
            slot: slot(0),
            capacity: MAX_PANEL_COUNT,
        })
    );

    let panels = registry.slot(slot(0)).panels();
    assert_eq!(panels.len(), MAX_PANEL_COUNT);
    for (i, panel) in panels.iter().enumerate() {
        assert_eq!(panel.origin(), Vec2::new(i as f32, 0.0));
    }

    // The other slot keeps its own capacity.
    assert!(registry
        .register(Box::new(MockPanel::at(0.0, 0.0)), slot(1), "other")
        .is_ok());
}

#[test]
fn test_hide_and_show_only_affect_tracked_entity() {
    let mut registry = ShifterRegistry::new();
    let first = MockPanel::at(0.0, 0.0);
    let second = MockPanel::at(5.0, 5.0);
    registry.register(Box::new(first.clone()), slot(0), "a").unwrap();
    registry.register(Box::new(second.clone()), slot(1), "b").unwrap();
    registry.track(slot(0), EntityId(7));

    assert!(registry.hide(EntityId(7)));
    assert!(!first.visible());
    assert!(second.visible());
    assert!(!registry.slot(slot(0)).panels()[0].is_visible());

    // Position state is left alone.
    assert_eq!(
        registry.slot(slot(0)).panels()[0].motion.shifted_position,
        Vec2::ZERO
    );

    assert!(registry.show(EntityId(7)));
    assert!(first.visible());

    // Unknown entity: silent no-op.
    assert!(!registry.hide(EntityId(42)));
    assert!(second.visible());
}

#[test]
fn test_tracking_entity_on_second_slot_moves_it() {
    let mut registry = ShifterRegistry::new();
    let first = MockPanel::at(0.0, 0.0);
    let second = MockPanel::at(5.0, 5.0);
    registry.register(Box::new(first.clone()), slot(0), "a").unwrap();
    registry.register(Box::new(second.clone()), slot(1), "b").unwrap();

    registry.track(slot(0), EntityId(7));
    registry.track(slot(1), EntityId(7));

    assert_eq!(registry.tracked_entity(slot(0)), None);
    assert_eq!(registry.tracked_entity(slot(1)), Some(EntityId(7)));
    assert_eq!(registry.slot_of(EntityId(7)), Some(slot(1)));

    assert!(registry.hide(EntityId(7)));
    assert!(first.visible());
    assert!(!second.visible());

    // Re-tracking on the same slot keeps the binding.
    registry.track(slot(1), EntityId(7));
    assert_eq!(registry.slot_of(EntityId(7)), Some(slot(1)));
}

#[test]
fn test_flush_clears_everything() {
    let mut registry = ShifterRegistry::new();
    registry.register(Box::new(MockPanel::at(1.0, 1.0)), slot(0), "a").unwrap();
    registry.register(Box::new(MockPanel::at(2.0, 2.0)), slot(1), "b").unwrap();
    registry.track(slot(0), EntityId(1));
    registry.track(slot(1), EntityId(2));
    registry.slot_mut(slot(0)).amount.shake_amount = 30.0;
    registry.slot_mut(slot(0)).amount.shake_duration = 60.0;
    registry.slot_mut(slot(1)).amount.current_velocity = Vec3::new(0.0, 0.0, 50.0);

    registry.flush();

    for s in SlotIndex::all() {
        assert!(registry.slot(s).panels().is_empty());
        assert!(registry.slot(s).amount.is_at_rest());
        assert_eq!(registry.tracked_entity(s), None);
    }
    assert!(!registry.hide(EntityId(1)));
    assert!(!registry.show(EntityId(2)));
    assert_eq!(registry.panel_count(), 0);
}

#[test]
fn test_flush_slot_leaves_other_slot_tracked() {
    let mut registry = ShifterRegistry::new();
    registry.track(slot(0), EntityId(10));
    registry.track(slot(1), EntityId(20));
    registry.register(Box::new(MockPanel::at(0.0, 0.0)), slot(1), "b").unwrap();

    registry.flush_slot(slot(0));

    assert_eq!(registry.tracked_entity(slot(0)), None);
    assert_eq!(registry.tracked_entity(slot(1)), Some(EntityId(20)));
    assert_eq!(registry.slot(slot(1)).panels().len(), 1);
}

#[test]
fn test_register_after_flush_starts_from_new_origin() {
    let mut registry = ShifterRegistry::new();
    registry.register(Box::new(MockPanel::at(1.0, 1.0)), slot(0), "old").unwrap();
    registry.flush();

    let id = registry
        .register(Box::new(MockPanel::at(30.0, 40.0)), slot(0), "new")
        .unwrap();
    assert_eq!(id.ordinal, 0);

    let panel = &registry.slot(slot(0)).panels()[0];
    assert_eq!(panel.origin(), Vec2::new(30.0, 40.0));
    assert_eq!(panel.motion.target_position, Vec2::new(30.0, 40.0));
    assert_eq!(panel.motion.smoothing_velocity, Vec2::ZERO);
    assert!(registry.slot(slot(0)).amount.is_at_rest());
}

#[test]
fn test_invalid_settings_keep_previous_bases() {
    let mut registry = ShifterRegistry::new();
    registry
        .apply_settings(&ShifterSettings {
            shake_intensity: 2.0,
            ..Default::default()
        })
        .unwrap();
    let before = registry.bases();
    assert_eq!(before.wall_bounce_shake, 60.0);

    let result = registry.apply_settings(&ShifterSettings {
        shift_intensity: f32::INFINITY,
        ..Default::default()
    });
    assert!(result.is_err());
    assert_eq!(registry.bases(), before);
    assert_eq!(registry.settings().shake_intensity, 2.0);
}

#[test]
fn test_retracking_slot_replaces_binding() {
    let mut registry = ShifterRegistry::new();
    registry.track(slot(0), EntityId(1));
    registry.track(slot(0), EntityId(2));
    assert_eq!(registry.slot_of(EntityId(1)), None);
    assert_eq!(registry.slot_of(EntityId(2)), Some(slot(0)));
}
