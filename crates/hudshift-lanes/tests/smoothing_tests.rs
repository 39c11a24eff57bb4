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


use approx::assert_relative_eq;
use hudshift_core::math::{Vec2, Vec3};
use hudshift_core::{PanelHandle, VehicleSample};
use hudshift_data::{AmountData, Panel, ShifterBases};
use hudshift_lanes::shake_lane::MAX_SHAKE_DURATION;
use hudshift_lanes::{ShakeLane, ShiftLane, SmoothingLane};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

const DT: f32 = 1.0 / 60.0;

#[derive(Clone)]
struct MockPanel(Arc<Mutex<Vec2>>);

impl MockPanel {
    fn at(x: f32, y: f32) -> Self {
        MockPanel(Arc::new(Mutex::new(Vec2::new(x, y))))
    }

    fn position(&self) -> Vec2 {
        *self.0.lock().unwrap()
    }
}

impl PanelHandle for MockPanel {
    fn anchored_position(&self) -> Vec2 {
        self.position()
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        *self.0.lock().unwrap() = position;
    }

    fn set_visible(&mut self, _visible: bool) {}
}

fn panels_at(origins: &[(f32, f32)]) -> (Vec<Panel>, Vec<MockPanel>) {
    let mocks: Vec<MockPanel> = origins.iter().map(|&(x, y)| MockPanel::at(x, y)).collect();
    let panels = mocks
        .iter()
        .enumerate()
        .map(|(i, m)| Panel::new(Box::new(m.clone()), format!("panel{i}")))
        .collect();
    (panels, mocks)
}

#[test]
fn test_panels_follow_shift_target() {
    let lane = SmoothingLane::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let (mut panels, mocks) = panels_at(&[(0.0, 0.0), (100.0, -50.0)]);
    let mut amount = AmountData {
        shift_target: Vec2::new(10.0, -20.0),
        ..Default::default()
    };

    let mut last_distance = f32::MAX;
    for _ in 0..180 {
        lane.advance(&mut amount, &mut panels, DT, &mut rng);
        let motion = panels[0].motion;
        let distance = (motion.target_position - motion.shifted_position).length();
        assert!(distance <= last_distance);
        last_distance = distance;
    }

    for (panel, mock) in panels.iter().zip(&mocks) {
        let expected = panel.origin() + Vec2::new(10.0, -20.0);
        assert_eq!(panel.motion.target_position, expected);
        assert_relative_eq!(mock.position().x, expected.x, epsilon = 1e-2);
        assert_relative_eq!(mock.position().y, expected.y, epsilon = 1e-2);
        assert_eq!(mock.position(), panel.motion.shifted_position);
    }
}

#[test]
fn test_shake_overlays_without_polluting_baseline() {
    let lane = SmoothingLane::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let (mut calm_panels, _) = panels_at(&[(10.0, 10.0)]);
    let (mut shaken_panels, shaken_mocks) = panels_at(&[(10.0, 10.0)]);

    let mut calm = AmountData {
        shift_target: Vec2::new(30.0, 5.0),
        ..Default::default()
    };
    let mut shaken = AmountData {
        shake_amount: 12.0,
        shake_duration: MAX_SHAKE_DURATION,
        ..calm
    };

    for _ in 0..20 {
        lane.advance(&mut calm, &mut calm_panels, DT, &mut rng);
        lane.advance(&mut shaken, &mut shaken_panels, DT, &mut rng);

        let baseline = shaken_panels[0].motion.shifted_position;
        assert_eq!(baseline, calm_panels[0].motion.shifted_position);

        let jitter = shaken_mocks[0].position() - baseline;
        assert_relative_eq!(jitter.length(), 12.0, epsilon = 1e-3);
        assert_relative_eq!(jitter.x, shaken.shake_vector.x, epsilon = 1e-4);
        assert_relative_eq!(jitter.y, shaken.shake_vector.y, epsilon = 1e-4);
    }
    assert_eq!(calm.shake_vector, Vec2::ZERO);
}

#[test]
fn test_settled_panels_are_skipped() {
    let lane = SmoothingLane::new();
    let mut rng = SmallRng::seed_from_u64(3);
    let (mut panels, _) = panels_at(&[(0.0, 0.0), (1.0, 1.0)]);
    let mut amount = AmountData::default();

    // Already at origin with no shift: nothing to write.
    assert_eq!(lane.advance(&mut amount, &mut panels, DT, &mut rng), 0);

    amount.shift_target = Vec2::new(4.0, 0.0);
    assert_eq!(lane.advance(&mut amount, &mut panels, DT, &mut rng), 2);

    for _ in 0..1200 {
        lane.advance(&mut amount, &mut panels, DT, &mut rng);
    }
    assert_eq!(lane.advance(&mut amount, &mut panels, DT, &mut rng), 0);
}

#[test]
fn test_display_returns_to_baseline_when_shake_ends() {
    let lane = SmoothingLane::new();
    let mut rng = SmallRng::seed_from_u64(9);
    let (mut panels, mocks) = panels_at(&[(0.0, 0.0)]);
    let mut amount = AmountData {
        shake_amount: 8.0,
        shake_duration: 1.0,
        ..Default::default()
    };

    lane.advance(&mut amount, &mut panels, DT, &mut rng);
    assert_ne!(mocks[0].position(), Vec2::ZERO);

    amount.shake_amount = 0.0;
    amount.shake_duration = 0.0;
    lane.advance(&mut amount, &mut panels, DT, &mut rng);
    assert_eq!(mocks[0].position(), Vec2::ZERO);
    assert_eq!(amount.shake_vector, Vec2::ZERO);
}

#[test]
fn test_physics_and_render_ticks_compose() {
    let shift = ShiftLane::new();
    let shake = ShakeLane::new();
    let smoothing = SmoothingLane::new();
    let bases = ShifterBases::default();
    let mut rng = SmallRng::seed_from_u64(11);
    let (mut panels, mocks) = panels_at(&[(0.0, 0.0)]);
    let mut amount = AmountData::default();

    let sample = VehicleSample::moving(Vec3::new(20.0, 0.0, 50.0));
    for _ in 0..240 {
        shift.apply(&mut amount, &sample, &bases);
        shake.update(&mut amount, &sample, &bases, DT);
        smoothing.advance(&mut amount, &mut panels, DT, &mut rng);
    }

    assert_eq!(amount.shift_target, Vec2::new(10.0, 0.0));
    assert!(!amount.is_shaking());
    assert_relative_eq!(mocks[0].position().x, 10.0, epsilon = 1e-2);
}
