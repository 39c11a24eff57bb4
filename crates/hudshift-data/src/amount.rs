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

//! Transient motion state of one tracked vehicle.

use hudshift_core::math::{Vec2, Vec3};

/// Per-slot physical state, rewritten by the physics tick and read by the
/// render tick.
///
/// At rest (no recent trigger, duration expired) both `shake_amount` and
/// `shake_duration` are exactly `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmountData {
    /// Desired panel offset this frame, in anchored units.
    pub shift_target: Vec2,
    /// Current shake magnitude.
    pub shake_amount: f32,
    /// This frame's randomized jitter; redrawn every frame while shaking.
    pub shake_vector: Vec2,
    /// Remaining shake lifetime. The shake is active iff this is positive.
    pub shake_duration: f32,
    /// Local-frame velocity reported this update.
    pub current_velocity: Vec3,
    /// Local-frame velocity from the previous update.
    pub previous_velocity: Vec3,
    /// Normalized magnitude of this update's speed change.
    pub speed_change_intensity: f32,
}

impl AmountData {
    /// Returns `true` while a shake is in progress.
    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shake_duration > 0.0
    }

    /// Returns `true` if every field is zero.
    pub fn is_at_rest(&self) -> bool {
        *self == Self::default()
    }

    /// Restores the zero state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
