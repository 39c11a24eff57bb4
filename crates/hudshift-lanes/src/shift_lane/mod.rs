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

//! Shift Lane
//!
//! Converts a vehicle's local velocity into the offset its panels should
//! drift toward.

use hudshift_core::lane::{Lane, LaneKind};
use hudshift_core::math::{clamp, Vec2, Vec3};
use hudshift_core::VehicleSample;
use hudshift_data::{AmountData, ShifterBases};

/// Vertical emphasis under normal gravity.
pub const VERTICAL_EMPHASIS: f32 = -2.0;
/// Vertical emphasis in a vacuum, half the normal emphasis.
pub const VACUUM_VERTICAL_EMPHASIS: f32 = -1.0;
/// Bound on the vertical component of a shift target.
pub const MAX_VERTICAL_SHIFT: f32 = 127.5;

/// Computes the shift target for `velocity`.
///
/// The horizontal component is `velocity.x * shift_factor`, unclamped. The
/// vertical component is `velocity.y * shift_factor` times the vertical
/// emphasis, clamped to `±MAX_VERTICAL_SHIFT`.
///
/// # Examples
///
/// ```
/// use hudshift_core::math::{Vec2, Vec3};
/// use hudshift_lanes::compute_shift_target;
///
/// let target = compute_shift_target(Vec3::new(4.0, 10.0, 80.0), false, 0.5);
/// assert_eq!(target, Vec2::new(2.0, -10.0));
/// ```
pub fn compute_shift_target(velocity: Vec3, in_vacuum: bool, shift_factor: f32) -> Vec2 {
    let emphasis = if in_vacuum {
        VACUUM_VERTICAL_EMPHASIS
    } else {
        VERTICAL_EMPHASIS
    };

    let horizontal = velocity.x * shift_factor;
    let vertical = velocity.y * shift_factor * emphasis;

    Vec2::new(
        horizontal,
        clamp(vertical, -MAX_VERTICAL_SHIFT, MAX_VERTICAL_SHIFT),
    )
}

/// The lane writing [`AmountData::shift_target`] every physics update.
#[derive(Debug, Default)]
pub struct ShiftLane;

impl ShiftLane {
    /// Creates a new `ShiftLane`.
    pub fn new() -> Self {
        Self
    }

    /// Updates `amount.shift_target` from `sample`.
    pub fn apply(&self, amount: &mut AmountData, sample: &VehicleSample, bases: &ShifterBases) {
        amount.shift_target =
            compute_shift_target(sample.velocity, sample.in_vacuum, bases.shift_factor);
    }
}

impl Lane for ShiftLane {
    fn strategy_name(&self) -> &'static str {
        "VelocityShift"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Shift
    }
}
