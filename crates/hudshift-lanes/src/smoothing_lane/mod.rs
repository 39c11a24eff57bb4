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

//! Smoothing Lane
//!
//! Advances every panel of a slot by one rendered frame: the shift-only
//! baseline follows the slot's shift target along a critically-damped
//! spring, and an active shake is overlaid on the displayed position
//! without feeding back into that baseline.

use hudshift_core::lane::{Lane, LaneKind};
use hudshift_core::math::{smooth_damp, Vec2, TAU};
use hudshift_data::{AmountData, Panel};
use rand::Rng;

/// Damping time constant, in seconds.
pub const SMOOTH_TIME: f32 = 0.2;

/// The lane moving panels once per rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct SmoothingLane {
    smooth_time: f32,
}

impl SmoothingLane {
    /// Creates a lane with the standard [`SMOOTH_TIME`].
    pub fn new() -> Self {
        Self::with_smooth_time(SMOOTH_TIME)
    }

    /// Creates a lane with a custom damping time constant.
    pub fn with_smooth_time(smooth_time: f32) -> Self {
        Self { smooth_time }
    }

    /// The damping time constant in use.
    pub fn smooth_time(&self) -> f32 {
        self.smooth_time
    }

    /// Advances `panels` by one frame of length `dt`.
    ///
    /// Draws this frame's shake vector into `amount` when a shake is active,
    /// and clears it otherwise. Returns the number of panels written.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        amount: &mut AmountData,
        panels: &mut [Panel],
        dt: f32,
        rng: &mut R,
    ) -> usize {
        let shaking = amount.is_shaking();
        amount.shake_vector = if shaking {
            Vec2::from_angle(rng.random_range(0.0..TAU)) * amount.shake_amount
        } else {
            Vec2::ZERO
        };

        let mut written = 0;
        for panel in panels.iter_mut() {
            let target = panel.origin() + amount.shift_target;
            panel.motion.target_position = target;

            // Settled and already displayed at rest: nothing to do.
            if !shaking
                && panel.motion.shifted_position.approx_eq(target)
                && panel.displayed_position() == panel.motion.shifted_position
            {
                continue;
            }

            let motion = &mut panel.motion;
            motion.shifted_position = smooth_damp(
                motion.shifted_position,
                target,
                &mut motion.smoothing_velocity,
                self.smooth_time,
                dt,
            );

            let position = if shaking {
                motion.shaking_position = motion.shifted_position + amount.shake_vector;
                motion.shaking_position
            } else {
                motion.shaking_position = motion.shifted_position;
                motion.shifted_position
            };
            panel.display(position);
            written += 1;
        }

        written
    }
}

impl Default for SmoothingLane {
    fn default() -> Self {
        Self::new()
    }
}

impl Lane for SmoothingLane {
    fn strategy_name(&self) -> &'static str {
        "CriticalDamp"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Smoothing
    }
}
