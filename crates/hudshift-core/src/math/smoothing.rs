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

//! Critically-damped smoothing for panel positions.

use super::Vec2;

/// Lower bound on the smoothing time constant, keeps `omega` finite.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Moves `current` toward `target` along a critically-damped spring.
///
/// `velocity` is the spring's derivative state and must be carried between
/// calls; it is reset to zero when the step would overshoot `target`.
/// `smooth_time` is roughly the time needed to reach the target. A
/// non-positive `dt` leaves both position and velocity untouched.
///
/// The exponential decay is approximated by the polynomial from
/// *Game Programming Gems 4*, ch. 1.10.
///
/// # Examples
///
/// ```
/// use hudshift_core::math::{smooth_damp, Vec2};
///
/// let mut velocity = Vec2::ZERO;
/// let mut position = Vec2::ZERO;
/// let target = Vec2::new(10.0, 0.0);
/// for _ in 0..600 {
///     position = smooth_damp(position, target, &mut velocity, 0.2, 1.0 / 60.0);
/// }
/// assert!(position.approx_eq(target));
/// ```
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * decay;
    let mut output = target + (change + temp) * decay;

    // Never step past the target.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec2::ZERO;
    }

    output
}
