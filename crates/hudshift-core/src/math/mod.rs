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

//! Math primitives for panel-space offsets and vehicle-space velocities.
//!
//! Positions handed to panels live in a 2D anchored space; velocities
//! reported by the host live in the vehicle's local 3D frame. All angular
//! functions operate in **radians**.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::{PI, TAU};

// --- Declare Sub-Modules ---

pub mod smoothing;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::smoothing::smooth_damp;
pub use self::vector::{Vec2, Vec3};

// --- Utility Functions ---

/// Clamps a value to a specified minimum and maximum range.
///
/// # Examples
///
/// ```
/// use hudshift_core::math::clamp;
/// assert_eq!(clamp(130.0, -127.5, 127.5), 127.5);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
///
/// # Examples
///
/// ```
/// use hudshift_core::math::saturate;
/// assert_eq!(saturate(1.5), 1.0);
/// assert_eq!(saturate(-0.5), 0.0);
/// ```
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Maps `value` from the `[start, end]` range onto `[0.0, 1.0]`, saturating
/// outside of it. A degenerate range yields `0.0`.
///
/// # Examples
///
/// ```
/// use hudshift_core::math::inverse_lerp;
/// assert_eq!(inverse_lerp(10.0, 20.0, 15.0), 0.5);
/// assert_eq!(inverse_lerp(10.0, 20.0, 25.0), 1.0);
/// ```
#[inline]
pub fn inverse_lerp(start: f32, end: f32, value: f32) -> f32 {
    let span = end - start;
    if span.abs() < EPSILON {
        return 0.0;
    }
    saturate((value - start) / span)
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use hudshift_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
