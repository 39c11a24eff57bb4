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

//! Per-frame signals reported by the host for one tracked vehicle.

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Snapshot of a vehicle's motion and contact state for one physics update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleSample {
    /// Velocity in the vehicle's local frame.
    pub velocity: Vec3,
    /// The vehicle is in contact with a wall this update.
    pub touching_wall: bool,
    /// The left side is grinding along a surface.
    pub scraping_left: bool,
    /// The right side is grinding along a surface.
    pub scraping_right: bool,
    /// The vehicle is magnetically locked to the track surface.
    pub on_maglock: bool,
    /// The vehicle is in a zero-gravity, wall-less context.
    pub in_vacuum: bool,
}

impl VehicleSample {
    /// Creates a sample with the given velocity and no contact signals.
    pub fn moving(velocity: Vec3) -> Self {
        Self {
            velocity,
            ..Default::default()
        }
    }

    /// Returns `true` if either side is scraping.
    #[inline]
    pub fn is_scraping(&self) -> bool {
        self.scraping_left || self.scraping_right
    }
}
