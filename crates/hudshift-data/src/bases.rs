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

//! Intensity bases derived from user settings.

use hudshift_core::ShifterSettings;

/// Base factor applied to local velocity to obtain a shift offset.
pub const BASE_SHIFT_FACTOR: f32 = 0.5;
/// Peak landing shake before the impact multiplier.
pub const BASE_LANDING_SHAKE: f32 = 40.0;
/// Wall-bounce shake before the impact multiplier.
pub const BASE_WALL_BOUNCE_SHAKE: f32 = 30.0;
/// Scraping shake before the scrape multiplier.
pub const BASE_SCRAPE_SHAKE: f32 = 6.0;

/// Scalars derived from [`ShifterSettings`], read every physics update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShifterBases {
    /// Velocity-to-offset factor.
    pub shift_factor: f32,
    /// Amplitude of the hardest landing.
    pub max_landing_shake: f32,
    /// Amplitude of a wall impact.
    pub wall_bounce_shake: f32,
    /// Amplitude of side scraping.
    pub scrape_shake: f32,
}

impl ShifterBases {
    /// Derives the bases from a set of multipliers.
    pub fn from_settings(settings: &ShifterSettings) -> Self {
        Self {
            shift_factor: BASE_SHIFT_FACTOR * settings.shift_intensity,
            max_landing_shake: BASE_LANDING_SHAKE * settings.shake_intensity,
            wall_bounce_shake: BASE_WALL_BOUNCE_SHAKE * settings.shake_intensity,
            scrape_shake: BASE_SCRAPE_SHAKE * settings.scrape_intensity,
        }
    }
}

impl Default for ShifterBases {
    fn default() -> Self {
        Self::from_settings(&ShifterSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bases_scale_with_their_own_multiplier() {
        let bases = ShifterBases::from_settings(&ShifterSettings {
            shift_intensity: 2.0,
            shake_intensity: 0.5,
            scrape_intensity: 3.0,
        });
        assert_eq!(bases.shift_factor, 1.0);
        assert_eq!(bases.max_landing_shake, 20.0);
        assert_eq!(bases.wall_bounce_shake, 15.0);
        assert_eq!(bases.scrape_shake, 18.0);
    }
}
