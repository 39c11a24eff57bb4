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

//! User-facing intensity multipliers.
//!
//! Persisting these values belongs to the host; this module only defines
//! their shape and validation so they can be deserialized from any format
//! the host prefers.

use crate::error::{ShifterError, ShifterResult};
use serde::{Deserialize, Serialize};

/// The three externally supplied intensity multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShifterSettings {
    /// Scales how far panels shift with velocity.
    pub shift_intensity: f32,
    /// Scales landing and wall-impact shakes.
    pub shake_intensity: f32,
    /// Scales scraping shakes.
    pub scrape_intensity: f32,
}

impl Default for ShifterSettings {
    fn default() -> Self {
        Self {
            shift_intensity: 1.0,
            shake_intensity: 1.0,
            scrape_intensity: 1.0,
        }
    }
}

impl ShifterSettings {
    /// Checks that every multiplier is finite and non-negative.
    ///
    /// Zero is accepted and disables the corresponding effect.
    pub fn validate(&self) -> ShifterResult<()> {
        for (name, value) in [
            ("shift_intensity", self.shift_intensity),
            ("shake_intensity", self.shake_intensity),
            ("scrape_intensity", self.scrape_intensity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ShifterError::InvalidSetting { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ShifterSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        let negative = ShifterSettings {
            shake_intensity: -0.5,
            ..Default::default()
        };
        assert_eq!(
            negative.validate(),
            Err(ShifterError::InvalidSetting {
                name: "shake_intensity",
                value: -0.5
            })
        );

        let nan = ShifterSettings {
            scrape_intensity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ShifterError::InvalidSetting {
                name: "scrape_intensity",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_document_falls_back_to_defaults() {
        let settings: ShifterSettings =
            serde_json::from_str(r#"{ "shift_intensity": 2.5 }"#).unwrap();
        assert_eq!(settings.shift_intensity, 2.5);
        assert_eq!(settings.shake_intensity, 1.0);
        assert_eq!(settings.scrape_intensity, 1.0);
    }
}
