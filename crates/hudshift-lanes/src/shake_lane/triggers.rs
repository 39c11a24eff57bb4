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

//! The four standard shake triggers.

use super::{
    ShakeSource, ShakeTrigger, TriggerFrame, LANDING_MAX_DELTA, LANDING_MIN_DELTA,
    SPEED_LOSS_CEILING, SPEED_LOSS_FLOOR,
};
use hudshift_core::lane::{Lane, LaneKind};
use hudshift_core::math::inverse_lerp;

/// Fires on a sharp gain in vertical speed while not maglocked.
#[derive(Debug, Default, Clone, Copy)]
pub struct LandingTrigger;

impl Lane for LandingTrigger {
    fn strategy_name(&self) -> &'static str {
        "Landing"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Shake
    }
}

impl ShakeTrigger for LandingTrigger {
    fn source(&self) -> ShakeSource {
        ShakeSource::Landing
    }

    fn evaluate(&self, frame: &TriggerFrame<'_>) -> Option<f32> {
        let delta = frame.vertical_delta();
        if delta <= LANDING_MIN_DELTA || frame.sample.on_maglock {
            return None;
        }
        let severity = inverse_lerp(LANDING_MIN_DELTA, LANDING_MAX_DELTA, delta);
        Some(severity * frame.bases.max_landing_shake)
    }
}

/// Fires with a flat amplitude while touching a wall.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallImpactTrigger;

impl Lane for WallImpactTrigger {
    fn strategy_name(&self) -> &'static str {
        "WallImpact"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Shake
    }
}

impl ShakeTrigger for WallImpactTrigger {
    fn source(&self) -> ShakeSource {
        ShakeSource::WallImpact
    }

    fn evaluate(&self, frame: &TriggerFrame<'_>) -> Option<f32> {
        frame
            .sample
            .touching_wall
            .then_some(frame.bases.wall_bounce_shake)
    }
}

/// Fires with a flat amplitude while either side scrapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrapeTrigger;

impl Lane for ScrapeTrigger {
    fn strategy_name(&self) -> &'static str {
        "Scrape"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Shake
    }
}

impl ShakeTrigger for ScrapeTrigger {
    fn source(&self) -> ShakeSource {
        ShakeSource::Scrape
    }

    fn evaluate(&self, frame: &TriggerFrame<'_>) -> Option<f32> {
        frame
            .sample
            .is_scraping()
            .then_some(frame.bases.scrape_shake)
    }
}

/// Fires on a sudden deceleration, catching impacts the host did not flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeedLossTrigger;

impl Lane for SpeedLossTrigger {
    fn strategy_name(&self) -> &'static str {
        "SpeedLoss"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Shake
    }
}

impl ShakeTrigger for SpeedLossTrigger {
    fn source(&self) -> ShakeSource {
        ShakeSource::SpeedLoss
    }

    fn evaluate(&self, frame: &TriggerFrame<'_>) -> Option<f32> {
        if frame.speed_change_intensity < SPEED_LOSS_FLOOR || !frame.decelerated() {
            return None;
        }
        let severity = inverse_lerp(
            SPEED_LOSS_FLOOR,
            SPEED_LOSS_CEILING,
            frame.speed_change_intensity,
        );
        Some(severity * frame.bases.wall_bounce_shake)
    }
}
