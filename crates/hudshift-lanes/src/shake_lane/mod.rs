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

//! Shake Lane
//!
//! Evaluates the shake sources once per physics update, in priority order,
//! and decays the active shake when none fires. The first trigger that
//! reports an amplitude wins the frame; the shake amplitude is only ever
//! raised by a win, never lowered, until the duration runs out.

mod triggers;

pub use triggers::*;

use hudshift_core::lane::Lane;
use hudshift_core::math::Vec3;
use hudshift_core::VehicleSample;
use hudshift_data::bases::{BASE_SCRAPE_SHAKE, BASE_WALL_BOUNCE_SHAKE};
use hudshift_data::{AmountData, ShifterBases};
use std::fmt;

/// Lifetime given to a shake by any winning trigger.
pub const MAX_SHAKE_DURATION: f32 = 60.0;
/// Duration lost per second while no trigger fires.
pub const SHAKE_DECAY_RATE: f32 = 240.0;
/// Vertical speed gain at which a landing starts to shake.
pub const LANDING_MIN_DELTA: f32 = 10.0;
/// Vertical speed gain producing the full landing shake.
pub const LANDING_MAX_DELTA: f32 = 20.0;
/// One cannon hit costs about 9.5% of speed; scale so that reads as `1.0`.
pub const SPEED_CHANGE_SCALE: f32 = 1.0 / 0.095;
/// Lowest speed-change intensity treated as an impact. Keeps the
/// wall-to-scrape amplitude ratio between the floor and the ceiling.
pub const SPEED_LOSS_FLOOR: f32 = BASE_SCRAPE_SHAKE / BASE_WALL_BOUNCE_SHAKE;
/// Speed-change intensity producing the full wall-bounce shake.
pub const SPEED_LOSS_CEILING: f32 = 1.0;

/// Normalized magnitude of a speed change between two updates.
///
/// The denominator is floored at `1.0` so a vehicle starting from rest does
/// not divide by zero.
#[inline]
pub fn speed_change_intensity(previous_speed: f32, current_speed: f32) -> f32 {
    (current_speed - previous_speed).abs() / previous_speed.max(1.0) * SPEED_CHANGE_SCALE
}

/// The event that started or refreshed a shake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShakeSource {
    /// A hard landing on the track.
    Landing,
    /// Contact with a wall.
    WallImpact,
    /// A side grinding along a surface.
    Scrape,
    /// A sudden deceleration without an explicit contact signal.
    SpeedLoss,
}

impl ShakeSource {
    /// Every source, in evaluation order.
    pub const ALL: [ShakeSource; 4] = [
        ShakeSource::Landing,
        ShakeSource::WallImpact,
        ShakeSource::Scrape,
        ShakeSource::SpeedLoss,
    ];

    /// A short lowercase label used in telemetry.
    pub fn label(&self) -> &'static str {
        match self {
            ShakeSource::Landing => "landing",
            ShakeSource::WallImpact => "wall",
            ShakeSource::Scrape => "scrape",
            ShakeSource::SpeedLoss => "speed_loss",
        }
    }
}

impl fmt::Display for ShakeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a trigger may look at for one update.
#[derive(Debug, Clone, Copy)]
pub struct TriggerFrame<'a> {
    /// The host's sample for this update.
    pub sample: &'a VehicleSample,
    /// Velocity from the previous update.
    pub previous_velocity: Vec3,
    /// Speed this update.
    pub current_speed: f32,
    /// Speed the previous update.
    pub previous_speed: f32,
    /// Result of [`speed_change_intensity`] for this update.
    pub speed_change_intensity: f32,
    /// Current intensity bases.
    pub bases: &'a ShifterBases,
}

impl TriggerFrame<'_> {
    /// Vertical speed gained since the previous update.
    #[inline]
    pub fn vertical_delta(&self) -> f32 {
        self.sample.velocity.y - self.previous_velocity.y
    }

    /// Returns `true` if the vehicle slowed down this update.
    #[inline]
    pub fn decelerated(&self) -> bool {
        self.current_speed < self.previous_speed
    }
}

/// A single shake source.
pub trait ShakeTrigger: Lane {
    /// The source this trigger reports.
    fn source(&self) -> ShakeSource;

    /// Returns the candidate amplitude if this source fired.
    fn evaluate(&self, frame: &TriggerFrame<'_>) -> Option<f32>;
}

/// The lane driving shake state for one slot per physics update.
pub struct ShakeLane {
    triggers: Vec<Box<dyn ShakeTrigger>>,
}

impl ShakeLane {
    /// Creates the lane with the four standard triggers in priority order:
    /// landing, wall impact, scrape, speed loss.
    pub fn new() -> Self {
        Self::with_triggers(vec![
            Box::new(LandingTrigger),
            Box::new(WallImpactTrigger),
            Box::new(ScrapeTrigger),
            Box::new(SpeedLossTrigger),
        ])
    }

    /// Creates the lane with a custom, ordered list of triggers.
    pub fn with_triggers(triggers: Vec<Box<dyn ShakeTrigger>>) -> Self {
        Self { triggers }
    }

    /// The triggers in evaluation order.
    pub fn triggers(&self) -> impl Iterator<Item = &dyn ShakeTrigger> {
        self.triggers.iter().map(|t| t.as_ref())
    }

    /// Runs one update of the shake state machine and returns the winning
    /// source, if any.
    ///
    /// `previous_velocity` is replaced by the sample's velocity only after
    /// every trigger has compared against the old value.
    pub fn update(
        &self,
        amount: &mut AmountData,
        sample: &VehicleSample,
        bases: &ShifterBases,
        dt: f32,
    ) -> Option<ShakeSource> {
        amount.current_velocity = sample.velocity;

        let current_speed = amount.current_velocity.length();
        let previous_speed = amount.previous_velocity.length();
        amount.speed_change_intensity = speed_change_intensity(previous_speed, current_speed);

        let frame = TriggerFrame {
            sample,
            previous_velocity: amount.previous_velocity,
            current_speed,
            previous_speed,
            speed_change_intensity: amount.speed_change_intensity,
            bases,
        };

        let winner = self.triggers.iter().find_map(|trigger| {
            trigger
                .evaluate(&frame)
                .map(|amplitude| (trigger.source(), amplitude))
        });

        match winner {
            Some((source, amplitude)) => {
                if amplitude > amount.shake_amount {
                    amount.shake_amount = amplitude;
                }
                amount.shake_duration = MAX_SHAKE_DURATION;
                log::trace!(
                    "Shake from {source}: candidate {amplitude:.2}, amount {:.2}",
                    amount.shake_amount
                );
            }
            None => decay(amount, dt),
        }

        amount.previous_velocity = amount.current_velocity;
        winner.map(|(source, _)| source)
    }
}

impl Default for ShakeLane {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShakeLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.triggers.iter().map(|t| t.strategy_name()))
            .finish()
    }
}

fn decay(amount: &mut AmountData, dt: f32) {
    amount.shake_duration = (amount.shake_duration - SHAKE_DECAY_RATE * dt).max(0.0);
    if amount.shake_duration <= 0.0 {
        amount.shake_duration = 0.0;
        amount.shake_amount = 0.0;
    }
}
