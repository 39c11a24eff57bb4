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

//! # Lane Abstraction
//!
//! A **Lane** is a small, swappable processing strategy owned by the
//! shifter agent. Each lane encapsulates one step of the per-frame pipeline:
//!
//! - `ShiftLane` turns a velocity into a shift target.
//! - `ShakeTrigger` lanes each decide whether one shake source fired.
//! - `SmoothingLane` advances panel positions toward their targets.
//!
//! Domain-specific traits extend [`Lane`] with their own execution method;
//! this trait only carries identity and classification, which the agent
//! uses for logging and telemetry labels.

use std::fmt;

/// Classification of lane types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Velocity to shift-target conversion.
    Shift,
    /// Shake source evaluation.
    Shake,
    /// Per-frame panel interpolation.
    Smoothing,
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Shift => write!(f, "Shift"),
            LaneKind::Shake => write!(f, "Shake"),
            LaneKind::Smoothing => write!(f, "Smoothing"),
        }
    }
}

/// The interface shared by every lane.
pub trait Lane: Send + Sync {
    /// Human-readable name identifying this lane's strategy.
    ///
    /// Should be unique within a lane kind (e.g. `"Landing"`, `"CriticalDamp"`).
    fn strategy_name(&self) -> &'static str;

    /// The kind of processing this lane performs.
    fn lane_kind(&self) -> LaneKind;
}
