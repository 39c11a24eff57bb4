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

//! # HUD Shifter Lanes
//!
//! Hot-path strategies run every physics or render tick:
//!
//! - [`shift_lane`] converts velocity into a panel offset.
//! - [`shake_lane`] decides which shake source fired and decays the shake.
//! - [`smoothing_lane`] moves panels toward their targets and overlays jitter.

#![warn(missing_docs)]

pub mod shake_lane;
pub mod shift_lane;
pub mod smoothing_lane;

pub use shake_lane::{ShakeLane, ShakeSource, ShakeTrigger, TriggerFrame};
pub use shift_lane::{compute_shift_target, ShiftLane};
pub use smoothing_lane::SmoothingLane;
