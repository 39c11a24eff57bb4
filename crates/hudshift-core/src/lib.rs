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

//! # HUD Shifter Core
//!
//! Foundational crate containing math primitives, identifiers, and the
//! interface contracts shared by the shifter lanes and agents.

#![warn(missing_docs)]

pub mod entity;
pub mod error;
pub mod lane;
pub mod math;
pub mod panel;
pub mod sample;
pub mod settings;
pub mod telemetry;

pub use entity::{EntityId, PanelId, SlotIndex, MAX_PANEL_COUNT, MAX_PLAYERS};
pub use error::{ShifterError, ShifterResult};
pub use panel::PanelHandle;
pub use sample::VehicleSample;
pub use settings::ShifterSettings;
