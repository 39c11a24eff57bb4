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

//! Error types for the shifter.

use crate::entity::SlotIndex;
use thiserror::Error;

/// Errors reported by the shifter registry and its configuration.
///
/// Operations against an untracked entity are deliberately not errors;
/// they are silent no-ops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShifterError {
    /// The slot already holds its maximum number of panels.
    #[error("{slot} already holds {capacity} panels")]
    CapacityExceeded {
        /// The slot that rejected the registration.
        slot: SlotIndex,
        /// The fixed per-slot capacity.
        capacity: usize,
    },
    /// A raw slot ordinal was outside `0..MAX_PLAYERS`.
    #[error("slot index {0} is out of range")]
    InvalidSlot(usize),
    /// A configuration multiplier was negative or not finite.
    #[error("setting '{name}' must be a finite, non-negative multiplier (got {value})")]
    InvalidSetting {
        /// The offending setting.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Convenience alias for results produced by the shifter.
pub type ShifterResult<T> = Result<T, ShifterError>;
