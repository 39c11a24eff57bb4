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

//! The contract between the shifter and the host's on-screen panels.

use crate::math::Vec2;

/// An opaque, 2D-positionable on-screen element owned by the host UI.
///
/// The shifter never renders anything itself; it only reads a panel's
/// anchored position once at registration and writes displaced positions
/// back every frame.
pub trait PanelHandle: Send {
    /// Returns the panel's current anchored position.
    fn anchored_position(&self) -> Vec2;

    /// Moves the panel to `position` in anchored space.
    fn set_anchored_position(&mut self, position: Vec2);

    /// Shows or hides the panel.
    fn set_visible(&mut self, visible: bool);
}
