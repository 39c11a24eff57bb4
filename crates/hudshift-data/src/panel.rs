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

//! A registered panel and its displacement state.

use hudshift_core::math::Vec2;
use hudshift_core::PanelHandle;
use std::fmt;

/// Mutable position state advanced by the smoothing lane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelMotion {
    /// `origin + shift_target`, recomputed every frame.
    pub target_position: Vec2,
    /// Derivative state of the damped interpolation.
    pub smoothing_velocity: Vec2,
    /// Shift-only smoothed position, never polluted by shake.
    pub shifted_position: Vec2,
    /// `shifted_position + shake_vector` while a shake is active.
    pub shaking_position: Vec2,
}

/// A host panel tracked by one player slot.
pub struct Panel {
    name: String,
    handle: Box<dyn PanelHandle>,
    origin: Vec2,
    displayed: Vec2,
    visible: bool,
    /// Position state owned by the smoothing lane.
    pub motion: PanelMotion,
}

impl Panel {
    /// Wraps `handle`, capturing its current anchored position as the origin.
    pub fn new(handle: Box<dyn PanelHandle>, name: impl Into<String>) -> Self {
        let origin = handle.anchored_position();
        Self {
            name: name.into(),
            handle,
            origin,
            displayed: origin,
            visible: true,
            motion: PanelMotion {
                target_position: origin,
                smoothing_velocity: Vec2::ZERO,
                shifted_position: origin,
                shaking_position: origin,
            },
        }
    }

    /// The diagnostic name given at registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layout position captured at registration.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// The position last written to the host panel.
    #[inline]
    pub fn displayed_position(&self) -> Vec2 {
        self.displayed
    }

    /// Writes `position` to the host panel.
    pub fn display(&mut self, position: Vec2) {
        self.displayed = position;
        self.handle.set_anchored_position(position);
    }

    /// Returns `true` if the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the panel without touching its position state.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.handle.set_visible(visible);
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("name", &self.name)
            .field("origin", &self.origin)
            .field("displayed", &self.displayed)
            .field("visible", &self.visible)
            .field("motion", &self.motion)
            .finish()
    }
}
