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

//! # HUD Shifter Agents
//!
//! The [`ShifterAgent`](shifter_agent::ShifterAgent) owns the registry and
//! the lanes, and exposes the two entry points the host calls: one per
//! physics update and one per rendered frame.

#![warn(missing_docs)]

pub mod shifter_agent;

pub use shifter_agent::{ShifterAgent, SmoothingTask, TaskPoll};
