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

//! Frame-synchronized smoothing task for one player slot.
//!
//! The task is a two-state machine driven by the render tick instead of a
//! language-level coroutine: each poll runs one loop body and then yields
//! unconditionally until the next frame.

/// Lifecycle of a slot's smoothing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    /// Not started; polls do nothing.
    #[default]
    Idle,
    /// Running; one body per rendered frame.
    Running {
        /// Frames executed since the last (re)start.
        frames: u64,
    },
}

/// Outcome of polling a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPoll<T> {
    /// The task is idle and did not run.
    Idle,
    /// The task ran one body and yielded until the next frame.
    Yielded(T),
}

/// Per-slot smoothing task.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothingTask {
    state: TaskState,
}

impl SmoothingTask {
    /// Creates an idle task.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the task if idle. Returns `false` if it was already running;
    /// a running task is never re-entered.
    pub fn start(&mut self) -> bool {
        match self.state {
            TaskState::Idle => {
                self.state = TaskState::Running { frames: 0 };
                true
            }
            TaskState::Running { .. } => false,
        }
    }

    /// Replaces the task with a freshly started one.
    pub fn restart(&mut self) {
        self.state = TaskState::Running { frames: 0 };
    }

    /// The current state.
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Returns `true` while running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, TaskState::Running { .. })
    }

    /// Frames executed since the last (re)start.
    pub fn frames(&self) -> u64 {
        match self.state {
            TaskState::Idle => 0,
            TaskState::Running { frames } => frames,
        }
    }

    /// Runs one loop body if the task is running, then yields.
    pub fn poll<T>(&mut self, body: impl FnOnce() -> T) -> TaskPoll<T> {
        match &mut self.state {
            TaskState::Idle => TaskPoll::Idle,
            TaskState::Running { frames } => {
                let output = body();
                *frames += 1;
                TaskPoll::Yielded(output)
            }
        }
    }
}
