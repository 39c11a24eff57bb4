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

//! Defines the ShifterAgent, the orchestrator of the HUD shifter.

use super::task::{SmoothingTask, TaskPoll};
use hudshift_core::lane::Lane;
use hudshift_core::telemetry::{MetricId, MetricsError};
use hudshift_core::{
    EntityId, PanelHandle, PanelId, ShifterResult, ShifterSettings, SlotIndex, VehicleSample,
    MAX_PLAYERS,
};
use hudshift_data::{AmountData, ShifterRegistry};
use hudshift_lanes::{ShakeLane, ShakeSource, ShiftLane, SmoothingLane};
use hudshift_telemetry::{CounterHandle, GaugeHandle, MetricsRegistry};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Telemetry handles for the shifter.
struct ShifterMetrics {
    shake_triggers: Vec<(ShakeSource, CounterHandle)>,
    active_shakes: GaugeHandle,
    registered_panels: GaugeHandle,
}

impl ShifterMetrics {
    fn register(registry: &MetricsRegistry) -> Result<Self, MetricsError> {
        let shake_triggers = ShakeSource::ALL
            .iter()
            .map(|&source| {
                let id = MetricId::new("shifter", "shake_triggers")
                    .with_label("source", source.label());
                registry.register_counter(id).map(|handle| (source, handle))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            shake_triggers,
            active_shakes: registry.register_gauge(MetricId::new("shifter", "active_shakes"))?,
            registered_panels: registry
                .register_gauge(MetricId::new("shifter", "registered_panels"))?,
        })
    }

    fn record_trigger(&self, source: ShakeSource) {
        if let Some((_, counter)) = self.shake_triggers.iter().find(|(s, _)| *s == source) {
            let _ = counter.increment();
        }
    }
}

fn describe(lane: &dyn Lane) -> String {
    format!("{}/{}", lane.lane_kind(), lane.strategy_name())
}

/// The agent responsible for displacing HUD panels.
///
/// The host calls [`update_amount`](Self::update_amount) from its physics
/// tick and [`render_tick`](Self::render_tick) once per rendered frame. Both
/// run on the same execution context; no locking is involved.
pub struct ShifterAgent {
    registry: ShifterRegistry,
    shift_lane: ShiftLane,
    shake_lane: ShakeLane,
    smoothing_lane: SmoothingLane,
    tasks: [SmoothingTask; MAX_PLAYERS],
    rng: SmallRng,
    metrics: Option<ShifterMetrics>,
}

impl ShifterAgent {
    /// Creates an agent seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Creates an agent with a fixed seed, for deterministic replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        let agent = Self {
            registry: ShifterRegistry::new(),
            shift_lane: ShiftLane::new(),
            shake_lane: ShakeLane::new(),
            smoothing_lane: SmoothingLane::new(),
            tasks: [SmoothingTask::new(); MAX_PLAYERS],
            rng,
            metrics: None,
        };
        if log::log_enabled!(log::Level::Debug) {
            let mut lanes = vec![describe(&agent.shift_lane)];
            lanes.extend(
                agent
                    .shake_lane
                    .triggers()
                    .map(|t| format!("{}/{}", t.lane_kind(), t.strategy_name())),
            );
            lanes.push(describe(&agent.smoothing_lane));
            log::debug!("ShifterAgent lanes: {}", lanes.join(", "));
        }
        agent
    }

    /// Attaches a metrics registry to the agent for observability.
    ///
    /// If registration fails the agent keeps running without telemetry.
    pub fn with_telemetry(mut self, registry: &MetricsRegistry) -> Self {
        match ShifterMetrics::register(registry) {
            Ok(metrics) => {
                self.metrics = Some(metrics);
                self.refresh_gauges();
            }
            Err(e) => log::warn!("Shifter telemetry disabled: {e}"),
        }
        self
    }

    /// Applies new intensity multipliers; affects subsequent updates only.
    pub fn apply_settings(&mut self, settings: &ShifterSettings) -> ShifterResult<()> {
        self.registry.apply_settings(settings).inspect_err(|e| {
            log::warn!("Rejected shifter settings: {e}");
        })
    }

    /// Registers a panel on `slot`.
    pub fn register_panel(
        &mut self,
        handle: Box<dyn PanelHandle>,
        slot: SlotIndex,
        name: impl Into<String>,
    ) -> ShifterResult<PanelId> {
        let result = self.registry.register(handle, slot, name);
        match &result {
            Ok(_) => self.refresh_gauges(),
            Err(e) => log::warn!("Panel registration failed: {e}"),
        }
        result
    }

    /// Binds `entity` to `slot` and starts the slot's smoothing task if it
    /// is not already running.
    pub fn track(&mut self, slot: SlotIndex, entity: EntityId) {
        self.registry.track(slot, entity);
        if self.tasks[slot.get()].start() {
            log::debug!("Started smoothing task for {slot}");
        }
    }

    /// Clears every slot and restarts every running smoothing task.
    pub fn flush(&mut self) {
        for slot in SlotIndex::all() {
            self.flush_slot(slot);
        }
    }

    /// Clears `slot` only and restarts its smoothing task if it was running.
    pub fn flush_slot(&mut self, slot: SlotIndex) {
        self.registry.flush_slot(slot);
        let task = &mut self.tasks[slot.get()];
        if task.is_running() {
            task.restart();
        }
        self.refresh_gauges();
    }

    /// Hides every panel of `entity`'s slot. No-op for untracked entities.
    pub fn hide(&mut self, entity: EntityId) -> bool {
        self.registry.hide(entity)
    }

    /// Shows every panel of `entity`'s slot. No-op for untracked entities.
    pub fn show(&mut self, entity: EntityId) -> bool {
        self.registry.show(entity)
    }

    /// Physics-tick entry point: evaluates shake triggers and the shift
    /// target for `slot`.
    ///
    /// Returns the shake source that won this update. Untracked slots are
    /// ignored and return `None`.
    pub fn update_amount(
        &mut self,
        slot: SlotIndex,
        sample: &VehicleSample,
        dt: f32,
    ) -> Option<ShakeSource> {
        if self.registry.tracked_entity(slot).is_none() {
            log::trace!("Ignoring update for untracked {slot}");
            return None;
        }

        let bases = self.registry.bases();
        let amount = &mut self.registry.slot_mut(slot).amount;
        let winner = self.shake_lane.update(amount, sample, &bases, dt);
        self.shift_lane.apply(amount, sample, &bases);

        if let (Some(source), Some(metrics)) = (winner, &self.metrics) {
            metrics.record_trigger(source);
        }
        self.refresh_gauges();
        winner
    }

    /// Render-tick entry point: resumes every running smoothing task once.
    ///
    /// Returns the number of panels written this frame.
    pub fn render_tick(&mut self, dt: f32) -> usize {
        let mut written = 0;
        for slot in SlotIndex::all() {
            let task = &mut self.tasks[slot.get()];
            let entry = self.registry.slot_mut(slot);
            let lane = &self.smoothing_lane;
            let rng = &mut self.rng;

            if let TaskPoll::Yielded(count) = task.poll(|| {
                let (amount, panels) = entry.split_mut();
                lane.advance(amount, panels, dt, rng)
            }) {
                written += count;
            }
        }

        self.refresh_gauges();
        log::trace!("Render tick wrote {written} panels");
        written
    }

    fn refresh_gauges(&self) {
        let Some(metrics) = &self.metrics else {
            return;
        };
        let active = SlotIndex::all()
            .filter(|&slot| self.registry.slot(slot).amount.is_shaking())
            .count();
        let _ = metrics.active_shakes.set(active as f64);
        let _ = metrics
            .registered_panels
            .set(self.registry.panel_count() as f64);
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ShifterRegistry {
        &self.registry
    }

    /// The motion state of `slot`.
    pub fn amount(&self, slot: SlotIndex) -> &AmountData {
        &self.registry.slot(slot).amount
    }

    /// The smoothing task of `slot`.
    pub fn task(&self, slot: SlotIndex) -> &SmoothingTask {
        &self.tasks[slot.get()]
    }
}

impl Default for ShifterAgent {
    fn default() -> Self {
        Self::new()
    }
}
