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


use anyhow::Context;
use hudshift_agents::ShifterAgent;
use hudshift_core::math::{Vec2, Vec3};
use hudshift_core::{EntityId, PanelHandle, ShifterSettings, SlotIndex, VehicleSample};
use hudshift_telemetry::MetricsRegistry;
use std::sync::{Arc, Mutex};

const PHYSICS_DT: f32 = 1.0 / 50.0;
const FRAME_DT: f32 = 1.0 / 60.0;
const RUN_SECONDS: f32 = 4.0;

/// A panel living only in memory; the sandbox has no renderer.
#[derive(Clone)]
struct HeadlessPanel {
    position: Arc<Mutex<Vec2>>,
}

impl HeadlessPanel {
    fn at(x: f32, y: f32) -> Self {
        Self {
            position: Arc::new(Mutex::new(Vec2::new(x, y))),
        }
    }

    fn position(&self) -> Vec2 {
        self.position.lock().map(|p| *p).unwrap_or(Vec2::ZERO)
    }
}

impl PanelHandle for HeadlessPanel {
    fn anchored_position(&self) -> Vec2 {
        self.position()
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        if let Ok(mut p) = self.position.lock() {
            *p = position;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        log::trace!("Panel visibility -> {visible}");
    }
}

/// Scripted vehicle state for `player` at time `t`.
fn scripted_sample(player: usize, t: f32) -> VehicleSample {
    let cruise = VehicleSample::moving(Vec3::new((t * 2.0).sin() * 30.0, 0.0, 60.0));
    match (player, t) {
        // Player one drops off a ledge and lands hard.
        (0, t) if (1.0..1.5).contains(&t) => {
            VehicleSample::moving(Vec3::new(0.0, -25.0, 60.0))
        }
        (0, t) if (1.5..2.5).contains(&t) => VehicleSample::moving(Vec3::new(0.0, 0.0, 60.0)),
        // Player two clips a wall, then grinds along it.
        (1, t) if (2.0..2.05).contains(&t) => VehicleSample {
            touching_wall: true,
            ..VehicleSample::moving(Vec3::new(0.0, 0.0, 20.0))
        },
        (1, t) if (2.05..3.0).contains(&t) => VehicleSample {
            scraping_left: true,
            ..VehicleSample::moving(Vec3::new(-5.0, 0.0, 35.0))
        },
        _ => cruise,
    }
}

fn load_settings() -> anyhow::Result<ShifterSettings> {
    match std::env::var("HUDSHIFT_SETTINGS") {
        Ok(json) => {
            serde_json::from_str(&json).context("HUDSHIFT_SETTINGS is not valid settings JSON")
        }
        Err(_) => Ok(ShifterSettings::default()),
    }
}

fn main() -> anyhow::Result<()> {
    hudshift_telemetry::logging::init();

    let metrics = MetricsRegistry::new();
    let mut agent = ShifterAgent::with_seed(0x5eed).with_telemetry(&metrics);
    agent.apply_settings(&load_settings()?)?;

    let mut speedometers = Vec::new();
    for player in 0..2 {
        let slot = SlotIndex::try_from(player)?;
        for (name, x, y) in [
            ("speedometer", 80.0, 900.0),
            ("lap_timer", 960.0, 60.0),
            ("weapon", 1800.0, 900.0),
        ] {
            let panel = HeadlessPanel::at(x, y);
            if name == "speedometer" {
                speedometers.push(panel.clone());
            }
            agent.register_panel(Box::new(panel), slot, name)?;
        }
        agent.track(slot, EntityId(100 + player as u64));
        log::info!("{slot}: panels {:?}", agent.registry().panel_names(slot));
    }

    let mut physics_clock: f32 = 0.0;
    let mut t: f32 = 0.0;
    while t < RUN_SECONDS {
        while physics_clock <= t {
            for slot in SlotIndex::all() {
                let sample = scripted_sample(slot.get(), physics_clock);
                if let Some(source) = agent.update_amount(slot, &sample, PHYSICS_DT) {
                    log::debug!("{t:.2}s {slot}: shake from {source}");
                }
            }
            physics_clock += PHYSICS_DT;
        }

        agent.render_tick(FRAME_DT);
        t += FRAME_DT;

        if (t * 4.0).fract() < FRAME_DT * 4.0 {
            for (player, panel) in speedometers.iter().enumerate() {
                let p = panel.position();
                log::info!(
                    "{t:.2}s player {player}: speedometer at ({:.1}, {:.1})",
                    p.x,
                    p.y
                );
            }
        }
    }

    agent.hide(EntityId(100));
    agent.flush();

    for (id, value) in metrics.namespace_metrics("shifter") {
        log::info!("{id} = {value:?}");
    }
    Ok(())
}
