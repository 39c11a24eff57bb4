use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use hudshift_core::math::Vec2;
use hudshift_core::{PanelHandle, MAX_PANEL_COUNT};
use hudshift_data::{AmountData, Panel};
use hudshift_lanes::shake_lane::MAX_SHAKE_DURATION;
use hudshift_lanes::SmoothingLane;
use rand::rngs::SmallRng;
use rand::SeedableRng;

struct NullPanel(Vec2);

impl PanelHandle for NullPanel {
    fn anchored_position(&self) -> Vec2 {
        self.0
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        self.0 = position;
    }

    fn set_visible(&mut self, _visible: bool) {}
}

fn full_slot() -> Vec<Panel> {
    (0..MAX_PANEL_COUNT)
        .map(|i| Panel::new(Box::new(NullPanel(Vec2::new(i as f32 * 10.0, 0.0))), "bench"))
        .collect()
}

fn bench_smoothing(c: &mut Criterion) {
    let lane = SmoothingLane::new();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut group = c.benchmark_group("Smoothing Pass");

    group.bench_function("Full slot, shifting", |b| {
        let mut panels = full_slot();
        let mut amount = AmountData::default();
        let mut t = 0.0f32;
        b.iter(|| {
            // Keep the target moving so no panel settles.
            t += 0.1;
            amount.shift_target = Vec2::new(t.sin() * 40.0, t.cos() * 20.0);
            black_box(lane.advance(&mut amount, &mut panels, 1.0 / 60.0, &mut rng));
        });
    });

    group.bench_function("Full slot, shaking", |b| {
        let mut panels = full_slot();
        let mut amount = AmountData {
            shake_amount: 30.0,
            shake_duration: MAX_SHAKE_DURATION,
            ..Default::default()
        };
        b.iter(|| {
            black_box(lane.advance(&mut amount, &mut panels, 1.0 / 60.0, &mut rng));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_smoothing);
criterion_main!(benches);
