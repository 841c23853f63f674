// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use stagegrid_pinch::{BridgeProgress, PinchConfig, PinchZoom};
use stagegrid_stages::{DeviceClass, Orientation, ladder_for};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform-ish scalar in roughly [0.5, 1.5], the band a real pinch
    /// recognizer reports in.
    fn next_scalar(&mut self) -> f64 {
        0.5 + f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

fn fresh_session() -> PinchZoom {
    let ladder = ladder_for(DeviceClass::Phone, Orientation::Portrait);
    PinchZoom::new(ladder, 400.0, PinchConfig::default())
}

fn gesture_storm(events: u32, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..events).map(|_| rng.next_scalar()).collect()
}

fn bench_pinch_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagegrid_pinch");
    group.sample_size(50);

    for &events in &[64_u32, 1_024_u32] {
        let storm = gesture_storm(events, 0x57A6_E000_0000_0001);
        group.bench_function(format!("gesture_storm(events={events})"), |b| {
            b.iter_batched(
                fresh_session,
                |mut session| {
                    for &raw in &storm {
                        black_box(session.on_gesture_change(raw));
                    }
                    session.on_gesture_end();
                    while session.tick(0.05) == BridgeProgress::Settling {}
                    black_box(session);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("commit_and_settle", |b| {
        b.iter_batched(
            fresh_session,
            |mut session| {
                session.on_gesture_change(1.0);
                session.on_gesture_change(0.9);
                session.on_gesture_end();
                while session.tick(0.05) == BridgeProgress::Settling {}
                black_box(session);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pinch_session);
criterion_main!(benches);
