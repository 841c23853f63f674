// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stagegrid_layout::GridMetrics;

fn bench_grid_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagegrid_layout");
    group.sample_size(50);

    for &item_count in &[300_usize, 30_000_usize] {
        let metrics = GridMetrics::new(400.0, 8, 2.0);
        group.bench_function(format!("visible_range(items={item_count})"), |b| {
            b.iter(|| {
                // Sweep the scroll position across the whole content.
                let content = metrics.content_extent(item_count);
                let mut offset = 0.0;
                while offset < content {
                    black_box(metrics.visible_range(offset, 800.0, item_count));
                    offset += 750.0;
                }
            });
        });
    }

    group.bench_function("cell_frames(row_sweep)", |b| {
        let metrics = GridMetrics::new(400.0, 8, 2.0);
        b.iter(|| {
            for index in 0..300 {
                black_box(metrics.cell_frame(index));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_grid_metrics);
criterion_main!(benches);
