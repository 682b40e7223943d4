// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_image_geometry::{BoundingBox, Coord, PixelSize};
use understory_thumbnail::{
    Model, ModelUpdate, Thumbnail, ThumbnailConfig, UpdateQueue, apply_model_update,
};

fn loaded_model() -> Model {
    Model::with_view(
        PixelSize::new(4_000, 3_000),
        PixelSize::new(800, 600),
        Coord::new(2_000.0, 1_500.0),
        1.0,
    )
}

fn wheel_stream(len: usize) -> Vec<ModelUpdate> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            ModelUpdate::ZoomAbout {
                delta: if i % 3 == 0 { -0.2 } else { 0.15 },
                pivot: Coord::new((t * 37.0) % 4_000.0, (t * 53.0) % 3_000.0),
            }
        })
        .collect()
}

fn region_stream(len: usize) -> Vec<ModelUpdate> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            let bounds =
                BoundingBox::centered_at(Coord::new(t * 3.0, t * 2.0), kurbo::Size::new(40.0, 30.0))
                    .unwrap();
            ModelUpdate::AddSubregion(bounds)
        })
        .collect()
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail/reduce");

    for len in [64usize, 512, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        let wheel = wheel_stream(len);
        group.bench_with_input(BenchmarkId::new("zoom_about", len), &wheel, |b, updates| {
            b.iter(|| black_box(updates.iter().fold(loaded_model(), apply_model_update)));
        });

        // Region insertion goes through the ordered map and key allocation.
        let regions = region_stream(len);
        group.bench_with_input(BenchmarkId::new("add_subregion", len), &regions, |b, updates| {
            b.iter(|| black_box(updates.iter().fold(loaded_model(), apply_model_update)));
        });
    }

    group.finish();
}

fn bench_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail/flush");

    for len in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(len as u64));

        // Worst case for the merge: every pointer update arrives before the
        // resize it must follow.
        let updates: Vec<ModelUpdate> = wheel_stream(len)
            .into_iter()
            .chain([ModelUpdate::SetGeometry(PixelSize::new(1_024, 768))])
            .collect();

        group.bench_with_input(BenchmarkId::new("queue_drain", len), &updates, |b, updates| {
            b.iter_batched(
                || {
                    let mut queue = UpdateQueue::new();
                    for update in updates {
                        queue.push_update(*update);
                    }
                    queue
                },
                |mut queue| {
                    let model = queue.drain().fold(loaded_model(), |m, u| apply_model_update(m, &u));
                    black_box(model);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("thumbnail_flush", len),
            &updates,
            |b, updates| {
                b.iter_batched(
                    || {
                        let mut thumbnail =
                            Thumbnail::new(ThumbnailConfig::new("bench.png")).unwrap();
                        thumbnail.on_image_loaded(PixelSize::new(4_000, 3_000));
                        thumbnail.flush();
                        thumbnail.push_all(updates.iter().copied());
                        thumbnail
                    },
                    |mut thumbnail| {
                        black_box(thumbnail.flush());
                        black_box(thumbnail);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_flush);
criterion_main!(benches);
