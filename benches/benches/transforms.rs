// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_image_geometry::{BoundingBox, Coord, PixelSize};
use understory_regions::RegionOverlay;
use understory_scaled_image::ScaledImage;
use understory_thumbnail::{
    Model, ModelUpdate, apply_model_update, image_space_to_widget_space, image_to_widget,
};

fn points(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            Point::new((t * 7.0) % 800.0, (t * 11.0) % 600.0)
        })
        .collect()
}

fn bench_screen_to_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaled_image/screen_to_image");

    let mut image = ScaledImage::new("bench.png");
    image.on_load(PixelSize::new(4_000, 3_000));
    image.set_scale(3.0).unwrap();
    image.set_top_level_scale(0.2).unwrap();
    image.set_offset(Vec2::new(-120.0, 45.0));

    for len in [256usize, 4_096] {
        group.throughput(Throughput::Elements(len as u64));
        let pts = points(len);
        group.bench_with_input(BenchmarkId::new("cached_affine", len), &pts, |b, pts| {
            b.iter(|| {
                for &p in pts {
                    black_box(image.screen_to_image(p));
                }
            });
        });
    }

    group.finish();
}

fn bench_model_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail/transforms");
    let model = Model::with_view(
        PixelSize::new(4_000, 3_000),
        PixelSize::new(800, 600),
        Coord::new(1_200.0, 900.0),
        2.5,
    );

    for len in [256usize, 4_096] {
        group.throughput(Throughput::Elements(len as u64));
        let coords: Vec<Coord> = points(len).into_iter().map(Coord::from).collect();

        group.bench_with_input(BenchmarkId::new("image_to_widget", len), &coords, |b, cs| {
            b.iter(|| {
                for &p in cs {
                    black_box(image_to_widget(&model, p));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("image_space_to_widget_space", len),
            &coords,
            |b, cs| {
                b.iter(|| {
                    for &p in cs {
                        black_box(image_space_to_widget_space(&model, p));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions/overlay");
    let overlay = RegionOverlay::new("bench.png");

    for regions in [16usize, 256] {
        let model = (0..regions)
            .map(|i| {
                let t = i as f64;
                let bounds = BoundingBox::new(
                    Coord::new(t * 10.0, t * 5.0),
                    Coord::new(t * 10.0 + 60.0, t * 5.0 + 40.0),
                )
                .unwrap();
                ModelUpdate::AddSubregion(bounds)
            })
            .fold(
                Model::with_view(
                    PixelSize::new(4_000, 3_000),
                    PixelSize::new(800, 600),
                    Coord::new(2_000.0, 1_500.0),
                    1.0,
                ),
                |m, u| apply_model_update(m, &u),
            );

        let probes: Vec<Coord> = points(256).into_iter().map(Coord::from).collect();
        group.bench_with_input(BenchmarkId::new("hit_test", regions), &model, |b, model| {
            b.iter(|| {
                for &p in &probes {
                    black_box(overlay.hit_test(model, p));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("views", regions), &model, |b, model| {
            b.iter(|| black_box(overlay.views(model)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_screen_to_image, bench_model_transforms, bench_overlay);
criterion_main!(benches);
