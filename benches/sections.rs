use bladeform::airfoil::generate;
use bladeform::{BladeConfig, LoftPlan, PlacementParameters};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn contour_generation(c: &mut Criterion) {
    c.bench_function("generate 2412 x 200", |b| {
        b.iter(|| generate(black_box("2412"), black_box(200)))
    });
}

fn section_placement(c: &mut Criterion) {
    let profile = generate("2412", 200).unwrap();
    let placement = PlacementParameters::at_fraction(0.42, 2.0).unwrap();
    c.bench_function("place 400 points", |b| {
        b.iter(|| black_box(&placement).apply(black_box(profile.contour())))
    });
}

fn full_loft(c: &mut Criterion) {
    let config = BladeConfig {
        points_per_surface: 100,
        station_count: 500,
        ..Default::default()
    };
    c.bench_function("loft plan 500 stations", |b| {
        b.iter(|| LoftPlan::from_config(black_box(&config)).unwrap())
    });
}

criterion_group!(benches, contour_generation, section_placement, full_loft);
criterion_main!(benches);
