use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curved_trapezoid::{
    build_fill_path, compute_geometry, CurvedTrapezoid, FillStrategy, ShapePreset,
    TrapezoidLayout,
};
use std::hint::black_box;

fn bench_build_fill_path(c: &mut Criterion) {
    let geometry =
        compute_geometry(700.0, 500.0, 30.0, 500.0, -200.0).expect("geometry must be valid");
    let mut group = c.benchmark_group("build_fill_path");

    for strategy in [
        FillStrategy::CurvedBoundary,
        FillStrategy::StraightOnly,
        FillStrategy::PolygonApproximation { segments: 0 },
        FillStrategy::PolygonApproximation { segments: 64 },
    ] {
        let label = match strategy {
            FillStrategy::PolygonApproximation { segments } => {
                format!("{}_{}", strategy.name(), segments)
            }
            _ => strategy.name().to_string(),
        };
        group.bench_with_input(BenchmarkId::new("strategy", label), &strategy, |b, s| {
            b.iter(|| {
                let path = build_fill_path(black_box(&geometry), 0.5, black_box(200.0), *s)
                    .expect("fill path must build");
                black_box(path.total_vertices())
            })
        });
    }

    group.finish();
}

fn bench_shape_and_flatten(c: &mut Criterion) {
    let layout = TrapezoidLayout::default();

    c.bench_function("shape_build_presets", |b| {
        b.iter(|| {
            let mut vertices = 0usize;
            for preset in ShapePreset::ALL {
                let shape = CurvedTrapezoid::build(
                    black_box(&preset.parameters()),
                    &layout,
                    FillStrategy::CurvedBoundary,
                )
                .expect("preset must build");
                vertices += shape.fill().total_vertices();
            }
            black_box(vertices)
        })
    });

    let shape = CurvedTrapezoid::build(
        &ShapePreset::Core.parameters(),
        &layout,
        FillStrategy::CurvedBoundary,
    )
    .expect("core preset must build");
    c.bench_function("fill_path_is_simple_32", |b| {
        b.iter(|| black_box(shape.fill().is_simple(black_box(32))))
    });
}

criterion_group!(fill_path_benches, bench_build_fill_path, bench_shape_and_flatten);
criterion_main!(fill_path_benches);
