use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cutstock::entities::{BarJob, BarStock, LinearPart, PanelJob, PanelStock, Part};
use cutstock::packing::{Heuristic, pack_bars, pack_panels};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, panel_bench, bar_bench);

const N_PARTS: [u64; 3] = [50, 200, 800];

fn cabinet_parts(n_parts: u64, rng: &mut SmallRng) -> Vec<Part> {
    (0..n_parts)
        .map(|i| Part::new(i, rng.random_range(50..=900), rng.random_range(50..=600)))
        .collect()
}

fn panel_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_panels");
    for n_parts in N_PARTS {
        let parts = cabinet_parts(n_parts, &mut SmallRng::seed_from_u64(0));
        for heuristic in Heuristic::ALL {
            let job = PanelJob {
                stock: PanelStock::WOOD_PANEL,
                parts: parts.clone(),
                heuristic,
                allow_rotation: true,
                kerf: 4,
            };
            group.bench_with_input(BenchmarkId::new(heuristic.short_name(), n_parts), &job, |b, job| {
                b.iter(|| black_box(pack_panels(job)))
            });
        }
    }
    group.finish();
}

fn bar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_bars");
    for n_parts in N_PARTS {
        let mut rng = SmallRng::seed_from_u64(0);
        let job = BarJob {
            stock: BarStock::METAL_BAR,
            parts: (0..n_parts)
                .map(|i| LinearPart::new(i, rng.random_range(100..=3000)))
                .collect(),
            kerf: 3,
        };
        group.bench_with_input(BenchmarkId::from_parameter(n_parts), &job, |b, job| {
            b.iter(|| black_box(pack_bars(job)))
        });
    }
    group.finish();
}
