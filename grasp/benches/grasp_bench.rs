use std::hint::black_box;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use grasp::config::GraspConfig;
use grasp::io;
use grasp::opt::grasp::GraspOptimizer;
use polycut::entities::Instance;
use polycut::feasibility::find_anchor;
use polycut::io::import;
use polycut::nfp::{NfpStrategy, compute_nfp};
use rand::SeedableRng;
use rand::prelude::SmallRng;

criterion_main!(benches);
criterion_group!(benches, nfp_bench, anchor_bench, solve_bench);

const MIXED_PATH: &str = "assets/mixed.json";
const N_ITERATIONS: [usize; 3] = [1, 4, 16];

fn load_instance() -> Instance {
    let ext_instance = io::read_instance(Path::new(MIXED_PATH)).unwrap();
    import::import(&ext_instance).unwrap()
}

fn nfp_bench(c: &mut Criterion) {
    let instance = load_instance();
    let mut group = c.benchmark_group("nfp_bench");
    //one pair per distinct piece template
    for fixed in instance.pieces.iter().step_by(4) {
        let moving = &instance.pieces[instance.pieces.len() - 1];
        group.bench_function(
            BenchmarkId::from_parameter(format!("{}-{}", fixed.name(), moving.name())),
            |b| b.iter(|| compute_nfp(black_box(fixed), black_box(moving))),
        );
    }
    group.finish();
}

fn anchor_bench(c: &mut Criterion) {
    let instance = load_instance();
    let config = GraspConfig {
        n_iterations: 1,
        ..GraspConfig::default()
    };
    let solution = GraspOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(0))
        .unwrap()
        .solve();

    //query an anchor for the last piece against the densest frame
    let placed = solution
        .placements_in(0)
        .map(|p| &p.piece)
        .collect::<Vec<_>>();
    let candidate = &instance.pieces[instance.pieces.len() - 1];

    c.bench_function("anchor_bench", |b| {
        b.iter(|| {
            find_anchor(
                black_box(&instance.frames[0]),
                black_box(&placed),
                black_box(candidate),
                NfpStrategy::VertexTranslation,
            )
        })
    });
}

fn solve_bench(c: &mut Criterion) {
    let instance = load_instance();
    let mut group = c.benchmark_group("solve_bench");
    group.sample_size(10);
    for n_iterations in N_ITERATIONS {
        let config = GraspConfig {
            n_iterations,
            ..GraspConfig::default()
        };
        group.bench_function(BenchmarkId::from_parameter(n_iterations), |b| {
            b.iter(|| {
                let mut optimizer =
                    GraspOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(0))
                        .unwrap();
                optimizer.solve()
            })
        });
    }
    group.finish();
}
