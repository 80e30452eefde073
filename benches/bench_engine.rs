use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knapga::{
    engine::{GaOptions, GeneticEngine},
    knapsack,
    rng::RandomNumberGenerator,
};

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");

    for &dataset in [3usize, 1, 15].iter() {
        let problem = knapsack::benchmark(dataset).unwrap();
        let n_genes = problem.n_items();
        let options = GaOptions::builder()
            .population_size(20)
            .generations(100)
            .build()
            .unwrap();
        let engine = GeneticEngine::new(options, problem, n_genes).unwrap();

        group.bench_function(&format!("dataset_{}_{}_genes", dataset, n_genes), |b| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(42);
                black_box(engine.run(&mut rng).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
