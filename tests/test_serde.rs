#![cfg(feature = "serde")]

use knapga::engine::GaOptions;
use knapga::harness::RunStats;
use knapga::Knapsack;

#[test]
fn test_options_round_trip() {
    let options = GaOptions::builder()
        .population_size(30)
        .generations(100)
        .crossover_rate(0.9)
        .mutation_rate(0.02)
        .elitism_rate(0.1)
        .build()
        .unwrap();

    let json = serde_json::to_string(&options).unwrap();
    let restored: GaOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.population_size(), 30);
    assert_eq!(restored.generations(), 100);
    assert_eq!(restored.crossover_rate(), 0.9);
    assert_eq!(restored.mutation_rate(), 0.02);
    assert_eq!(restored.elitism_rate(), 0.1);
}

#[test]
fn test_knapsack_round_trip() {
    let k = Knapsack::new(35.0, 20.0, vec![6.0, 5.0, 9.0, 7.0], vec![9.0, 11.0, 13.0, 15.0])
        .unwrap();

    let json = serde_json::to_string(&k).unwrap();
    let restored: Knapsack = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.capacity, 20.0);
    assert_eq!(restored.weights, k.weights);
    assert_eq!(restored.values, k.values);
}

#[test]
fn test_run_stats_serializes() {
    let stats = RunStats {
        mean: 33.5,
        best: 35.0,
        worst: 31.0,
    };

    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("35"));
}
