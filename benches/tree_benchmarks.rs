use arbor::{Dataset, DecisionTree};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_dataset(n_records: usize) -> Dataset {
    let mut rng = StdRng::seed_from_u64(0);
    let mut rows = vec![vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "y".to_string(),
    ]];
    for _ in 0..n_records {
        let a: f64 = rng.gen_range(0.0..100.0);
        let b: f64 = rng.gen_range(0.0..10.0);
        let c: f64 = rng.gen::<f64>();
        let y = 2.0 * a + 5.0 * b + rng.gen_range(-3.0..3.0);
        rows.push(vec![
            format!("{:.3}", a),
            format!("{:.3}", b),
            format!("{:.3}", c),
            format!("{:.3}", y),
        ]);
    }
    Dataset::from_rows(rows).unwrap()
}

pub fn tree_benchmarks(c: &mut Criterion) {
    let data = synthetic_dataset(2000);
    let features: Vec<String> = data.header()[..3].to_vec();

    c.bench_function("fit_tree", |b| {
        b.iter(|| {
            let mut tree = DecisionTree::default();
            tree.fit(black_box(&data), black_box(&features), black_box("y"))
                .unwrap();
        })
    });

    let mut tree = DecisionTree::default();
    tree.fit(&data, &features, "y").unwrap();
    let rows: Vec<Vec<String>> = data.records().iter().map(|r| r[..3].to_vec()).collect();

    c.bench_function("predict_single_threaded", |b| {
        b.iter(|| tree.predict(black_box(&rows), black_box(&features), false))
    });
    c.bench_function("predict_parallel", |b| {
        b.iter(|| tree.predict(black_box(&rows), black_box(&features), true))
    });
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
