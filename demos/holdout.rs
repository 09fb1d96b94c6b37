//! An example scoring a tree on records held out of fitting.

// cargo run --example holdout

use arbor::metric::{accuracy, root_mean_squared_error};
use arbor::sample::{RandomSampler, Sampler};
use arbor::{Dataset, DecisionTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(42);

    // Simulated sensor readings with a target driven mostly by x1.
    let mut rows = vec![vec![
        "x1".to_string(),
        "x2".to_string(),
        "x3".to_string(),
        "y".to_string(),
    ]];
    for _ in 0..200 {
        let x1: f64 = rng.gen_range(0.0..10.0);
        let x2: f64 = rng.gen_range(0.0..5.0);
        let x3: f64 = rng.gen::<f64>();
        let noise: f64 = rng.gen_range(-1.0..1.0);
        let y = 8.0 * x1 - 3.0 * x2 + noise;
        rows.push(vec![
            format!("{:.4}", x1),
            format!("{:.4}", x2),
            format!("{:.4}", x3),
            format!("{:.4}", y),
        ]);
    }
    let data = Dataset::from_rows(rows)?;

    let features: Vec<String> = data.header()[..3].to_vec();
    let index: Vec<usize> = (0..data.n_records()).collect();
    let (train_index, eval_index) = RandomSampler::new(0.8).sample(&mut rng, &index);
    let train = data.select_records(&train_index);
    println!(
        "Fitting on {} records, evaluating on {} held-out records.",
        train.n_records(),
        eval_index.len()
    );

    let mut tree = DecisionTree::default().set_max_depth(6);
    tree.fit(&train, &features, "y")?;
    println!("Fitted {} leaves, depth {}.", tree.n_leaves(), tree.depth());

    let eval_rows: Vec<Vec<String>> = eval_index
        .iter()
        .map(|&i| data.records()[i][..3].to_vec())
        .collect();
    let expected = eval_index
        .iter()
        .map(|&i| data.numeric(i, 3))
        .collect::<Result<Vec<f64>, _>>()?;
    let predicted = tree.predict(&eval_rows, &features, true)?;

    println!("Holdout RMSE: {:.3}", root_mean_squared_error(&expected, &predicted));
    println!(
        "Holdout accuracy within 2.0: {:.2}%",
        accuracy(&expected, &predicted, 2.0) * 100.0
    );
    Ok(())
}
