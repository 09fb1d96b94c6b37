//! An example fitting a tree on a small bike demand dataset and scoring
//! held-out test cases.

// cargo run --example bikes

use arbor::constants::ACCURACY_TOLERANCE;
use arbor::metric::accuracy;
use arbor::{Dataset, DecisionTree};
use std::error::Error;

// Daily rental counts with normalized weather readings. The first column is
// a record number and is dropped while reading.
static BIKES_CSV: &str = "\
day,temp,humidity,windspeed,count
1,0.20,0.75,0.30,100
2,0.25,0.80,0.10,140
3,0.30,0.65,0.15,180
4,0.35,0.70,0.20,220
5,0.45,0.55,0.30,280
6,0.50,0.60,0.25,320
7,0.55,0.45,0.10,360
8,0.60,0.50,0.20,400
";

const IGNORE_COLUMNS: &[usize] = &[0];

fn read_rows(raw: &str, ignore: &[usize]) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(raw.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .filter(|(i, _)| !ignore.contains(i))
            .map(|(_, cell)| cell.to_string())
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn main() -> Result<(), Box<dyn Error>> {
    let data = Dataset::from_rows(read_rows(BIKES_CSV, IGNORE_COLUMNS)?)?;

    let features: Vec<String> = data.header()[..data.n_columns() - 1].to_vec();
    let target = data.header()[data.n_columns() - 1].clone();
    println!("Building tree with features {:?} and target {}\n", features, target);

    let mut tree = DecisionTree::default().set_max_depth(2);
    tree.insert_metadata("dataset".to_string(), "bikes".to_string());
    tree.fit(&data, &features, &target)?;
    println!("{}", tree);

    let test_cases = vec![
        (vec!["0.3", "0.65", "0.15"], 200.0),
        (vec!["0.5", "0.55", "0.25"], 300.0),
    ];

    let mut expected = Vec::new();
    let mut predicted = Vec::new();
    for (cells, expect) in &test_cases {
        let row: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        let prediction = tree.predict_row(&row, &features)?;
        let verdict = if (expect - prediction).abs() < ACCURACY_TOLERANCE {
            "Correct"
        } else {
            "Incorrect"
        };
        let described: Vec<String> = features
            .iter()
            .zip(&row)
            .map(|(f, v)| format!("{} = {}", f, v))
            .collect();
        println!("From: {{ {} }}", described.join(", "));
        println!("Expects = {}, Predicts = {:.2} ({})\n", expect, prediction, verdict);
        expected.push(*expect);
        predicted.push(prediction);
    }

    let score = accuracy(&expected, &predicted, ACCURACY_TOLERANCE);
    println!("Accuracy: {:.2}%", score * 100.0);

    println!("\nSplit counts: {:?}", tree.calculate_feature_importance(false));
    Ok(())
}
