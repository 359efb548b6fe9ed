//! Demo binary: train a decision tree on a CSV file or on synthetic
//! data, then print the tree and the training time.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cartree::{Classifier, DecisionTree, Sample, DEFAULT_MAX_DEPTH};

const USAGE: &str = "usage: cartree <data.csv> [max_depth]
       cartree --synthetic <n_sample> [max_depth]";

const SYNTHETIC_FEATURES: usize = 4;

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<String>>();

    let result = match args.split_first() {
        Some((flag, rest)) if flag == "--synthetic" => run_synthetic(rest),
        Some(_) => run_csv(&args),
        None => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}: {message}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run_csv(args: &[String]) -> Result<(), String> {
    let path = &args[0];
    let max_depth = parse_depth(args.get(1))?;

    let sample = Sample::from_path(path, true).map_err(|e| e.to_string())?;
    train_and_report(&sample, max_depth);
    Ok(())
}

fn run_synthetic(args: &[String]) -> Result<(), String> {
    let n_sample = args
        .first()
        .ok_or_else(|| USAGE.to_string())?
        .parse::<usize>()
        .map_err(|_| "the sample count must be an integer".to_string())?;
    let max_depth = parse_depth(args.get(1))?;

    let mut rng = StdRng::from_entropy();
    let sample = Sample::synthetic(n_sample, SYNTHETIC_FEATURES, &mut rng);
    train_and_report(&sample, max_depth);
    Ok(())
}

fn parse_depth(arg: Option<&String>) -> Result<usize, String> {
    match arg {
        None => Ok(DEFAULT_MAX_DEPTH),
        Some(s) => s
            .parse::<usize>()
            .map_err(|_| "the depth must be an integer".to_string()),
    }
}

fn train_and_report(sample: &Sample, max_depth: usize) {
    let (n_sample, n_feature) = sample.shape();
    println!(
        "{} {n_sample} examples, {n_feature} features, max depth {max_depth}",
        "training:".green().bold(),
    );

    let start = Instant::now();
    let tree = DecisionTree::new().max_depth(max_depth).fit(sample);
    let elapsed = start.elapsed();

    print!("{tree}");
    println!("{} {elapsed:?}", "trained in".green().bold());

    if n_sample > 0 {
        let correct = (0..n_sample)
            .filter(|&row| tree.predict(sample, row) == sample.label(row))
            .count();
        println!("training accuracy: {:.3}", correct as f64 / n_sample as f64);
    }
}
