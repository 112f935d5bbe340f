use std::path::PathBuf;

use clap::Parser;

use seasonal_diet_rs::catalog::{load_catalog, load_requirements};
use seasonal_diet_rs::logging::init_tracing;
use seasonal_diet_rs::models::Season;
use seasonal_diet_rs::tuner::{
    KnobRanges, TunerConfig, print_topk, run_tuner, write_best_json, write_csv,
};

#[derive(Parser, Debug)]
#[command(name = "tuner")]
#[command(about = "Search-parameter tuner for the diet optimizer")]
struct Args {
    /// Number of random configurations to try
    #[arg(long, default_value = "50")]
    iters: usize,

    /// Random seed for sampling configurations
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Search seeds each configuration is evaluated on (comma-separated)
    #[arg(long, default_value = "1,2,3,4,5")]
    eval_seeds: String,

    /// Season whose foods are used
    #[arg(long, value_enum, default_value = "summer")]
    season: Season,

    /// Path to the food catalog JSON
    #[arg(long, default_value = "foods.json")]
    foods: PathBuf,

    /// Path to the requirements JSON
    #[arg(long, default_value = "requirements.json")]
    requirements: PathBuf,

    /// Output CSV file for all results
    #[arg(long, default_value = "tuner_results.csv")]
    csv: PathBuf,

    /// Output JSON file for best result
    #[arg(long, default_value = "tuner_best.json")]
    json: PathBuf,

    /// Number of top results to display
    #[arg(long, default_value = "10")]
    topk: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_seeds(s: &str) -> Vec<u64> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let catalog = match load_catalog(&args.foods) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading foods file {:?}: {}", args.foods, e);
            std::process::exit(1);
        }
    };

    let requirements = match load_requirements(&args.requirements) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading requirements file {:?}: {}", args.requirements, e);
            std::process::exit(1);
        }
    };

    let foods = catalog.in_season(args.season);
    println!(
        "Loaded {} foods ({} in {}) from {:?}",
        catalog.len(),
        foods.len(),
        args.season,
        args.foods
    );
    if foods.is_empty() {
        eprintln!("Error: no foods available in {}", args.season);
        std::process::exit(1);
    }

    let eval_seeds = parse_seeds(&args.eval_seeds);
    if eval_seeds.is_empty() {
        eprintln!("Error: no valid evaluation seeds provided");
        std::process::exit(1);
    }
    println!("Evaluation seeds: {:?}", eval_seeds);

    let config = TunerConfig {
        iterations: args.iters,
        seed: args.seed,
        eval_seeds,
        ranges: KnobRanges::default(),
    };

    let tuner_results = run_tuner(&config, &foods, &requirements);

    print_topk(&tuner_results.results, args.topk);

    let baseline = &tuner_results.baseline;
    let Some(best) = tuner_results.results.first() else {
        println!("No configurations evaluated.");
        return;
    };

    let improvement = baseline.mean_best_score - best.mean_best_score;
    println!("=== Comparison: Best vs Baseline ===");
    println!(
        "Baseline: mean={:.2} range={:.2}",
        baseline.mean_best_score,
        baseline.score_range()
    );
    println!(
        "Best:     mean={:.2} range={:.2}",
        best.mean_best_score,
        best.score_range()
    );
    println!("Change:   {:+.2} lower", improvement);
    println!();

    if let Err(e) = write_csv(&tuner_results.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all results to {:?}", args.csv);
    }

    if let Err(e) = write_best_json(best, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote best result to {:?}", args.json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seeds_skips_garbage() {
        assert_eq!(parse_seeds("1, 2,x,40"), vec![1, 2, 40]);
        assert!(parse_seeds("").is_empty());
    }
}
