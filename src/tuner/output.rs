use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::tuner::evaluation::EvaluationResult;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all results to a CSV file.
pub fn write_csv(results: &[EvaluationResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "iterations",
        "initial_max_grams",
        "perturb_count",
        "perturb_step",
        "mean_best_score",
        "min_best_score",
        "max_best_score",
        "mean_entries",
    ])?;

    for (i, result) in results.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            result.config.iterations.to_string(),
            format!("{:.1}", result.config.initial_max_grams),
            result.config.perturb_count.to_string(),
            format!("{:.1}", result.config.perturb_step),
            format!("{:.2}", result.mean_best_score),
            format!("{:.2}", result.min_best_score),
            format!("{:.2}", result.max_best_score),
            format!("{:.1}", result.mean_entries),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the best result to a JSON file with rounded floats.
pub fn write_best_json(best: &EvaluationResult, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "config": {
            "iterations": best.config.iterations,
            "initial_max_grams": truncate(best.config.initial_max_grams, 1),
            "perturb_count": best.config.perturb_count,
            "perturb_step": truncate(best.config.perturb_step, 1),
        },
        "metrics": {
            "mean_best_score": truncate(best.mean_best_score, 2),
            "min_best_score": truncate(best.min_best_score, 2),
            "max_best_score": truncate(best.max_best_score, 2),
            "mean_entries": truncate(best.mean_entries, 1),
        },
        "per_seed": best.per_seed.iter().map(|r| {
            serde_json::json!({
                "seed": r.seed,
                "best_score": truncate(r.best_score, 2),
                "improvements": r.improvements,
                "assembled_entries": r.assembled_entries,
                "assembled_grams": truncate(r.assembled_grams, 1),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print top-k results to stdout.
pub fn print_topk(results: &[EvaluationResult], k: usize) {
    println!("\n=== Top {} Results (by mean score) ===\n", k.min(results.len()));

    for (i, result) in results.iter().take(k).enumerate() {
        println!(
            "#{}: mean={:.2} range={:.2} entries={:.1}",
            i + 1,
            result.mean_best_score,
            result.score_range(),
            result.mean_entries
        );
        println!("    {}", result.config.display());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::SearchConfig;
    use crate::tuner::evaluation::SeedResult;
    use tempfile::NamedTempFile;

    fn sample_result() -> EvaluationResult {
        EvaluationResult {
            config: SearchConfig::default(),
            mean_best_score: 123.456,
            min_best_score: 100.0,
            max_best_score: 150.0,
            mean_entries: 9.5,
            per_seed: vec![SeedResult {
                seed: 1,
                best_score: 123.456,
                improvements: 12,
                assembled_entries: 9,
                assembled_grams: 842.25,
            }],
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(1.23456, 2), 1.23);
        assert_eq!(truncate(9.99, 1), 10.0);
    }

    #[test]
    fn test_write_csv_rows() {
        let file = NamedTempFile::new().unwrap();
        write_csv(&[sample_result(), sample_result()], file.path()).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "2");
        assert_eq!(&rows[0][5], "123.46");
    }

    #[test]
    fn test_write_best_json() {
        let file = NamedTempFile::new().unwrap();
        write_best_json(&sample_result(), file.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value["config"]["iterations"], 1000);
        assert_eq!(value["metrics"]["mean_best_score"], 123.46);
        assert_eq!(value["per_seed"][0]["improvements"], 12);
    }
}
