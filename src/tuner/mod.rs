pub mod evaluation;
pub mod knobs;
pub mod output;
pub mod search;

pub use evaluation::{EvaluationResult, SeedResult, evaluate_config, evaluate_seed};
pub use knobs::KnobRanges;
pub use output::{print_topk, write_best_json, write_csv};
pub use search::{TunerConfig, TunerResults, run_tuner};
