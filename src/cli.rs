use clap::{Parser, Subcommand};

use crate::models::Season;

/// Seasonal diet planner: optimizes daily portions for nutrient coverage, taste, and digestibility.
#[derive(Parser, Debug)]
#[command(name = "diet-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "foods.json")]
    pub catalog: String,

    /// Path to the daily requirements JSON file.
    #[arg(short, long, default_value = "requirements.json")]
    pub requirements: String,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Optimize portions and assemble a daily plan.
    Plan {
        /// Season to plan for (prompted if omitted).
        #[arg(short, long, value_enum)]
        season: Option<Season>,

        /// Seed for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,

        /// Foods to leave out (repeatable, fuzzy-matched).
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Override the search iteration budget.
        #[arg(long)]
        iterations: Option<usize>,

        /// Write the plan as JSON to this path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List catalog foods, optionally only those in season.
    Foods {
        #[arg(short, long, value_enum)]
        season: Option<Season>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            season: None,
            seed: None,
            exclude: Vec::new(),
            iterations: None,
            output: None,
        }
    }
}
