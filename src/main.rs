use std::io::IsTerminal;
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use seasonal_diet_rs::catalog::{FoodCatalog, load_catalog, load_requirements, save_plan};
use seasonal_diet_rs::cli::{Cli, Command};
use seasonal_diet_rs::error::{DietError, Result};
use seasonal_diet_rs::interface::{
    display_food_list, display_plan, prompt_season, prompt_yes_no, resolve_food_name,
};
use seasonal_diet_rs::logging::init_tracing;
use seasonal_diet_rs::models::Season;
use seasonal_diet_rs::optimizer::{SearchConfig, solve_with_config};

/// Default path offered when saving a plan interactively.
const DEFAULT_PLAN_PATH: &str = "plan.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            season,
            seed,
            exclude,
            iterations,
            output,
        } => cmd_plan(
            &cli.catalog,
            &cli.requirements,
            PlanArgs {
                season,
                seed,
                exclude,
                iterations,
                output,
            },
        ),
        Command::Foods { season } => cmd_foods(&cli.catalog, season),
    }
}

struct PlanArgs {
    season: Option<Season>,
    seed: Option<u64>,
    exclude: Vec<String>,
    iterations: Option<usize>,
    output: Option<String>,
}

fn open_catalog(catalog_path: &str) -> Result<Option<FoodCatalog>> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", catalog_path);
        eprintln!("Pass --catalog or place foods.json in the current directory.");
        return Ok(None);
    }

    let catalog = load_catalog(path)?;
    println!("Loaded {} foods", catalog.len());
    Ok(Some(catalog))
}

/// Resolve exclusions against the catalog and drop them.
fn apply_exclusions(catalog: FoodCatalog, names: &[String]) -> Result<FoodCatalog> {
    if names.is_empty() {
        return Ok(catalog);
    }

    let mut resolved = Vec::new();
    for name in names {
        match resolve_food_name(&catalog, name) {
            Ok(Some(food)) => resolved.push(food),
            Ok(None) => println!("Keeping all foods matching '{}'", name),
            Err(DietError::FoodNotFound(n)) => println!("No matching food found for '{}'", n),
            Err(e) => return Err(e),
        }
    }

    if !resolved.is_empty() {
        println!("Excluding: {}", resolved.join(", "));
    }
    Ok(catalog.without(&resolved))
}

/// Solve and display a daily plan.
fn cmd_plan(catalog_path: &str, requirements_path: &str, args: PlanArgs) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };
    let requirements = load_requirements(requirements_path)?;
    println!("Loaded {} nutrient targets", requirements.len());

    let season = match args.season {
        Some(s) => s,
        None => prompt_season()?,
    };

    let catalog = apply_exclusions(catalog, &args.exclude)?;

    let in_season = catalog.in_season(season).len();
    if in_season == 0 {
        return Err(DietError::NoFoodsInSeason(season.to_string()));
    }
    println!("{} foods available in {}", in_season, season);

    let mut config = SearchConfig::default();
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Optimizing portions ({})...", config.display());
    let plan = solve_with_config(&catalog, season, &requirements, &config, &mut rng);

    display_plan(&plan);

    if plan.is_empty() {
        return Ok(());
    }

    match args.output {
        Some(path) => {
            save_plan(&path, &plan)?;
            println!("Plan saved to {}.", path);
        }
        None if std::io::stdin().is_terminal() => {
            let save = prompt_yes_no(&format!("Save plan to {}?", DEFAULT_PLAN_PATH), false)?;
            if save {
                save_plan(DEFAULT_PLAN_PATH, &plan)?;
                println!("Plan saved to {}.", DEFAULT_PLAN_PATH);
            }
        }
        None => {}
    }

    Ok(())
}

/// List foods in the catalog.
fn cmd_foods(catalog_path: &str, season: Option<Season>) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    match season {
        Some(s) => display_food_list(&catalog.in_season(s), &format!("Foods in {}", s)),
        None => display_food_list(catalog.foods(), "All foods"),
    }

    Ok(())
}
