use dialoguer::{Confirm, Select};

use crate::catalog::FoodCatalog;
use crate::error::{DietError, Result};
use crate::models::Season;

/// Prompt for the season to plan for.
pub fn prompt_season() -> Result<Season> {
    let options: Vec<&str> = Season::ALL.iter().map(|s| s.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Which season are you planning for?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Season::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a user-typed food name against the catalog.
///
/// Exact (case-insensitive) matches resolve silently; otherwise the user picks
/// from fuzzy suggestions. Returns `None` if the user declines every suggestion.
pub fn resolve_food_name(catalog: &FoodCatalog, input: &str) -> Result<Option<String>> {
    let input = input.trim();

    if let Some(food) = catalog.get_food(input) {
        return Ok(Some(food.name.clone()));
    }

    let suggestions = catalog.suggest(input);

    match suggestions.as_slice() {
        [] => Err(DietError::FoodNotFound(input.to_string())),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| only.to_string()))
        }
        many => {
            let mut options: Vec<String> = many.iter().map(|s| s.to_string()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt(format!("Which food did you mean by '{}'?", input))
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < many.len()).then(|| options[selection].clone()))
        }
    }
}
