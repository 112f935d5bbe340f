use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::FoodCatalog;
use crate::error::{DietError, Result};
use crate::models::{DailyDietPlan, FoodItem, Nutrient, RequirementMap};

/// Load the food catalog from a JSON array of food records.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;
    Ok(FoodCatalog::new(foods))
}

/// Parse a requirement object keyed by nutrient identifier.
pub fn parse_requirements(json: &str) -> Result<RequirementMap> {
    let raw: HashMap<String, f64> = serde_json::from_str(json)?;

    let mut requirements = RequirementMap::new();
    for (key, value) in raw {
        let nutrient: Nutrient = key.parse()?;
        if !value.is_finite() || value < 0.0 {
            return Err(DietError::InvalidInput(format!(
                "requirement for {} must be a non-negative number, got {}",
                nutrient, value
            )));
        }
        if requirements.insert(nutrient, value).is_some() {
            return Err(DietError::InvalidInput(format!(
                "requirement for {} given more than once",
                nutrient
            )));
        }
    }

    Ok(requirements)
}

/// Load daily requirements from a JSON file.
pub fn load_requirements<P: AsRef<Path>>(path: P) -> Result<RequirementMap> {
    let content = fs::read_to_string(path)?;
    parse_requirements(&content)
}

/// Save a solved plan as pretty-printed JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &DailyDietPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
