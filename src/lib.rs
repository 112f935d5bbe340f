pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod tuner;

pub use catalog::FoodCatalog;
pub use error::{DietError, Result};
pub use models::{DailyDietPlan, FoodItem, Meal, NutrientVector, RequirementMap, Season};
pub use optimizer::{PortionAssignment, solve};
