mod persistence;
mod view;

pub use persistence::{load_catalog, load_requirements, parse_requirements, save_plan};
pub use view::FoodCatalog;
