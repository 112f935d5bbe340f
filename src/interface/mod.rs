pub mod prompts;
pub mod render;

pub use prompts::{prompt_season, prompt_yes_no, resolve_food_name};
pub use render::{display_food_list, display_plan};
