mod ingredient;
mod recipe;
mod step;

pub use ingredient::Ingredient;
pub use recipe::{CALORIE_THRESHOLD, CALORIE_WARNING, CalorieAlert, Recipe};
pub use step::Step;
