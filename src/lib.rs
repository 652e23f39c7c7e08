pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;
pub mod state;

pub use error::{RecipeError, Result};
pub use models::{Ingredient, Recipe, Step};
pub use session::Session;
pub use state::RecipeBook;
