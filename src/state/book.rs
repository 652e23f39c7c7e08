use crate::error::{RecipeError, Result};
use crate::models::Recipe;

/// The recipes entered during one run, in entry order.
///
/// Names are not unique; lookups return the first match.
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe and return its position.
    pub fn add(&mut self, recipe: Recipe) -> usize {
        self.recipes.push(recipe);
        self.recipes.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Recipe> {
        self.recipes.get_mut(index)
    }

    /// First recipe whose name matches exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Like [`find`](Self::find), but a miss is an error.
    pub fn require(&self, name: &str) -> Result<&Recipe> {
        self.find(name)
            .ok_or_else(|| RecipeError::RecipeNotFound(name.to_string()))
    }

    /// Recipes ordered by name, ascending byte order (so "Z" before "a").
    /// Equal names keep entry order.
    pub fn sorted_by_name(&self) -> Vec<&Recipe> {
        let mut sorted: Vec<&Recipe> = self.recipes.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
