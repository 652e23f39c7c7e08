use std::fmt;
use std::io::{self, Write};

use super::{Ingredient, Step};

/// Total calories above this value trigger the calorie alert.
pub const CALORIE_THRESHOLD: f64 = 300.0;

/// Message handed to the calorie alert.
pub const CALORIE_WARNING: &str = "Warning: The total calories of this recipe exceed 300.";

/// Observer notified when a displayed recipe goes over [`CALORIE_THRESHOLD`].
pub type CalorieAlert = Box<dyn Fn(&str)>;

/// A named recipe: ingredients and steps in entry order.
pub struct Recipe {
    pub name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
    on_calories_exceeded: Option<CalorieAlert>,
}

impl Recipe {
    /// Create an empty recipe with no alert registered.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            on_calories_exceeded: None,
        }
    }

    /// Register the calorie alert, replacing any previous one.
    pub fn with_calorie_alert<F>(mut self, alert: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_calories_exceeded = Some(Box::new(alert));
        self
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn add_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Sum of ingredient calories, computed on every call.
    pub fn total_calories(&self) -> f64 {
        self.ingredients
            .iter()
            .fold(0.0, |total, i| total + i.calories)
    }

    /// Strictly greater than the threshold; exactly 300 does not count.
    pub fn exceeds_calorie_threshold(&self) -> bool {
        self.total_calories() > CALORIE_THRESHOLD
    }

    /// Write the recipe details, then notify the calorie alert if the
    /// total is over the threshold.
    pub fn display<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", Details(self))?;

        if self.exceeds_calorie_threshold() {
            tracing::info!(
                recipe = %self.name,
                total_calories = self.total_calories(),
                "calorie threshold exceeded"
            );
            if let Some(alert) = &self.on_calories_exceeded {
                alert(CALORIE_WARNING);
            }
        }

        Ok(())
    }

    /// Scale every ingredient by `factor`.
    pub fn scale_all(&mut self, factor: f64) {
        for ingredient in &mut self.ingredients {
            ingredient.scale(factor);
        }
    }

    /// Reset every ingredient, reporting each one's quantities right after
    /// its own reset.
    pub fn reset_all<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        for ingredient in &mut self.ingredients {
            ingredient.reset();
            ingredient.display_quantities(out)?;
        }
        Ok(())
    }

    /// Drop all ingredients and steps. The name and alert stay.
    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.steps.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.steps.is_empty()
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("name", &self.name)
            .field("ingredients", &self.ingredients)
            .field("steps", &self.steps)
            .field("has_calorie_alert", &self.on_calories_exceeded.is_some())
            .finish()
    }
}

struct Details<'a>(&'a Recipe);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;

        writeln!(f)?;
        writeln!(f, "Recipe Details:")?;
        writeln!(f, "Recipe Name: {}", recipe.name)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "- {}", ingredient)?;
        }

        writeln!(f)?;
        writeln!(f, "Steps:")?;
        for (i, step) in recipe.steps.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }

        writeln!(f, "Total Calories: {}", recipe.total_calories())
    }
}
