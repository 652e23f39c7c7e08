use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{RecipeError, Result};
use crate::interface::{
    Console, display_recipe_names, display_recipe_or_not_found, prompt_count, prompt_decimal,
    prompt_text, prompt_yes_no,
};
use crate::models::{Ingredient, Recipe, Step};
use crate::state::RecipeBook;

/// Where the read-eval loop is. Stages holding an index refer to the
/// recipe being worked on in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectRecipe,
    Scale(usize),
    Display(usize),
    MaybeReset(usize),
    MaybeClearOrContinue(usize),
    Browse,
    Done,
}

/// One console run: enter recipes until the user stops, then browse them.
pub struct Session<C: Console> {
    console: C,
    book: RecipeBook,
    pending_alerts: Rc<RefCell<Vec<String>>>,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            book: RecipeBook::new(),
            pending_alerts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    /// Tear down the session, handing back the console and the recipes.
    pub fn into_parts(self) -> (C, RecipeBook) {
        (self.console, self.book)
    }

    /// Drive the session until the user is done.
    pub fn run(&mut self) -> Result<()> {
        let mut stage = Stage::CollectRecipe;
        while stage != Stage::Done {
            stage = self.step(stage)?;
        }
        Ok(())
    }

    /// Execute one stage and return the next one.
    pub fn step(&mut self, stage: Stage) -> Result<Stage> {
        let next = match stage {
            Stage::CollectRecipe => Stage::Scale(self.collect_recipe()?),
            Stage::Scale(index) => {
                let factor = prompt_decimal(
                    &mut self.console,
                    "Enter the scaling factor (0.5 for half, 2 for double, 3 for triple):",
                )?;
                self.recipe_mut(index)?.scale_all(factor);
                tracing::debug!(index, factor, "scaled recipe");
                Stage::Display(index)
            }
            Stage::Display(index) => {
                self.display(index)?;
                Stage::MaybeReset(index)
            }
            Stage::MaybeReset(index) => {
                self.console.blank()?;
                if prompt_yes_no(
                    &mut self.console,
                    "Do you want to reset the quantities to the original values?",
                )? {
                    let recipe = self
                        .book
                        .get_mut(index)
                        .ok_or_else(|| missing(index))?;
                    recipe.reset_all(self.console.out())?;
                    tracing::debug!(index, "reset recipe");
                    self.console
                        .say("Quantities have been reset to their original values.")?;
                }
                Stage::MaybeClearOrContinue(index)
            }
            Stage::MaybeClearOrContinue(index) => {
                self.console.blank()?;
                if prompt_yes_no(
                    &mut self.console,
                    "Do you want to clear all the data to enter a new recipe?",
                )? {
                    self.recipe_mut(index)?.clear();
                    tracing::debug!(index, "cleared recipe");
                    self.console
                        .say("All data has been cleared. You can now enter a new recipe.")?;
                    Stage::CollectRecipe
                } else {
                    self.console.blank()?;
                    if prompt_yes_no(&mut self.console, "Do you want to enter another recipe?")? {
                        Stage::CollectRecipe
                    } else {
                        Stage::Browse
                    }
                }
            }
            Stage::Browse => {
                self.browse()?;
                Stage::Done
            }
            Stage::Done => Stage::Done,
        };
        Ok(next)
    }

    /// Prompt for a full recipe, add it to the book and return its index.
    fn collect_recipe(&mut self) -> Result<usize> {
        let console = &mut self.console;

        let name = prompt_text(console, "What recipe do you want to make?")?;
        console.say(&format!("Let's start creating the recipe for {}!", name))?;

        let alerts = Rc::clone(&self.pending_alerts);
        let mut recipe = Recipe::new(name)
            .with_calorie_alert(move |message| alerts.borrow_mut().push(message.to_string()));

        let ingredient_count = prompt_count(console, "Enter the number of ingredients:")?;
        for i in 1..=ingredient_count {
            console.say(&format!("Enter details for ingredient {}:", i))?;
            let name = prompt_text(console, "Name:")?;
            let quantity = prompt_decimal(console, "Quantity:")?;
            let unit = prompt_text(console, "Unit of Measurement:")?;
            let calories = prompt_decimal(console, "Number of Calories:")?;
            let food_group = prompt_text(console, "Food Group:")?;

            recipe.add_ingredient(Ingredient::new(name, quantity, unit, calories, food_group));
        }

        let step_count = prompt_count(console, "Enter the number of steps:")?;
        for i in 1..=step_count {
            let description = prompt_text(console, &format!("Enter description for step {}:", i))?;
            recipe.add_step(Step::new(description));
        }

        tracing::info!(
            recipe = %recipe.name,
            ingredients = ingredient_count,
            steps = step_count,
            "recipe added"
        );
        let index = self.book.add(recipe);
        self.console.say("Recipe created successfully!")?;
        Ok(index)
    }

    fn display(&mut self, index: usize) -> Result<()> {
        let recipe = self.book.get(index).ok_or_else(|| missing(index))?;
        recipe.display(self.console.out())?;
        self.flush_alerts()
    }

    fn browse(&mut self) -> Result<()> {
        display_recipe_names(&mut self.console, &self.book)?;

        self.console.blank()?;
        let name = prompt_text(
            &mut self.console,
            "Enter the name of the recipe you want to display:",
        )?;
        display_recipe_or_not_found(&mut self.console, &self.book, &name)?;
        self.flush_alerts()
    }

    /// Print the calorie warnings raised since the last flush.
    fn flush_alerts(&mut self) -> Result<()> {
        let alerts: Vec<String> = self.pending_alerts.borrow_mut().drain(..).collect();
        for alert in alerts {
            self.console.say(&alert)?;
        }
        Ok(())
    }

    fn recipe_mut(&mut self, index: usize) -> Result<&mut Recipe> {
        self.book.get_mut(index).ok_or_else(|| missing(index))
    }
}

fn missing(index: usize) -> RecipeError {
    RecipeError::RecipeNotFound(format!("#{}", index))
}
