use crate::error::Result;
use crate::interface::Console;
use crate::state::RecipeBook;

/// Print every recipe name, sorted ascending.
pub fn display_recipe_names<C: Console + ?Sized>(
    console: &mut C,
    book: &RecipeBook,
) -> Result<()> {
    console.blank()?;
    console.say("All Recipes:")?;
    for recipe in book.sorted_by_name() {
        console.say(&recipe.name)?;
    }
    Ok(())
}

/// Display the first recipe named exactly `name`, or say it was not found.
///
/// Returns whether a recipe was displayed.
pub fn display_recipe_or_not_found<C: Console + ?Sized>(
    console: &mut C,
    book: &RecipeBook,
    name: &str,
) -> Result<bool> {
    match book.require(name) {
        Ok(recipe) => {
            recipe.display(console.out())?;
            Ok(true)
        }
        Err(e) => {
            tracing::info!(error = %e, "lookup miss");
            console.say("Recipe not found.")?;
            Ok(false)
        }
    }
}
