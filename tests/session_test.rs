use std::io::Cursor;

use recipe_book_rs::interface::LineConsole;
use recipe_book_rs::{RecipeError, Session};

fn run_script(script: &str) -> (String, recipe_book_rs::RecipeBook) {
    let console = LineConsole::new(Cursor::new(script.to_string()), Vec::new());
    let mut session = Session::new(console);
    session.run().unwrap();

    let (console, book) = session.into_parts();
    (String::from_utf8(console.into_output()).unwrap(), book)
}

/// Answers for one recipe up to and including the scaling factor.
fn recipe_answers(
    name: &str,
    ingredients: &[(&str, &str, &str, &str, &str)],
    steps: &[&str],
    factor: &str,
) -> String {
    let mut lines = vec![name.to_string(), ingredients.len().to_string()];
    for (n, q, u, c, g) in ingredients {
        lines.extend([n, q, u, c, g].map(|s| s.to_string()));
    }
    lines.push(steps.len().to_string());
    lines.extend(steps.iter().map(|s| s.to_string()));
    lines.push(factor.to_string());
    lines.join("\n") + "\n"
}

#[test]
fn test_full_transcript_single_recipe() {
    let mut script = recipe_answers(
        "Pancakes",
        &[("Flour", "2", "cups", "200", "Grain")],
        &["Mix", "Fry"],
        "2",
    );
    script.push_str("yes\nno\nno\nPancakes\n");

    let (transcript, book) = run_script(&script);

    let expected = "\
What recipe do you want to make?
Let's start creating the recipe for Pancakes!
Enter the number of ingredients:
Enter details for ingredient 1:
Name:
Quantity:
Unit of Measurement:
Number of Calories:
Food Group:
Enter the number of steps:
Enter description for step 1:
Enter description for step 2:
Recipe created successfully!
Enter the scaling factor (0.5 for half, 2 for double, 3 for triple):

Recipe Details:
Recipe Name: Pancakes
Ingredients:
- Flour: 4 cups, 200 calories, Food Group: Grain

Steps:
1. Mix
2. Fry
Total Calories: 200

Do you want to reset the quantities to the original values? (yes/no)
Current Quantity of Flour: 2 cups
Original Quantity of Flour: 2 cups
Quantities have been reset to their original values.

Do you want to clear all the data to enter a new recipe? (yes/no)

Do you want to enter another recipe? (yes/no)

All Recipes:
Pancakes

Enter the name of the recipe you want to display:

Recipe Details:
Recipe Name: Pancakes
Ingredients:
- Flour: 2 cups, 200 calories, Food Group: Grain

Steps:
1. Mix
2. Fry
Total Calories: 200
";
    assert_eq!(transcript, expected);
    assert_eq!(book.len(), 1);
}

#[test]
fn test_calorie_warning_follows_display() {
    let mut script = recipe_answers(
        "Cake",
        &[
            ("Butter", "1", "cup", "150", "Dairy"),
            ("Sugar", "1", "cup", "200", "Sweets"),
        ],
        &["Bake"],
        "1",
    );
    script.push_str("no\nno\nno\nCake\n");

    let (transcript, _) = run_script(&script);

    let warning = "Total Calories: 350\nWarning: The total calories of this recipe exceed 300.\n";
    assert_eq!(transcript.matches(warning).count(), 2);
}

#[test]
fn test_exactly_300_calories_has_no_warning() {
    let mut script = recipe_answers(
        "Salad",
        &[
            ("Lettuce", "1", "head", "100", "Vegetable"),
            ("Dressing", "2", "tbsp", "200", "Fats"),
        ],
        &["Toss"],
        "3",
    );
    script.push_str("no\nno\nno\nSalad\n");

    let (transcript, _) = run_script(&script);
    assert!(transcript.contains("Total Calories: 300\n"));
    assert!(!transcript.contains("Warning"));
}

#[test]
fn test_multiple_recipes_listed_alphabetically() {
    let mut script = String::new();
    for name in ["Banana Bread", "Apple Pie", "Carrot Cake"] {
        script.push_str(&recipe_answers(
            name,
            &[("Flour", "1", "cup", "100", "Grain")],
            &["Bake"],
            "1",
        ));
        script.push_str("no\nno\nyes\n");
    }
    // the last "yes" leads into one more cycle, which the user ends
    script.push_str(&recipe_answers(
        "Date Loaf",
        &[("Dates", "1", "cup", "100", "Fruit")],
        &["Bake"],
        "1",
    ));
    script.push_str("no\nno\nno\nKiwi Tart\n");

    let (transcript, book) = run_script(&script);

    assert!(transcript.contains(
        "\nAll Recipes:\nApple Pie\nBanana Bread\nCarrot Cake\nDate Loaf\n"
    ));
    assert!(transcript.ends_with(
        "Enter the name of the recipe you want to display:\nRecipe not found.\n"
    ));
    assert_eq!(book.len(), 4);
}

#[test]
fn test_cleared_recipe_stays_in_book() {
    let mut script = recipe_answers(
        "Stew",
        &[("Beef", "500", "g", "1250", "Protein")],
        &["Simmer"],
        "0.5",
    );
    // clear -> straight into a new cycle, no "another recipe?" question
    script.push_str("no\nyes\n");
    script.push_str(&recipe_answers(
        "Broth",
        &[("Water", "1", "l", "0", "Other")],
        &["Boil"],
        "1",
    ));
    script.push_str("no\nno\nno\nStew\n");

    let (transcript, book) = run_script(&script);

    assert!(transcript.contains("All data has been cleared. You can now enter a new recipe.\n"));
    assert_eq!(transcript.matches("Do you want to enter another recipe?").count(), 1);

    let stew = book.find("Stew").unwrap();
    assert!(stew.ingredients().is_empty());
    assert!(stew.steps().is_empty());

    // the cleared recipe displays with nothing in it
    assert!(transcript.ends_with(
        "Recipe Name: Stew\nIngredients:\n\nSteps:\nTotal Calories: 0\n"
    ));
}

#[test]
fn test_malformed_numbers_are_reprompted() {
    let script = "Toast\nseveral\n0\n1\nBread\ntwo\n2\nslices\nlots\n160\nGrain\n-1\n1\nToast it\ndouble\n2\nno\nno\nno\nToast\n";

    let (transcript, book) = run_script(script);

    assert_eq!(
        transcript
            .matches("Please enter a whole number greater than zero.")
            .count(),
        3
    );
    assert_eq!(transcript.matches("Please enter a valid number.").count(), 3);
    assert!(transcript.contains("- Bread: 4 slices, 160 calories, Food Group: Grain"));
    assert_eq!(book.find("Toast").unwrap().ingredients()[0].original_quantity(), 2.0);
}

#[test]
fn test_yes_answers_are_case_insensitive() {
    let mut script = recipe_answers(
        "Toast",
        &[("Bread", "2", "slices", "160", "Grain")],
        &["Toast it"],
        "3",
    );
    script.push_str("YES\nno\nNope\nToast\n");

    let (transcript, _) = run_script(&script);
    assert!(transcript.contains("Quantities have been reset to their original values."));
    assert!(transcript.contains("- Bread: 2 slices, 160 calories"));
}

#[test]
fn test_padded_yes_counts_as_no() {
    let mut script = recipe_answers(
        "Toast",
        &[("Bread", "2", "slices", "160", "Grain")],
        &["Toast it"],
        "3",
    );
    script.push_str(" yes\nyes \nno\nToast\n");

    let (transcript, book) = run_script(&script);
    assert!(!transcript.contains("Quantities have been reset"));
    assert!(!transcript.contains("All data has been cleared"));
    assert!(transcript.contains("- Bread: 6 slices, 160 calories"));
    assert_eq!(book.find("Toast").unwrap().ingredients().len(), 1);
}

#[test]
fn test_input_ending_early_is_an_error() {
    let console = LineConsole::new(Cursor::new("Toast\n1\n".to_string()), Vec::new());
    let mut session = Session::new(console);
    assert!(matches!(session.run(), Err(RecipeError::EndOfInput)));
}
