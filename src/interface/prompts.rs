use crate::error::{RecipeError, Result};
use crate::interface::Console;

const INVALID_COUNT: &str = "Please enter a whole number greater than zero.";
const INVALID_NUMBER: &str = "Please enter a valid number.";

/// Parse a count: a whole number greater than zero.
pub fn parse_count(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(RecipeError::InvalidInput(
            "count must be greater than zero".to_string(),
        )),
        Err(_) => Err(RecipeError::InvalidInput(format!("not a whole number: '{}'", input))),
    }
}

/// Parse a finite decimal number. Sign and magnitude are not checked.
pub fn parse_decimal(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecipeError::InvalidInput(format!("not a number: '{}'", input)))
}

/// Whether a yes/no answer means yes: exactly "yes" in any letter case.
pub fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

/// Prompt for free text.
pub fn prompt_text<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String> {
    console.ask(prompt)
}

/// Prompt for a count, asking again until the answer is valid.
pub fn prompt_count<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<usize> {
    prompt_parsed(console, prompt, parse_count, INVALID_COUNT)
}

/// Prompt for a decimal number, asking again until the answer is valid.
pub fn prompt_decimal<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<f64> {
    prompt_parsed(console, prompt, parse_decimal, INVALID_NUMBER)
}

/// Prompt for yes/no. The question gets a "(yes/no)" suffix.
pub fn prompt_yes_no<C: Console + ?Sized>(console: &mut C, question: &str) -> Result<bool> {
    let answer = console.ask(&format!("{} (yes/no)", question))?;
    Ok(is_yes(&answer))
}

fn prompt_parsed<C, T, F>(console: &mut C, prompt: &str, parse: F, retry_hint: &str) -> Result<T>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input = console.ask(prompt)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(RecipeError::InvalidInput(reason)) => {
                tracing::debug!(%reason, "rejected input");
                console.say(retry_hint)?;
            }
            Err(e) => return Err(e),
        }
    }
}
