pub mod console;
pub mod prompts;
pub mod render;

pub use console::{Console, LineConsole, TerminalConsole};
pub use prompts::{
    is_yes, parse_count, parse_decimal, prompt_count, prompt_decimal, prompt_text, prompt_yes_no,
};
pub use render::{display_recipe_names, display_recipe_or_not_found};
