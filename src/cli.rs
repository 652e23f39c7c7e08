use clap::{ArgAction, Parser};

/// RecipeBook: enter recipes, scale them, and look them up by name.
#[derive(Parser, Debug)]
#[command(name = "recipe_book")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read answers line by line instead of using interactive prompts.
    #[arg(long)]
    pub plain: bool,

    /// Increase log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log directive for this crate, from the verbosity flag.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "recipe_book_rs=warn",
            1 => "recipe_book_rs=info",
            _ => "recipe_book_rs=debug",
        }
    }
}
