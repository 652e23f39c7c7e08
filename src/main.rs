use std::io::{self, IsTerminal};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use recipe_book_rs::cli::Cli;
use recipe_book_rs::error::{RecipeError, Result};
use recipe_book_rs::interface::{Console, LineConsole, TerminalConsole};
use recipe_book_rs::session::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if cli.plain || !io::stdin().is_terminal() {
        let console = LineConsole::new(io::stdin().lock(), io::stdout());
        run_session(console)
    } else {
        run_session(TerminalConsole::new())
    }
}

/// Log to stderr so records never mix with the dialogue on stdout.
fn init_logging(cli: &Cli) -> Result<()> {
    let directive: Directive = cli
        .log_directive()
        .parse()
        .map_err(|e| RecipeError::InvalidInput(format!("log directive: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run_session<C: Console>(console: C) -> Result<()> {
    let mut session = Session::new(console);
    session.run()?;
    tracing::debug!(recipes = session.book().len(), "session finished");
    Ok(())
}
