use std::fmt;
use std::io::{self, BufRead, Stdout, Write};

use dialoguer::Input;
use dialoguer::theme::Theme;

use crate::error::{RecipeError, Result};

/// Line-oriented dialogue with the user.
///
/// Every prompt shows one line of text and blocks for one line of input.
pub trait Console {
    /// Show `prompt` and wait for a line of input, without its terminator.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Output sink for everything that is not a prompt.
    fn out(&mut self) -> &mut dyn Write;

    /// Write one line of output.
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out(), "{}", line)?;
        Ok(())
    }

    /// Write an empty line.
    fn blank(&mut self) -> Result<()> {
        writeln!(self.out())?;
        Ok(())
    }
}

/// Show a prompt on its own line, exactly as given.
fn write_prompt<W: Write + ?Sized>(out: &mut W, prompt: &str) -> io::Result<()> {
    writeln!(out, "{}", prompt)?;
    out.flush()
}

/// Renders prompts as given, without the ": " separator of dialoguer's
/// default theme (our prompts already end in ':' or "(yes/no)").
struct VerbatimPromptTheme;

impl Theme for VerbatimPromptTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{} ", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{} {}", prompt, sel)
    }
}

/// Interactive console for a real terminal.
pub struct TerminalConsole {
    stdout: Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.stdout.flush()?;
        let answer: String = Input::with_theme(&VerbatimPromptTheme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

/// Plain console over any reader/writer pair. Used for piped input.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write_prompt(&mut self.output, prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RecipeError::EndOfInput);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
