//! Interactive prompting.
//!
//! The [`Prompter`] trait decouples entry creation from the terminal. Tests
//! use scripted prompters that replay predetermined answers.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Question/answer channel with the user.
pub trait Prompter {
    /// Ask for one line of text. `Ok(None)` means input is exhausted.
    fn ask(&mut self, message: &str) -> Result<Option<String>>;

    /// Ask a yes/no question; anything but an explicit yes declines.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Show an informational line.
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Prompter over a line reader and a writer.
///
/// Prompts go to the writer (stderr for [`TerminalPrompter::stdio`]) so that
/// stdout only carries command output.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("read prompt answer")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}: ").context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        self.read_line()
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        loop {
            write!(self.output, "{message} [y/N]: ").context("write prompt")?;
            self.output.flush().context("flush prompt")?;
            let Some(answer) = self.read_line()? else {
                writeln!(self.output).context("write prompt")?;
                return Ok(false);
            };
            match parse_confirmation(&answer) {
                Some(confirmed) => return Ok(confirmed),
                None => writeln!(self.output, "Error: invalid input").context("write prompt")?,
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("write message")
    }
}

/// Interpret a yes/no answer; empty input means no.
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "" | "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> TerminalPrompter<&[u8], Vec<u8>> {
        TerminalPrompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn ask_returns_line_without_terminator() {
        let mut p = prompter("new change\r\n1\n");
        assert_eq!(p.ask(">> Title").unwrap().as_deref(), Some("new change"));
        assert_eq!(p.ask(">> Category").unwrap().as_deref(), Some("1"));
        assert_eq!(p.ask(">> More").unwrap(), None);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, ">> Title: >> Category: >> More: ");
    }

    #[test]
    fn confirm_accepts_yes_and_defaults_to_no() {
        assert!(prompter("y").confirm("Create?").unwrap());
        assert!(prompter("YES\n").confirm("Create?").unwrap());
        assert!(!prompter("n\n").confirm("Create?").unwrap());
        assert!(!prompter("\n").confirm("Create?").unwrap());
        assert!(!prompter("").confirm("Create?").unwrap());
    }

    #[test]
    fn confirm_reasks_on_garbage() {
        let mut p = prompter("maybe\ny\n");
        assert!(p.confirm("Create?").unwrap());
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Create? [y/N]: ").count(), 2);
        assert!(out.contains("Error: invalid input"));
    }
}
