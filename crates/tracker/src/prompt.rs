//! User prompting — the contract the session drives, and its console
//! implementation.

use std::io::{self, BufRead, Write};

use crate::TrackerError;

/// The prompting contract.
///
/// The session is generic over this trait so handlers can be driven by a
/// scripted prompt in tests (see [`crate::mock::MockPrompt`]).
pub trait Prompt {
    /// Ask for a free-text line.  The answer is passed through as typed,
    /// empty input included.
    fn input(&mut self, message: &str) -> Result<String, TrackerError>;

    /// Ask for a number, re-asking until the input parses.
    fn number(&mut self, message: &str) -> Result<f64, TrackerError>;

    /// Ask the user to pick one of `options`; returns the zero-based index of
    /// the chosen entry, re-asking until the answer is in range.
    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize, TrackerError>;
}

/// `Prompt` implementation over stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        ConsolePrompt
    }

    fn read_line(&self) -> Result<String, TrackerError> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(TrackerError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl Prompt for ConsolePrompt {
    fn input(&mut self, message: &str) -> Result<String, TrackerError> {
        println!("{message}");
        print!("> ");
        io::stdout().flush()?;
        self.read_line()
    }

    fn number(&mut self, message: &str) -> Result<f64, TrackerError> {
        println!("{message}");
        loop {
            print!("> ");
            io::stdout().flush()?;
            match self.read_line()?.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize, TrackerError> {
        println!("{message}");
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        loop {
            print!("> ");
            io::stdout().flush()?;
            match self.read_line()?.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => println!("Please enter a number between 1 and {}.", options.len()),
            }
        }
    }
}
