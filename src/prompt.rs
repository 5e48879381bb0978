//! Interactive length prompt
//!
//! Reads lines until one parses as an integer inside the allowed range.
//! Each attempt moves the prompt through a small state machine, so the
//! retry loop can be driven from any reader and writer.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed before a valid length was entered")]
    InputClosed,
}

/// Outcome of the most recent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    AwaitingInput,
    InvalidFormat,
    BelowMinimum,
    AboveMaximum,
    Accepted(usize),
}

#[derive(Debug, Clone)]
pub struct LengthPrompt {
    min: usize,
    max: Option<usize>,
    state: PromptState,
}

impl LengthPrompt {
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            state: PromptState::AwaitingInput,
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn prompt_text(&self) -> String {
        match self.max {
            Some(max) => format!(
                "How many characters would you like your password to be (min {}, max {}): ",
                self.min, max
            ),
            None => format!(
                "How many characters would you like your password to be (min {}): ",
                self.min
            ),
        }
    }

    /// Classifies one line of input and moves to the resulting state.
    ///
    /// Once a value has been accepted the prompt ignores further input.
    pub fn feed(&mut self, raw: &str) -> PromptState {
        if let PromptState::Accepted(_) = self.state {
            return self.state;
        }

        self.state = match raw.trim().parse::<i64>() {
            Ok(value) => self.classify(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => PromptState::AboveMaximum,
                IntErrorKind::NegOverflow => PromptState::BelowMinimum,
                _ => PromptState::InvalidFormat,
            },
        };

        #[cfg(feature = "tracing")]
        {
            if !matches!(self.state, PromptState::Accepted(_)) {
                tracing::debug!("Length input rejected: {:?}", self.state);
            }
        }

        self.state
    }

    fn classify(&self, value: i64) -> PromptState {
        let Ok(value) = usize::try_from(value) else {
            return PromptState::BelowMinimum;
        };
        if value < self.min {
            return PromptState::BelowMinimum;
        }
        match self.max {
            Some(max) if value > max => PromptState::AboveMaximum,
            _ => PromptState::Accepted(value),
        }
    }

    /// Retry message for the current state, if it is a rejection.
    pub fn message(&self) -> Option<String> {
        match self.state {
            PromptState::AwaitingInput | PromptState::Accepted(_) => None,
            PromptState::InvalidFormat => Some("Please enter a valid integer.".to_string()),
            PromptState::BelowMinimum => Some(format!("Value must be at least {}.", self.min)),
            PromptState::AboveMaximum => Some(match self.max {
                Some(max) => format!("Value must be at most {}.", max),
                None => "Value is too large.".to_string(),
            }),
        }
    }

    /// Prompts on `output` and reads `input` until a length is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InputClosed`] if input ends first, or
    /// [`PromptError::Io`] if reading or writing fails.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<usize, PromptError>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = String::new();
        loop {
            if let PromptState::Accepted(value) = self.state {
                return Ok(value);
            }

            write!(output, "{}", self.prompt_text())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed);
            }

            self.feed(&line);
            if let Some(message) = self.message() {
                writeln!(output, "{}", message)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt() -> LengthPrompt {
        LengthPrompt::new(8, Some(64))
    }

    #[test]
    fn test_initial_state() {
        let p = prompt();
        assert_eq!(p.state(), PromptState::AwaitingInput);
        assert_eq!(p.message(), None);
    }

    #[test]
    fn test_feed_invalid_format() {
        let mut p = prompt();
        assert_eq!(p.feed("twelve"), PromptState::InvalidFormat);
        assert_eq!(p.feed("12.5"), PromptState::InvalidFormat);
        assert_eq!(p.feed(""), PromptState::InvalidFormat);
        assert_eq!(p.message().as_deref(), Some("Please enter a valid integer."));
    }

    #[test]
    fn test_feed_below_minimum() {
        let mut p = prompt();
        assert_eq!(p.feed("7"), PromptState::BelowMinimum);
        assert_eq!(p.feed("-3"), PromptState::BelowMinimum);
        assert_eq!(p.feed("-99999999999999999999999"), PromptState::BelowMinimum);
        assert_eq!(p.message().as_deref(), Some("Value must be at least 8."));
    }

    #[test]
    fn test_feed_above_maximum() {
        let mut p = prompt();
        assert_eq!(p.feed("65"), PromptState::AboveMaximum);
        assert_eq!(p.feed("99999999999999999999999"), PromptState::AboveMaximum);
        assert_eq!(p.message().as_deref(), Some("Value must be at most 64."));
    }

    #[test]
    fn test_feed_accepted_bounds() {
        assert_eq!(prompt().feed("8"), PromptState::Accepted(8));
        assert_eq!(prompt().feed(" 64\n"), PromptState::Accepted(64));
        assert_eq!(prompt().feed("+20"), PromptState::Accepted(20));
    }

    #[test]
    fn test_accepted_is_terminal() {
        let mut p = prompt();
        assert_eq!(p.feed("12"), PromptState::Accepted(12));
        assert_eq!(p.feed("nonsense"), PromptState::Accepted(12));
        assert_eq!(p.message(), None);
    }

    #[test]
    fn test_unbounded_prompt() {
        let mut p = LengthPrompt::new(8, None);
        assert_eq!(p.feed("100000"), PromptState::Accepted(100000));
        assert!(!p.prompt_text().contains("max"));
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(
            prompt().prompt_text(),
            "How many characters would you like your password to be (min 8, max 64): "
        );
    }

    #[test]
    fn test_run_retries_until_accepted() {
        let input = Cursor::new("abc\n3\n500\n16\n");
        let mut output = Vec::new();

        let length = prompt().run(input, &mut output).unwrap();
        assert_eq!(length, 16);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Please enter a valid integer."));
        assert!(text.contains("Value must be at least 8."));
        assert!(text.contains("Value must be at most 64."));
        assert_eq!(text.matches("How many characters").count(), 4);
    }

    #[test]
    fn test_run_accepts_first_line() {
        let mut output = Vec::new();
        let length = prompt().run(Cursor::new("10\n"), &mut output).unwrap();
        assert_eq!(length, 10);
        assert!(!String::from_utf8(output).unwrap().contains("Value must"));
    }

    #[test]
    fn test_run_input_closed() {
        let result = prompt().run(Cursor::new("x\n"), Vec::new());
        assert!(matches!(result, Err(PromptError::InputClosed)));
    }

    #[test]
    fn test_run_last_line_without_newline() {
        let length = prompt().run(Cursor::new("nope\n9"), Vec::new()).unwrap();
        assert_eq!(length, 9);
    }
}
