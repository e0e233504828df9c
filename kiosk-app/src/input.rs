use std::collections::VecDeque;
use std::io::{BufRead, Write};
use crate::error::{KioskError, KioskResult};

/// Outcome of a single bounded read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Valid(i64),
    /// The entry was rejected and a message was printed; ask again
    Retry,
}

/// Token reader over a line-oriented console.
///
/// Numbers may be separated by any whitespace, so one line can answer
/// several prompts in a row.
pub struct ConsoleInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Read one integer and check it against `min..=max`.
    ///
    /// Bad entries never surface as errors: they print a message to `out` and
    /// yield `Selection::Retry`. Errors are reserved for I/O failures and end
    /// of input.
    pub fn read_choice<W: Write>(&mut self, out: &mut W, min: i64, max: i64) -> KioskResult<Selection> {
        let token = self.next_token()?.ok_or(KioskError::InputClosed)?;

        match token.parse::<i64>() {
            Ok(choice) if (min..=max).contains(&choice) => Ok(Selection::Valid(choice)),
            Ok(choice) => {
                tracing::debug!(choice, min, max, "Choice out of range");
                writeln!(out, "Invalid choice. Please enter a number from {} to {}.", min, max)?;
                Ok(Selection::Retry)
            }
            Err(_) => {
                tracing::debug!(%token, "Non-numeric input");
                writeln!(out, "Invalid input. Please enter a number.")?;
                // Drop whatever else was typed on that line
                self.pending.clear();
                Ok(Selection::Retry)
            }
        }
    }

    fn next_token(&mut self) -> KioskResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}
