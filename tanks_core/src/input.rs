//! Blocking numeric prompts on the console

use std::{
    io::{BufRead, Write},
    ops::RangeInclusive,
};

use tracing::warn;

use crate::error::GameError;

/// Line based console: prompts go to `output`, answers come from `input`
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows `prompt` and reads numbers until one is acceptable
    ///
    /// Anything that is not a finite number is answered with
    /// `Please enter a number`, and numbers outside of `valid_range` (inclusive)
    /// with a message naming the bounds. The only ways out are a valid number
    /// or the console closing.
    pub fn number(
        &mut self,
        prompt: &str,
        valid_range: Option<RangeInclusive<f64>>,
    ) -> Result<f64, GameError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }

            let num = match line.trim().parse::<f64>() {
                Ok(num) if num.is_finite() => num,
                _ => {
                    warn!(input = line.trim(), "rejected non numeric input");
                    self.say("Please enter a number")?;
                    continue;
                }
            };

            match &valid_range {
                Some(range) if !range.contains(&num) => {
                    warn!(num, "rejected out of range input");
                    self.say(&format!(
                        "Please enter a value in the range [{}, {}]",
                        range.start(),
                        range.end()
                    ))?;
                }
                _ => return Ok(num),
            }
        }
    }

    /// Prints a full line of text
    pub fn say(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
