use std::io::{BufRead, Write};
use std::str::FromStr;

use sqlx::types::BigDecimal;

use crate::error::AppError;
use crate::models::FieldEdit;

/// Typed on its own at an update prompt, empties an optional field.
pub const CLEAR_TOKEN: &str = "-";

/// Line-oriented prompts over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt: ` and returns the trimmed reply, or `None` when blank.
    /// End of input reads as blank.
    pub fn read_string(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let trimmed = line.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<Option<i32>, AppError> {
        self.read_string(prompt)?.map(|input| parse_int(&input)).transpose()
    }

    pub fn read_decimal(&mut self, prompt: &str) -> Result<Option<BigDecimal>, AppError> {
        self.read_string(prompt)?
            .map(|input| parse_decimal(&input))
            .transpose()
    }

    pub fn read_string_edit(&mut self, prompt: &str) -> Result<FieldEdit<String>, AppError> {
        self.read_edit(prompt, |input| Ok(input.to_string()))
    }

    pub fn read_int_edit(&mut self, prompt: &str) -> Result<FieldEdit<i32>, AppError> {
        self.read_edit(prompt, parse_int)
    }

    pub fn read_decimal_edit(&mut self, prompt: &str) -> Result<FieldEdit<BigDecimal>, AppError> {
        self.read_edit(prompt, parse_decimal)
    }

    fn read_edit<T>(
        &mut self,
        prompt: &str,
        parse: impl FnOnce(&str) -> Result<T, AppError>,
    ) -> Result<FieldEdit<T>, AppError> {
        match self.read_string(prompt)? {
            None => Ok(FieldEdit::Keep),
            Some(input) if input == CLEAR_TOKEN => Ok(FieldEdit::Clear),
            Some(input) => parse(&input).map(FieldEdit::Set),
        }
    }
}

fn parse_int(input: &str) -> Result<i32, AppError> {
    input
        .parse()
        .map_err(|_| AppError::validation(format!("{input} is not a valid number")))
}

/// Parses hours at a fixed scale of 2. Values that would need rounding are
/// rejected rather than silently changed.
///
/// Exponent notation is refused: `with_scale` expands the exponent into
/// digits, so `1e999999999` would never finish.
fn parse_decimal(input: &str) -> Result<BigDecimal, AppError> {
    let invalid = || AppError::validation(format!("{input} is not a valid decimal number"));

    if input.contains(['e', 'E']) {
        return Err(invalid());
    }

    let value = BigDecimal::from_str(input).map_err(|_| invalid())?;
    let scaled = value.with_scale(2);
    if scaled != value {
        return Err(AppError::validation(format!(
            "{input} has more than 2 decimal places"
        )));
    }

    Ok(scaled)
}
