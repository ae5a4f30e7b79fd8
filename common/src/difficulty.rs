//! Cumulative difficulty values

/// A cumulative difficulty
///
/// 128 bits comfortably covers the cumulative work of any chain we checkpoint
pub type Difficulty = u128;

/// Error returned when a difficulty string is not a valid unsigned 128-bit integer
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseDifficultyError {
    /// The string was empty
    #[error("Difficulty string is empty")]
    Empty,

    /// The string contained something other than decimal digits
    #[error("Difficulty string contains a non-digit character {0:?}")]
    InvalidCharacter(char),

    /// The value does not fit in 128 bits
    #[error("Difficulty does not fit in 128 bits")]
    Overflow,
}

/// Parses a decimal difficulty string
///
/// Only ASCII digits are accepted. Signs, whitespace and separators are rejected
pub fn parse_difficulty(text: &str) -> Result<Difficulty, ParseDifficultyError> {
    if text.is_empty() {
        return Err(ParseDifficultyError::Empty);
    }
    text.chars().try_fold(0 as Difficulty, |acc, c| {
        let digit = c.to_digit(10).ok_or(ParseDifficultyError::InvalidCharacter(c))?;
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(Difficulty::from(digit)))
            .ok_or(ParseDifficultyError::Overflow)
    })
}
