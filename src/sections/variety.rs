//! Character variety section - checks for lowercase, uppercase, digits, symbols.

use super::SectionScore;
use crate::charset::is_symbol;

/// Counts how many character categories the password contains.
///
/// Each of lowercase, uppercase, ASCII digit and fixed symbol adds one
/// point, so the result is between `0` and `4`.
pub fn character_variety_section(password: &str) -> SectionScore {
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(is_symbol);

    [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count() as SectionScore
}
