//! Length section - awards a tier bonus based on password length.

use super::SectionScore;
use crate::generator::MIN_LENGTH;

const MEDIUM_LENGTH: usize = 12;
const LONG_LENGTH: usize = 16;

/// Scores the password length in tiers.
///
/// # Returns
/// - `3` for 16 characters or more
/// - `2` for 12 to 15 characters
/// - `1` for 8 to 11 characters
/// - `0` for anything shorter
pub fn length_section(password: &str) -> SectionScore {
    let len = password.chars().count();
    if len >= LONG_LENGTH {
        3
    } else if len >= MEDIUM_LENGTH {
        2
    } else if len >= MIN_LENGTH {
        1
    } else {
        0
    }
}
