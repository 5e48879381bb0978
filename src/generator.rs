//! Password generator - draws characters from a secure random source.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use thiserror::Error;

use crate::charset::{ALL_CHARS, CharacterClass};
use crate::types::Password;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Password must be at least {min} characters.")]
    InvalidArgument { min: usize },
}

/// Generates a password of `length` characters using the operating system's
/// random source.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] if `length` is below
/// [`MIN_LENGTH`].
pub fn generate(length: usize) -> Result<Password, GenerateError> {
    generate_with(&mut OsRng, length)
}

/// Generates a password of `length` characters using `rng`.
///
/// The result holds at least one letter, one digit and one symbol. The
/// remaining characters are drawn from the full character set, then the
/// whole sequence is shuffled so the guaranteed characters land anywhere.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] if `length` is below
/// [`MIN_LENGTH`]. No randomness is consumed in that case.
pub fn generate_with<R>(rng: &mut R, length: usize) -> Result<Password, GenerateError>
where
    R: Rng + CryptoRng,
{
    if length < MIN_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password length {} (min {})", length, MIN_LENGTH);
        return Err(GenerateError::InvalidArgument { min: MIN_LENGTH });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Generating password of {} characters", length);

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for class in CharacterClass::ALL {
        chars.push(pick(rng, class.chars()));
    }
    for _ in CharacterClass::ALL.len()..length {
        chars.push(pick(rng, ALL_CHARS));
    }

    chars.shuffle(rng);

    Ok(Password::new(chars.into_iter().collect()))
}

// Uniform draw; `gen_range` rejects out-of-zone samples so there is no modulo bias.
fn pick<R>(rng: &mut R, set: &[u8]) -> char
where
    R: Rng,
{
    set[rng.gen_range(0..set.len())] as char
}
