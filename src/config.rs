//! Runtime configuration
//!
//! Resolves the practical upper bound applied to interactive length input.

use thiserror::Error;

use crate::generator::MIN_LENGTH;

/// Environment variable overriding the maximum password length.
pub const MAX_LENGTH_ENV: &str = "PWD_MAX_LENGTH";

/// Maximum password length when nothing else is configured.
pub const DEFAULT_MAX_LENGTH: usize = 1024;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Maximum length {max} is below the minimum of {min}")]
    BelowMinimum { max: usize, min: usize },
}

/// Returns the maximum accepted password length.
///
/// Priority:
/// 1. Environment variable `PWD_MAX_LENGTH`
/// 2. [`DEFAULT_MAX_LENGTH`]
///
/// # Errors
///
/// Returns error if:
/// - The variable is not a non-negative integer
/// - The value is below the generator's minimum length
pub fn get_max_length() -> Result<usize, ConfigError> {
    let Ok(raw) = std::env::var(MAX_LENGTH_ENV) else {
        return Ok(DEFAULT_MAX_LENGTH);
    };

    let max = raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
        var: MAX_LENGTH_ENV,
        value: raw.clone(),
    })?;

    validate_max_length(max)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Maximum password length set to {} from {}", max, MAX_LENGTH_ENV);

    Ok(max)
}

/// Checks that `max` leaves room for at least one valid length.
pub fn validate_max_length(max: usize) -> Result<usize, ConfigError> {
    if max < MIN_LENGTH {
        return Err(ConfigError::BelowMinimum {
            max,
            min: MIN_LENGTH,
        });
    }
    Ok(max)
}
