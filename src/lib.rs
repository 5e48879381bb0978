//! Password generation and strength scoring library
//!
//! This library generates random passwords from a secure random source
//! and scores password strength on a simple heuristic scale.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-generator` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MAX_LENGTH`: Largest length the interactive prompt accepts
//!   (default: `1024`)
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::{generate, score_password, PasswordStrength};
//! use secrecy::ExposeSecret;
//!
//! let password = generate(16).expect("16 is above the minimum");
//! assert_eq!(password.expose_secret().chars().count(), 16);
//!
//! let result = score_password(password.as_secret());
//! assert!(result.strength >= PasswordStrength::Strong);
//! println!("{}", result);
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod prompt;
mod sections;
mod types;

// Public API
pub use charset::{ALL_CHARS, CharacterClass, DIGITS, LETTERS, SYMBOLS};
pub use config::{ConfigError, DEFAULT_MAX_LENGTH, MAX_LENGTH_ENV, get_max_length, validate_max_length};
pub use evaluator::score_password;
pub use generator::{GenerateError, MIN_LENGTH, generate, generate_with};
pub use prompt::{LengthPrompt, PromptError, PromptState};
pub use types::{Password, PasswordStrength, ScoreResult};
