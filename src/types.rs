//! Password and score types shared by the generator and the evaluator.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::score_password;

/// Qualitative strength label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a total score to its label, highest threshold first.
    pub fn from_score(score: u8) -> Self {
        if score >= 7 {
            PasswordStrength::VeryStrong
        } else if score >= 5 {
            PasswordStrength::Strong
        } else if score >= 3 {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score of a password together with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub strength: PasswordStrength,
}

impl ScoreResult {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            strength: PasswordStrength::from_score(score),
        }
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {})", self.strength, self.score)
    }
}

/// A generated password.
///
/// The text is kept in a [`SecretString`], so it is zeroized on drop and
/// never shows up in `Debug` output.
#[derive(Debug)]
pub struct Password(SecretString);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Password(SecretString::new(value.into()))
    }

    /// Number of characters in the password.
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub fn as_secret(&self) -> &SecretString {
        &self.0
    }

    /// Scores this password.
    pub fn score(&self) -> ScoreResult {
        score_password(&self.0)
    }
}

impl ExposeSecret<str> for Password {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<Password> for SecretString {
    fn from(password: Password) -> Self {
        password.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(PasswordStrength::from_score(0), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(3), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(4), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(5), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(6), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(7), PasswordStrength::VeryStrong);
    }

    #[test]
    fn test_strength_is_monotonic() {
        for score in 0..7u8 {
            assert!(PasswordStrength::from_score(score) <= PasswordStrength::from_score(score + 1));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(PasswordStrength::VeryStrong.to_string(), "Very strong");
        assert_eq!(PasswordStrength::Weak.to_string(), "Weak");
    }

    #[test]
    fn test_score_result_display() {
        assert_eq!(ScoreResult::new(5).to_string(), "Strong (score: 5)");
        assert_eq!(ScoreResult::new(0).to_string(), "Weak (score: 0)");
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("Abcdefg1!".to_string());
        let debug = format!("{:?}", password);
        assert!(!debug.contains("Abcdefg1!"));
        assert_eq!(password.len(), 9);
        assert_eq!(password.expose_secret(), "Abcdefg1!");
    }
}
