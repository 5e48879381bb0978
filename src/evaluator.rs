//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{Section, character_variety_section, length_section};
use crate::types::ScoreResult;

/// Scores a password and labels its strength.
///
/// Accepts any string, including ones shorter than the generator's minimum.
///
/// # Arguments
/// * `password` - The password to score
///
/// # Returns
/// A `ScoreResult` with a score between 0 and 7 and the matching label.
pub fn score_password(password: &SecretString) -> ScoreResult {
    let pwd = password.expose_secret();

    // Orchestrator: every section adds its points to the total
    let sections: [(&str, Section); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut score = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(pwd);

        #[cfg(feature = "tracing")]
        tracing::trace!("Section {} scored {}", _section_name, points);

        score += points;
    }

    let result = ScoreResult::new(score);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password scored {} ({})", result.score, result.strength);

    result
}
