//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Points a section contributes to the total score.
pub type SectionScore = u8;

/// Signature shared by every section.
pub type Section = fn(&str) -> SectionScore;
