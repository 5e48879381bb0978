//! Fixed character classes used by both the generator and the scorer.

/// Upper and lowercase ASCII letters.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits.
pub const DIGITS: &[u8] = b"0123456789";

/// Punctuation accepted as a symbol.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()+";

/// Union of every class, in class order.
pub const ALL_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()+";

/// A named, immutable set of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Letters,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order the generator draws its guaranteed characters.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// Returns the class `c` belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

/// Returns `true` if `c` is one of the fixed symbols.
pub fn is_symbol(c: char) -> bool {
    CharacterClass::Symbols.contains(c)
}
