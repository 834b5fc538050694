//! Canonical character classes.

use serde::{Deserialize, Serialize};

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// Punctuation usable in secrets. Quotes and backticks are left out.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?";

/// Characters easily confused with one another when read back.
pub const AMBIGUOUS: &[char] = &['I', 'l', '1', 'O', '0', '|'];

/// One of the four character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digits,
    /// [`SYMBOLS`]
    Symbols,
}

impl CharacterClass {
    /// All classes in composition order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// The canonical characters of this class.
    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// Which character classes a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    /// Include `a-z`.
    pub lowercase: bool,
    /// Include `A-Z`.
    pub uppercase: bool,
    /// Include `0-9`.
    pub digits: bool,
    /// Include punctuation.
    pub symbols: bool,
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl CharacterClasses {
    /// No class enabled.
    pub const NONE: CharacterClasses = CharacterClasses {
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    /// Every class enabled.
    pub const ALL: CharacterClasses = CharacterClasses {
        lowercase: true,
        uppercase: true,
        digits: true,
        symbols: true,
    };

    /// Returns true if `class` is switched on.
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in composition order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    /// Number of enabled classes.
    pub fn count(&self) -> usize {
        self.enabled().count()
    }

    /// Returns true if at least one class is enabled.
    pub fn any(&self) -> bool {
        self.count() > 0
    }
}
