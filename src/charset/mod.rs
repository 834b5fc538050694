//! Character sets and alphabet composition.

mod alphabet;
mod classes;

pub use alphabet::{compose, compose_per_class, Alphabet};
pub use classes::{
    CharacterClass, CharacterClasses, AMBIGUOUS, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE,
};

/// Alias for [`compose`].
pub fn build_alphabet(classes: &CharacterClasses, exclude_ambiguous: bool) -> Alphabet {
    compose(classes, exclude_ambiguous)
}
