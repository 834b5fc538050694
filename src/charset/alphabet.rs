//! Alphabet composition from class toggles.

use super::classes::{CharacterClass, CharacterClasses, AMBIGUOUS};

/// An ordered, deduplicated set of characters a position may take.
///
/// Built fresh for every generation call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet, keeping the first occurrence of each char.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut out: Vec<char> = Vec::new();
        for c in chars {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        Self { chars: out }
    }

    /// The characters in order.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of distinct characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if no character is available.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The alphabet as a string.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Builds the union alphabet of every enabled class.
///
/// Classes are concatenated lowercase, uppercase, digits, symbols. An
/// empty selection yields an empty alphabet; deciding whether that is
/// fatal is up to the caller.
pub fn compose(classes: &CharacterClasses, exclude_ambiguous: bool) -> Alphabet {
    let excluded = excluded_chars(classes, exclude_ambiguous);
    Alphabet::from_chars(
        classes
            .enabled()
            .flat_map(|class| class.charset().chars())
            .filter(|c| !excluded.contains(c)),
    )
}

/// Builds one alphabet per enabled class, with the same filtering as
/// [`compose`].
///
/// Classes that filter down to nothing are omitted.
pub fn compose_per_class(classes: &CharacterClasses, exclude_ambiguous: bool) -> Vec<Alphabet> {
    let excluded = excluded_chars(classes, exclude_ambiguous);
    classes
        .enabled()
        .map(|class| {
            Alphabet::from_chars(class.charset().chars().filter(|c| !excluded.contains(c)))
        })
        .filter(|alphabet| !alphabet.is_empty())
        .collect()
}

/// The ambiguous characters that take part in filtering.
///
/// A character only joins the filter when some enabled canonical set
/// actually carries it, so a change to the symbol set never needs a
/// matching change here.
fn excluded_chars(classes: &CharacterClasses, exclude_ambiguous: bool) -> Vec<char> {
    if !exclude_ambiguous {
        return Vec::new();
    }
    AMBIGUOUS
        .iter()
        .copied()
        .filter(|c| {
            classes
                .enabled()
                .any(|class: CharacterClass| class.charset().contains(*c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::classes::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

    #[test]
    fn test_union_order_and_size() {
        let alphabet = compose(&CharacterClasses::ALL, false);
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 23);
        assert_eq!(
            alphabet.as_string(),
            format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SYMBOLS}")
        );
    }

    #[test]
    fn test_empty_selection_is_empty() {
        assert!(compose(&CharacterClasses::NONE, false).is_empty());
        assert!(compose(&CharacterClasses::NONE, true).is_empty());
        assert!(compose_per_class(&CharacterClasses::NONE, true).is_empty());
    }

    #[test]
    fn test_exclude_ambiguous() {
        let alphabet = compose(&CharacterClasses::ALL, true);
        for c in ['I', 'l', '1', 'O', '0', '|'] {
            assert!(!alphabet.contains(c), "{c} should be filtered");
        }
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 23 - 5);
    }

    #[test]
    fn test_exclude_only_touches_enabled_sets() {
        let digits_only = CharacterClasses {
            digits: true,
            ..CharacterClasses::NONE
        };
        let alphabet = compose(&digits_only, true);
        assert_eq!(alphabet.as_string(), "23456789");
        assert_eq!(excluded_chars(&digits_only, true), vec!['1', '0']);
    }

    #[test]
    fn test_pipe_never_filters_without_carrier() {
        // No canonical set carries '|', so it never joins the filter
        assert!(!excluded_chars(&CharacterClasses::ALL, true).contains(&'|'));
    }

    #[test]
    fn test_per_class_alphabets() {
        let per_class = compose_per_class(&CharacterClasses::default(), true);
        assert_eq!(per_class.len(), 3);
        assert_eq!(per_class[0].len(), 25); // no 'l'
        assert_eq!(per_class[1].len(), 24); // no 'I', 'O'
        assert_eq!(per_class[2].len(), 8); // no '0', '1'
    }

    #[test]
    fn test_dedup_keeps_first() {
        let alphabet = Alphabet::from_chars("abcabcd".chars());
        assert_eq!(alphabet.as_string(), "abcd");
    }
}
