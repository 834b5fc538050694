//! Passphrase generation.
//!
//! Words are drawn independently from the embedded [`WordList`], so a
//! word may repeat. Randomness is consumed in a fixed order: words,
//! then the capitalized position (if any), then digits, then symbol.

use super::wordlist::WordList;
use crate::charset::{DIGITS, SYMBOLS};
use crate::error::{Error, Result};
use crate::options::passphrase::{normalize, validate};
use crate::options::{Capitalization, PassphraseConfig, PassphraseOptions};
use crate::random::RandomSource;
use crate::sampling::{pick, sample_index};

/// Validates the word count, normalizes, and generates a passphrase.
///
/// Fails with [`Error::InvalidConfiguration`] before drawing any
/// randomness if the word count is not a whole number in range.
pub fn generate<S>(options: &PassphraseOptions, random: &mut S) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    let config = checked_config(options)?;
    generate_from_config(&config, random)
}

/// Generates a passphrase from an already normalized config.
pub fn generate_from_config<S>(config: &PassphraseConfig, random: &mut S) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    let list = WordList::global();

    tracing::debug!(
        words = config.word_count,
        list_size = list.len(),
        capitalization = ?config.capitalization,
        "Generating passphrase"
    );

    let mut words: Vec<String> = Vec::with_capacity(config.word_count);
    for _ in 0..config.word_count {
        words.push(pick(random, list.words())?.to_string());
    }

    match config.capitalization {
        Capitalization::None => {}
        Capitalization::FirstOfEach => {
            for word in &mut words {
                capitalize_first(word);
            }
        }
        Capitalization::OneRandom => {
            let index = sample_index(random, words.len())?;
            capitalize_first(&mut words[index]);
        }
    }

    let mut passphrase = words.join(&config.separator);

    if config.append_digits {
        for _ in 0..2 {
            passphrase.push(char::from(*pick(random, DIGITS.as_bytes())?));
        }
    }
    if config.append_symbol {
        passphrase.push(char::from(*pick(random, SYMBOLS.as_bytes())?));
    }

    Ok(passphrase)
}

/// Estimates passphrase entropy in bits.
///
/// Counts the word draws, the capitalized position for
/// [`Capitalization::OneRandom`], and the appended digits and symbol.
pub fn estimate_entropy(options: &PassphraseOptions) -> Result<f64> {
    let config = checked_config(options)?;
    let list = WordList::global();

    let mut bits = config.word_count as f64 * (list.len() as f64).log2();
    if config.capitalization == Capitalization::OneRandom {
        bits += (config.word_count as f64).log2();
    }
    if config.append_digits {
        bits += 2.0 * (DIGITS.len() as f64).log2();
    }
    if config.append_symbol {
        bits += (SYMBOLS.len() as f64).log2();
    }
    Ok(bits)
}

fn checked_config(options: &PassphraseOptions) -> Result<PassphraseConfig> {
    let outcome = validate(options);
    if !outcome.valid {
        tracing::debug!(errors = ?outcome.errors, "Passphrase options rejected");
        return Err(Error::InvalidConfiguration(outcome.errors));
    }
    Ok(normalize(options))
}

fn capitalize_first(word: &mut String) {
    if let Some(first) = word.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ReplaySource, SeededSource};

    fn options(word_count: usize, separator: &str) -> PassphraseOptions {
        PassphraseOptions {
            word_count: Some(word_count as f64),
            separator: Some(separator.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_words_joined_by_separator() {
        let mut source = SeededSource::from_label("join");
        let passphrase = generate(&options(3, "_"), &mut source).unwrap();

        assert!(!passphrase.starts_with('_'));
        assert!(!passphrase.ends_with('_'));
        let parts: Vec<&str> = passphrase.split('_').collect();
        assert_eq!(parts.len(), 3);
        for part in parts {
            assert!(WordList::global().contains(part), "{part} not in list");
        }
    }

    #[test]
    fn test_too_few_words_rejected() {
        let mut source = ReplaySource::constant(0);
        let result = generate(&PassphraseOptions::with_words(2), &mut source);
        match result {
            Err(Error::InvalidConfiguration(errors)) => {
                assert_eq!(errors, vec!["word count must be between 3 and 10"]);
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_empty_and_multi_char_separators() {
        let mut source = ReplaySource::constant(0);
        let first = WordList::global().words()[0];

        let joined = generate(&options(3, ""), &mut source).unwrap();
        assert_eq!(joined, first.repeat(3));

        let spaced = generate(&options(3, " :: "), &mut source).unwrap();
        assert_eq!(spaced, [first, first, first].join(" :: "));
    }

    #[test]
    fn test_capitalize_first_of_each() {
        let mut opts = options(4, " ");
        opts.capitalization = Some(Capitalization::FirstOfEach);
        let mut source = SeededSource::from_label("caps");
        let passphrase = generate(&opts, &mut source).unwrap();

        for word in passphrase.split(' ') {
            assert!(word.chars().next().unwrap().is_ascii_uppercase());
            assert!(WordList::global().contains(&word.to_ascii_lowercase()));
        }
    }

    #[test]
    fn test_capitalize_one_random() {
        let mut opts = options(6, " ");
        opts.capitalization = Some(Capitalization::OneRandom);
        for seed in 0..20 {
            let mut source = SeededSource::from_label(&format!("one-{seed}"));
            let passphrase = generate(&opts, &mut source).unwrap();
            let capitalized = passphrase
                .split(' ')
                .filter(|w| w.starts_with(|c: char| c.is_ascii_uppercase()))
                .count();
            assert_eq!(capitalized, 1);
        }
    }

    #[test]
    fn test_digits_then_symbol_suffix() {
        let mut opts = options(3, " ");
        opts.append_digits = Some(true);
        opts.append_symbol = Some(true);
        let mut source = SeededSource::from_label("suffix");
        let passphrase = generate(&opts, &mut source).unwrap();

        let chars: Vec<char> = passphrase.chars().collect();
        let n = chars.len();
        assert!(chars[n - 3].is_ascii_digit());
        assert!(chars[n - 2].is_ascii_digit());
        assert!(SYMBOLS.contains(chars[n - 1]));

        let words: String = chars[..n - 3].iter().collect();
        assert_eq!(words.split(' ').count(), 3);
    }

    #[test]
    fn test_constant_source_layout() {
        // Every draw picks index 0: first word, digit '0', symbol '!'
        let mut opts = options(3, "-");
        opts.append_digits = Some(true);
        opts.append_symbol = Some(true);
        opts.capitalization = Some(Capitalization::OneRandom);
        let mut source = ReplaySource::constant(0);
        let first = WordList::global().words()[0];

        let passphrase = generate(&opts, &mut source).unwrap();
        let mut capitalized = first.to_string();
        capitalize_first(&mut capitalized);
        assert_eq!(passphrase, format!("{capitalized}-{first}-{first}00!"));
    }

    #[test]
    fn test_entropy_estimate() {
        let list_bits = (WordList::global().len() as f64).log2();

        let plain = estimate_entropy(&PassphraseOptions::with_words(4)).unwrap();
        assert!((plain - 4.0 * list_bits).abs() < 1e-9);

        let mut decorated = PassphraseOptions::with_words(4);
        decorated.append_digits = Some(true);
        decorated.append_symbol = Some(true);
        let bits = estimate_entropy(&decorated).unwrap();
        let expected = 4.0 * list_bits + 2.0 * 10f64.log2() + 23f64.log2();
        assert!((bits - expected).abs() < 1e-9);

        assert!(estimate_entropy(&PassphraseOptions::with_words(11)).is_err());
    }
}
