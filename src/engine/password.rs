//! Password generation and entropy estimation.

use crate::charset::{compose, compose_per_class};
use crate::error::{Error, Result};
use crate::options::password::normalize;
use crate::options::{PasswordConfig, PasswordOptions};
use crate::random::RandomSource;
use crate::sampling::{pick, shuffle};

/// Normalizes `options` and generates a password.
pub fn generate<S>(options: &PasswordOptions, random: &mut S) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    generate_from_config(&normalize(options), random)
}

/// Generates a password from an already normalized config.
///
/// With `require_each_class` set, one character is drawn from every
/// enabled class first and the rest from the union alphabet. The
/// buffer is then shuffled so the guaranteed characters do not sit at
/// fixed positions. The shuffle runs in both modes.
pub fn generate_from_config<S>(config: &PasswordConfig, random: &mut S) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    let union = compose(&config.classes, config.exclude_ambiguous);
    if union.is_empty() {
        return Err(Error::NoCharactersAvailable);
    }

    let mut buffer: Vec<char> = Vec::with_capacity(config.length);

    if config.require_each_class {
        let per_class = compose_per_class(&config.classes, config.exclude_ambiguous);
        if per_class.is_empty() {
            return Err(Error::NoClassesAvailable);
        }
        for alphabet in &per_class {
            buffer.push(*pick(random, alphabet.chars())?);
        }
    }

    tracing::debug!(
        length = config.length,
        alphabet = union.len(),
        guaranteed = buffer.len(),
        "Generating password"
    );

    while buffer.len() < config.length {
        buffer.push(*pick(random, union.chars())?);
    }

    shuffle(&mut buffer, random)?;

    Ok(buffer.into_iter().collect())
}

/// Estimates entropy in bits: `length * log2(alphabet size)`.
///
/// Returns 0 when no character is available.
pub fn estimate_entropy(options: &PasswordOptions) -> f64 {
    let config = normalize(options);
    let alphabet = compose(&config.classes, config.exclude_ambiguous);
    if alphabet.is_empty() {
        return 0.0;
    }
    config.length as f64 * (alphabet.len() as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{CharacterClass, CharacterClasses};
    use crate::options::ClassOptions;
    use crate::random::{ReplaySource, SeededSource};

    fn lowercase_only() -> ClassOptions {
        CharacterClasses {
            lowercase: true,
            ..CharacterClasses::NONE
        }
        .into()
    }

    #[test]
    fn test_constant_source_lowercase() {
        let options = PasswordOptions {
            length: Some(8.0),
            classes: lowercase_only(),
            require_each_class: Some(false),
            ..Default::default()
        };
        let mut source = ReplaySource::constant(10);
        let password = generate(&options, &mut source).unwrap();

        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        // 'l' is filtered as ambiguous, so index 10 is still 'k'
        assert_eq!(password, "kkkkkkkk");
    }

    #[test]
    fn test_length_matches_normalized() {
        let mut source = SeededSource::from_label("length");
        for length in [0.0, 8.0, 13.4, 64.0, 128.0, 999.0] {
            let options = PasswordOptions {
                length: Some(length),
                ..Default::default()
            };
            let password = generate(&options, &mut source).unwrap();
            assert_eq!(password.chars().count(), normalize(&options).length);
        }
    }

    #[test]
    fn test_every_class_present() {
        let options = PasswordOptions {
            length: Some(8.0),
            classes: CharacterClasses::ALL.into(),
            ..Default::default()
        };
        for seed in 0..200 {
            let mut source = SeededSource::from_label(&format!("classes-{seed}"));
            let password = generate(&options, &mut source).unwrap();
            for class in CharacterClass::ALL {
                assert!(
                    password.chars().any(|c| class.charset().contains(c)),
                    "{class:?} missing"
                );
            }
        }
    }

    #[test]
    fn test_ambiguous_characters_excluded() {
        let options = PasswordOptions {
            length: Some(128.0),
            classes: CharacterClasses::ALL.into(),
            exclude_ambiguous: Some(true),
            ..Default::default()
        };
        let mut source = SeededSource::from_label("ambiguous");
        for _ in 0..20 {
            let password = generate(&options, &mut source).unwrap();
            assert!(!password.contains(&['I', 'l', '1', 'O', '0', '|'][..]));
        }
    }

    #[test]
    fn test_no_classes_fails() {
        let options = PasswordOptions {
            classes: CharacterClasses::NONE.into(),
            ..Default::default()
        };
        let mut source = ReplaySource::constant(0);
        assert!(matches!(
            generate(&options, &mut source),
            Err(Error::NoCharactersAvailable)
        ));
    }

    #[test]
    fn test_entropy_values() {
        let options = PasswordOptions {
            length: Some(16.0),
            classes: lowercase_only(),
            exclude_ambiguous: Some(false),
            ..Default::default()
        };
        let expected = 16.0 * 26f64.log2();
        assert!((estimate_entropy(&options) - expected).abs() < 1e-9);

        let empty = PasswordOptions {
            classes: CharacterClasses::NONE.into(),
            ..Default::default()
        };
        assert_eq!(estimate_entropy(&empty), 0.0);
    }

    #[test]
    fn test_entropy_is_linear_in_length() {
        let base = PasswordOptions::with_length(20);
        let doubled = PasswordOptions::with_length(40);
        assert_eq!(estimate_entropy(&doubled), 2.0 * estimate_entropy(&base));
        assert_eq!(estimate_entropy(&base), estimate_entropy(&base));
    }
}
