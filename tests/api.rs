use secret_forge::{
    build_alphabet, estimate_passphrase_entropy, generate_passphrase, generate_passphrase_with,
    generate_password, generate_password_with, validate_passphrase_options,
    validate_password_options, CharacterClasses, Error, PassphraseOptions, PasswordOptions,
    ReplaySource, SeededSource, SettingsFile, WordList,
};

#[test]
fn test_os_backed_password() {
    let password = generate_password(&PasswordOptions::default()).unwrap();
    assert_eq!(password.chars().count(), 16);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_os_backed_passphrase() {
    let passphrase = generate_passphrase(&PassphraseOptions::default()).unwrap();
    let words: Vec<&str> = passphrase.split('-').collect();
    assert_eq!(words.len(), 5);
    assert!(words.iter().all(|w| WordList::global().contains(w)));
}

#[test]
fn test_lowercase_constant_source() {
    let options = PasswordOptions {
        length: Some(8.0),
        require_each_class: Some(false),
        classes: CharacterClasses {
            lowercase: true,
            ..CharacterClasses::NONE
        }
        .into(),
        ..Default::default()
    };
    let mut random = ReplaySource::constant(10);
    let password = generate_password_with(&options, &mut random).unwrap();
    assert_eq!(password.len(), 8);
    assert!(password.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn test_three_words_with_underscore() {
    let options = PassphraseOptions {
        word_count: Some(3.0),
        separator: Some("_".into()),
        ..Default::default()
    };
    let mut random = SeededSource::from_label("underscore");
    let passphrase = generate_passphrase_with(&options, &mut random).unwrap();
    assert!(!passphrase.starts_with('_') && !passphrase.ends_with('_'));
    assert_eq!(passphrase.split('_').count(), 3);
}

#[test]
fn test_two_words_is_invalid_configuration() {
    let options = PassphraseOptions::with_words(2);
    assert!(matches!(
        generate_passphrase(&options),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(!validate_passphrase_options(&options).valid);
    assert!(estimate_passphrase_entropy(&options).is_err());
}

#[test]
fn test_no_classes_is_no_characters() {
    assert!(build_alphabet(&CharacterClasses::NONE, false).is_empty());

    let options = PasswordOptions {
        classes: CharacterClasses::NONE.into(),
        ..Default::default()
    };
    assert!(matches!(
        generate_password(&options),
        Err(Error::NoCharactersAvailable)
    ));
    assert!(!validate_password_options(&options).valid);
}

#[test]
fn test_same_seed_same_secret() {
    let options = PasswordOptions::with_length(32);
    let a = generate_password_with(&options, &mut SeededSource::from_label("repeat")).unwrap();
    let b = generate_password_with(&options, &mut SeededSource::from_label("repeat")).unwrap();
    let c = generate_password_with(&options, &mut SeededSource::from_label("other")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_concurrent_generation() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let mut random = SeededSource::from_label(&format!("thread-{i}"));
                let password =
                    generate_password_with(&PasswordOptions::with_length(24), &mut random)
                        .unwrap();
                let passphrase =
                    generate_passphrase_with(&PassphraseOptions::with_words(6), &mut random)
                        .unwrap();
                (password, passphrase)
            })
        })
        .collect();

    for handle in handles {
        let (password, passphrase) = handle.join().unwrap();
        assert_eq!(password.chars().count(), 24);
        assert_eq!(passphrase.split('-').count(), 6);
    }
}

#[test]
fn test_settings_file_round_trip_on_disk() {
    let path = std::env::temp_dir().join(format!("secret-forge-{}.toml", std::process::id()));

    let mut settings = SettingsFile::default();
    settings.password.length = 48;
    settings.passphrase.separator = " ".into();
    settings.save(&path).unwrap();

    let loaded = SettingsFile::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, settings);

    let mut random = SeededSource::from_label("settings");
    let password = generate_password_with(&loaded.password.into(), &mut random).unwrap();
    assert_eq!(password.chars().count(), 48);
}
