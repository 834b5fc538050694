//! Secret Forge CLI
//!
//! Command-line front end for the generation engine. Secrets go to
//! stdout, one per line; logs go to stderr.

use clap::{Args, Parser, Subcommand};
use secret_forge::{
    estimate_entropy, estimate_passphrase_entropy, generate_passphrase_with,
    generate_password_with, normalize_passphrase_options, normalize_password_options,
    validate_password_options, Capitalization, ClassOptions, OsRandom, PassphraseOptions,
    PasswordOptions, RandomSource, SeededSource, SettingsFile,
};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "secret-forge", version, about = "Generate passwords and passphrases")]
struct Cli {
    /// TOML settings file used as the base configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of secrets to generate.
    #[arg(long, short = 'n', default_value_t = 1, global = true)]
    count: usize,

    /// Derive a reproducible stream from this label instead of the OS RNG.
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Write the effective settings back to the config file.
    #[arg(long, global = true, requires = "config")]
    save: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a password.
    Password(PasswordArgs),
    /// Generate a passphrase.
    Passphrase(PassphraseArgs),
}

#[derive(Debug, Args)]
struct PasswordArgs {
    /// Password length (8-128).
    #[arg(long, short)]
    length: Option<f64>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    lowercase: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    uppercase: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    digits: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    symbols: Option<bool>,
    /// Drop look-alike characters such as `l`, `1` and `O`.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    exclude_ambiguous: Option<bool>,
    /// Guarantee at least one character from every enabled class.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    require_each_class: Option<bool>,
}

#[derive(Debug, Args)]
struct PassphraseArgs {
    /// Number of words (3-10).
    #[arg(long, short)]
    words: Option<f64>,
    /// Word separator; may be empty.
    #[arg(long, short)]
    separator: Option<String>,
    #[arg(long, value_enum)]
    capitalization: Option<Capitalization>,
    /// Append two digits.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    digits: Option<bool>,
    /// Append one symbol.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    symbol: Option<bool>,
}

impl PasswordArgs {
    fn apply(&self, base: PasswordOptions) -> PasswordOptions {
        PasswordOptions {
            length: self.length.or(base.length),
            exclude_ambiguous: self.exclude_ambiguous.or(base.exclude_ambiguous),
            require_each_class: self.require_each_class.or(base.require_each_class),
            classes: ClassOptions {
                lowercase: self.lowercase.or(base.classes.lowercase),
                uppercase: self.uppercase.or(base.classes.uppercase),
                digits: self.digits.or(base.classes.digits),
                symbols: self.symbols.or(base.classes.symbols),
            },
        }
    }
}

impl PassphraseArgs {
    fn apply(&self, base: PassphraseOptions) -> PassphraseOptions {
        PassphraseOptions {
            word_count: self.words.or(base.word_count),
            separator: self.separator.clone().or(base.separator),
            capitalization: self.capitalization.or(base.capitalization),
            append_digits: self.digits.or(base.append_digits),
            append_symbol: self.symbol.or(base.append_symbol),
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) if path.exists() => match SettingsFile::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to load settings: {}", e);
                eprintln!("Failed to load settings: {}", e);
                std::process::exit(1);
            }
        },
        _ => SettingsFile::default(),
    };

    let mut random: Box<dyn RandomSource> = match &cli.seed {
        Some(label) => {
            warn!("Using a seeded source; output is reproducible and not secret");
            Box::new(SeededSource::from_label(label))
        }
        None => Box::new(OsRandom),
    };

    let result = match &cli.command {
        Command::Password(args) => {
            let options = args.apply(settings.password.into());

            let outcome = validate_password_options(&options);
            for reason in &outcome.errors {
                warn!("Adjusting password options: {}", reason);
            }

            settings.password = normalize_password_options(&options);
            info!(
                "Password entropy estimate: {:.1} bits",
                estimate_entropy(&options)
            );

            (0..cli.count)
                .map(|_| generate_password_with(&options, &mut *random))
                .collect::<Result<Vec<_>, _>>()
        }
        Command::Passphrase(args) => {
            let options = args.apply(settings.passphrase.clone().into());

            match estimate_passphrase_entropy(&options) {
                Ok(bits) => info!("Passphrase entropy estimate: {:.1} bits", bits),
                Err(e) => warn!("{}", e),
            }

            settings.passphrase = normalize_passphrase_options(&options);

            (0..cli.count)
                .map(|_| generate_passphrase_with(&options, &mut *random))
                .collect::<Result<Vec<_>, _>>()
        }
    };

    let secrets = match result {
        Ok(secrets) => secrets,
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    for secret in &secrets {
        println!("{}", secret);
    }

    if cli.save {
        if let Some(path) = &cli.config {
            if let Err(e) = settings.save(path) {
                warn!("Settings not saved: {}", e);
            }
        }
    }
}
