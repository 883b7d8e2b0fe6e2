//! seedkit: BIP-39 mnemonics and BIP-32 master keys from the command line
//!
//! # Usage
//!
//! ```bash
//! seedkit generate --words 24
//! seedkit check legal winner thank year wave sausage worth useful legal winner thank yellow
//! echo "$PHRASE" | seedkit seed --passphrase TREZOR
//! seedkit --config seedkit.toml xprv < phrase.txt
//! ```

mod config;

use anyhow::{Context, Result};
use config::SeedkitConfig;
use rand::rngs::OsRng;
use seedkit_core::{Language, MasterKey, Mnemonic, Network};
use std::io::Read;
use std::path::PathBuf;
use zeroize::Zeroize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Generate,
    Check,
    Seed,
    Xprv,
}

impl Command {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "generate" | "new" => Some(Command::Generate),
            "check" => Some(Command::Check),
            "seed" => Some(Command::Seed),
            "xprv" | "master" => Some(Command::Xprv),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI args (minimal, no clap)
    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut validate_only = false;
    let mut command: Option<Command> = None;
    let mut language: Option<Language> = None;
    let mut word_count: Option<usize> = None;
    let mut network: Option<Network> = None;
    let mut passphrase: Option<String> = None;
    let mut words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(next_value(&args, &mut i, "--config")?));
            }
            "--language" | "-l" => {
                let v = next_value(&args, &mut i, "--language")?;
                language = Some(v.parse().context("Invalid --language")?);
            }
            "--words" | "-w" => {
                let v = next_value(&args, &mut i, "--words")?;
                word_count = Some(v.parse().context("Invalid --words")?);
            }
            "--network" | "-n" => {
                let v = next_value(&args, &mut i, "--network")?;
                network = Some(v.parse().context("Invalid --network")?);
            }
            "--passphrase" | "-p" => {
                passphrase = Some(next_value(&args, &mut i, "--passphrase")?.to_string());
            }
            "--validate" => {
                validate_only = true;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("seedkit {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other if other.starts_with('-') => {
                anyhow::bail!("Unknown argument: {}", other);
            }
            other => match command {
                None => {
                    command = Some(
                        Command::parse(other)
                            .with_context(|| format!("Unknown command: {}", other))?,
                    );
                }
                Some(_) => words.push(other.to_string()),
            },
        }
        i += 1;
    }

    // Load config
    let mut config = match &config_path {
        Some(path) => SeedkitConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SeedkitConfig::default(),
    };

    // Env overrides, then flags
    config.apply_env_overrides()?;
    let language_pinned = language.is_some() || std::env::var("SEEDKIT_LANGUAGE").is_ok();
    if let Some(language) = language {
        config.wallet.language = language;
    }
    if let Some(count) = word_count {
        config.wallet.word_count = count;
    }
    if let Some(network) = network {
        config.wallet.network = network;
    }
    if passphrase.is_some() {
        config.wallet.passphrase = passphrase;
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger
    std::env::set_var("RUST_LOG", &config.logging.log_level);
    env_logger::init();

    if validate_only {
        println!("Configuration is valid.");
        println!("  Language:   {}", config.wallet.language);
        println!("  Word count: {}", config.wallet.word_count);
        println!("  Network:    {}", config.wallet.network);
        println!("  Log level:  {}", config.logging.log_level);
        println!("  Passphrase: {}", config.wallet.passphrase.is_some());
        return Ok(());
    }

    let Some(command) = command else {
        print_help();
        anyhow::bail!("No command given");
    };

    let result = run(command, &config, &words, language_pinned);
    words.zeroize();
    if let Some(ref mut p) = config.wallet.passphrase {
        p.zeroize();
    }
    result
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(v) => Ok(v.as_str()),
        None => anyhow::bail!("{} requires a value", flag),
    }
}

fn run(
    command: Command,
    config: &SeedkitConfig,
    words: &[String],
    language_pinned: bool,
) -> Result<()> {
    let wallet = &config.wallet;
    let passphrase = wallet.passphrase.as_deref().unwrap_or("");
    let input_language = language_pinned.then_some(wallet.language);

    match command {
        Command::Generate => {
            let mnemonic =
                Mnemonic::generate_with(&mut OsRng, wallet.language, wallet.word_count)?;
            log::info!(
                "Generated {}-word {} mnemonic",
                mnemonic.word_count(),
                mnemonic.language()
            );
            println!("{}", mnemonic);
        }
        Command::Check => {
            let mnemonic = read_mnemonic(words, input_language)?;
            println!(
                "Valid {} mnemonic ({} words)",
                mnemonic.language(),
                mnemonic.word_count()
            );
            println!("Entropy: {}", hex::encode(mnemonic.entropy()));
        }
        Command::Seed => {
            let mnemonic = read_mnemonic(words, input_language)?;
            let seed = mnemonic.to_seed(passphrase);
            println!("{}", hex::encode(seed.as_bytes()));
        }
        Command::Xprv => {
            let mnemonic = read_mnemonic(words, input_language)?;
            let master = MasterKey::from_mnemonic(&mnemonic, passphrase)
                .context("Master key derivation failed")?;
            println!("{}", master.to_xpriv(wallet.network));
        }
    }
    Ok(())
}

/// Phrase from positional words, or stdin when none were given.
///
/// The language is detected unless `--language` or `SEEDKIT_LANGUAGE` pinned it.
fn read_mnemonic(words: &[String], language: Option<Language>) -> Result<Mnemonic> {
    let mut phrase = if words.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read phrase from stdin")?;
        buf
    } else {
        words.join(" ")
    };

    let parsed = match language {
        Some(language) => Mnemonic::from_phrase_in(language, &phrase),
        None => Mnemonic::from_phrase(&phrase),
    };
    phrase.zeroize();

    let mnemonic = parsed.context("Invalid mnemonic")?;
    log::debug!(
        "Parsed {}-word {} mnemonic",
        mnemonic.word_count(),
        mnemonic.language()
    );
    Ok(mnemonic)
}

fn print_help() {
    println!(
        r#"seedkit: BIP-39 mnemonics and BIP-32 master keys

USAGE:
    seedkit [OPTIONS] <COMMAND> [PHRASE...]

COMMANDS:
    generate              Print a fresh mnemonic
    check [PHRASE...]     Validate a phrase, print its language and entropy
    seed [PHRASE...]      Print the 64-byte seed in hex
    xprv [PHRASE...]      Print the master extended private key

    Commands taking a phrase read it from stdin when none is given.

OPTIONS:
    -c, --config <PATH>       Config file path (TOML)
    -l, --language <LANG>     Wordlist language (default: english; detected for input)
    -w, --words <N>           Words per generated phrase (12, 15, 18, 21, 24)
    -n, --network <NET>       Extended key network (main/test)
    -p, --passphrase <PASS>   BIP-39 passphrase (default: empty)
    --validate                Validate configuration and exit
    -h, --help                Show this help message
    -V, --version             Show version

ENVIRONMENT VARIABLES (override config file):
    SEEDKIT_LANGUAGE      Wordlist language
    SEEDKIT_WORD_COUNT    Words per generated phrase
    SEEDKIT_NETWORK       Extended key network
    SEEDKIT_LOG_LEVEL     Log level (error/warn/info/debug/trace)
    SEEDKIT_PASSPHRASE    BIP-39 passphrase
"#
    );
}
