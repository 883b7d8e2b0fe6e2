//! CLI configuration, parsed from a TOML file plus environment overrides.
//!
//! Priority: environment variables > config file > defaults.

use anyhow::{Context, Result};
use seedkit_core::codec::WORD_COUNTS;
use seedkit_core::{Language, Network, DEFAULT_WORD_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedkitConfig {
    /// Mnemonic and key settings
    #[serde(default)]
    pub wallet: WalletSection,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Mnemonic and key settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSection {
    /// Wordlist language for `generate`
    #[serde(default)]
    pub language: Language,

    /// Words per generated phrase (12, 15, 18, 21 or 24)
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    /// Extended key network: "main" or "test"
    #[serde(default)]
    pub network: Network,

    /// BIP-39 passphrase, from `SEEDKIT_PASSPHRASE` or `--passphrase`.
    /// Never read from or written to the config file.
    #[serde(skip)]
    pub passphrase: Option<String>,
}

impl Default for WalletSection {
    fn default() -> Self {
        Self {
            language: Language::default(),
            word_count: default_word_count(),
            network: Network::default(),
            passphrase: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SeedkitConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: SeedkitConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `SEEDKIT_LANGUAGE`
    /// - `SEEDKIT_WORD_COUNT`
    /// - `SEEDKIT_NETWORK`
    /// - `SEEDKIT_LOG_LEVEL`
    /// - `SEEDKIT_PASSPHRASE`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = std::env::var("SEEDKIT_LANGUAGE") {
            self.wallet.language = v.parse().context("Invalid SEEDKIT_LANGUAGE")?;
        }
        if let Ok(v) = std::env::var("SEEDKIT_WORD_COUNT") {
            self.wallet.word_count = v.parse().context("Invalid SEEDKIT_WORD_COUNT")?;
        }
        if let Ok(v) = std::env::var("SEEDKIT_NETWORK") {
            self.wallet.network = v.parse().context("Invalid SEEDKIT_NETWORK")?;
        }
        if let Ok(v) = std::env::var("SEEDKIT_LOG_LEVEL") {
            self.logging.log_level = v;
        }
        if let Ok(v) = std::env::var("SEEDKIT_PASSPHRASE") {
            self.wallet.passphrase = Some(v);
        }
        Ok(())
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            WORD_COUNTS.contains(&self.wallet.word_count),
            "wallet.word_count must be one of {:?}, got {}",
            WORD_COUNTS,
            self.wallet.word_count
        );

        anyhow::ensure!(
            matches!(
                self.logging.log_level.to_lowercase().as_str(),
                "off" | "error" | "warn" | "info" | "debug" | "trace"
            ),
            "logging.log_level must be one of off/error/warn/info/debug/trace"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn full_toml() -> &'static str {
        r#"
[wallet]
language = "japanese"
word_count = 24
network = "test"

[logging]
log_level = "debug"
"#
    }

    fn load(toml: &str) -> SeedkitConfig {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml).unwrap();
        SeedkitConfig::from_file(file.path()).unwrap()
    }

    #[test]
    fn test_parse_empty_config() {
        let config = load("");
        assert_eq!(config.wallet.language, Language::English);
        assert_eq!(config.wallet.word_count, 12);
        assert_eq!(config.wallet.network, Network::Main);
        assert_eq!(config.logging.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = load(full_toml());
        assert_eq!(config.wallet.language, Language::Japanese);
        assert_eq!(config.wallet.word_count, 24);
        assert_eq!(config.wallet.network, Network::Test);
        assert_eq!(config.logging.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multiword_language_tag() {
        let config = load("[wallet]\nlanguage = \"chinese-simplified\"\n");
        assert_eq!(config.wallet.language, Language::ChineseSimplified);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[wallet]\nlanguage = \"klingon\"\n").unwrap();
        assert!(SeedkitConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(SeedkitConfig::from_file(Path::new("/nonexistent/seedkit.toml")).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = load("");

        std::env::set_var("SEEDKIT_LANGUAGE", "es");
        std::env::set_var("SEEDKIT_WORD_COUNT", "18");
        std::env::set_var("SEEDKIT_NETWORK", "signet");
        std::env::set_var("SEEDKIT_PASSPHRASE", "TREZOR");

        let result = config.apply_env_overrides();

        std::env::remove_var("SEEDKIT_LANGUAGE");
        std::env::remove_var("SEEDKIT_WORD_COUNT");
        std::env::remove_var("SEEDKIT_NETWORK");
        std::env::remove_var("SEEDKIT_PASSPHRASE");

        result.unwrap();
        assert_eq!(config.wallet.language, Language::Spanish);
        assert_eq!(config.wallet.word_count, 18);
        assert_eq!(config.wallet.network, Network::Test);
        assert_eq!(config.wallet.passphrase.as_deref(), Some("TREZOR"));
    }

    #[test]
    fn test_passphrase_not_read_from_file() {
        let config = load("[wallet]\npassphrase = \"TREZOR\"\n");
        assert_eq!(config.wallet.passphrase, None);

        let mut config = config;
        config.wallet.passphrase = Some("TREZOR".into());
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert!(!serialized.contains("TREZOR"));
    }

    #[test]
    fn test_validation_bad_word_count() {
        let config = load("[wallet]\nword_count = 13\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_log_level() {
        let config = load("[logging]\nlog_level = \"loud\"\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = load(full_toml());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let reparsed: SeedkitConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.wallet.language, config.wallet.language);
        assert_eq!(reparsed.wallet.network, config.wallet.network);
        assert_eq!(reparsed.wallet.word_count, 24);
    }
}
