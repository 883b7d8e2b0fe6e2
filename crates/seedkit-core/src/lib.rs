//! Seedkit Core
//!
//! BIP-39 mnemonic codes and BIP-32 master key derivation.
//!
//! # Pipeline
//!
//! ```text
//! entropy ──encode──▶ phrase ──PBKDF2──▶ seed ──HMAC──▶ (private key, chain code)
//!         ◀─decode───
//! ```
//!
//! - Wordlists for all ten BIP-39 languages, validated once at first use
//! - NFKD normalization with per-language separators (U+3000 for Japanese)
//! - Checksummed entropy <-> phrase codec
//! - PBKDF2-HMAC-SHA512 seed stretching
//! - `HMAC-SHA512("Bitcoin seed", seed)` master key with range check
//!
//! # Example
//!
//! ```
//! use seedkit_core::{Language, Mnemonic, MasterKey, Network};
//!
//! let entropy = [0u8; 16];
//! let mnemonic = Mnemonic::from_entropy(&entropy, Language::English).unwrap();
//! assert_eq!(
//!     mnemonic.phrase(),
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//!
//! let master = MasterKey::from_mnemonic(&mnemonic, "TREZOR").unwrap();
//! assert!(master.to_xpriv(Network::Main).starts_with("xprv"));
//! ```

pub mod codec;
pub mod keys;
pub mod language;
pub mod mnemonic;
pub mod normalize;
pub mod seed;
pub mod wordlist;
pub mod xkey;

pub use keys::{derive_master, MasterKey};
pub use language::Language;
pub use mnemonic::{Mnemonic, DEFAULT_WORD_COUNT};
pub use seed::{to_seed, Seed};
pub use wordlist::{Registry, Wordlist};
pub use xkey::Network;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid entropy length: {0} bytes (expected 16, 20, 24, 28 or 32)")]
    InvalidEntropyLength(usize),
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error("Phrase matches several languages: {0:?}")]
    AmbiguousLanguage(Vec<Language>),
    #[error("No wordlist contains any word of the phrase")]
    LanguageNotDetected,
    #[error("Invalid {language} wordlist: {reason}")]
    InvalidWordlist { language: Language, reason: String },
    #[error("Invalid word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),
    #[error("Invalid word: {0}")]
    InvalidWord(String),
    #[error("Checksum mismatch")]
    ChecksumMismatch,
    #[error("Derived master key is outside the curve order")]
    InvalidMasterKey,
    #[error("Random source failed: {0}")]
    RandomSource(String),
}

impl MnemonicError {
    /// Malformed user input (typos, truncated phrases, wrong sizes)
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidEntropyLength(_)
                | Self::InvalidWordCount(_)
                | Self::InvalidWord(_)
                | Self::ChecksumMismatch
                | Self::AmbiguousLanguage(_)
                | Self::LanguageNotDetected
        )
    }

    /// Bad configuration or reference data
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownLanguage(_) | Self::InvalidWordlist { .. })
    }

    /// Cryptographic edge case; regenerate entropy upstream
    pub fn is_cryptographic(&self) -> bool {
        matches!(self, Self::InvalidMasterKey)
    }
}

pub type Result<T> = std::result::Result<T, MnemonicError>;
