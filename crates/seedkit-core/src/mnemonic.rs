//! Mnemonic value type
//!
//! A [`Mnemonic`] pairs entropy with its canonical phrase in one language.
//! It is built once (from entropy, from a phrase, or from a random source)
//! and never changes afterwards.

use crate::codec::{self, word_count_for};
use crate::language::Language;
use crate::normalize::split_words;
use crate::seed::{self, Seed};
use crate::wordlist::Registry;
use crate::{MnemonicError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Word count used by [`Mnemonic::generate`] (128 bits of entropy)
pub const DEFAULT_WORD_COUNT: usize = 12;

/// A checksummed BIP-39 mnemonic
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    #[zeroize(skip)]
    language: Language,
    entropy: Vec<u8>,
    phrase: String,
}

impl Mnemonic {
    /// Encode `entropy` (16, 20, 24, 28 or 32 bytes) in `language`
    pub fn from_entropy(entropy: &[u8], language: Language) -> Result<Self> {
        let wordlist = Registry::global()?.get(language)?;
        let phrase = codec::encode(entropy, wordlist)?;
        Ok(Self {
            language,
            entropy: entropy.to_vec(),
            phrase,
        })
    }

    /// Parse a phrase in a known language.
    ///
    /// Whitespace and Unicode form are normalized first; the stored phrase is
    /// the canonical spelling joined by the language's separator.
    pub fn from_phrase_in(language: Language, phrase: &str) -> Result<Self> {
        let wordlist = Registry::global()?.get(language)?;
        let mut entropy = codec::decode(phrase, wordlist)?;
        let mnemonic = Self::from_entropy(&entropy, language);
        entropy.zeroize();
        mnemonic
    }

    /// Parse a phrase, detecting its language.
    ///
    /// When no wordlist holds every word, the phrase is decoded in the
    /// closest language so a typo comes back as [`MnemonicError::InvalidWord`];
    /// [`MnemonicError::LanguageNotDetected`] means no word is known at all.
    /// When several wordlists hold every word, the one whose checksum
    /// verifies wins; if that still leaves more than one, the result is
    /// [`MnemonicError::AmbiguousLanguage`].
    pub fn from_phrase(phrase: &str) -> Result<Self> {
        let words = split_words(phrase);
        codec::entropy_len_for(words.len())?;

        let registry = Registry::global()?;
        let candidates = match registry.detect(&words) {
            Ok(language) => return Self::from_phrase_in(language, phrase),
            Err(MnemonicError::AmbiguousLanguage(candidates)) => candidates,
            Err(MnemonicError::LanguageNotDetected) => {
                return match registry.closest(&words) {
                    Some(language) => Self::from_phrase_in(language, phrase),
                    None => Err(MnemonicError::LanguageNotDetected),
                };
            }
            Err(e) => return Err(e),
        };

        let mut decoded: Vec<Self> = candidates
            .iter()
            .filter_map(|&language| Self::from_phrase_in(language, phrase).ok())
            .collect();
        match decoded.len() {
            0 => Err(MnemonicError::ChecksumMismatch),
            1 => Ok(decoded.remove(0)),
            _ => Err(MnemonicError::AmbiguousLanguage(
                decoded.iter().map(|m| m.language).collect(),
            )),
        }
    }

    /// Generate a 12-word mnemonic from the operating system's CSPRNG
    pub fn generate(language: Language) -> Result<Self> {
        Self::generate_with(&mut OsRng, language, DEFAULT_WORD_COUNT)
    }

    /// Generate a mnemonic of `word_count` words from an injected random source
    pub fn generate_with<R>(rng: &mut R, language: Language, word_count: usize) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let len = codec::entropy_len_for(word_count)?;
        let mut entropy = vec![0u8; len];
        rng.try_fill_bytes(&mut entropy)
            .map_err(|e| MnemonicError::RandomSource(e.to_string()))?;
        log::debug!("Generated {}-word {} mnemonic", word_count, language);

        let mnemonic = Self::from_entropy(&entropy, language);
        entropy.zeroize();
        mnemonic
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// Canonical phrase, words joined by the language separator
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(self.language.separator())
    }

    pub fn word_count(&self) -> usize {
        // entropy length is validated at construction
        word_count_for(self.entropy.len()).unwrap_or(0)
    }

    /// Stretch into a 64-byte seed; use `""` for no passphrase
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        seed::to_seed(&self.phrase, passphrase)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language)
            .field("words", &self.word_count())
            .finish_non_exhaustive()
    }
}

impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_phrase(s)
    }
}
