//! BIP-39 wordlists and the process-wide registry
//!
//! Each [`Wordlist`] holds exactly 2048 distinct words, stored composed (NFC)
//! so encoded phrases read as published. Lookups go through a hash map keyed
//! by the NFKD form of each word, so phrases typed with composed or
//! decomposed characters resolve to the same index.
//!
//! The global [`Registry`] is built on first use from the `bip39` crate's
//! static tables and never mutated afterwards.

use crate::language::Language;
use crate::{MnemonicError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Number of words in every BIP-39 wordlist (2^11)
pub const WORDLIST_SIZE: usize = 2048;

static GLOBAL: OnceLock<Result<Registry>> = OnceLock::new();

/// An ordered list of 2048 unique words for one language
#[derive(Debug, Clone)]
pub struct Wordlist {
    language: Language,
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Build and validate a wordlist.
    ///
    /// Fails with [`MnemonicError::InvalidWordlist`] on a wrong count, an
    /// empty entry, or duplicates (compared after NFKD).
    pub fn new<I, S>(language: Language, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| {
                let w: String = w.into();
                w.nfc().collect()
            })
            .collect();
        if words.len() != WORDLIST_SIZE {
            return Err(invalid(
                language,
                format!("expected {} words, found {}", WORDLIST_SIZE, words.len()),
            ));
        }

        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in words.iter().enumerate() {
            let key: String = word.nfkd().collect();
            if key.is_empty() || key.chars().any(char::is_whitespace) {
                return Err(invalid(language, format!("malformed entry at index {}", i)));
            }
            if index.insert(key, i as u16).is_some() {
                return Err(invalid(language, format!("duplicate word '{}'", word)));
            }
        }

        Ok(Self {
            language,
            words,
            index,
        })
    }

    /// Load the built-in table for `language`
    pub fn builtin(language: Language) -> Result<Self> {
        Self::new(language, language.source_words().iter().copied())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Word at an 11-bit index
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /// Index of `word`, which may be in any Unicode normalization form
    pub fn index_of(&self, word: &str) -> Result<u16> {
        let key: String = word.nfkd().collect();
        self.index
            .get(&key)
            .copied()
            .ok_or_else(|| MnemonicError::InvalidWord(word.to_string()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_ok()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn invalid(language: Language, reason: String) -> MnemonicError {
    log::warn!("Rejected {} wordlist: {}", language, reason);
    MnemonicError::InvalidWordlist { language, reason }
}

/// Immutable set of wordlists, one per language
#[derive(Debug, Clone)]
pub struct Registry {
    lists: Vec<Wordlist>,
}

impl Registry {
    /// Assemble a registry from caller-supplied wordlists.
    ///
    /// A language may only be registered once.
    pub fn from_wordlists(lists: Vec<Wordlist>) -> Result<Self> {
        for (i, list) in lists.iter().enumerate() {
            if lists[..i].iter().any(|l| l.language == list.language) {
                return Err(MnemonicError::InvalidWordlist {
                    language: list.language,
                    reason: "language registered twice".into(),
                });
            }
        }
        Ok(Self { lists })
    }

    /// Load every built-in language
    pub fn load() -> Result<Self> {
        let lists = Language::ALL
            .iter()
            .map(|&lang| Wordlist::builtin(lang))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Loaded {} BIP-39 wordlists", lists.len());
        Self::from_wordlists(lists)
    }

    /// The process-wide registry, loaded on first call.
    ///
    /// A load failure is remembered and returned on every call.
    pub fn global() -> Result<&'static Registry> {
        GLOBAL.get_or_init(Registry::load).as_ref().map_err(|e| e.clone())
    }

    pub fn get(&self, language: Language) -> Result<&Wordlist> {
        self.lists
            .iter()
            .find(|l| l.language == language)
            .ok_or_else(|| MnemonicError::UnknownLanguage(language.to_string()))
    }

    pub fn index_of(&self, language: Language, word: &str) -> Result<u16> {
        self.get(language)?.index_of(word)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.lists.iter().map(|l| l.language)
    }

    /// Find the single language whose wordlist contains every word.
    pub fn detect<S: AsRef<str>>(&self, words: &[S]) -> Result<Language> {
        if words.is_empty() {
            return Err(MnemonicError::InvalidWordCount(0));
        }

        let matches: Vec<Language> = self
            .lists
            .iter()
            .filter(|list| words.iter().all(|w| list.contains(w.as_ref())))
            .map(|list| list.language)
            .collect();

        match matches.as_slice() {
            [] => Err(MnemonicError::LanguageNotDetected),
            [lang] => Ok(*lang),
            _ => Err(MnemonicError::AmbiguousLanguage(matches)),
        }
    }

    /// The language sharing the most words with a phrase.
    ///
    /// Ties go to a list holding the first word, then to registry order.
    /// `None` when no word is in any list.
    pub fn closest<S: AsRef<str>>(&self, words: &[S]) -> Option<Language> {
        let first = words.first()?.as_ref();
        let mut best: Option<((usize, bool), Language)> = None;
        for list in &self.lists {
            let hits = words.iter().filter(|w| list.contains(w.as_ref())).count();
            if hits == 0 {
                continue;
            }
            let score = (hits, list.contains(first));
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, list.language));
            }
        }
        best.map(|(_, language)| language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{:04}", i)).collect()
    }

    #[test]
    fn test_global_registry_has_all_languages() {
        let registry = Registry::global().unwrap();
        for lang in Language::ALL {
            let list = registry.get(lang).unwrap();
            assert_eq!(list.words().count(), WORDLIST_SIZE);
        }
    }

    #[test]
    fn test_lookup_both_directions() {
        let registry = Registry::global().unwrap();
        let english = registry.get(Language::English).unwrap();
        assert_eq!(english.word(0), Some("abandon"));
        assert_eq!(english.word(3), Some("about"));
        assert_eq!(english.word(2048), None);
        assert_eq!(registry.index_of(Language::English, "zoo").unwrap(), 2047);
        assert_eq!(
            registry.index_of(Language::English, "zzz"),
            Err(MnemonicError::InvalidWord("zzz".into()))
        );
    }

    #[test]
    fn test_lookup_ignores_normalization_form() {
        let spanish = Wordlist::builtin(Language::Spanish).unwrap();
        let composed = spanish.word(0).unwrap().to_string();
        let decomposed: String = composed.nfkd().collect();
        assert_eq!(spanish.index_of(&decomposed).unwrap(), 0);
        let recomposed: String = composed.nfc().collect();
        assert_eq!(spanish.index_of(&recomposed).unwrap(), 0);
    }

    #[test]
    fn test_wrong_count_rejected() {
        let err = Wordlist::new(Language::English, numbered_words(2047)).unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidWordlist { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut words = numbered_words(WORDLIST_SIZE);
        words[100] = words[7].clone();
        let err = Wordlist::new(Language::English, words).unwrap_err();
        match err {
            MnemonicError::InvalidWordlist { reason, .. } => assert!(reason.contains("w0007")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_normalization_duplicates_rejected() {
        let mut words = numbered_words(WORDLIST_SIZE);
        words[0] = "caf\u{e9}".into();
        words[1] = "cafe\u{301}".into();
        assert!(Wordlist::new(Language::French, words).is_err());
    }

    #[test]
    fn test_custom_registry_unknown_language() {
        let list = Wordlist::new(Language::English, numbered_words(WORDLIST_SIZE)).unwrap();
        let registry = Registry::from_wordlists(vec![list]).unwrap();
        assert_eq!(registry.index_of(Language::English, "w2047").unwrap(), 2047);
        assert_eq!(
            registry.get(Language::Japanese).unwrap_err(),
            MnemonicError::UnknownLanguage("japanese".into())
        );
    }

    #[test]
    fn test_registry_rejects_duplicate_language() {
        let a = Wordlist::new(Language::Czech, numbered_words(WORDLIST_SIZE)).unwrap();
        let b = a.clone();
        assert!(Registry::from_wordlists(vec![a, b]).is_err());
    }

    #[test]
    fn test_detect() {
        let registry = Registry::global().unwrap();
        assert_eq!(
            registry.detect(&["zoo", "wrong"]).unwrap(),
            Language::English
        );
        assert_eq!(
            registry.detect(&["あいこくしん", "あおぞら"]).unwrap(),
            Language::Japanese
        );
        assert_eq!(
            registry.detect(&["zoo", "あおぞら"]),
            Err(MnemonicError::LanguageNotDetected)
        );
    }

    #[test]
    fn test_closest() {
        let registry = Registry::global().unwrap();
        assert_eq!(
            registry.closest(&["legal", "winner", "yelow"]),
            Some(Language::English)
        );
        // One hit each; the list holding the first word wins
        assert_eq!(registry.closest(&["zoo", "あおぞら"]), Some(Language::English));
        assert_eq!(registry.closest(&["あおぞら", "zoo"]), Some(Language::Japanese));
        assert_eq!(registry.closest(&["xyzzy", "plugh"]), None);
        assert_eq!(registry.closest::<&str>(&[]), None);
    }

    #[test]
    fn test_words_stored_composed() {
        let japanese = Wordlist::builtin(Language::Japanese).unwrap();
        // あおぞら with precomposed ぞ (U+305E)
        assert_eq!(japanese.word(3), Some("\u{3042}\u{304A}\u{305E}\u{3089}"));
        assert_eq!(japanese.index_of("\u{3042}\u{304A}\u{305D}\u{3099}\u{3089}").unwrap(), 3);
    }

    #[test]
    fn test_detect_ambiguous() {
        // "abandon" appears in both the English and French lists
        let registry = Registry::global().unwrap();
        match registry.detect(&["abandon"]) {
            Err(MnemonicError::AmbiguousLanguage(langs)) => {
                assert!(langs.contains(&Language::English));
                assert!(langs.contains(&Language::French));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
