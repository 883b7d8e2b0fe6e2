//! Phrase normalization
//!
//! Phrases are compared and stretched in NFKD form with every run of
//! whitespace collapsed to a single separator. Whatever a user pasted (tabs,
//! line breaks, doubled spaces, ideographic spaces) normalizes to the same
//! text.

use crate::language::{Language, ASCII_SPACE};
use unicode_normalization::UnicodeNormalization;

/// NFKD-normalize `raw` and collapse whitespace runs into `separator`.
///
/// Leading and trailing whitespace is dropped.
pub fn normalize(raw: &str, separator: char) -> String {
    let decomposed: String = raw.nfkd().collect();
    let mut out = String::with_capacity(decomposed.len());
    for word in decomposed.split(char::is_whitespace).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(separator);
        }
        out.push_str(word);
    }
    out
}

/// Normalize using the canonical separator of `language`.
pub fn normalize_in(raw: &str, language: Language) -> String {
    normalize(raw, language.separator())
}

/// Normalize for key stretching.
///
/// The NFKD image of U+3000 is U+0020, so every language stretches over
/// ASCII-space separated words.
pub fn normalize_for_seed(raw: &str) -> String {
    normalize(raw, ASCII_SPACE)
}

/// Passphrases are NFKD-normalized only; their whitespace is significant.
pub fn normalize_passphrase(raw: &str) -> String {
    raw.nfkd().collect()
}

/// Split a raw phrase into normalized words.
pub fn split_words(raw: &str) -> Vec<String> {
    let decomposed: String = raw.nfkd().collect();
    decomposed
        .split(char::is_whitespace)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
