//! Supported wordlist languages

use crate::MnemonicError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ASCII space, the separator for every language except Japanese.
pub const ASCII_SPACE: char = ' ';

/// Ideographic space (U+3000), the Japanese separator.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// A BIP-39 wordlist language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    Japanese,
    Korean,
    Spanish,
    ChineseSimplified,
    ChineseTraditional,
    French,
    Italian,
    Czech,
    Portuguese,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::Spanish,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::French,
        Language::Italian,
        Language::Czech,
        Language::Portuguese,
    ];

    /// Canonical separator placed between words of a phrase
    pub fn separator(self) -> char {
        match self {
            Language::Japanese => IDEOGRAPHIC_SPACE,
            _ => ASCII_SPACE,
        }
    }

    /// Lowercase tag used in config files and on the command line
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Spanish => "spanish",
            Language::ChineseSimplified => "chinese-simplified",
            Language::ChineseTraditional => "chinese-traditional",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Czech => "czech",
            Language::Portuguese => "portuguese",
        }
    }

    /// Static word table shipped by the `bip39` crate
    pub(crate) fn source_words(self) -> &'static [&'static str; 2048] {
        let lang = match self {
            Language::English => bip39::Language::English,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::Spanish => bip39::Language::Spanish,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Czech => bip39::Language::Czech,
            Language::Portuguese => bip39::Language::Portuguese,
        };
        lang.word_list()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase().replace('_', "-");
        match tag.as_str() {
            "english" | "en" => Ok(Language::English),
            "japanese" | "ja" => Ok(Language::Japanese),
            "korean" | "ko" => Ok(Language::Korean),
            "spanish" | "es" => Ok(Language::Spanish),
            "chinese-simplified" | "simplified-chinese" | "zh-hans" => {
                Ok(Language::ChineseSimplified)
            }
            "chinese-traditional" | "traditional-chinese" | "zh-hant" => {
                Ok(Language::ChineseTraditional)
            }
            "french" | "fr" => Ok(Language::French),
            "italian" | "it" => Ok(Language::Italian),
            "czech" | "cs" => Ok(Language::Czech),
            "portuguese" | "pt" => Ok(Language::Portuguese),
            _ => Err(MnemonicError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        assert_eq!(Language::Japanese.separator(), '\u{3000}');
        for lang in Language::ALL {
            if lang != Language::Japanese {
                assert_eq!(lang.separator(), ' ');
            }
        }
    }

    #[test]
    fn test_tag_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(lang.tag().parse::<Language>().unwrap(), lang);
            assert_eq!(lang.to_string(), lang.tag());
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!(
            "simplified_chinese".parse::<Language>().unwrap(),
            Language::ChineseSimplified
        );
        assert_eq!(" japanese ".parse::<Language>().unwrap(), Language::Japanese);
    }

    #[test]
    fn test_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(err, MnemonicError::UnknownLanguage("klingon".into()));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_source_words_are_full_tables() {
        for lang in Language::ALL {
            assert_eq!(lang.source_words().len(), 2048);
        }
        assert_eq!(Language::English.source_words()[0], "abandon");
        assert_eq!(Language::English.source_words()[2047], "zoo");
    }
}
