//! Target language validation.
//!
//! A target language is accepted only if it is a bare two-letter ISO 639-1
//! code. Validation happens once, before any translation work begins.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::Error;

lazy_static! {
    static ref CODE_SHAPE_REGEX: Regex = Regex::new(r"^[A-Za-z]{2}$").unwrap();
}

/// Every two-letter code assigned in ISO 639-1, sorted for binary search.
static ISO_639_1_CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Checks whether `code` is an assigned ISO 639-1 two-letter code.
///
/// The check is case-sensitive; codes are lowercase per ISO 639-1.
pub fn is_iso_639_1(code: &str) -> bool {
    ISO_639_1_CODES.binary_search(&code).is_ok()
}

/// A validated ISO 639-1 target language code.
///
/// Construction normalizes the code to lowercase and rejects anything
/// that is not an assigned two-letter code, so holders of a
/// `TargetLanguage` never need to re-validate. Serializes as the plain
/// code string; deserialization runs the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetLanguage(String);

impl TargetLanguage {
    /// The validated, lowercase language code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl FromStr for TargetLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !CODE_SHAPE_REGEX.is_match(trimmed) {
            return Err(Error::InvalidLanguage(s.to_string()));
        }

        // Normalizes case ("UK" -> "uk") and rejects malformed subtags.
        let identifier: LanguageIdentifier = trimmed
            .parse()
            .map_err(|_| Error::InvalidLanguage(s.to_string()))?;
        let code = identifier.language.as_str().to_string();

        if !is_iso_639_1(&code) {
            return Err(Error::InvalidLanguage(s.to_string()));
        }

        Ok(TargetLanguage(code))
    }
}

impl TryFrom<String> for TargetLanguage {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetLanguage> for String {
    fn from(lang: TargetLanguage) -> String {
        lang.0
    }
}

impl Display for TargetLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_table_is_sorted() {
        let mut sorted = ISO_639_1_CODES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ISO_639_1_CODES);
    }

    #[test]
    fn test_valid_codes() {
        for code in ["en", "uk", "fr", "de", "zh", "ja", "pt"] {
            let lang: TargetLanguage = code.parse().unwrap();
            assert_eq!(lang.code(), code);
        }
    }

    #[test]
    fn test_uppercase_is_normalized() {
        let lang: TargetLanguage = "UK".parse().unwrap();
        assert_eq!(lang.code(), "uk");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let lang: TargetLanguage = " uk ".parse().unwrap();
        assert_eq!(lang.code(), "uk");
    }

    #[test]
    fn test_unassigned_code_is_rejected() {
        let error = "zz".parse::<TargetLanguage>().unwrap_err();
        assert!(matches!(error, Error::InvalidLanguage(code) if code == "zz"));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        for code in ["", "e", "eng", "en-US", "e1", "u k"] {
            assert!(code.parse::<TargetLanguage>().is_err(), "accepted {code:?}");
        }
    }

    #[test]
    fn test_display() {
        let lang: TargetLanguage = "uk".parse().unwrap();
        assert_eq!(lang.to_string(), "uk");
    }

    #[test]
    fn test_serde_roundtrip() {
        let lang: TargetLanguage = "uk".parse().unwrap();
        let json = serde_json::to_string(&lang).unwrap();
        assert_eq!(json, "\"uk\"");
        let back: TargetLanguage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lang);
    }

    #[test]
    fn test_serde_rejects_invalid_code() {
        assert!(serde_json::from_str::<TargetLanguage>("\"zz\"").is_err());
    }

    #[test]
    fn test_is_iso_639_1() {
        assert!(is_iso_639_1("uk"));
        assert!(!is_iso_639_1("zz"));
        assert!(!is_iso_639_1("UK"));
    }
}
