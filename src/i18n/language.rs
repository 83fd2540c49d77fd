//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for codes in the supported set, so
//! any value of this type is known-good. It is the key type of translation
//! maps, which makes the "every stored key is supported" invariant hold by
//! construction, including across deserialization.

use std::cmp::Ordering;
use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::i18n::{LanguageConfig, LanguageRegistry, TranslationError};

/// A validated language from the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fa")
    code: &'static str,
}

impl Language {
    /// English, the default language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Persian (Farsi), right-to-left.
    pub const PERSIAN: Language = Language { code: "fa" };

    /// Arabic, right-to-left.
    pub const ARABIC: Language = Language { code: "ar" };

    /// Turkish.
    pub const TURKISH: Language = Language { code: "tr" };

    /// Create a `Language` from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the supported set
    /// * `Err(TranslationError::UnsupportedLanguage)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let persian = Language::from_code("fa")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, TranslationError> {
        match LanguageRegistry::get().get_by_code(code) {
            // Use the static str from the registry
            Some(config) => Ok(Language { code: config.code }),
            None => Err(TranslationError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// properly constructed `Language` (via `from_code` or the constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "Persian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "فارسی").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Check if the language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.config().rtl
    }

    /// All supported languages, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }
}

/// The default language (English).
impl Default for Language {
    fn default() -> Self {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }
}

/// Languages order by code, so ordered collections keyed by `Language`
/// iterate lexicographically (ar, en, fa, tr).
impl Ord for Language {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(other.code)
    }
}

impl PartialOrd for Language {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Serializes as the bare code string ("en"), which also makes `Language`
/// usable as a JSON object key.
impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Deserializes from a code string, rejecting codes outside the supported
/// set so decoded data upholds the same invariant as constructed data.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_default());
        assert!(!english.is_rtl());
    }

    #[test]
    fn test_persian_constant() {
        let persian = Language::PERSIAN;
        assert_eq!(persian.code(), "fa");
        assert_eq!(persian.name(), "Persian");
        assert!(!persian.is_default());
        assert!(persian.is_rtl());
    }

    #[test]
    fn test_arabic_constant() {
        let arabic = Language::ARABIC;
        assert_eq!(arabic.code(), "ar");
        assert_eq!(arabic.name(), "Arabic");
        assert!(arabic.is_rtl());
    }

    #[test]
    fn test_turkish_constant() {
        let turkish = Language::TURKISH;
        assert_eq!(turkish.code(), "tr");
        assert_eq!(turkish.name(), "Turkish");
        assert!(!turkish.is_rtl());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_supported() {
        for (code, expected) in [
            ("en", Language::ENGLISH),
            ("fa", Language::PERSIAN),
            ("ar", Language::ARABIC),
            ("tr", Language::TURKISH),
        ] {
            assert_eq!(Language::from_code(code).expect("supported"), expected);
        }
    }

    #[test]
    fn test_from_code_unsupported() {
        let result = Language::from_code("de");
        assert_eq!(
            result,
            Err(TranslationError::UnsupportedLanguage("de".to_string()))
        );
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_case_sensitive() {
        // Codes are lowercase; "EN" is not a supported code
        assert!(Language::from_code("EN").is_err());
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_ordering_is_lexicographic_by_code() {
        let mut langs = vec![
            Language::TURKISH,
            Language::ENGLISH,
            Language::PERSIAN,
            Language::ARABIC,
        ];
        langs.sort();

        let codes: Vec<_> = langs.iter().map(Language::code).collect();
        assert_eq!(codes, vec!["ar", "en", "fa", "tr"]);
    }

    // ==================== all() Tests ====================

    #[test]
    fn test_all_returns_registry_order() {
        let codes: Vec<_> = Language::all().iter().map(Language::code).collect();
        assert_eq!(codes, vec!["en", "fa", "ar", "tr"]);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        assert_eq!(Language::ENGLISH, Language::from_code("en").unwrap());
        assert_ne!(Language::ENGLISH, Language::PERSIAN);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::ARABIC;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::PERSIAN.to_string(), "fa");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&Language::ARABIC).expect("serialize");
        assert_eq!(json, r#""ar""#);
    }

    #[test]
    fn test_deserialize_from_code() {
        let lang: Language = serde_json::from_str(r#""tr""#).expect("deserialize");
        assert_eq!(lang, Language::TURKISH);
    }

    #[test]
    fn test_deserialize_rejects_unsupported_code() {
        let result: Result<Language, _> = serde_json::from_str(r#""de""#);
        let err = result.expect_err("should reject").to_string();
        assert!(err.contains("not supported"), "unexpected error: {err}");
    }
}
