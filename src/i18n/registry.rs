//! Language registry: single source of truth for the supported languages.
//!
//! The platform serves a fixed, closed set of languages (English, Persian,
//! Arabic, Turkish). The registry holds their metadata and is initialized
//! once behind an `OnceLock`; it never changes at runtime.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "fa")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Persian")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "فارسی")
    pub native_name: &'static str,

    /// Whether this is the default language used as the fallback of choice
    /// (exactly one entry should be flagged)
    pub is_default: bool,

    /// Whether the language is written right-to-left
    pub rtl: bool,
}

/// Global language registry singleton.
///
/// Initialized lazily on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Returns `None` if the code is not in the supported set.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported languages, in registry order (en, fa, ar, tr).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default language is the substitute of choice when a requested
    /// translation is absent. There is exactly one.
    ///
    /// # Panics
    /// Panics if the registry defines zero or multiple default languages,
    /// which would be a configuration bug.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code belongs to the supported set.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Check if a language code denotes a right-to-left language.
    ///
    /// Total over all strings: unknown codes are simply not RTL, never an
    /// error.
    pub fn is_rtl(&self, code: &str) -> bool {
        self.get_by_code(code).map(|lang| lang.rtl).unwrap_or(false)
    }
}

/// The fixed supported-language set for the platform.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            rtl: false,
        },
        LanguageConfig {
            code: "fa",
            name: "Persian",
            native_name: "فارسی",
            is_default: false,
            rtl: true,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            is_default: false,
            rtl: true,
        },
        LanguageConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            is_default: false,
            rtl: false,
        },
    ]
}
