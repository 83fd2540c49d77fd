//! Translation map: per-field multilingual text storage.
//!
//! Each translatable field of an entity owns one `TranslationMap`, a mapping
//! from supported language to text. The map is plain in-memory data; the
//! persistence layer stores it as a JSON object (language code to text, or
//! absent) and hands it back before any of these operations run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::i18n::{Language, TranslationError};

/// Text content keyed by language for a single translatable field.
///
/// Keys are validated `Language` values, so every stored entry belongs to
/// the supported set, also after deserialization, which rejects unknown
/// codes. Entries are inserted or overwritten, never individually removed;
/// a field disappears only with its owning entity.
///
/// The map is ordered by language code. When a lookup falls through to the
/// any-available-translation step, the entry with the lowest code wins,
/// which keeps that step deterministic across process restarts and
/// round-trips through storage.
///
/// A fresh map is empty; reads on an empty map yield `None` rather than an
/// error. On the wire an empty map and an absent field are the same thing
/// (owning entities skip empty maps when serializing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap {
    entries: BTreeMap<Language, String>,
}

impl TranslationMap {
    /// Create an empty translation map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text for exactly the given language code.
    ///
    /// The code may be any string; codes outside the supported set simply
    /// have no entry. No fallback is applied; see [`resolve`](Self::resolve).
    pub fn get(&self, code: &str) -> Option<&str> {
        let lang = Language::from_code(code).ok()?;
        self.entries.get(&lang).map(String::as_str)
    }

    /// Resolve the text for a requested language with fallback.
    ///
    /// Lookup order:
    /// 1. the requested language,
    /// 2. the fallback language,
    /// 3. the populated entry with the lowest language code,
    /// 4. `None` if the map is empty.
    ///
    /// Both codes may be arbitrary strings; unknown codes never match and
    /// never fail. Pure read.
    pub fn resolve(&self, code: &str, fallback: &str) -> Option<&str> {
        self.get(code)
            .or_else(|| self.get(fallback))
            .or_else(|| self.entries.values().next().map(String::as_str))
    }

    /// Insert or overwrite the text for a language.
    ///
    /// Returns the previous text if the language was already populated.
    pub fn insert(&mut self, lang: Language, value: impl Into<String>) -> Option<String> {
        self.entries.insert(lang, value.into())
    }

    /// The languages currently populated, ordered by code.
    ///
    /// This reflects what has actually been written, not the global
    /// supported set; an empty map yields an empty iterator.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over all populated entries, ordered by language code.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
        self.entries.iter().map(|(lang, text)| (*lang, text.as_str()))
    }

    /// Number of populated languages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no language is populated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a map from a raw JSON value (the shape the persistence layer
    /// stores and raw API endpoints accept).
    ///
    /// # Errors
    /// * `InvalidValue` if the value is not a JSON object, or if any entry
    ///   value is not a string
    /// * `UnsupportedLanguage` if any key is outside the supported set
    pub fn from_json_value(value: &Value) -> Result<Self, TranslationError> {
        let object = value.as_object().ok_or_else(|| {
            TranslationError::InvalidValue(format!(
                "expected a JSON object of language code to text, got {}",
                json_type_name(value)
            ))
        })?;

        let mut map = TranslationMap::new();
        for (code, text) in object {
            let lang = Language::from_code(code)?;
            let text = text.as_str().ok_or_else(|| {
                TranslationError::InvalidValue(format!(
                    "value for '{}' must be a string, got {}",
                    code,
                    json_type_name(text)
                ))
            })?;
            map.insert(lang, text);
        }
        Ok(map)
    }

    /// Render the map as a raw JSON object (language code to text).
    pub fn to_json_value(&self) -> Value {
        let mut object = serde_json::Map::new();
        for (lang, text) in &self.entries {
            object.insert(lang.code().to_string(), Value::String(text.clone()));
        }
        Value::Object(object)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
