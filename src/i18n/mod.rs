//! Internationalization (i18n) module for multilingual content.
//!
//! The platform stores user-visible text per language rather than as a
//! single string. This module owns everything language-related: the fixed
//! supported-language set, the validated `Language` type, and the per-field
//! `TranslationMap` that entities embed for each multilingual attribute.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for the supported languages and
//!   their metadata (default flag, RTL flag, names)
//! - `language`: validated `Language` value type keyed off the registry
//! - `translations`: `TranslationMap`, the per-field language-to-text store
//!   with fallback-aware resolution
//! - `error`: the `TranslationError` kinds raised by writes and field lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use forsa_backend::i18n::{Language, TranslationMap};
//!
//! let mut title = TranslationMap::new();
//! title.insert(Language::ENGLISH, "Software Engineer");
//! assert_eq!(title.resolve("ar", "en"), Some("Software Engineer"));
//! ```

mod error;
mod language;
mod registry;
mod translations;

pub use error::TranslationError;
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use translations::TranslationMap;
