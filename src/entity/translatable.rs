//! Translatable field access for entities.
//!
//! Entities with multilingual attributes embed one [`TranslationMap`] per
//! translatable field and expose them through the [`Translatable`] trait.
//! The trait requires only the two field accessors; every operation (read
//! with fallback, validated write, language introspection) is a provided
//! method built on top of them.

use crate::i18n::{Language, TranslationError, TranslationMap};

/// Typed, validated access to the multilingual fields of an entity.
///
/// Implementors enumerate their translatable fields in the two accessor
/// methods; the field set is closed and known at compile time, so "does
/// this field exist" is a `match`, not reflection:
///
/// ```rust,ignore
/// impl Translatable for JobPosting {
///     fn translations(&self, field: &str) -> Option<&TranslationMap> {
///         match field {
///             "title" => Some(&self.title),
///             "description" => Some(&self.description),
///             _ => None,
///         }
///     }
///
///     fn translations_mut(&mut self, field: &str) -> Option<&mut TranslationMap> {
///         match field {
///             "title" => Some(&mut self.title),
///             "description" => Some(&mut self.description),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// The provided methods hold the component's contract: reads never fail on
/// missing translations (absence is `Ok(None)`), writes validate the
/// language against the supported set, and an unrecognized field name is
/// the only way to get `FieldNotFound`. Exclusive mutation is enforced by
/// `&mut self`; concurrent writers must be serialized by the caller, the
/// same way the persistence layer serializes row updates.
pub trait Translatable {
    /// The translation map for a field, or `None` if the entity has no such
    /// translatable field.
    fn translations(&self, field: &str) -> Option<&TranslationMap>;

    /// Mutable variant of [`translations`](Self::translations); same field
    /// set.
    fn translations_mut(&mut self, field: &str) -> Option<&mut TranslationMap>;

    /// Get a field's text in the requested language, falling back to the
    /// default language (en).
    ///
    /// Shorthand for [`Self::translation_with_fallback`] with the default
    /// language as fallback.
    fn translation(&self, field: &str, lang: &str) -> Result<Option<&str>, TranslationError> {
        self.translation_with_fallback(field, lang, Language::default().code())
    }

    /// Get a field's text in the requested language with an explicit
    /// fallback language.
    ///
    /// Resolution order: the requested language, then the fallback, then
    /// the populated entry with the lowest language code, then `Ok(None)`
    /// for a field with no translations at all. Requested and fallback
    /// codes may be arbitrary strings; unknown codes simply never match.
    /// Pure read.
    ///
    /// # Errors
    /// `FieldNotFound` if `field` is not a translatable field of the
    /// entity.
    fn translation_with_fallback(
        &self,
        field: &str,
        lang: &str,
        fallback: &str,
    ) -> Result<Option<&str>, TranslationError> {
        let map = self
            .translations(field)
            .ok_or_else(|| TranslationError::FieldNotFound(field.to_string()))?;
        Ok(map.resolve(lang, fallback))
    }

    /// Set a field's text for a language, overwriting any existing entry.
    ///
    /// After a successful call, `translation_with_fallback(field, lang,
    /// lang)` returns exactly `value`. Mutates only the named field's map;
    /// persisting the change is the caller's responsibility.
    ///
    /// # Errors
    /// `FieldNotFound` if the field is unrecognized (checked first);
    /// `UnsupportedLanguage` if `lang` is outside the supported set.
    fn set_translation(
        &mut self,
        field: &str,
        lang: &str,
        value: &str,
    ) -> Result<(), TranslationError> {
        let map = self
            .translations_mut(field)
            .ok_or_else(|| TranslationError::FieldNotFound(field.to_string()))?;
        let lang = Language::from_code(lang)?;
        map.insert(lang, value);
        Ok(())
    }

    /// The languages actually populated for a field, ordered by code.
    ///
    /// This is what has been written for this one field, not the global
    /// supported set; a field with no translations yields an empty vec.
    ///
    /// # Errors
    /// `FieldNotFound` if the field is unrecognized.
    fn available_languages(&self, field: &str) -> Result<Vec<Language>, TranslationError> {
        let map = self
            .translations(field)
            .ok_or_else(|| TranslationError::FieldNotFound(field.to_string()))?;
        Ok(map.languages().collect())
    }
}
