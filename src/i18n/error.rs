//! Error type for multilingual content operations.

use thiserror::Error;

/// Validation failures raised by translation reads and writes.
///
/// All variants are local validation errors raised synchronously at the call
/// site. None of them are transient: retrying an operation that produced one
/// is meaningless, and callers are expected to propagate them.
///
/// Note that a missing translation is *not* an error. Reads model absence as
/// `Ok(None)`; these variants only cover invalid inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The named field is not a translatable field of the entity. This is a
    /// programming error (field identifiers are a closed set per entity),
    /// not something expected during normal operation.
    #[error("field '{0}' is not a translatable field of this entity")]
    FieldNotFound(String),

    /// A write was attempted with a language code outside the fixed
    /// supported set.
    #[error("language '{0}' is not supported (supported: en, fa, ar, tr)")]
    UnsupportedLanguage(String),

    /// A write was attempted with a value that is not plain text. Only
    /// reachable through the JSON boundary; the typed API makes this
    /// unrepresentable.
    #[error("invalid translation value: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_not_found_message() {
        let err = TranslationError::FieldNotFound("salary".to_string());
        assert!(err.to_string().contains("salary"));
        assert!(err.to_string().contains("not a translatable field"));
    }

    #[test]
    fn test_unsupported_language_message() {
        let err = TranslationError::UnsupportedLanguage("de".to_string());
        assert!(err.to_string().contains("'de'"));
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = TranslationError::InvalidValue("value for 'en' is not a string".to_string());
        assert!(err.to_string().contains("invalid translation value"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            TranslationError::UnsupportedLanguage("de".to_string()),
            TranslationError::UnsupportedLanguage("de".to_string())
        );
        assert_ne!(
            TranslationError::FieldNotFound("title".to_string()),
            TranslationError::FieldNotFound("description".to_string())
        );
    }
}
