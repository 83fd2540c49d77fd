//! Entity capability values.
//!
//! Small composable pieces that domain entities embed by value rather than
//! inherit:
//!
//! - [`EntityId`]: UUID identity, generated at construction
//! - [`Timestamps`]: creation and last-modification instants
//! - [`SoftDelete`]: reversible deletion marker
//! - [`Translatable`]: per-field multilingual text access
//!
//! A typical entity struct carries one of each plus a
//! [`TranslationMap`](crate::i18n::TranslationMap) per translatable field,
//! and implements [`Translatable`] with a `match` over its field names.

mod id;
mod soft_delete;
mod timestamps;
mod translatable;

pub use id::EntityId;
pub use soft_delete::SoftDelete;
pub use timestamps::Timestamps;
pub use translatable::Translatable;
