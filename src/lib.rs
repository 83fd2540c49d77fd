//! Backend scaffold for the Forsa job platform.
//!
//! The crate is organized in three layers:
//!
//! - [`i18n`]: the supported-language registry and per-field translation
//!   maps, with English-first fallback resolution
//! - [`entity`]: capability values (id, timestamps, soft delete) and the
//!   [`Translatable`](entity::Translatable) trait entities implement for
//!   multilingual fields
//! - [`config`] and [`server`]: environment-driven settings and the axum
//!   HTTP surface (banner and health endpoints)
//!
//! The binary in `src/main.rs` wires the three together; everything else is
//! usable as a library.

pub mod config;
pub mod entity;
pub mod i18n;
pub mod server;
