//! Data-driven battle content and loaders.
//!
//! This crate houses the "already parsed records" side of the engine
//! boundary: RON loaders that turn data files into catalog registries, and a
//! small sample content set used by tests and demos. Content is consumed by
//! `battle-core` catalogs and never appears in battle state.
//!
//! Load failures here are fatal startup errors (`anyhow`), surfaced before
//! any battle begins; the engine itself assumes catalogs are validated.

#[cfg(feature = "loaders")]
pub mod loaders;

pub mod sample;

#[cfg(feature = "loaders")]
pub use loaders::{ItemLoader, SpellLoader, StatusLoader, load_catalogs};
