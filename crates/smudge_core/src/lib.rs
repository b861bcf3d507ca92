//! Smudge Core
//!
//! Deterministic print codes for world entities:
//! - Avalanche mixing and restart-stable string hashing
//! - Full code generation from `(seed, entity)`
//! - Deterministic smudge selection for `(seed, entity, event)`
//! - Two-tier caching behind the [`CodeEngine`] facade
//!
//! Codes are not unique: small code spaces will produce collisions between
//! entities. Nothing here is cryptographic.

pub mod cache;
pub mod context;
pub mod engine;
pub mod entity;
pub mod error;
pub mod generator;
pub mod hash;
pub mod mix;
pub mod shuffle;

pub use context::{CodeConfig, CodeContext, DEFAULT_PLACEHOLDER, MAX_ALPHABET_SIZE, MAX_CODE_LENGTH};
pub use engine::CodeEngine;
pub use entity::EntityId;
pub use error::ConfigError;
pub use shuffle::{PartialIndexShuffler, Smudge};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
