//! Entity identifiers
//!
//! Entities are opaque 32-bit handles supplied by the host world. Any value
//! is valid input: there is no notion of an unknown entity.

use std::fmt;

use crate::hash::hash_str;

/// Identifier of a world entity (e.g. a citizen).
///
/// Stable for the lifetime of a world session. Two entities may still end up
/// with the same code when the code space is small relative to the population.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Derive an id from a stable name, for hosts that key entities by name.
    ///
    /// Example:
    /// ```
    /// use smudge_core::EntityId;
    ///
    /// assert_eq!(EntityId::from_name("Ada Byron"), EntityId::from_name("Ada Byron"));
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self(hash_str(name))
    }
}

impl From<u32> for EntityId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
