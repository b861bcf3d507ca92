//! Two-tier code caches
//!
//! Hosts ask for the same code many times within one tick, so each cache
//! keeps the most recently served code in a single slot in front of the full
//! map. The slot owns reusable buffers: a map hit copies into it without
//! allocating, and a slot hit touches nothing.
//!
//! Partial codes are keyed by entity then event so lookups can borrow the
//! event string instead of building an owned key.

use std::collections::HashMap;

use crate::entity::EntityId;

/// Which tier answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Last,
    Map,
}

/// Full codes keyed by entity.
#[derive(Debug, Default)]
pub struct FullCodeCache {
    last_entity: Option<EntityId>,
    last_code: String,
    map: HashMap<EntityId, String>,
}

impl FullCodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find `entity`, moving a map hit into the slot. [`current`](Self::current)
    /// holds the code after any hit.
    pub fn lookup(&mut self, entity: EntityId) -> Option<Tier> {
        if self.last_entity == Some(entity) {
            return Some(Tier::Last);
        }
        let code = self.map.get(&entity)?;
        self.last_code.clear();
        self.last_code.push_str(code);
        self.last_entity = Some(entity);
        Some(Tier::Map)
    }

    #[cfg(test)]
    fn get(&mut self, entity: EntityId) -> Option<(Tier, &str)> {
        let tier = self.lookup(entity)?;
        Some((tier, &self.last_code))
    }

    /// The code in the slot; empty before the first hit or insert.
    pub fn current(&self) -> &str {
        &self.last_code
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.map.contains_key(&entity)
    }

    /// Store into both tiers.
    pub fn insert(&mut self, entity: EntityId, code: String) -> &str {
        self.last_code.clear();
        self.last_code.push_str(&code);
        self.last_entity = Some(entity);
        self.map.insert(entity, code);
        &self.last_code
    }

    /// Store into the map tier only, leaving the slot alone.
    pub fn insert_cold(&mut self, entity: EntityId, code: String) {
        self.map.insert(entity, code);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.last_entity = None;
        self.last_code.clear();
        self.map.clear();
    }
}

/// Partial codes keyed by `(entity, event)`.
#[derive(Debug, Default)]
pub struct PartialCodeCache {
    last_entity: Option<EntityId>,
    last_event: String,
    last_code: String,
    map: HashMap<EntityId, HashMap<Box<str>, String>>,
    len: usize,
}

impl PartialCodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find `(entity, event)`, moving a map hit into the slot.
    pub fn lookup(&mut self, entity: EntityId, event: &str) -> Option<Tier> {
        if self.last_entity == Some(entity) && self.last_event == event {
            return Some(Tier::Last);
        }
        let code = self.map.get(&entity)?.get(event)?;
        self.last_code.clear();
        self.last_code.push_str(code);
        self.remember(entity, event);
        Some(Tier::Map)
    }

    #[cfg(test)]
    fn get(&mut self, entity: EntityId, event: &str) -> Option<(Tier, &str)> {
        let tier = self.lookup(entity, event)?;
        Some((tier, &self.last_code))
    }

    pub fn current(&self) -> &str {
        &self.last_code
    }

    pub fn insert(&mut self, entity: EntityId, event: &str, code: String) -> &str {
        self.last_code.clear();
        self.last_code.push_str(&code);
        self.remember(entity, event);
        let previous = self.map.entry(entity).or_default().insert(event.into(), code);
        if previous.is_none() {
            self.len += 1;
        }
        &self.last_code
    }

    fn remember(&mut self, entity: EntityId, event: &str) {
        self.last_entity = Some(entity);
        self.last_event.clear();
        self.last_event.push_str(event);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.last_entity = None;
        self.last_event.clear();
        self.last_code.clear();
        self.map.clear();
        self.len = 0;
    }
}
