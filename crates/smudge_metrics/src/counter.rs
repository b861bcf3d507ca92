//! Named counters for tracking cache and engine events

use std::collections::BTreeMap;

/// Event counters keyed by static names such as `"full.miss"`.
///
/// Ordered by name so reports come out stable between runs.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    counters: BTreeMap<&'static str, u64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, name: &'static str, value: u64) {
        *self.counters.entry(name).or_insert(0) += value;
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Sum of every counter whose name starts with `prefix`.
    pub fn total(&self, prefix: &str) -> u64 {
        self.counters
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, value)| *value)
            .sum()
    }

    /// Fraction of `prefix` events recorded under `name`, or 0.0 when nothing was recorded.
    pub fn ratio(&self, name: &str, prefix: &str) -> f64 {
        let total = self.total(prefix);
        if total == 0 {
            0.0
        } else {
            self.get(name) as f64 / total as f64
        }
    }

    pub fn reset_all(&mut self) {
        self.counters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counters.iter().map(|(name, value)| (*name, *value))
    }
}
