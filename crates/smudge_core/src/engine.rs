//! Code engine
//!
//! [`CodeEngine`] owns the live [`CodeContext`], both caches and the shuffle
//! buffer. It is single-threaded by design: wrap it in a mutex to share it.

use smudge_metrics::Counter;

use crate::cache::{FullCodeCache, PartialCodeCache, Tier};
use crate::context::{CodeConfig, CodeContext};
use crate::entity::EntityId;
use crate::error::ConfigError;
use crate::generator::{generate_full, generate_full_batch};
use crate::shuffle::PartialIndexShuffler;

/// Counter names recorded when the `metrics` feature is enabled.
pub mod counters {
    pub const FULL_LAST_HIT: &str = "full.last_hit";
    pub const FULL_MAP_HIT: &str = "full.map_hit";
    pub const FULL_MISS: &str = "full.miss";
    pub const PARTIAL_LAST_HIT: &str = "partial.last_hit";
    pub const PARTIAL_MAP_HIT: &str = "partial.map_hit";
    pub const PARTIAL_MISS: &str = "partial.miss";
    pub const RESET: &str = "engine.reset";
}

/// Generates and memoizes full and partial codes for one world session.
///
/// Every cached value belongs to the current epoch. [`reset`](Self::reset)
/// and [`configure`](Self::configure) start a new epoch and drop all of them.
///
/// ```
/// use smudge_core::{CodeConfig, CodeEngine, EntityId};
///
/// let config = CodeConfig::new(5, 26, 2, 4).unwrap();
/// let mut engine = CodeEngine::new(config, 42);
///
/// let full = engine.full_code(EntityId::new(7)).to_owned();
/// let partial = engine.partial_code(EntityId::new(7), "ev-1");
/// assert_eq!(partial.len(), full.len());
/// ```
#[derive(Debug)]
pub struct CodeEngine {
    context: CodeContext,
    epoch: u64,
    full: FullCodeCache,
    partial: PartialCodeCache,
    shuffler: PartialIndexShuffler,
    counters: Counter,
}

impl CodeEngine {
    /// Create an engine and begin the first epoch with `seed`.
    pub fn new(config: CodeConfig, seed: u32) -> Self {
        tracing::info!(
            seed,
            code_length = config.code_length(),
            alphabet_size = config.alphabet_size(),
            smudge_min = config.smudge_min(),
            smudge_max = config.smudge_max(),
            "code engine initialized"
        );
        let shuffler = PartialIndexShuffler::new(config.code_length());
        Self {
            context: CodeContext::new(config, seed),
            epoch: 0,
            full: FullCodeCache::new(),
            partial: PartialCodeCache::new(),
            shuffler,
            counters: Counter::new(),
        }
    }

    pub fn context(&self) -> &CodeContext {
        &self.context
    }

    pub fn config(&self) -> &CodeConfig {
        self.context.config()
    }

    pub fn seed(&self) -> u32 {
        self.context.seed()
    }

    /// Number of context replacements since construction.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn counters(&self) -> &Counter {
        &self.counters
    }

    pub fn cached_full_codes(&self) -> usize {
        self.full.len()
    }

    pub fn cached_partial_codes(&self) -> usize {
        self.partial.len()
    }

    /// Validate a new code shape and start a new epoch at the current seed.
    ///
    /// The placeholder reverts to `-`; use [`apply_config`](Self::apply_config)
    /// to install a config with a custom placeholder.
    pub fn configure(
        &mut self,
        code_length: usize,
        alphabet_size: u32,
        smudge_min: usize,
        smudge_max: usize,
    ) -> Result<(), ConfigError> {
        let config = CodeConfig::new(code_length, alphabet_size, smudge_min, smudge_max)?;
        self.apply_config(config);
        Ok(())
    }

    /// Install an already validated config and start a new epoch at the current seed.
    pub fn apply_config(&mut self, config: CodeConfig) {
        let seed = self.context.seed();
        tracing::info!(
            code_length = config.code_length(),
            alphabet_size = config.alphabet_size(),
            smudge_min = config.smudge_min(),
            smudge_max = config.smudge_max(),
            "code engine reconfigured"
        );
        self.replace_context(CodeContext::new(config, seed));
    }

    /// Begin a new epoch for a new or loaded world.
    pub fn reset(&mut self, seed: u32) {
        tracing::info!(
            seed,
            previous_seed = self.context.seed(),
            evicted_full = self.full.len(),
            evicted_partial = self.partial.len(),
            "code engine reset"
        );
        let config = self.context.config().clone();
        self.replace_context(CodeContext::new(config, seed));
    }

    fn replace_context(&mut self, context: CodeContext) {
        self.shuffler.resize(context.config().code_length());
        self.full.clear();
        self.partial.clear();
        self.context = context;
        self.epoch += 1;
        self.record(counters::RESET);
    }

    /// The unobscured code for `entity`.
    pub fn full_code(&mut self, entity: EntityId) -> &str {
        if let Some(tier) = self.full.lookup(entity) {
            self.record(match tier {
                Tier::Last => counters::FULL_LAST_HIT,
                Tier::Map => counters::FULL_MAP_HIT,
            });
            return self.full.current();
        }

        self.record(counters::FULL_MISS);
        let code = generate_full(&self.context, entity);
        tracing::debug!(%entity, code = %code, epoch = self.epoch, "generated full code");
        self.full.insert(entity, code)
    }

    /// The code for `entity` as seen in observation `event`, with a
    /// deterministic subset of positions replaced by the placeholder.
    pub fn partial_code(&mut self, entity: EntityId, event: &str) -> &str {
        if let Some(tier) = self.partial.lookup(entity, event) {
            self.record(match tier {
                Tier::Last => counters::PARTIAL_LAST_HIT,
                Tier::Map => counters::PARTIAL_MAP_HIT,
            });
            return self.partial.current();
        }

        self.record(counters::PARTIAL_MISS);
        let mut code = self.full_code(entity).to_owned();

        let mut placeholder = [0u8; 4];
        let placeholder = self.context.config().placeholder().encode_utf8(&mut placeholder);
        let smudge = self.shuffler.shuffle(&self.context, entity, event);
        for &position in smudge.positions() {
            // Codes and placeholders are ASCII, so every position is a char boundary.
            code.replace_range(position..=position, placeholder);
        }

        tracing::debug!(%entity, event, code = %code, epoch = self.epoch, "generated partial code");
        self.partial.insert(entity, event, code)
    }

    /// Positions `partial_code(entity, event)` obscures, in ascending order.
    pub fn smudge_positions(&mut self, entity: EntityId, event: &str) -> Vec<usize> {
        let mut positions = self
            .shuffler
            .shuffle(&self.context, entity, event)
            .positions()
            .to_vec();
        positions.sort_unstable();
        positions
    }

    /// Generate full codes for every uncached entity in `entities` in parallel.
    ///
    /// Results land in the map tier only. Returns how many codes were generated.
    pub fn prewarm(&mut self, entities: &[EntityId]) -> usize {
        let mut missing: Vec<EntityId> = entities
            .iter()
            .copied()
            .filter(|entity| !self.full.contains(*entity))
            .collect();
        missing.sort_unstable();
        missing.dedup();

        let codes = generate_full_batch(&self.context, &missing);
        for (entity, code) in missing.iter().zip(codes) {
            self.full.insert_cold(*entity, code);
        }

        tracing::debug!(
            requested = entities.len(),
            generated = missing.len(),
            epoch = self.epoch,
            "prewarmed full codes"
        );
        missing.len()
    }

    #[inline]
    #[cfg_attr(not(feature = "metrics"), allow(unused_variables))]
    fn record(&mut self, name: &'static str) {
        smudge_metrics::metrics! {
            self.counters.increment(name, 1);
        }
    }
}
