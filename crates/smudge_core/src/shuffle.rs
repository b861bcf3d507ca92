//! Smudge position selection
//!
//! For an `(entity, event)` pair a running hash picks the smudge count and
//! then drives a Fisher-Yates shuffle of the code positions. The first
//! `count` entries of the shuffled positions are the ones to obscure.

use crate::context::CodeContext;
use crate::entity::EntityId;
use crate::hash::hash_str;
use crate::mix::mix;

const ENTITY_PRIME: u32 = 4_294_967_291;
const EVENT_PRIME: u32 = 2_654_435_769;
const STEP_PRIME: u32 = 2_166_136_261;

/// Result of one shuffle, borrowing the shuffler's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smudge<'a> {
    count: usize,
    permutation: &'a [usize],
}

impl<'a> Smudge<'a> {
    /// Number of positions to obscure.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Every code position in shuffled order.
    pub fn permutation(&self) -> &'a [usize] {
        self.permutation
    }

    /// The positions to obscure, in shuffle order.
    pub fn positions(&self) -> &'a [usize] {
        &self.permutation[..self.count]
    }
}

/// Deterministic shuffler owning a permutation buffer sized to the code length.
///
/// The buffer is overwritten on every call; a [`Smudge`] borrowed from it
/// stays valid until the next shuffle.
#[derive(Debug, Clone, Default)]
pub struct PartialIndexShuffler {
    permutation: Vec<usize>,
}

impl PartialIndexShuffler {
    pub fn new(code_length: usize) -> Self {
        Self {
            permutation: Vec::with_capacity(code_length),
        }
    }

    /// Match the buffer to a new code length.
    pub fn resize(&mut self, code_length: usize) {
        self.permutation.clear();
        self.permutation.shrink_to(code_length);
        self.permutation.reserve(code_length);
    }

    pub fn shuffle(&mut self, context: &CodeContext, entity: EntityId, event: &str) -> Smudge<'_> {
        let config = context.config();

        let mut h = mix(context.seed());
        h = mix(h.wrapping_add(ENTITY_PRIME.wrapping_mul(entity.raw())));
        h = mix(h.wrapping_add(EVENT_PRIME.wrapping_mul(hash_str(event))));

        let count = smudge_count(h, config.smudge_min(), config.smudge_max());

        self.permutation.clear();
        self.permutation.extend(0..config.code_length());
        for i in (1..self.permutation.len()).rev() {
            h = mix(h.wrapping_mul(STEP_PRIME));
            // i < code_length <= u32::MAX, so i + 1 fits.
            let j = (h % (i as u32 + 1)) as usize;
            self.permutation.swap(i, j);
        }

        tracing::trace!(%entity, event, count, "shuffled smudge positions");

        Smudge {
            count,
            permutation: &self.permutation,
        }
    }
}

/// `h % (max - min + 1) + min`, widened so a `[0, u32::MAX]` range does not wrap to zero.
fn smudge_count(h: u32, min: usize, max: usize) -> usize {
    let span = (max - min) as u64 + 1;
    (u64::from(h) % span) as usize + min
}
