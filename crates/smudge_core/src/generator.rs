//! Full code generation
//!
//! Each letter is a pure function of `(seed, entity, position)`; nothing
//! carries over between positions, so letters can be produced in any order.

use rayon::prelude::*;

use crate::context::CodeContext;
use crate::entity::EntityId;
use crate::mix::mix;

const ENTITY_PRIME: u32 = 2_654_435_761;
const POSITION_PRIME: u32 = 1_629_267_613;
const LETTER_PRIME: u32 = 334_214_467;

/// Letter index in `[0, alphabet_size)` for one position of an entity's code.
#[inline]
pub fn letter_index(seed: u32, entity: EntityId, position: u32, alphabet_size: u32) -> u32 {
    let mut h = mix(seed);
    h = mix(h.wrapping_add(ENTITY_PRIME.wrapping_mul(entity.raw())));
    h = mix(h.wrapping_add(POSITION_PRIME.wrapping_mul(position)));
    h = h.wrapping_mul(LETTER_PRIME);
    h % alphabet_size
}

/// Write `entity`'s full code into `out`, replacing its contents.
pub fn generate_full_into(context: &CodeContext, entity: EntityId, out: &mut String) {
    let config = context.config();
    out.clear();
    out.reserve(config.code_length());
    // code_length <= MAX_CODE_LENGTH, so positions fit in u32.
    for position in 0..config.code_length() as u32 {
        let index = letter_index(context.seed(), entity, position, config.alphabet_size());
        // alphabet_size <= 26 keeps this within 'A'..='Z'.
        out.push(char::from(b'A' + index as u8));
    }
}

/// Full code for a single entity.
pub fn generate_full(context: &CodeContext, entity: EntityId) -> String {
    let mut code = String::new();
    generate_full_into(context, entity, &mut code);
    code
}

/// Full codes for many entities, computed in parallel. Output order matches `entities`.
pub fn generate_full_batch(context: &CodeContext, entities: &[EntityId]) -> Vec<String> {
    entities
        .par_iter()
        .map(|&entity| generate_full(context, entity))
        .collect()
}
