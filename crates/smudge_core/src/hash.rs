//! Restart-stable string hashing
//!
//! `std`'s `DefaultHasher` is randomly keyed per process, which would give a
//! different print to the same event after every launch. This hash is a
//! fixed function of the string's UTF-16 code units.

/// Initial state of both lanes: `(5381 << 16) + 5381`.
const LANE_SEED: u32 = (5381 << 16) + 5381;

/// Multiplier folding the odd lane into the even one.
const LANE_FOLD: u32 = 1_566_083_941;

/// Two-lane DJB2 hash over UTF-16 code units.
///
/// Even-indexed units feed lane 1, odd-indexed units feed lane 2, and the
/// result is `lane1 + lane2 * 1566083941`. All arithmetic wraps. For ASCII
/// input this is the same as hashing the bytes.
pub fn hash_str(s: &str) -> u32 {
    let mut lane1 = LANE_SEED;
    let mut lane2 = LANE_SEED;

    let mut units = s.encode_utf16();
    while let Some(even) = units.next() {
        lane1 = djb2_step(lane1, even);
        match units.next() {
            Some(odd) => lane2 = djb2_step(lane2, odd),
            None => break,
        }
    }

    lane1.wrapping_add(lane2.wrapping_mul(LANE_FOLD))
}

#[inline]
fn djb2_step(h: u32, unit: u16) -> u32 {
    (h << 5).wrapping_add(h) ^ u32::from(unit)
}
