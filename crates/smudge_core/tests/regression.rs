//! Frozen output snapshots.
//!
//! Codes must stay identical across releases for a given seed: players
//! compare prints between sessions. Any change here is a breaking change.

use smudge_core::generator::generate_full;
use smudge_core::hash::hash_str;
use smudge_core::mix::mix;
use smudge_core::{CodeConfig, CodeContext, CodeEngine, EntityId, PartialIndexShuffler};

// ═══════════════════════════════════════════════════════════════════════
// Primitives
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn mix_snapshots() {
    let cases: [(u32, u32); 5] = [
        (0, 0),
        (1, 270_369),
        (42, 11_355_432),
        (0xDEAD_BEEF, 1_199_382_711),
        (u32::MAX, 253_983),
    ];
    for (input, expected) in cases {
        assert_eq!(mix(input), expected, "mix({input})");
    }
}

#[test]
fn hash_snapshots() {
    let cases: [(&str, u32); 10] = [
        ("", 757_602_046),
        ("a", 3_452_614_589),
        ("ab", 938_310_215),
        ("abc", 3_974_378_154),
        ("ev-1", 3_164_714_167),
        ("ev-2", 1_598_630_226),
        ("hello world", 1_829_315_258),
        // Non-ASCII input hashes UTF-16 units, surrogate pairs as two units.
        ("Zoë", 82_697_190),
        ("😀", 970_947_761),
        ("évidence-😀", 2_999_119_571),
    ];
    for (input, expected) in cases {
        assert_eq!(hash_str(input), expected, "hash_str({input:?})");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Full codes
// ═══════════════════════════════════════════════════════════════════════

fn context(seed: u32, code_length: usize, alphabet_size: u32) -> CodeContext {
    CodeContext::new(
        CodeConfig::new(code_length, alphabet_size, 0, 0).expect("valid config"),
        seed,
    )
}

#[test]
fn full_code_snapshots() {
    let cases: [(u32, u32, usize, u32, &str); 6] = [
        (42, 7, 5, 26, "HCSKR"),
        (0, 0, 5, 26, "AOXQU"),
        (1, 0, 5, 26, "ZNAFP"),
        (42, 8, 5, 26, "PUFVW"),
        (43, 7, 5, 26, "FMUYX"),
        (1234, 99, 5, 26, "NHKTT"),
    ];
    for (seed, entity, length, alphabet, expected) in cases {
        let code = generate_full(&context(seed, length, alphabet), EntityId::new(entity));
        assert_eq!(code, expected, "seed={seed} entity={entity}");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Shuffles and partial codes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shuffle_snapshot() {
    let ctx = CodeContext::new(CodeConfig::new(5, 26, 2, 4).expect("valid config"), 42);
    let mut shuffler = PartialIndexShuffler::new(5);
    let smudge = shuffler.shuffle(&ctx, EntityId::new(7), "ev-1");
    assert_eq!(smudge.count(), 3);
    assert_eq!(smudge.permutation(), &[3, 0, 4, 2, 1]);
}

#[test]
fn partial_code_snapshots() {
    let mut engine = CodeEngine::new(CodeConfig::new(5, 26, 2, 4).expect("valid config"), 42);
    assert_eq!(engine.partial_code(EntityId::new(7), "ev-1"), "-CS--");
    assert_eq!(engine.partial_code(EntityId::new(7), "ev-2"), "H----");

    engine.reset(1234);
    engine.configure(5, 26, 3, 3).expect("valid config");
    assert_eq!(engine.partial_code(EntityId::new(99), "fp-0001"), "-H-T-");

    engine.configure(8, 4, 3, 3).expect("valid config");
    engine.reset(42);
    assert_eq!(engine.partial_code(EntityId::new(7), "ev-1"), "DA-C--CB");
}
