//! Code configuration and the per-session generation context

use crate::error::ConfigError;

/// Letters available to codes: `A..=Z`.
pub const MAX_ALPHABET_SIZE: u32 = 26;

/// Longest code a configuration accepts: positions are hashed as `u32`.
pub const MAX_CODE_LENGTH: usize = u32::MAX as usize;

/// Character written over smudged positions unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: char = '-';

/// Validated code shape.
///
/// A `CodeConfig` can only be obtained through [`CodeConfig::new`], so every
/// instance satisfies `1 <= alphabet_size <= 26`, `1 <= code_length <= u32::MAX`
/// and `smudge_min <= smudge_max <= code_length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeConfig {
    code_length: usize,
    alphabet_size: u32,
    smudge_min: usize,
    smudge_max: usize,
    placeholder: u8,
}

impl CodeConfig {
    /// Validate a code shape.
    ///
    /// Rejects an empty alphabet, more than 26 letters, and empty or overlong
    /// codes. Smudge bounds are clamped into `[0, code_length]` and swapped
    /// when inverted.
    pub fn new(
        code_length: usize,
        alphabet_size: u32,
        smudge_min: usize,
        smudge_max: usize,
    ) -> Result<Self, ConfigError> {
        if alphabet_size == 0 {
            return Err(ConfigError::ZeroAlphabet);
        }
        if alphabet_size > MAX_ALPHABET_SIZE {
            return Err(ConfigError::AlphabetTooLarge {
                size: alphabet_size,
                max: MAX_ALPHABET_SIZE,
            });
        }
        if code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::CodeTooLong {
                length: code_length,
                max: MAX_CODE_LENGTH,
            });
        }

        let (smudge_min, smudge_max) = normalize_smudge(code_length, smudge_min, smudge_max);

        Ok(Self {
            code_length,
            alphabet_size,
            smudge_min,
            smudge_max,
            placeholder: DEFAULT_PLACEHOLDER as u8,
        })
    }

    /// Replace the smudge placeholder.
    ///
    /// The placeholder must be printable ASCII and must not be one of the
    /// letters the alphabet can produce.
    pub fn with_placeholder(mut self, placeholder: char) -> Result<Self, ConfigError> {
        let in_alphabet = ('A'..='Z')
            .take(self.alphabet_size as usize)
            .any(|letter| letter == placeholder);
        if !placeholder.is_ascii_graphic() || in_alphabet {
            return Err(ConfigError::InvalidPlaceholder { placeholder });
        }
        self.placeholder = placeholder as u8;
        Ok(self)
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    pub fn smudge_min(&self) -> usize {
        self.smudge_min
    }

    pub fn smudge_max(&self) -> usize {
        self.smudge_max
    }

    pub fn placeholder(&self) -> char {
        char::from(self.placeholder)
    }
}

impl Default for CodeConfig {
    /// Five letters from the full alphabet with two to four smudged.
    fn default() -> Self {
        Self {
            code_length: 5,
            alphabet_size: MAX_ALPHABET_SIZE,
            smudge_min: 2,
            smudge_max: 4,
            placeholder: DEFAULT_PLACEHOLDER as u8,
        }
    }
}

fn normalize_smudge(code_length: usize, min: usize, max: usize) -> (usize, usize) {
    let clamped_min = min.min(code_length);
    let clamped_max = max.min(code_length);
    if clamped_min != min || clamped_max != max {
        tracing::warn!(
            min,
            max,
            code_length,
            "smudge bounds exceed code length, clamping"
        );
    }
    if clamped_min > clamped_max {
        tracing::warn!(
            min = clamped_min,
            max = clamped_max,
            "smudge bounds inverted, swapping"
        );
        (clamped_max, clamped_min)
    } else {
        (clamped_min, clamped_max)
    }
}

/// The live generation state for one world session: a config plus the world seed.
///
/// Contexts are replaced, never mutated, when a world is created or loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeContext {
    config: CodeConfig,
    seed: u32,
}

impl CodeContext {
    pub fn new(config: CodeConfig, seed: u32) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> &CodeConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}
