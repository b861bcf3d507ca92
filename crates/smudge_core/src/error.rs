use thiserror::Error;

/// Errors reported when validating a code configuration.
///
/// Out-of-range smudge bounds are not errors; they are clamped and reordered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alphabet size must be at least 1")]
    ZeroAlphabet,

    #[error("alphabet size {size} exceeds the {max} letters A-Z")]
    AlphabetTooLarge { size: u32, max: u32 },

    #[error("code length must be at least 1")]
    ZeroCodeLength,

    #[error("code length {length} exceeds the maximum of {max}")]
    CodeTooLong { length: usize, max: usize },

    #[error("placeholder {placeholder:?} must be printable ASCII outside the code alphabet")]
    InvalidPlaceholder { placeholder: char },
}
