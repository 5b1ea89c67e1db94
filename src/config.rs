use serde::Deserialize;

/// Bounds on how much work a single expression may ask for.
///
/// Expressions usually come straight from chat users, so all three limits apply by default.
/// A TOML table with any subset of the fields deserializes into `Limits`; missing fields keep
/// their default.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum input length in bytes, checked before normalization.
    pub max_length: usize,
    /// Maximum bracket nesting depth.
    pub max_depth: usize,
    /// Maximum number of dice drawn while evaluating one expression.
    pub max_rolls: usize,
}

impl Limits {
    pub const DEFAULT_MAX_LENGTH: usize = 1000;
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    pub const DEFAULT_MAX_ROLLS: usize = 1000;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_rolls: Self::DEFAULT_MAX_ROLLS,
        }
    }
}
