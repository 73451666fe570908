// ============================================================================
// Parser Configuration
// Format and overflow policy applied by a NumberParser
// ============================================================================

use crate::scanner::{FloatFormat, FloatOverflow, IntFormat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`NumberParser`](super::NumberParser).
///
/// The defaults match the bare scanner functions: decimal integers, general
/// floats, and overflow reported as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Accepted integer literal form
    pub int_format: IntFormat,

    /// Accepted floating-point literal form
    pub float_format: FloatFormat,

    /// Policy for float literals beyond the finite range
    pub float_overflow: FloatOverflow,
}

impl ParserConfig {
    /// Create a configuration with explicit formats
    pub fn new(int_format: IntFormat, float_format: FloatFormat) -> Self {
        Self {
            int_format,
            float_format,
            float_overflow: FloatOverflow::Reject,
        }
    }

    /// Builder method: Set integer format
    pub fn with_int_format(mut self, format: IntFormat) -> Self {
        self.int_format = format;
        self
    }

    /// Builder method: Set float format
    pub fn with_float_format(mut self, format: FloatFormat) -> Self {
        self.float_format = format;
        self
    }

    /// Builder method: Set float overflow policy
    pub fn with_float_overflow(mut self, policy: FloatOverflow) -> Self {
        self.float_overflow = policy;
        self
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Hex integers and hex floats, as read from memory dumps or `%a` output
    pub fn hex() -> Self {
        Self::new(IntFormat::Hex, FloatFormat::Hex)
    }

    /// Source-code style: `0x` selects hex integers, floats take exponents
    pub fn source_literals() -> Self {
        Self::new(IntFormat::Auto, FloatFormat::General)
    }

    /// Default formats, but float overflow saturates to infinity
    pub fn lenient_overflow() -> Self {
        Self::default().with_float_overflow(FloatOverflow::Infinity)
    }
}

#[cfg(feature = "serde")]
impl ParserConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input or unknown variants.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this configuration to JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_scanner_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.int_format, IntFormat::Decimal);
        assert_eq!(config.float_format, FloatFormat::General);
        assert_eq!(config.float_overflow, FloatOverflow::Reject);
    }

    #[test]
    fn test_builder_methods() {
        let config = ParserConfig::default()
            .with_int_format(IntFormat::Hex)
            .with_float_format(FloatFormat::Scientific)
            .with_float_overflow(FloatOverflow::Infinity);

        assert_eq!(config.int_format, IntFormat::Hex);
        assert_eq!(config.float_format, FloatFormat::Scientific);
        assert_eq!(config.float_overflow, FloatOverflow::Infinity);
    }

    #[test]
    fn test_presets() {
        assert_eq!(ParserConfig::hex().float_format, FloatFormat::Hex);
        assert_eq!(ParserConfig::source_literals().int_format, IntFormat::Auto);
        assert_eq!(
            ParserConfig::lenient_overflow().float_overflow,
            FloatOverflow::Infinity
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = ParserConfig::hex().with_float_overflow(FloatOverflow::Infinity);
        let json = config.to_json().unwrap();
        assert_eq!(ParserConfig::from_json(&json).unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_partial() {
        let config = ParserConfig::from_json(r#"{"int_format":"Auto"}"#).unwrap();
        assert_eq!(config, ParserConfig::default().with_int_format(IntFormat::Auto));
        assert!(ParserConfig::from_json(r#"{"int_format":"Octal"}"#).is_err());
    }
}
