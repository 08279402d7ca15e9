//! String normalization utilities
//!
//! Provides the normalization modes applied to queries and catalog text
//! before comparison.

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Strip leading and trailing whitespace
    Trim,
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::Trim => s.trim().to_string(),
    }
}

/// Normalize both strings according to the specified mode
#[must_use]
pub fn normalize_pair(a: &str, b: &str, mode: NormalizationMode) -> (String, String) {
    (normalize_string(a, mode), normalize_string(b, mode))
}
