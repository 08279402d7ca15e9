//! Query script detection
//!
//! A query containing any Hangul is treated as Korean, which switches the
//! ranker to the localized-name weighting.

/// Writing system a query is treated as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryScript {
    /// Contains at least one Hangul syllable or jamo
    Korean,
    /// Anything else (tickers, English names)
    General,
}

impl QueryScript {
    pub fn detect(query: &str) -> Self {
        if contains_hangul(query) {
            QueryScript::Korean
        } else {
            QueryScript::General
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueryScript::Korean => "korean",
            QueryScript::General => "general",
        }
    }
}

/// Check if a character is a Hangul syllable or jamo
#[inline]
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}'   // Hangul Jamo
        | '\u{3130}'..='\u{318F}' // Hangul Compatibility Jamo
        | '\u{A960}'..='\u{A97F}' // Hangul Jamo Extended-A
        | '\u{AC00}'..='\u{D7A3}' // Hangul Syllables
        | '\u{D7B0}'..='\u{D7FF}' // Hangul Jamo Extended-B
    )
}

pub fn contains_hangul(s: &str) -> bool {
    s.chars().any(is_hangul)
}
