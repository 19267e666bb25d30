use std::fmt;

/// Why an extractor returned its fallback value instead of extracted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Too little input to analyze (no articles, too few characters)
    InsufficientInput,
    /// The TF-IDF model could not be built
    VectorizationFailure,
    /// Analysis ran but produced nothing usable
    NoCandidates,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::InsufficientInput => write!(f, "insufficient input"),
            FallbackReason::VectorizationFailure => write!(f, "vectorization failure"),
            FallbackReason::NoCandidates => write!(f, "no candidates"),
        }
    }
}

/// Outcome of an extractor that always yields a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    Extracted(T),
    Fallback(T, FallbackReason),
}

impl<T> Extraction<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(..))
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Extraction::Extracted(_) => None,
            Extraction::Fallback(_, reason) => Some(*reason),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Extraction::Extracted(value) | Extraction::Fallback(value, _) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Extraction::Extracted(value) | Extraction::Fallback(value, _) => value,
        }
    }
}
