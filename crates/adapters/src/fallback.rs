//! Result type for best-effort operations.

/// Either the collaborator's answer or a documented substitute.
///
/// Best-effort operations (gloss translation, language listing, language
/// detection) return this instead of an error, so call sites never need
/// their own catch-and-substitute logic.
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort<T> {
    /// The collaborator answered.
    Fresh(T),
    /// The collaborator failed; `value` is the substitute.
    Fallback { value: T, reason: String },
}

impl<T> BestEffort<T> {
    pub fn value(&self) -> &T {
        match self {
            BestEffort::Fresh(value) | BestEffort::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            BestEffort::Fresh(value) | BestEffort::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, BestEffort::Fallback { .. })
    }
}
