use crate::level::Level;

/// A resolved dictionary entry.
///
/// `word` is the canonical lowercase form, with phrasal-verb separators
/// replaced by spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordLevel {
    pub word: String,
    pub level: Level,
}
