use serde::{Deserialize, Serialize};

fn default_separator() -> char {
    '-'
}

fn default_max_words() -> usize {
    3
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PhrasalConfig {
    /// Character the dictionary uses to join phrasal verbs in its URLs
    #[serde(default = "default_separator")]
    pub separator: char,
    /// Longest phrasal verb, in words, captured from one line
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Look up every phrasal-verb prefix, not only the longest capture
    #[serde(default)]
    pub all_variants: bool,
}

impl Default for PhrasalConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            max_words: default_max_words(),
            all_variants: false,
        }
    }
}
