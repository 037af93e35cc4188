use serde::{Deserialize, Serialize};

fn default_search_url() -> String {
    "https://dictionary.cambridge.org/us/search/english/direct/".to_string()
}

fn default_headword_selector() -> String {
    "head > title".to_string()
}

fn default_headword_pattern() -> String {
    r"^\s*([\w\s]+)\s+(?:[Cc]lause\s+)?(?:[Mm]eaning|[Dd]efinition)\s+in\s+the\s+[Cc]ambridge\s+[Ee]nglish\s+[Dd]ictionary".to_string()
}

fn default_level_selector() -> String {
    "span.def-info > *".to_string()
}

fn default_level_pattern() -> String {
    r"[A-C][1-2]".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Search endpoint; the candidate is appended as the `q` query parameter
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Selector for the page region that declares the headword
    #[serde(default = "default_headword_selector")]
    pub headword_selector: String,
    /// Applied to the selected text; the first capture is the headword
    #[serde(default = "default_headword_pattern")]
    pub headword_pattern: String,
    /// Selector for the definition-info region carrying level markers
    #[serde(default = "default_level_selector")]
    pub level_selector: String,
    #[serde(default = "default_level_pattern")]
    pub level_pattern: String,
    /// Reject the dictionary's spelling suggestions instead of accepting them
    #[serde(default)]
    pub keep_original_words: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            headword_selector: default_headword_selector(),
            headword_pattern: default_headword_pattern(),
            level_selector: default_level_selector(),
            level_pattern: default_level_pattern(),
            keep_original_words: false,
        }
    }
}
