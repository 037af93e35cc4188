use std::collections::HashSet;

use gradus_config::phrasal::PhrasalConfig;

/// Extracts lookup candidates from lines of jotted-down text.
///
/// Each line is scanned once: a leading run of non-word characters is
/// skipped, then up to `max_words` word tokens are captured. Tokens are
/// lowercased and joined with the phrasal-verb separator; with
/// `all_variants` every prefix of the capture becomes its own candidate.
/// Candidates accumulate in a set, so repeated words cost one fetch.
pub struct Tokenizer {
    separator: char,
    max_words: usize,
    all_variants: bool,
    words: HashSet<String>,
}

impl Tokenizer {
    pub fn new(cfg: &PhrasalConfig) -> Self {
        Self {
            separator: cfg.separator,
            max_words: cfg.max_words,
            all_variants: cfg.all_variants,
            words: HashSet::new(),
        }
    }

    /// Scan one line and record its candidate(s).
    pub fn push_line(&mut self, line: &str) {
        let tokens = scan_tokens(line, self.max_words);
        if tokens.is_empty() {
            return;
        }

        let sep = self.separator.to_string();
        if self.all_variants {
            for end in 1..=tokens.len() {
                self.words.insert(tokens[..end].join(&sep));
            }
        } else {
            self.words.insert(tokens.join(&sep));
        }
    }

    /// Scan every line of a block of text.
    pub fn push_text(&mut self, text: &str) {
        for line in text.lines() {
            self.push_line(line);
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The deduplicated candidate set.
    pub fn into_words(self) -> HashSet<String> {
        self.words
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters allowed inside a token. Digits are word-like but delimit
/// tokens instead of extending them.
fn is_token_char(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

/// Capture up to `max_words` tokens from the start of a line.
///
/// Rules, in scan order:
/// - non-word characters before a token are skipped;
/// - the line must open (after that skip) with a token, not a digit run;
/// - a token glued to a digit is invalid: on the first token the whole
///   line yields nothing, later it just stops the capture;
/// - after a token, whitespace followed by punctuation ends the capture
///   and the rest of the line is ignored ("give up (sth)" keeps only
///   "give up").
fn scan_tokens(line: &str, max_words: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while tokens.len() < max_words {
        if !tokens.is_empty() && junk_follows(&chars, pos) {
            break;
        }

        while pos < chars.len() && !is_word(chars[pos]) {
            pos += 1;
        }

        let start = pos;
        while pos < chars.len() && is_token_char(chars[pos]) {
            pos += 1;
        }

        let glued_to_digit = pos < chars.len() && is_word(chars[pos]);
        if start == pos || glued_to_digit {
            if tokens.is_empty() {
                return Vec::new();
            }
            break;
        }

        tokens.push(chars[start..pos].iter().collect::<String>().to_lowercase());
    }

    tokens
}

/// Whitespace followed by a character that is neither word-like nor
/// whitespace marks the start of trailing junk.
fn junk_follows(chars: &[char], mut pos: usize) -> bool {
    let start = pos;
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos > start && pos < chars.len() && !is_word(chars[pos])
}
