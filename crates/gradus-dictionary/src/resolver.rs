use std::sync::Arc;

use gradus_config::dictionary::DictionaryConfig;
use gradus_core::{Level, WordLevel};
use regex::Regex;
use reqwest::Url;

use crate::extract::ExtractText;
use crate::fetch::Fetch;

/// Resolves one candidate into its canonical word and level.
///
/// Never fails: every fetch or parse problem is folded into the returned
/// entry as `Unfound` or `Undefined`, so one bad word cannot take the run
/// down with it.
pub struct PageResolver {
    fetcher: Arc<dyn Fetch>,
    extractor: Arc<dyn ExtractText>,
    cfg: DictionaryConfig,
    separator: char,
    headword_re: Regex,
    level_re: Regex,
}

impl PageResolver {
    pub fn new(
        fetcher: Arc<dyn Fetch>,
        extractor: Arc<dyn ExtractText>,
        cfg: DictionaryConfig,
        separator: char,
    ) -> Result<Self, regex::Error> {
        let headword_re = Regex::new(&cfg.headword_pattern)?;
        let level_re = Regex::new(&cfg.level_pattern)?;

        Ok(Self {
            fetcher,
            extractor,
            cfg,
            separator,
            headword_re,
            level_re,
        })
    }

    pub async fn resolve(&self, candidate: &str) -> WordLevel {
        let page = self.fetch_page(candidate).await;
        self.entry_from_page(candidate, &page)
    }

    /// Fetch the dictionary page for a candidate, degrading every failure
    /// to an empty page.
    async fn fetch_page(&self, candidate: &str) -> String {
        let mut url = match Url::parse(&self.cfg.search_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("unusable search url {:?}: {}", self.cfg.search_url, e);
                return String::new();
            }
        };
        url.query_pairs_mut()
            .append_pair("q", &candidate.to_lowercase());

        match self.fetcher.fetch(url.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!("fetch failed for {:?}: {}", candidate, e);
                String::new()
            }
        }
    }

    /// Apply the level-resolution policy to a fetched page.
    fn entry_from_page(&self, candidate: &str, page: &str) -> WordLevel {
        let spaced = candidate.replace(self.separator, " ");
        if page.is_empty() {
            return WordLevel {
                word: spaced,
                level: Level::Unfound,
            };
        }

        let headwords = matches_in(
            &self.extractor.extract(page, &self.cfg.headword_selector),
            &self.headword_re,
        );
        let markers = matches_in(
            &self.extractor.extract(page, &self.cfg.level_selector),
            &self.level_re,
        );

        let (word, level) = match headwords.first() {
            None => (spaced, Level::Unfound),
            // the page is for a different word and the caller forbade
            // accepting suggestions
            Some(headword) if *headword != spaced && self.cfg.keep_original_words => {
                (spaced, Level::Unfound)
            }
            Some(headword) => {
                // several senses may be tagged; the easiest one wins
                match markers.iter().filter_map(|m| Level::parse(m)).min() {
                    Some(level) => (headword.clone(), level),
                    None => (headword.clone(), Level::Undefined),
                }
            }
        };

        WordLevel {
            word: word.to_lowercase(),
            level,
        }
    }
}

/// Run a pattern over extracted fragments, collecting the first capture of
/// every match (or the whole match when the pattern has no groups).
fn matches_in(fragments: &[String], pattern: &Regex) -> Vec<String> {
    let mut out = Vec::new();
    for text in fragments {
        for captures in pattern.captures_iter(text) {
            if let Some(m) = captures.get(1).or_else(|| captures.get(0)) {
                out.push(m.as_str().to_string());
            }
        }
    }
    out
}
