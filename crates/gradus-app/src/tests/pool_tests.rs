use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use gradus_config::dictionary::DictionaryConfig;
use gradus_core::Level;
use gradus_dictionary::{CssExtractor, Fetch, FetchError, PageResolver};
use tokio::time::timeout;

use crate::pool::resolve_all;

/// Deterministic page source that records how many fetches run at once.
struct FakeFetcher {
    pages: HashMap<String, String>,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl FakeFetcher {
    fn new(pages: HashMap<String, String>) -> Self {
        Self {
            pages,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Fetch for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let running = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        self.active.fetch_sub(1, Ordering::SeqCst);

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(url.to_string()))
    }
}

fn search_url(candidate: &str) -> String {
    format!("https://dictionary.cambridge.org/us/search/english/direct/?q={candidate}")
}

fn page(headword: &str, level: &str) -> String {
    format!(
        "<html><head><title>{headword} meaning in the Cambridge English Dictionary</title></head>\
         <body><span class=\"def-info\"><span>{level}</span></span></body></html>"
    )
}

fn fixture_pages() -> HashMap<String, String> {
    HashMap::from([
        (search_url("car"), page("car", "A1")),
        (search_url("coffee"), page("coffee", "A1")),
        (search_url("go-away"), page("go away", "B1")),
    ])
}

fn resolver_over(fetcher: Arc<FakeFetcher>) -> Arc<PageResolver> {
    Arc::new(
        PageResolver::new(
            fetcher,
            Arc::new(CssExtractor),
            DictionaryConfig::default(),
            '-',
        )
        .expect("default patterns compile"),
    )
}

#[tokio::test]
async fn every_candidate_yields_exactly_one_entry() {
    let mut words: HashSet<String> = (0..12).map(|i| format!("w{i}")).collect();
    words.insert("car".to_string());

    let fetcher = Arc::new(FakeFetcher::new(fixture_pages()));
    let resolver = resolver_over(fetcher);
    let completed = Arc::new(AtomicUsize::new(0));

    let results = timeout(
        Duration::from_secs(5),
        resolve_all(words.clone(), resolver, 4, Arc::clone(&completed)),
    )
    .await
    .expect("pool finished")
    .expect("pool succeeded");

    assert_eq!(results.len(), words.len());
    assert_eq!(completed.load(Ordering::SeqCst), words.len());

    // unknown words degrade to Unfound instead of disappearing
    let resolved: HashSet<&str> = results.iter().map(|e| e.word.as_str()).collect();
    assert!(resolved.contains("car"));
    assert!(resolved.contains("w0"));
    assert!(
        results
            .iter()
            .filter(|e| e.word.starts_with('w'))
            .all(|e| e.level == Level::Unfound)
    );
}

#[tokio::test]
async fn concurrency_stays_within_the_bound() {
    let words: HashSet<String> = (0..10).map(|i| format!("w{i}")).collect();
    let fetcher = Arc::new(FakeFetcher::new(HashMap::new()));
    let resolver = resolver_over(Arc::clone(&fetcher));
    let completed = Arc::new(AtomicUsize::new(0));

    timeout(
        Duration::from_secs(5),
        resolve_all(words, resolver, 3, completed),
    )
    .await
    .expect("pool finished")
    .expect("pool succeeded");

    assert!(fetcher.peak.load(Ordering::SeqCst) <= 3);
    assert_eq!(fetcher.active.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn pipeline_is_idempotent() {
    let words: HashSet<String> =
        ["car", "coffee", "go-away", "missing"].map(String::from).into();

    let mut runs = Vec::new();
    for _ in 0..2 {
        let fetcher = Arc::new(FakeFetcher::new(fixture_pages()));
        let resolver = resolver_over(fetcher);
        let completed = Arc::new(AtomicUsize::new(0));
        let results = resolve_all(words.clone(), resolver, 2, completed)
            .await
            .expect("pool succeeded");
        runs.push(gradus_core::sort_and_dedup(results));
    }

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[0].first().map(|e| e.level), Some(Level::A1));
}

#[tokio::test]
async fn zero_candidates_resolve_immediately() {
    let fetcher = Arc::new(FakeFetcher::new(HashMap::new()));
    let resolver = resolver_over(fetcher);
    let completed = Arc::new(AtomicUsize::new(0));

    let results = resolve_all(HashSet::new(), resolver, 8, Arc::clone(&completed))
        .await
        .expect("pool succeeded");

    assert!(results.is_empty());
    assert_eq!(completed.load(Ordering::SeqCst), 0);
}
