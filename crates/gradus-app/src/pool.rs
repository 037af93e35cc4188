use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use gradus_core::WordLevel;
use gradus_dictionary::PageResolver;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Resolve every candidate with bounded parallelism.
///
/// At most `min(max_fetches, candidates)` lookups run at once: a permit is
/// taken before each task is spawned and rides along until it finishes.
/// Tasks hand their entry back over a channel and bump the shared counter
/// the progress reporter watches; the collector owns the only result
/// buffer. Returns once every candidate has produced exactly one entry.
pub async fn resolve_all(
    words: HashSet<String>,
    resolver: Arc<PageResolver>,
    max_fetches: usize,
    completed: Arc<AtomicUsize>,
) -> Result<Vec<WordLevel>> {
    let total = words.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    // never more workers than there is work
    let permits = max_fetches.clamp(1, total);
    let semaphore = Arc::new(Semaphore::new(permits));
    let (tx, rx) = kanal::bounded_async::<WordLevel>(total);
    let mut tasks = JoinSet::new();

    for word in words {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .context("worker semaphore closed")?;
        let resolver = Arc::clone(&resolver);
        let completed = Arc::clone(&completed);
        let tx = tx.clone();

        tasks.spawn(async move {
            let _permit = permit;
            let entry = resolver.resolve(&word).await;
            completed.fetch_add(1, Ordering::Relaxed);
            if let Err(e) = tx.send(entry).await {
                tracing::error!("failed to hand back the result for {:?}: {}", word, e);
            }
        });
    }
    drop(tx);

    // the channel is sized for every result, so this drains without
    // blocking any worker
    let mut results = Vec::with_capacity(total);
    while let Ok(entry) = rx.recv().await {
        results.push(entry);
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::error!("resolver task failed: {}", e);
        }
    }

    Ok(results)
}
