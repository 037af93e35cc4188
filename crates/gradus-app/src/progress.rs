use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Print the completion percentage until cancelled.
///
/// Polls the shared counter between sleeps; a zero total returns before
/// the first tick. The counter only grows and is clamped to the total, so
/// reported percentages never go backwards and never pass 100%.
pub async fn report_progress(
    total: usize,
    completed: Arc<AtomicUsize>,
    cancel: CancellationToken,
) {
    if total == 0 {
        return;
    }

    let mut interval = tokio::time::interval(POLL_INTERVAL);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                let done = completed.load(Ordering::Relaxed).min(total);
                print!("\r{:.0}% completed...", done as f64 / total as f64 * 100.0);
                let _ = std::io::stdout().flush();
            }
        }
    }
}
