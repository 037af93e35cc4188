use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::progress::report_progress;

#[tokio::test]
async fn zero_total_returns_before_the_first_tick() {
    let completed = Arc::new(AtomicUsize::new(0));
    let cancel = CancellationToken::new();

    timeout(
        Duration::from_millis(100),
        report_progress(0, completed, cancel),
    )
    .await
    .expect("returned immediately");
}

#[tokio::test]
async fn stops_promptly_when_cancelled() {
    let completed = Arc::new(AtomicUsize::new(0));
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(report_progress(
        5,
        Arc::clone(&completed),
        cancel.clone(),
    ));

    completed.fetch_add(2, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    timeout(Duration::from_secs(1), handle)
        .await
        .expect("reporter stopped after cancellation")
        .expect("reporter did not panic");
}

#[tokio::test]
async fn survives_a_counter_past_the_total() {
    // the pool can finish between polls; the last report must clamp
    let completed = Arc::new(AtomicUsize::new(7));
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(report_progress(5, Arc::clone(&completed), cancel.clone()));
    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    timeout(Duration::from_secs(1), handle)
        .await
        .expect("reporter stopped")
        .expect("reporter did not panic");
}
