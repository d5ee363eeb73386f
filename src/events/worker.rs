//! Background workers: query debouncing and catalog loading.

use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    task::JoinHandle,
    time::{Duration, sleep},
};

use crate::events::{LoadResult, RefreshRequest};
use crate::sources::CatalogLoader;

/// Debounce window for multi-character queries.
const DEBOUNCE_MS: u64 = 50;

/// What: Spawn the query debounce stage.
///
/// Inputs:
/// - `raw_rx`: Raw query text, one message per keystroke.
/// - `settled_tx`: Settled queries, ready for the state machine.
///
/// Output:
/// - Task handle; the task ends when either channel closes.
///
/// Details:
/// - Empty and single-character inputs pass through immediately so that
///   clearing the field and the first typed character feel instant.
/// - Longer inputs wait out a 50ms window; a newer keystroke inside the
///   window supersedes the pending one (last write wins, a stale timer is
///   never applied alongside a newer query).
pub fn spawn_query_worker(
    mut raw_rx: mpsc::UnboundedReceiver<String>,
    settled_tx: mpsc::UnboundedSender<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = raw_rx.recv().await else {
                break;
            };
            while wants_debounce(&latest) {
                select! {
                    next = raw_rx.recv() => {
                        match next {
                            Some(next) => latest = next,
                            None => break,
                        }
                    }
                    () = sleep(Duration::from_millis(DEBOUNCE_MS)) => break,
                }
            }
            if settled_tx.send(latest).is_err() {
                break;
            }
        }
    })
}

/// Whether a raw input should wait out the debounce window.
fn wants_debounce(raw: &str) -> bool {
    raw.trim().chars().count() > 1
}

/// What: Spawn the catalog loading service.
///
/// Inputs:
/// - `loader`: The injected loader (fetcher + cache).
/// - `urls`: Configured source URLs, loaded in order on every request.
/// - `refresh_rx`: Load requests; served sequentially, one at a time.
/// - `results_tx`: Finished loads for the host to apply via
///   [`crate::logic::apply_load_result`].
///
/// Output:
/// - Task handle; the task ends when either channel closes.
///
/// Details:
/// - The typical open-picker sequence is a plain request (serves cached
///   payloads instantly) followed by `{ force: true, background: true }`
///   to refresh behind the shown data.
pub fn spawn_loader_worker(
    loader: Arc<CatalogLoader>,
    urls: Vec<String>,
    mut refresh_rx: mpsc::UnboundedReceiver<RefreshRequest>,
    results_tx: mpsc::UnboundedSender<LoadResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = refresh_rx.recv().await {
            tracing::debug!(
                force = request.force,
                background = request.background,
                sources = urls.len(),
                "loading catalog sources"
            );
            let outcome = loader.load_all(&urls, request.force).await;
            let result = LoadResult {
                outcome,
                background: request.background,
            };
            if results_tx.send(result).is_err() {
                break;
            }
        }
    })
}
