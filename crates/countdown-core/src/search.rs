use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;

use crate::error::{SolveError, WordListError};
use crate::words::WordSource;

/// Stream of solver matches. A failure, if any, is the last item.
pub type Matches = AsyncReceiver<Result<String, SolveError>>;

/// Scan `source` on a tokio task and forward every accepted word.
///
/// `on_empty` is sent when the whole list was read without a match.
/// Dropping the receiver stops the scan.
pub fn spawn_search<F>(
    source: Arc<dyn WordSource>,
    capacity: usize,
    accept: F,
    on_empty: SolveError,
) -> Matches
where
    F: Fn(&str) -> bool + Send + 'static,
{
    spawn_search_task(source, capacity, accept, on_empty).0
}

fn spawn_search_task<F>(
    source: Arc<dyn WordSource>,
    capacity: usize,
    accept: F,
    on_empty: SolveError,
) -> (Matches, JoinHandle<()>)
where
    F: Fn(&str) -> bool + Send + 'static,
{
    let (tx, rx) = kanal::bounded_async(capacity);

    let handle = tokio::spawn(async move {
        match forward_matches(source.as_ref(), &tx, accept).await {
            Ok(0) => {
                let _ = tx.send(Err(on_empty)).await;
            }
            Ok(found) => tracing::debug!("Search finished with {} matches", found),
            Err(e) => {
                tracing::warn!("Search over {} failed: {}", source.describe(), e);
                let _ = tx.send(Err(e.into())).await;
            }
        }
    });

    (rx, handle)
}

async fn forward_matches<F>(
    source: &dyn WordSource,
    tx: &AsyncSender<Result<String, SolveError>>,
    accept: F,
) -> Result<usize, WordListError>
where
    F: Fn(&str) -> bool,
{
    let mut lines = source.open().await?;
    let mut found = 0usize;

    while let Some(line) = lines.next_line().await? {
        let word = line.trim();
        if word.is_empty() || !accept(word) {
            continue;
        }
        found += 1;
        if tx.send(Ok(word.to_string())).await.is_err() {
            tracing::debug!("Receiver dropped, stopping search");
            break;
        }
    }

    Ok(found)
}

/// Drain a match stream into a vector, stopping at the first error
pub async fn collect_matches(matches: Matches) -> Result<Vec<String>, SolveError> {
    let mut words = Vec::new();
    while let Ok(item) = matches.recv().await {
        words.push(item?);
    }
    Ok(words)
}
