//! Outbox - 判定ログを InteractionLogger に配送する
//!
//! Drains the receiving end of a [`crate::impls::ChannelSink`] until every
//! sender is gone. A failed delivery is logged and counted; it never feeds
//! back into the deck.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::status::OutboxStats;
use crate::domain::DeckItem;
use crate::ports::{InteractionLog, InteractionLogger};

pub async fn run_outbox<T, L>(
    mut rx: mpsc::UnboundedReceiver<InteractionLog<T>>,
    logger: Arc<L>,
) -> OutboxStats
where
    T: DeckItem + Send + 'static,
    L: InteractionLogger<T> + ?Sized,
{
    let mut stats = OutboxStats::default();
    while let Some(entry) = rx.recv().await {
        let key = entry.item.key();
        let liked = entry.liked;
        match logger.log(entry).await {
            Ok(()) => {
                debug!(item = %key, liked, "interaction logged");
                stats.delivered += 1;
            }
            Err(err) => {
                warn!(item = %key, liked, error = %err, "interaction log failed");
                stats.failed += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decision, ItemKey};
    use crate::impls::MemoryLogger;
    use crate::ports::SinkError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `n` deliveries, then forwards to a MemoryLogger.
    struct FlakyLogger {
        remaining_failures: AtomicU32,
        inner: MemoryLogger<ItemKey>,
    }

    #[async_trait]
    impl InteractionLogger<ItemKey> for FlakyLogger {
        async fn log(&self, entry: InteractionLog<ItemKey>) -> Result<(), SinkError> {
            let left = self.remaining_failures.load(Ordering::Relaxed);
            if left > 0 {
                self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
                return Err(SinkError::Other(format!("intentional failure (left={left})")));
            }
            self.inner.log(entry).await
        }
    }

    #[tokio::test]
    async fn failures_are_counted_and_skipped() {
        let logger = Arc::new(FlakyLogger {
            remaining_failures: AtomicU32::new(1),
            inner: MemoryLogger::new(),
        });
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(InteractionLog::decided(ItemKey::from("A"), Decision::Accept))
            .unwrap();
        tx.send(InteractionLog::decided(ItemKey::from("B"), Decision::Reject))
            .unwrap();
        tx.send(InteractionLog::decided(ItemKey::from("C"), Decision::Accept))
            .unwrap();
        drop(tx);

        let stats = run_outbox(rx, Arc::clone(&logger)).await;

        assert_eq!(stats, OutboxStats { delivered: 2, failed: 1 });
        let logged: Vec<(ItemKey, bool)> = logger
            .inner
            .entries()
            .await
            .into_iter()
            .map(|entry| (entry.item, entry.liked))
            .collect();
        assert_eq!(
            logged,
            vec![(ItemKey::from("B"), false), (ItemKey::from("C"), true)]
        );
    }
}
