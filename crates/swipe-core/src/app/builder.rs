//! DeckBuilder - デッキの構築とワイヤリング
//!
//! Fail-fast: the tuning is validated once in `build()`, so a deck that
//! exists always has a usable threshold and release duration.

use std::sync::Arc;

use super::deck::Deck;
use crate::domain::{ConfigError, DeckItem, SwipeConfig};
use crate::ports::{Clock, DecisionSink, IdGenerator, SystemClock, UlidGenerator};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid swipe config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Builds a [`Deck`].
///
/// ```ignore
/// let deck = DeckBuilder::new(sink)
///     .items(recommendations)
///     .config(SwipeConfig::default_v1())
///     .build()?;
/// ```
pub struct DeckBuilder<T, S> {
    items: Arc<[T]>,
    sink: S,
    config: SwipeConfig,
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl<T: DeckItem, S: DecisionSink<T>> DeckBuilder<T, S> {
    pub fn new(sink: S) -> Self {
        Self {
            items: Arc::from(Vec::new()),
            sink,
            config: SwipeConfig::default_v1(),
            clock: None,
            ids: None,
        }
    }

    pub fn items(mut self, items: impl Into<Arc<[T]>>) -> Self {
        self.items = items.into();
        self
    }

    pub fn config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Arc::new(ids));
        self
    }

    pub fn build(self) -> Result<Deck<T, S>, BuildError> {
        self.config.validate()?;

        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let ids: Arc<dyn IdGenerator> = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(Arc::clone(&clock))));

        Ok(Deck::new(
            self.items,
            self.sink,
            Arc::new(self.config),
            clock,
            ids,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKey;
    use crate::impls::RecordingSink;

    #[test]
    fn test_build_success() {
        let deck = DeckBuilder::new(RecordingSink::<ItemKey>::new())
            .items(vec![ItemKey::Num(1)])
            .build();
        assert!(deck.is_ok());
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let deck = DeckBuilder::<ItemKey, _>::new(RecordingSink::new())
            .config(SwipeConfig {
                swipe_threshold: -5.0,
                ..SwipeConfig::default_v1()
            })
            .build();
        assert!(matches!(
            deck,
            Err(BuildError::InvalidConfig(ConfigError::InvalidThreshold(t))) if t == -5.0
        ));
    }

    #[test]
    fn test_build_without_items_is_exhausted() {
        let deck = DeckBuilder::<ItemKey, _>::new(RecordingSink::new())
            .build()
            .unwrap();
        assert!(deck.is_exhausted());
    }
}
