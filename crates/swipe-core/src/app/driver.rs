//! DeckDriver - tokio タスク上でデッキを動かす
//!
//! - commands は mpsc で受け取る（pointer / key / manual controls / re-deal）
//! - フレームタイマーで `Deck::tick()` を呼び、release timer を発火させる
//! - 最新の `DeckView` を watch で公開する
//! - shutdown を受けたら `Deck::dispose()` してから終了する
//!
//! The deck itself stays single-threaded: everything happens inside one task.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::deck::Deck;
use crate::domain::{DeckItem, DeckView, InputEvent};
use crate::ports::DecisionSink;

/// What a host can ask of a running deck.
#[derive(Debug, Clone)]
pub enum DeckCommand<T> {
    Input(InputEvent),
    Accept,
    Reject,
    Replace(Vec<T>),
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("deck driver is no longer running")]
    Stopped,

    #[error("deck driver task failed: {0}")]
    Join(#[from] JoinError),
}

/// Handle to a deck running on its own task.
/// - `request_shutdown()` で停止要求
/// - `shutdown_and_join()` で停止を待ち、dispose 済みの Deck を取り戻す
pub struct DeckDriver<T, S> {
    commands: mpsc::UnboundedSender<DeckCommand<T>>,
    views: watch::Receiver<DeckView>,
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<Deck<T, S>>,
}

impl<T, S> DeckDriver<T, S>
where
    T: DeckItem + Send + Sync + 'static,
    S: DecisionSink<T> + Send + 'static,
{
    /// Spawn the deck; `frame` is how often release timers are checked.
    pub fn spawn(deck: Deck<T, S>, frame: Duration) -> Self {
        let (commands, commands_rx) = mpsc::unbounded_channel();
        let (views_tx, views) = watch::channel(deck.view());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let join = tokio::spawn(drive(deck, frame, commands_rx, views_tx, shutdown_rx));

        Self {
            commands,
            views,
            shutdown_tx,
            join,
        }
    }

    pub fn send(&self, command: DeckCommand<T>) -> Result<(), DriverError> {
        self.commands
            .send(command)
            .map_err(|_| DriverError::Stopped)
    }

    pub fn input(&self, input: InputEvent) -> Result<(), DriverError> {
        self.send(DeckCommand::Input(input))
    }

    pub fn accept(&self) -> Result<(), DriverError> {
        self.send(DeckCommand::Accept)
    }

    pub fn reject(&self) -> Result<(), DriverError> {
        self.send(DeckCommand::Reject)
    }

    pub fn replace_items(&self, items: Vec<T>) -> Result<(), DriverError> {
        self.send(DeckCommand::Replace(items))
    }

    /// Subscribe to frames.
    pub fn views(&self) -> watch::Receiver<DeckView> {
        self.views.clone()
    }

    pub fn latest_view(&self) -> DeckView {
        self.views.borrow().clone()
    }

    pub fn request_shutdown(&self) {
        // receiver may already be gone if the task ended
        let _ = self.shutdown_tx.send(true);
    }

    /// Stop the task and get the (disposed) deck back.
    pub async fn shutdown_and_join(self) -> Result<Deck<T, S>, DriverError> {
        self.request_shutdown();
        Ok(self.join.await?)
    }
}

async fn drive<T, S>(
    mut deck: Deck<T, S>,
    frame: Duration,
    mut commands: mpsc::UnboundedReceiver<DeckCommand<T>>,
    views_tx: watch::Sender<DeckView>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Deck<T, S>
where
    T: DeckItem,
    S: DecisionSink<T>,
{
    let deck_id = deck.id();
    let mut frames = tokio::time::interval(frame);
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
    debug!(%deck_id, ?frame, "deck driver started");

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            changed = shutdown_rx.changed() => {
                // sender dropped: nobody can stop us any more, so stop now
                if changed.is_err() {
                    break;
                }
                continue;
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                apply(&mut deck, command);
            }
            _ = frames.tick() => {
                deck.tick();
            }
        }

        views_tx.send_replace(deck.view());
    }

    if let Some(pointer) = deck.dispose() {
        debug!(%deck_id, ?pointer, "pointer capture released on shutdown");
    }
    views_tx.send_replace(deck.view());
    debug!(%deck_id, "deck driver stopped");
    deck
}

fn apply<T: DeckItem, S: DecisionSink<T>>(deck: &mut Deck<T, S>, command: DeckCommand<T>) {
    match command {
        DeckCommand::Input(input) => {
            deck.handle(input);
        }
        DeckCommand::Accept => {
            deck.accept();
        }
        DeckCommand::Reject => {
            deck.reject();
        }
        DeckCommand::Replace(items) => {
            deck.replace_items(items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DeckBuilder;
    use crate::domain::{CardPhase, Decision, ItemKey, Key};
    use crate::impls::RecordingSink;
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    const FRAME: Duration = Duration::from_millis(5);

    fn fixture(
        names: &[&str],
    ) -> (
        DeckDriver<ItemKey, RecordingSink<ItemKey>>,
        RecordingSink<ItemKey>,
        FixedClock,
    ) {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
        let sink = RecordingSink::new();
        let items: Vec<ItemKey> = names.iter().map(|name| ItemKey::from(*name)).collect();
        let deck = DeckBuilder::new(sink.clone())
            .items(items)
            .clock(clock.clone())
            .build()
            .unwrap();
        (DeckDriver::spawn(deck, FRAME), sink, clock)
    }

    async fn eventually(mut condition: impl FnMut() -> bool) {
        for _ in 0..400 {
            if condition() {
                return;
            }
            tokio::time::sleep(FRAME).await;
        }
        panic!("condition not reached in time");
    }

    fn top_phase(driver: &DeckDriver<ItemKey, RecordingSink<ItemKey>>) -> Option<CardPhase> {
        driver.latest_view().top.map(|card| card.phase)
    }

    #[tokio::test]
    async fn key_press_is_decided_on_a_later_frame() {
        let (driver, sink, clock) = fixture(&["A", "B"]);

        driver.input(InputEvent::key(Key::ArrowLeft)).unwrap();
        eventually(|| top_phase(&driver) == Some(CardPhase::Released)).await;
        assert!(sink.is_empty());

        clock.advance(Duration::from_millis(220));
        eventually(|| sink.len() == 1).await;
        eventually(|| {
            driver.latest_view().top.map(|card| card.key) == Some(ItemKey::from("B"))
        })
        .await;

        let deck = driver.shutdown_and_join().await.unwrap();
        assert_eq!(sink.calls(), vec![(Decision::Reject, ItemKey::from("A"))]);
        assert_eq!(deck.counts().rejected, 1);
    }

    #[tokio::test]
    async fn shutdown_cancels_pending_release() {
        let (driver, sink, clock) = fixture(&["A"]);

        driver.accept().unwrap();
        eventually(|| top_phase(&driver) == Some(CardPhase::Released)).await;

        let mut deck = driver.shutdown_and_join().await.unwrap();
        clock.advance(Duration::from_secs(1));

        assert!(deck.is_disposed());
        assert!(deck.tick().is_none());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn replace_command_re_deals() {
        let (driver, sink, _clock) = fixture(&["A"]);

        driver
            .replace_items(vec![ItemKey::from("X"), ItemKey::from("Y")])
            .unwrap();
        eventually(|| {
            let view = driver.latest_view();
            view.top.map(|card| card.key) == Some(ItemKey::from("X"))
                && view.lookahead.map(|card| card.key) == Some(ItemKey::from("Y"))
        })
        .await;

        driver.shutdown_and_join().await.unwrap();
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn dropping_the_handle_stops_the_task() {
        let (driver, _sink, _clock) = fixture(&["A"]);
        let mut views = driver.views();
        drop(driver);

        // the final frame is published after dispose, then the sender goes away
        while views.changed().await.is_ok() {}
        assert!(views.borrow().top.is_none());
    }
}
