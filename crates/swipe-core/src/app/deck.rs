//! Deck controller: the ordered queue, its cursor, and the two visible cards.
//!
//! Design:
//! - The item list is immutable (`Arc<[T]>`); consumption is a cursor.
//! - Exactly one interactive card (the head) and at most one static
//!   lookahead card (head + 1) exist at any time.
//! - Decisions are applied only for the current head's card id, and only
//!   once its fly-out has finished in the released direction, which makes
//!   late timer callbacks and double clicks harmless.
//! - The deck never sleeps: the host calls [`Deck::tick`] from its frame loop
//!   and the release deadline is compared against the injected clock.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::builder::DeckBuilder;
use super::status::DeckCounts;
use crate::domain::{
    Card, CardId, Decision, DeckId, DeckItem, DeckView, InputEvent, Interactivity, PointerId,
    SwipeConfig, Transition, Verdict,
};
use crate::ports::{Clock, DecisionSink, IdGenerator};

pub struct Deck<T, S> {
    id: DeckId,
    items: Arc<[T]>,
    cursor: usize,
    top: Option<Card<T>>,
    lookahead: Option<Card<T>>,
    sink: S,
    config: Arc<SwipeConfig>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    accepted: usize,
    rejected: usize,
    disposed: bool,
}

impl<T: DeckItem, S: DecisionSink<T>> Deck<T, S> {
    pub fn builder(sink: S) -> DeckBuilder<T, S> {
        DeckBuilder::new(sink)
    }

    pub(crate) fn new(
        items: Arc<[T]>,
        sink: S,
        config: Arc<SwipeConfig>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let mut deck = Self {
            id: ids.generate_deck_id(),
            items,
            cursor: 0,
            top: None,
            lookahead: None,
            sink,
            config,
            clock,
            ids,
            accepted: 0,
            rejected: 0,
            disposed: false,
        };
        deck.deal();
        debug!(deck_id = %deck.id, total = deck.items.len(), "deck dealt");
        deck
    }

    pub fn id(&self) -> DeckId {
        self.id
    }

    /// The full deal, including already-decided items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// "No more items".
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn top_card(&self) -> Option<&Card<T>> {
        self.top.as_ref()
    }

    pub fn lookahead_card(&self) -> Option<&Card<T>> {
        self.lookahead.as_ref()
    }

    pub fn current(&self) -> Option<&T> {
        self.top.as_ref().map(Card::item)
    }

    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.top.as_ref().and_then(Card::captured_pointer)
    }

    /// When the pending release fires; hosts without a frame loop can
    /// schedule a single wake-up for this instant.
    pub fn next_deadline(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.top.as_ref().and_then(Card::deadline)
    }

    pub fn counts(&self) -> DeckCounts {
        DeckCounts {
            total: self.items.len(),
            remaining: self.items.len().saturating_sub(self.cursor),
            accepted: self.accepted,
            rejected: self.rejected,
        }
    }

    /// Route input to the interactive card. The lookahead card never sees it.
    pub fn handle(&mut self, input: InputEvent) -> Transition {
        if self.disposed {
            return Transition::Ignored;
        }
        let now = self.clock.now();
        let Some(card) = self.top.as_mut() else {
            return Transition::Ignored;
        };

        let transition = card.handle(input, now);
        match transition {
            Transition::DragStarted => {
                debug!(deck_id = %self.id, card_id = %card.id(), "drag started");
            }
            Transition::SnappedBack => {
                debug!(deck_id = %self.id, card_id = %card.id(), "snapped back");
            }
            Transition::Released(decision) => {
                debug!(
                    deck_id = %self.id,
                    card_id = %card.id(),
                    item = %card.item().key(),
                    ?decision,
                    "card released"
                );
            }
            Transition::Dragged | Transition::Ignored => {}
        }
        transition
    }

    /// Manual "like" control. Same path as a right swipe: fly-out first,
    /// decision when the timer fires.
    pub fn accept(&mut self) -> Transition {
        self.release(Decision::Accept)
    }

    /// Manual "pass" control.
    pub fn reject(&mut self) -> Transition {
        self.release(Decision::Reject)
    }

    fn release(&mut self, decision: Decision) -> Transition {
        if self.disposed {
            return Transition::Ignored;
        }
        let now = self.clock.now();
        let Some(card) = self.top.as_mut() else {
            return Transition::Ignored;
        };
        let transition = card.release(decision, now);
        if let Transition::Released(decision) = transition {
            debug!(
                deck_id = %self.id,
                card_id = %card.id(),
                ?decision,
                "card released by control"
            );
        }
        transition
    }

    /// Fire a due release timer, if any, and apply its decision.
    pub fn tick(&mut self) -> Option<Verdict<T>> {
        if self.disposed {
            return None;
        }
        let now = self.clock.now();
        let card = self.top.as_mut()?;
        let decision = card.take_due(now)?;
        let card_id = card.id();
        self.decide(decision, card_id)
    }

    /// Apply a completed decision for the card `card_id`.
    ///
    /// Ignored (returns `None`) unless `card_id` is the current head, that
    /// card was released with the same `decision`, and its fly-out timer has
    /// fired. On success the sink is notified first, then the cursor
    /// advances; a sink error is logged and does not stop the advance.
    pub fn decide(&mut self, decision: Decision, card_id: CardId) -> Option<Verdict<T>> {
        if self.disposed {
            debug!(deck_id = %self.id, %card_id, "decision after dispose dropped");
            return None;
        }
        let head = self.top.as_ref().filter(|card| card.id() == card_id);
        let Some(head) = head else {
            debug!(deck_id = %self.id, %card_id, "stale decision ignored");
            return None;
        };
        match head.settled_decision() {
            Some(settled) if settled == decision => {}
            Some(settled) => {
                warn!(
                    deck_id = %self.id,
                    %card_id,
                    ?decision,
                    ?settled,
                    "decision contradicts release ignored"
                );
                return None;
            }
            None => {
                debug!(
                    deck_id = %self.id,
                    %card_id,
                    ?decision,
                    "decision before fly-out finished ignored"
                );
                return None;
            }
        }
        let item = self.top.take()?.into_item();
        let key = item.key();

        let delivered = match decision {
            Decision::Accept => self.sink.on_accept(&item),
            Decision::Reject => self.sink.on_reject(&item),
        };
        if let Err(err) = delivered {
            warn!(deck_id = %self.id, item = %key, error = %err, "decision sink failed");
        }
        match decision {
            Decision::Accept => self.accepted += 1,
            Decision::Reject => self.rejected += 1,
        }
        info!(deck_id = %self.id, %card_id, item = %key, ?decision, "decision applied");

        self.advance();
        if self.is_exhausted() {
            info!(deck_id = %self.id, total = self.items.len(), "deck exhausted");
        }

        Some(Verdict {
            card_id,
            decision,
            item,
        })
    }

    /// Start over with a new deal. Any in-flight card is discarded without
    /// firing. Returns the pointer whose capture was dropped, if any.
    pub fn replace_items(&mut self, items: impl Into<Arc<[T]>>) -> Option<PointerId> {
        if self.disposed {
            warn!(deck_id = %self.id, "replace_items on a disposed deck ignored");
            return None;
        }
        let released = self.discard_cards();
        self.items = items.into();
        self.cursor = 0;
        self.accepted = 0;
        self.rejected = 0;
        self.deal();
        debug!(deck_id = %self.id, total = self.items.len(), "deck re-dealt");
        released
    }

    /// Teardown. Cancels a pending release and drops pointer capture; no
    /// decision is delivered afterwards. Idempotent.
    pub fn dispose(&mut self) -> Option<PointerId> {
        if self.disposed {
            return None;
        }
        let released = self.discard_cards();
        self.disposed = true;
        debug!(deck_id = %self.id, cursor = self.cursor, "deck disposed");
        released
    }

    /// Render surface for the current instant.
    pub fn view(&self) -> DeckView {
        let now = self.clock.now();
        DeckView {
            top: self.top.as_ref().map(|card| card.view(now)),
            lookahead: self.lookahead.as_ref().map(|card| card.view(now)),
            exhausted: self.is_exhausted(),
        }
    }

    fn card_at(&self, index: usize, interactivity: Interactivity) -> Option<Card<T>> {
        let item = self.items.get(index)?.clone();
        Some(Card::new(
            self.ids.generate_card_id(),
            item,
            interactivity,
            Arc::clone(&self.config),
        ))
    }

    fn deal(&mut self) {
        self.top = self.card_at(self.cursor, Interactivity::Interactive);
        self.lookahead = self.card_at(self.cursor + 1, Interactivity::Static);
    }

    /// Promote the lookahead card to head and deal the next lookahead.
    fn advance(&mut self) {
        self.cursor += 1;
        self.top = self.lookahead.take().map(|mut card| {
            card.promote();
            card
        });
        self.lookahead = self.card_at(self.cursor + 1, Interactivity::Static);
    }

    fn discard_cards(&mut self) -> Option<PointerId> {
        let released = self.top.as_mut().and_then(|card| card.cancel());
        self.top = None;
        self.lookahead = None;
        released
    }
}
