//! Card gesture controller: one displayed item, one decision.
//!
//! A card turns pointer / keyboard input into exactly one [`Decision`] and a
//! fly-out. It never touches deck state; the owner polls [`Card::take_due`]
//! and applies the decision itself.
//!
//! The same type renders the lookahead card. A [`Interactivity::Static`] card
//! ignores every input event, so there is no separate "preview card" type.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use super::config::SwipeConfig;
use super::decision::Decision;
use super::geometry::{Displacement, Point};
use super::ids::CardId;
use super::input::{InputEvent, Key, PointerId};
use super::item::DeckItem;
use super::state::{CardPhase, CardState, ReleaseTimer};
use super::view::{CardTransform, CardView, HintVisibility};

/// Whether input is wired to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    Interactive,
    Static,
}

/// What an input event did to the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Not applicable in the current state (or the card is static).
    Ignored,
    DragStarted,
    Dragged,
    /// Drag ended within the threshold; back to rest.
    SnappedBack,
    Released(Decision),
}

#[derive(Debug, Clone)]
pub struct Card<T> {
    id: CardId,
    item: T,
    interactivity: Interactivity,
    state: CardState,
    /// Drag offset, or the fly-out target once released.
    displacement: Displacement,
    config: Arc<SwipeConfig>,
}

impl<T> Card<T> {
    pub fn new(
        id: CardId,
        item: T,
        interactivity: Interactivity,
        config: Arc<SwipeConfig>,
    ) -> Self {
        Self {
            id,
            item,
            interactivity,
            state: CardState::Idle,
            displacement: Displacement::ZERO,
            config,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn into_item(self) -> T {
        self.item
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn phase(&self) -> CardPhase {
        self.state.phase()
    }

    pub fn displacement(&self) -> Displacement {
        self.displacement
    }

    pub fn is_interactive(&self) -> bool {
        self.interactivity == Interactivity::Interactive
    }

    pub fn is_released(&self) -> bool {
        self.state.is_released()
    }

    /// Wire input to a card that was dealt as the lookahead.
    pub fn promote(&mut self) {
        self.interactivity = Interactivity::Interactive;
    }

    pub fn captured_pointer(&self) -> Option<PointerId> {
        match self.state {
            CardState::Dragging { pointer, .. } => Some(pointer),
            _ => None,
        }
    }

    pub fn handle(&mut self, input: InputEvent, now: DateTime<Utc>) -> Transition {
        if !self.is_interactive() || self.is_released() {
            return Transition::Ignored;
        }
        match input {
            InputEvent::PointerDown { pointer, position } => self.pointer_down(pointer, position),
            InputEvent::PointerMove {
                pointer,
                position,
                pressure,
            } => self.pointer_move(pointer, position, pressure),
            InputEvent::PointerUp { pointer } | InputEvent::LostCapture { pointer } => {
                self.pointer_up(pointer, now)
            }
            InputEvent::Key { key } => self.key(key, now),
        }
    }

    fn pointer_down(&mut self, pointer: PointerId, position: Point) -> Transition {
        match self.state {
            CardState::Idle => {
                self.state = CardState::Dragging {
                    pointer,
                    origin: position - self.displacement,
                };
                Transition::DragStarted
            }
            _ => Transition::Ignored,
        }
    }

    fn pointer_move(&mut self, pointer: PointerId, position: Point, pressure: f32) -> Transition {
        match self.state {
            CardState::Dragging {
                pointer: captured,
                origin,
            } if captured == pointer && pressure > 0.0 => {
                self.displacement = position - origin;
                Transition::Dragged
            }
            _ => Transition::Ignored,
        }
    }

    fn pointer_up(&mut self, pointer: PointerId, now: DateTime<Utc>) -> Transition {
        match self.state {
            CardState::Dragging {
                pointer: captured, ..
            } if captured == pointer => {
                match Decision::from_horizontal(self.displacement.dx, self.config.swipe_threshold)
                {
                    Some(decision) => self.release(decision, now),
                    None => {
                        self.state = CardState::Idle;
                        self.displacement = Displacement::ZERO;
                        Transition::SnappedBack
                    }
                }
            }
            _ => Transition::Ignored,
        }
    }

    fn key(&mut self, key: Key, now: DateTime<Utc>) -> Transition {
        match key {
            Key::ArrowRight => self.release(Decision::Accept, now),
            Key::ArrowLeft => self.release(Decision::Reject, now),
            Key::Other => Transition::Ignored,
        }
    }

    /// Fix the decision and start the fly-out.
    ///
    /// Shared by drag completion, keyboard shortcuts and the deck's manual
    /// controls. A second call is ignored.
    pub fn release(&mut self, decision: Decision, now: DateTime<Utc>) -> Transition {
        if !self.is_interactive() || self.is_released() {
            return Transition::Ignored;
        }
        let from = self.displacement;
        let delay = TimeDelta::milliseconds(
            i64::try_from(self.config.release_duration_ms).unwrap_or(i64::MAX),
        );
        let deadline = now
            .checked_add_signed(delay)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.displacement =
            Displacement::new(decision.sign() * self.config.fly_out_distance(), from.dy);
        self.state = CardState::Released {
            decision,
            from,
            started_at: now,
            timer: ReleaseTimer::arm(deadline),
        };
        Transition::Released(decision)
    }

    /// Fires the release timer: returns the decision exactly once, at or
    /// after the deadline.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<Decision> {
        if let CardState::Released {
            decision, timer, ..
        } = &mut self.state
            && timer.fire_if_due(now)
        {
            return Some(*decision);
        }
        None
    }

    /// The released decision, once its timer has fired. `None` while idle,
    /// dragging or still flying out.
    pub fn settled_decision(&self) -> Option<Decision> {
        match self.state {
            CardState::Released {
                decision, timer, ..
            } if !timer.is_armed() => Some(decision),
            _ => None,
        }
    }

    /// Deadline of a pending release, if any.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            CardState::Released { timer, .. } if timer.is_armed() => Some(timer.deadline()),
            _ => None,
        }
    }

    /// Teardown: drop pointer capture and disarm any pending release.
    ///
    /// Returns the pointer whose capture was released.
    pub fn cancel(&mut self) -> Option<PointerId> {
        match &mut self.state {
            CardState::Dragging { pointer, .. } => {
                let pointer = *pointer;
                self.state = CardState::Idle;
                self.displacement = Displacement::ZERO;
                Some(pointer)
            }
            CardState::Released { timer, .. } => {
                timer.cancel();
                None
            }
            CardState::Idle => None,
        }
    }

    /// Fly-out progress in `0..=1`, eased; `None` unless released.
    pub fn fly_out_progress(&self, now: DateTime<Utc>) -> Option<f64> {
        let CardState::Released { started_at, .. } = self.state else {
            return None;
        };
        let elapsed = (now - started_at).num_milliseconds().max(0) as f64;
        let t = (elapsed / self.config.release_duration_ms as f64).min(1.0);
        Some(ease_out_cubic(t))
    }

    /// Displacement to draw at `now`: the drag offset, or a point along the
    /// fly-out path.
    pub fn rendered_displacement(&self, now: DateTime<Utc>) -> Displacement {
        match (self.state, self.fly_out_progress(now)) {
            (CardState::Released { from, .. }, Some(progress)) => {
                from.lerp(self.displacement, progress)
            }
            _ => self.displacement,
        }
    }

    pub fn transform(&self, now: DateTime<Utc>) -> CardTransform {
        CardTransform::from_displacement(self.rendered_displacement(now), &self.config)
    }

    /// Hints are hidden once the card is released.
    pub fn hints(&self) -> HintVisibility {
        if self.is_released() {
            HintVisibility::HIDDEN
        } else {
            HintVisibility::from_displacement(self.displacement, &self.config)
        }
    }
}

impl<T: DeckItem> Card<T> {
    pub fn view(&self, now: DateTime<Utc>) -> CardView {
        let interactive = self.is_interactive();
        let (transform, hints, style) = if interactive {
            (self.transform(now), self.hints(), None)
        } else {
            (
                CardTransform::IDENTITY,
                HintVisibility::HIDDEN,
                Some(self.config.lookahead),
            )
        };
        CardView {
            card_id: self.id,
            key: self.item.key(),
            phase: self.phase(),
            interactive,
            z_index: if interactive { 2 } else { 1 },
            transform,
            hints,
            animating: self
                .fly_out_progress(now)
                .is_some_and(|progress| progress < 1.0),
            style,
        }
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
