//! Strongly-typed identifiers for decks and card instances.
//!
//! ULID ベースの ID を Phantom type でラップします。
//! `DeckId` と `CardId` は同じ 128-bit 表現ですが、型としては混同できません。
//!
//! A `CardId` names one *card instance*, not an item: the same item dealt
//! twice (e.g. after `replace_items`) gets a fresh id, which is what lets the
//! deck recognise stale decisions from a card that is already gone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait providing the display prefix ("deck-", "card-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic ULID-backed id. `T` only exists at compile time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

// ========================================
// マーカー型
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeckInstance {}

impl IdMarker for DeckInstance {
    fn prefix() -> &'static str {
        "deck-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardInstance {}

impl IdMarker for CardInstance {
    fn prefix() -> &'static str {
        "card-"
    }
}

/// Identifier of a deck (one controller instance).
pub type DeckId = Id<DeckInstance>;

/// Identifier of a dealt card (one Card Gesture Controller instance).
pub type CardId = Id<CardInstance>;
