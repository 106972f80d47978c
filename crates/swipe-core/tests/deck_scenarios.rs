//! End-to-end deck scenarios over product items: gestures in, interaction
//! records out.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use swipe_core::app::{DeckBuilder, OutboxStats, run_outbox};
use swipe_core::domain::{
    CardPhase, CardTransform, Decision, InputEvent, ItemBatch, ItemKey, Key, ProductItem,
    SwipeConfig, Transition,
};
use swipe_core::impls::{ChannelSink, MemoryLogger};
use swipe_core::ports::FixedClock;

fn catalogue() -> Vec<ProductItem> {
    let batch: ItemBatch<ProductItem> = serde_json::from_value(serde_json::json!({
        "items": [
            { "id": 1, "productDisplayName": "Navy Shirt", "masterCategory": "Apparel" },
            { "id": 2, "name": "Blue Jeans", "image_url": "https://img.example/2.jpg" },
            { "id": 3 }
        ]
    }))
    .unwrap();
    batch.into_items()
}

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap())
}

#[tokio::test]
async fn swipes_flow_through_to_interaction_log() {
    let clock = clock();
    let (sink, rx) = ChannelSink::<ProductItem>::channel();
    let mut deck = DeckBuilder::new(sink)
        .items(catalogue())
        .clock(clock.clone())
        .build()
        .unwrap();

    // right swipe past the threshold
    deck.handle(InputEvent::down(100.0, 100.0));
    deck.handle(InputEvent::drag_to(260.0, 120.0));
    assert_eq!(deck.handle(InputEvent::up()), Transition::Released(Decision::Accept));
    clock.advance(Duration::from_millis(220));
    assert!(deck.tick().is_some());

    // short drag snaps back and decides nothing
    deck.handle(InputEvent::down(100.0, 100.0));
    deck.handle(InputEvent::drag_to(150.0, 100.0));
    assert_eq!(deck.handle(InputEvent::up()), Transition::SnappedBack);
    let top = deck.view().top.unwrap();
    assert_eq!(top.phase, CardPhase::Idle);
    assert_eq!(top.transform, CardTransform::IDENTITY);

    // keyboard reject, then manual like on the last card
    deck.handle(InputEvent::key(Key::ArrowLeft));
    clock.advance(Duration::from_millis(220));
    deck.tick();
    deck.accept();
    clock.advance(Duration::from_millis(220));
    deck.tick();

    let view = deck.view();
    assert!(view.exhausted);
    assert!(view.top.is_none());
    let counts = deck.counts();
    assert_eq!((counts.accepted, counts.rejected, counts.remaining), (2, 1, 0));

    drop(deck);
    let logger = Arc::new(MemoryLogger::<ProductItem>::new());
    let stats = run_outbox(rx, Arc::clone(&logger)).await;
    assert_eq!(stats, OutboxStats { delivered: 3, failed: 0 });

    let logged: Vec<(ItemKey, bool, bool)> = logger
        .entries()
        .await
        .into_iter()
        .map(|entry| (entry.item.id, entry.viewed, entry.liked))
        .collect();
    assert_eq!(
        logged,
        vec![
            (ItemKey::Num(1), true, true),
            (ItemKey::Num(2), true, false),
            (ItemKey::Num(3), true, true),
        ]
    );
}

#[test]
fn lookahead_card_is_static_and_styled() {
    let config = SwipeConfig::default_v1();
    let mut deck = DeckBuilder::new(swipe_core::impls::RecordingSink::new())
        .items(catalogue())
        .config(config.clone())
        .clock(clock())
        .build()
        .unwrap();

    deck.handle(InputEvent::down(0.0, 0.0));
    deck.handle(InputEvent::drag_to(-60.0, 0.0));

    let view = deck.view();
    let top = view.top.unwrap();
    let below = view.lookahead.unwrap();
    assert!(top.interactive);
    assert!(top.hints.reject);
    assert_eq!(top.transform.rotation_deg, -7.5);
    assert!(top.z_index > below.z_index);

    assert!(!below.interactive);
    assert_eq!(below.key, ItemKey::Num(2));
    assert_eq!(below.transform, CardTransform::IDENTITY);
    assert_eq!(below.style, Some(config.lookahead));
}

#[test]
fn empty_deal_is_exhausted_immediately() {
    let deck = DeckBuilder::new(swipe_core::impls::RecordingSink::<ProductItem>::new())
        .items(Vec::new())
        .clock(clock())
        .build()
        .unwrap();
    let view = deck.view();
    assert!(view.exhausted);
    assert!(view.top.is_none() && view.lookahead.is_none());
}
