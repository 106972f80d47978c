use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

use swipe_core::app::{DeckBuilder, DeckDriver, run_outbox};
use swipe_core::domain::{ItemBatch, ProductItem};
use swipe_core::impls::ChannelSink;

mod logger;
mod script;
mod settings;

use logger::{SessionContext, StdoutLogger};
use script::{Step, parse_script};

const DEFAULT_SCRIPT: &str = "drag:150 nudge:60 drag:-200 key:right like pass";

/// Drive a swipe deck from a gesture script and print the decisions.
#[derive(Parser, Debug)]
struct Args {
    /// JSON file: `{"items": [...]}` or a bare array of products.
    #[arg(long)]
    items: Option<PathBuf>,

    /// TOML file with gesture tuning; `SWIPE__*` env vars override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gestures, e.g. "drag:150 key:left like wait:300".
    #[arg(long, default_value = DEFAULT_SCRIPT)]
    script: String,

    /// Access token for the interaction log.
    #[arg(long)]
    token: Option<String>,

    /// Frame interval of the deck driver.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    // (A) 設定・アイテム・スクリプトを読む
    let config = settings::load_settings(args.config.as_deref())?;
    let items = load_items(args.items.as_deref())?;
    let gestures = parse_script(&args.script)?;
    let frame = Duration::from_millis(args.frame_ms.max(1));
    // fly-out plus a couple of frames for the timer to be noticed
    let settle = config.release_duration() + frame * 2;

    // (B) デッキを組み立て、driver と outbox を起動
    let (sink, outbox_rx) = ChannelSink::<ProductItem>::channel();
    let deck = DeckBuilder::new(sink)
        .items(items)
        .config(config)
        .build()
        .context("invalid deck configuration")?;
    info!(deck_id = %deck.id(), total = deck.items().len(), "deck ready");

    let logger = Arc::new(StdoutLogger::new(SessionContext::new(args.token)));
    let outbox = tokio::spawn(run_outbox(outbox_rx, logger));
    let driver = DeckDriver::spawn(deck, frame);

    // (C) スクリプトを流す
    for gesture in gestures {
        if driver.latest_view().exhausted {
            warn!(?gesture, "deck exhausted, remaining gestures skipped");
            break;
        }
        match gesture.step() {
            Step::Inputs(events) => {
                for event in events {
                    driver.input(event)?;
                }
            }
            Step::Like => driver.accept()?,
            Step::Pass => driver.reject()?,
            Step::Wait(ms) => {
                sleep(Duration::from_millis(ms)).await;
                continue;
            }
        }
        sleep(settle).await;
    }

    // (D) 停止: driver -> sink(drop) -> outbox の順に畳む
    let deck = driver.shutdown_and_join().await?;
    let counts = deck.counts();
    drop(deck);
    let stats = outbox.await.context("outbox task failed")?;

    println!("counts: {}", serde_json::to_string(&counts)?);
    println!("outbox: {}", serde_json::to_string(&stats)?);
    Ok(())
}

fn load_items(path: Option<&std::path::Path>) -> anyhow::Result<Vec<ProductItem>> {
    let Some(path) = path else {
        return Ok(sample_items());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items '{}'", path.display()))?;
    let batch: ItemBatch<ProductItem> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse items '{}'", path.display()))?;
    Ok(batch.into_items())
}

fn sample_items() -> Vec<ProductItem> {
    vec![
        ProductItem::new(15970i64, "Turtle Check Men Navy Blue Shirt")
            .with_category("Apparel", "Topwear")
            .with_colour("Navy Blue"),
        ProductItem::new(39386i64, "Peter England Men Party Blue Jeans")
            .with_category("Apparel", "Bottomwear")
            .with_colour("Blue"),
        ProductItem::new(59263i64, "Titan Women Silver Watch")
            .with_category("Accessories", "Watches")
            .with_colour("Silver"),
        ProductItem::new(21379i64, "Manchester United Men Solid Black Track Pants")
            .with_category("Apparel", "Bottomwear")
            .with_colour("Black"),
        ProductItem::new(53759i64, "Puma Men Grey T-shirt")
            .with_category("Apparel", "Topwear")
            .with_colour("Grey"),
    ]
}
