//! Print the rendered feed page to stdout.
//!
//! Usage: `render_feed [FEED_FILE]`. Without an argument the configured feed
//! (or the bundled sample) is rendered.

use std::path::PathBuf;

use anyhow::Result;
use content_feed::config::FeedConfig;
use content_feed::{render_page, FeedList, FeedRenderer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = FeedConfig::load()?;
    let feed = match std::env::args_os().nth(1) {
        Some(arg) => FeedList::load_from(&PathBuf::from(arg))?,
        None => FeedList::load(cfg.feed_path.as_deref())?,
    };

    let units = FeedRenderer::new(cfg.tiers).render_list(&feed);
    println!("{}", render_page(&units));
    Ok(())
}
