// src/feed.rs
//! Ordered feed lists and their loaders.
//!
//! Every entry gets an [`ItemId`] from its position when the list is built.
//! The id is independent of the item's content, so two articles with the same
//! title still render under distinct keys.

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::item::ContentItem;

pub const ENV_FEED_PATH: &str = "FEED_PATH";

static SAMPLE: Lazy<Vec<ContentItem>> = Lazy::new(|| {
    let raw = include_str!("../data/sample_feed.json");
    serde_json::from_str(raw).expect("valid bundled sample feed")
});

/// Stable per-entry identity, assigned once at list construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: ItemId,
    pub item: ContentItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedList {
    entries: Vec<FeedEntry>,
}

#[derive(Deserialize)]
struct TomlFeed {
    #[serde(default)]
    items: Vec<ContentItem>,
}

impl FeedList {
    pub fn new(items: Vec<ContentItem>) -> Self {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| FeedEntry {
                id: ItemId(i),
                item,
            })
            .collect();
        Self { entries }
    }

    /// The six-item feed bundled with the crate.
    pub fn sample() -> Self {
        Self::new(SAMPLE.clone())
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ContentItem> + '_ {
        self.entries.iter().map(|e| &e.item)
    }

    /// JSON array of tagged items.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let items: Vec<ContentItem> = serde_json::from_str(s).context("parsing JSON feed")?;
        Ok(Self::new(items))
    }

    /// TOML document with `[[items]]` tables.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let doc: TomlFeed = toml::from_str(s).context("parsing TOML feed")?;
        Ok(Self::new(doc.items))
    }

    /// Load from a `.json` or `.toml` file, picked by extension.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading feed from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let feed = match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            other => Err(anyhow!("unsupported feed format `{other}`")),
        }
        .with_context(|| format!("loading feed {}", path.display()))?;

        info!(target: "feed", path = %path.display(), items = feed.len(), "feed loaded");
        crate::metrics::record_feed_loaded(feed.len());
        Ok(feed)
    }

    /// Resolve the feed to serve:
    /// 1) $FEED_PATH
    /// 2) `configured` (from the config file)
    /// 3) the bundled sample
    pub fn load(configured: Option<&Path>) -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_FEED_PATH) {
            return Self::load_from(&PathBuf::from(p));
        }
        if let Some(p) = configured {
            return Self::load_from(p);
        }
        let feed = Self::sample();
        info!(target: "feed", items = feed.len(), "using bundled sample feed");
        crate::metrics::record_feed_loaded(feed.len());
        Ok(feed)
    }
}

impl FromIterator<ContentItem> for FeedList {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeedList {
    type Item = &'a FeedEntry;
    type IntoIter = std::slice::Iter<'a, FeedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
