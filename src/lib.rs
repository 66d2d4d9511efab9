// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod badge;
pub mod config;
pub mod feed;
pub mod item;
pub mod metrics;
pub mod node;
pub mod render;
pub mod tier;

// ---- Re-exports for stable public API ----
pub use crate::api::{app, router, AppState};
pub use crate::feed::{FeedEntry, FeedList, ItemId};
pub use crate::item::{Article, ContentItem, HasViews, Video};
pub use crate::node::Node;
pub use crate::render::{
    format_content, render_article, render_list, render_page, render_video, FeedRenderer,
    RenderedUnit,
};
pub use crate::tier::{classify, DecorationTier, Thresholds};
