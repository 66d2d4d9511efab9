// src/item.rs
//! Content items shown in the feed.
//!
//! On the wire an item is a flat object tagged by `type`:
//! `{"type": "video", "url": "...", "views": 50}`. In Rust each variant only
//! carries its own fields, so an `Article` can never hold a `url`.

use serde::{Deserialize, Serialize};

/// Anything that carries a view counter.
pub trait HasViews {
    fn views(&self) -> u64;
}

/// A text article with an optional headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub views: u64,
}

/// An embedded video with an optional source url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub views: u64,
}

/// One feed item. The variant set is closed: unknown `type` tags fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Article(Article),
    Video(Video),
}

impl Article {
    pub fn new(title: impl Into<String>, views: u64) -> Self {
        Self {
            title: Some(title.into()),
            views,
        }
    }

    pub fn untitled(views: u64) -> Self {
        Self { title: None, views }
    }
}

impl Video {
    pub fn new(url: impl Into<String>, views: u64) -> Self {
        Self {
            url: Some(url.into()),
            views,
        }
    }
}

impl ContentItem {
    /// Wire name of the discriminant (`article` / `video`).
    pub fn kind(&self) -> &'static str {
        match self {
            ContentItem::Article(_) => "article",
            ContentItem::Video(_) => "video",
        }
    }
}

impl HasViews for Article {
    fn views(&self) -> u64 {
        self.views
    }
}

impl HasViews for Video {
    fn views(&self) -> u64 {
        self.views
    }
}

impl HasViews for ContentItem {
    fn views(&self) -> u64 {
        match self {
            ContentItem::Article(a) => a.views,
            ContentItem::Video(v) => v.views,
        }
    }
}

impl From<Article> for ContentItem {
    fn from(a: Article) -> Self {
        ContentItem::Article(a)
    }
}

impl From<Video> for ContentItem {
    fn from(v: Video) -> Self {
        ContentItem::Video(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_items() {
        let v: ContentItem =
            serde_json::from_str(r#"{"type":"video","url":"u1","views":50}"#).unwrap();
        assert_eq!(v, ContentItem::Video(Video::new("u1", 50)));

        let a: ContentItem =
            serde_json::from_str(r#"{"type":"article","views":12}"#).unwrap();
        assert_eq!(a, ContentItem::Article(Article::untitled(12)));
        assert_eq!(a.kind(), "article");
    }

    #[test]
    fn foreign_fields_from_flat_shape_are_ignored() {
        let a: ContentItem = serde_json::from_str(
            r#"{"type":"article","title":"T","url":"stray","views":175}"#,
        )
        .unwrap();
        assert_eq!(a, ContentItem::Article(Article::new("T", 175)));
    }

    #[test]
    fn unknown_type_and_negative_views_are_rejected() {
        let unknown = serde_json::from_str::<ContentItem>(r#"{"type":"podcast","views":1}"#);
        let err = unknown.unwrap_err().to_string();
        assert!(err.contains("podcast"), "{err}");

        let negative = serde_json::from_str::<ContentItem>(r#"{"type":"video","views":-5}"#);
        assert!(negative.is_err());

        let missing = serde_json::from_str::<ContentItem>(r#"{"type":"video","url":"u"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn serializes_back_to_flat_shape() {
        let json = serde_json::to_value(ContentItem::from(Video::new("u2", 4253))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "video", "url": "u2", "views": 4253})
        );
    }
}
