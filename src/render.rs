// src/render.rs
//! Item renderers, badge composition and list rendering.

use serde::Serialize;
use tracing::debug;

use crate::badge::badge_for;
use crate::feed::{FeedList, ItemId};
use crate::item::{Article, ContentItem, HasViews, Video};
use crate::node::{Attr, Element, Node};
use crate::tier::{DecorationTier, Thresholds};

pub const ARTICLE_VIEWS_LABEL: &str = "Прочтений";
pub const VIDEO_VIEWS_LABEL: &str = "Просмотров";
pub const VIDEO_ALLOW: &str = "autoplay; encrypted-media";

fn views_line(label: &str, views: u64) -> Element {
    Element::new("p")
        .class("views")
        .text(format!("{label}: {views}"))
}

/// Headline link plus read counter. A missing title leaves the link empty.
pub fn render_article(article: &Article) -> Node {
    let mut link = Element::new("a").attr("href", "#");
    if let Some(title) = &article.title {
        link = link.text(title.as_str());
    }
    Element::new("div")
        .class("item item-article")
        .child(Element::new("h3").child(link))
        .child(views_line(ARTICLE_VIEWS_LABEL, article.views))
        .into()
}

/// Embedded player plus watch counter. A missing url leaves the frame without `src`.
pub fn render_video(video: &Video) -> Node {
    let frame = Element::new("iframe")
        .attr_opt("src", video.url.as_deref())
        .attr("allow", VIDEO_ALLOW)
        .flag("allowfullscreen");
    Element::new("div")
        .class("item item-video")
        .child(frame)
        .child(views_line(VIDEO_VIEWS_LABEL, video.views))
        .into()
}

/// Bind a type-specific renderer and a classifier into one unit renderer:
/// render the item, classify its views, then wrap the output in that tier's badge.
pub fn format_content<T, R, C>(render: R, classify: C) -> impl Fn(&T) -> Node
where
    T: HasViews + ?Sized,
    R: Fn(&T) -> Node,
    C: Fn(u64) -> DecorationTier,
{
    move |item: &T| {
        let body = render(item);
        badge_for(classify(item.views())).wrap(body)
    }
}

/// One rendered feed slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedUnit {
    pub key: ItemId,
    pub tier: DecorationTier,
    pub node: Node,
}

impl RenderedUnit {
    /// HTML with the unit key stamped on the outermost element.
    pub fn to_html(&self) -> String {
        match &self.node {
            Node::Element(e) => {
                let keyed = Element {
                    attrs: std::iter::once(Attr {
                        name: "data-key",
                        value: Some(self.key.to_string()),
                    })
                    .chain(e.attrs.iter().cloned())
                    .collect(),
                    ..e.clone()
                };
                Node::Element(keyed).to_html()
            }
            Node::Text { .. } => self.node.to_html(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedRenderer {
    pub thresholds: Thresholds,
}

impl FeedRenderer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Render every entry in input order. Dispatch is exhaustive over the
    /// item variants, so adding one is a compile error until it is rendered here.
    pub fn render_list(&self, feed: &FeedList) -> Vec<RenderedUnit> {
        let t = self.thresholds;
        let article = format_content(render_article, move |v| t.classify(v));
        let video = format_content(render_video, move |v| t.classify(v));

        feed.iter()
            .map(|entry| {
                let node = match &entry.item {
                    ContentItem::Article(a) => article(a),
                    ContentItem::Video(v) => video(v),
                };
                let tier = t.classify(entry.item.views());
                debug!(
                    target: "feed",
                    key = %entry.id,
                    kind = entry.item.kind(),
                    tier = tier.as_str(),
                    "rendered unit"
                );
                crate::metrics::record_unit_rendered(tier);
                RenderedUnit {
                    key: entry.id,
                    tier,
                    node,
                }
            })
            .collect()
    }
}

/// Render with the default 100 / 1000 thresholds.
pub fn render_list(feed: &FeedList) -> Vec<RenderedUnit> {
    FeedRenderer::default().render_list(feed)
}

/// Units in order, no surrounding document.
pub fn render_fragment(units: &[RenderedUnit]) -> String {
    units.iter().map(RenderedUnit::to_html).collect()
}

/// Full HTML5 document with the units inside `#root`.
pub fn render_page(units: &[RenderedUnit]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Feed</title></head><body><div id=\"root\">",
    );
    out.push_str(&render_fragment(units));
    out.push_str("</div></body></html>");
    out
}
