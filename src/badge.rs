// src/badge.rs
//! Badge wrappers: put labeled containers around rendered content.

use crate::node::{Element, Node};
use crate::tier::DecorationTier;

pub const NEW_LABEL: &str = "New!";
pub const POPULAR_LABEL: &str = "Popular!";

/// Wraps arbitrary content with a badge (or leaves it alone).
pub trait Badge {
    fn wrap(&self, content: Node) -> Node;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NewBadge;

#[derive(Debug, Clone, Copy, Default)]
pub struct PopularBadge;

/// Identity wrapper for the undecorated tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBadge;

fn labeled(modifier: &str, label: &str, content: Node) -> Node {
    Element::new("div")
        .class(&format!("wrap-item {modifier}"))
        .child(Element::new("span").class("label").text(label))
        .child(content)
        .into()
}

impl Badge for NewBadge {
    fn wrap(&self, content: Node) -> Node {
        labeled("wrap-item-new", NEW_LABEL, content)
    }
}

impl Badge for PopularBadge {
    fn wrap(&self, content: Node) -> Node {
        labeled("wrap-item-popular", POPULAR_LABEL, content)
    }
}

impl Badge for NoBadge {
    fn wrap(&self, content: Node) -> Node {
        content
    }
}

pub fn badge_for(tier: DecorationTier) -> &'static dyn Badge {
    match tier {
        DecorationTier::New => &NewBadge,
        DecorationTier::Popular => &PopularBadge,
        DecorationTier::None => &NoBadge,
    }
}
