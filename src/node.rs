// src/node.rs
//! Minimal display tree: elements with attributes and children, plus text.
//!
//! Renderers build `Node`s; hosts either serialize them to HTML with
//! [`Node::to_html`] or ship them as JSON.

use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

/// Attribute; `value: None` is a boolean attribute such as `allowfullscreen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attr {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: Some(value.into()),
        });
        self
    }

    /// Set `name` only when a value is present.
    pub fn attr_opt(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push(Attr { name, value: None });
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn get_attr(&self, name: &str) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.name == name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .and_then(|a| a.value.as_deref())
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Depth-first search for the first element with `tag` (self included).
    pub fn find(&self, tag: &str) -> Option<&Element> {
        let e = self.as_element()?;
        if e.tag == tag {
            return Some(e);
        }
        e.children.iter().find_map(|c| c.find(tag))
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        let e = self.as_element()?;
        if e.has_class(class) {
            return Some(e);
        }
        e.children.iter().find_map(|c| c.find_class(class))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(&html_escape::encode_text(text)),
            Node::Element(e) => {
                let _ = write!(out, "<{}", e.tag);
                for a in &e.attrs {
                    match &a.value {
                        Some(v) => {
                            let _ = write!(
                                out,
                                " {}=\"{}\"",
                                a.name,
                                html_escape::encode_double_quoted_attribute(v)
                            );
                        }
                        None => {
                            let _ = write!(out, " {}", a.name);
                        }
                    }
                }
                out.push('>');
                for c in &e.children {
                    c.write_html(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }
}
