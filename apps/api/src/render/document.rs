//! Declarative document tree handed to the external PDF renderer.
//!
//! The tree mirrors the primitives such renderers expose: a document made of
//! pages, each holding nested views, text runs and images with flexbox-like
//! style objects. Layout and rasterization happen downstream.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    A4,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub size: PageSize,
    pub style: Style,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    View { style: Style, children: Vec<Node> },
    Text { style: Style, content: String },
    Image { style: Style, src: String },
}

impl Node {
    pub fn view(style: Style, children: Vec<Node>) -> Self {
        Node::View { style, children }
    }

    pub fn text(style: Style, content: impl Into<String>) -> Self {
        Node::Text {
            style,
            content: content.into(),
        }
    }

    pub fn image(style: Style, src: impl Into<String>) -> Self {
        Node::Image {
            style,
            src: src.into(),
        }
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::View { children, .. } => children.iter().for_each(|c| c.collect_text(out)),
            Node::Text { content, .. } => out.push(content),
            Node::Image { .. } => {}
        }
    }
}

impl Document {
    /// Every text run in document order.
    pub fn text_content(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for page in &self.pages {
            for node in &page.children {
                node.collect_text(&mut out);
            }
        }
        out
    }
}

/// Style properties understood by the downstream renderer. Unset properties
/// are omitted from the serialized tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<String>,
}

impl Style {
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn background(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }
}
