//! Renderable view tree produced by slides and themes.
//!
//! Layout, drawing and hit-testing belong to the renderer. The engine only
//! needs a tree it can hand over, walk for identity tags and describe in logs.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::identity::Namespace;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Stack direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
    /// Children drawn on top of each other.
    Layered,
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Empty,
    Stack { axis: Axis },
    Text { content: String, size: f32 },
    Image { source: PathBuf },
    /// Solid fill, linear RGBA.
    Fill { rgba: [f32; 4] },
}

/// Identity tag linking this node to same-named nodes on other slides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedGeometry {
    pub id: String,
    pub namespace: Namespace,
}

/// A node in the renderable tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub kind: ViewKind,
    pub frame: Rect,
    pub opacity: f32,
    pub matched: Option<MatchedGeometry>,
    pub children: Vec<View>,
}

impl Default for View {
    fn default() -> Self {
        Self::empty()
    }
}

impl View {
    fn with_kind(kind: ViewKind) -> Self {
        Self {
            kind,
            frame: Rect::default(),
            opacity: 1.0,
            matched: None,
            children: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::with_kind(ViewKind::Empty)
    }

    pub fn stack(axis: Axis) -> Self {
        Self::with_kind(ViewKind::Stack { axis })
    }

    pub fn text(content: impl Into<String>, size: f32) -> Self {
        Self::with_kind(ViewKind::Text {
            content: content.into(),
            size,
        })
    }

    pub fn image(source: impl Into<PathBuf>) -> Self {
        Self::with_kind(ViewKind::Image {
            source: source.into(),
        })
    }

    pub fn fill(rgba: [f32; 4]) -> Self {
        Self::with_kind(ViewKind::Fill { rgba })
    }

    pub fn frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(children);
        self
    }

    /// Tag this node so the renderer can morph it into the node carrying the
    /// same `id` in `namespace` on the next slide.
    pub fn matched_geometry(mut self, id: impl Into<String>, namespace: Namespace) -> Self {
        self.matched = Some(MatchedGeometry {
            id: id.into(),
            namespace,
        });
        self
    }

    /// Depth-first, pre-order traversal.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a View)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Number of nodes in the tree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Indented one-line-per-node description of the tree.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let label = match &self.kind {
            ViewKind::Empty => "empty".to_string(),
            ViewKind::Stack { axis } => format!("stack({axis:?})").to_lowercase(),
            ViewKind::Text { content, size } => format!("text {content:?} @{size}"),
            ViewKind::Image { source } => format!("image {}", source.display()),
            ViewKind::Fill { rgba } => format!("fill {rgba:?}"),
        };
        let _ = write!(out, "{indent}{label}");
        if let Some(matched) = &self.matched {
            let _ = write!(out, " #{}", matched.id);
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}
