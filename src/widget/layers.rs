//! Before/after layer content.
//!
//! A layer is either a texture (image comparison) or a caller-supplied
//! paint callback for arbitrary content. The "after" layer always covers
//! the full widget rectangle; the "before" layer is painted above it under
//! the clip region derived in [`geometry`](super::geometry).

use egui::{Color32, Painter, Pos2, Rect, TextureHandle};
use std::fmt;

/// Content kind reported in the widget state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Custom,
    Empty,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Image => write!(f, "image"),
            ContentKind::Custom => write!(f, "custom"),
            ContentKind::Empty => write!(f, "empty"),
        }
    }
}

/// One visual layer.
pub enum LayerContent {
    /// A texture stretched across the widget rectangle.
    Texture(TextureHandle),
    /// Arbitrary content painted by the caller.
    Painter(Box<dyn Fn(&Painter, Rect)>),
}

impl LayerContent {
    pub fn texture(handle: TextureHandle) -> Self {
        LayerContent::Texture(handle)
    }

    pub fn painter(paint: impl Fn(&Painter, Rect) + 'static) -> Self {
        LayerContent::Painter(Box::new(paint))
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            LayerContent::Texture(_) => ContentKind::Image,
            LayerContent::Painter(_) => ContentKind::Custom,
        }
    }

    fn paint(&self, painter: &Painter, rect: Rect) {
        match self {
            LayerContent::Texture(handle) => {
                let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
                painter.image(handle.id(), rect, uv, Color32::WHITE);
            }
            LayerContent::Painter(paint) => paint(painter, rect),
        }
    }
}

impl fmt::Debug for LayerContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerContent::{}", self.kind())
    }
}

/// The stacked before/after pair; either side may be absent.
#[derive(Debug, Default)]
pub struct LayerPair {
    pub before: Option<LayerContent>,
    pub after: Option<LayerContent>,
}

impl LayerPair {
    pub fn before_kind(&self) -> ContentKind {
        self.before.as_ref().map_or(ContentKind::Empty, LayerContent::kind)
    }

    pub fn after_kind(&self) -> ContentKind {
        self.after.as_ref().map_or(ContentKind::Empty, LayerContent::kind)
    }

    /// Paints the "after" layer across the full rectangle.
    pub fn paint_after(&self, painter: &Painter, rect: Rect) {
        if let Some(layer) = &self.after {
            layer.paint(painter, rect);
        }
    }

    /// Paints the "before" layer; the caller passes a painter whose clip
    /// rect is the reveal region.
    pub fn paint_before(&self, painter: &Painter, rect: Rect) {
        if let Some(layer) = &self.before {
            layer.paint(painter, rect);
        }
    }
}
