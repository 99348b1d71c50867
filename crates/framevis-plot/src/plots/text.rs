//! Text-label primitives.

use glam::{DVec2, DVec3, Vec4};

use crate::style::StyleMap;

/// A text label anchored at a 2D position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel2 {
    pub position: DVec2,
    pub text: String,
    pub color: Vec4,
    pub style: StyleMap,
}

impl TextLabel2 {
    pub fn new<S: Into<String>>(position: DVec2, text: S, color: Vec4) -> Self {
        Self {
            position,
            text: text.into(),
            color,
            style: StyleMap::new(),
        }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// A text label anchored at a 3D position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel3 {
    pub position: DVec3,
    pub text: String,
    pub color: Vec4,
    pub style: StyleMap,
}

impl TextLabel3 {
    pub fn new<S: Into<String>>(position: DVec3, text: S, color: Vec4) -> Self {
        Self {
            position,
            text: text.into(),
            color,
            style: StyleMap::new(),
        }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}
