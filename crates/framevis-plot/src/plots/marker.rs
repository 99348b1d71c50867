//! Point-marker primitives.

use glam::{DVec2, DVec3, Vec4};

use crate::style::StyleMap;

/// A marker at a single position on a 2D surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker2 {
    pub position: DVec2,
    pub color: Vec4,
    /// Pass-through styling, uninterpreted.
    pub style: StyleMap,
}

impl PointMarker2 {
    pub fn new(position: DVec2, color: Vec4) -> Self {
        Self {
            position,
            color,
            style: StyleMap::new(),
        }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// A marker at a single position on a 3D surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker3 {
    pub position: DVec3,
    pub color: Vec4,
    pub style: StyleMap,
}

impl PointMarker3 {
    pub fn new(position: DVec3, color: Vec4) -> Self {
        Self {
            position,
            color,
            style: StyleMap::new(),
        }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}
