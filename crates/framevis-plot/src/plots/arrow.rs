//! Directed-arrow primitives.
//!
//! An arrow's head terminates exactly at `end`: the recorded segment length
//! includes the head, and renderers must not overshoot the endpoint.

use glam::{DVec2, DVec3, Vec4};

use crate::style::StyleMap;

/// A 2D arrow with a fixed stroke width in plot units.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow2 {
    pub start: DVec2,
    pub end: DVec2,
    pub color: Vec4,
    pub width: f64,
    pub style: StyleMap,
}

impl Arrow2 {
    pub fn new(start: DVec2, end: DVec2, color: Vec4, width: f64) -> Self {
        Self {
            start,
            end,
            color,
            width,
            style: StyleMap::new(),
        }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }
}

/// A 3D arrow whose head is sized as a fraction of the segment length.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow3 {
    pub start: DVec3,
    pub end: DVec3,
    pub color: Vec4,
    /// Fraction of the segment length occupied by the head.
    pub head_ratio: f64,
    pub style: StyleMap,
}

impl Arrow3 {
    pub fn new(start: DVec3, end: DVec3, color: Vec4, head_ratio: f64) -> Self {
        Self {
            start,
            end,
            color,
            head_ratio,
            style: StyleMap::new(),
        }
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Absolute head length implied by the ratio.
    pub fn head_length(&self) -> f64 {
        self.head_ratio * self.length()
    }
}
