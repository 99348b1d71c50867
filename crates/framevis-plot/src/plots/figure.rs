//! Figure management for accumulated frame-plot primitives.
//!
//! A figure is the retained plotting surface: it records every submitted
//! primitive in submission order and carries the canvas-level settings
//! (title, axis labels, limits, ticks, grid, background) a renderer needs to
//! lay out axes. Multiple frame renders commonly accumulate onto one figure.

use glam::{DVec2, DVec3, Vec4};

use crate::plots::{Arrow2, Arrow3, PointMarker2, PointMarker3, TextLabel2, TextLabel3};

/// A primitive recorded on a 2D figure.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotElement2 {
    Point(PointMarker2),
    Arrow(Arrow2),
    Text(TextLabel2),
}

/// A primitive recorded on a 3D figure.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotElement3 {
    Point(PointMarker3),
    Arrow(Arrow3),
    Text(TextLabel3),
}

/// Axis-aligned bounds of everything drawn on a 2D figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds2 {
    fn from_point(p: DVec2) -> Self {
        Self { min: p, max: p }
    }

    fn expand(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }
}

/// Axis-aligned bounds of everything drawn on a 3D figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds3 {
    fn from_point(p: DVec3) -> Self {
        Self { min: p, max: p }
    }

    fn expand(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }
}

/// A 2D figure accumulating primitives in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure2 {
    elements: Vec<PlotElement2>,

    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,

    /// Axis limits (None = auto-scale from `bounds()`).
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,

    /// Tick spacing (None = renderer default).
    pub tick_step: Option<f64>,

    pub grid_enabled: bool,
    pub background_color: Vec4,
}

impl Figure2 {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            x_limits: None,
            y_limits: None,
            tick_step: None,
            grid_enabled: true,
            background_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.set_title(title);
        self
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = Some(title.into());
    }

    pub fn with_labels<S: Into<String>>(mut self, x_label: S, y_label: S) -> Self {
        self.set_axis_labels(x_label, y_label);
        self
    }

    pub fn set_axis_labels<S: Into<String>>(&mut self, x_label: S, y_label: S) {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
    }

    pub fn with_limits(mut self, x_limits: (f64, f64), y_limits: (f64, f64)) -> Self {
        self.x_limits = Some(x_limits);
        self.y_limits = Some(y_limits);
        self
    }

    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = Some(step);
        self
    }

    pub fn with_grid(mut self, enabled: bool) -> Self {
        self.grid_enabled = enabled;
        self
    }

    pub fn with_background_color(mut self, color: Vec4) -> Self {
        self.background_color = color;
        self
    }

    /// Record a point marker; returns its element index.
    pub fn add_point(&mut self, marker: PointMarker2) -> usize {
        self.elements.push(PlotElement2::Point(marker));
        self.elements.len() - 1
    }

    /// Record an arrow; returns its element index.
    pub fn add_arrow(&mut self, arrow: Arrow2) -> usize {
        self.elements.push(PlotElement2::Arrow(arrow));
        self.elements.len() - 1
    }

    /// Record a text label; returns its element index.
    pub fn add_text(&mut self, label: TextLabel2) -> usize {
        self.elements.push(PlotElement2::Text(label));
        self.elements.len() - 1
    }

    /// All primitives, in submission order.
    pub fn elements(&self) -> &[PlotElement2] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove every primitive, keeping the canvas settings.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Combined bounds over every primitive position, or None when empty.
    pub fn bounds(&self) -> Option<Bounds2> {
        let mut bounds: Option<Bounds2> = None;
        let mut cover = |p: DVec2| match bounds.as_mut() {
            Some(b) => b.expand(p),
            None => bounds = Some(Bounds2::from_point(p)),
        };
        for element in &self.elements {
            match element {
                PlotElement2::Point(marker) => cover(marker.position),
                PlotElement2::Arrow(arrow) => {
                    cover(arrow.start);
                    cover(arrow.end);
                }
                PlotElement2::Text(label) => cover(label.position),
            }
        }
        bounds
    }
}

impl Default for Figure2 {
    fn default() -> Self {
        Self::new()
    }
}

/// A 3D figure accumulating primitives in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure3 {
    elements: Vec<PlotElement3>,

    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub z_label: Option<String>,

    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    pub z_limits: Option<(f64, f64)>,

    pub tick_step: Option<f64>,

    pub grid_enabled: bool,
    pub background_color: Vec4,
}

impl Figure3 {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            z_label: None,
            x_limits: None,
            y_limits: None,
            z_limits: None,
            tick_step: None,
            grid_enabled: true,
            background_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.set_title(title);
        self
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = Some(title.into());
    }

    pub fn with_labels<S: Into<String>>(mut self, x_label: S, y_label: S, z_label: S) -> Self {
        self.set_axis_labels(x_label, y_label, z_label);
        self
    }

    pub fn set_axis_labels<S: Into<String>>(&mut self, x_label: S, y_label: S, z_label: S) {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self.z_label = Some(z_label.into());
    }

    pub fn with_limits(
        mut self,
        x_limits: (f64, f64),
        y_limits: (f64, f64),
        z_limits: (f64, f64),
    ) -> Self {
        self.x_limits = Some(x_limits);
        self.y_limits = Some(y_limits);
        self.z_limits = Some(z_limits);
        self
    }

    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = Some(step);
        self
    }

    pub fn with_grid(mut self, enabled: bool) -> Self {
        self.grid_enabled = enabled;
        self
    }

    pub fn with_background_color(mut self, color: Vec4) -> Self {
        self.background_color = color;
        self
    }

    pub fn add_point(&mut self, marker: PointMarker3) -> usize {
        self.elements.push(PlotElement3::Point(marker));
        self.elements.len() - 1
    }

    pub fn add_arrow(&mut self, arrow: Arrow3) -> usize {
        self.elements.push(PlotElement3::Arrow(arrow));
        self.elements.len() - 1
    }

    pub fn add_text(&mut self, label: TextLabel3) -> usize {
        self.elements.push(PlotElement3::Text(label));
        self.elements.len() - 1
    }

    pub fn elements(&self) -> &[PlotElement3] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn bounds(&self) -> Option<Bounds3> {
        let mut bounds: Option<Bounds3> = None;
        let mut cover = |p: DVec3| match bounds.as_mut() {
            Some(b) => b.expand(p),
            None => bounds = Some(Bounds3::from_point(p)),
        };
        for element in &self.elements {
            match element {
                PlotElement3::Point(marker) => cover(marker.position),
                PlotElement3::Arrow(arrow) => {
                    cover(arrow.start);
                    cover(arrow.end);
                }
                PlotElement3::Text(label) => cover(label.position),
            }
        }
        bounds
    }
}

impl Default for Figure3 {
    fn default() -> Self {
        Self::new()
    }
}
