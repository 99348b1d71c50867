//! Text placement.

use glam::{DVec2, DVec3};
use log::trace;

use crate::error::PlotResult;
use crate::state;
use crate::style::{Delta2, Delta3, StyleMap, DEFAULT_COLOR};
use crate::surface::{Surface2, Surface3};

/// Options for `plot_text2d`.
#[derive(Debug, Clone, Default)]
pub struct TextOptions2 {
    /// Color token; `"black"` when unset.
    pub color: Option<String>,
    /// Offset from the anchor position; zero when unset.
    pub delta: Option<Delta2>,
    /// Pass-through styling, forwarded verbatim.
    pub style: StyleMap,
}

impl TextOptions2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_delta<D: Into<Delta2>>(mut self, delta: D) -> Self {
        self.delta = Some(delta.into());
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Options for `plot_text3d`.
#[derive(Debug, Clone, Default)]
pub struct TextOptions3 {
    pub color: Option<String>,
    pub delta: Option<Delta3>,
    pub style: StyleMap,
}

impl TextOptions3 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_delta<D: Into<Delta3>>(mut self, delta: D) -> Self {
        self.delta = Some(delta.into());
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Place `text` at `position + delta` on an explicit surface.
pub fn plot_text2d_on<S: Surface2 + ?Sized>(
    surface: &mut S,
    position: DVec2,
    text: &str,
    opts: &TextOptions2,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let delta = opts.delta.map(|d| d.resolve()).unwrap_or(DVec2::ZERO);
    let anchor = position + delta;
    trace!("plot_text2d: '{text}' at ({}, {})", anchor.x, anchor.y);
    surface.draw_text(anchor, text, color, &opts.style)
}

/// Place `text` at `position + delta` on the active 2D figure.
pub fn plot_text2d(position: DVec2, text: &str, opts: &TextOptions2) -> PlotResult<()> {
    state::with_active_figure2(|fig| plot_text2d_on(fig, position, text, opts))
}

/// Place `text` at `position + delta` on an explicit surface.
pub fn plot_text3d_on<S: Surface3 + ?Sized>(
    surface: &mut S,
    position: DVec3,
    text: &str,
    opts: &TextOptions3,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let delta = opts.delta.map(|d| d.resolve()).unwrap_or(DVec3::ZERO);
    let anchor = position + delta;
    trace!(
        "plot_text3d: '{text}' at ({}, {}, {})",
        anchor.x,
        anchor.y,
        anchor.z
    );
    surface.draw_text(anchor, text, color, &opts.style)
}

/// Place `text` at `position + delta` on the active 3D figure.
pub fn plot_text3d(position: DVec3, text: &str, opts: &TextOptions3) -> PlotResult<()> {
    state::with_active_figure3(|fig| plot_text3d_on(fig, position, text, opts))
}
