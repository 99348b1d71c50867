//! Point markers with optional labels.

use glam::{DVec2, DVec3};
use log::trace;

use crate::error::PlotResult;
use crate::ops::text::{plot_text2d_on, plot_text3d_on, TextOptions2, TextOptions3};
use crate::state;
use crate::style::{StyleMap, DEFAULT_COLOR, MARKER_LABEL_NUDGE};
use crate::surface::{Surface2, Surface3};

/// Options for `plot_point2d` / `plot_point3d`.
#[derive(Debug, Clone, Default)]
pub struct PointOptions {
    /// Color token; `"black"` when unset.
    pub color: Option<String>,
    /// Optional label placed just off the marker.
    pub text: Option<String>,
    /// Pass-through styling, forwarded verbatim.
    pub style: StyleMap,
}

impl PointOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Draw a marker at `position`, then its optional label nudged by a uniform
/// 0.05 so the text clears the glyph. The label keeps the default color.
pub fn plot_point2d_on<S: Surface2 + ?Sized>(
    surface: &mut S,
    position: DVec2,
    opts: &PointOptions,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    trace!("plot_point2d: marker at ({}, {})", position.x, position.y);
    surface.draw_point(position, color, &opts.style)?;
    if let Some(text) = opts.text.as_deref() {
        let label_opts = TextOptions2::new()
            .with_delta(MARKER_LABEL_NUDGE)
            .with_style(opts.style.clone());
        plot_text2d_on(surface, position, text, &label_opts)?;
    }
    Ok(())
}

/// As [`plot_point2d_on`], targeting the active 2D figure.
pub fn plot_point2d(position: DVec2, opts: &PointOptions) -> PlotResult<()> {
    state::with_active_figure2(|fig| plot_point2d_on(fig, position, opts))
}

/// Draw a marker at `position`, then its optional label nudged by a uniform
/// 0.05 so the text clears the glyph. The label keeps the default color.
pub fn plot_point3d_on<S: Surface3 + ?Sized>(
    surface: &mut S,
    position: DVec3,
    opts: &PointOptions,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    trace!(
        "plot_point3d: marker at ({}, {}, {})",
        position.x,
        position.y,
        position.z
    );
    surface.draw_point(position, color, &opts.style)?;
    if let Some(text) = opts.text.as_deref() {
        let label_opts = TextOptions3::new()
            .with_delta(MARKER_LABEL_NUDGE)
            .with_style(opts.style.clone());
        plot_text3d_on(surface, position, text, &label_opts)?;
    }
    Ok(())
}

/// As [`plot_point3d_on`], targeting the active 3D figure.
pub fn plot_point3d(position: DVec3, opts: &PointOptions) -> PlotResult<()> {
    state::with_active_figure3(|fig| plot_point3d_on(fig, position, opts))
}
