//! Directed arrows.

use glam::{DVec2, DVec3};
use log::trace;

use crate::error::{PlotError, PlotResult};
use crate::state;
use crate::style::{StyleMap, StyleValue, ARROW_HEAD_LENGTH, DEFAULT_ARROW_WIDTH, DEFAULT_COLOR};
use crate::surface::{Surface2, Surface3};

/// Options for `plot_arrow2d` / `plot_arrow3d`.
#[derive(Debug, Clone, Default)]
pub struct ArrowOptions {
    /// Color token; `"black"` when unset.
    pub color: Option<String>,
    /// 2D: stroke width in plot units, 0.02 when unset. 3D: forwarded to the
    /// surface as pass-through styling.
    pub width: Option<f64>,
    /// Pass-through styling, forwarded verbatim.
    pub style: StyleMap,
}

impl ArrowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Draw an arrow from `start` to `end`; the head terminates exactly at
/// `end`.
pub fn plot_arrow2d_on<S: Surface2 + ?Sized>(
    surface: &mut S,
    start: DVec2,
    end: DVec2,
    opts: &ArrowOptions,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let width = opts.width.unwrap_or(DEFAULT_ARROW_WIDTH);
    trace!(
        "plot_arrow2d: ({}, {}) -> ({}, {})",
        start.x,
        start.y,
        end.x,
        end.y
    );
    surface.draw_arrow(start, end, color, width, &opts.style)
}

/// As [`plot_arrow2d_on`], targeting the active 2D figure.
pub fn plot_arrow2d(start: DVec2, end: DVec2, opts: &ArrowOptions) -> PlotResult<()> {
    state::with_active_figure2(|fig| plot_arrow2d_on(fig, start, end, opts))
}

/// Draw an arrow from `start` to `end` with a head ratio chosen so the
/// absolute head length stays at 0.2 plot units.
///
/// Fails fast when the segment has zero length or non-finite endpoints; the
/// head ratio would otherwise be undefined.
pub fn plot_arrow3d_on<S: Surface3 + ?Sized>(
    surface: &mut S,
    start: DVec3,
    end: DVec3,
    opts: &ArrowOptions,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let length = (end - start).length();
    if !length.is_finite() || length <= 0.0 {
        return Err(PlotError::DegenerateArrow {
            op: "plot_arrow3d",
            start,
            end,
        });
    }
    let head_ratio = ARROW_HEAD_LENGTH / length;
    trace!(
        "plot_arrow3d: ({}, {}, {}) -> ({}, {}, {}), head ratio {head_ratio}",
        start.x,
        start.y,
        start.z,
        end.x,
        end.y,
        end.z
    );
    if let Some(width) = opts.width {
        let mut style = opts.style.clone();
        style.insert("width".to_string(), StyleValue::Number(width));
        surface.draw_arrow(start, end, color, head_ratio, &style)
    } else {
        surface.draw_arrow(start, end, color, head_ratio, &opts.style)
    }
}

/// As [`plot_arrow3d_on`], targeting the active 3D figure.
pub fn plot_arrow3d(start: DVec3, end: DVec3, opts: &ArrowOptions) -> PlotResult<()> {
    state::with_active_figure3(|fig| plot_arrow3d_on(fig, start, end, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::{Figure2, Figure3, PlotElement2, PlotElement3};

    #[test]
    fn stroke_width_defaults_and_overrides() {
        let mut fig = Figure2::new();
        plot_arrow2d_on(&mut fig, DVec2::ZERO, DVec2::X, &ArrowOptions::new()).unwrap();
        plot_arrow2d_on(
            &mut fig,
            DVec2::ZERO,
            DVec2::Y,
            &ArrowOptions::new().with_width(0.1),
        )
        .unwrap();

        match (&fig.elements()[0], &fig.elements()[1]) {
            (PlotElement2::Arrow(a), PlotElement2::Arrow(b)) => {
                assert_eq!(a.width, 0.02);
                assert_eq!(b.width, 0.1);
            }
            other => panic!("expected two arrows, got {other:?}"),
        }
    }

    #[test]
    fn head_ratio_keeps_absolute_head_length_constant() {
        let mut fig = Figure3::new();
        plot_arrow3d_on(
            &mut fig,
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, 4.0),
            &ArrowOptions::new(),
        )
        .unwrap();
        match &fig.elements()[0] {
            PlotElement3::Arrow(arrow) => {
                assert!((arrow.head_ratio - 0.05).abs() < 1e-12);
                assert!((arrow.head_length() - 0.2).abs() < 1e-12);
                assert_eq!(arrow.end, DVec3::new(0.0, 0.0, 4.0));
            }
            other => panic!("expected arrow, got {other:?}"),
        }
    }

    #[test]
    fn zero_length_arrow_fails_fast() {
        let mut fig = Figure3::new();
        let err = plot_arrow3d_on(&mut fig, DVec3::ONE, DVec3::ONE, &ArrowOptions::new())
            .unwrap_err();
        assert!(matches!(err, PlotError::DegenerateArrow { op: "plot_arrow3d", .. }));
        assert!(fig.is_empty());
    }

    #[test]
    fn non_finite_endpoint_fails_fast() {
        let mut fig = Figure3::new();
        let err = plot_arrow3d_on(
            &mut fig,
            DVec3::ZERO,
            DVec3::new(f64::NAN, 0.0, 0.0),
            &ArrowOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::DegenerateArrow { .. }));
    }

    #[test]
    fn explicit_width_travels_as_pass_through_styling_in_3d() {
        let mut fig = Figure3::new();
        plot_arrow3d_on(
            &mut fig,
            DVec3::ZERO,
            DVec3::X,
            &ArrowOptions::new().with_width(0.1),
        )
        .unwrap();
        match &fig.elements()[0] {
            PlotElement3::Arrow(arrow) => {
                assert_eq!(arrow.style.get("width"), Some(&StyleValue::Number(0.1)));
            }
            other => panic!("expected arrow, got {other:?}"),
        }
    }
}
