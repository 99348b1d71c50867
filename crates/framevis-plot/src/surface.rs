//! Plotting-surface capability consumed by the drawing operations.
//!
//! The operations in [`crate::ops`] only ever talk to a surface through
//! these traits: draw a point, draw an arrow, draw text. Color arrives as an
//! uninterpreted token and [`StyleMap`] entries are forwarded verbatim, so a
//! surface is free to reject what it cannot render; such failures propagate
//! unchanged through the operations. [`Figure2`] and [`Figure3`] are the
//! retained implementations.

use glam::{DVec2, DVec3};

use crate::error::PlotResult;
use crate::plots::{Arrow2, Arrow3, Figure2, Figure3, PointMarker2, PointMarker3, TextLabel2, TextLabel3};
use crate::style::{parse_color, StyleMap};

/// A 2D plotting surface.
pub trait Surface2 {
    fn draw_point(&mut self, position: DVec2, color: &str, style: &StyleMap) -> PlotResult<()>;

    /// Draw a directed arrow whose head terminates exactly at `end`.
    /// `width` is the stroke width in plot units.
    fn draw_arrow(
        &mut self,
        start: DVec2,
        end: DVec2,
        color: &str,
        width: f64,
        style: &StyleMap,
    ) -> PlotResult<()>;

    fn draw_text(
        &mut self,
        position: DVec2,
        text: &str,
        color: &str,
        style: &StyleMap,
    ) -> PlotResult<()>;
}

/// A 3D plotting surface.
pub trait Surface3 {
    fn draw_point(&mut self, position: DVec3, color: &str, style: &StyleMap) -> PlotResult<()>;

    /// Draw a directed arrow whose head terminates exactly at `end`.
    /// `head_ratio` is the fraction of the segment length occupied by the
    /// head.
    fn draw_arrow(
        &mut self,
        start: DVec3,
        end: DVec3,
        color: &str,
        head_ratio: f64,
        style: &StyleMap,
    ) -> PlotResult<()>;

    fn draw_text(
        &mut self,
        position: DVec3,
        text: &str,
        color: &str,
        style: &StyleMap,
    ) -> PlotResult<()>;
}

impl Surface2 for Figure2 {
    fn draw_point(&mut self, position: DVec2, color: &str, style: &StyleMap) -> PlotResult<()> {
        let color = parse_color(color)?;
        self.add_point(PointMarker2::new(position, color).with_style(style.clone()));
        Ok(())
    }

    fn draw_arrow(
        &mut self,
        start: DVec2,
        end: DVec2,
        color: &str,
        width: f64,
        style: &StyleMap,
    ) -> PlotResult<()> {
        let color = parse_color(color)?;
        self.add_arrow(Arrow2::new(start, end, color, width).with_style(style.clone()));
        Ok(())
    }

    fn draw_text(
        &mut self,
        position: DVec2,
        text: &str,
        color: &str,
        style: &StyleMap,
    ) -> PlotResult<()> {
        let color = parse_color(color)?;
        self.add_text(TextLabel2::new(position, text, color).with_style(style.clone()));
        Ok(())
    }
}

impl Surface3 for Figure3 {
    fn draw_point(&mut self, position: DVec3, color: &str, style: &StyleMap) -> PlotResult<()> {
        let color = parse_color(color)?;
        self.add_point(PointMarker3::new(position, color).with_style(style.clone()));
        Ok(())
    }

    fn draw_arrow(
        &mut self,
        start: DVec3,
        end: DVec3,
        color: &str,
        head_ratio: f64,
        style: &StyleMap,
    ) -> PlotResult<()> {
        let color = parse_color(color)?;
        self.add_arrow(Arrow3::new(start, end, color, head_ratio).with_style(style.clone()));
        Ok(())
    }

    fn draw_text(
        &mut self,
        position: DVec3,
        text: &str,
        color: &str,
        style: &StyleMap,
    ) -> PlotResult<()> {
        let color = parse_color(color)?;
        self.add_text(TextLabel3::new(position, text, color).with_style(style.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotError;
    use crate::plots::PlotElement2;

    #[test]
    fn figure_surface_records_primitives_and_parses_color() {
        let mut fig = Figure2::new();
        fig.draw_point(DVec2::ZERO, "blue", &StyleMap::new()).unwrap();
        match &fig.elements()[0] {
            PlotElement2::Point(marker) => {
                assert_eq!(marker.color, glam::Vec4::new(0.0, 0.0, 1.0, 1.0));
            }
            other => panic!("expected point, got {other:?}"),
        }
    }

    #[test]
    fn bad_color_token_is_a_backend_error() {
        let mut fig = Figure2::new();
        let err = fig
            .draw_text(DVec2::ZERO, "{A}", "not-a-color", &StyleMap::new())
            .unwrap_err();
        assert_eq!(
            err,
            PlotError::InvalidColor {
                token: "not-a-color".to_string()
            }
        );
        assert!(fig.is_empty());
    }
}
