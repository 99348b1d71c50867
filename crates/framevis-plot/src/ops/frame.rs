//! Frame renderers: rotations and poses as labeled triads.
//!
//! The transform is applied to the origin and each standard basis vector,
//! then the layered operations draw the origin marker, the `{frame}` label,
//! and one arrow plus tip label per axis. Tip-label offsets are hand-tuned
//! to push each label away from its own arrow's travel direction and the
//! other labels; they do not adapt to arrow length or viewing angle.

use framevis_spatial::{FrameTransform2, FrameTransform3};
use glam::{DVec2, DVec3};
use log::debug;

use crate::error::PlotResult;
use crate::ops::arrow::{plot_arrow2d_on, plot_arrow3d_on, ArrowOptions};
use crate::ops::point::{plot_point2d_on, plot_point3d_on, PointOptions};
use crate::ops::text::{plot_text2d_on, plot_text3d_on, TextOptions2, TextOptions3};
use crate::state;
use crate::style::{StyleMap, DEFAULT_COLOR, FRAME_LABEL_NUDGE};
use crate::surface::{Surface2, Surface3};

const X_TIP_NUDGE_2D: DVec2 = DVec2::new(0.1, -0.1);
const Y_TIP_NUDGE_2D: DVec2 = DVec2::new(-0.1, 0.1);

const X_TIP_NUDGE_3D: DVec3 = DVec3::new(0.1, -0.1, -0.1);
const Y_TIP_NUDGE_3D: DVec3 = DVec3::new(-0.1, 0.1, -0.1);
const Z_TIP_NUDGE_3D: DVec3 = DVec3::new(-0.1, -0.1, 0.1);

/// Options for the frame renderers.
#[derive(Debug, Clone, Default)]
pub struct FrameOptions {
    /// Color token applied to every primitive of the triad; `"black"` when
    /// unset.
    pub color: Option<String>,
    /// Frame name used in the `{frame}` and `<Axis>_<frame>` labels; empty
    /// when unset.
    pub frame: Option<String>,
    /// Pass-through styling, forwarded verbatim with every primitive.
    pub style: StyleMap,
}

impl FrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_frame<S: Into<String>>(mut self, frame: S) -> Self {
        self.frame = Some(frame.into());
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

fn render_frame2<S: Surface2 + ?Sized, T: FrameTransform2 + ?Sized>(
    surface: &mut S,
    transform: &T,
    opts: &FrameOptions,
    op: &'static str,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let frame = opts.frame.as_deref().unwrap_or("");

    let o = transform.apply(DVec2::ZERO);
    let x = transform.apply(DVec2::X);
    let y = transform.apply(DVec2::Y);
    debug!("{op}: frame '{{{frame}}}' origin at ({}, {})", o.x, o.y);

    let point_opts = PointOptions::new()
        .with_color(color)
        .with_style(opts.style.clone());
    plot_point2d_on(surface, o, &point_opts)?;

    let origin_label = TextOptions2::new()
        .with_color(color)
        .with_delta(FRAME_LABEL_NUDGE)
        .with_style(opts.style.clone());
    plot_text2d_on(surface, o, &format!("{{{frame}}}"), &origin_label)?;

    let arrow_opts = ArrowOptions::new()
        .with_color(color)
        .with_style(opts.style.clone());
    for (tip, axis, nudge) in [(x, "X", X_TIP_NUDGE_2D), (y, "Y", Y_TIP_NUDGE_2D)] {
        plot_arrow2d_on(surface, o, tip, &arrow_opts)?;
        let tip_label = TextOptions2::new()
            .with_color(color)
            .with_delta(nudge)
            .with_style(opts.style.clone());
        plot_text2d_on(surface, tip, &format!("{axis}_{frame}"), &tip_label)?;
    }
    Ok(())
}

fn render_frame3<S: Surface3 + ?Sized, T: FrameTransform3 + ?Sized>(
    surface: &mut S,
    transform: &T,
    opts: &FrameOptions,
    op: &'static str,
) -> PlotResult<()> {
    let color = opts.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let frame = opts.frame.as_deref().unwrap_or("");

    let o = transform.apply(DVec3::ZERO);
    let x = transform.apply(DVec3::X);
    let y = transform.apply(DVec3::Y);
    let z = transform.apply(DVec3::Z);
    debug!(
        "{op}: frame '{{{frame}}}' origin at ({}, {}, {})",
        o.x, o.y, o.z
    );

    let point_opts = PointOptions::new()
        .with_color(color)
        .with_style(opts.style.clone());
    plot_point3d_on(surface, o, &point_opts)?;

    let origin_label = TextOptions3::new()
        .with_color(color)
        .with_delta(FRAME_LABEL_NUDGE)
        .with_style(opts.style.clone());
    plot_text3d_on(surface, o, &format!("{{{frame}}}"), &origin_label)?;

    let arrow_opts = ArrowOptions::new()
        .with_color(color)
        .with_style(opts.style.clone());
    for (tip, axis, nudge) in [
        (x, "X", X_TIP_NUDGE_3D),
        (y, "Y", Y_TIP_NUDGE_3D),
        (z, "Z", Z_TIP_NUDGE_3D),
    ] {
        plot_arrow3d_on(surface, o, tip, &arrow_opts)?;
        let tip_label = TextOptions3::new()
            .with_color(color)
            .with_delta(nudge)
            .with_style(opts.style.clone());
        plot_text3d_on(surface, tip, &format!("{axis}_{frame}"), &tip_label)?;
    }
    Ok(())
}

/// Render a 2D rotation as a labeled triad on an explicit surface.
pub fn plot_rot2d_on<S: Surface2 + ?Sized, T: FrameTransform2 + ?Sized>(
    surface: &mut S,
    transform: &T,
    opts: &FrameOptions,
) -> PlotResult<()> {
    render_frame2(surface, transform, opts, "plot_rot2d")
}

/// Render a 2D rotation as a labeled triad on the active 2D figure.
pub fn plot_rot2d<T: FrameTransform2 + ?Sized>(transform: &T, opts: &FrameOptions) -> PlotResult<()> {
    state::with_active_figure2(|fig| render_frame2(fig, transform, opts, "plot_rot2d"))
}

/// Render a 2D rigid transform as a labeled triad on an explicit surface.
pub fn plot_pose2d_on<S: Surface2 + ?Sized, T: FrameTransform2 + ?Sized>(
    surface: &mut S,
    transform: &T,
    opts: &FrameOptions,
) -> PlotResult<()> {
    render_frame2(surface, transform, opts, "plot_pose2d")
}

/// Render a 2D rigid transform as a labeled triad on the active 2D figure.
pub fn plot_pose2d<T: FrameTransform2 + ?Sized>(
    transform: &T,
    opts: &FrameOptions,
) -> PlotResult<()> {
    state::with_active_figure2(|fig| render_frame2(fig, transform, opts, "plot_pose2d"))
}

/// Render a 3D rotation as a labeled triad on an explicit surface.
pub fn plot_rot3d_on<S: Surface3 + ?Sized, T: FrameTransform3 + ?Sized>(
    surface: &mut S,
    transform: &T,
    opts: &FrameOptions,
) -> PlotResult<()> {
    render_frame3(surface, transform, opts, "plot_rot3d")
}

/// Render a 3D rotation as a labeled triad on the active 3D figure.
pub fn plot_rot3d<T: FrameTransform3 + ?Sized>(transform: &T, opts: &FrameOptions) -> PlotResult<()> {
    state::with_active_figure3(|fig| render_frame3(fig, transform, opts, "plot_rot3d"))
}

/// Render a 3D rigid transform as a labeled triad on an explicit surface.
pub fn plot_pose3d_on<S: Surface3 + ?Sized, T: FrameTransform3 + ?Sized>(
    surface: &mut S,
    transform: &T,
    opts: &FrameOptions,
) -> PlotResult<()> {
    render_frame3(surface, transform, opts, "plot_pose3d")
}

/// Render a 3D rigid transform as a labeled triad on the active 3D figure.
pub fn plot_pose3d<T: FrameTransform3 + ?Sized>(
    transform: &T,
    opts: &FrameOptions,
) -> PlotResult<()> {
    state::with_active_figure3(|fig| render_frame3(fig, transform, opts, "plot_pose3d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::{Figure2, Figure3, PlotElement2, PlotElement3};
    use glam::{DMat2, DQuat};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_rotation_renders_unit_triad_with_empty_frame_labels() {
        let mut fig = Figure2::new();
        plot_rot2d_on(&mut fig, &DMat2::IDENTITY, &FrameOptions::new()).unwrap();

        assert_eq!(fig.len(), 6);
        match &fig.elements()[0] {
            PlotElement2::Point(marker) => assert_eq!(marker.position, DVec2::ZERO),
            other => panic!("expected point, got {other:?}"),
        }
        match &fig.elements()[1] {
            PlotElement2::Text(label) => {
                assert_eq!(label.text, "{}");
                assert_eq!(label.position, DVec2::splat(-0.25));
            }
            other => panic!("expected text, got {other:?}"),
        }
        match &fig.elements()[2] {
            PlotElement2::Arrow(arrow) => {
                assert_eq!(arrow.start, DVec2::ZERO);
                assert_eq!(arrow.end, DVec2::X);
            }
            other => panic!("expected arrow, got {other:?}"),
        }
        match &fig.elements()[3] {
            PlotElement2::Text(label) => assert_eq!(label.text, "X_"),
            other => panic!("expected text, got {other:?}"),
        }
        match &fig.elements()[4] {
            PlotElement2::Arrow(arrow) => assert_eq!(arrow.end, DVec2::Y),
            other => panic!("expected arrow, got {other:?}"),
        }
        match &fig.elements()[5] {
            PlotElement2::Text(label) => assert_eq!(label.text, "Y_"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn rotation3_triad_has_eight_primitives_with_transformed_tips() {
        let mut fig = Figure3::new();
        let rot = DQuat::from_rotation_z(FRAC_PI_2);
        plot_rot3d_on(&mut fig, &rot, &FrameOptions::new().with_frame("B")).unwrap();

        // Origin marker, frame label, then arrow + tip label per axis.
        assert_eq!(fig.len(), 8);

        let x_tip = rot.apply(DVec3::X);
        match &fig.elements()[2] {
            PlotElement3::Arrow(arrow) => {
                assert_eq!(arrow.start, rot.apply(DVec3::ZERO));
                assert!((arrow.end - x_tip).length() < 1e-12);
            }
            other => panic!("expected arrow, got {other:?}"),
        }
        match &fig.elements()[7] {
            PlotElement3::Text(label) => {
                assert_eq!(label.text, "Z_B");
                let expected = rot.apply(DVec3::Z) + Z_TIP_NUDGE_3D;
                assert!((label.position - expected).length() < 1e-12);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_transform_leaves_earlier_primitives_in_place() {
        let mut fig = Figure3::new();
        let zero = glam::DMat3::ZERO;
        let err = plot_rot3d_on(&mut fig, &zero, &FrameOptions::new()).unwrap_err();
        assert!(matches!(err, crate::PlotError::DegenerateArrow { .. }));
        // Origin marker and frame label were already submitted; no rollback.
        assert_eq!(fig.len(), 2);
    }
}
