//! Coordinate-frame plotting for robotics and kinematics work.
//!
//! Renders rotation and rigid-body transforms as labeled triads: a marker at
//! the frame origin, one arrow per basis axis, and text labels placed with
//! fixed anti-collision offsets. Primitives are submitted to a plotting
//! surface ([`Surface2`]/[`Surface3`]); the retained [`Figure2`]/[`Figure3`]
//! implementations accumulate them in submission order for a renderer to
//! consume.
//!
//! ```
//! use framevis_plot::{plot_pose2d_on, Figure2, FrameOptions};
//! use glam::{DAffine2, DVec2};
//!
//! let mut fig = Figure2::new();
//! let pose = DAffine2::from_angle_translation(std::f64::consts::FRAC_PI_2, DVec2::new(1.0, 0.5));
//! plot_pose2d_on(&mut fig, &pose, &FrameOptions::new().with_frame("A").with_color("blue")).unwrap();
//! assert_eq!(fig.len(), 6); // origin marker, frame label, two arrows, two axis labels
//! ```
//!
//! Operations without an `_on` suffix target the process-wide active figure
//! (see [`state`]), mirroring the implicit current-axes workflow of
//! interactive plotting environments.

pub mod error;
pub mod ops;
pub mod plots;
pub mod state;
pub mod style;
pub mod surface;

pub use error::{PlotError, PlotResult};
pub use ops::{
    new_plot2d, new_plot3d, plot_arrow2d, plot_arrow2d_on, plot_arrow3d, plot_arrow3d_on,
    plot_point2d, plot_point2d_on, plot_point3d, plot_point3d_on, plot_pose2d, plot_pose2d_on,
    plot_pose3d, plot_pose3d_on, plot_rot2d, plot_rot2d_on, plot_rot3d, plot_rot3d_on,
    plot_text2d, plot_text2d_on, plot_text3d, plot_text3d_on, ArrowOptions, FigureConfig,
    FrameOptions, PointOptions, TextOptions2, TextOptions3,
};
pub use plots::{
    Arrow2, Arrow3, Bounds2, Bounds3, Figure2, Figure3, PlotElement2, PlotElement3, PointMarker2,
    PointMarker3, TextLabel2, TextLabel3,
};
pub use state::FigureHandle;
pub use style::{Delta2, Delta3, StyleMap, StyleValue};
pub use surface::{Surface2, Surface3};
