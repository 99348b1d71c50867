//! Retained drawing primitives and the figures that collect them.

pub mod arrow;
pub mod figure;
pub mod marker;
pub mod text;

pub use arrow::{Arrow2, Arrow3};
pub use figure::{Bounds2, Bounds3, Figure2, Figure3, PlotElement2, PlotElement3};
pub use marker::{PointMarker2, PointMarker3};
pub use text::{TextLabel2, TextLabel3};
