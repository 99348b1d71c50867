//! Drawing operations.
//!
//! Each operation comes in two forms: the bare form targets the process-wide
//! active figure, the `_on` form targets an explicit surface. Defaults
//! (color, offsets, widths) are resolved once at the top of each operation.

mod arrow;
mod canvas;
mod frame;
mod point;
mod text;

pub use arrow::{plot_arrow2d, plot_arrow2d_on, plot_arrow3d, plot_arrow3d_on, ArrowOptions};
pub use canvas::{new_plot2d, new_plot3d, FigureConfig};
pub use frame::{
    plot_pose2d, plot_pose2d_on, plot_pose3d, plot_pose3d_on, plot_rot2d, plot_rot2d_on,
    plot_rot3d, plot_rot3d_on, FrameOptions,
};
pub use point::{plot_point2d, plot_point2d_on, plot_point3d, plot_point3d_on, PointOptions};
pub use text::{plot_text2d, plot_text2d_on, plot_text3d, plot_text3d_on, TextOptions2, TextOptions3};
