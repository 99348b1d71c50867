//! Renders two poses onto one figure and dumps the recorded primitives.
//!
//! Run with `RUST_LOG=debug` to see the per-operation log lines.

use framevis_plot::{
    new_plot2d, plot_pose2d, plot_rot2d, state, FigureConfig, FrameOptions, PlotElement2,
    PlotError,
};
use glam::{DAffine2, DVec2};
use std::f64::consts::FRAC_PI_4;

fn main() -> Result<(), PlotError> {
    env_logger::init();

    new_plot2d(&FigureConfig::new().with_limits((-3.0, 3.0)));

    plot_rot2d(
        &glam::DMat2::IDENTITY,
        &FrameOptions::new().with_frame("W"),
    )?;

    let pose = DAffine2::from_angle_translation(FRAC_PI_4, DVec2::new(1.0, 0.5));
    plot_pose2d(&pose, &FrameOptions::new().with_frame("A").with_color("blue"))?;

    let figure = state::active_figure2();
    println!("figure holds {} primitives:", figure.len());
    for element in figure.elements() {
        match element {
            PlotElement2::Point(marker) => {
                println!("  point  ({:.3}, {:.3})", marker.position.x, marker.position.y)
            }
            PlotElement2::Arrow(arrow) => println!(
                "  arrow  ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                arrow.start.x, arrow.start.y, arrow.end.x, arrow.end.y
            ),
            PlotElement2::Text(label) => println!(
                "  text   '{}' at ({:.3}, {:.3})",
                label.text, label.position.x, label.position.y
            ),
        }
    }

    if let Some(bounds) = figure.bounds() {
        println!(
            "bounds: ({:.3}, {:.3}) .. ({:.3}, {:.3})",
            bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
        );
    }

    Ok(())
}
