//! Canvas helpers that seed a configured active figure.

use log::debug;

use crate::plots::{Figure2, Figure3};
use crate::state::{self, FigureHandle};

/// Canvas configuration applied by [`new_plot2d`] / [`new_plot3d`].
#[derive(Debug, Clone)]
pub struct FigureConfig {
    /// Shared limits for every axis.
    pub limits: (f64, f64),
    pub x_label: String,
    pub y_label: String,
    /// Ignored by [`new_plot2d`].
    pub z_label: String,
    pub tick_step: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            limits: (-2.0, 2.0),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            z_label: "Z".to_string(),
            tick_step: 1.0,
        }
    }
}

impl FigureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: (f64, f64)) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_labels<S: Into<String>>(mut self, x: S, y: S, z: S) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self.z_label = z.into();
        self
    }

    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = step;
        self
    }
}

/// Create a fresh, configured 2D figure and make it active.
pub fn new_plot2d(config: &FigureConfig) -> FigureHandle {
    let handle = state::new_figure2();
    debug!("new_plot2d: figure {}", handle.as_u32());
    let figure = Figure2::new()
        .with_labels(config.x_label.clone(), config.y_label.clone())
        .with_limits(config.limits, config.limits)
        .with_tick_step(config.tick_step)
        .with_grid(true);
    state::set_active_figure2(figure);
    handle
}

/// Create a fresh, configured 3D figure and make it active.
pub fn new_plot3d(config: &FigureConfig) -> FigureHandle {
    let handle = state::new_figure3();
    debug!("new_plot3d: figure {}", handle.as_u32());
    let figure = Figure3::new()
        .with_labels(
            config.x_label.clone(),
            config.y_label.clone(),
            config.z_label.clone(),
        )
        .with_limits(config.limits, config.limits, config.limits)
        .with_tick_step(config.tick_step)
        .with_grid(true);
    state::set_active_figure3(figure);
    handle
}
