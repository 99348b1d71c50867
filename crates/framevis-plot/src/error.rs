//! Error taxonomy for drawing operations and surfaces.

use glam::DVec3;
use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// A 3D arrow whose endpoints coincide (or are not finite) has no
    /// direction, so its head ratio is undefined.
    #[error("{op}: arrow from ({}, {}, {}) to ({}, {}, {}) has zero length; start and end must differ", start.x, start.y, start.z, end.x, end.y, end.z)]
    DegenerateArrow {
        op: &'static str,
        start: DVec3,
        end: DVec3,
    },

    /// The surface could not interpret a color token.
    #[error("unrecognized color token '{token}'")]
    InvalidColor { token: String },

    /// A registry operation referenced a figure that does not exist.
    #[error("figure handle {handle} does not exist")]
    UnknownFigure { handle: u32 },
}
