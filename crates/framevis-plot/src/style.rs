//! Colors, label offsets, and pass-through styling.
//!
//! Color tokens follow the MATLAB/matplotlib conventions: long names
//! (`"black"`), single-letter codes (`"k"`), and `#rrggbb`/`#rrggbbaa` hex.
//! Everything else a caller wants to say to a renderer travels in a
//! [`StyleMap`], which the drawing operations forward verbatim and never
//! interpret.

use std::collections::BTreeMap;

use glam::{DVec2, DVec3, Vec4};

use crate::error::{PlotError, PlotResult};

/// Color applied when an operation receives none.
pub const DEFAULT_COLOR: &str = "black";

/// Stroke width for 2D arrows, in plot units.
pub const DEFAULT_ARROW_WIDTH: f64 = 0.02;

/// Absolute arrowhead length targeted by 3D arrows, in plot units.
pub const ARROW_HEAD_LENGTH: f64 = 0.2;

/// Uniform offset nudging a marker's label off the marker glyph.
pub const MARKER_LABEL_NUDGE: f64 = 0.05;

/// Uniform offset pulling the `{frame}` label away from the origin marker
/// and the arrows emanating from it.
pub const FRAME_LABEL_NUDGE: f64 = -0.25;

/// A single pass-through styling value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

/// Open styling options forwarded verbatim to the surface, keyed by name.
/// Ordered so identical submissions compare and iterate identically.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A label offset: one scalar broadcast to every axis, or one value per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta2 {
    Uniform(f64),
    PerAxis(DVec2),
}

impl Delta2 {
    pub const ZERO: Delta2 = Delta2::Uniform(0.0);

    /// Resolve to a full-dimension offset vector.
    pub fn resolve(&self) -> DVec2 {
        match *self {
            Delta2::Uniform(d) => DVec2::splat(d),
            Delta2::PerAxis(v) => v,
        }
    }
}

impl From<f64> for Delta2 {
    fn from(value: f64) -> Self {
        Delta2::Uniform(value)
    }
}

impl From<DVec2> for Delta2 {
    fn from(value: DVec2) -> Self {
        Delta2::PerAxis(value)
    }
}

/// Three-axis counterpart of [`Delta2`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Delta3 {
    Uniform(f64),
    PerAxis(DVec3),
}

impl Delta3 {
    pub const ZERO: Delta3 = Delta3::Uniform(0.0);

    pub fn resolve(&self) -> DVec3 {
        match *self {
            Delta3::Uniform(d) => DVec3::splat(d),
            Delta3::PerAxis(v) => v,
        }
    }
}

impl From<f64> for Delta3 {
    fn from(value: f64) -> Self {
        Delta3::Uniform(value)
    }
}

impl From<DVec3> for Delta3 {
    fn from(value: DVec3) -> Self {
        Delta3::PerAxis(value)
    }
}

/// Parse a color token into RGBA.
///
/// Accepts the MATLAB named colors and their single-letter codes plus
/// `#rrggbb`/`#rrggbbaa` hex. Unknown tokens are a backend failure the
/// drawing operations propagate unchanged.
pub fn parse_color(token: &str) -> PlotResult<Vec4> {
    let trimmed = token.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex_color(trimmed, hex);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "r" | "red" => Ok(Vec4::new(1.0, 0.0, 0.0, 1.0)),
        "g" | "green" => Ok(Vec4::new(0.0, 1.0, 0.0, 1.0)),
        "b" | "blue" => Ok(Vec4::new(0.0, 0.0, 1.0, 1.0)),
        "c" | "cyan" => Ok(Vec4::new(0.0, 1.0, 1.0, 1.0)),
        "m" | "magenta" => Ok(Vec4::new(1.0, 0.0, 1.0, 1.0)),
        "y" | "yellow" => Ok(Vec4::new(1.0, 1.0, 0.0, 1.0)),
        "k" | "black" => Ok(Vec4::new(0.0, 0.0, 0.0, 1.0)),
        "w" | "white" => Ok(Vec4::new(1.0, 1.0, 1.0, 1.0)),
        "gray" | "grey" => Ok(Vec4::new(0.5, 0.5, 0.5, 1.0)),
        _ => Err(PlotError::InvalidColor {
            token: token.to_string(),
        }),
    }
}

fn parse_hex_color(token: &str, hex: &str) -> PlotResult<Vec4> {
    let invalid = || PlotError::InvalidColor {
        token: token.to_string(),
    };
    if hex.len() != 6 && hex.len() != 8 {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| -> PlotResult<f32> {
        let byte = u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())?;
        Ok(byte as f32 / 255.0)
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    let a = if hex.len() == 8 { channel(6..8)? } else { 1.0 };
    Ok(Vec4::new(r, g, b, a))
}
