//! Drawing primitives handed to the visualization layer
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::geometry::{Color, Pose};

/// How a renderer connects the points of a line primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    /// Each point connects to the next one
    LineStrip,
    /// Like a strip, with the last point connected back to the first
    LineLoop,
    /// Points are consumed in independent pairs
    LineList,
}

/// A line drawn through a sequence of points.
///
/// When `colors` is non-empty it holds exactly one color per point and
/// overrides `color`; otherwise `color` applies to every segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub kind: LineType,
    pub pose: Pose,
    pub thickness: f64,
    /// Thickness in screen pixels instead of world units
    pub scale_invariant: bool,
    pub points: Vec<Point3<f64>>,
    pub color: Color,
    pub colors: Vec<Color>,
    pub indices: Vec<u32>,
}

impl LinePrimitive {
    /// Whether per-point colors are in use
    pub fn has_point_colors(&self) -> bool {
        !self.colors.is_empty()
    }
}

/// An axis-aligned box in its own frame, placed by `pose`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubePrimitive {
    pub pose: Pose,
    pub size: Vector3<f64>,
    pub color: Color,
}

/// An embedded 3D model carried inline as a binary payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrimitive {
    pub pose: Pose,
    pub scale: Vector3<f64>,
    pub color: Color,
    /// Whether `color` replaces the model's own materials
    pub override_color: bool,
    /// Remote location of the model; empty when `data` is inline
    pub url: String,
    pub media_type: String,
    pub data: Vec<u8>,
}
