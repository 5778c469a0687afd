//! Fixed values shared by the primitive builders.

use crate::geometry::Color;

/// Media type attached to every model primitive. The payload is always an
/// inline binary glTF buffer.
pub const MODEL_MEDIA_TYPE: &str = "model/gltf-binary";

/// Color assigned to the invisible half of a dash pattern.
pub const GAP_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.0);

/// Fully transparent black. Used as the top-level color of primitives whose
/// per-point colors take over.
pub const CLEAR_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Half-turn added to a model heading. Models are authored facing the
/// opposite direction of the heading convention used for boxes.
pub const MODEL_HEADING_CORRECTION: f64 = std::f64::consts::PI;
