//! Oriented box and model builders.
//!
//! Objects are described by a base position, a heading and a reference
//! offset. The offset is expressed in the object's un-rotated frame and is
//! turned by the heading before being added to the position, so the object
//! pivots around the reference point rather than its own center.

use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{MODEL_HEADING_CORRECTION, MODEL_MEDIA_TYPE};
use crate::geometry::{rotate_reference_offset, yaw_orientation, Color, EulerAngles, Pose};
use crate::primitives::{CubePrimitive, ModelPrimitive};

/// Where an object sits: its base position plus the planar offset from
/// the reference point to the object's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectPlacement {
    pub position: Point3<f64>,
    pub reference_offset: Vector2<f64>,
}

impl ObjectPlacement {
    pub fn new(position: Point3<f64>, reference_offset: Vector2<f64>) -> Self {
        Self {
            position,
            reference_offset,
        }
    }

    /// Placement whose reference point is the object's center
    pub fn centered(position: Point3<f64>) -> Self {
        Self::new(position, Vector2::zeros())
    }

    /// Position after pivoting the reference offset by `heading`
    fn pivoted(&self, heading: f64) -> Point3<f64> {
        let offset = rotate_reference_offset(&self.reference_offset, heading);
        Point3::new(
            self.position.x + offset.x,
            self.position.y + offset.y,
            self.position.z,
        )
    }
}

/// Object extents. Length runs along the object's local x axis, width
/// along y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Extents as an (x, y, z) vector: length, width, height
    pub fn to_size(&self) -> Vector3<f64> {
        Vector3::new(self.length, self.width, self.height)
    }
}

/// Build an oriented box for an object.
///
/// The reference offset is turned by yaw alone, while the box pose carries
/// the full roll/pitch/yaw orientation. The position is treated as the
/// object's base, so the box center is lifted by half its height.
pub fn object_to_cube_primitive(
    placement: &ObjectPlacement,
    angles: &EulerAngles,
    dimensions: &Dimensions,
    color: Color,
) -> CubePrimitive {
    let mut position = placement.pivoted(angles.yaw);
    position.z += dimensions.height / 2.0;

    CubePrimitive {
        pose: Pose::new(position, angles.to_orientation()),
        size: dimensions.to_size(),
        color,
    }
}

/// Build an oriented model for an object heading along `theta`.
///
/// Unlike boxes, the height is passed through unchanged and the
/// orientation gets a half-turn on top of the heading. The payload is
/// embedded inline as binary glTF.
pub fn object_to_model_primitive(
    placement: &ObjectPlacement,
    theta: f64,
    dimensions: &Dimensions,
    color: Color,
    data: Vec<u8>,
) -> ModelPrimitive {
    let position = placement.pivoted(theta);

    ModelPrimitive {
        pose: Pose::new(position, yaw_orientation(theta + MODEL_HEADING_CORRECTION)),
        scale: dimensions.to_size(),
        color,
        override_color: false,
        url: String::new(),
        media_type: MODEL_MEDIA_TYPE.to_string(),
        data,
    }
}
