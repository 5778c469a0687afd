//! Geometry value types and the orientation helper
use nalgebra::{Point2, Point3, Rotation2, UnitQuaternion, Vector2};
use serde::{Deserialize, Serialize};

/// RGBA color with components in the 0.0-1.0 range. Values are passed
/// through as given; nothing here clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// Rigid transform placing a primitive in the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    pub fn new(position: Point3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Origin with no rotation
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Roll, pitch and yaw of an object (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerAngles {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Heading only, level in roll and pitch
    pub fn from_yaw(yaw: f64) -> Self {
        Self::new(0.0, 0.0, yaw)
    }

    pub fn to_orientation(&self) -> UnitQuaternion<f64> {
        orientation(self.roll, self.pitch, self.yaw)
    }
}

impl Default for EulerAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Build a unit quaternion from roll, pitch and yaw (radians).
///
/// Axis convention: roll about X, pitch about Y, yaw about Z, all about the
/// fixed frame and applied in that order, so the result is
/// `Rz(yaw) * Ry(pitch) * Rx(roll)`. In half-angle form:
///
/// ```text
/// x = sr*cp*cy - cr*sp*sy
/// y = cr*sp*cy + sr*cp*sy
/// z = cr*cp*sy - sr*sp*cy
/// w = cr*cp*cy + sr*sp*sy
/// ```
///
/// Non-finite angles propagate into the quaternion unchanged.
pub fn orientation(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(roll, pitch, yaw)
}

/// Heading-only orientation, equivalent to `orientation(0.0, 0.0, yaw)`.
pub fn yaw_orientation(yaw: f64) -> UnitQuaternion<f64> {
    EulerAngles::from_yaw(yaw).to_orientation()
}

/// Rotate a reference offset, given in the object's un-rotated frame, by a
/// heading angle in the XY plane.
pub fn rotate_reference_offset(offset: &Vector2<f64>, heading: f64) -> Vector2<f64> {
    Rotation2::new(heading) * offset
}

/// Lift a planar point onto the z = 0 plane
pub fn lift(point: &Point2<f64>) -> Point3<f64> {
    Point3::new(point.x, point.y, 0.0)
}
