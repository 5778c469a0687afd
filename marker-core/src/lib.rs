//! Marker Core - geometry-to-primitive builders for scene visualization
//!
//! This library turns object poses, extents and polylines into the drawing
//! primitives a visualization layer renders: solid and dashed line strips,
//! oriented boxes and oriented embedded models. Every builder is a pure
//! function; nothing is cached or shared between calls.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod line;
pub mod object;
pub mod primitives;

// Re-export commonly used types
pub use error::{MarkerError, Result};
pub use geometry::{orientation, yaw_orientation, Color, EulerAngles, Pose};
pub use line::{point_list_to_dashed_line_primitive, point_list_to_line_primitive, DashPattern};
pub use object::{object_to_cube_primitive, object_to_model_primitive, Dimensions, ObjectPlacement};
pub use primitives::{CubePrimitive, LinePrimitive, LineType, ModelPrimitive};
