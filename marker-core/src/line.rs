//! Solid and dashed line strip builders
use log::{debug, trace};
use nalgebra::{Point2, Point3};

use crate::constants::{CLEAR_COLOR, GAP_COLOR};
use crate::error::{MarkerError, Result};
use crate::geometry::{lift, Color, Pose};
use crate::primitives::{LinePrimitive, LineType};

/// Lengths of the visible and invisible parts of a dash pattern.
///
/// Both lengths are strictly positive; a zero step would leave the dash
/// cursor in place forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    segment: f64,
    gap: f64,
}

impl DashPattern {
    pub fn new(segment: f64, gap: f64) -> Result<Self> {
        // Written as a negated comparison so NaN is rejected too
        if !(segment > 0.0) {
            return Err(MarkerError::InvalidDashLength {
                name: "segment",
                value: segment,
            });
        }
        if !(gap > 0.0) {
            return Err(MarkerError::InvalidDashLength {
                name: "gap",
                value: gap,
            });
        }
        Ok(Self { segment, gap })
    }

    pub fn segment(&self) -> f64 {
        self.segment
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }
}

/// Build a solid line strip from planar points, lifted onto z = 0.
///
/// Fewer than two points is not an error; the renderer draws nothing for it.
pub fn point_list_to_line_primitive(
    points: &[Point2<f64>],
    thickness: f64,
    color: Color,
) -> LinePrimitive {
    LinePrimitive {
        kind: LineType::LineStrip,
        pose: Pose::identity(),
        thickness,
        scale_invariant: false,
        points: points.iter().map(lift).collect(),
        color,
        colors: Vec::new(),
        indices: Vec::new(),
    }
}

/// Build a dashed line through `points`.
///
/// Each consecutive pair of input points is cut into alternating visible and
/// gap sub-segments, starting visible at every pair. Every sub-segment is
/// emitted as a (start, end) point pair with a matching color pair: `color`
/// for visible parts and a transparent color for gaps, so `points` and
/// `colors` always have the same even length. The last sub-segment of a pair
/// is clamped to end exactly on the pair's second point.
pub fn point_list_to_dashed_line_primitive(
    points: &[Point3<f64>],
    pattern: &DashPattern,
    thickness: f64,
    color: Color,
) -> LinePrimitive {
    let mut dash_points = Vec::new();
    let mut dash_colors = Vec::new();

    for pair in points.windows(2) {
        dash_pair(
            &pair[0],
            &pair[1],
            pattern,
            color,
            &mut dash_points,
            &mut dash_colors,
        );
    }

    LinePrimitive {
        kind: LineType::LineStrip,
        pose: Pose::identity(),
        thickness,
        scale_invariant: false,
        points: dash_points,
        color: CLEAR_COLOR,
        colors: dash_colors,
        indices: Vec::new(),
    }
}

fn dash_pair(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    pattern: &DashPattern,
    color: Color,
    points: &mut Vec<Point3<f64>>,
    colors: &mut Vec<Color>,
) {
    let distance = nalgebra::distance(p1, p2);
    if distance == 0.0 {
        debug!("skipping zero-length dash pair at {:?}", p1);
        return;
    }
    if distance.is_infinite() {
        debug!("skipping dash pair of infinite length {:?} -> {:?}", p1, p2);
        return;
    }

    // x = p1 + t * (p2 - p1)
    let direction = p2 - p1;
    let mut cursor = 0.0;
    let mut visible = true;
    let mut emitted = 0usize;

    // A NaN distance fails this comparison and emits nothing
    while cursor < distance {
        let start = p1 + direction * (cursor / distance);

        cursor += if visible { pattern.segment } else { pattern.gap };

        let t = cursor / distance;
        let end = if t > 1.0 { *p2 } else { p1 + direction * t };

        let pair_color = if visible { color } else { GAP_COLOR };
        points.push(start);
        points.push(end);
        colors.push(pair_color);
        colors.push(pair_color);

        emitted += 1;
        visible = !visible;
    }

    trace!("dash pair of length {} emitted {} sub-segments", distance, emitted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn red() -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_line_lifts_points() {
        let input = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.5, 2.0),
            Point2::new(-3.0, 4.0),
        ];
        let line = point_list_to_line_primitive(&input, 0.2, red());

        assert_eq!(line.kind, LineType::LineStrip);
        assert_eq!(line.pose, Pose::identity());
        assert_eq!(line.points.len(), input.len());
        for (out, p) in line.points.iter().zip(&input) {
            assert_eq!(out.x, p.x);
            assert_eq!(out.y, p.y);
            assert_eq!(out.z, 0.0);
        }
        assert_eq!(line.color, red());
        assert!(line.colors.is_empty());
        assert!(line.indices.is_empty());
        assert!(!line.scale_invariant);
        assert_eq!(line.thickness, 0.2);
    }

    #[test]
    fn test_line_degenerate_inputs() {
        assert!(point_list_to_line_primitive(&[], 1.0, red()).points.is_empty());

        let single = point_list_to_line_primitive(&[Point2::new(4.0, 5.0)], 1.0, red());
        assert_eq!(single.points, vec![Point3::new(4.0, 5.0, 0.0)]);
    }

    #[test]
    fn test_dash_pattern_rejects_non_positive() {
        assert_eq!(
            DashPattern::new(0.0, 1.0),
            Err(MarkerError::InvalidDashLength {
                name: "segment",
                value: 0.0
            })
        );
        assert_eq!(
            DashPattern::new(1.0, -2.0),
            Err(MarkerError::InvalidDashLength {
                name: "gap",
                value: -2.0
            })
        );
        assert!(DashPattern::new(f64::NAN, 1.0).is_err());
        assert!(DashPattern::new(1.0, f64::NAN).is_err());

        let pattern = DashPattern::new(2.0, 1.0).unwrap();
        assert_eq!(pattern.segment(), 2.0);
        assert_eq!(pattern.gap(), 1.0);
    }

    #[test]
    fn test_error_message() {
        let err = DashPattern::new(-1.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "segment length must be strictly positive, got -1");
    }

    #[test]
    fn test_dashed_straight_segment() {
        let pattern = DashPattern::new(2.0, 1.0).unwrap();
        let input = [Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)];
        let line = point_list_to_dashed_line_primitive(&input, &pattern, 0.1, red());

        let expected = [
            (0.0, 2.0),
            (2.0, 3.0),
            (3.0, 5.0),
            (5.0, 6.0),
            (6.0, 8.0),
            (8.0, 9.0),
            (9.0, 10.0),
        ];
        assert_eq!(line.points.len(), expected.len() * 2);
        assert_eq!(line.colors.len(), line.points.len());

        for (i, (start, end)) in expected.iter().enumerate() {
            let a = line.points[2 * i];
            let b = line.points[2 * i + 1];
            assert_relative_eq!(a.x, *start, epsilon = 1e-12);
            assert_relative_eq!(b.x, *end, epsilon = 1e-12);
            assert_eq!(a.y, 0.0);
            assert_eq!(b.z, 0.0);

            let want = if i % 2 == 0 { red() } else { GAP_COLOR };
            assert_eq!(line.colors[2 * i], want);
            assert_eq!(line.colors[2 * i + 1], want);
        }

        // Last cursor step overshoots to 11 and is clamped
        assert_eq!(line.points.last(), Some(&Point3::new(10.0, 0.0, 0.0)));
        assert_eq!(line.color, CLEAR_COLOR);
        assert_eq!(line.kind, LineType::LineStrip);
        assert!(line.indices.is_empty());
    }

    #[test]
    fn test_dashed_exact_fit() {
        let pattern = DashPattern::new(2.0, 2.0).unwrap();
        let input = [Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0)];
        let line = point_list_to_dashed_line_primitive(&input, &pattern, 0.1, red());

        assert_eq!(line.points.len(), 4);
        assert_eq!(line.points[3], Point3::new(4.0, 0.0, 0.0));
        assert_eq!(line.colors[3], GAP_COLOR);
    }

    #[test]
    fn test_dashed_points_stay_on_segment() {
        let pattern = DashPattern::new(0.3, 0.2).unwrap();
        let p1 = Point3::new(1.0, -2.0, 0.5);
        let p2 = Point3::new(4.0, 2.0, 3.0);
        let line = point_list_to_dashed_line_primitive(&[p1, p2], &pattern, 0.1, red());

        let direction = (p2 - p1).normalize();
        let length = nalgebra::distance(&p1, &p2);
        for p in &line.points {
            let along = (p - p1).dot(&direction);
            let off_axis = (p - p1) - direction * along;
            assert!(off_axis.norm() < 1e-9);
            assert!(along >= -1e-9 && along <= length + 1e-9);
        }
        assert_eq!(line.points[0], p1);
        assert_eq!(*line.points.last().unwrap(), p2);
    }

    #[test]
    fn test_dashed_coincident_points_are_skipped() {
        let pattern = DashPattern::new(1.0, 1.0).unwrap();
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 0.0, 0.0);

        let line = point_list_to_dashed_line_primitive(&[a, a, b], &pattern, 0.1, red());
        let direct = point_list_to_dashed_line_primitive(&[a, b], &pattern, 0.1, red());
        assert_eq!(line.points, direct.points);
        assert_eq!(line.colors, direct.colors);

        let empty = point_list_to_dashed_line_primitive(&[a, a], &pattern, 0.1, red());
        assert!(empty.points.is_empty());
        assert!(empty.colors.is_empty());
    }

    #[test]
    fn test_dashed_restarts_visible_at_each_pair() {
        let pattern = DashPattern::new(1.0, 1.0).unwrap();
        let input = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let line = point_list_to_dashed_line_primitive(&input, &pattern, 0.1, red());

        // One visible sub-segment per unit-length pair, no gaps
        assert_eq!(line.points.len(), 4);
        assert!(line.colors.iter().all(|c| *c == red()));
        assert_eq!(line.points[2], input[1]);
        assert_eq!(line.points[3], input[2]);
    }

    #[test]
    fn test_dashed_short_inputs() {
        let pattern = DashPattern::new(1.0, 1.0).unwrap();
        assert!(point_list_to_dashed_line_primitive(&[], &pattern, 0.1, red())
            .points
            .is_empty());
        assert!(
            point_list_to_dashed_line_primitive(&[Point3::origin()], &pattern, 0.1, red())
                .points
                .is_empty()
        );
    }

    #[test]
    fn test_dashed_non_finite_lengths_terminate() {
        let pattern = DashPattern::new(1.0, 1.0).unwrap();
        let far = [Point3::origin(), Point3::new(f64::INFINITY, 0.0, 0.0)];
        assert!(point_list_to_dashed_line_primitive(&far, &pattern, 0.1, red())
            .points
            .is_empty());

        let nan = [Point3::origin(), Point3::new(f64::NAN, 0.0, 0.0)];
        assert!(point_list_to_dashed_line_primitive(&nan, &pattern, 0.1, red())
            .points
            .is_empty());
    }
}
