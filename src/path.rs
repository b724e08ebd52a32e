//! Smooth SVG paths through a sequence of points.
//!
//! [`svg_path`] renders the points as one `M` command followed by one cubic
//! Bézier `C` command per additional point. Each control point sits on the
//! tangent through its anchor, which is parallel to the line connecting the
//! anchor's neighbors, at a distance proportional to the neighbors' distance.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The default fraction of the neighbor distance used for control points.
pub const SMOOTHING: Float = 0.15;

/// The default vertical nudge for the first control point of each segment.
///
/// Without it, browsers clip perfectly straight curve segments.
pub const EPSILON: Float = 0.001;

/// A point in two dimensions.
#[cfg_attr(feature = "pyffi", pyclass(frozen, get_all, module = "hlcgamut"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Point {
    /// Create a new point. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(x: Float, y: Float) -> Self {
        Self::new(x, y)
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Point(x={}, y={})", self.x, self.y)
    }
}

impl From<(Float, Float)> for Point {
    fn from(value: (Float, Float)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// The parameters for smoothing a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStyle {
    pub smoothing: Float,
    pub epsilon: Float,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING,
            epsilon: EPSILON,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// One cubic Bézier segment ending in the given point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSegment {
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// Compute the control point for `current`.
///
/// The control point is offset from `current` by the smoothing factor times
/// the vector from `previous` to `next`, or the opposite vector if
/// `reverse` is set. Missing neighbors default to `current` itself.
fn control_point(
    current: Point,
    previous: Option<Point>,
    next: Option<Point>,
    reverse: bool,
    smoothing: Float,
) -> Point {
    let previous = previous.unwrap_or(current);
    let next = next.unwrap_or(current);

    let (from, to) = if reverse {
        (next, previous)
    } else {
        (previous, next)
    };

    Point::new(
        smoothing.mul_add(to.x - from.x, current.x),
        smoothing.mul_add(to.y - from.y, current.y),
    )
}

/// Compute the cubic Bézier segments connecting the points.
///
/// The result has one segment less than there are points, i.e., it is empty
/// for zero or one points.
pub fn curve_segments(points: &[Point], style: &CurveStyle) -> Vec<CurveSegment> {
    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));

    for index in 1..points.len() {
        let point = points[index];
        let previous = points[index - 1];
        let before_previous = index.checked_sub(2).map(|i| points[i]);
        let next = points.get(index + 1).copied();

        let mut control1 =
            control_point(previous, before_previous, Some(point), false, style.smoothing);
        control1.y += style.epsilon;
        let control2 = control_point(point, Some(previous), next, true, style.smoothing);

        segments.push(CurveSegment {
            control1,
            control2,
            end: point,
        });
    }

    segments
}

/// Render the points as a smooth SVG path.
///
/// An empty slice produces an empty string and a single point produces just
/// the move-to command.
///
/// ```
/// # use hlcgamut::path::{svg_path, CurveStyle, Point};
/// let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
/// assert_eq!(
///     svg_path(&points, &CurveStyle::default()),
///     "M 0,0 C 1.5,0.001 8.5,0 10,0"
/// );
/// ```
pub fn svg_path(points: &[Point], style: &CurveStyle) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M {},{}", first.x, first.y);
    for segment in curve_segments(points, style) {
        let CurveSegment {
            control1: c1,
            control2: c2,
            end: p,
        } = segment;

        path.push_str(&format!(
            " C {},{} {},{} {},{}",
            c1.x, c1.y, c2.x, c2.y, p.x, p.y
        ));
    }

    path
}

/// Render the points as a smooth SVG path with the default style.
/// <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "svg_path")]
pub fn py_svg_path(points: Vec<Point>) -> String {
    svg_path(&points, &CurveStyle::default())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{curve_segments, svg_path, CurveStyle, Point};
    use crate::core::assert_near_point;
    use crate::Float;

    #[test]
    fn test_degenerate_paths() {
        let style = CurveStyle::default();
        assert_eq!(svg_path(&[], &style), "");
        assert_eq!(svg_path(&[Point::new(1.0, 2.0)], &style), "M 1,2");
        assert_eq!(svg_path(&[Point::new(22.5, 37.5)], &style), "M 22.5,37.5");
        assert!(curve_segments(&[Point::new(1.0, 2.0)], &style).is_empty());
    }

    #[test]
    fn test_two_points() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let segments = curve_segments(&points, &CurveStyle::default());
        assert_eq!(segments.len(), 1);
        assert_near_point!(segments[0].control1, Point::new(1.5, 0.001), 1e-9);
        assert_near_point!(segments[0].control2, Point::new(8.5, 0.0), 1e-9);
        assert_eq!(segments[0].end, points[1]);

        let style = CurveStyle {
            smoothing: 0.0,
            epsilon: 0.0,
        };
        assert_eq!(svg_path(&points, &style), "M 0,0 C 0,0 10,0 10,0");
    }

    #[test]
    fn test_collinear_control_points() {
        let points: Vec<Point> = (0..5)
            .map(|i| Point::new(i as Float, 2.0 * i as Float))
            .collect();
        let style = CurveStyle::default();

        for segment in curve_segments(&points, &style) {
            for control in [segment.control1, segment.control2] {
                let deviation = control.y - 2.0 * control.x;
                assert!(
                    deviation.abs() <= 2.0 * style.epsilon,
                    "{:?} is off the line",
                    control
                );
            }
        }
    }

    #[test]
    fn test_interior_tangent() {
        // The control points around the apex are level with it.
        let points = [
            Point::new(0.0, 10.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let style = CurveStyle {
            smoothing: 0.2,
            epsilon: 0.0,
        };

        let segments = curve_segments(&points, &style);
        assert_eq!(segments.len(), 2);
        assert_near_point!(segments[0].control2, Point::new(3.0, 0.0), 1e-9);
        assert_near_point!(segments[1].control1, Point::new(7.0, 0.0), 1e-9);
    }
}
