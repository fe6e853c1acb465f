//! Orientation based predicates used for brush hit-testing and stroke
//! clipping.
//!
//! Everything here composes from [`orientation`], the doubled signed area of
//! a triangle.

use crate::vector::{pointf, Point, PointF};

/// Parameter slack that snaps a near-endpoint intersection onto the endpoint.
const ENDPOINT_SNAP: f32 = 0.001;

/// Doubled signed area of the triangle `(a, b, c)`.
///
/// Positive when `c` lies left of the directed line `a -> b`, negative when it
/// lies to the right and zero when the three points are collinear.
pub fn orientation(a: PointF, b: PointF, c: PointF) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Whether `point` lies inside the triangle `(a, b, c)`.
///
/// The vertices must wind so that `orientation(a, b, c)` is negative. Points
/// on an edge are inside.
pub fn is_inside_triangle(point: PointF, a: PointF, b: PointF, c: PointF) -> bool {
    orientation(a, b, point) <= 0.0
        && orientation(b, c, point) <= 0.0
        && orientation(c, a, point) <= 0.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Closest point on the segment, truncated to pixel space.
    pub point: Point,
    /// Position along the segment, 0 at `a` and 1 at `b`.
    pub t: f32,
}

/// Projects `point` onto the segment `a -> b`.
///
/// `ab` and `ab_magnitude_squared` are `b - a` and its squared length, passed
/// in so that callers testing many points against one segment compute them
/// once. `a` and `b` must be distinct.
pub fn closest_point_in_segment(
    a: Point,
    b: Point,
    ab: PointF,
    ab_magnitude_squared: f32,
    point: Point,
) -> SegmentProjection {
    debug_assert!(a != b, "segment must have non-zero length");

    let ab_magnitude = ab_magnitude_squared.sqrt();
    let direction = ab / ab_magnitude;
    let ap = (point - a).as_vec2();

    let distance = direction.dot(ap).clamp(0.0, ab_magnitude);
    let closest = a.as_vec2() + distance * direction;

    SegmentProjection {
        point: closest.as_ivec2(),
        t: distance / ab_magnitude,
    }
}

/// [`closest_point_in_segment`] computing the segment direction itself.
pub fn project_onto_segment(a: Point, b: Point, point: Point) -> SegmentProjection {
    let ab = (b - a).as_vec2();
    closest_point_in_segment(a, b, ab, ab.length_squared(), point)
}

/// Intersection point of the segments `a -> b` and `u -> v`.
///
/// Only the position along `a -> b` is checked, so `u -> v` acts as an
/// infinite line and the hit may lie on its extension. Parallel segments
/// never intersect, including collinear segments that overlap.
pub fn intersect_line_segments(a: Point, b: Point, u: Point, v: Point) -> Option<PointF> {
    let ab = (b.x as i64 - a.x as i64, b.y as i64 - a.y as i64);
    let uv = (v.x as i64 - u.x as i64, v.y as i64 - u.y as i64);
    let au = (u.x as i64 - a.x as i64, u.y as i64 - a.y as i64);

    let det = cross(ab, uv);
    if det == 0 {
        return None;
    }

    let t = snap_to_unit_range((cross(au, uv) as f64 / det as f64) as f32)? as f64;

    Some(pointf(
        (a.x as f64 + t * ab.0 as f64) as f32,
        (a.y as f64 + t * ab.1 as f64) as f32,
    ))
}

/// `p × q` in 64 bits, wide enough for canvas-sized coordinates.
fn cross(p: (i64, i64), q: (i64, i64)) -> i64 {
    p.0 * q.1 - p.1 * q.0
}

fn snap_to_unit_range(t: f32) -> Option<f32> {
    let t = if t > 1.0 && t < 1.0 + ENDPOINT_SNAP {
        1.0
    } else if t < 0.0 && t > -ENDPOINT_SNAP {
        0.0
    } else {
        t
    };
    (0.0..=1.0).contains(&t).then_some(t)
}
