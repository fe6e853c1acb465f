//! Conversions and trigonometry on 2D vectors.

use std::f32::consts::PI;

/// Pixel space position or offset.
pub type Point = glam::IVec2;
/// Sub-pixel position, direction or unit vector.
pub type PointF = glam::Vec2;

#[inline(always)]
pub const fn point(x: i32, y: i32) -> Point {
    glam::IVec2::new(x, y)
}

#[inline(always)]
pub const fn pointf(x: f32, y: f32) -> PointF {
    glam::Vec2::new(x, y)
}

/// Truncates toward zero.
pub fn to_int(v: PointF) -> Point {
    v.as_ivec2()
}

pub fn to_float(p: Point) -> PointF {
    p.as_vec2()
}

pub fn dot(a: PointF, b: PointF) -> f32 {
    a.dot(b)
}

pub fn magnitude(v: PointF) -> f32 {
    dot(v, v).sqrt()
}

/// Quarter turn counter-clockwise, `(x, y) -> (-y, x)`.
pub fn perpendicular(v: Point) -> Point {
    point(-v.y, v.x)
}

pub fn degrees_to_radians(degrees: i32) -> f32 {
    assert!(
        (0..360).contains(&degrees),
        "degrees must lie in [0, 360), got {}",
        degrees
    );
    PI * (degrees as f32 / 180.0)
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    (180.0 * radians) / PI
}

pub fn polar_to_cartesian(angle: f32, radius: f32) -> PointF {
    pointf(radius * angle.cos(), radius * angle.sin())
}

/// Rotates `p` about the origin and truncates the result.
///
/// Every call loses the fractional part, so rotating a point by `a` and then
/// by `-a` does not in general give the original point back.
pub fn rotate_int(p: Point, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    let (x, y) = (p.x as f32, p.y as f32);
    point((x * cos - y * sin) as i32, (x * sin + y * cos) as i32)
}
