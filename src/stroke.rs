use itertools::Itertools;
use raster::{
    intersect_line_segments, project_onto_segment,
    vector::{degrees_to_radians, magnitude, rotate_int, to_float},
    Point, PointF, Rect,
};

/// Brush stroke as a polyline of pixel positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    radius: i32,
}

impl Stroke {
    pub fn new(radius: i32) -> Self {
        Stroke {
            points: Vec::new(),
            radius,
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Area covered by the stroke, `None` before the first point.
    pub fn bounds(&self) -> Option<Rect> {
        if self.points.is_empty() {
            return None;
        }
        Some(Rect::bounding(&self.points).enlarge(self.radius))
    }

    /// Consecutive point pairs making up the stroke.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied().tuple_windows()
    }

    /// Whether `point` is within the brush radius of the stroke.
    pub fn is_hit(&self, point: Point) -> bool {
        let radius = self.radius as f32;
        let within_radius = |closest: Point| magnitude(to_float(point - closest)) <= radius;

        match self.points.as_slice() {
            [] => false,
            [single] => within_radius(*single),
            _ => self.segments().any(|(a, b)| {
                if a == b {
                    within_radius(a)
                } else {
                    within_radius(project_onto_segment(a, b, point).point)
                }
            }),
        }
    }

    /// First point where the line through `u -> v` crosses the stroke.
    pub fn first_crossing(&self, u: Point, v: Point) -> Option<PointF> {
        self.segments()
            .find_map(|(a, b)| intersect_line_segments(a, b, u, v))
    }

    /// Rotates every point by `degrees` about `pivot`.
    pub fn rotate_about(&mut self, pivot: Point, degrees: i32) {
        let angle = degrees_to_radians(degrees);
        for point in &mut self.points {
            *point = pivot + rotate_int(*point - pivot, angle);
        }
    }
}
