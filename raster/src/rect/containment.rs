use super::Rect;
use crate::vector::Point;

/// Half-open test, the right and bottom edges are outside.
pub fn is_inside_rect(bounds: Rect, point: Point) -> bool {
    let horizontal_overlap = bounds.left <= point.x && point.x < bounds.right;
    let vertical_overlap = bounds.top <= point.y && point.y < bounds.bottom;

    horizontal_overlap && vertical_overlap
}

/// Whether `inner` is enclosed by `outer`, shared edges included.
pub fn is_rect_within_rect(inner: Rect, outer: Rect) -> bool {
    inner.left >= outer.left
        && inner.right <= outer.right
        && inner.top >= outer.top
        && inner.bottom <= outer.bottom
}
