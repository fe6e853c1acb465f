pub mod containment;

use crate::vector::{point, Point};

/// Axis aligned box in pixel space.
///
/// A valid rect has `left <= right` and `top <= bottom`. Zero width or height
/// is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

#[inline(always)]
pub const fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
    Rect {
        left,
        top,
        right,
        bottom,
    }
}

#[inline(always)]
pub const fn dimension(width: i32, height: i32) -> Dimension {
    Dimension { width, height }
}

impl Rect {
    pub const fn from_corners(top_left: Point, bot_right: Point) -> Self {
        rect(top_left.x, top_left.y, bot_right.x, bot_right.y)
    }

    pub fn top_left(&self) -> Point {
        point(self.left, self.top)
    }

    pub fn bot_right(&self) -> Point {
        point(self.right, self.bottom)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_valid(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Debug check that the rect is not inverted.
    #[inline]
    pub fn validate(&self) {
        debug_assert!(self.is_valid(), "inverted rect: {:?}", self);
    }

    /// Smallest rect covering both `self` and `other`.
    ///
    /// The result is never inverted, even if an input is.
    pub fn union(&self, other: &Rect) -> Rect {
        let mut result = rect(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        );
        if result.left > result.right {
            result.left = result.right;
        }
        if result.bottom < result.top {
            result.bottom = result.top;
        }
        result
    }

    /// Overlap of `self` and `other`.
    ///
    /// Disjoint rects give a zero width or zero height rect at the edge where
    /// the overlap would start.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let mut result = rect(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if result.left >= result.right {
            result.left = result.right;
        }
        if result.bottom <= result.top {
            result.bottom = result.top;
        }
        result
    }

    /// Grows each axis narrower than `min_size` by `min_size / 2` on both
    /// sides, so that the raster limits span at least a block.
    pub fn stretch(&self, min_size: i32) -> Rect {
        let mut stretched = *self;
        if stretched.height() < min_size {
            stretched.top -= min_size / 2;
            stretched.bottom += min_size / 2;
        }
        if stretched.width() < min_size {
            stretched.left -= min_size / 2;
            stretched.right += min_size / 2;
        }
        stretched
    }

    /// Clamps every edge into the screen area `[0, width] x [0, height]`.
    pub fn clip_to_screen(&self, screen: Dimension) -> Rect {
        rect(
            self.left.clamp(0, screen.width.max(0)),
            self.top.clamp(0, screen.height.max(0)),
            self.right.clamp(0, screen.width.max(0)),
            self.bottom.clamp(0, screen.height.max(0)),
        )
    }

    /// Moves every edge outwards by `offset`. Negative offsets shrink the rect
    /// and may invert it.
    pub fn enlarge(&self, offset: i32) -> Rect {
        rect(
            self.left - offset,
            self.top - offset,
            self.right + offset,
            self.bottom + offset,
        )
    }

    /// Negative for inverted rects.
    pub fn area(&self) -> i32 {
        self.width() * self.height()
    }

    /// Bounds of a point cloud, with the minimum point as the top left corner
    /// and the maximum point as the bottom right corner.
    ///
    /// Panics if `points` is empty.
    pub fn bounding(points: &[Point]) -> Rect {
        assert!(
            !points.is_empty(),
            "bounding rect requires at least one point"
        );

        let (top_left, bot_right) = points[1..].iter().fold(
            (points[0], points[0]),
            |(top_left, bot_right), point| (top_left.min(*point), bot_right.max(*point)),
        );
        Rect::from_corners(top_left, bot_right)
    }
}
