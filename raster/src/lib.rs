//! Geometry primitives shared by the rasterizer, the renderer and the
//! invalidation logic: vector math, orientation based predicates, rect
//! algebra and tile splitting.

#[cfg(test)]
#[macro_use]
extern crate parameterized;

pub mod arena;
pub mod predicates;
pub mod rect;
pub mod tiles;
pub mod vector;

pub use arena::{Arena, ArenaScope, ScratchAllocator};
pub use predicates::{
    closest_point_in_segment, intersect_line_segments, is_inside_triangle, orientation,
    project_onto_segment, SegmentProjection,
};
pub use rect::{
    containment::{is_inside_rect, is_rect_within_rect},
    dimension, rect, Dimension, Rect,
};
pub use tiles::{split_rect, tiles, SplitError};
pub use vector::{point, pointf, Point, PointF};
