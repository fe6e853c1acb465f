//! Decomposition of a region into fixed size tiles that bound raster work.

use std::fmt;

use itertools::iproduct;

use crate::{
    arena::ScratchAllocator,
    rect::{rect, Rect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The allocator could not hand out room for the worst case tile count.
    ScratchExhausted { requested: usize },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::ScratchExhausted { requested } => {
                write!(f, "scratch memory exhausted, {} rects requested", requested)
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Tiles covering `src_rect`, top to bottom and left to right.
///
/// The last tile of each row and column is cut at the edge of `src_rect`.
pub fn tiles(src_rect: Rect, tile_width: i32, tile_height: i32) -> impl Iterator<Item = Rect> {
    assert!(
        tile_width > 0 && tile_height > 0,
        "tile size must be positive, got {}x{}",
        tile_width,
        tile_height
    );

    let rows = (src_rect.top..src_rect.bottom).step_by(tile_height as usize);
    let columns = (src_rect.left..src_rect.right).step_by(tile_width as usize);

    iproduct!(rows, columns).map(move |(top, left)| {
        rect(
            left,
            top,
            src_rect.right.min(left.saturating_add(tile_width)),
            src_rect.bottom.min(top.saturating_add(tile_height)),
        )
    })
}

/// Splits `src_rect` into `tile_width` x `tile_height` tiles stored in memory
/// taken from `scratch`.
///
/// When the tile does not fit at least once along both axes no split is
/// possible and the result is empty.
pub fn split_rect<'a, A: ScratchAllocator + ?Sized>(
    scratch: &'a mut A,
    src_rect: Rect,
    tile_width: i32,
    tile_height: i32,
) -> Result<&'a [Rect], SplitError> {
    assert!(
        tile_width > 0 && tile_height > 0,
        "tile size must be positive, got {}x{}",
        tile_width,
        tile_height
    );
    src_rect.validate();

    let n_width = src_rect.width() / tile_width;
    let n_height = src_rect.height() / tile_height;
    if n_width <= 0 || n_height <= 0 {
        return Ok(&[]);
    }

    let max_num_rects = (n_width as usize + 1) * (n_height as usize + 1);
    let dest_rects = scratch
        .alloc_rects(max_num_rects)
        .ok_or(SplitError::ScratchExhausted {
            requested: max_num_rects,
        })?;

    let mut count = 0;
    for (dest, tile) in dest_rects
        .iter_mut()
        .zip(tiles(src_rect, tile_width, tile_height))
    {
        *dest = tile;
        count += 1;
    }
    log::trace!(
        "Split {:?} into {} tiles of {}x{}",
        src_rect,
        count,
        tile_width,
        tile_height
    );

    Ok(&dest_rects[..count])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    fn union_of(tiles: &[Rect]) -> Rect {
        tiles[1..].iter().fold(tiles[0], |acc, tile| acc.union(tile))
    }

    #[test]
    fn split_with_remainder_cuts_last_row_and_column() {
        let mut arena = Arena::with_capacity(64);
        let src = rect(0, 0, 100, 100);

        let tiles = split_rect(&mut arena, src, 40, 40).unwrap();

        assert_eq!(tiles.len(), 9);
        for row in tiles.chunks(3) {
            assert_eq!(row[2].width(), 20);
        }
        for tile in &tiles[6..] {
            assert_eq!(tile.height(), 20);
        }
        assert_eq!(union_of(tiles), src);
    }

    #[test]
    fn tiles_come_in_row_major_order() {
        let mut arena = Arena::with_capacity(64);

        let tiles = split_rect(&mut arena, rect(10, 20, 30, 40), 10, 10).unwrap();

        assert_eq!(
            tiles,
            &[
                rect(10, 20, 20, 30),
                rect(20, 20, 30, 30),
                rect(10, 30, 20, 40),
                rect(20, 30, 30, 40),
            ]
        );
    }

    #[test]
    fn tiles_never_overlap_or_leave_source() {
        let mut arena = Arena::with_capacity(256);
        let src = rect(-13, 7, 91, 60);

        let tiles = split_rect(&mut arena, src, 16, 9).unwrap();

        let covered: i32 = tiles.iter().map(Rect::area).sum();
        assert_eq!(covered, src.area());
        assert!(tiles
            .iter()
            .all(|tile| tile.is_valid() && tile.intersect(&src) == *tile));
        assert_eq!(union_of(tiles), src);
    }

    #[parameterized(
        src = { rect(0, 0, 30, 30), rect(0, 0, 100, 30), rect(0, 0, 30, 100), rect(5, 5, 5, 5) },
        tile_width = { 40, 40, 40, 1 },
        tile_height = { 40, 40, 40, 1 }
    )]
    fn tile_larger_than_source_gives_no_tiles(src: Rect, tile_width: i32, tile_height: i32) {
        let mut arena = Arena::with_capacity(64);

        let tiles = split_rect(&mut arena, src, tile_width, tile_height).unwrap();

        assert!(tiles.is_empty());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn exhausted_scratch_memory_is_reported() {
        let mut arena = Arena::with_capacity(8);

        let result = split_rect(&mut arena, rect(0, 0, 100, 100), 40, 40);

        assert_eq!(result, Err(SplitError::ScratchExhausted { requested: 9 }));
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn allocation_is_sized_for_worst_case() {
        let mut arena = Arena::with_capacity(64);

        let count = split_rect(&mut arena, rect(0, 0, 80, 80), 40, 40)
            .unwrap()
            .len();

        assert_eq!(count, 4);
        assert_eq!(arena.used(), 9);
    }

    #[test]
    fn split_inside_scope_is_released() {
        let mut arena = Arena::with_capacity(64);

        {
            let mut scope = arena.scope();
            let tiles = split_rect(&mut *scope, rect(0, 0, 64, 64), 32, 32).unwrap();
            assert_eq!(tiles.len(), 4);
        }

        assert_eq!(arena.used(), 0);
    }

    #[test]
    #[should_panic(expected = "tile size must be positive")]
    fn zero_tile_size_panics() {
        let mut arena = Arena::with_capacity(64);
        let _ = split_rect(&mut arena, rect(0, 0, 10, 10), 0, 10);
    }
}
