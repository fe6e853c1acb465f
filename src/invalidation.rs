use raster::{split_rect, Dimension, Point, Rect, ScratchAllocator, SplitError};

/// Screen area touched since the last render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    bounds: Option<Rect>,
}

impl DirtyRegion {
    pub fn new() -> Self {
        DirtyRegion { bounds: None }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn clear(&mut self) {
        self.bounds = None;
    }

    pub fn add_rect(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union(&rect),
            None => rect,
        });
    }

    /// Marks the area painted by a brush of `brush_radius` moving from `a` to `b`.
    pub fn add_segment(&mut self, a: Point, b: Point, brush_radius: i32) {
        self.add_rect(Rect::bounding(&[a, b]).enlarge(brush_radius));
    }

    /// Blocks of at most `block_size` x `block_size` pixels to re-raster, in
    /// row-major order.
    ///
    /// A region thinner than a block after clipping is returned as a single
    /// tile.
    pub fn plan<'a, A: ScratchAllocator + ?Sized>(
        &self,
        scratch: &'a mut A,
        screen: Dimension,
        block_size: i32,
    ) -> Result<&'a [Rect], SplitError> {
        let Some(bounds) = self.bounds else {
            return Ok(&[]);
        };

        let limits = bounds.stretch(block_size).clip_to_screen(screen);
        if limits.width() <= 0 || limits.height() <= 0 {
            return Ok(&[]);
        }
        if limits.width() < block_size || limits.height() < block_size {
            let tile = scratch
                .alloc_rects(1)
                .ok_or(SplitError::ScratchExhausted { requested: 1 })?;
            tile[0] = limits;
            return Ok(tile);
        }

        split_rect(scratch, limits, block_size, block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster::{dimension, point, rect, Arena};

    const SCREEN: Dimension = dimension(800, 600);

    #[test]
    fn initially_empty() {
        let region = DirtyRegion::new();
        assert!(region.is_empty());
        assert_eq!(region.bounds(), None);
    }

    #[test]
    fn segments_accumulate_into_one_bounding_rect() {
        let mut region = DirtyRegion::new();

        region.add_segment(point(10, 10), point(20, 15), 2);
        region.add_segment(point(20, 15), point(5, 40), 2);

        assert_eq!(region.bounds(), Some(rect(3, 8, 22, 42)));
    }

    #[test]
    fn clear_forgets_bounds() {
        let mut region = DirtyRegion::new();
        region.add_rect(rect(0, 0, 5, 5));

        region.clear();

        assert!(region.is_empty());
    }

    #[test]
    fn empty_region_plans_nothing() {
        let mut arena = Arena::with_capacity(16);

        let tiles = DirtyRegion::new().plan(&mut arena, SCREEN, 32).unwrap();

        assert!(tiles.is_empty());
    }

    #[test]
    fn small_stroke_is_stretched_to_a_block() {
        let mut arena = Arena::with_capacity(16);
        let mut region = DirtyRegion::new();
        region.add_segment(point(100, 100), point(102, 101), 1);

        let tiles = region.plan(&mut arena, SCREEN, 32).unwrap();

        let covered = tiles[1..].iter().fold(tiles[0], |acc, tile| acc.union(tile));
        assert_eq!(covered, rect(83, 83, 119, 118));
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn region_thinner_than_a_block_is_a_single_tile() {
        let mut arena = Arena::with_capacity(16);
        let mut region = DirtyRegion::new();
        region.add_rect(rect(790, 10, 795, 100));

        let tiles = region.plan(&mut arena, SCREEN, 32).unwrap();

        assert_eq!(tiles, &[rect(774, 10, 800, 100)]);
    }

    #[test]
    fn large_region_is_split_into_blocks() {
        let mut arena = Arena::with_capacity(64);
        let mut region = DirtyRegion::new();
        region.add_rect(rect(0, 0, 100, 100));

        let tiles = region.plan(&mut arena, SCREEN, 40).unwrap();

        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles[0], rect(0, 0, 40, 40));
        assert_eq!(tiles[8], rect(80, 80, 100, 100));
    }

    #[test]
    fn region_is_clipped_to_screen() {
        let mut arena = Arena::with_capacity(64);
        let mut region = DirtyRegion::new();
        region.add_rect(rect(-50, 550, 100, 700));

        let tiles = region.plan(&mut arena, SCREEN, 50).unwrap();

        assert_eq!(tiles, &[rect(0, 550, 50, 600), rect(50, 550, 100, 600)]);
    }

    #[test]
    fn offscreen_region_plans_nothing() {
        let mut arena = Arena::with_capacity(16);
        let mut region = DirtyRegion::new();
        region.add_rect(rect(900, 10, 1000, 100));

        let tiles = region.plan(&mut arena, SCREEN, 32).unwrap();

        assert!(tiles.is_empty());
    }

    #[test]
    fn huge_canvas_region_is_split_into_blocks() {
        let mut arena = Arena::with_capacity(64);
        let mut region = DirtyRegion::new();
        region.add_rect(rect(0, 0, 50_000, 50_000));

        let tiles = region
            .plan(&mut arena, dimension(60_000, 60_000), 10_000)
            .unwrap();

        assert_eq!(tiles.len(), 25);
        assert_eq!(tiles[24], rect(40_000, 40_000, 50_000, 50_000));
    }
}
