//! Scratch memory for per-frame rect arrays.

use std::ops::{Deref, DerefMut};

use crate::rect::Rect;

/// Source of short lived rect arrays.
pub trait ScratchAllocator {
    /// Hands out `count` rects, or `None` when the allocator is exhausted.
    fn alloc_rects(&mut self, count: usize) -> Option<&mut [Rect]>;
}

/// Fixed capacity bump allocator.
///
/// Allocations are released in bulk, either all at once with [`Arena::reset`]
/// or everything allocated since a [`Arena::scope`] was opened when that scope
/// is dropped.
#[derive(Debug)]
pub struct Arena {
    rects: Vec<Rect>,
    used: usize,
}

impl Arena {
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            rects: vec![Rect::default(); capacity],
            used: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.rects.len()
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Opens a region whose allocations are freed when the guard drops.
    pub fn scope(&mut self) -> ArenaScope<'_> {
        let mark = self.used;
        ArenaScope { arena: self, mark }
    }
}

impl ScratchAllocator for Arena {
    fn alloc_rects(&mut self, count: usize) -> Option<&mut [Rect]> {
        if count > self.remaining() {
            log::debug!(
                "Scratch arena exhausted: requested {} rects, {} of {} left",
                count,
                self.remaining(),
                self.capacity()
            );
            return None;
        }
        let start = self.used;
        self.used += count;
        Some(&mut self.rects[start..self.used])
    }
}

#[derive(Debug)]
pub struct ArenaScope<'a> {
    arena: &'a mut Arena,
    mark: usize,
}

impl Deref for ArenaScope<'_> {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        self.arena
    }
}

impl DerefMut for ArenaScope<'_> {
    fn deref_mut(&mut self) -> &mut Arena {
        self.arena
    }
}

impl ScratchAllocator for ArenaScope<'_> {
    fn alloc_rects(&mut self, count: usize) -> Option<&mut [Rect]> {
        self.arena.alloc_rects(count)
    }
}

impl Drop for ArenaScope<'_> {
    fn drop(&mut self) {
        self.arena.used = self.mark;
    }
}
