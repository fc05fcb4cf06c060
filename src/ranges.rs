//! Cell enumeration: every cell of a rectangle, its edge, or a neighbourhood.
//!
//! All iterators here are finite, `Clone`, and know their exact length, so
//! a range can be restarted by cloning it before iterating.

use std::iter::FusedIterator;

use crate::geometry::rect_from_radius;
use crate::types::{Coord, Dimen, Dir, Int, Rect};

// ============================================================================
// Full rectangles
// ============================================================================

/// Every cell of a rectangle in row-major order.
#[derive(Clone, Debug)]
pub struct RectCells {
    rect: Rect,
    front: Int,
    back: Int,
}

impl RectCells {
    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn cell(&self, i: Int) -> Coord {
        let w = self.rect.extent.w;
        self.rect.origin + Coord::new(i % w, i / w)
    }
}

pub fn rect_cells(rect: Rect) -> RectCells {
    let len = if rect.is_empty() { 0 } else { rect.extent.w * rect.extent.h };
    RectCells { rect, front: 0, back: len }
}

/// The cells of `[0, w) x [0, h)`.
pub fn dimen_cells(d: Dimen) -> RectCells {
    rect_cells(Rect::from(d))
}

/// The `(2r+1)`-square of cells centred on `center`.
pub fn circular_cells(center: Coord, radius: Int) -> RectCells {
    rect_cells(rect_from_radius(center, radius))
}

impl Iterator for RectCells {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.front >= self.back {
            return None;
        }
        let c = self.cell(self.front);
        self.front += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back - self.front).max(0) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for RectCells {
    fn next_back(&mut self) -> Option<Coord> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.cell(self.back))
    }
}

impl ExactSizeIterator for RectCells {}
impl FusedIterator for RectCells {}

// ============================================================================
// Rectangle edges
// ============================================================================

/// The perimeter cells of a rectangle, clockwise from the top-left corner.
///
/// Each cell is produced once: a single row or column is walked straight
/// through, and an empty rectangle has no edge.
#[derive(Clone, Debug)]
pub struct RectEdge {
    rect: Rect,
    front: Int,
    back: Int,
}

impl RectEdge {
    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn cell(&self, i: Int) -> Coord {
        let r = self.rect;
        let (w, h) = (r.extent.w, r.extent.h);
        if w == 1 || h == 1 {
            return r.origin + Coord::new(i % w, i / w);
        }
        let top = w - 1;
        let right = top + h - 1;
        let bottom = right + w - 1;
        if i < top {
            Coord::new(r.origin.x + i, r.origin.y)
        } else if i < right {
            Coord::new(r.rx(), r.origin.y + (i - top))
        } else if i < bottom {
            Coord::new(r.rx() - (i - right), r.ry())
        } else {
            Coord::new(r.origin.x, r.ry() - (i - bottom))
        }
    }
}

pub fn rect_edge(rect: Rect) -> RectEdge {
    let (w, h) = (rect.extent.w, rect.extent.h);
    let len = if rect.is_empty() {
        0
    } else if w == 1 || h == 1 {
        w * h
    } else {
        2 * (w - 1) + 2 * (h - 1)
    };
    RectEdge { rect, front: 0, back: len }
}

/// The ring of cells at Chebyshev distance `radius` from `center`.
pub fn radius_edge(center: Coord, radius: Int) -> RectEdge {
    rect_edge(rect_from_radius(center, radius))
}

impl Iterator for RectEdge {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.front >= self.back {
            return None;
        }
        let c = self.cell(self.front);
        self.front += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back - self.front).max(0) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for RectEdge {
    fn next_back(&mut self) -> Option<Coord> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.cell(self.back))
    }
}

impl ExactSizeIterator for RectEdge {}
impl FusedIterator for RectEdge {}

// ============================================================================
// Neighbourhoods
// ============================================================================

/// The cells around `center` in the given directions. The center itself is never produced.
#[derive(Clone, Debug)]
pub struct Neighbors<const N: usize> {
    center: Coord,
    dirs: std::array::IntoIter<Dir, N>,
}

impl<const N: usize> Neighbors<N> {
    pub fn center(&self) -> Coord {
        self.center
    }
}

/// The 8 neighbours of `center`, clockwise starting east.
pub fn adjacent(center: Coord) -> Neighbors<8> {
    Neighbors { center, dirs: Dir::ALL.into_iter() }
}

/// The 4 orthogonal neighbours of `center`: east, south, west, north.
pub fn adjacent4(center: Coord) -> Neighbors<4> {
    Neighbors { center, dirs: Dir::CARDINAL.into_iter() }
}

impl<const N: usize> Iterator for Neighbors<N> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        self.dirs.next().map(|d| self.center + d.offset())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dirs.size_hint()
    }
}

impl<const N: usize> ExactSizeIterator for Neighbors<N> {}
impl<const N: usize> FusedIterator for Neighbors<N> {}
