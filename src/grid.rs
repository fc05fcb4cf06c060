//! Dense row-major storage addressed by [`Coord`].
//!
//! [`Grid`] owns a heap buffer sized at runtime; [`FixedGrid`] keeps its
//! cells inline with the extent fixed at compile time. Both implement
//! [`GridLike`], which supplies bounds-checked access over a flat slice.

use std::ops::{Index, IndexMut};

use crate::errors::{GridError, GridResult};
use crate::geometry::{area, in_bounds};
use crate::log::{debug, trace};
use crate::ranges::{RectCells, dimen_cells};
use crate::types::{Coord, Dimen, Int, Rect};

/// Row-major index of `c` in a grid of extent `d`.
pub fn grid_index(d: Dimen, c: Coord) -> usize {
    (c.y * d.w + c.x) as usize
}

/// Inverse of [`grid_index`].
pub fn from_grid_index(d: Dimen, i: usize) -> Coord {
    debug_assert!(d.w > 0, "no coordinate maps to index {i} in zero-width grid of {d}");
    let i = i as Int;
    Coord::new(i % d.w, i / d.w)
}

/// Anything that stores one value per cell of `[0, w) x [0, h)` in a flat
/// row-major slice.
pub trait GridLike {
    type Item;

    fn dimen(&self) -> Dimen;
    fn as_slice(&self) -> &[Self::Item];
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    fn rect(&self) -> Rect {
        Rect::from(self.dimen())
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn index_of(&self, c: Coord) -> usize {
        grid_index(self.dimen(), c)
    }

    fn coord_of(&self, i: usize) -> Coord {
        from_grid_index(self.dimen(), i)
    }

    fn at(&self, c: Coord) -> GridResult<&Self::Item> {
        let dimen = self.dimen();
        if !in_bounds(c, dimen) {
            return Err(GridError::OutOfBounds { coord: c, dimen });
        }
        Ok(&self.as_slice()[grid_index(dimen, c)])
    }

    fn at_mut(&mut self, c: Coord) -> GridResult<&mut Self::Item> {
        let dimen = self.dimen();
        if !in_bounds(c, dimen) {
            return Err(GridError::OutOfBounds { coord: c, dimen });
        }
        Ok(&mut self.as_mut_slice()[grid_index(dimen, c)])
    }

    fn at_index(&self, index: usize) -> GridResult<&Self::Item> {
        let cells = self.as_slice();
        cells
            .get(index)
            .ok_or(GridError::IndexOutOfRange { index, len: cells.len() })
    }

    /// The value at `c`, or `default` outside the grid.
    fn get_or(&self, c: Coord, default: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.at(c).map_or(default, Clone::clone)
    }

    fn fill(&mut self, value: Self::Item)
    where
        Self::Item: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    /// Every coordinate of the grid, in storage order.
    fn cells(&self) -> RectCells {
        dimen_cells(self.dimen())
    }
}

// ============================================================================
// Grid
// ============================================================================

/// A heap-allocated grid whose extent can change at runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    dimen: Dimen,
}

impl<T: Default> Grid<T> {
    /// A grid of `dimen` filled with `T::default()`.
    pub fn new(dimen: Dimen) -> Self {
        let mut cells = Vec::new();
        cells.resize_with(area(dimen) as usize, T::default);
        Grid { cells, dimen }
    }

    /// Change the extent, keeping the values in the overlap of the old and
    /// new extents. Cells outside the overlap are reset to the default.
    pub fn resize(&mut self, dimen: Dimen) {
        debug!(old = %self.dimen, new = %dimen, "resizing grid");
        let mut resized = Grid::new(dimen);
        for c in dimen_cells(self.dimen.crop(dimen)) {
            resized[c] = std::mem::take(&mut self[c]);
        }
        self.swap(&mut resized);
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(dimen: Dimen, value: T) -> Self {
        Grid { cells: vec![value; area(dimen) as usize], dimen }
    }
}

impl<T> Grid<T> {
    /// Drop every cell, leaving a `0 x 0` grid.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.dimen = Dimen::ZERO;
    }

    pub fn swap(&mut self, other: &mut Grid<T>) {
        std::mem::swap(self, other);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }
}

impl Grid<char> {
    /// One row per line of `text`, padded with `'\0'` to the longest line.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<Vec<char>> = text.split('\n').map(|l| l.chars().collect()).collect();
        let w = lines.iter().map(Vec::len).max().unwrap_or(0);
        let dimen = Dimen::new(w as Int, lines.len() as Int);
        trace!(%dimen, "loading grid from text");
        let mut grid = Grid::filled(dimen, '\0');
        for (y, line) in lines.iter().enumerate() {
            for (x, &ch) in line.iter().enumerate() {
                grid[Coord::new(x as Int, y as Int)] = ch;
            }
        }
        grid
    }
}

impl<T> GridLike for Grid<T> {
    type Item = T;

    fn dimen(&self) -> Dimen {
        self.dimen
    }

    fn as_slice(&self) -> &[T] {
        &self.cells
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

/// Unchecked lookup. Panics when `c` lies outside the grid; use
/// [`GridLike::at`] for a checked one.
impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, c: Coord) -> &T {
        debug_assert!(in_bounds(c, self.dimen), "{c} outside grid of {}", self.dimen);
        &self.cells[grid_index(self.dimen, c)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, c: Coord) -> &mut T {
        debug_assert!(in_bounds(c, self.dimen), "{c} outside grid of {}", self.dimen);
        &mut self.cells[grid_index(self.dimen, c)]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// FixedGrid
// ============================================================================

/// A `W x H` grid stored inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedGrid<T, const W: usize, const H: usize> {
    rows: [[T; W]; H],
}

impl<T: Clone, const W: usize, const H: usize> FixedGrid<T, W, H> {
    pub fn filled(value: T) -> Self {
        FixedGrid { rows: std::array::from_fn(|_| std::array::from_fn(|_| value.clone())) }
    }
}

impl<T: Default, const W: usize, const H: usize> Default for FixedGrid<T, W, H> {
    fn default() -> Self {
        FixedGrid { rows: std::array::from_fn(|_| std::array::from_fn(|_| T::default())) }
    }
}

impl<T, const W: usize, const H: usize> FixedGrid<T, W, H> {
    pub const DIMEN: Dimen = Dimen::new(W as Int, H as Int);

    pub fn rows(&self) -> &[[T; W]; H] {
        &self.rows
    }
}

impl<T, const W: usize, const H: usize> GridLike for FixedGrid<T, W, H> {
    type Item = T;

    fn dimen(&self) -> Dimen {
        Self::DIMEN
    }

    fn as_slice(&self) -> &[T] {
        self.rows.as_flattened()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.rows.as_flattened_mut()
    }
}

impl<T, const W: usize, const H: usize> Index<Coord> for FixedGrid<T, W, H> {
    type Output = T;

    fn index(&self, c: Coord) -> &T {
        &self.rows[c.y as usize][c.x as usize]
    }
}

impl<T, const W: usize, const H: usize> IndexMut<Coord> for FixedGrid<T, W, H> {
    fn index_mut(&mut self, c: Coord) -> &mut T {
        &mut self.rows[c.y as usize][c.x as usize]
    }
}

// ============================================================================
// Blitting
// ============================================================================

fn check_fits(rect: Rect, dimen: Dimen) -> GridResult<()> {
    if in_bounds(rect, dimen) {
        Ok(())
    } else {
        Err(GridError::RectOutOfBounds { rect, dimen })
    }
}

/// Combine `src_rect` of `src` into `dest` with its top-left corner at
/// `dest_at`, storing `merge(dest_value, src_value)` in each cell.
///
/// Nothing is written unless both rectangles fit their grids.
pub fn fblit<D, S>(
    dest: &mut D,
    dest_at: Coord,
    src: &S,
    src_rect: Rect,
    mut merge: impl FnMut(&D::Item, &S::Item) -> D::Item,
) -> GridResult<()>
where
    D: GridLike,
    S: GridLike,
{
    check_fits(src_rect, src.dimen())?;
    check_fits(Rect::new(dest_at, src_rect.extent), dest.dimen())?;
    debug!(%src_rect, %dest_at, "blitting");

    let (src_dimen, dest_dimen) = (src.dimen(), dest.dimen());
    let (from, to) = (src.as_slice(), dest.as_mut_slice());
    for offset in dimen_cells(src_rect.extent) {
        let si = grid_index(src_dimen, src_rect.origin + offset);
        let di = grid_index(dest_dimen, dest_at + offset);
        let merged = merge(&to[di], &from[si]);
        to[di] = merged;
    }
    Ok(())
}

/// Copy `src_rect` of `src` into `dest` at `dest_at`.
pub fn blit<D, S>(dest: &mut D, dest_at: Coord, src: &S, src_rect: Rect) -> GridResult<()>
where
    D: GridLike,
    S: GridLike<Item = D::Item>,
    D::Item: Clone,
{
    fblit(dest, dest_at, src, src_rect, |_, v| v.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: Int, y: Int) -> Coord {
        Coord::new(x, y)
    }

    fn counting(d: Dimen) -> Grid<i32> {
        let mut g = Grid::new(d);
        for (i, v) in g.iter_mut().enumerate() {
            *v = i as i32;
        }
        g
    }

    #[test]
    fn index_mapping_is_row_major() {
        let d = Dimen::new(4, 3);
        assert_eq!(grid_index(d, c(1, 2)), 9);
        assert_eq!(from_grid_index(d, 9), c(1, 2));
        for i in 0..12 {
            assert_eq!(grid_index(d, from_grid_index(d, i)), i);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero-width grid")]
    fn coord_of_rejects_zero_width_grid() {
        let g: Grid<u8> = Grid::new(Dimen::new(0, 3));
        g.coord_of(0);
    }

    #[test]
    fn checked_access_reports_out_of_bounds() {
        let mut g = counting(Dimen::new(3, 2));
        assert_eq!(g.at(c(2, 1)), Ok(&5));
        assert_eq!(
            g.at(c(3, 0)),
            Err(GridError::OutOfBounds { coord: c(3, 0), dimen: Dimen::new(3, 2) })
        );
        assert!(g.at(c(-1, 0)).is_err());
        *g.at_mut(c(0, 1)).unwrap() = 40;
        assert_eq!(g[c(0, 1)], 40);
        assert!(g.at_mut(c(0, 2)).is_err());
    }

    #[test]
    fn flat_index_access() {
        let g = counting(Dimen::new(2, 2));
        assert_eq!(g.at_index(3), Ok(&3));
        assert_eq!(g.at_index(4), Err(GridError::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(g.index_of(c(1, 1)), 3);
        assert_eq!(g.coord_of(2), c(0, 1));
    }

    #[test]
    fn get_or_falls_back_outside() {
        let g = Grid::filled(Dimen::new(2, 2), 'a');
        assert_eq!(g.get_or(c(1, 1), '#'), 'a');
        assert_eq!(g.get_or(c(2, 1), '#'), '#');
    }

    #[test]
    fn resize_keeps_overlap() {
        let mut g = counting(Dimen::new(3, 3));
        g.resize(Dimen::new(2, 4));
        assert_eq!(g.dimen(), Dimen::new(2, 4));
        assert_eq!(g.len(), 8);
        assert_eq!(g[c(1, 0)], 1);
        assert_eq!(g[c(1, 2)], 7);
        assert_eq!(g[c(0, 3)], 0);
        assert_eq!(g[c(1, 3)], 0);
    }

    #[test]
    fn clear_and_swap() {
        let mut a = counting(Dimen::new(2, 1));
        let mut b = Grid::filled(Dimen::new(1, 1), 9);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.dimen(), Dimen::new(2, 1));
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.dimen(), Dimen::ZERO);
    }

    #[test]
    fn fill_and_cells() {
        let mut g: Grid<u8> = Grid::new(Dimen::new(3, 2));
        g.fill(7);
        assert!(g.iter().all(|&v| v == 7));
        let coords: Vec<_> = g.cells().collect();
        assert_eq!(coords.len(), 6);
        assert_eq!(coords[4], c(1, 1));
    }

    #[test]
    fn text_grid_pads_short_lines() {
        let g = Grid::from_text("ab\nc\n");
        assert_eq!(g.dimen(), Dimen::new(2, 3));
        assert_eq!(g[c(1, 0)], 'b');
        assert_eq!(g[c(0, 1)], 'c');
        assert_eq!(g[c(1, 1)], '\0');
        assert_eq!(g[c(0, 2)], '\0');
    }

    #[test]
    fn fixed_grid_is_row_major() {
        let mut g: FixedGrid<i32, 3, 2> = FixedGrid::default();
        assert_eq!(g.dimen(), Dimen::new(3, 2));
        g[c(2, 1)] = 5;
        assert_eq!(g.as_slice()[5], 5);
        assert_eq!(g.rows()[1][2], 5);
        assert_eq!(g.at(c(2, 1)), Ok(&5));
        assert!(g.at(c(3, 1)).is_err());
        let ones: FixedGrid<i32, 2, 2> = FixedGrid::filled(1);
        assert_eq!(ones.as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn blit_copies_sub_rectangle() {
        let src = counting(Dimen::new(3, 3));
        let mut dest = Grid::filled(Dimen::new(4, 4), -1);
        blit(&mut dest, c(2, 1), &src, Rect::xywh(1, 1, 2, 2)).unwrap();
        assert_eq!(dest[c(2, 1)], 4);
        assert_eq!(dest[c(3, 1)], 5);
        assert_eq!(dest[c(2, 2)], 7);
        assert_eq!(dest[c(3, 2)], 8);
        assert_eq!(dest.iter().filter(|&&v| v == -1).count(), 12);
    }

    #[test]
    fn fblit_merges_values() {
        let src = Grid::filled(Dimen::new(2, 2), 10);
        let mut dest = counting(Dimen::new(2, 2));
        fblit(&mut dest, c(0, 0), &src, src.rect(), |d, s| d + s).unwrap();
        assert_eq!(dest.as_slice(), &[10, 11, 12, 13]);
    }

    #[test]
    fn blit_between_grid_kinds() {
        let src: FixedGrid<char, 2, 1> = FixedGrid::filled('x');
        let mut dest = Grid::from_text("....\n....");
        blit(&mut dest, c(1, 1), &src, src.rect()).unwrap();
        assert_eq!(dest.iter().collect::<String>(), ".....xx.");
    }

    #[test]
    fn blit_rejects_rects_that_do_not_fit() {
        let src = counting(Dimen::new(2, 2));
        let mut dest = Grid::filled(Dimen::new(3, 3), 0);
        assert_eq!(
            blit(&mut dest, c(0, 0), &src, Rect::xywh(1, 1, 2, 2)),
            Err(GridError::RectOutOfBounds {
                rect: Rect::xywh(1, 1, 2, 2),
                dimen: Dimen::new(2, 2)
            })
        );
        assert_eq!(
            blit(&mut dest, c(2, 2), &src, src.rect()),
            Err(GridError::RectOutOfBounds {
                rect: Rect::xywh(2, 2, 2, 2),
                dimen: Dimen::new(3, 3)
            })
        );
        assert!(dest.iter().all(|&v| v == 0));
    }
}
