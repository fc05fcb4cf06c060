//! Views: local coordinate systems layered over a parent space.
//!
//! A finite view turns a rectangle of its parent into a zero-based region
//! `[0, w) x [0, h)`. Rotating or mirroring the view reorients that region
//! and renormalizes it, so inner coordinates always start at `(0, 0)`.
//!
//! REMEMBER: x=right, y=down. This affects rotations!

use std::fmt;

use crate::geometry::in_bounds;
use crate::log::{debug, trace};
use crate::matrix::{AffineMatrix, Transform};
use crate::types::{Coord, Dimen, Int, Rect};

/// An inner coordinate system positioned inside a parent one.
///
/// `to_parent` and `from_parent` are exact inverses. An extent of
/// `(0, 0)` marks an unbounded coordinate system rather than a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct View {
    matrix: AffineMatrix,
    inverse: AffineMatrix,
    extent: Dimen,
}

impl Default for View {
    fn default() -> Self {
        View::new(Coord::ZERO)
    }
}

impl View {
    /// An unbounded coordinate system whose `(0, 0)` sits at `origin`.
    pub fn new(origin: Coord) -> Self {
        View {
            matrix: AffineMatrix::translate(origin),
            inverse: AffineMatrix::translate(-origin),
            extent: Dimen::ZERO,
        }
    }

    /// A finite region covering `rect` of the parent.
    pub fn from_rect(rect: Rect) -> Self {
        View {
            matrix: AffineMatrix::translate(rect.origin),
            inverse: AffineMatrix::translate(-rect.origin),
            extent: rect.extent,
        }
    }

    /// An unbounded child whose `(0, 0)` sits at `origin` in this view.
    pub fn nested_at(&self, origin: Coord) -> Self {
        trace!(?origin, "nesting unbounded view");
        View {
            matrix: AffineMatrix::translate(origin) * self.matrix,
            inverse: self.inverse * AffineMatrix::translate(-origin),
            extent: Dimen::ZERO,
        }
    }

    /// A finite child covering `sub` of this view's region.
    ///
    /// # Panics
    ///
    /// When this view is unbounded or `sub` does not fit inside its extent.
    pub fn nested(&self, sub: Rect) -> Self {
        assert!(self.is_finite(), "cannot nest a region inside an unbounded view");
        assert!(in_bounds(sub, self.extent), "{sub} does not fit inside view extent {}", self.extent);
        trace!(%sub, "nesting finite view");
        View {
            matrix: AffineMatrix::translate(sub.origin) * self.matrix,
            inverse: self.inverse * AffineMatrix::translate(-sub.origin),
            extent: sub.extent,
        }
    }

    /// The inner extent; `(0, 0)` for unbounded views.
    pub fn extent(&self) -> Dimen {
        self.extent
    }

    /// True when the view stands for a non-empty region.
    pub fn is_finite(&self) -> bool {
        !Rect::from(self.extent).is_empty()
    }

    /// The region in inner coordinates, `[0, w) x [0, h)`.
    pub fn rect(&self) -> Rect {
        Rect::from(self.extent)
    }

    pub fn matrix(&self) -> AffineMatrix {
        self.matrix
    }

    pub fn inverse_matrix(&self) -> AffineMatrix {
        self.inverse
    }

    /// Convert from this view's coordinates into its parent's.
    pub fn to_parent<T: Transform>(&self, t: T) -> T {
        t.transformed(&self.matrix)
    }

    /// Inverse of [`View::to_parent`].
    pub fn from_parent<T: Transform>(&self, t: T) -> T {
        t.transformed(&self.inverse)
    }

    /// Rotate the view's content clockwise by `quarter_turns`.
    pub fn rotate_cw(&mut self, quarter_turns: Int) {
        self.apply(AffineMatrix::rotate_cw(quarter_turns), AffineMatrix::rotate_cw(-quarter_turns));
    }

    pub fn rotate_ccw(&mut self, quarter_turns: Int) {
        self.rotate_cw(-quarter_turns);
    }

    /// Flip the content left to right.
    pub fn hmirror(&mut self) {
        self.apply(AffineMatrix::hmirror(), AffineMatrix::hmirror());
    }

    /// Flip the content top to bottom.
    pub fn vmirror(&mut self) {
        self.apply(AffineMatrix::vmirror(), AffineMatrix::vmirror());
    }

    /// Reorient by `content`, which maps old inner coordinates to new ones.
    ///
    /// Finite views fold in the translation that moves the reoriented
    /// region back to `(0, 0)`; unbounded views compose `content` alone.
    fn apply(&mut self, content: AffineMatrix, content_inv: AffineMatrix) {
        if self.is_finite() {
            let bounds = content.transform_rect(self.rect());
            let to_new = content * AffineMatrix::translate(-bounds.origin);
            let from_new = AffineMatrix::translate(bounds.origin) * content_inv;
            self.matrix = from_new * self.matrix;
            self.inverse *= to_new;
            debug!(
                old = %self.extent,
                new = %bounds.extent,
                shift = %bounds.origin,
                "renormalized view"
            );
            self.extent = bounds.extent;
        } else {
            self.matrix = content_inv * self.matrix;
            self.inverse *= content;
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "View {{ matrix: {}, extent: {} }}", self.matrix, self.extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::rect_cells;

    fn c(x: Int, y: Int) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn rect_view_translates_by_origin() {
        let v = View::from_rect(Rect::xywh(2, 3, 4, 5));
        assert_eq!(v.to_parent(c(0, 0)), c(2, 3));
        assert_eq!(v.from_parent(c(5, 7)), c(3, 4));
        assert_eq!(v.extent(), Dimen::new(4, 5));
        assert!(v.is_finite());
    }

    #[test]
    fn unbounded_view_has_zero_extent() {
        let v = View::new(c(-1, 4));
        assert!(!v.is_finite());
        assert_eq!(v.extent(), Dimen::ZERO);
        assert_eq!(v.to_parent(c(1, 1)), c(0, 5));
        assert_eq!(View::default().to_parent(c(3, 3)), c(3, 3));
    }

    #[test]
    fn quarter_turn_swaps_extent_and_renormalizes() {
        let mut v = View::from_rect(Rect::xywh(2, 3, 4, 5));
        v.rotate_cw(1);
        assert_eq!(v.extent(), Dimen::new(5, 4));
        assert_eq!(v.rect().origin, c(0, 0));
        // The old bottom-left corner is the new top-left.
        assert_eq!(v.to_parent(c(0, 0)), c(2, 7));
        assert_eq!(v.to_parent(c(4, 0)), c(2, 3));
        assert_eq!(v.to_parent(c(4, 3)), c(5, 3));
    }

    #[test]
    fn rotated_region_maps_onto_parent_rect() {
        let parent = Rect::xywh(2, 3, 4, 5);
        let mut v = View::from_rect(parent);
        v.rotate_cw(1);
        let mut mapped: Vec<Coord> = rect_cells(v.rect()).map(|p| v.to_parent(p)).collect();
        mapped.sort();
        let mut expected: Vec<Coord> = rect_cells(parent).collect();
        expected.sort();
        assert_eq!(mapped, expected);
        assert_eq!(v.to_parent(v.rect()), parent);
    }

    #[test]
    fn mirrors_keep_extent() {
        let mut v = View::from_rect(Rect::xywh(0, 0, 3, 2));
        v.hmirror();
        assert_eq!(v.extent(), Dimen::new(3, 2));
        assert_eq!(v.to_parent(c(0, 0)), c(2, 0));
        v.vmirror();
        assert_eq!(v.to_parent(c(0, 0)), c(2, 1));
        v.rotate_cw(2);
        assert_eq!(v.to_parent(c(0, 0)), c(0, 0));
    }

    #[test]
    fn full_turn_restores_matrices() {
        let start = View::from_rect(Rect::xywh(1, 1, 3, 7));
        let mut v = start;
        for _ in 0..4 {
            v.rotate_cw(1);
        }
        assert_eq!(v, start);
        v.rotate_ccw(3);
        v.rotate_cw(3);
        assert_eq!(v, start);
    }

    #[test]
    fn unbounded_rotation_skips_renormalization() {
        let mut v = View::new(c(10, 10));
        v.rotate_cw(1);
        assert_eq!(v.extent(), Dimen::ZERO);
        assert_eq!(v.to_parent(c(0, 0)), c(10, 10));
        assert_eq!(v.to_parent(c(1, 0)), c(10, 9));
        assert_eq!(v.from_parent(v.to_parent(c(4, -2))), c(4, -2));
    }

    #[test]
    fn nesting_composes_translations() {
        let outer = View::from_rect(Rect::xywh(10, 20, 8, 8));
        let inner = outer.nested(Rect::xywh(2, 3, 4, 4));
        assert_eq!(inner.to_parent(c(0, 0)), c(12, 23));
        assert_eq!(inner.from_parent(c(12, 23)), c(0, 0));
        assert_eq!(inner.extent(), Dimen::new(4, 4));

        let free = outer.nested_at(c(1, 1));
        assert!(!free.is_finite());
        assert_eq!(free.to_parent(c(0, 0)), c(11, 21));
    }

    #[test]
    fn nesting_inside_rotated_view() {
        let mut outer = View::from_rect(Rect::xywh(0, 0, 4, 2));
        outer.rotate_cw(1);
        let inner = outer.nested(Rect::xywh(0, 0, 2, 1));
        assert_eq!(inner.to_parent(c(0, 0)), c(0, 1));
        assert_eq!(inner.to_parent(c(1, 0)), c(0, 0));
    }

    #[test]
    #[should_panic(expected = "unbounded")]
    fn nesting_region_in_unbounded_view_panics() {
        View::new(c(0, 0)).nested(Rect::xywh(0, 0, 1, 1));
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn nesting_oversized_region_panics() {
        View::from_rect(Rect::xywh(0, 0, 2, 2)).nested(Rect::xywh(1, 1, 2, 2));
    }

    #[test]
    fn display_shows_matrix_and_extent() {
        insta::assert_snapshot!(
            View::from_rect(Rect::xywh(1, 2, 3, 4)),
            @"View { matrix: AffineMatrix { rows: [[1, 0, 0], [0, 1, 0], [1, 2, 1]] }, extent: Dimen { w: 3, h: 4 } }"
        );
    }
}
