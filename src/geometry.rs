//! Geometry functions over the integer units: distances, containment,
//! bounding boxes, cropping, centering and margins.

use crate::types::{Axis, Coord, Dimen, Int, Rect};

pub fn left_n(c: Coord, n: Int) -> Coord { Coord::new(c.x - n, c.y) }
pub fn right_n(c: Coord, n: Int) -> Coord { Coord::new(c.x + n, c.y) }
pub fn up_n(c: Coord, n: Int) -> Coord { Coord::new(c.x, c.y - n) }
pub fn down_n(c: Coord, n: Int) -> Coord { Coord::new(c.x, c.y + n) }

pub fn left1(c: Coord) -> Coord { left_n(c, 1) }
pub fn right1(c: Coord) -> Coord { right_n(c, 1) }
pub fn up1(c: Coord) -> Coord { up_n(c, 1) }
pub fn down1(c: Coord) -> Coord { down_n(c, 1) }

fn gcd(mut a: Int, mut b: Int) -> Int {
    while b != 0 {
        a %= b;
        std::mem::swap(&mut a, &mut b);
    }
    a
}

/// Dot product, widened to `i64`.
pub fn dot_product(a: Coord, b: Coord) -> i64 {
    i64::from(a.x) * i64::from(b.x) + i64::from(a.y) * i64::from(b.y)
}

pub fn area(d: Dimen) -> Int {
    d.w * d.h
}

/// Given a 5x3 rect:
///
/// ```text
///   -----
/// | xxxxx |
/// | x   x |
/// | xxxxx |
///   -----
/// ```
///
/// `perimeter` counts the `|` and `-` characters (16), `inner_perimeter`
/// counts the `x` characters (12).
pub fn perimeter(d: Dimen) -> Int {
    2 * d.w + 2 * d.h
}

pub fn inner_perimeter(d: Dimen) -> Int {
    2 * (d.w - 1) + 2 * (d.h - 1)
}

// ============================================================================
// Distances
// ============================================================================

/// Chebyshev ("chess") distance.
pub fn c_dist(a: Coord, b: Coord) -> Int {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Manhattan distance.
pub fn m_dist(a: Coord, b: Coord) -> Int {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean distance.
pub fn e_dist(a: Coord, b: Coord) -> f64 {
    let d = a - b;
    (dot_product(d, d) as f64).sqrt()
}

/// Reduce a direction to its smallest integer multiple, e.g. `(4, -6)` to `(2, -3)`.
///
/// The zero vector is returned unchanged.
pub fn simplify_dir(dir: Coord) -> Coord {
    let g = gcd(dir.x, dir.y).abs();
    if g == 0 { dir } else { dir / g }
}

// ============================================================================
// Containment
// ============================================================================

/// A region that can answer whether it covers `T`.
///
/// [`Dimen`] acts as the rectangle `[0, w) x [0, h)`.
pub trait Contains<T> {
    fn contains(&self, item: T) -> bool;
}

impl Contains<Coord> for Rect {
    fn contains(&self, c: Coord) -> bool {
        c.x >= self.origin.x && c.y >= self.origin.y && c.x < self.ex() && c.y < self.ey()
    }
}

/// Subset test. An empty `sub` still needs its origin and end inside.
impl Contains<Rect> for Rect {
    fn contains(&self, sub: Rect) -> bool {
        sub.origin.x >= self.origin.x
            && sub.origin.y >= self.origin.y
            && sub.ex() <= self.ex()
            && sub.ey() <= self.ey()
    }
}

impl Contains<Dimen> for Rect {
    fn contains(&self, sub: Dimen) -> bool {
        self.contains(Rect::from(sub))
    }
}

impl Contains<Coord> for Dimen {
    fn contains(&self, c: Coord) -> bool {
        Rect::from(*self).contains(c)
    }
}

impl Contains<Rect> for Dimen {
    fn contains(&self, sub: Rect) -> bool {
        Rect::from(*self).contains(sub)
    }
}

impl Contains<Dimen> for Dimen {
    fn contains(&self, sub: Dimen) -> bool {
        Rect::from(*self).contains(Rect::from(sub))
    }
}

/// Whether `item` lies within `region`.
pub fn in_bounds<T, R: Contains<T>>(item: T, region: R) -> bool {
    region.contains(item)
}

/// Open intersection test: rectangles that only touch along an edge do not overlap.
pub fn overlapping(a: Rect, b: Rect) -> bool {
    a.origin.x < b.ex() && a.ex() > b.origin.x && a.origin.y < b.ey() && a.ey() > b.origin.y
}

// ============================================================================
// Bounding boxes
// ============================================================================

pub fn to_rect(d: Dimen) -> Rect {
    Rect::from(d)
}

/// The smallest rectangle holding both cells.
pub fn rect_from_2_coords(a: Coord, b: Coord) -> Rect {
    let min = Coord::new(a.x.min(b.x), a.y.min(b.y));
    let max = Coord::new(a.x.max(b.x), a.y.max(b.y));
    Rect::new(min, Dimen::new(max.x - min.x + 1, max.y - min.y + 1))
}

/// The smallest rectangle holding every cell, or `None` for no cells.
pub fn rect_from_n_coords(coords: impl IntoIterator<Item = Coord>) -> Option<Rect> {
    let mut iter = coords.into_iter();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(mut min, mut max), c| {
        for axis in Axis::BOTH {
            min[axis] = min[axis].min(c[axis]);
            max[axis] = max[axis].max(c[axis]);
        }
        (min, max)
    });
    Some(Rect::new(min, Dimen::new(max.x - min.x + 1, max.y - min.y + 1)))
}

impl Rect {
    /// Grow to also cover `c`. An empty rectangle becomes the single cell `c`.
    pub fn grow_to_contain(self, c: Coord) -> Rect {
        if self.is_empty() {
            return Rect::new(c, Dimen::new(1, 1));
        }
        let corners = [c, self.nw(), self.se()];
        rect_from_n_coords(corners).unwrap_or(self)
    }

    /// Grow to also cover `other`. Empty rectangles contribute nothing.
    pub fn grow_to_contain_rect(self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let corners = [self.nw(), self.se(), other.nw(), other.se()];
        rect_from_n_coords(corners).unwrap_or(self)
    }

    /// Clamp into `boundary` by cropping both corner cells and rebuilding.
    /// An empty rectangle stays empty, with its origin clamped.
    pub fn crop(self, boundary: Rect) -> Rect {
        if self.is_empty() {
            return Rect::new(self.origin.crop(boundary), Dimen::ZERO);
        }
        let a = self.origin.crop(boundary);
        let b = self.last().crop(boundary);
        rect_from_2_coords(a, b)
    }

    /// The center cell, truncating toward zero.
    pub fn center(&self) -> Coord {
        Coord::new((self.origin.x + self.ex()) / 2, (self.origin.y + self.ey()) / 2)
    }
}

impl Coord {
    /// Clamp into the cells of `boundary`.
    pub fn crop(self, boundary: Rect) -> Coord {
        Coord::new(
            self.x.max(boundary.origin.x).min(boundary.rx()),
            self.y.max(boundary.origin.y).min(boundary.ry()),
        )
    }
}

impl Dimen {
    /// Shrink each component to at most `boundary`'s.
    pub fn crop(self, boundary: Dimen) -> Dimen {
        Dimen::new(self.w.min(boundary.w), self.h.min(boundary.h))
    }
}

// ============================================================================
// Centering and margins
// ============================================================================

/// The `(2r+1)`-square centred on `center`.
pub fn rect_from_radius(center: Coord, radius: Int) -> Rect {
    let side = radius * 2 + 1;
    Rect::new(center - Coord::new(radius, radius), Dimen::square(side))
}

/// A rectangle of extent `d` whose center cell is `center`.
pub fn centered_rect(center: Coord, d: Dimen) -> Rect {
    Rect::new(center - (d / 2).to_coord(), d)
}

/// Place `d` in the middle of `within`, cropping it first if it is too big.
pub fn centered_inside(d: Dimen, within: Rect) -> Rect {
    let d = d.crop(within.extent);
    Rect::new(within.center() - (d / 2).to_coord(), d)
}

/// Inset each side independently. The extent never goes negative.
pub fn rect_margin(r: Rect, left: Int, top: Int, right: Int, bottom: Int) -> Rect {
    Rect::new(
        Coord::new(r.origin.x + left, r.origin.y + top),
        Dimen::new((r.extent.w - left - right).max(0), (r.extent.h - top - bottom).max(0)),
    )
}

pub fn rect_margin_uniform(r: Rect, margin: Int) -> Rect {
    rect_margin(r, margin, margin, margin, margin)
}

pub fn rect_margin_xy(r: Rect, x_margin: Int, y_margin: Int) -> Rect {
    rect_margin(r, x_margin, y_margin, x_margin, y_margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: Int, y: Int) -> Coord {
        Coord::new(x, y)
    }

    // ==================== Distance tests ====================

    #[test]
    fn distance_metrics() {
        let a = c(1, 1);
        let b = c(4, 5);
        assert_eq!(c_dist(a, b), 4);
        assert_eq!(m_dist(a, b), 7);
        assert!((e_dist(a, b) - 5.0).abs() < 1e-12);
        assert_eq!(c_dist(b, a), 4);
    }

    #[test]
    fn simplify_dir_divides_by_gcd() {
        assert_eq!(simplify_dir(c(4, -6)), c(2, -3));
        assert_eq!(simplify_dir(c(0, -5)), c(0, -1));
        assert_eq!(simplify_dir(c(-3, 0)), c(-1, 0));
        assert_eq!(simplify_dir(c(0, 0)), c(0, 0));
    }

    #[test]
    fn area_and_perimeters() {
        let d = Dimen::new(5, 3);
        assert_eq!(area(d), 15);
        assert_eq!(perimeter(d), 16);
        assert_eq!(inner_perimeter(d), 12);
        assert_eq!(dot_product(c(2, 3), c(4, -1)), 5);
    }

    // ==================== Containment tests ====================

    #[test]
    fn coord_in_rect_is_half_open() {
        let r = Rect::xywh(1, 1, 2, 2);
        assert!(in_bounds(c(1, 1), r));
        assert!(in_bounds(c(2, 2), r));
        assert!(!in_bounds(c(3, 2), r));
        assert!(!in_bounds(c(0, 1), r));
        assert!(in_bounds(c(0, 0), Dimen::new(1, 1)));
        assert!(!in_bounds(c(0, 0), Dimen::ZERO));
    }

    #[test]
    fn rect_subset() {
        let outer = Rect::xywh(0, 0, 10, 10);
        assert!(in_bounds(Rect::xywh(2, 2, 8, 8), outer));
        assert!(!in_bounds(Rect::xywh(2, 2, 9, 8), outer));
        assert!(in_bounds(Dimen::new(10, 3), Dimen::new(10, 10)));
        assert!(in_bounds(Rect::xywh(9, 9, 1, 1), Dimen::new(10, 10)));
    }

    #[test]
    fn every_rect_contains_itself() {
        for r in [Rect::xywh(0, 0, 0, 0), Rect::xywh(-4, 3, 2, 7), Rect::xywh(5, 5, 0, 3)] {
            assert!(in_bounds(r, r));
            assert_eq!(overlapping(r, r), !r.is_empty());
        }
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::xywh(0, 0, 2, 2);
        assert!(!overlapping(a, Rect::xywh(2, 0, 2, 2)));
        assert!(!overlapping(a, Rect::xywh(0, 2, 2, 2)));
        assert!(overlapping(a, Rect::xywh(1, 1, 2, 2)));
    }

    // ==================== Bounding box tests ====================

    #[test]
    fn rect_from_two_coords_includes_both() {
        assert_eq!(rect_from_2_coords(c(0, 0), c(2, 2)), Rect::xywh(0, 0, 3, 3));
        assert_eq!(rect_from_2_coords(c(4, -1), c(1, 3)), Rect::xywh(1, -1, 4, 5));
        assert_eq!(rect_from_2_coords(c(7, 7), c(7, 7)), Rect::xywh(7, 7, 1, 1));
    }

    #[test]
    fn rect_from_n_coords_tracks_min_max() {
        let pts = [c(3, 1), c(-2, 4), c(0, 0), c(5, -3)];
        assert_eq!(rect_from_n_coords(pts), Some(Rect::xywh(-2, -3, 8, 8)));
        assert_eq!(rect_from_n_coords([c(1, 2)]), Some(Rect::xywh(1, 2, 1, 1)));
        assert_eq!(rect_from_n_coords(std::iter::empty::<Coord>()), None);
    }

    #[test]
    fn grow_empty_rect_replaces_it() {
        let empty = Rect::default();
        assert_eq!(empty.grow_to_contain(c(5, 5)), Rect::xywh(5, 5, 1, 1));
        let r = Rect::xywh(3, 3, 2, 2);
        assert_eq!(empty.grow_to_contain_rect(r), r);
        assert_eq!(r.grow_to_contain_rect(empty), r);
    }

    #[test]
    fn grow_extends_to_new_content() {
        let r = Rect::xywh(0, 0, 2, 2);
        assert_eq!(r.grow_to_contain(c(4, -1)), Rect::xywh(0, -1, 5, 3));
        assert_eq!(r.grow_to_contain(c(1, 1)), r);
        assert_eq!(r.grow_to_contain_rect(Rect::xywh(5, 5, 1, 1)), Rect::xywh(0, 0, 6, 6));
    }

    // ==================== Crop tests ====================

    #[test]
    fn crop_coord_clamps_to_last_cell() {
        let r = Rect::xywh(0, 0, 4, 3);
        assert_eq!(c(9, -2).crop(r), c(3, 0));
        assert_eq!(c(2, 1).crop(r), c(2, 1));
    }

    #[test]
    fn crop_dimen_and_rect() {
        assert_eq!(Dimen::new(10, 2).crop(Dimen::new(4, 4)), Dimen::new(4, 2));
        let boundary = Rect::xywh(0, 0, 5, 5);
        assert_eq!(Rect::xywh(3, -2, 6, 4).crop(boundary), Rect::xywh(3, 0, 2, 2));
        assert_eq!(Rect::xywh(1, 1, 2, 2).crop(boundary), Rect::xywh(1, 1, 2, 2));
        assert_eq!(Rect::xywh(1, 1, 0, 0).crop(boundary), Rect::xywh(1, 1, 0, 0));
        assert_eq!(Rect::xywh(9, -3, 0, 4).crop(boundary), Rect::xywh(4, 0, 0, 0));
        assert!(Rect::xywh(2, 2, 3, 0).crop(boundary).is_empty());
    }

    // ==================== Centering tests ====================

    #[test]
    fn rect_center_truncates() {
        assert_eq!(Rect::xywh(0, 0, 4, 3).center(), c(2, 1));
        assert_eq!(Rect::xywh(1, 1, 1, 1).center(), c(1, 1));
    }

    #[test]
    fn centering_helpers() {
        assert_eq!(centered_rect(c(5, 5), Dimen::new(3, 3)), Rect::xywh(4, 4, 3, 3));
        assert_eq!(rect_from_radius(c(0, 0), 2), Rect::xywh(-2, -2, 5, 5));
        assert_eq!(
            centered_inside(Dimen::new(2, 2), Rect::xywh(0, 0, 6, 6)),
            Rect::xywh(2, 2, 2, 2)
        );
        // Too wide: cropped to the container first.
        assert_eq!(
            centered_inside(Dimen::new(20, 2), Rect::xywh(0, 0, 6, 6)),
            Rect::xywh(0, 2, 6, 2)
        );
    }

    // ==================== Margin tests ====================

    #[test]
    fn margins_shift_origin_and_shrink() {
        let r = Rect::xywh(0, 0, 10, 8);
        assert_eq!(rect_margin(r, 1, 2, 3, 4), Rect::xywh(1, 2, 6, 2));
        assert_eq!(rect_margin_uniform(r, 1), Rect::xywh(1, 1, 8, 6));
        assert_eq!(rect_margin_xy(r, 2, 1), Rect::xywh(2, 1, 6, 6));
    }

    #[test]
    fn margins_floor_at_zero() {
        let r = Rect::xywh(0, 0, 3, 3);
        assert_eq!(rect_margin_uniform(r, 5).extent, Dimen::ZERO);
    }

    #[test]
    fn shift_helpers() {
        let o = c(0, 0);
        assert_eq!(left1(o), c(-1, 0));
        assert_eq!(right_n(o, 3), c(3, 0));
        assert_eq!(up1(o), c(0, -1));
        assert_eq!(down_n(o, 2), c(0, 2));
    }
}
