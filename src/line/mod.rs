//! Generic Bresenham line algorithm.
//!
//! [`LineState`] is one step of the algorithm: a position, a direction and
//! the accumulated error. It can step one cell either way, or jump any
//! number of cells in constant time. [`LineRange`] bounds a run of steps.
//!
//! Lines whose direction is steeper than 45 degrees swap the roles of the
//! axes: the *major* axis always advances by one cell per step, and the
//! *minor* axis advances when the error term carries.

mod range;

pub use range::{LineIter, LineRange};

use std::cmp::Ordering;
use std::fmt;

use crate::geometry::c_dist;
use crate::types::{Axis, Coord, Int};

/// The state of Bresenham's line algorithm.
///
/// Build it with [`LineState::pos_dir`] or [`LineState::from_to`]; the
/// error term has to start at the right bias, so there is no public literal
/// constructor. A direction of `(0, 0)` is invalid.
///
/// While stepping, `0 <= error < 2 * |dir[major]|`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineState {
    pos: Coord,
    dir: Coord,
    error: Int,
}

fn is_steep(dir: Coord) -> bool {
    dir.y.abs() > dir.x.abs()
}

fn major_minor(dir: Coord) -> (Axis, Axis) {
    if is_steep(dir) { (Axis::Y, Axis::X) } else { (Axis::X, Axis::Y) }
}

/// Run `f` with the axes ordered (major, minor) for this line.
fn steep_swap<R>(line: LineState, f: impl FnOnce(LineState, Axis, Axis) -> R) -> R {
    let (major, minor) = major_minor(line.dir);
    f(line, major, minor)
}

fn advance_n(line: LineState, n: Int) -> LineState {
    debug_assert!(line.is_valid(), "stepping a line with a zero direction");
    debug_assert!(n >= 0);
    steep_swap(line, |mut line, major, minor| {
        let d2 = line.dir.abs() * 2;
        line.pos[major] += n * line.dir[major].signum();
        line.error -= d2[minor] * n;
        // How many times the single-step recurrence would have carried.
        let carries = (d2[major] - line.error - 1) / d2[major];
        debug_assert!(carries >= 0);
        line.pos[minor] += carries * line.dir[minor].signum();
        line.error += carries * d2[major];
        line
    })
}

fn retreat_n(line: LineState, n: Int) -> LineState {
    debug_assert!(line.is_valid(), "stepping a line with a zero direction");
    debug_assert!(n >= 0);
    steep_swap(line, |mut line, major, minor| {
        let d2 = line.dir.abs() * 2;
        line.pos[major] -= n * line.dir[major].signum();
        line.error += d2[minor] * n;
        let carries = line.error / d2[major];
        debug_assert!(carries >= 0);
        line.pos[minor] -= carries * line.dir[minor].signum();
        line.error -= carries * d2[major];
        line
    })
}

impl LineState {
    /// Start at `pos` heading along `dir`.
    ///
    /// # Panics
    ///
    /// When `dir` is `(0, 0)`.
    pub fn pos_dir(pos: Coord, dir: Coord) -> Self {
        assert!(!dir.is_zero(), "line direction must not be (0, 0)");
        LineState { pos, dir, error: Self::dir_err(dir) }
    }

    /// Start at `from` heading toward `to`. Equal endpoints head east.
    pub fn from_to(from: Coord, to: Coord) -> Self {
        if from == to {
            Self::pos_dir(from, Coord::new(1, 0))
        } else {
            Self::pos_dir(from, to - from)
        }
    }

    /// The starting error for `dir`, which centres the line on its ideal path.
    pub fn dir_err(dir: Coord) -> Int {
        if is_steep(dir) { dir.y.abs() } else { dir.x.abs() }
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }

    pub fn dir(&self) -> Coord {
        self.dir
    }

    pub fn error(&self) -> Int {
        self.error
    }

    /// The axis that advances on every step.
    pub fn major_axis(&self) -> Axis {
        major_minor(self.dir).0
    }

    pub fn is_valid(&self) -> bool {
        !self.dir.is_zero()
    }

    /// One iteration of Bresenham's line algorithm.
    pub fn next(self) -> Self {
        debug_assert!(self.is_valid(), "stepping a line with a zero direction");
        steep_swap(self, |mut line, major, minor| {
            let d = line.dir.abs();
            line.pos[major] += line.dir[major].signum();
            line.error -= d[minor] * 2;
            if line.error < 0 {
                line.pos[minor] += line.dir[minor].signum();
                line.error += d[major] * 2;
            }
            line
        })
    }

    /// Exact inverse of [`LineState::next`].
    pub fn prev(self) -> Self {
        debug_assert!(self.is_valid(), "stepping a line with a zero direction");
        steep_swap(self, |mut line, major, minor| {
            let d = line.dir.abs();
            line.pos[major] -= line.dir[major].signum();
            line.error += d[minor] * 2;
            if line.error >= d[major] * 2 {
                line.pos[minor] -= line.dir[minor].signum();
                line.error -= d[major] * 2;
            }
            line
        })
    }

    /// Same as calling [`LineState::next`] `n` times, in O(1).
    /// Negative `n` steps backward.
    pub fn next_n(self, n: Int) -> Self {
        if n < 0 { retreat_n(self, -n) } else { advance_n(self, n) }
    }

    /// Same as calling [`LineState::prev`] `n` times, in O(1).
    pub fn prev_n(self, n: Int) -> Self {
        if n < 0 { advance_n(self, -n) } else { retreat_n(self, n) }
    }

    /// Negate the horizontal direction.
    ///
    /// The error term is kept, so the rest of the line is the mirror image
    /// of what it would have been. It is not recomputed for the new
    /// direction: the cells can differ from a line freshly built along the
    /// flipped direction from the same point.
    pub fn hflipped(mut self) -> Self {
        self.dir.x = -self.dir.x;
        self
    }

    /// Negate the vertical direction. See [`LineState::hflipped`].
    pub fn vflipped(mut self) -> Self {
        self.dir.y = -self.dir.y;
        self
    }

    pub fn advance(&mut self) {
        *self = self.next();
    }

    pub fn advance_by(&mut self, n: Int) {
        *self = self.next_n(n);
    }

    pub fn retreat(&mut self) {
        *self = self.prev();
    }

    pub fn retreat_by(&mut self, n: Int) {
        *self = self.prev_n(n);
    }

    pub fn hflip(&mut self) {
        *self = self.hflipped();
    }

    pub fn vflip(&mut self) {
        *self = self.vflipped();
    }

    /// Chebyshev distance between the two positions.
    ///
    /// Every step moves the major axis by one and the minor axis by at most
    /// one, so on a shared line this is also the number of steps apart.
    pub fn distance(&self, other: &LineState) -> Int {
        c_dist(self.pos, other.pos)
    }
}

/// Orders positions along one line.
///
/// States with different directions are not comparable.
impl PartialOrd for LineState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dir != other.dir {
            return None;
        }
        let major = self.major_axis();
        let along = (self.pos[major] - other.pos[major]) * self.dir[major].signum();
        match along.cmp(&0) {
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineState {{ pos: {}, dir: {}, error: {} }}", self.pos, self.dir, self.error)
    }
}

/// Calls `visit` with every cell from `from` to `to`, both included.
///
/// This uses the symmetric form of Bresenham's algorithm, which never swaps
/// axes and may be slightly faster than [`LineRange`]. Both produce the same
/// cells in the same order.
pub fn iterate_line(mut from: Coord, to: Coord, mut visit: impl FnMut(Coord)) {
    let dir = to - from;
    let d = dir.abs();
    let s = dir.signum();
    let mut err = d.x - d.y;
    loop {
        visit(from);
        if from == to {
            break;
        }
        let err2 = 2 * err;
        if err2 > -d.y {
            err -= d.y;
            from.x += s.x;
        }
        if err2 < d.x {
            err += d.x;
            from.y += s.y;
        }
    }
}
