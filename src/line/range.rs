use std::fmt;
use std::iter::FusedIterator;

use super::LineState;
use crate::geometry::c_dist;
use crate::types::{Coord, Int};

/// A half-open run of a Bresenham line: `begin` is the first cell, `end` is
/// one step past the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineRange {
    begin: LineState,
    end: LineState,
}

impl LineRange {
    /// The single cell `c`, heading east with no accumulated error.
    pub fn point(c: Coord) -> Self {
        let begin = LineState { pos: c, dir: Coord::new(1, 0), error: 0 };
        LineRange { begin, end: begin.next() }
    }

    /// Every cell from `from` to `to`, both included.
    pub fn between(from: Coord, to: Coord) -> Self {
        Self::from_state(LineState::from_to(from, to), c_dist(from, to) + 1)
    }

    /// `steps` cells starting at `pos` heading along `dir`.
    pub fn with_dir(pos: Coord, dir: Coord, steps: Int) -> Self {
        Self::from_state(LineState::pos_dir(pos, dir), steps)
    }

    pub fn from_state(begin: LineState, steps: Int) -> Self {
        debug_assert!(steps >= 0, "negative line length {steps}");
        LineRange { begin, end: begin.next_n(steps) }
    }

    pub fn begin(&self) -> LineState {
        self.begin
    }

    pub fn end(&self) -> LineState {
        self.end
    }

    pub fn dir(&self) -> Coord {
        self.begin.dir()
    }

    pub fn len(&self) -> usize {
        self.begin.distance(&self.end) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.begin.pos() == self.end.pos()
    }

    pub fn first(&self) -> Option<Coord> {
        (!self.is_empty()).then(|| self.begin.pos())
    }

    pub fn last(&self) -> Option<Coord> {
        (!self.is_empty()).then(|| self.end.prev().pos())
    }

    /// The `i`-th cell, without walking the ones before it.
    pub fn get(&self, i: usize) -> Option<Coord> {
        (i < self.len()).then(|| self.begin.next_n(i as Int).pos())
    }

    /// Extend the far end by one step.
    pub fn lengthen(&mut self) {
        self.end.advance();
    }

    /// Drop the last cell.
    pub fn shorten(&mut self) {
        debug_assert!(!self.is_empty(), "shortening empty {self}");
        self.end.retreat();
    }

    /// Extend the far end by `n` steps in one jump.
    pub fn lengthen_by(&mut self, n: usize) {
        self.end.advance_by(n as Int);
    }

    /// Drop the last `n` cells in one jump.
    ///
    /// # Panics
    ///
    /// When `n` exceeds the length, which would move the end behind `begin`.
    pub fn shorten_by(&mut self, n: usize) {
        assert!(n <= self.len(), "cannot shorten {self} by {n} cells");
        self.end.retreat_by(n as Int);
    }

    pub fn iter(&self) -> LineIter {
        LineIter { front: self.begin, back: self.end }
    }
}

impl IntoIterator for LineRange {
    type Item = Coord;
    type IntoIter = LineIter;

    fn into_iter(self) -> LineIter {
        self.iter()
    }
}

impl IntoIterator for &LineRange {
    type Item = Coord;
    type IntoIter = LineIter;

    fn into_iter(self) -> LineIter {
        self.iter()
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineRange {{ begin: {}, end: {} }}", self.begin.pos(), self.end.pos())
    }
}

/// Cells of a [`LineRange`], walkable from both ends.
#[derive(Clone, Debug)]
pub struct LineIter {
    front: LineState,
    back: LineState,
}

impl LineIter {
    fn remaining(&self) -> Int {
        self.front.distance(&self.back)
    }
}

impl Iterator for LineIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.front.pos() == self.back.pos() {
            return None;
        }
        let pos = self.front.pos();
        self.front.advance();
        Some(pos)
    }

    fn nth(&mut self, n: usize) -> Option<Coord> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front.advance_by(n as Int);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining() as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for LineIter {
    fn next_back(&mut self) -> Option<Coord> {
        if self.front.pos() == self.back.pos() {
            return None;
        }
        self.back.retreat();
        Some(self.back.pos())
    }

    fn nth_back(&mut self, n: usize) -> Option<Coord> {
        if n >= self.len() {
            self.back = self.front;
            return None;
        }
        self.back.retreat_by(n as Int);
        self.next_back()
    }
}

impl ExactSizeIterator for LineIter {}
impl FusedIterator for LineIter {}
