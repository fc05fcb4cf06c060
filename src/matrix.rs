//! A crude integer affine matrix for quarter turns, mirrors and translations.
//!
//! Points are row vectors: `[x y 1] * M`. The translation lives in the bottom
//! row, and `a * b` applies `a` first, then `b`.
//!
//! REMEMBER: x=right, y=down. This affects rotations!

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::geometry::rect_from_2_coords;
use crate::types::{Coord, Int, Rect};

/// Reduce any number of quarter turns to the equivalent count in `[0, 4)`.
fn simplify_quarter_turns(turns: Int) -> Int {
    turns.rem_euclid(4)
}

/// A 3x3 integer matrix in homogeneous coordinates, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AffineMatrix {
    rows: [[Int; 3]; 3],
}

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        rows: [
            [1, 0, 0],
            [0, 1, 0],
            [0, 0, 1],
        ],
    };

    pub const fn from_rows(rows: [[Int; 3]; 3]) -> Self {
        AffineMatrix { rows }
    }

    pub const fn rows(&self) -> [[Int; 3]; 3] {
        self.rows
    }

    /// Rotate clockwise (on a y-down screen) by `n` quarter turns.
    pub fn rotate_cw(n: Int) -> Self {
        let (sin, cos) = match simplify_quarter_turns(n) {
            1 => (1, 0),
            2 => (0, -1),
            3 => (-1, 0),
            _ => (0, 1),
        };
        AffineMatrix {
            rows: [
                [cos, sin, 0],
                [-sin, cos, 0],
                [0, 0, 1],
            ],
        }
    }

    pub fn rotate_ccw(n: Int) -> Self {
        Self::rotate_cw(-n)
    }

    pub const fn translate(by: Coord) -> Self {
        AffineMatrix {
            rows: [
                [1, 0, 0],
                [0, 1, 0],
                [by.x, by.y, 1],
            ],
        }
    }

    /// Mirror across the vertical axis: `x` becomes `-x`.
    pub const fn hmirror() -> Self {
        AffineMatrix {
            rows: [
                [-1, 0, 0],
                [0, 1, 0],
                [0, 0, 1],
            ],
        }
    }

    /// Mirror across the horizontal axis: `y` becomes `-y`.
    pub const fn vmirror() -> Self {
        AffineMatrix {
            rows: [
                [1, 0, 0],
                [0, -1, 0],
                [0, 0, 1],
            ],
        }
    }

    pub fn transform(&self, c: Coord) -> Coord {
        let m = &self.rows;
        Coord::new(
            m[0][0] * c.x + m[1][0] * c.y + m[2][0],
            m[0][1] * c.x + m[1][1] * c.y + m[2][1],
        )
    }

    /// Bounding box of the two transformed corner cells.
    ///
    /// Rotations and mirrors can move any corner to the top-left, so both
    /// opposite corners are transformed and the box rebuilt. An empty
    /// rectangle maps to an empty rectangle at its transformed origin.
    pub fn transform_rect(&self, r: Rect) -> Rect {
        if r.is_empty() {
            return Rect::new(self.transform(r.origin), Default::default());
        }
        rect_from_2_coords(self.transform(r.origin), self.transform(r.last()))
    }

    /// ±1 for every matrix built from this module's constructors.
    pub fn determinant(&self) -> Int {
        let m = &self.rows;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][1] * m[1][0] * m[2][2]
            - m[0][0] * m[1][2] * m[2][1]
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for AffineMatrix {
    type Output = [Int; 3];
    fn index(&self, row: usize) -> &[Int; 3] {
        &self.rows[row]
    }
}

impl IndexMut<usize> for AffineMatrix {
    fn index_mut(&mut self, row: usize) -> &mut [Int; 3] {
        &mut self.rows[row]
    }
}

impl Mul for AffineMatrix {
    type Output = AffineMatrix;
    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        let mut rows = [[0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        AffineMatrix { rows }
    }
}

impl MulAssign for AffineMatrix {
    fn mul_assign(&mut self, rhs: AffineMatrix) {
        *self = *self * rhs;
    }
}

impl fmt::Display for AffineMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.rows;
        write!(f, "AffineMatrix {{ rows: [{a:?}, {b:?}, {c:?}] }}")
    }
}

/// Values that an [`AffineMatrix`] can map.
pub trait Transform: Sized {
    fn transformed(self, m: &AffineMatrix) -> Self;
}

impl Transform for Coord {
    fn transformed(self, m: &AffineMatrix) -> Coord {
        m.transform(self)
    }
}

impl Transform for Rect {
    fn transformed(self, m: &AffineMatrix) -> Rect {
        m.transform_rect(self)
    }
}
