//! Integer 2D units: coordinates, extents, rectangles and compass directions.
//!
//! REMEMBER: x=right, y=down. This affects rotations!
//!
//! ```text
//!    x
//!  +---->
//!  |
//! y|
//!  v
//! ```
//!
//! Functions that only combine these units live in [`crate::geometry`].

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// The scalar every coordinate is made of.
pub type Int = i32;

/// Largest magnitude for coordinates, extents and line directions that the
/// kernel supports without `Int` overflow.
///
/// The widest intermediate is the line jump, which multiplies a doubled
/// direction component by the step count; keeping both below this bound
/// keeps that product well inside `i32`. Nothing checks it at runtime.
pub const SAFE_MAGNITUDE: Int = 1 << 14;

/// Selects one component of a [`Coord`] or [`Dimen`].
///
/// `X` is component 0 (`x`/`w`), `Y` is component 1 (`y`/`h`). Axis-generic
/// algorithms take an `Axis` instead of being written twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// The perpendicular axis.
    #[inline]
    pub const fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// Coord
// ============================================================================

/// A position on the integer plane.
///
/// Ordering is x-major: `(0, 9) < (1, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: Int,
    pub y: Int,
}

impl Coord {
    pub const ZERO: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: Int, y: Int) -> Self {
        Coord { x, y }
    }

    /// Apply `f` to both components.
    #[inline]
    pub fn map(self, mut f: impl FnMut(Int) -> Int) -> Self {
        Coord { x: f(self.x), y: f(self.y) }
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map(Int::abs)
    }

    /// Componentwise sign: each component becomes -1, 0 or 1.
    #[inline]
    pub fn signum(self) -> Self {
        self.map(Int::signum)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Reinterpret as an extent.
    #[inline]
    pub const fn to_dimen(self) -> Dimen {
        Dimen { w: self.x, h: self.y }
    }
}

impl Index<Axis> for Coord {
    type Output = Int;
    #[inline]
    fn index(&self, axis: Axis) -> &Int {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl IndexMut<Axis> for Coord {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut Int {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord { Coord::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord { Coord::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Neg for Coord {
    type Output = Coord;
    fn neg(self) -> Coord { Coord::new(-self.x, -self.y) }
}
impl Mul<Int> for Coord {
    type Output = Coord;
    fn mul(self, rhs: Int) -> Coord { Coord::new(self.x * rhs, self.y * rhs) }
}
/// Truncates toward zero, like `Int` division.
impl Div<Int> for Coord {
    type Output = Coord;
    fn div(self, rhs: Int) -> Coord { Coord::new(self.x / rhs, self.y / rhs) }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, rhs: Coord) {
        *self = *self + rhs;
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, rhs: Coord) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord {{ x: {}, y: {} }}", self.x, self.y)
    }
}

// ============================================================================
// Dimen
// ============================================================================

/// A width and height. Valid extents are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Dimen {
    pub w: Int,
    pub h: Int,
}

impl Dimen {
    pub const ZERO: Dimen = Dimen { w: 0, h: 0 };

    #[inline]
    pub const fn new(w: Int, h: Int) -> Self {
        Dimen { w, h }
    }

    #[inline]
    pub const fn square(side: Int) -> Self {
        Dimen { w: side, h: side }
    }

    #[inline]
    pub fn map(self, mut f: impl FnMut(Int) -> Int) -> Self {
        Dimen { w: f(self.w), h: f(self.h) }
    }

    /// True when both components are zero.
    ///
    /// A view with a zero extent stands for an unbounded coordinate system.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.w == 0 && self.h == 0
    }

    /// Reinterpret as a coordinate (the exclusive end of `to_rect(self)`).
    #[inline]
    pub const fn to_coord(self) -> Coord {
        Coord { x: self.w, y: self.h }
    }
}

impl Index<Axis> for Dimen {
    type Output = Int;
    #[inline]
    fn index(&self, axis: Axis) -> &Int {
        match axis {
            Axis::X => &self.w,
            Axis::Y => &self.h,
        }
    }
}

impl IndexMut<Axis> for Dimen {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut Int {
        match axis {
            Axis::X => &mut self.w,
            Axis::Y => &mut self.h,
        }
    }
}

impl Add for Dimen {
    type Output = Dimen;
    fn add(self, rhs: Dimen) -> Dimen { Dimen::new(self.w + rhs.w, self.h + rhs.h) }
}
impl Sub for Dimen {
    type Output = Dimen;
    fn sub(self, rhs: Dimen) -> Dimen { Dimen::new(self.w - rhs.w, self.h - rhs.h) }
}
impl Neg for Dimen {
    type Output = Dimen;
    fn neg(self) -> Dimen { Dimen::new(-self.w, -self.h) }
}
impl Mul<Int> for Dimen {
    type Output = Dimen;
    fn mul(self, rhs: Int) -> Dimen { Dimen::new(self.w * rhs, self.h * rhs) }
}
impl Div<Int> for Dimen {
    type Output = Dimen;
    fn div(self, rhs: Int) -> Dimen { Dimen::new(self.w / rhs, self.h / rhs) }
}

impl AddAssign for Dimen {
    fn add_assign(&mut self, rhs: Dimen) {
        *self = *self + rhs;
    }
}

impl SubAssign for Dimen {
    fn sub_assign(&mut self, rhs: Dimen) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Dimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dimen {{ w: {}, h: {} }}", self.w, self.h)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle spanning `[origin, origin + extent)`.
///
/// A zero width or height makes the rectangle empty: it covers no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rect {
    pub origin: Coord,
    pub extent: Dimen,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Coord, extent: Dimen) -> Self {
        Rect { origin, extent }
    }

    /// Shorthand for `Rect::new(Coord::new(x, y), Dimen::new(w, h))`.
    #[inline]
    pub const fn xywh(x: Int, y: Int, w: Int, h: Int) -> Self {
        Rect { origin: Coord::new(x, y), extent: Dimen::new(w, h) }
    }

    /// True when the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.extent.w == 0 || self.extent.h == 0
    }

    /// Exclusive end corner.
    #[inline]
    pub const fn end(&self) -> Coord {
        Coord::new(self.ex(), self.ey())
    }

    #[inline]
    pub const fn ex(&self) -> Int {
        self.origin.x + self.extent.w
    }

    #[inline]
    pub const fn ey(&self) -> Int {
        self.origin.y + self.extent.h
    }

    /// End along one axis.
    #[inline]
    pub fn e(&self, axis: Axis) -> Int {
        self.origin[axis] + self.extent[axis]
    }

    /// Inclusive last cell (the bottom-right corner cell).
    #[inline]
    pub const fn last(&self) -> Coord {
        Coord::new(self.rx(), self.ry())
    }

    #[inline]
    pub const fn rx(&self) -> Int {
        self.origin.x + self.extent.w - 1
    }

    #[inline]
    pub const fn ry(&self) -> Int {
        self.origin.y + self.extent.h - 1
    }

    /// Last cell along one axis.
    #[inline]
    pub fn r(&self, axis: Axis) -> Int {
        self.e(axis) - 1
    }

    #[inline]
    pub const fn nw(&self) -> Coord {
        self.origin
    }

    #[inline]
    pub const fn ne(&self) -> Coord {
        Coord::new(self.rx(), self.origin.y)
    }

    #[inline]
    pub const fn sw(&self) -> Coord {
        Coord::new(self.origin.x, self.ry())
    }

    #[inline]
    pub const fn se(&self) -> Coord {
        self.last()
    }
}

impl From<Dimen> for Rect {
    fn from(extent: Dimen) -> Rect {
        Rect::new(Coord::ZERO, extent)
    }
}

impl Add<Coord> for Rect {
    type Output = Rect;
    fn add(mut self, rhs: Coord) -> Rect {
        self.origin += rhs;
        self
    }
}

impl Add<Rect> for Coord {
    type Output = Rect;
    fn add(self, rhs: Rect) -> Rect {
        rhs + self
    }
}

impl Sub<Coord> for Rect {
    type Output = Rect;
    fn sub(mut self, rhs: Coord) -> Rect {
        self.origin -= rhs;
        self
    }
}

impl AddAssign<Coord> for Rect {
    fn add_assign(&mut self, rhs: Coord) {
        self.origin += rhs;
    }
}

impl SubAssign<Coord> for Rect {
    fn sub_assign(&mut self, rhs: Coord) {
        self.origin -= rhs;
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect {{ origin: {}, extent: {} }}", self.origin, self.extent)
    }
}

// ============================================================================
// Dir
// ============================================================================

/// One of the 8 compass directions, numbered clockwise from east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Dir {
    E = 0,
    SE = 1,
    S = 2,
    SW = 3,
    W = 4,
    NW = 5,
    N = 6,
    NE = 7,
}

impl Dir {
    /// All directions, clockwise starting east.
    pub const ALL: [Dir; 8] = [Dir::E, Dir::SE, Dir::S, Dir::SW, Dir::W, Dir::NW, Dir::N, Dir::NE];

    /// The four cardinal directions, clockwise starting east.
    pub const CARDINAL: [Dir; 4] = [Dir::E, Dir::S, Dir::W, Dir::N];

    /// Direction number `i`, wrapping modulo 8.
    #[inline]
    pub fn from_index(i: Int) -> Dir {
        Dir::ALL[i.rem_euclid(8) as usize]
    }

    /// The unit step taken by moving one cell in this direction.
    pub const fn offset(self) -> Coord {
        match self {
            Dir::E => Coord::new(1, 0),
            Dir::SE => Coord::new(1, 1),
            Dir::S => Coord::new(0, 1),
            Dir::SW => Coord::new(-1, 1),
            Dir::W => Coord::new(-1, 0),
            Dir::NW => Coord::new(-1, -1),
            Dir::N => Coord::new(0, -1),
            Dir::NE => Coord::new(1, -1),
        }
    }

    /// Inverse of [`Dir::offset`].
    pub fn from_offset(offset: Coord) -> Option<Dir> {
        Dir::ALL.into_iter().find(|d| d.offset() == offset)
    }

    /// Rotate clockwise by `n` quarter turns (negative turns counter-clockwise).
    #[inline]
    pub fn rot90(self, n: Int) -> Dir {
        Dir::from_index(self as Int + 2 * n)
    }

    /// Rotate clockwise by `n` eighth turns.
    #[inline]
    pub fn rot45(self, n: Int) -> Dir {
        Dir::from_index(self as Int + n)
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        self.rot90(2)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        (self as u8) & 1 == 1
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dir::E => "E",
            Dir::SE => "SE",
            Dir::S => "S",
            Dir::SW => "SW",
            Dir::W => "W",
            Dir::NW => "NW",
            Dir::N => "N",
            Dir::NE => "NE",
        };
        f.write_str(name)
    }
}
