//! Integer 2D geometry for tile maps and grid games.
//!
//! The kernel is three pieces:
//!
//! - coordinate algebra over [`Coord`], [`Dimen`] and [`Rect`];
//! - quarter-turn and mirror [`View`]s backed by an integer [`AffineMatrix`];
//! - a Bresenham [`LineState`] that steps forward or backward, one cell or
//!   any number of cells in constant time.
//!
//! Around it sit cell ranges, dense grids and `glam` conversions.
//!
//! ```
//! use int2d::{Coord, LineRange, Rect, View};
//!
//! let mut view = View::from_rect(Rect::xywh(2, 3, 4, 5));
//! view.rotate_cw(1);
//! assert_eq!(view.to_parent(Coord::new(0, 0)), Coord::new(2, 7));
//!
//! let line = LineRange::between(Coord::new(0, 0), Coord::new(5, 3));
//! assert_eq!(line.get(2), Some(Coord::new(2, 1)));
//! ```

pub mod errors;
pub mod geometry;
pub mod grid;
pub mod line;
mod log;
pub mod matrix;
pub mod ranges;
pub mod types;
pub mod vector;
pub mod view;

pub use errors::{GridError, GridResult};
pub use geometry::{Contains, in_bounds};
pub use grid::{FixedGrid, Grid, GridLike, blit, fblit};
pub use line::{LineIter, LineRange, LineState, iterate_line};
pub use matrix::{AffineMatrix, Transform};
pub use ranges::{adjacent, adjacent4, circular_cells, dimen_cells, radius_edge, rect_cells, rect_edge};
pub use types::{Axis, Coord, Dimen, Dir, Int, Rect, SAFE_MAGNITUDE};
pub use view::View;
