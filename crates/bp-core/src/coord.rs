//! Integer grid coordinate.
//!
//! `x` is the column, `y` the row; `(0, 0)` is the top-left cell.  Bounds
//! are not known here; the lattice owns them and checks them.

use std::fmt;

use crate::Direction;

/// A cell position on the lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance, the exact shortest path length on an
    /// obstacle-free 4-connected lattice.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The coordinate one unit step away in `dir`.
    ///
    /// Returns `None` on underflow (stepping left of column 0 or above row
    /// 0).  The upper bound is the lattice's to check.
    #[inline]
    pub fn checked_step(self, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.vector();
        Some(Coord {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(u32, u32)> for Coord {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
