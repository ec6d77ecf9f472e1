//! Direction tokens shared by path search, scheduling, and captions.
//!
//! A token is always a unit step in one of the four fixed cardinal
//! directions.  Screen convention: `y` grows downwards, so `Up` is `(0, -1)`.

use std::fmt;
use std::str::FromStr;

/// One unit grid step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in neighbor discovery order.
    ///
    /// Breadth-first search expands neighbors in this order, so it decides
    /// which of several equal-length paths wins.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Slot of this direction in a `[_; 4]` neighbor table.
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Direction::Up    => 0,
            Direction::Down  => 1,
            Direction::Left  => 2,
            Direction::Right => 3,
        }
    }

    /// Unit displacement `(dx, dy)`.
    #[inline]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
        }
    }

    /// The step that undoes this one.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lower-case label used in captions and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Direction::from_str`] for anything other than the four
/// lower-case labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {0:?}: expected \"up\", \"down\", \"left\", or \"right\"")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up"    => Ok(Direction::Up),
            "down"  => Ok(Direction::Down),
            "left"  => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other   => Err(ParseDirectionError(other.to_owned())),
        }
    }
}
