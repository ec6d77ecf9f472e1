//! Lattice-subsystem error type.

use thiserror::Error;

use bp_core::{Coord, MoverId};

/// Errors produced by `bp-lattice`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LatticeError {
    #[error("coordinate {coord} is outside the {width}x{height} lattice")]
    OutOfRange { coord: Coord, width: u32, height: u32 },

    #[error("coordinate {0} is marked more than once")]
    DuplicateMarker(Coord),

    #[error("no path from {from} to {to}")]
    NoPath { from: Coord, to: Coord },

    #[error("{0} markers exceed the mover id range")]
    TooManyMarkers(usize),

    #[error("mover {0} not found")]
    UnknownMover(MoverId),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
