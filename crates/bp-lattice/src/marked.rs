//! Marked cells: the relocatable blocks of a puzzle.
//!
//! A `MarkedCell` is a snapshot of one lattice cell taken at creation: its
//! origin coordinate and a copy of that cell's neighbor table.  The lattice
//! cell itself is left untouched.  Where a mover currently *is* during a
//! session is not stored here; see `bp_schedule::SessionState`.

use std::collections::HashSet;

use bp_core::{CellId, Coord, Direction, MoverId};

use crate::lattice::linked;
use crate::{Lattice, LatticeError, LatticeResult, Links};

/// One relocatable block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedCell {
    /// Stable id, equal to the creation index.
    pub id: MoverId,

    /// Position at creation.
    pub origin: Coord,

    /// Copy of the origin cell's neighbor table.  Never recomputed.
    pub links: Links,
}

impl MarkedCell {
    /// Neighbors from the snapshot, in discovery order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        linked(&self.links)
    }
}

/// Ordered, fixed-membership set of marked cells ("chunks").
///
/// `MoverId(i)` is the `i`-th requested position.
#[derive(Debug, Clone)]
pub struct MarkedCellSet {
    chunks: Vec<MarkedCell>,
}

impl MarkedCellSet {
    /// Snapshot the lattice cell at each of `positions` into a new mover.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::OutOfRange`] if a position lies outside `lattice`.
    /// - [`LatticeError::DuplicateMarker`] if a position is listed twice.
    /// - [`LatticeError::TooManyMarkers`] if the count overflows `MoverId`.
    pub fn new(lattice: &Lattice, positions: &[Coord]) -> LatticeResult<Self> {
        let mut seen = HashSet::with_capacity(positions.len());
        let mut chunks = Vec::with_capacity(positions.len());

        for (i, &origin) in positions.iter().enumerate() {
            let cell = lattice.require(origin)?;
            if !seen.insert(origin) {
                return Err(LatticeError::DuplicateMarker(origin));
            }
            let id = MoverId::try_from(i)
                .map_err(|_| LatticeError::TooManyMarkers(positions.len()))?;
            chunks.push(MarkedCell {
                id,
                origin,
                links: *lattice.links(cell),
            });
        }

        Ok(Self { chunks })
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn get(&self, id: MoverId) -> Option<&MarkedCell> {
        self.chunks.get(id.index())
    }

    /// Like [`get`](Self::get) but reports the missing id.
    pub fn require(&self, id: MoverId) -> LatticeResult<&MarkedCell> {
        self.get(id).ok_or(LatticeError::UnknownMover(id))
    }

    /// Movers in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &MarkedCell> + '_ {
        self.chunks.iter()
    }

    /// Creation positions, indexed by `MoverId`.
    pub fn origins(&self) -> Vec<Coord> {
        self.chunks.iter().map(|c| c.origin).collect()
    }

    /// `true` if some mover was created at `coord`.
    pub fn is_marked(&self, coord: Coord) -> bool {
        self.chunks.iter().any(|c| c.origin == coord)
    }
}
