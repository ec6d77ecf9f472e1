//! Dense grid lattice.
//!
//! # Data layout
//!
//! Cells live in one flat array addressed by `(x, y)`:
//!
//! ```text
//! CellId = x * height + y
//! ```
//!
//! Neighbor links are derived by index arithmetic once, at construction,
//! into `links[cell][direction.slot()]`.  The table is never mutated
//! afterwards, so the neighbor relation is symmetric and fixed for the
//! lattice's lifetime.  There are no cell-to-cell references to keep alive.

use bp_core::{CellId, Coord, Direction};

use crate::{LatticeError, LatticeResult};

/// Neighbor table for one cell, indexed by [`Direction::slot`].
/// `None` marks a lattice boundary.
pub type Links = [Option<CellId>; 4];

/// Fixed W×H grid of 4-connected cells.
///
/// Construct with [`Lattice::new`]; the neighbor table is read-only
/// afterwards.
pub struct Lattice {
    width:  u32,
    height: u32,

    /// Per-cell neighbor table.  Indexed by `CellId`.
    links: Vec<Links>,
}

impl Lattice {
    /// Build a `width × height` lattice and wire every cell to its in-bounds
    /// orthogonal neighbors.
    ///
    /// Time and space: O(W·H).
    pub fn new(width: u32, height: u32) -> Self {
        let mut lattice = Self {
            width,
            height,
            links: Vec::with_capacity(width as usize * height as usize),
        };

        for x in 0..width {
            for y in 0..height {
                let here = Coord::new(x, y);
                let mut links: Links = [None; 4];
                for dir in Direction::ALL {
                    links[dir.slot()] = here
                        .checked_step(dir)
                        .and_then(|next| lattice.cell_id(next));
                }
                lattice.links.push(links);
            }
        }

        tracing::debug!(event = "lattice_built", width, height);
        lattice
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    // ── Addressing ────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Dense id of the cell at `coord`, or `None` if out of bounds or past
    /// the `u32` id range.
    #[inline]
    pub fn cell_id(&self, coord: Coord) -> Option<CellId> {
        if !self.contains(coord) {
            return None;
        }
        let dense = coord.x as usize * self.height as usize + coord.y as usize;
        CellId::try_from(dense).ok()
    }

    /// Like [`cell_id`](Self::cell_id) but reports the bounds on failure.
    pub fn require(&self, coord: Coord) -> LatticeResult<CellId> {
        self.cell_id(coord).ok_or(LatticeError::OutOfRange {
            coord,
            width:  self.width,
            height: self.height,
        })
    }

    /// Coordinate of `cell`.  `cell` must come from this lattice.
    #[inline]
    pub fn coord(&self, cell: CellId) -> Coord {
        Coord::new(cell.0 / self.height, cell.0 % self.height)
    }

    /// Every coordinate, x outer and y inner.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Coord::new(x, y)))
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Neighbor table of `cell`, indexed by [`Direction::slot`].
    #[inline]
    pub fn links(&self, cell: CellId) -> &Links {
        &self.links[cell.index()]
    }

    /// Present neighbors of `cell` in discovery order.
    #[inline]
    pub fn neighbors(&self, cell: CellId) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        linked(&self.links[cell.index()])
    }
}

/// Iterate the present entries of a neighbor table in discovery order.
pub(crate) fn linked(links: &Links) -> impl Iterator<Item = (Direction, CellId)> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| links[dir.slot()].map(|cell| (dir, cell)))
}
