//! Shortest direction-token paths from each mover to every cell.
//!
//! # Pluggability
//!
//! The episode generator asks for paths through the [`PathFinder`] trait, so
//! a lattice with obstacles or weighted moves can bring its own search.  The
//! default [`BfsPathFinder`] is exact for the unweighted 4-connected lattice.
//!
//! # Tie-breaking
//!
//! Several shortest paths usually exist.  The winner is the first one
//! discovered, with neighbors expanded in [`Direction::ALL`] order (up,
//! down, left, right).  Recomputing a table always yields the same paths.

use std::collections::{HashMap, VecDeque};

use bp_core::{CellId, Coord, Direction, MoverId};

use crate::{Lattice, LatticeError, LatticeResult, MarkedCell, MarkedCellSet};

// ── PathTable ─────────────────────────────────────────────────────────────────

/// Shortest path from one source to every reachable coordinate.
///
/// Immutable once computed.  Built fresh for each planning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable {
    source: Coord,
    paths:  HashMap<Coord, Vec<Direction>>,
}

impl PathTable {
    pub fn source(&self) -> Coord {
        self.source
    }

    /// The recorded path from the source to `to`.  Empty for the source
    /// itself.
    ///
    /// # Errors
    ///
    /// [`LatticeError::NoPath`] if `to` was never reached.
    pub fn path_to(&self, to: Coord) -> LatticeResult<&[Direction]> {
        self.paths
            .get(&to)
            .map(Vec::as_slice)
            .ok_or(LatticeError::NoPath { from: self.source, to })
    }

    pub fn contains(&self, to: Coord) -> bool {
        self.paths.contains_key(&to)
    }

    /// Number of reachable coordinates, source included.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All reachable coordinates with their paths, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &[Direction])> + '_ {
        self.paths.iter().map(|(&c, p)| (c, p.as_slice()))
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable single-source, all-targets path search.
pub trait PathFinder {
    /// Compute the path table for `mover`, starting from its neighbor
    /// snapshot.
    fn paths_from(&self, lattice: &Lattice, mover: &MarkedCell) -> PathTable;
}

// ── BfsPathFinder ─────────────────────────────────────────────────────────────

/// Breadth-first search over the lattice.  O(W·H) per source.
pub struct BfsPathFinder;

impl PathFinder for BfsPathFinder {
    fn paths_from(&self, lattice: &Lattice, mover: &MarkedCell) -> PathTable {
        bfs(lattice, mover)
    }
}

fn bfs(lattice: &Lattice, mover: &MarkedCell) -> PathTable {
    let mut paths: HashMap<Coord, Vec<Direction>> = HashMap::with_capacity(lattice.cell_count());
    let mut visited = vec![false; lattice.cell_count()];
    let mut queue: VecDeque<(CellId, Vec<Direction>)> = VecDeque::new();

    paths.insert(mover.origin, Vec::new());
    if let Some(source) = lattice.cell_id(mover.origin) {
        visited[source.index()] = true;
    }

    // The source is expanded through the mover's own snapshot, every other
    // cell through the lattice.
    for (dir, next) in mover.neighbors() {
        relax(lattice, &mut paths, &mut queue, &[], dir, next);
    }

    while let Some((cell, path)) = queue.pop_front() {
        if visited[cell.index()] {
            continue;
        }
        visited[cell.index()] = true;

        for (dir, next) in lattice.neighbors(cell) {
            relax(lattice, &mut paths, &mut queue, &path, dir, next);
        }
    }

    PathTable { source: mover.origin, paths }
}

/// Record and enqueue `next` unless an equal-or-shorter path to it exists.
fn relax(
    lattice: &Lattice,
    paths:   &mut HashMap<Coord, Vec<Direction>>,
    queue:   &mut VecDeque<(CellId, Vec<Direction>)>,
    path:    &[Direction],
    dir:     Direction,
    next:    CellId,
) {
    let key = lattice.coord(next);
    let shorter = paths
        .get(&key)
        .is_none_or(|known| path.len() + 1 < known.len());
    if !shorter {
        return;
    }

    let mut new_path = Vec::with_capacity(path.len() + 1);
    new_path.extend_from_slice(path);
    new_path.push(dir);
    paths.insert(key, new_path.clone());
    queue.push_back((next, new_path));
}

// ── PathIndex ─────────────────────────────────────────────────────────────────

/// One [`PathTable`] per marked cell, indexed by `MoverId`.
pub struct PathIndex {
    tables: Vec<PathTable>,
}

impl PathIndex {
    /// Run `finder` once per mover.  O(K·W·H) for K movers with BFS.
    pub fn build<F: PathFinder>(finder: &F, lattice: &Lattice, movers: &MarkedCellSet) -> Self {
        let tables: Vec<PathTable> = movers
            .iter()
            .map(|m| finder.paths_from(lattice, m))
            .collect();

        tracing::debug!(
            event = "path_index_built",
            movers = tables.len(),
            cells = lattice.cell_count(),
        );
        Self { tables }
    }

    pub fn table(&self, mover: MoverId) -> LatticeResult<&PathTable> {
        self.tables
            .get(mover.index())
            .ok_or(LatticeError::UnknownMover(mover))
    }

    /// Shortest path for `mover` from its origin to `to`.
    pub fn path(&self, mover: MoverId, to: Coord) -> LatticeResult<&[Direction]> {
        self.table(mover)?.path_to(to)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
