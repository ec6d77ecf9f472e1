//! Unit tests for bp-lattice.

#[cfg(test)]
mod helpers {
    use bp_core::Coord;

    use crate::{Lattice, MarkedCellSet};

    /// The reference layout: 11×11 lattice, 3×3 block at (4,4)…(6,6),
    /// enumerated x outer / y inner.
    pub fn reference() -> (Lattice, MarkedCellSet) {
        let lattice = Lattice::new(11, 11);
        let block: Vec<Coord> = (4..7)
            .flat_map(|x| (4..7).map(move |y| Coord::new(x, y)))
            .collect();
        let movers = MarkedCellSet::new(&lattice, &block).unwrap();
        (lattice, movers)
    }

    /// Every cell of a small lattice is a mover.
    pub fn fully_marked(width: u32, height: u32) -> (Lattice, MarkedCellSet) {
        let lattice = Lattice::new(width, height);
        let all: Vec<Coord> = lattice.coords().collect();
        let movers = MarkedCellSet::new(&lattice, &all).unwrap();
        (lattice, movers)
    }

    /// Walk `path` from `from`, panicking if it leaves the lattice.
    pub fn walk(lattice: &Lattice, from: Coord, path: &[bp_core::Direction]) -> Coord {
        path.iter().fold(from, |at, &d| {
            let next = at.checked_step(d).expect("path underflows the lattice");
            assert!(lattice.contains(next), "path leaves the lattice at {next}");
            next
        })
    }
}

// ── Lattice structure ─────────────────────────────────────────────────────────

#[cfg(test)]
mod lattice {
    use bp_core::{CellId, Coord, Direction};

    use crate::{Lattice, LatticeError};

    #[test]
    fn dimensions() {
        let l = Lattice::new(4, 3);
        assert_eq!(l.width(), 4);
        assert_eq!(l.height(), 3);
        assert_eq!(l.cell_count(), 12);
    }

    #[test]
    fn cell_id_roundtrip() {
        let l = Lattice::new(5, 7);
        for c in l.coords() {
            let id = l.cell_id(c).unwrap();
            assert_eq!(l.coord(id), c);
        }
        assert_eq!(l.cell_id(Coord::new(1, 2)), Some(CellId(7 + 2)));
    }

    #[test]
    fn out_of_bounds_has_no_id() {
        let l = Lattice::new(5, 7);
        assert_eq!(l.cell_id(Coord::new(5, 0)), None);
        assert_eq!(l.cell_id(Coord::new(0, 7)), None);
        assert_eq!(
            l.require(Coord::new(9, 9)),
            Err(LatticeError::OutOfRange { coord: Coord::new(9, 9), width: 5, height: 7 }),
        );
    }

    #[test]
    fn degrees() {
        let l = Lattice::new(3, 3);
        let corner = l.cell_id(Coord::new(0, 0)).unwrap();
        let edge   = l.cell_id(Coord::new(1, 0)).unwrap();
        let middle = l.cell_id(Coord::new(1, 1)).unwrap();
        assert_eq!(l.neighbors(corner).count(), 2);
        assert_eq!(l.neighbors(edge).count(), 3);
        assert_eq!(l.neighbors(middle).count(), 4);
    }

    #[test]
    fn boundary_links_absent() {
        let l = Lattice::new(3, 3);
        let origin = l.cell_id(Coord::new(0, 0)).unwrap();
        let links = l.links(origin);
        assert_eq!(links[Direction::Up.slot()], None);
        assert_eq!(links[Direction::Left.slot()], None);
        assert_eq!(links[Direction::Right.slot()].map(|c| l.coord(c)), Some(Coord::new(1, 0)));
        assert_eq!(links[Direction::Down.slot()].map(|c| l.coord(c)), Some(Coord::new(0, 1)));
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let l = Lattice::new(6, 4);
        for c in l.coords() {
            let cell = l.cell_id(c).unwrap();
            for (dir, next) in l.neighbors(cell) {
                assert_eq!(l.links(next)[dir.opposite().slot()], Some(cell));
            }
        }
    }

    #[test]
    fn neighbors_in_discovery_order() {
        let l = Lattice::new(3, 3);
        let middle = l.cell_id(Coord::new(1, 1)).unwrap();
        let dirs: Vec<Direction> = l.neighbors(middle).map(|(d, _)| d).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
    }
}

// ── Marked cells ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod marked {
    use bp_core::{Coord, MoverId};

    use crate::{Lattice, LatticeError, MarkedCellSet};

    #[test]
    fn ids_follow_creation_order() {
        let (_, movers) = super::helpers::reference();
        assert_eq!(movers.len(), 9);
        for (i, m) in movers.iter().enumerate() {
            assert_eq!(m.id, MoverId(i as u32));
        }
        assert_eq!(movers.get(MoverId(0)).unwrap().origin, Coord::new(4, 4));
        assert_eq!(movers.get(MoverId(8)).unwrap().origin, Coord::new(6, 6));
    }

    #[test]
    fn snapshot_matches_lattice_cell() {
        let (lattice, movers) = super::helpers::reference();
        for m in movers.iter() {
            let cell = lattice.cell_id(m.origin).unwrap();
            assert_eq!(&m.links, lattice.links(cell));
        }
    }

    #[test]
    fn lattice_unchanged_by_marking() {
        let lattice = Lattice::new(4, 4);
        let table = |l: &Lattice| -> Vec<_> {
            l.coords().map(|c| *l.links(l.cell_id(c).unwrap())).collect()
        };
        let before = table(&lattice);
        let _movers = MarkedCellSet::new(&lattice, &[Coord::new(1, 1), Coord::new(0, 3)]).unwrap();
        assert_eq!(table(&lattice), before);
    }

    #[test]
    fn out_of_range_marker_rejected() {
        let lattice = Lattice::new(4, 4);
        let err = MarkedCellSet::new(&lattice, &[Coord::new(1, 1), Coord::new(4, 0)]).unwrap_err();
        assert!(matches!(err, LatticeError::OutOfRange { coord, .. } if coord == Coord::new(4, 0)));
    }

    #[test]
    fn duplicate_marker_rejected() {
        let lattice = Lattice::new(4, 4);
        let err = MarkedCellSet::new(&lattice, &[Coord::new(2, 2), Coord::new(2, 2)]).unwrap_err();
        assert_eq!(err, LatticeError::DuplicateMarker(Coord::new(2, 2)));
    }

    #[test]
    fn lookup_helpers() {
        let (_, movers) = super::helpers::reference();
        assert!(movers.is_marked(Coord::new(5, 5)));
        assert!(!movers.is_marked(Coord::new(0, 0)));
        assert!(movers.require(MoverId(9)).is_err());
        assert_eq!(movers.origins().len(), 9);
        assert_eq!(movers.iter().last().map(|m| m.id), Some(MoverId(8)));
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use bp_core::{Coord, Direction, MoverId};

    use crate::{BfsPathFinder, LatticeError, PathFinder, PathIndex};

    use super::helpers::{fully_marked, reference, walk};

    #[test]
    fn corner_path_has_length_eight() {
        let (lattice, movers) = reference();
        let index = PathIndex::build(&BfsPathFinder, &lattice, &movers);
        let path = index.path(MoverId(0), Coord::new(0, 0)).unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(walk(&lattice, Coord::new(4, 4), path), Coord::new(0, 0));
    }

    #[test]
    fn every_pair_is_manhattan() {
        let (lattice, movers) = fully_marked(6, 5);
        for m in movers.iter() {
            let table = BfsPathFinder.paths_from(&lattice, m);
            assert_eq!(table.len(), lattice.cell_count());
            for to in lattice.coords() {
                let path = table.path_to(to).unwrap();
                assert_eq!(path.len() as u32, m.origin.manhattan(to), "{} -> {to}", m.origin);
                assert_eq!(walk(&lattice, m.origin, path), to);
            }
        }
    }

    #[test]
    fn source_path_is_empty() {
        let (lattice, movers) = reference();
        let index = PathIndex::build(&BfsPathFinder, &lattice, &movers);
        assert!(index.path(MoverId(4), Coord::new(5, 5)).unwrap().is_empty());
    }

    #[test]
    fn ties_break_by_discovery_order() {
        let (lattice, movers) = reference();
        let index = PathIndex::build(&BfsPathFinder, &lattice, &movers);
        // (5,5) → (4,4): up is expanded before left.
        assert_eq!(
            index.path(MoverId(4), Coord::new(4, 4)).unwrap(),
            &[Direction::Up, Direction::Left],
        );
        // (5,5) → (6,6): down before right.
        assert_eq!(
            index.path(MoverId(4), Coord::new(6, 6)).unwrap(),
            &[Direction::Down, Direction::Right],
        );
    }

    #[test]
    fn recomputation_is_identical() {
        let (lattice, movers) = reference();
        let m = movers.get(MoverId(2)).unwrap();
        let a = BfsPathFinder.paths_from(&lattice, m);
        let b = BfsPathFinder.paths_from(&lattice, m);
        assert_eq!(a, b);
        for (to, path) in a.iter() {
            assert_eq!(b.path_to(to).unwrap(), path);
        }
    }

    #[test]
    fn paths_cross_other_movers() {
        // Marked cells are not obstacles.
        let (lattice, movers) = reference();
        let index = PathIndex::build(&BfsPathFinder, &lattice, &movers);
        let path = index.path(MoverId(0), Coord::new(6, 6)).unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn unreachable_target_is_no_path() {
        let (lattice, movers) = reference();
        let index = PathIndex::build(&BfsPathFinder, &lattice, &movers);
        let err = index.path(MoverId(0), Coord::new(11, 0)).unwrap_err();
        assert_eq!(err, LatticeError::NoPath { from: Coord::new(4, 4), to: Coord::new(11, 0) });
    }

    #[test]
    fn unknown_mover() {
        let (lattice, movers) = reference();
        let index = PathIndex::build(&BfsPathFinder, &lattice, &movers);
        assert_eq!(index.len(), 9);
        assert_eq!(
            index.path(MoverId(42), Coord::new(0, 0)).unwrap_err(),
            LatticeError::UnknownMover(MoverId(42)),
        );
    }

    #[test]
    fn single_cell_lattice() {
        let (lattice, movers) = fully_marked(1, 1);
        let table = BfsPathFinder.paths_from(&lattice, movers.get(MoverId(0)).unwrap());
        assert_eq!(table.len(), 1);
        assert_eq!(table.source(), Coord::new(0, 0));
    }
}
