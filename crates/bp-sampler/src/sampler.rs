//! Mover selection and destination assignment.

use std::collections::HashSet;

use bp_core::{Coord, MoverId, PuzzleConfig, SessionRng};
use bp_lattice::{Lattice, MarkedCellSet};

use crate::{Combinations, SamplerError, SamplerResult};

// ── PuzzleInstance ────────────────────────────────────────────────────────────

/// One mover's relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub mover: MoverId,
    pub from:  Coord,
    pub to:    Coord,
}

/// The movers that relocate in one puzzle, in selection order, each with
/// its destination.
///
/// Selection order is the order the scheduler visits movers within a step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleInstance {
    assignments: Vec<Assignment>,
}

impl PuzzleInstance {
    /// Build an instance from caller-chosen `(mover, destination)` pairs.
    ///
    /// Each mover appears at most once.  Destinations must be distinct and
    /// must not sit on another mover's origin.  A mover may be sent to its
    /// own origin (an empty move).
    ///
    /// # Errors
    ///
    /// - [`SamplerError::UnknownMover`] for a mover not in `movers`.
    /// - [`SamplerError::DuplicateMover`] for a mover listed twice.
    /// - [`SamplerError::Lattice`] (`OutOfRange`) for a destination off the
    ///   lattice.
    /// - [`SamplerError::DestinationConflict`] for a repeated or occupied
    ///   destination.
    pub fn explicit(
        lattice: &Lattice,
        movers:  &MarkedCellSet,
        targets: &[(MoverId, Coord)],
    ) -> SamplerResult<Self> {
        let mut assigned = HashSet::with_capacity(targets.len());
        let mut taken = HashSet::with_capacity(targets.len());
        let mut assignments = Vec::with_capacity(targets.len());

        for &(mover, to) in targets {
            let cell = movers.get(mover).ok_or(SamplerError::UnknownMover(mover))?;
            if !assigned.insert(mover) {
                return Err(SamplerError::DuplicateMover(mover));
            }
            lattice.require(to)?;
            let occupied = movers.iter().any(|m| m.id != mover && m.origin == to);
            if occupied || !taken.insert(to) {
                return Err(SamplerError::DestinationConflict(to));
            }
            assignments.push(Assignment { mover, from: cell.origin, to });
        }

        Ok(Self { assignments })
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Moving movers in selection order.
    pub fn movers(&self) -> impl Iterator<Item = MoverId> + '_ {
        self.assignments.iter().map(|a| a.mover)
    }

    pub fn destination(&self, mover: MoverId) -> Option<Coord> {
        self.assignments.iter().find(|a| a.mover == mover).map(|a| a.to)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

// ── PuzzleSampler ─────────────────────────────────────────────────────────────

/// Randomly picks movers and destinations for a puzzle.
///
/// Destinations are drawn from cells no mover occupies, and one combination
/// never repeats a cell, so two movers never share a destination and no
/// destination lands on a resting block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSampler {
    /// Number of movers relocated per puzzle.
    pub complexity: usize,

    /// Maximum Manhattan distance from a mover to its destination.
    pub distance_threshold: Option<u32>,
}

impl PuzzleSampler {
    pub fn new(complexity: usize, distance_threshold: Option<u32>) -> Self {
        Self { complexity, distance_threshold }
    }

    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.complexity, config.distance_threshold)
    }

    /// Uniform sample of `complexity` movers without replacement, in draw
    /// order.
    pub fn select_movers(
        &self,
        movers: &MarkedCellSet,
        rng:    &mut SessionRng,
    ) -> SamplerResult<Vec<MoverId>> {
        let picked = rng
            .sample_indices(movers.len(), self.complexity)
            .ok_or(SamplerError::NotEnoughMovers {
                requested: self.complexity,
                available: movers.len(),
            })?;
        let ids: Vec<MoverId> = movers.iter().map(|m| m.id).collect();
        Ok(picked.into_iter().map(|i| ids[i]).collect())
    }

    /// Every lattice coordinate not occupied by a marked cell, x outer and
    /// y inner.
    pub fn destination_universe(&self, lattice: &Lattice, movers: &MarkedCellSet) -> Vec<Coord> {
        let marked: HashSet<Coord> = movers.iter().map(|m| m.origin).collect();
        lattice.coords().filter(|c| !marked.contains(c)).collect()
    }

    /// `true` if each `origins[i]` is within the threshold of `combo[i]`.
    pub fn within_threshold(&self, origins: &[Coord], combo: &[Coord]) -> bool {
        match self.distance_threshold {
            None => true,
            Some(limit) => origins
                .iter()
                .zip(combo)
                .all(|(from, to)| from.manhattan(*to) <= limit),
        }
    }

    /// All destination combinations for `selected` that pass the distance
    /// filter, in enumeration order.
    pub fn candidate_destinations(
        &self,
        lattice:  &Lattice,
        movers:   &MarkedCellSet,
        selected: &[MoverId],
    ) -> SamplerResult<Vec<Vec<Coord>>> {
        let origins = selected
            .iter()
            .map(|&id| movers.get(id).map(|m| m.origin).ok_or(SamplerError::UnknownMover(id)))
            .collect::<SamplerResult<Vec<Coord>>>()?;

        let universe = self.destination_universe(lattice, movers);
        Ok(Combinations::new(&universe, selected.len())
            .filter(|combo| self.within_threshold(&origins, combo))
            .collect())
    }

    /// Shuffle the candidate combinations and assign the first one
    /// positionally to `selected`.
    ///
    /// # Errors
    ///
    /// [`SamplerError::NoDestinations`] if the filter rejects everything.
    pub fn assign_destinations(
        &self,
        lattice:  &Lattice,
        movers:   &MarkedCellSet,
        selected: &[MoverId],
        rng:      &mut SessionRng,
    ) -> SamplerResult<PuzzleInstance> {
        let mut candidates = self.candidate_destinations(lattice, movers, selected)?;
        tracing::debug!(
            event = "destinations_filtered",
            movers = selected.len(),
            candidates = candidates.len(),
        );

        rng.shuffle(&mut candidates);
        let Some(chosen) = candidates.into_iter().next() else {
            return Err(SamplerError::NoDestinations {
                complexity: selected.len(),
                threshold:  self.distance_threshold,
            });
        };

        let assignments = selected
            .iter()
            .zip(chosen)
            .map(|(&mover, to)| {
                let from = movers.require(mover)?.origin;
                Ok(Assignment { mover, from, to })
            })
            .collect::<SamplerResult<Vec<_>>>()?;

        Ok(PuzzleInstance { assignments })
    }

    /// Select movers, then assign their destinations.
    pub fn sample(
        &self,
        lattice: &Lattice,
        movers:  &MarkedCellSet,
        rng:     &mut SessionRng,
    ) -> SamplerResult<PuzzleInstance> {
        let selected = self.select_movers(movers, rng)?;
        tracing::debug!(event = "movers_selected", selected = ?selected);
        self.assign_destinations(lattice, movers, &selected, rng)
    }
}
