//! Mutable per-session mover positions.

use bp_core::{Coord, Direction, MoverId};
use bp_lattice::{Lattice, MarkedCellSet};

use crate::{Instruction, ScheduleError, ScheduleResult};

/// Current position of every mover, indexed by `MoverId`.
///
/// This is the only mutable state of a session.  The lattice, the marked
/// cells, and the path index stay read-only; the scheduler threads this
/// struct through each step explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    positions: Vec<Coord>,
}

impl SessionState {
    pub fn new(positions: Vec<Coord>) -> Self {
        Self { positions }
    }

    /// Every mover at its creation position.
    pub fn from_movers(movers: &MarkedCellSet) -> Self {
        Self::new(movers.origins())
    }

    #[inline]
    pub fn position(&self, mover: MoverId) -> Option<Coord> {
        self.positions.get(mover.index()).copied()
    }

    /// Positions indexed by `MoverId`.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Move `mover` one unit in `direction` and return its new position.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::UnknownMover`] if `mover` has no slot.
    /// - [`ScheduleError::OffLattice`] if the step would leave `lattice`;
    ///   the position is left unchanged.
    pub fn apply(
        &mut self,
        mover:     MoverId,
        direction: Direction,
        lattice:   &Lattice,
    ) -> ScheduleResult<Coord> {
        let slot = self
            .positions
            .get_mut(mover.index())
            .ok_or(ScheduleError::UnknownMover(mover))?;

        let next = slot
            .checked_step(direction)
            .filter(|&c| lattice.contains(c))
            .ok_or(ScheduleError::OffLattice { mover, from: *slot, direction })?;

        *slot = next;
        Ok(next)
    }

    /// Apply `instructions` in order.
    pub fn replay(&mut self, instructions: &[Instruction], lattice: &Lattice) -> ScheduleResult<()> {
        for ins in instructions {
            self.apply(ins.mover, ins.direction, lattice)?;
        }
        Ok(())
    }
}
