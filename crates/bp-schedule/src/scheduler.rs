//! The round-robin move scheduler.

use std::collections::BTreeMap;

use bp_core::{Coord, MoverId};
use bp_lattice::Lattice;

use crate::{Instruction, PathPlan, ScheduleError, ScheduleResult, SessionState};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Callbacks invoked by [`MoveScheduler::run`] while moves are applied.
///
/// `on_move` has a default no-op implementation.  Renderers hook
/// `on_move` to persist one frame per move; [`NoopObserver`] gives the
/// silent mode used to derive the backward caption stream.
pub trait ScheduleObserver {
    /// Called right after `instruction` was applied to `state`.
    fn on_move(&mut self, _instruction: &Instruction, _state: &SessionState) {}
}

/// A [`ScheduleObserver`] that does nothing.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Everything one scheduling pass produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Applied moves in global order.
    pub forward: Vec<Instruction>,

    /// Opposite of every applied move, latest first.  Replayed from the end
    /// state it restores the start state.  An inverse of a move made at
    /// step `s` carries step `max_steps - 1 - s`.
    pub inverse: Vec<Instruction>,

    /// Number of global steps (length of the longest path).
    pub max_steps: u32,

    /// End position of each scheduled mover, in plan order.
    pub final_positions: Vec<(MoverId, Coord)>,
}

impl Schedule {
    /// Forward stream grouped per mover, each list in step order.
    pub fn by_mover(&self) -> BTreeMap<MoverId, Vec<Instruction>> {
        let mut grouped: BTreeMap<MoverId, Vec<Instruction>> = BTreeMap::new();
        for ins in &self.forward {
            grouped.entry(ins.mover).or_default().push(*ins);
        }
        grouped
    }

    pub fn total_tokens(&self) -> usize {
        self.forward.len()
    }
}

// ── MoveScheduler ─────────────────────────────────────────────────────────────

/// Merges per-mover paths into one deterministic instruction stream.
///
/// Moves are applied immediately, one mover at a time; simultaneous moves
/// are never checked against each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveScheduler;

impl MoveScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Apply every path in `plan` to `state`, interleaved step by step.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::UnknownMover`] if the plan names a mover without
    ///   a slot in `state`; checked before anything moves.
    /// - [`ScheduleError::OffLattice`] if a move leaves the lattice.  Paths
    ///   from the path index never do.
    pub fn run<O: ScheduleObserver>(
        &self,
        plan:     &PathPlan,
        state:    &mut SessionState,
        lattice:  &Lattice,
        observer: &mut O,
    ) -> ScheduleResult<Schedule> {
        if let Some(missing) = plan.entries().iter().find(|e| state.position(e.mover).is_none()) {
            return Err(ScheduleError::UnknownMover(missing.mover));
        }

        let max_steps = plan.max_steps();
        let mut forward = Vec::with_capacity(plan.total_tokens());
        let mut inverse = Vec::with_capacity(plan.total_tokens());

        for step in 0..max_steps {
            for entry in plan.entries() {
                if !entry.has_pending_step(step) {
                    continue;
                }

                let instruction = Instruction {
                    mover:     entry.mover,
                    direction: entry.path[step],
                    step:      step as u32,
                };
                let at = state.apply(instruction.mover, instruction.direction, lattice)?;
                tracing::trace!(
                    event = "move_applied",
                    mover = instruction.mover.0,
                    direction = instruction.direction.as_str(),
                    step,
                    x = at.x,
                    y = at.y,
                );

                forward.push(instruction);
                inverse.push(Instruction {
                    mover:     instruction.mover,
                    direction: instruction.direction.opposite(),
                    step:      (max_steps - 1 - step) as u32,
                });
                observer.on_move(&instruction, state);
            }
        }
        inverse.reverse();

        let final_positions = plan
            .entries()
            .iter()
            .filter_map(|e| state.position(e.mover).map(|c| (e.mover, c)))
            .collect();

        tracing::debug!(
            event = "schedule_complete",
            movers = plan.len(),
            steps = max_steps,
            tokens = forward.len(),
        );

        Ok(Schedule {
            forward,
            inverse,
            max_steps: max_steps as u32,
            final_positions,
        })
    }
}
