//! Instructions and the per-mover path plan the scheduler consumes.

use bp_core::{Direction, MoverId};

/// One unit move of one mover at one global step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    pub mover:     MoverId,
    pub direction: Direction,
    /// Global step index the move belongs to.
    pub step:      u32,
}

/// A mover's full shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPath {
    pub mover: MoverId,
    pub path:  Vec<Direction>,
}

impl PlannedPath {
    /// `true` if the path still has a token at `step`.
    ///
    /// Paths shorter than the longest one in the plan run out early; that
    /// is routine, and the scheduler skips the mover for the remaining
    /// steps.
    #[inline]
    pub fn has_pending_step(&self, step: usize) -> bool {
        step < self.path.len()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// `MoverId → path`, in the order movers are visited within a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPlan {
    entries: Vec<PlannedPath>,
}

impl PathPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `mover` with its path.  Call order is visiting order.
    pub fn push(&mut self, mover: MoverId, path: Vec<Direction>) {
        self.entries.push(PlannedPath { mover, path });
    }

    pub fn entries(&self) -> &[PlannedPath] {
        &self.entries
    }

    pub fn path(&self, mover: MoverId) -> Option<&[Direction]> {
        self.entries
            .iter()
            .find(|e| e.mover == mover)
            .map(|e| e.path.as_slice())
    }

    /// Length of the longest path: the number of global steps.
    pub fn max_steps(&self) -> usize {
        self.entries.iter().map(PlannedPath::len).max().unwrap_or(0)
    }

    /// Sum of all path lengths: the number of instructions emitted.
    pub fn total_tokens(&self) -> usize {
        self.entries.iter().map(PlannedPath::len).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(MoverId, Vec<Direction>)> for PathPlan {
    fn from_iter<I: IntoIterator<Item = (MoverId, Vec<Direction>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(mover, path)| PlannedPath { mover, path })
                .collect(),
        }
    }
}
