//! The renderer contract.
//!
//! A renderer persists what an episode looks like; the core never touches
//! pixels or files itself.  Implementations live downstream (`bp-output`
//! ships an ASCII renderer and a CSV metadata writer).

use bp_core::{Coord, MoverId};
use bp_sampler::BlockLabels;

use crate::EpisodeRecord;

/// Snapshot handed to a [`Renderer`].
///
/// Everything is borrowed from the running episode; copy what you need to
/// keep.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Global step of the move that produced this frame.  `None` for the
    /// start state and for the final frame.
    pub step: Option<u32>,

    /// Current position of every mover, indexed by `MoverId`.
    pub positions: &'a [Coord],

    /// Instruction captions accumulated so far.
    pub captions: &'a [String],

    pub labels: &'a BlockLabels,
}

impl Frame<'_> {
    pub fn position(&self, mover: MoverId) -> Option<Coord> {
        self.positions.get(mover.index()).copied()
    }

    /// Label of the mover at `coord`, if any.  When two movers share a cell
    /// the higher id wins, matching paste order.
    pub fn label_at(&self, coord: Coord) -> Option<char> {
        self.positions
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &p)| p == coord)
            .and_then(|(i, _)| MoverId::try_from(i).ok())
            .and_then(|id| self.labels.get(id))
    }
}

/// Callbacks invoked by [`Episode::generate`](crate::Episode::generate).
///
/// Both methods have default no-op implementations.  Renderers cannot fail
/// the episode; implementations that do I/O store their first error and
/// expose it afterwards.
pub trait Renderer {
    /// Called for the start state and, in forward mode, after every move.
    fn on_frame(&mut self, _frame: &Frame<'_>) {}

    /// Called once with the end state and the finished record.
    fn on_final(&mut self, _frame: &Frame<'_>, _record: &EpisodeRecord) {}
}

/// A [`Renderer`] that does nothing.
pub struct NoopRenderer;

impl Renderer for NoopRenderer {}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_frame(&mut self, frame: &Frame<'_>) {
        (**self).on_frame(frame);
    }

    fn on_final(&mut self, frame: &Frame<'_>, record: &EpisodeRecord) {
        (**self).on_final(frame, record);
    }
}

/// Fan out to two renderers, first `A` then `B`.
impl<A: Renderer, B: Renderer> Renderer for (A, B) {
    fn on_frame(&mut self, frame: &Frame<'_>) {
        self.0.on_frame(frame);
        self.1.on_frame(frame);
    }

    fn on_final(&mut self, frame: &Frame<'_>, record: &EpisodeRecord) {
        self.0.on_final(frame, record);
        self.1.on_final(frame, record);
    }
}
