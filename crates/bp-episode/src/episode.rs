//! The per-session pipeline.

use bp_core::{Direction, EpisodeMode, MoverId, PuzzleConfig, SessionRng};
use bp_lattice::{BfsPathFinder, Lattice, MarkedCellSet, PathIndex};
use bp_sampler::{BlockLabels, PuzzleInstance, PuzzleSampler, SamplerError};
use bp_schedule::{
    Instruction, MoveScheduler, NoopObserver, PathPlan, ScheduleObserver, SessionState,
};

use crate::{
    EpisodeRecord, EpisodeResult, Frame, MoveSummary, Renderer, caption, captions,
};

/// Immutable puzzle setup from which any number of episodes are generated.
///
/// Build one with [`EpisodeBuilder`](crate::EpisodeBuilder).  Each call to
/// [`generate`](Self::generate) owns its own RNG, path index, and mover
/// state; nothing carries over between episodes.
pub struct Episode {
    pub(crate) config:  PuzzleConfig,
    pub(crate) lattice: Lattice,
    pub(crate) movers:  MarkedCellSet,
    pub(crate) labels:  BlockLabels,
    pub(crate) sampler: PuzzleSampler,
    pub(crate) fixed:   Option<PuzzleInstance>,
}

impl Episode {
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn movers(&self) -> &MarkedCellSet {
        &self.movers
    }

    pub fn labels(&self) -> &BlockLabels {
        &self.labels
    }

    /// Generate episode `index` of the run.
    ///
    /// Same config, same `index`: same record and same frames.
    ///
    /// # Errors
    ///
    /// Any planning failure (no movers to pick, no destination within the
    /// threshold, a path missing from the index) aborts the episode before
    /// anything is rendered.  The start frame is only emitted once the plan
    /// is complete.
    pub fn generate<R: Renderer>(&self, index: u64, renderer: &mut R) -> EpisodeResult<EpisodeRecord> {
        let mode = self.config.mode;
        tracing::info!(
            event = "episode_start",
            index,
            seed = self.config.seed,
            mode = mode.as_str(),
            movers = self.movers.len(),
        );

        let mut rng = SessionRng::child(self.config.seed, index);
        let instance = match &self.fixed {
            Some(fixed) => fixed.clone(),
            None => self.sampler.sample(&self.lattice, &self.movers, &mut rng)?,
        };

        let paths = PathIndex::build(&BfsPathFinder, &self.lattice, &self.movers);
        let plan = instance
            .assignments()
            .iter()
            .map(|a| -> EpisodeResult<(MoverId, Vec<Direction>)> {
                Ok((a.mover, paths.path(a.mover, a.to)?.to_vec()))
            })
            .collect::<EpisodeResult<PathPlan>>()?;

        let moves = instance
            .assignments()
            .iter()
            .map(|a| -> EpisodeResult<MoveSummary> {
                Ok(MoveSummary {
                    mover:    a.mover,
                    label:    self.labels.require(a.mover)?,
                    from:     a.from,
                    to:       a.to,
                    path_len: plan.path(a.mover).map_or(0, <[Direction]>::len),
                })
            })
            .collect::<EpisodeResult<Vec<_>>>()?;

        let mut state = SessionState::from_movers(&self.movers);
        renderer.on_frame(&Frame {
            step:      None,
            positions: state.positions(),
            captions:  &[],
            labels:    &self.labels,
        });

        let scheduler = MoveScheduler::new();
        let schedule = match mode {
            EpisodeMode::Forward => {
                let mut frames = FrameObserver::new(&mut *renderer, &self.labels, plan.total_tokens());
                let schedule = scheduler.run(&plan, &mut state, &self.lattice, &mut frames)?;
                if let Some(err) = frames.error {
                    return Err(err.into());
                }
                schedule
            }
            EpisodeMode::Backward => {
                scheduler.run(&plan, &mut state, &self.lattice, &mut NoopObserver)?
            }
        };

        let record = EpisodeRecord {
            index,
            seed: self.config.seed,
            mode,
            labels: self.labels.clone(),
            moves,
            max_steps: schedule.max_steps,
            forward_captions: captions(&schedule.forward, &self.labels)?,
            solution_captions: captions(&schedule.inverse, &self.labels)?,
            forward: schedule.forward,
            solution: schedule.inverse,
            final_positions: state.positions().to_vec(),
        };

        renderer.on_final(
            &Frame {
                step:      None,
                positions: state.positions(),
                captions:  record.captions(),
                labels:    &self.labels,
            },
            &record,
        );

        tracing::info!(
            event = "episode_complete",
            index,
            steps = record.max_steps,
            tokens = record.total_tokens(),
        );
        Ok(record)
    }
}

// ── Forward-mode frames ───────────────────────────────────────────────────────

/// Turns every applied move into a captioned frame.
///
/// A move by an unlabeled mover is recorded in `error` and fails the
/// episode once the scheduler returns; its frame still goes out so the
/// frame count matches the move count.
pub(crate) struct FrameObserver<'a, R: Renderer> {
    renderer: &'a mut R,
    labels:   &'a BlockLabels,
    pub(crate) captions: Vec<String>,
    pub(crate) error:    Option<SamplerError>,
}

impl<'a, R: Renderer> FrameObserver<'a, R> {
    pub(crate) fn new(renderer: &'a mut R, labels: &'a BlockLabels, tokens: usize) -> Self {
        Self { renderer, labels, captions: Vec::with_capacity(tokens), error: None }
    }
}

impl<R: Renderer> ScheduleObserver for FrameObserver<'_, R> {
    fn on_move(&mut self, instruction: &Instruction, state: &SessionState) {
        match self.labels.require(instruction.mover) {
            Ok(label) => self.captions.push(caption(label, instruction.direction)),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self.renderer.on_frame(&Frame {
            step:      Some(instruction.step),
            positions: state.positions(),
            captions:  &self.captions,
            labels:    self.labels,
        });
    }
}
