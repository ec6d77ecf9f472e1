//! Fluent builder for constructing an [`Episode`].

use bp_core::{Coord, MoverId, PuzzleConfig};
use bp_lattice::{Lattice, MarkedCellSet};
use bp_sampler::{BlockLabels, PuzzleInstance, PuzzleSampler};

use crate::{Episode, EpisodeResult};

/// Fluent builder for [`Episode`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                         |
/// |-----------------|-------------------------------------------------|
/// | `.positions(v)` | `config.block_positions()` (centered square)    |
/// | `.targets(v)`   | Random destinations from `PuzzleSampler`        |
///
/// # Example
///
/// ```rust,ignore
/// let episode = EpisodeBuilder::new(config)
///     .positions(vec![Coord::new(4, 4)])
///     .targets(vec![(MoverId(0), Coord::new(0, 0))])
///     .build()?;
/// let record = episode.generate(0, &mut NoopRenderer)?;
/// ```
pub struct EpisodeBuilder {
    config:    PuzzleConfig,
    positions: Option<Vec<Coord>>,
    targets:   Option<Vec<(MoverId, Coord)>>,
}

impl EpisodeBuilder {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config, positions: None, targets: None }
    }

    /// Place the marked cells explicitly.  Order fixes mover ids and labels.
    pub fn positions(mut self, positions: Vec<Coord>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Relocate exactly these movers to these cells in every episode,
    /// bypassing the sampler.  Pair order is the scheduling order.
    pub fn targets(mut self, targets: Vec<(MoverId, Coord)>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Validate the configuration, build the lattice and the marked cells,
    /// and return a ready-to-generate [`Episode`].
    pub fn build(self) -> EpisodeResult<Episode> {
        self.config.validate()?;

        let lattice = Lattice::new(self.config.width, self.config.height);
        let positions = self
            .positions
            .unwrap_or_else(|| self.config.block_positions());
        let movers = MarkedCellSet::new(&lattice, &positions)?;
        let labels = BlockLabels::assign(&movers)?;

        let fixed = match self.targets {
            Some(targets) => Some(PuzzleInstance::explicit(&lattice, &movers, &targets)?),
            None => None,
        };

        Ok(Episode {
            sampler: PuzzleSampler::from_config(&self.config),
            config:  self.config,
            lattice,
            movers,
            labels,
            fixed,
        })
    }
}
