//! Puzzle generation configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to `bp-episode`.  Every field has a default
//! matching the reference dataset: an 11×11 lattice with a 3×3 block in the
//! middle, two movers per puzzle, destinations at most 3 steps away.

use crate::{Coord, CoreError, CoreResult};

// ── EpisodeMode ───────────────────────────────────────────────────────────────

/// Which instruction stream an episode renders and captions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EpisodeMode {
    /// One frame per forward move, captioned with the moves applied so far.
    Forward,
    /// Moves applied silently; the final record is captioned with the
    /// inverted, reversed stream that walks the end state back to the start.
    #[default]
    Backward,
}

impl EpisodeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EpisodeMode::Forward  => "forward",
            EpisodeMode::Backward => "backward",
        }
    }
}

impl std::fmt::Display for EpisodeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PuzzleConfig ──────────────────────────────────────────────────────────────

/// Top-level generation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PuzzleConfig {
    /// Lattice width in cells.
    pub width: u32,

    /// Lattice height in cells.
    pub height: u32,

    /// Side of the square block of marked cells centered in the lattice.
    pub block_side: u32,

    /// Number of movers relocated per puzzle.
    pub complexity: usize,

    /// Maximum Manhattan distance between a mover and its destination.
    /// `None` disables the filter.
    pub distance_threshold: Option<u32>,

    /// Root RNG seed.  The same seed always produces identical episodes.
    pub seed: u64,

    /// Which stream is rendered and captioned.
    pub mode: EpisodeMode,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width:              11,
            height:             11,
            block_side:         3,
            complexity:         2,
            distance_threshold: Some(3),
            seed:               42,
            mode:               EpisodeMode::Backward,
        }
    }
}

impl PuzzleConfig {
    /// Check the values a lattice and sampler can actually be built from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "lattice must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if u64::from(self.width) * u64::from(self.height) > u64::from(u32::MAX) {
            return Err(CoreError::Config(format!(
                "{}x{} lattice has more cells than a cell id can address",
                self.width, self.height
            )));
        }
        if self.block_side > self.width || self.block_side > self.height {
            return Err(CoreError::Config(format!(
                "block side {} does not fit a {}x{} lattice",
                self.block_side, self.width, self.height
            )));
        }
        if self.complexity == 0 {
            return Err(CoreError::Config("complexity must be at least 1".into()));
        }
        Ok(())
    }

    /// Positions of the centered `block_side × block_side` square.
    ///
    /// Enumerated column by column (x outer, y inner); the order fixes
    /// mover ids and therefore block labels.
    pub fn block_positions(&self) -> Vec<Coord> {
        let side = self.block_side;
        let x0 = self.width.saturating_sub(side) / 2;
        let y0 = self.height.saturating_sub(side) / 2;
        (0..side)
            .flat_map(|dx| (0..side).map(move |dy| Coord::new(x0 + dx, y0 + dy)))
            .collect()
    }
}
