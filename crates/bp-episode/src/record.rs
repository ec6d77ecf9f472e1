//! The metadata record produced for every episode.

use bp_core::{Coord, EpisodeMode, MoverId};
use bp_sampler::BlockLabels;
use bp_schedule::Instruction;
use serde::{Deserialize, Serialize};

/// One relocated mover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    pub mover:    MoverId,
    pub label:    char,
    pub from:     Coord,
    pub to:       Coord,
    /// Shortest path length, i.e. the mover's share of the token count.
    pub path_len: usize,
}

/// Everything a labeled training example needs, minus the pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub index: u64,

    /// Root seed of the run (the episode RNG is derived from it and `index`).
    pub seed: u64,

    pub mode: EpisodeMode,

    pub labels: BlockLabels,

    /// Relocated movers in selection order.
    pub moves: Vec<MoveSummary>,

    pub max_steps: u32,

    /// Forward instruction stream.
    pub forward: Vec<Instruction>,

    /// Inverted, reversed stream; replayed from the end state it restores
    /// the start.
    pub solution: Vec<Instruction>,

    pub forward_captions: Vec<String>,

    pub solution_captions: Vec<String>,

    /// End position of every mover, indexed by `MoverId`.
    pub final_positions: Vec<Coord>,
}

impl EpisodeRecord {
    /// The caption stream matching `mode`.
    pub fn captions(&self) -> &[String] {
        match self.mode {
            EpisodeMode::Forward  => &self.forward_captions,
            EpisodeMode::Backward => &self.solution_captions,
        }
    }

    /// [`captions`](Self::captions), one per line.
    pub fn caption_text(&self) -> String {
        self.captions().join("\n")
    }

    pub fn total_tokens(&self) -> usize {
        self.forward.len()
    }
}
