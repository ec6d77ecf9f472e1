//! Flat row types written by the CSV backend.

use bp_episode::EpisodeRecord;

/// One generated episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRow {
    pub index:        u64,
    pub seed:         u64,
    pub mode:         &'static str,
    /// Labels of the relocated blocks, in scheduling order (e.g. `"CF"`).
    pub moved:        String,
    pub max_steps:    u32,
    pub total_tokens: u64,
    /// The mode's caption stream, one caption per line.
    pub captions:     String,
}

impl EpisodeRow {
    pub fn from_record(record: &EpisodeRecord) -> Self {
        Self {
            index:        record.index,
            seed:         record.seed,
            mode:         record.mode.as_str(),
            moved:        record.moves.iter().map(|m| m.label).collect(),
            max_steps:    record.max_steps,
            total_tokens: record.total_tokens() as u64,
            captions:     record.caption_text(),
        }
    }
}

/// One relocated block of one episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow {
    pub episode:  u64,
    pub mover:    u32,
    pub label:    char,
    pub from_x:   u32,
    pub from_y:   u32,
    pub to_x:     u32,
    pub to_y:     u32,
    pub path_len: u64,
}

impl MoveRow {
    /// One row per entry of `record.moves`, in scheduling order.
    pub fn from_record(record: &EpisodeRecord) -> Vec<Self> {
        record
            .moves
            .iter()
            .map(|m| Self {
                episode:  record.index,
                mover:    m.mover.0,
                label:    m.label,
                from_x:   m.from.x,
                from_y:   m.from.y,
                to_x:     m.to.x,
                to_y:     m.to.y,
                path_len: m.path_len as u64,
            })
            .collect()
    }
}
