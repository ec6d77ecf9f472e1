//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `episodes.csv`
//! - `moves.csv`

use std::fs::File;
use std::path::Path;

use bp_episode::EpisodeRecord;
use csv::Writer;

use crate::writer::MetadataWriter;
use crate::{EpisodeRow, MoveRow, OutputResult};

/// Writes episode metadata to two CSV files.
pub struct CsvWriter {
    episodes: Writer<File>,
    moves:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut episodes = Writer::from_path(dir.join("episodes.csv"))?;
        episodes.write_record(["index", "seed", "mode", "moved", "max_steps", "total_tokens", "captions"])?;

        let mut moves = Writer::from_path(dir.join("moves.csv"))?;
        moves.write_record(["episode", "mover", "label", "from_x", "from_y", "to_x", "to_y", "path_len"])?;

        Ok(Self {
            episodes,
            moves,
            finished: false,
        })
    }

    fn write_row(&mut self, row: &EpisodeRow) -> OutputResult<()> {
        self.episodes.write_record(&[
            row.index.to_string(),
            row.seed.to_string(),
            row.mode.to_owned(),
            row.moved.clone(),
            row.max_steps.to_string(),
            row.total_tokens.to_string(),
            row.captions.clone(),
        ])?;
        Ok(())
    }

    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record(&[
                row.episode.to_string(),
                row.mover.to_string(),
                row.label.to_string(),
                row.from_x.to_string(),
                row.from_y.to_string(),
                row.to_x.to_string(),
                row.to_y.to_string(),
                row.path_len.to_string(),
            ])?;
        }
        Ok(())
    }
}

impl MetadataWriter for CsvWriter {
    fn write_episode(&mut self, record: &EpisodeRecord) -> OutputResult<()> {
        self.write_row(&EpisodeRow::from_record(record))?;
        self.write_moves(&MoveRow::from_record(record))
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.episodes.flush()?;
        self.moves.flush()?;
        Ok(())
    }
}
