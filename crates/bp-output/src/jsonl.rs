//! JSON-lines output backend: one full `EpisodeRecord` per line in
//! `episodes.jsonl`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bp_episode::EpisodeRecord;

use crate::writer::MetadataWriter;
use crate::OutputResult;

pub struct JsonLinesWriter {
    out:      BufWriter<File>,
    finished: bool,
}

impl JsonLinesWriter {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let file = File::create(dir.join("episodes.jsonl"))?;
        Ok(Self { out: BufWriter::new(file), finished: false })
    }
}

impl MetadataWriter for JsonLinesWriter {
    fn write_episode(&mut self, record: &EpisodeRecord) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
