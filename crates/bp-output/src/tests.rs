//! Integration tests for bp-output.

#[cfg(test)]
mod helpers {
    use bp_core::{EpisodeMode, PuzzleConfig};
    use bp_episode::{Episode, EpisodeBuilder};
    use tempfile::TempDir;

    pub fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    pub fn episode(mode: EpisodeMode) -> Episode {
        EpisodeBuilder::new(PuzzleConfig { mode, ..PuzzleConfig::default() })
            .build()
            .unwrap()
    }
}

// ── ASCII ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ascii_tests {
    use bp_core::{Coord, EpisodeMode, PuzzleConfig};
    use bp_episode::{EpisodeBuilder, Frame, Renderer};

    use super::helpers::episode;
    use crate::AsciiRenderer;

    #[test]
    fn labeled_grid_with_captions() {
        let cfg = PuzzleConfig { width: 5, height: 3, block_side: 1, complexity: 1, ..PuzzleConfig::default() };
        let ep = EpisodeBuilder::new(cfg)
            .positions(vec![Coord::new(1, 1), Coord::new(2, 1)])
            .build()
            .unwrap();
        let positions = [Coord::new(1, 1), Coord::new(2, 2)];
        let captions = vec!["Move block B down.".to_owned()];
        let frame = Frame { step: Some(0), positions: &positions, captions: &captions, labels: ep.labels() };

        let text = AsciiRenderer::new(5, 3).draw(&frame);
        assert_eq!(text, ". . . . .\n. A . . .\n. . B . .\n\nMove block B down.\n");
    }

    #[test]
    fn unlabeled_grid_uses_stars() {
        let cfg = PuzzleConfig { width: 3, height: 2, block_side: 1, complexity: 1, ..PuzzleConfig::default() };
        let ep = EpisodeBuilder::new(cfg)
            .positions(vec![Coord::new(0, 0), Coord::new(2, 1)])
            .build()
            .unwrap();
        let positions = ep.movers().origins();
        let frame = Frame { step: None, positions: &positions, captions: &[], labels: ep.labels() };

        let text = AsciiRenderer::new(3, 2).unlabeled().draw(&frame);
        assert_eq!(text, "* . .\n. . *\n");
    }

    #[test]
    fn start_frame_shows_the_whole_block() {
        let ep = episode(EpisodeMode::Backward);
        let mut ascii = AsciiRenderer::from_config(ep.config());
        ep.generate(0, &mut ascii).unwrap();

        assert_eq!(ascii.frames().len(), 1);
        let start = &ascii.frames()[0];
        assert_eq!(start.lines().count(), 11);
        assert_eq!(start.lines().nth(4), Some(". . . . A D G . . . ."));
        assert_eq!(start.lines().nth(6), Some(". . . . C F I . . . ."));
        assert!(ascii.final_frame().is_some());
    }

    #[test]
    fn forward_episode_frame_per_move() {
        let ep = episode(EpisodeMode::Forward);
        let mut ascii = AsciiRenderer::from_config(ep.config());
        let record = ep.generate(5, &mut ascii).unwrap();

        assert_eq!(ascii.frames().len(), 1 + record.total_tokens());
        let last = ascii.final_frame().unwrap();
        assert!(last.ends_with(&format!("{}\n", record.caption_text())));

        let drained = ascii.drain();
        assert_eq!(drained.len(), 2 + record.total_tokens());
        assert!(ascii.frames().is_empty());
        assert!(ascii.final_frame().is_none());
    }

    #[test]
    fn renderer_default_methods_are_noops() {
        struct Silent;
        impl Renderer for Silent {}
        let ep = episode(EpisodeMode::Forward);
        assert!(ep.generate(0, &mut Silent).is_ok());
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use bp_core::EpisodeMode;

    use super::helpers::{episode, tmp};
    use crate::csv::CsvWriter;
    use crate::renderer::MetadataRenderer;
    use crate::writer::MetadataWriter;

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("episodes.csv").exists());
        assert!(dir.path().join("moves.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("episodes.csv")),
            ["index", "seed", "mode", "moved", "max_steps", "total_tokens", "captions"],
        );
        assert_eq!(
            headers(&dir.path().join("moves.csv")),
            ["episode", "mover", "label", "from_x", "from_y", "to_x", "to_y", "path_len"],
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        let ep = episode(EpisodeMode::Backward);
        let dir = tmp();
        let mut meta = MetadataRenderer::new(CsvWriter::new(dir.path()).unwrap());

        let records: Vec<_> = (0..3).map(|i| ep.generate(i, &mut meta).unwrap()).collect();
        meta.finish();
        assert!(meta.take_error().is_none(), "no write errors expected");
        assert_eq!(meta.written(), 3);

        let mut rdr = csv::Reader::from_path(dir.path().join("episodes.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(&row[0], record.index.to_string());
            assert_eq!(&row[1], "42");
            assert_eq!(&row[2], "backward");
            assert_eq!(row[3].chars().count(), 2);
            assert_eq!(&row[5], record.total_tokens().to_string());
            assert_eq!(&row[6], record.caption_text()); // multi-line field survives quoting
        }

        // complexity 2 → two move rows per episode
        let mut rdr = csv::Reader::from_path(dir.path().join("moves.csv")).unwrap();
        let moves: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(moves.len(), 6);
        let first = &records[0].moves[0];
        assert_eq!(&moves[0][0], "0");
        assert_eq!(&moves[0][2], first.label.to_string());
        assert_eq!(&moves[0][5], first.to.x.to_string());
        assert_eq!(&moves[0][7], first.path_len.to_string());
    }
}

// ── JSON lines ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod jsonl_tests {
    use bp_core::EpisodeMode;
    use bp_episode::EpisodeRecord;

    use super::helpers::{episode, tmp};
    use crate::{JsonLinesWriter, MetadataRenderer};

    #[test]
    fn one_record_per_line() {
        let ep = episode(EpisodeMode::Forward);
        let dir = tmp();
        let mut meta = MetadataRenderer::new(JsonLinesWriter::new(dir.path()).unwrap());
        let records: Vec<_> = (0..2).map(|i| ep.generate(i, &mut meta).unwrap()).collect();
        meta.finish();
        assert!(meta.take_error().is_none());

        let text = std::fs::read_to_string(dir.path().join("episodes.jsonl")).unwrap();
        let parsed: Vec<EpisodeRecord> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(parsed, records);
    }
}

// ── Error storage ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod renderer_tests {
    use bp_core::EpisodeMode;
    use bp_episode::EpisodeRecord;

    use super::helpers::episode;
    use crate::{MetadataRenderer, MetadataWriter, OutputError, OutputResult};

    /// Fails every write with a numbered error.
    #[derive(Default)]
    struct Failing {
        calls: u32,
    }

    impl MetadataWriter for Failing {
        fn write_episode(&mut self, _record: &EpisodeRecord) -> OutputResult<()> {
            self.calls += 1;
            Err(std::io::Error::other(format!("write {}", self.calls)).into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let ep = episode(EpisodeMode::Backward);
        let mut meta = MetadataRenderer::new(Failing::default());
        ep.generate(0, &mut meta).unwrap();
        ep.generate(1, &mut meta).unwrap();
        meta.finish();

        assert_eq!(meta.written(), 0);
        match meta.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "write 1"),
            other => panic!("expected stored I/O error, got {other:?}"),
        }
        assert!(meta.take_error().is_none());
        assert_eq!(meta.into_writer().calls, 2);
    }
}
