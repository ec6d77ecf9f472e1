//! `MetadataRenderer<W>`: bridges `Renderer` to a `MetadataWriter`.

use bp_episode::{EpisodeRecord, Frame, Renderer};

use crate::writer::MetadataWriter;
use crate::{OutputError, OutputResult};

/// A [`Renderer`] that writes one metadata entry per finished episode to
/// any [`MetadataWriter`] backend.
///
/// Errors from the writer are stored internally because `Renderer` methods
/// have no return value.  After generating, call [`finish`](Self::finish)
/// and check for errors with [`take_error`](Self::take_error).
pub struct MetadataRenderer<W: MetadataWriter> {
    writer:     W,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: MetadataWriter> MetadataRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Number of episodes handed to the writer without error.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush the writer.  Errors are stored like write errors.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: MetadataWriter> Renderer for MetadataRenderer<W> {
    fn on_final(&mut self, _frame: &Frame<'_>, record: &EpisodeRecord) {
        let result = self.writer.write_episode(record);
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }
}
