//! The `MetadataWriter` trait implemented by all backend writers.

use bp_episode::EpisodeRecord;

use crate::OutputResult;

/// Trait implemented by the CSV and JSON-lines writers.
///
/// Driven by [`MetadataRenderer`](crate::MetadataRenderer), which stores
/// errors instead of propagating them.
pub trait MetadataWriter {
    /// Write everything known about one finished episode.
    fn write_episode(&mut self, record: &EpisodeRecord) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
