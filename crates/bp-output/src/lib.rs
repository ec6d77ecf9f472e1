//! `bp-output`: reference renderers for generated episodes.
//!
//! | Type                  | Implements       | Produces                                  |
//! |-----------------------|------------------|-------------------------------------------|
//! | [`AsciiRenderer`]     | `Renderer`       | text frames (`.` empty, label per block)  |
//! | [`CsvWriter`]         | [`MetadataWriter`] | `episodes.csv`, `moves.csv`             |
//! | [`JsonLinesWriter`]   | [`MetadataWriter`] | `episodes.jsonl` (full records)         |
//! | [`MetadataRenderer`]  | `Renderer`       | drives any `MetadataWriter` from `on_final` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bp_output::{CsvWriter, MetadataRenderer};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut meta = MetadataRenderer::new(writer);
//! for i in 0..n {
//!     episode.generate(i, &mut meta)?;
//! }
//! meta.finish();
//! meta.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod ascii;
pub mod csv;
pub mod error;
pub mod jsonl;
pub mod renderer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use ascii::AsciiRenderer;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use jsonl::JsonLinesWriter;
pub use renderer::MetadataRenderer;
pub use row::{EpisodeRow, MoveRow};
pub use writer::MetadataWriter;
