//! `bp-episode`: one puzzle session, end to end.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`builder`]   | `EpisodeBuilder` (config + optional block/target overrides) |
//! | [`episode`]   | `Episode`, the per-session pipeline                       |
//! | [`renderer`]  | `Renderer` trait, `Frame`, `NoopRenderer`                 |
//! | [`caption`]   | `caption`, `captions`: instruction strings                |
//! | [`record`]    | `EpisodeRecord`, `MoveSummary`                            |
//! | [`error`]     | `EpisodeError`, `EpisodeResult<T>`                        |
//!
//! # Session pipeline
//!
//! ```text
//! Episode::generate(index, renderer)
//!   ├─ SessionRng::child(seed, index)
//!   ├─ PuzzleSampler::sample            (or the explicit targets)
//!   ├─ PathIndex::build(BfsPathFinder)  fresh per session
//!   ├─ renderer.on_frame(step = None)   start state
//!   ├─ MoveScheduler::run               on_frame per move in Forward mode
//!   └─ renderer.on_final(frame, record)
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! let episode = EpisodeBuilder::new(PuzzleConfig::default()).build()?;
//! let record = episode.generate(0, &mut NoopRenderer)?;
//! println!("{}", record.caption_text());
//! ```

pub mod builder;
pub mod caption;
pub mod episode;
pub mod error;
pub mod record;
pub mod renderer;


pub use builder::EpisodeBuilder;
pub use caption::{caption, captions};
pub use episode::Episode;
pub use error::{EpisodeError, EpisodeResult};
pub use record::{EpisodeRecord, MoveSummary};
pub use renderer::{Frame, NoopRenderer, Renderer};
