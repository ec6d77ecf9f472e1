//! `bp-core`: foundational types for the block puzzle episode generator.
//!
//! This crate is a dependency of every other `bp-*` crate.  It has no `bp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `MoverId`, `CellId`                                   |
//! | [`coord`]       | `Coord`, Manhattan distance, unit steps               |
//! | [`direction`]   | `Direction` token (up / down / left / right)          |
//! | [`config`]      | `PuzzleConfig`, `EpisodeMode`                         |
//! | [`rng`]         | `SessionRng`                                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EpisodeMode, PuzzleConfig};
pub use coord::Coord;
pub use direction::{Direction, ParseDirectionError};
pub use error::{CoreError, CoreResult};
pub use ids::{CellId, MoverId};
pub use rng::SessionRng;
