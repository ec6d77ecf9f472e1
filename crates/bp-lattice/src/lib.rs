//! `bp-lattice`: grid lattice, marked movers, and shortest paths.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`lattice`] | `Lattice` (dense W×H grid + per-cell neighbor table)        |
//! | [`marked`]  | `MarkedCell`, `MarkedCellSet` (the movable blocks)          |
//! | [`paths`]   | `PathFinder` trait, `BfsPathFinder`, `PathTable`, `PathIndex` |
//! | [`error`]   | `LatticeError`, `LatticeResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod lattice;
pub mod marked;
pub mod paths;

#[cfg(test)]
mod tests;

pub use error::{LatticeError, LatticeResult};
pub use lattice::{Lattice, Links};
pub use marked::{MarkedCell, MarkedCellSet};
pub use paths::{BfsPathFinder, PathFinder, PathIndex, PathTable};
