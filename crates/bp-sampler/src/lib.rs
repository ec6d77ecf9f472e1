//! `bp-sampler`: which blocks move, and where to.
//!
//! # Crate layout
//!
//! | Module            | Contents                                             |
//! |-------------------|------------------------------------------------------|
//! | [`labels`]        | `BlockLabels` (A, B, C, … per mover)                 |
//! | [`combinations`]  | `Combinations`: lazy k-combinations of a slice        |
//! | [`sampler`]       | `PuzzleSampler`, `PuzzleInstance`, `Assignment`      |
//! | [`error`]         | `SamplerError`, `SamplerResult<T>`                   |
//!
//! # Sampling model (summary)
//!
//! ```text
//! selected     = uniform sample of `complexity` movers, without replacement
//! universe     = lattice coordinates − marked coordinates
//! candidates   = k-combinations of universe, k = complexity
//!                (kept only if every |mover − destination|₁ ≤ threshold)
//! destinations = shuffle(candidates)[0], assigned positionally to `selected`
//! ```

pub mod combinations;
pub mod error;
pub mod labels;
pub mod sampler;


pub use combinations::Combinations;
pub use error::{SamplerError, SamplerResult};
pub use labels::{ALPHABET, BlockLabels};
pub use sampler::{Assignment, PuzzleInstance, PuzzleSampler};
