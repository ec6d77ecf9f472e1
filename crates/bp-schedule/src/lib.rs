//! `bp-schedule`: mover positions and the global instruction stream.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`instruction`] | `Instruction`, `PlannedPath`, `PathPlan`                    |
//! | [`state`]       | `SessionState`: current position of every mover             |
//! | [`scheduler`]   | `MoveScheduler`, `Schedule`, `ScheduleObserver`, `NoopObserver` |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                        |
//!
//! # Interleaving model
//!
//! Each selected mover has its own shortest path.  The scheduler merges them
//! round-robin:
//!
//! ```text
//! for step in 0..max_steps:             max_steps = longest path
//!   for mover in selection order:
//!     if mover has a token at `step`:   shorter paths simply run out
//!       apply it to the mover's position
//!       record it (forward) and its opposite (inverse)
//! inverse.reverse()
//! ```
//!
//! The reversed inverse stream, replayed from the end state, walks every
//! mover back to its start.  It captions a "how the puzzle was solved"
//! render.

pub mod error;
pub mod instruction;
pub mod scheduler;
pub mod state;


pub use error::{ScheduleError, ScheduleResult};
pub use instruction::{Instruction, PathPlan, PlannedPath};
pub use scheduler::{MoveScheduler, NoopObserver, Schedule, ScheduleObserver};
pub use state::SessionState;
