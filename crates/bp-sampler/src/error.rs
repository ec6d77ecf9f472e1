use bp_core::{Coord, MoverId};
use bp_lattice::LatticeError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    #[error("{movers} movers exceed the {available} available block labels")]
    AlphabetExhausted { movers: usize, available: usize },

    #[error("cannot select {requested} movers from {available}")]
    NotEnoughMovers { requested: usize, available: usize },

    #[error("no destination combination of size {complexity} satisfies threshold {threshold:?}")]
    NoDestinations { complexity: usize, threshold: Option<u32> },

    #[error("mover {0} not found")]
    UnknownMover(MoverId),

    #[error("mover {0} is assigned more than once")]
    DuplicateMover(MoverId),

    #[error("destination {0} is already taken")]
    DestinationConflict(Coord),

    #[error("lattice error: {0}")]
    Lattice(#[from] LatticeError),
}

pub type SamplerResult<T> = Result<T, SamplerError>;
