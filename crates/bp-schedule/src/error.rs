use bp_core::{Coord, Direction, MoverId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("mover {0} has no position in this session")]
    UnknownMover(MoverId),

    #[error("moving {mover} {direction} from {from} leaves the lattice")]
    OffLattice {
        mover:     MoverId,
        from:      Coord,
        direction: Direction,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
