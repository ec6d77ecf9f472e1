use bp_core::CoreError;
use bp_lattice::LatticeError;
use bp_sampler::SamplerError;
use bp_schedule::ScheduleError;
use thiserror::Error;

/// Any failure while building or generating an episode.  Planning errors
/// abort the whole episode; nothing is rendered past the failure.
#[derive(Debug, Error)]
pub enum EpisodeError {
    #[error("configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("sampling error: {0}")]
    Sampler(#[from] SamplerError),

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type EpisodeResult<T> = Result<T, EpisodeError>;
