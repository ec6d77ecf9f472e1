//! Human-readable instruction strings.

use bp_core::Direction;
use bp_sampler::{BlockLabels, SamplerResult};
use bp_schedule::Instruction;

/// `"Move block {label} {direction}."`
pub fn caption(label: char, direction: Direction) -> String {
    format!("Move block {label} {direction}.")
}

/// One caption per instruction, in stream order.
///
/// Fails with `SamplerError::UnknownMover` if an instruction names a mover
/// without a label.
pub fn captions(stream: &[Instruction], labels: &BlockLabels) -> SamplerResult<Vec<String>> {
    stream
        .iter()
        .map(|ins| Ok(caption(labels.require(ins.mover)?, ins.direction)))
        .collect()
}
