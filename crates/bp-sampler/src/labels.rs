//! Single-letter block labels used in captions and rendered frames.

use bp_core::MoverId;
use bp_lattice::MarkedCellSet;

use crate::{SamplerError, SamplerResult};

/// Label symbols, handed out in mover creation order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `MoverId → label`, indexed by `MoverId`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockLabels {
    labels: Vec<char>,
}

impl BlockLabels {
    /// Label every marked cell: `MoverId(0)` is `A`, `MoverId(1)` is `B`, ….
    ///
    /// # Errors
    ///
    /// [`SamplerError::AlphabetExhausted`] for more than 26 movers.
    pub fn assign(movers: &MarkedCellSet) -> SamplerResult<Self> {
        if movers.len() > ALPHABET.len() {
            return Err(SamplerError::AlphabetExhausted {
                movers:    movers.len(),
                available: ALPHABET.len(),
            });
        }
        let labels = ALPHABET[..movers.len()].iter().map(|&b| b as char).collect();
        Ok(Self { labels })
    }

    pub fn get(&self, mover: MoverId) -> Option<char> {
        self.labels.get(mover.index()).copied()
    }

    /// Like [`get`](Self::get) but reports the missing id.
    pub fn require(&self, mover: MoverId) -> SamplerResult<char> {
        self.get(mover).ok_or(SamplerError::UnknownMover(mover))
    }

    /// `(MoverId, label)` pairs in mover order.
    pub fn iter(&self) -> impl Iterator<Item = (MoverId, char)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| MoverId::try_from(i).ok().map(|id| (id, c)))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
