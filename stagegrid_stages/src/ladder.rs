// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use smallvec::SmallVec;

/// The preferred initial stage index for a fresh session.
///
/// Ladders shorter than three stages clamp this via
/// [`StageLadder::default_stage`].
pub const DEFAULT_STAGE: usize = 2;

/// An ordered table of items-per-row counts, one per discrete zoom stage.
///
/// Stage 0 holds the fewest items per row (the most magnified layout, with
/// the largest cells); the last stage holds the most (the most compressed
/// layout). Entries are strictly increasing and at least 1.
///
/// A ladder is immutable once built. Hosts that react to device or
/// orientation changes swap in a new ladder rather than mutating one in
/// place; see [`ladder_for`](crate::ladder_for).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageLadder {
    stages: SmallVec<[u32; 8]>,
}

impl StageLadder {
    /// Creates a ladder from items-per-row counts, coarsest stage first.
    ///
    /// # Errors
    ///
    /// Returns an error if `stages` is empty, contains a zero, or is not
    /// strictly increasing. These are contract violations by the caller:
    /// a valid stage table always has at least one stage, every stage lays
    /// out at least one item per row, and each stage is strictly more
    /// compressed than the one before it.
    pub fn new(stages: &[u32]) -> Result<Self, StageLadderError> {
        if stages.is_empty() {
            return Err(StageLadderError::Empty);
        }
        for (index, &items) in stages.iter().enumerate() {
            if items == 0 {
                return Err(StageLadderError::ZeroItemsPerRow { index });
            }
            if index > 0 && items <= stages[index - 1] {
                return Err(StageLadderError::NotStrictlyIncreasing { index });
            }
        }
        Ok(Self {
            stages: SmallVec::from_slice(stages),
        })
    }

    /// Builds a ladder from entries already known to satisfy the contract.
    ///
    /// Used for the built-in device tables, which are valid by construction.
    pub(crate) fn from_validated(stages: &[u32]) -> Self {
        debug_assert!(
            Self::new(stages).is_ok(),
            "built-in stage tables must satisfy the ladder contract"
        );
        Self {
            stages: SmallVec::from_slice(stages),
        }
    }

    /// Returns the number of stages. Always at least 1.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the index of the most compressed stage.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.stages.len() - 1
    }

    /// Clamps a stage index into the valid range.
    ///
    /// Out-of-range requests saturate to the nearest bound; they never
    /// fail. Clamping is idempotent.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Returns the items-per-row count at `index`, clamped into range.
    #[must_use]
    pub fn items_per_row(&self, index: usize) -> u32 {
        self.stages[self.clamp_index(index)]
    }

    /// Returns the preferred initial stage, clamped into this ladder.
    #[must_use]
    pub fn default_stage(&self) -> usize {
        self.clamp_index(DEFAULT_STAGE)
    }

    /// Returns `true` if `index` clamps to the most magnified stage.
    #[must_use]
    pub fn is_coarsest(&self, index: usize) -> bool {
        self.clamp_index(index) == 0
    }

    /// Returns `true` if `index` clamps to the most compressed stage.
    #[must_use]
    pub fn is_finest(&self, index: usize) -> bool {
        self.clamp_index(index) == self.last_index()
    }

    /// Returns the stage entries as a slice, coarsest first.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.stages
    }
}

/// Contract violations reported by [`StageLadder::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageLadderError {
    /// The ladder has no stages at all.
    Empty,
    /// The entry at `index` is zero; every stage needs at least one item
    /// per row.
    ZeroItemsPerRow {
        /// Position of the offending entry.
        index: usize,
    },
    /// The entry at `index` does not increase over its predecessor.
    NotStrictlyIncreasing {
        /// Position of the offending entry.
        index: usize,
    },
}

impl fmt::Display for StageLadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "stage ladder is empty"),
            Self::ZeroItemsPerRow { index } => {
                write!(f, "stage {index} has zero items per row")
            }
            Self::NotStrictlyIncreasing { index } => {
                write!(f, "stage {index} is not strictly more compressed than its predecessor")
            }
        }
    }
}

impl core::error::Error for StageLadderError {}
