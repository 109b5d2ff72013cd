// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for mapping and notification failures.

use core::fmt;

use crate::Partition;

/// Which count snapshot a bounds check was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountSource {
    /// Counts reported by the provider at the time of the call.
    Fresh,
    /// Counts captured by the last [`total_count`](crate::PartitionedAdapter::total_count).
    Captured,
}

impl fmt::Display for CountSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fresh => "fresh",
            Self::Captured => "captured",
        })
    }
}

/// A half-open range of local positions, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalRange {
    /// First position (inclusive).
    pub start: usize,
    /// One past the last position (exclusive).
    pub end: usize,
}

impl LocalRange {
    /// Creates the range `[start, end)`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The valid range for a partition holding `len` items.
    #[must_use]
    pub const fn within(len: usize) -> Self {
        Self { start: 0, end: len }
    }
}

impl fmt::Display for LocalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Errors reported by partition mapping and notification translation.
///
/// Every variant describes a disagreement between what the caller believes
/// about the list shape and what the partitions actually hold, so none of
/// them are recoverable by retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A global position outside `[0, total)`.
    #[error("position {position} is outside the list bounds [0, {total})")]
    InvalidPosition {
        /// The offending global position.
        position: usize,
        /// Total number of items at the time of the call.
        total: usize,
    },
    /// A partition subtype outside `[0, 1000)`.
    #[error("{partition} subtype {subtype} is outside [0, 1000)")]
    InvalidSubtype {
        /// Partition the subtype was reported for.
        partition: Partition,
        /// The offending subtype.
        subtype: u32,
    },
    /// An encoded view type outside `[0, 3000)`.
    #[error("view type {view_type} does not belong to any partition")]
    InvalidViewType {
        /// The offending encoded value.
        view_type: u32,
    },
    /// A local position or range outside a partition's bounds.
    #[error("{partition} positions {requested} are outside the {counts} bounds {valid}")]
    OutOfBounds {
        /// Partition the notification targeted.
        partition: Partition,
        /// Local positions named by the caller.
        requested: LocalRange,
        /// Local positions that would have been accepted.
        valid: LocalRange,
        /// Snapshot the bounds were taken from.
        counts: CountSource,
    },
}

/// Result alias for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
