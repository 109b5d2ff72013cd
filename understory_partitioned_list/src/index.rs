// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure mapping between global list positions and partition-local positions.
//!
//! These functions carry no state beyond the [`PartitionCounts`] passed in, so
//! they can be evaluated against either the fresh or the captured snapshot.

use crate::{Error, Partition, PartitionCounts, Result};

/// A resolved list position: which partition it falls in and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Partition containing the position.
    pub partition: Partition,
    /// Position within that partition.
    pub local: usize,
}

/// Returns the partition containing global `position`.
///
/// Fails with [`Error::InvalidPosition`] when `position` is not below
/// [`PartitionCounts::total`].
pub fn classify(position: usize, counts: &PartitionCounts) -> Result<Partition> {
    if position < counts.header {
        Ok(Partition::Header)
    } else if position - counts.header < counts.content {
        Ok(Partition::Content)
    } else if position < counts.total() {
        Ok(Partition::Footer)
    } else {
        Err(Error::InvalidPosition {
            position,
            total: counts.total(),
        })
    }
}

/// Converts a global position known to lie in `partition` to a local one.
///
/// The caller must have classified `position` against the same counts.
#[must_use]
pub const fn to_local(position: usize, partition: Partition, counts: &PartitionCounts) -> usize {
    position - counts.offset(partition)
}

/// Converts a local position in `partition` to a global one.
#[must_use]
pub const fn to_global(local: usize, partition: Partition, counts: &PartitionCounts) -> usize {
    local + counts.offset(partition)
}

/// Classifies `position` and converts it to a local position in one step.
pub fn locate(position: usize, counts: &PartitionCounts) -> Result<Slot> {
    let partition = classify(position, counts)?;
    Ok(Slot {
        partition,
        local: to_local(position, partition, counts),
    })
}

#[cfg(test)]
mod tests {
    use super::{Slot, classify, locate, to_global, to_local};
    use crate::{Error, Partition, PartitionCounts};

    fn slot(partition: Partition, local: usize) -> Slot {
        Slot { partition, local }
    }

    #[test]
    fn classifies_positions_across_boundaries() {
        let counts = PartitionCounts::new(2, 5, 3);
        assert_eq!(locate(0, &counts), Ok(slot(Partition::Header, 0)));
        assert_eq!(locate(1, &counts), Ok(slot(Partition::Header, 1)));
        assert_eq!(locate(2, &counts), Ok(slot(Partition::Content, 0)));
        assert_eq!(locate(6, &counts), Ok(slot(Partition::Content, 4)));
        assert_eq!(locate(7, &counts), Ok(slot(Partition::Footer, 0)));
        assert_eq!(locate(9, &counts), Ok(slot(Partition::Footer, 2)));
    }

    #[test]
    fn positions_past_the_footer_are_invalid() {
        let counts = PartitionCounts::new(2, 5, 3);
        assert_eq!(
            classify(10, &counts),
            Err(Error::InvalidPosition {
                position: 10,
                total: 10
            })
        );
        assert!(classify(usize::MAX, &counts).is_err());
        assert!(classify(0, &PartitionCounts::default()).is_err());
    }

    #[test]
    fn empty_partitions_are_skipped() {
        let counts = PartitionCounts::new(0, 0, 2);
        assert_eq!(locate(0, &counts), Ok(slot(Partition::Footer, 0)));

        let counts = PartitionCounts::new(1, 0, 1);
        assert_eq!(locate(1, &counts), Ok(slot(Partition::Footer, 0)));
    }

    #[test]
    fn local_and_global_round_trip() {
        for header in 0..4 {
            for content in 0..4 {
                for footer in 0..4 {
                    let counts = PartitionCounts::new(header, content, footer);
                    for position in 0..counts.total() {
                        let partition = classify(position, &counts).unwrap();
                        let local = to_local(position, partition, &counts);
                        assert!(local < counts.get(partition));
                        assert_eq!(to_global(local, partition, &counts), position);
                    }
                }
            }
        }
    }
}
