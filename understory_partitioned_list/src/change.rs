// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partial-update notifications in local and global position spaces.

use alloc::vec::Vec;

use crate::{CountSource, Error, LocalRange, Partition, PartitionCounts, Result};

/// A mutation of one partition's data, in that partition's local positions.
///
/// Insertions describe the state *after* the mutation, so they are checked
/// against fresh counts. Every other kind names positions the host still
/// believes exist and is checked against the captured counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalChange {
    /// One item was inserted at this position.
    Inserted(usize),
    /// `count` items were inserted starting at `start`.
    RangeInserted {
        /// First inserted position.
        start: usize,
        /// Number of inserted items.
        count: usize,
    },
    /// The item at this position changed in place.
    Changed(usize),
    /// `count` items starting at `start` changed in place.
    RangeChanged {
        /// First changed position.
        start: usize,
        /// Number of changed items.
        count: usize,
    },
    /// An item moved from `from` to `to`.
    Moved {
        /// Original position.
        from: usize,
        /// New position; must not precede `from`.
        to: usize,
    },
    /// The item at this position was removed.
    Removed(usize),
    /// `count` items starting at `start` were removed.
    RangeRemoved {
        /// First removed position.
        start: usize,
        /// Number of removed items.
        count: usize,
    },
}

impl LocalChange {
    /// Which snapshot this change is validated and translated against.
    #[must_use]
    pub const fn count_source(&self) -> CountSource {
        match self {
            Self::Inserted(_) | Self::RangeInserted { .. } => CountSource::Fresh,
            _ => CountSource::Captured,
        }
    }

    /// Validates this change against `counts` and shifts it into global positions.
    ///
    /// `counts` must be the snapshot named by [`count_source`](Self::count_source).
    pub fn to_global(self, partition: Partition, counts: &PartitionCounts) -> Result<ItemChange> {
        let source = self.count_source();
        let len = counts.get(partition);
        let offset = counts.offset(partition);
        let out_of_bounds = |requested: LocalRange| Error::OutOfBounds {
            partition,
            requested,
            valid: LocalRange::within(len),
            counts: source,
        };
        let check_one = |position: usize| {
            if position < len {
                Ok(position + offset)
            } else {
                Err(out_of_bounds(LocalRange::new(
                    position,
                    position.saturating_add(1),
                )))
            }
        };
        let check_range = |start: usize, count: usize| match start.checked_add(count) {
            Some(end) if end <= len => Ok(start + offset),
            end => Err(out_of_bounds(LocalRange::new(
                start,
                end.unwrap_or(usize::MAX),
            ))),
        };

        Ok(match self {
            Self::Inserted(position) => ItemChange::Inserted(check_one(position)?),
            Self::RangeInserted { start, count } => ItemChange::RangeInserted {
                start: check_range(start, count)?,
                count,
            },
            Self::Changed(position) => ItemChange::Changed(check_one(position)?),
            Self::RangeChanged { start, count } => ItemChange::RangeChanged {
                start: check_range(start, count)?,
                count,
            },
            Self::Moved { from, to } => {
                let from_global = check_one(from)?;
                let to_global = check_one(to)?;
                if to < from {
                    return Err(Error::OutOfBounds {
                        partition,
                        requested: LocalRange::new(to, to + 1),
                        valid: LocalRange::new(from, len),
                        counts: source,
                    });
                }
                ItemChange::Moved {
                    from: from_global,
                    to: to_global,
                }
            }
            Self::Removed(position) => ItemChange::Removed(check_one(position)?),
            Self::RangeRemoved { start, count } => ItemChange::RangeRemoved {
                start: check_range(start, count)?,
                count,
            },
        })
    }
}

/// A notification in global list positions, ready for the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemChange {
    /// One item was inserted at this position.
    Inserted(usize),
    /// `count` items were inserted starting at `start`.
    RangeInserted {
        /// First inserted position.
        start: usize,
        /// Number of inserted items.
        count: usize,
    },
    /// The item at this position changed in place.
    Changed(usize),
    /// `count` items starting at `start` changed in place.
    RangeChanged {
        /// First changed position.
        start: usize,
        /// Number of changed items.
        count: usize,
    },
    /// An item moved from `from` to `to`.
    Moved {
        /// Original position.
        from: usize,
        /// New position.
        to: usize,
    },
    /// The item at this position was removed.
    Removed(usize),
    /// `count` items starting at `start` were removed.
    RangeRemoved {
        /// First removed position.
        start: usize,
        /// Number of removed items.
        count: usize,
    },
}

/// Receiver of translated notifications, typically the rendering host.
pub trait ChangeSink {
    /// Called once per successfully translated notification.
    fn item_changed(&mut self, change: ItemChange);
}

impl ChangeSink for Vec<ItemChange> {
    fn item_changed(&mut self, change: ItemChange) {
        self.push(change);
    }
}

impl<S: ChangeSink + ?Sized> ChangeSink for &mut S {
    fn item_changed(&mut self, change: ItemChange) {
        (**self).item_changed(change);
    }
}
