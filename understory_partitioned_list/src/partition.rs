// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition tags and per-partition item counts.

use core::fmt;
use core::ops::Range;

/// One of the three logical item groups composed into a single list.
///
/// Ordering is fixed: every header position precedes every content position,
/// which precedes every footer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Partition {
    /// Leading items, such as titles or banners.
    Header,
    /// The main body of the list.
    Content,
    /// Trailing items, such as "load more" rows.
    Footer,
}

impl Partition {
    /// All partitions, in list order.
    pub const ALL: [Self; 3] = [Self::Header, Self::Content, Self::Footer];

    /// Returns the lowercase name of this partition.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Content => "content",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

bitflags::bitflags! {
    /// A set of partitions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PartitionSet: u8 {
        /// Header items.
        const HEADER  = 0b0000_0001;
        /// Content items.
        const CONTENT = 0b0000_0010;
        /// Footer items.
        const FOOTER  = 0b0000_0100;
    }
}

impl PartitionSet {
    /// Returns the singleton set for `partition`.
    #[must_use]
    pub const fn of(partition: Partition) -> Self {
        match partition {
            Partition::Header => Self::HEADER,
            Partition::Content => Self::CONTENT,
            Partition::Footer => Self::FOOTER,
        }
    }

    /// Returns `true` if `partition` is a member of this set.
    #[must_use]
    pub const fn includes(self, partition: Partition) -> bool {
        self.contains(Self::of(partition))
    }
}

impl From<Partition> for PartitionSet {
    fn from(partition: Partition) -> Self {
        Self::of(partition)
    }
}

/// Item counts for the three partitions at one instant.
///
/// A value of this type is a snapshot: the adapter keeps the counts it last
/// reported to the host and compares them against the counts the provider
/// reports now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartitionCounts {
    /// Number of header items.
    pub header: usize,
    /// Number of content items.
    pub content: usize,
    /// Number of footer items.
    pub footer: usize,
}

impl PartitionCounts {
    /// Creates a snapshot from explicit counts.
    #[must_use]
    pub const fn new(header: usize, content: usize, footer: usize) -> Self {
        Self {
            header,
            content,
            footer,
        }
    }

    /// Builds a snapshot by asking `count` for each partition.
    pub fn from_fn(mut count: impl FnMut(Partition) -> usize) -> Self {
        Self {
            header: count(Partition::Header),
            content: count(Partition::Content),
            footer: count(Partition::Footer),
        }
    }

    /// Returns the count for `partition`.
    #[must_use]
    pub const fn get(&self, partition: Partition) -> usize {
        match partition {
            Partition::Header => self.header,
            Partition::Content => self.content,
            Partition::Footer => self.footer,
        }
    }

    /// Total number of items across all partitions.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.header + self.content + self.footer
    }

    /// Returns `true` if every partition is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Global position of the first item of `partition`.
    ///
    /// This is the sum of the counts of all partitions preceding it.
    #[must_use]
    pub const fn offset(&self, partition: Partition) -> usize {
        match partition {
            Partition::Header => 0,
            Partition::Content => self.header,
            Partition::Footer => self.header + self.content,
        }
    }

    /// Global positions occupied by `partition`.
    #[must_use]
    pub const fn range(&self, partition: Partition) -> Range<usize> {
        let start = self.offset(partition);
        start..start + self.get(partition)
    }
}
