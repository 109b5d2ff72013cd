// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-type multiplexing.
//!
//! Each partition owns a fixed block of [`SUBTYPES_PER_PARTITION`] view-type
//! values, so partition-local subtypes never collide and no shared registry of
//! ids is needed:
//!
//! | Partition | Encoded range  |
//! |-----------|----------------|
//! | Header    | `0..1000`      |
//! | Footer    | `1000..2000`   |
//! | Content   | `2000..3000`   |

use core::fmt;

use crate::{Error, Partition, Result};

/// Number of subtype slots available to each partition.
pub const SUBTYPES_PER_PARTITION: u32 = 1000;

/// One past the largest valid encoded view type.
pub const VIEW_TYPE_LIMIT: u32 = SUBTYPES_PER_PARTITION * 3;

const fn base(partition: Partition) -> u32 {
    match partition {
        Partition::Header => 0,
        Partition::Footer => SUBTYPES_PER_PARTITION,
        Partition::Content => SUBTYPES_PER_PARTITION * 2,
    }
}

/// An encoded `(partition, subtype)` pair handed to the rendering host.
///
/// Values are always in `[0, VIEW_TYPE_LIMIT)`; construct them with
/// [`ViewType::encode`] or [`ViewType::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewType(u32);

impl ViewType {
    /// Encodes `subtype` within `partition`'s block.
    ///
    /// Fails with [`Error::InvalidSubtype`] when `subtype` is not below
    /// [`SUBTYPES_PER_PARTITION`].
    pub const fn encode(partition: Partition, subtype: u32) -> Result<Self> {
        if subtype >= SUBTYPES_PER_PARTITION {
            return Err(Error::InvalidSubtype { partition, subtype });
        }
        Ok(Self(base(partition) + subtype))
    }

    /// Validates a raw value received back from the host.
    pub const fn from_raw(raw: u32) -> Result<Self> {
        if raw >= VIEW_TYPE_LIMIT {
            return Err(Error::InvalidViewType { view_type: raw });
        }
        Ok(Self(raw))
    }

    /// Returns the raw encoded value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the partition whose block contains this view type.
    #[must_use]
    pub const fn partition(self) -> Partition {
        if self.0 < SUBTYPES_PER_PARTITION {
            Partition::Header
        } else if self.0 < SUBTYPES_PER_PARTITION * 2 {
            Partition::Footer
        } else {
            Partition::Content
        }
    }

    /// Returns the partition-local subtype.
    #[must_use]
    pub const fn subtype(self) -> u32 {
        self.0 - base(self.partition())
    }

    /// Splits this view type into its partition and subtype.
    #[must_use]
    pub const fn decode(self) -> (Partition, u32) {
        (self.partition(), self.subtype())
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<ViewType> for u32 {
    fn from(view_type: ViewType) -> Self {
        view_type.0
    }
}

impl TryFrom<u32> for ViewType {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        Self::from_raw(raw)
    }
}

/// Encodes `(partition, subtype)` into a raw view type.
pub fn encode_view_type(partition: Partition, subtype: u32) -> Result<u32> {
    ViewType::encode(partition, subtype).map(ViewType::get)
}

/// Decodes a raw view type into `(partition, subtype)`.
pub fn decode_view_type(view_type: u32) -> Result<(Partition, u32)> {
    ViewType::from_raw(view_type).map(ViewType::decode)
}

#[cfg(test)]
mod tests {
    use super::{SUBTYPES_PER_PARTITION, ViewType, decode_view_type, encode_view_type};
    use crate::{Error, Partition};

    #[test]
    fn partition_blocks_follow_fixed_bases() {
        assert_eq!(encode_view_type(Partition::Header, 0), Ok(0));
        assert_eq!(encode_view_type(Partition::Footer, 0), Ok(1000));
        assert_eq!(encode_view_type(Partition::Content, 0), Ok(2000));
        assert_eq!(encode_view_type(Partition::Content, 999), Ok(2999));
    }

    #[test]
    fn decode_inverts_encode_for_every_subtype() {
        for partition in Partition::ALL {
            for subtype in 0..SUBTYPES_PER_PARTITION {
                let raw = encode_view_type(partition, subtype).unwrap();
                assert_eq!(
                    decode_view_type(raw),
                    Ok((partition, subtype)),
                    "round trip failed for {partition} subtype {subtype}"
                );
            }
        }
    }

    #[test]
    fn subtypes_past_the_block_are_rejected() {
        for partition in Partition::ALL {
            assert_eq!(
                ViewType::encode(partition, SUBTYPES_PER_PARTITION),
                Err(Error::InvalidSubtype {
                    partition,
                    subtype: 1000
                })
            );
            assert!(ViewType::encode(partition, u32::MAX).is_err());
        }
    }

    #[test]
    fn raw_values_outside_all_blocks_are_rejected() {
        assert_eq!(
            decode_view_type(3000),
            Err(Error::InvalidViewType { view_type: 3000 })
        );
        assert!(ViewType::try_from(u32::MAX).is_err());
        assert_eq!(
            ViewType::try_from(1500).map(ViewType::decode),
            Ok((Partition::Footer, 500))
        );
    }
}
