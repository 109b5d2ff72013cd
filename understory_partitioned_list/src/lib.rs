// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_partitioned_list --heading-base-level=0

//! Understory Partitioned List: header/content/footer composition for virtualized lists.
//!
//! A virtualized list host sees a single dense strip of items indexed
//! `0..len`. Applications often think in three independent groups instead: a
//! few headers, the content proper, and a few footers. This crate maps between
//! the two index spaces and keeps partial-update notifications honest while
//! the boundaries between groups shift.
//!
//! The core concepts are:
//!
//! - [`Partition`]: `Header`, `Content` or `Footer`, always laid out in that order.
//! - [`PartitionCounts`]: a snapshot of the three item counts, with the pure
//!   mapping helpers in [`index`] ([`classify`], [`locate`], [`to_local`],
//!   [`to_global`]).
//! - [`ViewType`]: a partition-local subtype packed into one integer. Each
//!   partition owns a fixed block of [`SUBTYPES_PER_PARTITION`] values.
//! - [`PartitionProvider`]: the application-side trait supplying counts,
//!   subtypes and view holders.
//! - [`PartitionedAdapter`]: the controller the host talks to. It captures
//!   counts on every [`PartitionedAdapter::total_count`] and translates
//!   [`LocalChange`]s into host-facing [`ItemChange`]s.
//! - [`SpanLookup`] and [`FullSpanTarget`]: optional hooks that let grid-like
//!   layouts stretch headers and footers across the cross axis.
//!
//! ## Fresh and captured counts
//!
//! Insertions are validated against the provider's *fresh* counts: by the time
//! the caller reports an insertion, the item already exists. Changes, moves and
//! removals name positions the host still believes in, so they are validated
//! and shifted using the counts *captured* at the host's last
//! [`PartitionedAdapter::total_count`] call.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_partitioned_list::{
//!     ItemChange, LocalChange, Partition, PartitionProvider, PartitionedAdapter,
//! };
//!
//! struct Rows {
//!     headers: Vec<&'static str>,
//!     content: Vec<&'static str>,
//!     footers: Vec<&'static str>,
//! }
//!
//! impl Rows {
//!     fn items(&self, partition: Partition) -> &[&'static str] {
//!         match partition {
//!             Partition::Header => &self.headers,
//!             Partition::Content => &self.content,
//!             Partition::Footer => &self.footers,
//!         }
//!     }
//! }
//!
//! impl PartitionProvider for Rows {
//!     type Holder = String;
//!
//!     fn count(&self, partition: Partition) -> usize {
//!         self.items(partition).len()
//!     }
//!
//!     fn create(&mut self, _partition: Partition, _subtype: u32) -> String {
//!         String::new()
//!     }
//!
//!     fn bind(&mut self, holder: &mut String, partition: Partition, local: usize) {
//!         *holder = self.items(partition)[local].to_owned();
//!     }
//! }
//!
//! let mut adapter = PartitionedAdapter::new(Rows {
//!     headers: vec!["title"],
//!     content: vec!["a", "b", "c"],
//!     footers: vec!["more"],
//! });
//!
//! // The host asks for the length, then realizes position 2.
//! assert_eq!(adapter.total_count(), 5);
//! let view_type = adapter.view_type_at(2).unwrap();
//! let mut holder = adapter.create_view_holder(view_type.get()).unwrap();
//! adapter.bind_view_holder(&mut holder, 2).unwrap();
//! assert_eq!(holder, "b");
//!
//! // Remove content item 1 and tell the host, in global positions.
//! adapter.provider_mut().content.remove(1);
//! let mut host: Vec<ItemChange> = Vec::new();
//! adapter
//!     .notify(Partition::Content, LocalChange::Removed(1), &mut host)
//!     .unwrap();
//! assert_eq!(host, [ItemChange::Removed(2)]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `thiserror`
//!   and `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod change;
mod error;
pub mod index;
mod partition;
mod span;
mod view_type;

pub use adapter::{AdapterOptions, PartitionProvider, PartitionedAdapter};
pub use change::{ChangeSink, ItemChange, LocalChange};
pub use error::{CountSource, Error, LocalRange, Result};
pub use index::{Slot, classify, locate, to_global, to_local};
pub use partition::{Partition, PartitionCounts, PartitionSet};
pub use span::{FullSpanLookup, FullSpanTarget, SpanLookup};
pub use view_type::{
    SUBTYPES_PER_PARTITION, VIEW_TYPE_LIMIT, ViewType, decode_view_type, encode_view_type,
};
