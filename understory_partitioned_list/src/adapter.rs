// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful adapter sitting between a rendering host and a partition provider.

use crate::index::{self, Slot};
use crate::span::{FullSpanLookup, FullSpanTarget, SpanLookup};
use crate::{
    ChangeSink, CountSource, ItemChange, LocalChange, Partition, PartitionCounts, PartitionSet,
    Result, ViewType,
};

/// Application-side data for the three partitions.
///
/// The adapter calls back into the provider to learn counts and subtypes and
/// to create and bind view holders. Every method takes the [`Partition`] as an
/// explicit argument, so one implementation serves all three partitions.
pub trait PartitionProvider {
    /// Opaque view holder handed to the rendering host.
    type Holder;

    /// Number of items currently in `partition`.
    ///
    /// Called on every layout pass, so it must be cheap.
    fn count(&self, partition: Partition) -> usize;

    /// Subtype of the item at `local` in `partition`, in `[0, 1000)`.
    fn subtype(&self, partition: Partition, local: usize) -> u32 {
        let _ = (partition, local);
        0
    }

    /// Creates a holder for an item of `partition` with the given subtype.
    fn create(&mut self, partition: Partition, subtype: u32) -> Self::Holder;

    /// Binds `holder` to the item at `local` in `partition`.
    fn bind(&mut self, holder: &mut Self::Holder, partition: Partition, local: usize);
}

/// Options controlling how an adapter presents its partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Partitions whose items span the full cross axis of grid-like layouts.
    pub full_span: PartitionSet,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            full_span: PartitionSet::HEADER | PartitionSet::FOOTER,
        }
    }
}

/// Composes header, content, and footer partitions into one flat list.
///
/// The adapter remembers the counts it last reported through
/// [`total_count`](Self::total_count). Those captured counts describe the
/// geometry the host currently believes in, and are what removals, changes and
/// moves are validated and translated against. Insertions use the provider's
/// fresh counts instead, since the inserted items already exist.
///
/// All operations must be driven from the thread that owns the host's view
/// tree, in program order.
#[derive(Debug, Clone)]
pub struct PartitionedAdapter<P> {
    provider: P,
    captured: PartitionCounts,
    options: AdapterOptions,
}

impl<P> PartitionedAdapter<P> {
    /// Creates an adapter over `provider` with default options.
    ///
    /// Captured counts start empty until the host first calls
    /// [`total_count`](Self::total_count).
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, AdapterOptions::default())
    }

    /// Creates an adapter over `provider` with explicit options.
    #[must_use]
    pub fn with_options(provider: P, options: AdapterOptions) -> Self {
        Self {
            provider,
            captured: PartitionCounts::default(),
            options,
        }
    }

    /// Returns a shared reference to the provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns a mutable reference to the provider, for mutating partition data.
    ///
    /// Follow each mutation with the matching [`notify`](Self::notify) call.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Consumes the adapter and returns the provider.
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Returns the current options.
    #[must_use]
    pub const fn options(&self) -> AdapterOptions {
        self.options
    }

    /// Replaces the options.
    pub fn set_options(&mut self, options: AdapterOptions) {
        self.options = options;
    }

    /// Counts captured by the last [`total_count`](Self::total_count).
    #[must_use]
    pub const fn captured_counts(&self) -> PartitionCounts {
        self.captured
    }
}

impl<P: PartitionProvider> PartitionedAdapter<P> {
    /// Counts the provider reports right now.
    #[must_use]
    pub fn fresh_counts(&self) -> PartitionCounts {
        PartitionCounts::from_fn(|partition| self.provider.count(partition))
    }

    fn counts(&self, source: CountSource) -> PartitionCounts {
        match source {
            CountSource::Fresh => self.fresh_counts(),
            CountSource::Captured => self.captured,
        }
    }

    /// Total number of items, as reported to the host.
    ///
    /// This captures the fresh counts; later removals, changes and moves are
    /// checked against them until the next call.
    pub fn total_count(&mut self) -> usize {
        let counts = self.fresh_counts();
        if counts != self.captured {
            tracing::debug!(previous = ?self.captured, current = ?counts, "partition counts changed");
        }
        self.captured = counts;
        counts.total()
    }

    /// Resolves global `position` against fresh counts.
    pub fn locate(&self, position: usize) -> Result<Slot> {
        index::locate(position, &self.fresh_counts())
    }

    /// Partition containing `position`, or `None` past the end of the list.
    #[must_use]
    pub fn partition_at(&self, position: usize) -> Option<Partition> {
        index::classify(position, &self.fresh_counts()).ok()
    }

    /// Returns `true` if `position` is a header item.
    #[must_use]
    pub fn is_header(&self, position: usize) -> bool {
        self.partition_at(position) == Some(Partition::Header)
    }

    /// Returns `true` if `position` is a content item.
    #[must_use]
    pub fn is_content(&self, position: usize) -> bool {
        self.partition_at(position) == Some(Partition::Content)
    }

    /// Returns `true` if `position` is a footer item.
    #[must_use]
    pub fn is_footer(&self, position: usize) -> bool {
        self.partition_at(position) == Some(Partition::Footer)
    }

    /// Encoded view type of the item at `position`.
    pub fn view_type_at(&self, position: usize) -> Result<ViewType> {
        let Slot { partition, local } = self.locate(position)?;
        ViewType::encode(partition, self.provider.subtype(partition, local))
    }

    /// Creates a holder for a raw view type previously returned by
    /// [`view_type_at`](Self::view_type_at).
    pub fn create_view_holder(&mut self, view_type: u32) -> Result<P::Holder> {
        let (partition, subtype) = ViewType::from_raw(view_type)?.decode();
        Ok(self.provider.create(partition, subtype))
    }

    /// Binds `holder` to the item at global `position`.
    pub fn bind_view_holder(&mut self, holder: &mut P::Holder, position: usize) -> Result<()> {
        let Slot { partition, local } = self.locate(position)?;
        self.provider.bind(holder, partition, local);
        Ok(())
    }

    /// Validates `change` to `partition` and translates it into global positions.
    ///
    /// Insertions are checked against fresh counts, everything else against
    /// the captured counts.
    pub fn translate(&self, partition: Partition, change: LocalChange) -> Result<ItemChange> {
        let counts = self.counts(change.count_source());
        change.to_global(partition, &counts)
    }

    /// Translates `change` and forwards it to `sink`.
    ///
    /// Nothing is sent when validation fails.
    pub fn notify(
        &self,
        partition: Partition,
        change: LocalChange,
        mut sink: impl ChangeSink,
    ) -> Result<()> {
        let item_change = self.translate(partition, change)?;
        tracing::trace!(%partition, ?change, ?item_change, "dispatching item change");
        sink.item_changed(item_change);
        Ok(())
    }

    /// Returns `true` if the item at `position` spans the full cross axis.
    #[must_use]
    pub fn is_full_span(&self, position: usize) -> bool {
        self.partition_at(position)
            .is_some_and(|partition| self.options.full_span.includes(partition))
    }

    /// Span size for `position` under a grid-style `layout`.
    ///
    /// Full-span partitions take [`SpanLookup::span_count`]; other positions
    /// keep the layout's own answer.
    pub fn span_size(&self, position: usize, layout: &impl SpanLookup) -> usize {
        if self.is_full_span(position) {
            layout.span_count()
        } else {
            layout.span_size(position)
        }
    }

    /// Wraps a layout's span lookup so full-span partitions take every span.
    pub fn span_lookup<L: SpanLookup>(&self, layout: L) -> FullSpanLookup<'_, P, L> {
        FullSpanLookup::new(self, layout)
    }

    /// Hook for staggered layouts when the view for `position` is attached.
    ///
    /// Views in full-span partitions are marked full-span; others are left as is.
    pub fn on_view_attached(&self, position: usize, target: &mut impl FullSpanTarget) {
        if self.is_full_span(position) {
            target.set_full_span(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::tests::{StubHolder, StubProvider, adapter};
    use crate::{
        CountSource, Error, ItemChange, LocalChange, LocalRange, Partition, PartitionCounts,
        PartitionedAdapter, ViewType,
    };

    #[test]
    fn total_count_captures_fresh_counts() {
        let mut adapter = PartitionedAdapter::new(StubProvider::new(2, 5, 3));
        assert_eq!(adapter.captured_counts(), PartitionCounts::default());
        assert_eq!(adapter.total_count(), 10);
        assert_eq!(adapter.captured_counts(), PartitionCounts::new(2, 5, 3));

        adapter.provider_mut().content -= 1;
        assert_eq!(adapter.fresh_counts(), PartitionCounts::new(2, 4, 3));
        assert_eq!(adapter.captured_counts(), PartitionCounts::new(2, 5, 3));
        assert_eq!(adapter.total_count(), 9);
        assert_eq!(adapter.captured_counts(), PartitionCounts::new(2, 4, 3));
    }

    #[test]
    fn predicates_follow_fresh_counts() {
        let adapter = adapter(2, 5, 3);
        assert!(adapter.is_header(1));
        assert!(adapter.is_content(2));
        assert!(adapter.is_content(6));
        assert!(adapter.is_footer(7));
        assert!(!adapter.is_footer(10), "positions past the end are in no partition");
        assert_eq!(adapter.partition_at(10), None);
    }

    #[test]
    fn view_types_encode_partition_and_subtype() {
        let mut provider = StubProvider::new(2, 5, 3);
        provider.content_subtype = 7;
        let adapter = PartitionedAdapter::new(provider);
        assert_eq!(adapter.view_type_at(0).map(ViewType::get), Ok(0));
        assert_eq!(adapter.view_type_at(3).map(ViewType::get), Ok(2007));
        assert_eq!(adapter.view_type_at(9).map(ViewType::get), Ok(1000));
        assert_eq!(
            adapter.view_type_at(10),
            Err(Error::InvalidPosition {
                position: 10,
                total: 10
            })
        );
    }

    #[test]
    fn oversized_subtypes_surface_as_errors() {
        let mut provider = StubProvider::new(0, 1, 0);
        provider.content_subtype = 1000;
        let adapter = PartitionedAdapter::new(provider);
        assert_eq!(
            adapter.view_type_at(0),
            Err(Error::InvalidSubtype {
                partition: Partition::Content,
                subtype: 1000
            })
        );
    }

    #[test]
    fn create_and_bind_dispatch_to_partition() {
        let mut adapter = adapter(2, 5, 3);
        let view_type = adapter.view_type_at(8).unwrap();
        let mut holder = adapter.create_view_holder(view_type.get()).unwrap();
        assert_eq!(
            holder,
            StubHolder {
                partition: Partition::Footer,
                subtype: 0,
                bound: None
            }
        );
        adapter.bind_view_holder(&mut holder, 8).unwrap();
        assert_eq!(holder.bound, Some((Partition::Footer, 1)));

        adapter.bind_view_holder(&mut holder, 2).unwrap();
        assert_eq!(holder.bound, Some((Partition::Content, 0)));

        assert!(adapter.bind_view_holder(&mut holder, 10).is_err());
        assert_eq!(
            adapter.create_view_holder(3000),
            Err(Error::InvalidViewType { view_type: 3000 })
        );
    }

    #[test]
    fn content_insert_uses_fresh_counts() {
        let adapter = adapter(2, 5, 3);
        let mut host: Vec<ItemChange> = Vec::new();
        for local in 0..5 {
            adapter
                .notify(Partition::Content, LocalChange::Inserted(local), &mut host)
                .unwrap();
        }
        assert_eq!(
            host,
            (2..7).map(ItemChange::Inserted).collect::<Vec<_>>(),
            "content insertions are shifted past the two headers"
        );

        assert_eq!(
            adapter.notify(Partition::Content, LocalChange::Inserted(5), &mut host),
            Err(Error::OutOfBounds {
                partition: Partition::Content,
                requested: LocalRange::new(5, 6),
                valid: LocalRange::within(5),
                counts: CountSource::Fresh,
            })
        );
        assert_eq!(host.len(), 5, "failed notifications are not dispatched");
    }

    #[test]
    fn insert_after_growth_is_accepted_before_recount() {
        let mut adapter = adapter(2, 5, 3);
        adapter.total_count();
        adapter.provider_mut().header += 1;
        assert_eq!(
            adapter.translate(Partition::Header, LocalChange::Inserted(2)),
            Ok(ItemChange::Inserted(2))
        );
        // The new header shifts footer insertions as well.
        adapter.provider_mut().footer += 1;
        assert_eq!(
            adapter.translate(Partition::Footer, LocalChange::Inserted(3)),
            Ok(ItemChange::Inserted(11))
        );
    }

    #[test]
    fn removal_uses_captured_counts() {
        let mut adapter = adapter(2, 5, 3);
        assert_eq!(adapter.total_count(), 10);

        // The provider drops its last content item before the host recounts.
        adapter.provider_mut().content -= 1;

        let mut host: Vec<ItemChange> = Vec::new();
        adapter
            .notify(Partition::Content, LocalChange::Removed(4), &mut host)
            .unwrap();
        assert_eq!(host, vec![ItemChange::Removed(6)]);
    }

    #[test]
    fn changes_before_first_count_are_rejected() {
        let adapter = adapter(2, 5, 3);
        assert_eq!(
            adapter.translate(Partition::Header, LocalChange::Changed(0)),
            Err(Error::OutOfBounds {
                partition: Partition::Header,
                requested: LocalRange::new(0, 1),
                valid: LocalRange::within(0),
                counts: CountSource::Captured,
            })
        );
    }

    #[test]
    fn footer_changes_shift_by_captured_counts() {
        let mut adapter = adapter(2, 5, 3);
        adapter.total_count();
        // Header grows without a recount; captured offsets stay put.
        adapter.provider_mut().header += 4;
        assert_eq!(
            adapter.translate(
                Partition::Footer,
                LocalChange::RangeChanged { start: 0, count: 3 }
            ),
            Ok(ItemChange::RangeChanged { start: 7, count: 3 })
        );
        assert_eq!(
            adapter.translate(Partition::Footer, LocalChange::Moved { from: 0, to: 2 }),
            Ok(ItemChange::Moved { from: 7, to: 9 })
        );
        assert_eq!(
            adapter.translate(
                Partition::Footer,
                LocalChange::RangeRemoved { start: 1, count: 2 }
            ),
            Ok(ItemChange::RangeRemoved { start: 8, count: 2 })
        );
    }

    #[test]
    fn header_moves_must_not_go_backwards() {
        let mut adapter = adapter(3, 1, 1);
        adapter.total_count();
        assert!(
            adapter
                .translate(Partition::Header, LocalChange::Moved { from: 2, to: 1 })
                .is_err()
        );
        assert_eq!(
            adapter.translate(Partition::Header, LocalChange::Moved { from: 1, to: 2 }),
            Ok(ItemChange::Moved { from: 1, to: 2 })
        );
    }
}
