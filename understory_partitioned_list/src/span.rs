// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-axis span hooks for grid-like layouts.
//!
//! Headers and footers usually stretch across every column of a grid while
//! content items keep whatever span the layout would give them. The mapping
//! core has no knowledge of any particular layout; instead it talks to two
//! narrow capabilities:
//!
//! - [`SpanLookup`], for grids that ask "how many spans does position `i` take?".
//! - [`FullSpanTarget`], for staggered grids that flag individual views as
//!   full-span when they are attached.
//!
//! Layouts without a notion of spans never call either hook.

use crate::{PartitionProvider, PartitionedAdapter};

/// Per-position span sizes reported by a grid-style layout.
pub trait SpanLookup {
    /// Number of spans across the cross axis.
    fn span_count(&self) -> usize;

    /// Number of spans occupied by the item at `position`.
    fn span_size(&self, position: usize) -> usize {
        let _ = position;
        1
    }
}

impl<L: SpanLookup + ?Sized> SpanLookup for &L {
    fn span_count(&self) -> usize {
        (**self).span_count()
    }

    fn span_size(&self, position: usize) -> usize {
        (**self).span_size(position)
    }
}

/// A view's layout parameters that can be marked as spanning the full cross axis.
pub trait FullSpanTarget {
    /// Marks (or unmarks) the view as full-span.
    fn set_full_span(&mut self, full_span: bool);
}

/// A [`SpanLookup`] that widens full-span partitions and defers to `inner` otherwise.
///
/// Hosts install this in place of their own lookup; see
/// [`PartitionedAdapter::span_lookup`].
#[derive(Debug)]
pub struct FullSpanLookup<'a, P, L> {
    adapter: &'a PartitionedAdapter<P>,
    inner: L,
}

impl<'a, P, L> FullSpanLookup<'a, P, L> {
    pub(crate) const fn new(adapter: &'a PartitionedAdapter<P>, inner: L) -> Self {
        Self { adapter, inner }
    }

    /// Returns the wrapped lookup.
    #[must_use]
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<P: PartitionProvider, L: SpanLookup> SpanLookup for FullSpanLookup<'_, P, L> {
    fn span_count(&self) -> usize {
        self.inner.span_count()
    }

    fn span_size(&self, position: usize) -> usize {
        self.adapter.span_size(position, &self.inner)
    }
}
