// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioned list demo: headers, content, and footers in one text "list".
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example partitioned_list`
//!
//! A tiny text host stands in for a real virtualized list widget. It asks the
//! adapter for the total count, creates and binds one holder per position, and
//! applies the global notifications the adapter emits as the sample data
//! changes underneath it.

use tracing_subscriber::EnvFilter;
use understory_partitioned_list::{
    Error, ItemChange, LocalChange, Partition, PartitionProvider, PartitionedAdapter, SpanLookup,
};

/// Sample data: two headers, twenty content rows, two footers.
struct SampleRows {
    headers: Vec<String>,
    contents: Vec<String>,
    footers: Vec<String>,
}

impl SampleRows {
    fn new() -> Self {
        Self {
            headers: (0..2).map(|i| format!("header{i}")).collect(),
            contents: (0..20).map(|i| format!("content{i}")).collect(),
            footers: (0..2).map(|i| format!("footer{i}")).collect(),
        }
    }

    fn items(&self, partition: Partition) -> &[String] {
        match partition {
            Partition::Header => &self.headers,
            Partition::Content => &self.contents,
            Partition::Footer => &self.footers,
        }
    }
}

/// A bound row as the text host draws it.
#[derive(Debug, Clone)]
struct Row {
    partition: Partition,
    striped: bool,
    text: String,
}

impl PartitionProvider for SampleRows {
    type Holder = Row;

    fn count(&self, partition: Partition) -> usize {
        self.items(partition).len()
    }

    fn subtype(&self, partition: Partition, local: usize) -> u32 {
        // Alternate content rows use a second, striped view shape.
        match partition {
            Partition::Content => (local % 2) as u32,
            _ => 0,
        }
    }

    fn create(&mut self, partition: Partition, subtype: u32) -> Row {
        Row {
            partition,
            striped: subtype == 1,
            text: String::new(),
        }
    }

    fn bind(&mut self, holder: &mut Row, partition: Partition, local: usize) {
        holder.text.clone_from(&self.items(partition)[local]);
    }
}

/// Stand-in for a virtualized list widget that realizes every row.
#[derive(Default)]
struct TextHost {
    rows: Vec<Row>,
}

impl TextHost {
    fn realize(
        adapter: &mut PartitionedAdapter<SampleRows>,
        position: usize,
    ) -> Result<Row, Error> {
        let view_type = adapter.view_type_at(position)?;
        let mut row = adapter.create_view_holder(view_type.get())?;
        adapter.bind_view_holder(&mut row, position)?;
        Ok(row)
    }

    fn layout(&mut self, adapter: &mut PartitionedAdapter<SampleRows>) -> Result<(), Error> {
        let len = adapter.total_count();
        self.rows = (0..len)
            .map(|position| Self::realize(adapter, position))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    fn apply(
        &mut self,
        adapter: &mut PartitionedAdapter<SampleRows>,
        changes: Vec<ItemChange>,
    ) -> Result<(), Error> {
        for change in changes {
            println!("host <- {change:?}");
            match change {
                ItemChange::Inserted(position) => {
                    self.rows.insert(position, Self::realize(adapter, position)?);
                }
                ItemChange::RangeInserted { start, count } => {
                    for position in start..start + count {
                        self.rows.insert(position, Self::realize(adapter, position)?);
                    }
                }
                ItemChange::Changed(position) => {
                    self.rows[position] = Self::realize(adapter, position)?;
                }
                ItemChange::RangeChanged { start, count } => {
                    for position in start..start + count {
                        self.rows[position] = Self::realize(adapter, position)?;
                    }
                }
                ItemChange::Moved { from, to } => {
                    let row = self.rows.remove(from);
                    self.rows.insert(to, row);
                }
                ItemChange::Removed(position) => {
                    self.rows.remove(position);
                }
                ItemChange::RangeRemoved { start, count } => {
                    self.rows.drain(start..start + count);
                }
            }
        }
        // A real host recounts after applying a batch of updates.
        let len = adapter.total_count();
        assert_eq!(len, self.rows.len(), "host and adapter disagree on length");
        Ok(())
    }

    fn print(&self, adapter: &PartitionedAdapter<SampleRows>, grid: &Grid) {
        for (position, row) in self.rows.iter().enumerate() {
            let stripe = if row.striped { "~" } else { " " };
            println!(
                "{position:>3} {stripe} {:<8} span {}/{} {}",
                row.partition,
                adapter.span_size(position, grid),
                grid.span_count(),
                row.text,
            );
        }
        println!();
    }
}

/// A three-column grid where every item takes one column by default.
struct Grid;

impl SpanLookup for Grid {
    fn span_count(&self) -> usize {
        3
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut adapter = PartitionedAdapter::new(SampleRows::new());
    let mut host = TextHost::default();
    host.layout(&mut adapter)?;
    host.print(&adapter, &Grid);

    // A new header shifts every content and footer position by one.
    adapter.provider_mut().headers.push("header2".into());
    let mut pending: Vec<ItemChange> = Vec::new();
    adapter.notify(Partition::Header, LocalChange::Inserted(2), &mut pending)?;
    host.apply(&mut adapter, pending)?;

    // Remove the first three content rows, then rename the last one.
    adapter.provider_mut().contents.drain(0..3);
    let mut pending: Vec<ItemChange> = Vec::new();
    adapter.notify(
        Partition::Content,
        LocalChange::RangeRemoved { start: 0, count: 3 },
        &mut pending,
    )?;
    host.apply(&mut adapter, pending)?;

    adapter.provider_mut().contents[16] = "content19 (edited)".into();
    let mut pending: Vec<ItemChange> = Vec::new();
    adapter.notify(Partition::Content, LocalChange::Changed(16), &mut pending)?;
    host.apply(&mut adapter, pending)?;

    // Swap the footers by moving the first past the second.
    adapter.provider_mut().footers.swap(0, 1);
    let mut pending: Vec<ItemChange> = Vec::new();
    adapter.notify(
        Partition::Footer,
        LocalChange::Moved { from: 0, to: 1 },
        &mut pending,
    )?;
    host.apply(&mut adapter, pending)?;

    host.print(&adapter, &Grid);

    // Stale positions are rejected instead of corrupting the host.
    let stale = adapter.translate(Partition::Content, LocalChange::Removed(17));
    println!("removing content 17: {stale:?}");

    Ok(())
}
