//! Span index packing and cached lookups.
//!
//! Packs an ordered item sequence into a row-major line of span indices for a
//! given column count, in a single O(n) forward pass. Lookups in both
//! directions are O(1) once the caches are built, and the caches are keyed by
//! column count: a different count on the next call rebuilds both maps before
//! anything is answered.
//!
//! # Invariants
//!
//! 1. Forward and reverse caches are always rebuilt together; for every real
//!    item `o`, `reverse[forward[o]] == o`.
//! 2. `forward` is strictly increasing in item order; each step advances by
//!    the item's span plus any whitespace left on the previous row.
//! 3. `forward[item_count]` is a sentinel holding the total packed length,
//!    and `reverse[packed_len] == item_count`.
//! 4. Whitespace slots between two items resolve, in reverse lookup, to the
//!    earlier item (fill-forward), so vertical navigation can treat them as
//!    "nearest preceding real item" without a separate gap scan.
//!
//! The forward cache stores the packing cursor *before* whitespace insertion;
//! [`prefix_gap_size`] recovers the whitespace run length, and
//! `span_index + gap` is the visual start slot.

use std::collections::HashMap;

use crate::size::SpanInfo;

/// Packs items into span indices and caches lookups in both directions.
///
/// One calculator belongs to one grid instance. It holds no reference to the
/// item sequence: every operation takes the items and column count
/// explicitly, so a stale cache can always be rebuilt from the arguments at
/// hand.
#[derive(Debug, Clone, Default)]
pub struct SpanIndexCalculator {
    /// Column count the caches were last built for.
    last_column_count: Option<usize>,
    /// Maps item order to span index, plus a sentinel at `item_count`.
    forward: HashMap<usize, usize>,
    /// Maps span index to item order, fill-forward across whitespace.
    reverse: HashMap<usize, usize>,
    /// Total packed length (the sentinel value).
    total: usize,
}

impl SpanIndexCalculator {
    /// Create an empty calculator. Caches build lazily on first lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all cached state. Call when the item sequence itself changes.
    pub fn invalidate(&mut self) {
        self.last_column_count = None;
        self.forward.clear();
        self.reverse.clear();
        self.total = 0;
    }

    /// Whether the caches are valid for `column_count` without a rebuild.
    #[inline]
    #[must_use]
    pub fn is_fresh(&self, column_count: usize) -> bool {
        !self.forward.is_empty() && self.last_column_count == Some(column_count)
    }

    /// Total packed length of the last build: the span index one past the
    /// final item's occupied slots.
    #[inline]
    #[must_use]
    pub fn packed_len(&self) -> usize {
        self.total
    }

    /// Build both caches for `column_count` unless they are already fresh.
    ///
    /// Rebuilds are idempotent; calling this redundantly is a cheap check.
    pub fn precalculate<I: SpanInfo>(&mut self, items: &[I], column_count: usize) {
        if self.is_fresh(column_count) {
            return;
        }

        if self.last_column_count != Some(column_count) {
            #[cfg(feature = "tracing")]
            tracing::info!(
                columns = column_count,
                "recalculating span index cache after column count change"
            );
            self.last_column_count = Some(column_count);
        }

        let mut forward = HashMap::with_capacity(items.len() + 1);
        let mut reverse = HashMap::with_capacity(items.len() + 1);

        let mut position = 0usize;
        let mut last_position = 0usize;
        let mut last_order = 0usize;

        for (order, item) in items.iter().enumerate() {
            // Fill-forward: any slots skipped since the previous item resolve
            // to that previous item on reverse lookup.
            for slot in last_position..=position {
                reverse.insert(slot, last_order);
            }

            forward.insert(order, position);
            reverse.insert(position, order);

            last_position = position;
            last_order = order;

            position = accumulate(position, item.layout_size().span_size(column_count), column_count);
        }

        forward.insert(items.len(), position);
        reverse.insert(position, items.len());

        self.forward = forward;
        self.reverse = reverse;
        self.total = position;
    }

    /// Span index of the item at `order`, rebuilding the caches first if
    /// they are stale for `column_count`.
    ///
    /// A cache miss (an order the current build does not cover) recomputes
    /// the answer by replaying the packing pass over the prefix, without
    /// forcing a rebuild. Querying an order beyond the item count is a caller
    /// error; the replay then returns the packed length.
    pub fn span_index_for_item<I: SpanInfo>(
        &mut self,
        items: &[I],
        order: usize,
        column_count: usize,
    ) -> usize {
        if column_count == 1 {
            // Single column: every span resolves to one column, so span index
            // and item order are always identical and no cache is needed.
            return order;
        }

        self.precalculate(items, column_count);

        if let Some(&span_index) = self.forward.get(&order) {
            return span_index;
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(order, "span index cache miss, calculating on the fly");

        items
            .iter()
            .take(order)
            .fold(0, |position, item| {
                accumulate(position, item.layout_size().span_size(column_count), column_count)
            })
    }

    /// Span index of `order` from the current build, without rebuilding.
    ///
    /// `None` when the caches are empty or do not cover `order`.
    #[inline]
    #[must_use]
    pub fn cached_span_index(&self, order: usize) -> Option<usize> {
        self.forward.get(&order).copied()
    }

    /// Item order occupying (or nearest preceding) `span_index` in the
    /// current build.
    ///
    /// Returns `Some(item_count)` for the sentinel at the packed length, and
    /// `None` for slots the build never touched: indices past the sentinel,
    /// and slots strictly inside the final item's own span.
    #[inline]
    #[must_use]
    pub fn item_for_span_index(&self, span_index: usize) -> Option<usize> {
        self.reverse.get(&span_index).copied()
    }
}

/// Advance the packing cursor past one item of the given span.
///
/// An item that no longer fits the remaining columns of its row skips the
/// rest of that row: the cursor advances by the whitespace run and the span.
#[inline]
fn accumulate(position: usize, span_size: usize, column_count: usize) -> usize {
    let space_on_row = column_count - (position % column_count);

    if span_size > space_on_row {
        position + span_size + space_on_row
    } else {
        position + span_size
    }
}

/// Length of the whitespace run preceding a cell of `span_size` columns whose
/// packing cursor sits at `span_index`.
///
/// Zero in a single-column grid, zero for single-column cells, and otherwise
/// the remaining columns of the row when the span does not fit them. Both
/// rendering and navigation use this to agree on where whitespace falls.
#[must_use]
pub fn prefix_gap_size(span_size: usize, column_count: usize, span_index: usize) -> usize {
    if column_count == 1 {
        // A single-column grid is a list; it never has empty cells.
        return 0;
    }

    if span_size == 1 {
        // A single cell always fits the current row.
        return 0;
    }

    let space_on_row = column_count - (span_index % column_count);

    if span_size > space_on_row {
        space_on_row
    } else {
        0
    }
}
