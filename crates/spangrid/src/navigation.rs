//! Directional keyboard navigation over the packed grid.
//!
//! A cursor state machine with two states: unselected (the initial state)
//! and selected, holding the item order plus the span index the cursor sits
//! on. The span index can differ from the item's own: moving horizontally
//! through a multi-column cell, or vertically across a full-row cell, parks
//! the cursor partway through the cell's width so that continuing in the
//! same direction keeps the visual column.
//!
//! Every input produces some valid state. Moves past the grid edges, into
//! slots the packing never produced, or back onto the already-selected item
//! are no-ops; nothing here panics on user input.

use spangrid_layout::{SpanInfo, SpanIndexCalculator, prefix_gap_size};

/// A discrete directional input, one per keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One slot left.
    Left,
    /// One slot right.
    Right,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Cursor state machine for one grid instance.
///
/// Holds no reference to the grid: [`process`](Self::process) takes the item
/// sequence, the calculator, and the column count explicitly and mutates
/// only its own selection state.
#[derive(Debug, Clone, Default)]
pub struct KeyboardNavigation {
    /// Order of the selected item, `None` before the first input.
    current_item: Option<usize>,
    /// Span index the cursor sits on. Only meaningful while selected.
    current_span_index: usize,
    /// Column count the span index was last valid for.
    last_column_count: Option<usize>,
}

impl KeyboardNavigation {
    /// Create an unselected cursor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Order of the currently selected item, if any.
    #[inline]
    #[must_use]
    pub fn current_item(&self) -> Option<usize> {
        self.current_item
    }

    /// Span index the cursor currently sits on.
    #[inline]
    #[must_use]
    pub fn current_span_index(&self) -> usize {
        self.current_span_index
    }

    /// Return to the unselected state. Call when the item sequence changes.
    pub fn reset(&mut self) {
        self.current_item = None;
        self.current_span_index = 0;
        self.last_column_count = None;
    }

    /// Process one directional input.
    ///
    /// The first input selects the first item whatever the direction. Later
    /// inputs move the cursor per the packed layout, skipping whitespace
    /// vertically and clamping at the grid edges. Returns whether the
    /// selection changed.
    pub fn process<I: SpanInfo>(
        &mut self,
        direction: Direction,
        items: &[I],
        calculator: &mut SpanIndexCalculator,
        column_count: usize,
    ) -> bool {
        if items.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?direction, "direction input with no items, ignoring");
            return false;
        }

        // Navigation resolves candidates through the reverse map, so the
        // caches must exist even in the single-column case the forward
        // lookup path shortcuts around.
        calculator.precalculate(items, column_count);

        let Some(current) = self.current_item else {
            #[cfg(feature = "tracing")]
            tracing::trace!("first input, selecting first item");
            self.current_span_index = calculator.span_index_for_item(items, 0, column_count);
            self.last_column_count = Some(column_count);
            return self.set_current_item(0, items.len());
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?direction, current, "handling keyboard input");

        let origin = calculator.span_index_for_item(items, current, column_count);
        let span = items[current].layout_size().span_size(column_count) as i64;

        // A stale span index from a previous column count would point into a
        // different packing; park the cursor on the selected item's first
        // visual slot in the new one.
        if self.last_column_count != Some(column_count) {
            self.current_span_index =
                origin + prefix_gap_size(span as usize, column_count, origin);
            self.last_column_count = Some(column_count);
        }

        let span_offset = self.current_span_index as i64 - origin as i64;

        // Left judges the gap from where the cursor sits; the other
        // directions from the cell's own position.
        let gap_probe = match direction {
            Direction::Left => self.current_span_index,
            _ => origin,
        };
        let gap = prefix_gap_size(span as usize, column_count, gap_probe) as i64;

        let mut candidate = self.current_span_index as i64;
        match direction {
            Direction::Left if span == 1 => candidate -= span - gap,
            Direction::Left => candidate -= span - (span - span_offset) + 1 - gap,
            Direction::Right if span == 1 => candidate += span + gap,
            Direction::Right => candidate += span - span_offset + gap,
            Direction::Up => loop {
                candidate -= column_count as i64;
                if !self.is_invalid_cell(candidate, items, calculator, column_count) {
                    break;
                }
            },
            Direction::Down => loop {
                candidate += column_count as i64;
                if !self.is_invalid_cell(candidate, items, calculator, column_count) {
                    break;
                }
            },
        }

        if candidate < 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(?direction, "direction puts selection out of bounds, ignoring");
            return false;
        }

        let Some(new_item) = calculator.item_for_span_index(candidate as usize) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(span_index = candidate, "unknown span index, ignoring");
            return false;
        };

        if self.set_current_item(new_item, items.len()) {
            self.current_span_index = candidate as usize;
            true
        } else {
            false
        }
    }

    /// Select `new_value`, rejecting out-of-range and no-change inputs.
    fn set_current_item(&mut self, new_value: usize, item_count: usize) -> bool {
        if new_value >= item_count {
            #[cfg(feature = "tracing")]
            tracing::trace!(value = new_value, "value out of bounds, ignoring");
            return false;
        }

        if Some(new_value) == self.current_item {
            #[cfg(feature = "tracing")]
            tracing::trace!(value = new_value, "no change in value, ignoring");
            return false;
        }

        self.current_item = Some(new_value);
        true
    }

    /// Whether a vertical probe may not rest on `span_index`.
    ///
    /// A slot is invalid when it falls strictly inside the whitespace run
    /// preceding the cell that owns it: the cursor should land on the cell,
    /// not on the blank slots before it. Unknown slots are not invalid; the
    /// caller's resolve step rejects them instead, ending the probe.
    fn is_invalid_cell<I: SpanInfo>(
        &self,
        span_index: i64,
        items: &[I],
        calculator: &SpanIndexCalculator,
        column_count: usize,
    ) -> bool {
        let Ok(slot) = usize::try_from(span_index) else {
            return false;
        };

        let Some(item) = calculator.item_for_span_index(slot) else {
            return false;
        };

        if item >= items.len() {
            return false;
        }

        let span = items[item].layout_size().span_size(column_count);
        let Some(origin) = calculator.cached_span_index(item) else {
            return false;
        };

        let span_offset = slot - origin;
        let gap = prefix_gap_size(span, column_count, origin);

        span_offset < gap
    }
}
