//! The grid facade: items, packing, row heights, and the keyboard cursor
//! behind one type.
//!
//! [`SpanGrid`] owns the pieces the layout crate provides and keeps them
//! consistent across item and column-count changes: replacing the items
//! invalidates the span caches and drops the selection, a column-count
//! change rebuilds the packing and clears measured row heights. Callers
//! drive it with [`layout`](SpanGrid::layout) per frame and
//! [`handle_direction`](SpanGrid::handle_direction) per key event.

use spangrid_layout::{
    ColumnLayout, RowHeightStorage, RowSizeStrategy, SizeClass, SpanIndexCalculator, SpanInfo,
    prefix_gap_size,
};

use crate::navigation::{Direction, KeyboardNavigation};

/// An item plus its stable position in the grid's sequence.
///
/// The order is the identity navigation and row-height bookkeeping use; it
/// must equal the item's index in the sequence handed to [`SpanGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem<T> {
    order: usize,
    data: T,
}

impl<T> GridItem<T> {
    pub fn new(order: usize, data: T) -> Self {
        Self { order, data }
    }

    #[inline]
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: SpanInfo> SpanInfo for GridItem<T> {
    #[inline]
    fn layout_size(&self) -> SizeClass {
        self.data.layout_size()
    }
}

/// Geometry a cell needs to render itself, resolved for one column count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetadata {
    /// Width of the cell across its full span, spacing included.
    pub width: f32,
    /// Height the row strategy prescribes, `None` when the cell sizes
    /// itself.
    pub height: Option<f32>,
    /// Column count the width was computed for.
    pub column_count: usize,
}

/// One item's resolved position in the packed grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// The item's order in the sequence.
    pub order: usize,
    /// The packing cursor position the item was placed at.
    pub span_index: usize,
    /// Row of the cell's first visual slot.
    pub row: usize,
    /// Column of the cell's first visual slot.
    pub column: usize,
    /// Columns the cell occupies.
    pub span: usize,
    /// Whitespace slots the cell skipped when wrapping to its row.
    pub prefix_gap: usize,
    /// Sizing for the cell's content.
    pub metadata: CellMetadata,
}

/// A span-aware grid with packing, row sizing, and keyboard navigation.
#[derive(Debug, Clone)]
pub struct SpanGrid<T: SpanInfo> {
    items: Vec<GridItem<T>>,
    calculator: SpanIndexCalculator,
    row_heights: RowHeightStorage,
    navigation: KeyboardNavigation,
    last_column_count: Option<usize>,
}

impl<T: SpanInfo> SpanGrid<T> {
    /// Build a grid over `data`, ordering items by their sequence position.
    pub fn new(data: impl IntoIterator<Item = T>, strategy: RowSizeStrategy) -> Self {
        Self {
            items: data
                .into_iter()
                .enumerate()
                .map(|(order, item)| GridItem::new(order, item))
                .collect(),
            calculator: SpanIndexCalculator::new(),
            row_heights: RowHeightStorage::new(strategy),
            navigation: KeyboardNavigation::new(),
            last_column_count: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[GridItem<T>] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the item sequence. Drops the packing caches, measured row
    /// heights, and the keyboard selection.
    pub fn set_items(&mut self, data: impl IntoIterator<Item = T>) {
        self.items = data
            .into_iter()
            .enumerate()
            .map(|(order, item)| GridItem::new(order, item))
            .collect();
        self.calculator.invalidate();
        self.row_heights.clear();
        self.navigation.reset();
        self.last_column_count = None;
    }

    /// Bring the caches in line with `layout`'s column count.
    fn refresh(&mut self, layout: &ColumnLayout) {
        let column_count = layout.column_count;
        if self.last_column_count != Some(column_count) {
            // Measured heights belong to rows of the old packing.
            self.row_heights.clear();
            self.last_column_count = Some(column_count);
        }
        self.calculator.precalculate(&self.items, column_count);
    }

    /// Resolve every item's position for `layout`.
    ///
    /// Placements come back in item order. Row and column describe the
    /// cell's first visual slot, past any whitespace its placement skipped.
    pub fn layout(&mut self, layout: &ColumnLayout) -> Vec<CellPlacement> {
        self.refresh(layout);
        let column_count = layout.column_count;

        self.items
            .iter()
            .map(|item| {
                let order = item.order();
                let span = item.layout_size().span_size(column_count);
                let span_index = self
                    .calculator
                    .cached_span_index(order)
                    .unwrap_or(order);
                let prefix_gap = prefix_gap_size(span, column_count, span_index);
                let slot = span_index + prefix_gap;

                let height = self.row_heights.height_for_row(slot / column_count, layout);

                CellPlacement {
                    order,
                    span_index,
                    row: slot / column_count,
                    column: slot % column_count,
                    span,
                    prefix_gap,
                    metadata: CellMetadata {
                        width: layout.span_width(span),
                        height,
                        column_count,
                    },
                }
            })
            .collect()
    }

    /// Feed one directional input to the cursor. Returns whether the
    /// selection changed.
    pub fn handle_direction(&mut self, direction: Direction, layout: &ColumnLayout) -> bool {
        self.refresh(layout);
        self.navigation
            .process(direction, &self.items, &mut self.calculator, layout.column_count)
    }

    /// Order of the keyboard-selected item, if any.
    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.navigation.current_item()
    }

    /// Whether `order` is the keyboard-selected item.
    #[inline]
    #[must_use]
    pub fn is_highlighted(&self, order: usize) -> bool {
        self.navigation.current_item() == Some(order)
    }

    /// Record a measured height for the row holding `order`'s first visual
    /// slot. Only meaningful under [`RowSizeStrategy::Largest`].
    pub fn contribute_row_height(&mut self, order: usize, height: f32, layout: &ColumnLayout) {
        self.refresh(layout);
        let column_count = layout.column_count;
        let Some(item) = self.items.get(order) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(order, "height reported for unknown item, ignoring");
            return;
        };
        let span = item.layout_size().span_size(column_count);
        let span_index = self.calculator.cached_span_index(order).unwrap_or(order);
        let slot = span_index + prefix_gap_size(span, column_count, span_index);
        self.row_heights.contribute(slot / column_count, height);
    }

    /// Drop every measured row height. Call when item content changes size.
    pub fn invalidate_row_heights(&mut self) {
        self.row_heights.clear();
    }

    /// Height the row strategy prescribes for `row`, if fixed.
    #[must_use]
    pub fn height_for_row(&self, row: usize, layout: &ColumnLayout) -> Option<f32> {
        self.row_heights.height_for_row(row, layout)
    }

    /// Whether `order` must report its measured height back via
    /// [`contribute_row_height`](Self::contribute_row_height).
    ///
    /// Full-row cells never do: a row they occupy alone has nothing to
    /// equalize against.
    #[must_use]
    pub fn needs_row_measurement(&self, order: usize, layout: &ColumnLayout) -> bool {
        if self.row_heights.strategy() != RowSizeStrategy::Largest {
            return false;
        }
        self.items
            .get(order)
            .is_some_and(|item| item.layout_size().span_size(layout.column_count) != layout.column_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_columns() -> ColumnLayout {
        ColumnLayout::new(3, 10.0, 100.0)
    }

    fn mixed() -> Vec<SizeClass> {
        // Full-row item in the middle of cells, matching the packing the
        // layout crate's own tests exercise.
        (0..7)
            .map(|i| if i == 3 { SizeClass::Row } else { SizeClass::Cell })
            .collect()
    }

    #[test]
    fn layout_places_items_in_rows_and_columns() {
        let mut grid = SpanGrid::new(mixed(), RowSizeStrategy::None);
        let placements = grid.layout(&three_columns());

        assert_eq!(placements.len(), 7);
        assert_eq!((placements[0].row, placements[0].column), (0, 0));
        assert_eq!((placements[2].row, placements[2].column), (0, 2));
        assert_eq!((placements[3].row, placements[3].column), (1, 0));
        assert_eq!(placements[3].span, 3);
        assert_eq!((placements[4].row, placements[4].column), (2, 0));
        assert_eq!((placements[6].row, placements[6].column), (2, 2));
    }

    #[test]
    fn gapped_placement_reports_first_visual_slot() {
        // A two-column span starting in the last column wraps, leaving one
        // whitespace slot behind.
        let items = vec![
            SizeClass::Cell,
            SizeClass::Cell,
            SizeClass::Span(2),
            SizeClass::Cell,
        ];
        let mut grid = SpanGrid::new(items, RowSizeStrategy::None);
        let placements = grid.layout(&three_columns());

        assert_eq!(placements[2].span_index, 2);
        assert_eq!(placements[2].prefix_gap, 1);
        assert_eq!((placements[2].row, placements[2].column), (1, 0));
        assert_eq!((placements[3].row, placements[3].column), (1, 2));
    }

    #[test]
    fn metadata_width_spans_spacing() {
        let mut grid = SpanGrid::new(vec![SizeClass::Cell, SizeClass::Span(2)], RowSizeStrategy::None);
        let placements = grid.layout(&three_columns());

        assert_eq!(placements[0].metadata.width, 100.0);
        assert_eq!(placements[1].metadata.width, 210.0);
        assert_eq!(placements[1].metadata.column_count, 3);
    }

    #[test]
    fn fixed_strategy_fills_heights() {
        let mut grid = SpanGrid::new(mixed(), RowSizeStrategy::Fixed { height: 40.0 });
        let placements = grid.layout(&three_columns());
        assert!(placements.iter().all(|p| p.metadata.height == Some(40.0)));
    }

    #[test]
    fn largest_strategy_round_trips_contributions() {
        let layout = three_columns();
        let mut grid = SpanGrid::new(mixed(), RowSizeStrategy::Largest);

        let before = grid.layout(&layout);
        assert_eq!(before[0].metadata.height, None);

        grid.contribute_row_height(0, 30.0, &layout);
        grid.contribute_row_height(1, 55.0, &layout);
        grid.contribute_row_height(2, 42.0, &layout);

        let after = grid.layout(&layout);
        assert_eq!(after[0].metadata.height, Some(55.0));
        assert_eq!(after[2].metadata.height, Some(55.0));
        // The full-row item's row received no contributions.
        assert_eq!(after[3].metadata.height, None);
    }

    #[test]
    fn full_row_items_skip_measurement() {
        let layout = three_columns();
        let grid = SpanGrid::new(mixed(), RowSizeStrategy::Largest);

        assert!(grid.needs_row_measurement(0, &layout));
        assert!(!grid.needs_row_measurement(3, &layout));
        assert!(grid.needs_row_measurement(4, &layout));

        let plain = SpanGrid::new(mixed(), RowSizeStrategy::None);
        assert!(!plain.needs_row_measurement(0, &layout));
    }

    #[test]
    fn column_change_clears_measured_heights() {
        let layout = three_columns();
        let mut grid = SpanGrid::new(mixed(), RowSizeStrategy::Largest);
        grid.layout(&layout);
        grid.contribute_row_height(0, 30.0, &layout);
        assert_eq!(grid.height_for_row(0, &layout), Some(30.0));

        let wider = ColumnLayout::new(4, 10.0, 80.0);
        grid.layout(&wider);
        assert_eq!(grid.height_for_row(0, &wider), None);
    }

    #[test]
    fn set_items_resets_selection_and_caches() {
        let layout = three_columns();
        let mut grid = SpanGrid::new(mixed(), RowSizeStrategy::None);
        grid.handle_direction(Direction::Down, &layout);
        assert_eq!(grid.selection(), Some(0));
        assert!(grid.is_highlighted(0));

        grid.set_items(vec![SizeClass::Cell, SizeClass::Cell]);
        assert_eq!(grid.selection(), None);
        assert!(!grid.is_highlighted(0));
        assert_eq!(grid.len(), 2);

        let placements = grid.layout(&layout);
        assert_eq!((placements[1].row, placements[1].column), (0, 1));
    }

    #[test]
    fn handle_direction_drives_navigation() {
        let layout = three_columns();
        let mut grid = SpanGrid::new(mixed(), RowSizeStrategy::None);

        assert!(grid.handle_direction(Direction::Down, &layout));
        assert!(grid.handle_direction(Direction::Down, &layout));
        assert_eq!(grid.selection(), Some(3));
        assert!(grid.handle_direction(Direction::Down, &layout));
        assert_eq!(grid.selection(), Some(4));
        assert!(!grid.handle_direction(Direction::Down, &layout));
    }

    #[test]
    fn grid_item_preserves_order_and_data() {
        let grid = SpanGrid::new(vec![SizeClass::Row, SizeClass::Cell], RowSizeStrategy::None);
        assert_eq!(grid.items()[0].order(), 0);
        assert_eq!(*grid.items()[1].data(), SizeClass::Cell);
        assert_eq!(grid.items()[0].layout_size(), SizeClass::Row);
    }
}
