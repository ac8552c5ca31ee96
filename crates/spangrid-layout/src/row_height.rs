//! Row height aggregation.
//!
//! Under the largest-in-row policy every cell on a row renders at the height
//! of the tallest cell on that row. Renderers report measured heights as rows
//! appear; [`RowHeightStorage`] keeps the per-row maximum and hands it back
//! on lookup. The whole table is cleared whenever row membership or content
//! size may have changed: a column count change, a width-class change, or an
//! accessibility text-size change.

use std::collections::HashMap;

use crate::column::ColumnLayout;

/// How the grid decides the height of each row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RowSizeStrategy {
    /// Every cell gets the same fixed height.
    Fixed {
        /// Height applied to every row.
        height: f32,
    },
    /// Each row takes the height of its largest measured cell.
    Largest,
    /// Each row is as tall as a single column is wide.
    Square,
    /// The grid provides no height; cells size themselves.
    #[default]
    None,
}

/// Per-row maximum measured heights for one grid instance.
#[derive(Debug, Clone, Default)]
pub struct RowHeightStorage {
    strategy: RowSizeStrategy,
    lookup: HashMap<usize, f32>,
}

impl RowHeightStorage {
    /// Create storage for the given strategy.
    #[must_use]
    pub fn new(strategy: RowSizeStrategy) -> Self {
        Self {
            strategy,
            lookup: HashMap::new(),
        }
    }

    /// The strategy this storage serves.
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> RowSizeStrategy {
        self.strategy
    }

    /// Merge one measured cell height into a row.
    ///
    /// Takes the maximum of the existing and new value, so contributions
    /// from a single layout pass converge to the same table in any arrival
    /// order. Non-finite heights are a caller error and are ignored.
    pub fn contribute(&mut self, row: usize, height: f32) {
        debug_assert!(height.is_finite(), "row height must be finite");
        if !height.is_finite() {
            return;
        }
        self.lookup
            .entry(row)
            .and_modify(|existing| *existing = existing.max(height))
            .or_insert(height);
    }

    /// Replace the whole table, merging by maximum against existing rows.
    pub fn merge_all(&mut self, heights: impl IntoIterator<Item = (usize, f32)>) {
        for (row, height) in heights {
            self.contribute(row, height);
        }
    }

    /// Clear every row. Call on column-count, width-class, or text-size
    /// changes.
    pub fn clear(&mut self) {
        self.lookup.clear();
    }

    /// Number of rows currently holding a measurement.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether no row has been measured yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Height for `row` under the current strategy, or `None` when the grid
    /// provides no height for it.
    #[must_use]
    pub fn height_for_row(&self, row: usize, layout: &ColumnLayout) -> Option<f32> {
        match self.strategy {
            RowSizeStrategy::Fixed { height } => Some(height),
            // A single-column grid has no peers to equalize against.
            RowSizeStrategy::Largest if layout.column_count == 1 => None,
            RowSizeStrategy::Largest => self.lookup.get(&row).copied(),
            RowSizeStrategy::Square => Some(layout.tile_width),
            RowSizeStrategy::None => None,
        }
    }
}
