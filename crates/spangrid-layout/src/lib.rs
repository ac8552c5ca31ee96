#![forbid(unsafe_code)]

//! Span-grid packing primitives.
//!
//! This crate lays out an ordered sequence of variably-spanning items into a
//! fixed-column grid. Each item declares a [`SizeClass`] (one column, a full
//! row, or an explicit span) and the packer assigns it a *span index*: its
//! position in the row-major flattening of the grid into a single line.
//!
//! - [`SizeClass`] / [`SpanInfo`] - per-item column span declaration
//! - [`SpanIndexCalculator`] - packs items into span indices with whitespace
//!   insertion, and caches forward (`order -> span index`) and reverse
//!   (`span index -> order`) lookups per column count
//! - [`RowHeightStorage`] - per-row maximum measured height under a
//!   [`RowSizeStrategy`]
//! - [`ColumnLayout`] - column count and tile geometry supplied by the caller
//!   for each layout pass
//!
//! # Whitespace
//!
//! When an item's span exceeds the columns remaining on its row, the packer
//! leaves the rest of that row empty and starts the item on the next row. The
//! forward cache records the position *before* the inserted whitespace; the
//! length of the whitespace run is recovered with [`prefix_gap_size`], so the
//! visual start slot of an item is always `span_index + prefix_gap`.
//!
//! # Example
//!
//! ```
//! use spangrid_layout::{ColumnLayout, SizeClass, SpanIndexCalculator, SpanInfo};
//!
//! struct Tile(SizeClass);
//! impl SpanInfo for Tile {
//!     fn layout_size(&self) -> SizeClass {
//!         self.0
//!     }
//! }
//!
//! let items = vec![Tile(SizeClass::Row), Tile(SizeClass::Cell), Tile(SizeClass::Cell)];
//! let mut calc = SpanIndexCalculator::new();
//!
//! // The full-row item occupies span indices 0..3; the cells follow on row 1.
//! assert_eq!(calc.span_index_for_item(&items, 1, 3), 3);
//! assert_eq!(calc.span_index_for_item(&items, 2, 3), 4);
//! ```

pub mod column;
pub mod row_height;
pub mod size;
pub mod span_index;

pub use column::ColumnLayout;
pub use row_height::{RowHeightStorage, RowSizeStrategy};
pub use size::{SizeClass, SpanInfo};
pub use span_index::{SpanIndexCalculator, prefix_gap_size};
