#![forbid(unsafe_code)]

//! Span grid: a spanning-cell grid layout with directional keyboard
//! navigation.
//!
//! Items of varying column span are packed, in order, into a grid of fixed
//! column count. An item that does not fit the columns remaining on its row
//! wraps to the next row and leaves intentional whitespace behind. A cursor
//! can then be driven through the packed layout with up/down/left/right
//! inputs, hopping across whitespace and clamping at the edges.
//!
//! The packing math lives in [`spangrid_layout`] and is re-exported here;
//! this crate adds the stateful pieces:
//!
//! - [`KeyboardNavigation`] - the directional selection state machine
//! - [`SpanGrid`] - a facade owning the item sequence, the packing caches,
//!   the row-height table, and the navigation state
//!
//! # Example
//!
//! ```
//! use spangrid::{ColumnLayout, Direction, RowSizeStrategy, SizeClass, SpanGrid, SpanInfo};
//!
//! struct Card(SizeClass);
//! impl SpanInfo for Card {
//!     fn layout_size(&self) -> SizeClass {
//!         self.0
//!     }
//! }
//!
//! let cards = vec![Card(SizeClass::Row), Card(SizeClass::Cell), Card(SizeClass::Cell)];
//! let mut grid = SpanGrid::new(cards, RowSizeStrategy::None);
//!
//! let columns = ColumnLayout::new(3, 20.0, 100.0);
//! let placements = grid.layout(&columns);
//! assert_eq!(placements[1].row, 1);
//!
//! // First directional input selects the first item.
//! grid.handle_direction(Direction::Down, &columns);
//! assert_eq!(grid.selection(), Some(0));
//! ```
//!
//! # What this crate does not do
//!
//! It renders nothing and computes no pixel geometry beyond tile widths and
//! row heights. Column count selection (breakpoints, accessibility text
//! sizes) is the caller's job; the grid consumes a ready-made
//! [`ColumnLayout`] each pass and exposes invalidation hooks for the
//! caller's resize and text-size notifications.

pub mod grid;
pub mod navigation;

pub use grid::{CellMetadata, CellPlacement, GridItem, SpanGrid};
pub use navigation::{Direction, KeyboardNavigation};
pub use spangrid_layout::{
    ColumnLayout, RowHeightStorage, RowSizeStrategy, SizeClass, SpanIndexCalculator, SpanInfo,
    prefix_gap_size,
};
