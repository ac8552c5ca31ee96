//! Item size classes and span resolution.

/// How many grid columns an item wants to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeClass {
    /// A single column on a single row.
    #[default]
    Cell,
    /// All columns on a single row.
    Row,
    /// An explicit number of columns on a single row.
    ///
    /// A span larger than the column count clamps to the full row. A span
    /// that does not fit the columns remaining on the current row pushes the
    /// item to the next row, leaving whitespace behind.
    Span(usize),
}

impl SizeClass {
    /// Resolve this size class to a concrete column span in
    /// `1..=column_count`.
    ///
    /// `column_count < 1` is a caller precondition, not guarded here.
    #[inline]
    #[must_use]
    pub fn span_size(self, column_count: usize) -> usize {
        debug_assert!(column_count >= 1, "column_count must be >= 1");
        match self {
            SizeClass::Cell => 1,
            SizeClass::Row => column_count,
            SizeClass::Span(n) => n.max(1).min(column_count),
        }
    }
}

/// Sizing seam between grid data and the packer.
///
/// Implemented by whatever type the caller stores in the grid; the packer
/// reads nothing else from an item.
pub trait SpanInfo {
    /// The declared size class of this item.
    fn layout_size(&self) -> SizeClass;
}

impl SpanInfo for SizeClass {
    fn layout_size(&self) -> SizeClass {
        *self
    }
}
