//! Column geometry supplied by the caller per layout pass.

/// Resolved column layout for one pass over the grid.
///
/// Computing this from viewport width, size classes, or accessibility
/// settings is the caller's concern; the packer only consumes the result.
/// A fresh value is expected on every layout pass, and a change in
/// `column_count` invalidates all packing caches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Total number of columns within a single row.
    pub column_count: usize,
    /// Horizontal spacing between items in a row, and vertical spacing
    /// between rows.
    pub interitem_spacing: f32,
    /// The width of an individual tile within a single row.
    pub tile_width: f32,
}

impl ColumnLayout {
    /// Create a new column layout.
    #[must_use]
    pub fn new(column_count: usize, interitem_spacing: f32, tile_width: f32) -> Self {
        debug_assert!(column_count >= 1, "column_count must be >= 1");
        Self {
            column_count,
            interitem_spacing,
            tile_width,
        }
    }

    /// The rendered width of a cell spanning `span` columns: the spanned
    /// tiles plus the spacing runs between them.
    #[inline]
    #[must_use]
    pub fn span_width(&self, span: usize) -> f32 {
        (self.tile_width + self.interitem_spacing) * span as f32 - self.interitem_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_width_single_column_is_tile_width() {
        let layout = ColumnLayout::new(3, 20.0, 100.0);
        assert_eq!(layout.span_width(1), 100.0);
    }

    #[test]
    fn span_width_absorbs_interior_spacing() {
        let layout = ColumnLayout::new(3, 20.0, 100.0);
        assert_eq!(layout.span_width(2), 220.0);
        assert_eq!(layout.span_width(3), 340.0);
    }
}
