// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Affine, Rect, Vec2};

use crate::extent::cell_extent;

/// Wrap-grid geometry for one container width and items-per-row count.
///
/// `GridMetrics` is the single source of truth for scaled grid geometry:
/// construct one per layout configuration and derive everything — cell
/// extent, row counts, frames, visible ranges — from it. Cells are square
/// and rows are separated by the same spacing as columns, matching the
/// reference grid's behavior.
///
/// The struct is a small `Copy` value; hosts rebuild it whenever the
/// container is measured or the stage changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    available_width: f64,
    spacing: f64,
    items_per_row: u32,
    cell: f64,
}

impl GridMetrics {
    /// Creates metrics for a container width, items-per-row count, and
    /// inter-cell spacing.
    ///
    /// The cell extent is derived once, through [`cell_extent`], with all
    /// of its degenerate-input clamping.
    #[must_use]
    pub fn new(available_width: f64, items_per_row: u32, spacing: f64) -> Self {
        let spacing = spacing.max(0.0);
        Self {
            available_width,
            spacing,
            items_per_row: items_per_row.max(1),
            cell: cell_extent(available_width, items_per_row, spacing),
        }
    }

    /// Returns the container width these metrics were built for.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    /// Returns the inter-cell spacing.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the items-per-row count.
    #[must_use]
    pub fn items_per_row(&self) -> u32 {
        self.items_per_row
    }

    /// Returns the derived square cell extent.
    #[must_use]
    pub fn cell_extent(&self) -> f64 {
        self.cell
    }

    /// Returns the vertical distance from one row's top to the next's.
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.cell + self.spacing
    }

    /// Returns how many rows `item_count` items wrap into.
    #[must_use]
    pub fn row_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.items_per_row as usize)
    }

    /// Returns the total content height for `item_count` items.
    ///
    /// Zero items have zero extent; otherwise rows are `row_pitch` apart
    /// with no trailing spacing after the last row.
    #[must_use]
    pub fn content_extent(&self, item_count: usize) -> f64 {
        let rows = self.row_count(item_count);
        if rows == 0 {
            0.0
        } else {
            #[expect(
                clippy::cast_precision_loss,
                reason = "row counts are far below 2^52 in any real grid"
            )]
            let rows = rows as f64;
            rows * self.row_pitch() - self.spacing
        }
    }

    /// Returns the frame of the cell at `index`, in unscaled grid
    /// coordinates with the origin at the grid's top-left corner.
    #[must_use]
    pub fn cell_frame(&self, index: usize) -> Rect {
        let per_row = self.items_per_row as usize;
        #[expect(
            clippy::cast_precision_loss,
            reason = "row and column indices are far below 2^52 in any real grid"
        )]
        let (row, col) = ((index / per_row) as f64, (index % per_row) as f64);
        let x = col * (self.cell + self.spacing);
        let y = row * self.row_pitch();
        Rect::new(x, y, x + self.cell, y + self.cell)
    }

    /// Returns the item indices a viewport can see, as `start..end`.
    ///
    /// `scroll_offset` is the distance from the top of the content to the
    /// top of the viewport; negative offsets (overscroll) are treated as
    /// zero. The range covers whole rows and may overshoot by one row at
    /// the bottom edge; it never exceeds `item_count`. Empty grids and
    /// degenerate viewports yield an empty range.
    #[must_use]
    pub fn visible_range(
        &self,
        scroll_offset: f64,
        viewport_extent: f64,
        item_count: usize,
    ) -> Range<usize> {
        if item_count == 0 || !(viewport_extent > 0.0) || !scroll_offset.is_finite() {
            return 0..0;
        }
        let pitch = self.row_pitch();
        let top = scroll_offset.max(0.0);
        let bottom = top + viewport_extent;

        // Truncation is floor here because both edges are non-negative.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "row positions are clamped non-negative and bounded by row_count below"
        )]
        let (first_row, last_row) = ((top / pitch) as usize, (bottom / pitch) as usize);

        let rows = self.row_count(item_count);
        let per_row = self.items_per_row as usize;
        let start = (first_row.min(rows) * per_row).min(item_count);
        let end = ((last_row + 1).min(rows) * per_row).min(item_count);
        start..end
    }
}

/// Returns the uniform scale transform a host applies while a pinch is
/// reshaping the grid.
///
/// The transform is anchored at the top center of a grid `grid_width`
/// wide: the top edge stays put and the grid swells or shrinks around its
/// vertical centerline, so in-progress zooming reads as cells growing in
/// place rather than the whole page sliding.
///
/// Non-finite or non-positive scales yield the identity transform.
#[must_use]
pub fn scale_about_top(grid_width: f64, scale: f64) -> Affine {
    if !(scale > 0.0) || !scale.is_finite() || !grid_width.is_finite() {
        return Affine::IDENTITY;
    }
    let anchor = Vec2::new(grid_width * 0.5, 0.0);
    Affine::translate(anchor) * Affine::scale(scale) * Affine::translate(-anchor)
}
