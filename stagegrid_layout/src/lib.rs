// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagegrid_layout --heading-base-level=0

//! Stagegrid Layout: cell and wrap-grid geometry.
//!
//! This crate provides the small, headless geometry model shared by a
//! stage-zooming grid and its controller:
//!
//! - [`cell_extent`]: the width of one square cell, given the container
//!   width, an items-per-row count, and fixed inter-cell spacing.
//! - [`GridMetrics`]: a value object binding those inputs together and
//!   answering row counts, content extent, per-index cell frames, and
//!   which item indices a scrolled viewport can see.
//! - [`scale_about_top`]: the uniform scale transform — anchored at the
//!   top center of the grid — that hosts apply while a pinch gesture is
//!   reshaping the layout.
//!
//! It does **not** own any widget, scene graph, or scroll view. Callers
//! are expected to:
//! - Feed the current container width and items-per-row count in.
//! - Lay out (or virtualize) items using the returned frames and ranges.
//! - Apply [`scale_about_top`] to whatever paints the grid.
//!
//! ## Minimal example
//!
//! ```rust
//! use stagegrid_layout::GridMetrics;
//!
//! // A 400px-wide container laying out 4 items per row, 2px apart.
//! let metrics = GridMetrics::new(400.0, 4, 2.0);
//! assert_eq!(metrics.cell_extent(), 98.0);
//!
//! // 10 items wrap into 3 rows.
//! assert_eq!(metrics.row_count(10), 3);
//!
//! // Which items can a 200px-tall viewport scrolled to 90px see?
//! let visible = metrics.visible_range(90.0, 200.0, 10);
//! assert!(visible.contains(&4));
//! ```
//!
//! Degenerate inputs are policy, not errors: a non-positive container
//! width yields the minimum positive cell extent, and queries over empty
//! grids yield empty ranges.
//!
//! This crate is `no_std`.

#![no_std]

mod extent;
mod metrics;

pub use extent::{DEFAULT_SPACING, MIN_CELL_EXTENT, cell_extent};
pub use metrics::{GridMetrics, scale_about_top};
