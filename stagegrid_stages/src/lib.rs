// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagegrid_stages --heading-base-level=0

//! Stagegrid Stages: discrete items-per-row zoom stage ladders.
//!
//! A grid that zooms between preset column counts needs an ordered table of
//! those presets. This crate provides that table as a [`StageLadder`]: a
//! short, validated sequence of items-per-row counts, ordered from fewest
//! items per row (stage 0, the most magnified layout) to most (the last
//! stage, the most compressed layout).
//!
//! It also provides [`ladder_for`], a pure lookup from device class and
//! orientation to a built-in ladder, mirroring how hosts pick a column
//! preset table per screen configuration.
//!
//! Index handling is saturating throughout: a stage request outside the
//! ladder clamps to the nearest valid stage and never fails. The only
//! fallible operation is [`StageLadder::new`], which rejects ladders that
//! violate the construction contract (empty, a zero entry, or a
//! non-increasing entry).
//!
//! ## Minimal example
//!
//! ```rust
//! use stagegrid_stages::{DeviceClass, Orientation, StageLadder, ladder_for};
//!
//! // Built-in table for a phone held upright.
//! let ladder = ladder_for(DeviceClass::Phone, Orientation::Portrait);
//! assert_eq!(ladder.as_slice(), &[1, 2, 4, 6, 8]);
//!
//! // Out-of-range stage requests saturate instead of failing.
//! assert_eq!(ladder.clamp_index(99), ladder.last_index());
//! assert_eq!(ladder.items_per_row(99), 8);
//!
//! // Custom ladders are validated at construction.
//! let custom = StageLadder::new(&[2, 3, 5]).unwrap();
//! assert_eq!(custom.stage_count(), 3);
//! assert!(StageLadder::new(&[]).is_err());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod device;
mod ladder;

pub use device::{DeviceClass, Orientation, ladder_for};
pub use ladder::{DEFAULT_STAGE, StageLadder, StageLadderError};
