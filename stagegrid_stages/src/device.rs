// Copyright 2026 the Stagegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ladder::StageLadder;

/// Coarse device classification used to pick a stage table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Handset-sized screens.
    #[default]
    Phone,
    /// Tablet-sized screens, which fit more columns at every stage.
    Tablet,
}

/// Screen orientation used to pick a stage table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Height exceeds width.
    #[default]
    Portrait,
    /// Width exceeds height.
    Landscape,
}

const PHONE_PORTRAIT: &[u32] = &[1, 2, 4, 6, 8];
const PHONE_LANDSCAPE: &[u32] = &[2, 4, 6, 8, 12];
const TABLET_PORTRAIT: &[u32] = &[2, 4, 6, 8, 10];
const TABLET_LANDSCAPE: &[u32] = &[4, 6, 8, 10, 14];

/// Returns the built-in stage ladder for a device class and orientation.
///
/// Pure and deterministic: the same configuration always yields the same
/// ladder. Hosts call this once at layout time and again on every
/// orientation-change notification, swapping the result into their zoom
/// session.
///
/// Wider configurations fit more columns, so their ladders shift toward
/// higher items-per-row counts; every ladder is strictly increasing.
#[must_use]
pub fn ladder_for(device: DeviceClass, orientation: Orientation) -> StageLadder {
    let stages = match (device, orientation) {
        (DeviceClass::Phone, Orientation::Portrait) => PHONE_PORTRAIT,
        (DeviceClass::Phone, Orientation::Landscape) => PHONE_LANDSCAPE,
        (DeviceClass::Tablet, Orientation::Portrait) => TABLET_PORTRAIT,
        (DeviceClass::Tablet, Orientation::Landscape) => TABLET_LANDSCAPE,
    };
    StageLadder::from_validated(stages)
}
