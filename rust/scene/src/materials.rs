// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room surface palettes and finish rules

use crate::node::{Color, Material};
use planscape_core::RoomKind;

/// Floor and wall colors associated with a room kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialProfile {
    pub floor: Color,
    pub wall: Color,
}

impl MaterialProfile {
    /// Resolve the surface palette for a room kind.
    ///
    /// Total lookup: `Other` doubles as the fallback entry, and unknown
    /// labels have already been absorbed into `Other` at deserialization.
    pub fn for_kind(kind: RoomKind) -> Self {
        match kind {
            RoomKind::Living => Self {
                floor: Color::rgb(0x8b, 0x45, 0x13), // wood
                wall: Color::rgb(0xf5, 0xf5, 0xdc),  // beige
            },
            RoomKind::Bedroom => Self {
                floor: Color::rgb(0xd2, 0x69, 0x1e), // carpet
                wall: Color::rgb(0xe6, 0xe6, 0xfa),  // lavender
            },
            RoomKind::Kitchen => Self {
                floor: Color::rgb(0x69, 0x69, 0x69), // tile
                wall: Color::rgb(0xff, 0xff, 0xff),
            },
            RoomKind::Bathroom => Self {
                floor: Color::rgb(0x70, 0x80, 0x90), // slate tile
                wall: Color::rgb(0xf0, 0xf8, 0xff),  // alice blue
            },
            RoomKind::Hallway => Self {
                floor: Color::rgb(0xbc, 0x8f, 0x8f), // rosy brown
                wall: Color::rgb(0xf8, 0xf8, 0xff),  // ghost white
            },
            RoomKind::Other => Self {
                floor: Color::rgb(0xd3, 0xd3, 0xd3),
                wall: Color::rgb(0xdc, 0xdc, 0xdc),
            },
        }
    }
}

/// Whether a room kind gets a hard tiled floor finish
fn is_tiled(kind: RoomKind) -> bool {
    matches!(kind, RoomKind::Kitchen | RoomKind::Bathroom)
}

/// Full floor material for a room kind: palette color plus finish.
///
/// Tiled kinds read glossy and slightly metallic; everything else is a
/// rough non-metal surface.
pub fn floor_material(kind: RoomKind) -> Material {
    let profile = MaterialProfile::for_kind(kind);
    if is_tiled(kind) {
        Material::new(profile.floor, 0.1, 0.2)
    } else {
        Material::new(profile.floor, 0.8, 0.0)
    }
}

/// Fixed material for wall volumes, independent of room kind
pub fn wall_material() -> Material {
    Material::new(Color::rgb(0xf8, 0xfa, 0xfc), 0.9, 0.0)
}
