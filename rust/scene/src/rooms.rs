// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room floor slabs and labels

use crate::mapper::CoordinateMapper;
use crate::materials::floor_material;
use crate::node::{Color, Geometry, SceneNode, Transform};
use planscape_core::Room;

/// Slab thickness in world units
const FLOOR_THICKNESS: f64 = 0.02;

/// Slabs sit slightly below y=0 so they never z-fight the ground plane
const FLOOR_ELEVATION: f64 = -0.01;

/// Height of the flat room label above the floor
const LABEL_ELEVATION: f64 = 0.1;

/// Room extents and center resolved into world space
#[derive(Debug, Clone, Copy)]
pub struct RoomFootprint {
    pub center_x: f64,
    pub center_z: f64,
    pub width: f64,
    pub depth: f64,
}

impl RoomFootprint {
    pub fn of(room: &Room, mapper: &CoordinateMapper) -> Self {
        let (center_x, center_z) = mapper.to_world(room.bounds.center());
        Self {
            center_x,
            center_z,
            width: mapper.to_world_extent(room.bounds.width),
            depth: mapper.to_world_extent(room.bounds.height),
        }
    }
}

/// Build the thin floor slab mesh for a room
pub fn build_floor(room: &Room, mapper: &CoordinateMapper) -> SceneNode {
    let footprint = RoomFootprint::of(room, mapper);

    SceneNode::mesh(
        Geometry::cuboid(footprint.width, FLOOR_THICKNESS, footprint.depth),
        floor_material(room.kind),
        Transform::at(footprint.center_x, FLOOR_ELEVATION, footprint.center_z),
    )
}

/// Build the room name label, laid flat on the floor.
///
/// Font size tracks the smaller room extent so labels stay inside small
/// rooms.
pub fn build_label(room: &Room, mapper: &CoordinateMapper) -> SceneNode {
    let footprint = RoomFootprint::of(room, mapper);
    let font_size = footprint.width.min(footprint.depth) * 0.15;

    SceneNode::label(
        room.name.clone(),
        Transform::at(footprint.center_x, LABEL_ELEVATION, footprint.center_z)
            .with_rotation(-std::f64::consts::FRAC_PI_2, 0.0, 0.0),
        font_size,
        Color::rgb(0x2c, 0x3e, 0x50),
    )
}
