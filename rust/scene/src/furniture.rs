// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-room-kind furniture layouts
//!
//! Each layout is a pure function of the room's own world-space width and
//! depth. Placements are offsets from the room center, mostly expressed as
//! fractions of the room extents so a layout repositions itself for any
//! room size; a handful of placements and all piece dimensions are fixed
//! aesthetic constants and deliberately do not scale.

use crate::node::{Color, Geometry, Material, SceneNode, Transform, Vec3};
use planscape_core::RoomKind;
use smallvec::SmallVec;

/// Furniture sets are small and bounded (at most 6 pieces per layout)
pub type FurnitureSet = SmallVec<[FurniturePrimitive; 8]>;

// Shared piece palette
const WOOD: Color = Color::rgb(0x8b, 0x45, 0x13);
const DARK_WOOD: Color = Color::rgb(0x65, 0x43, 0x21);
const SLATE: Color = Color::rgb(0x4a, 0x55, 0x68);
const CHARCOAL: Color = Color::rgb(0x2d, 0x37, 0x48);
const NEAR_BLACK: Color = Color::rgb(0x1a, 0x1a, 0x1a);
const LINEN: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const PORCELAIN: Color = Color::rgb(0xf8, 0xf9, 0xfa);
const COUNTER_WHITE: Color = Color::rgb(0xf7, 0xfa, 0xfc);
const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
const STEEL: Color = Color::rgb(0xc0, 0xc0, 0xc0);
const MIRROR_BLUE: Color = Color::rgb(0xe6, 0xf3, 0xff);

/// One furniture piece, placed relative to its room center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurniturePrimitive {
    pub geometry: Geometry,
    /// Offset from the room center; y is the piece's resting height
    pub offset: Vec3,
    pub material: Material,
}

impl FurniturePrimitive {
    fn boxed(
        (w, h, d): (f64, f64, f64),
        offset: (f64, f64, f64),
        color: Color,
        roughness: f32,
        metalness: f32,
    ) -> Self {
        Self {
            geometry: Geometry::cuboid(w, h, d),
            offset: Vec3::new(offset.0, offset.1, offset.2),
            material: Material::new(color, roughness, metalness),
        }
    }

    fn cylinder(
        (radius, height): (f64, f64),
        offset: (f64, f64, f64),
        color: Color,
        roughness: f32,
        metalness: f32,
    ) -> Self {
        Self {
            geometry: Geometry::cylinder(radius, radius, height),
            offset: Vec3::new(offset.0, offset.1, offset.2),
            material: Material::new(color, roughness, metalness),
        }
    }
}

/// Produce the furniture set for a room kind.
///
/// Exhaustive over [`RoomKind`]; hallways and unclassified rooms stay
/// empty.
pub fn furnish(kind: RoomKind, width: f64, depth: f64) -> FurnitureSet {
    match kind {
        RoomKind::Living => living_room(width, depth),
        RoomKind::Bedroom => bedroom(width, depth),
        RoomKind::Kitchen => kitchen(width, depth),
        RoomKind::Bathroom => bathroom(width, depth),
        RoomKind::Hallway | RoomKind::Other => FurnitureSet::new(),
    }
}

/// Positioned furniture group for a room, or `None` for unfurnished kinds
pub fn furniture_group(
    kind: RoomKind,
    center_x: f64,
    center_z: f64,
    width: f64,
    depth: f64,
) -> Option<SceneNode> {
    let pieces = furnish(kind, width, depth);
    if pieces.is_empty() {
        return None;
    }

    let children = pieces
        .into_iter()
        .map(|piece| {
            SceneNode::mesh(
                piece.geometry,
                piece.material,
                Transform::at(
                    center_x + piece.offset.x,
                    piece.offset.y,
                    center_z + piece.offset.z,
                ),
            )
        })
        .collect();

    Some(SceneNode::group(Transform::identity(), children))
}

/// Sofa against the left half, coffee table centered, TV wall at the back
fn living_room(width: f64, depth: f64) -> FurnitureSet {
    let mut set = FurnitureSet::new();

    // Sofa
    set.push(FurniturePrimitive::boxed(
        (width / 3.0, 0.4, 0.8),
        (-width / 4.0, 0.2, 0.0),
        SLATE,
        0.8,
        0.0,
    ));
    // Coffee table
    set.push(FurniturePrimitive::boxed(
        (0.8, 0.3, 0.5),
        (0.0, 0.15, 0.0),
        WOOD,
        0.3,
        0.0,
    ));
    // TV stand
    set.push(FurniturePrimitive::boxed(
        (1.2, 0.4, 0.3),
        (width / 3.0, 0.2, -depth / 3.0),
        CHARCOAL,
        0.7,
        0.0,
    ));
    // TV
    set.push(FurniturePrimitive::boxed(
        (1.0, 0.6, 0.05),
        (width / 3.0, 0.6, -depth / 3.0),
        NEAR_BLACK,
        0.1,
        0.8,
    ));
    // Side table
    set.push(FurniturePrimitive::cylinder(
        (0.2, 0.5),
        (-width / 2.5, 0.25, depth / 4.0),
        WOOD,
        0.4,
        0.0,
    ));

    set
}

/// Bed on its frame toward the back wall, nightstands flanking at a fixed
/// reach, storage along the front
fn bedroom(width: f64, depth: f64) -> FurnitureSet {
    let mut set = FurnitureSet::new();
    let bed_z = -depth / 4.0;

    // Bed
    set.push(FurniturePrimitive::boxed(
        (1.4, 0.3, 2.0),
        (0.0, 0.15, bed_z),
        LINEN,
        0.9,
        0.0,
    ));
    // Bed frame, slightly larger and lower
    set.push(FurniturePrimitive::boxed(
        (1.5, 0.1, 2.1),
        (0.0, 0.05, bed_z),
        DARK_WOOD,
        0.6,
        0.0,
    ));
    // Nightstands sit a fixed reach from the bed, not a room fraction
    for side in [-1.0, 1.0] {
        set.push(FurniturePrimitive::boxed(
            (0.4, 0.4, 0.4),
            (side * 0.8, 0.2, bed_z),
            WOOD,
            0.5,
            0.0,
        ));
    }
    // Dresser
    set.push(FurniturePrimitive::boxed(
        (1.0, 0.6, 0.4),
        (width / 3.0, 0.3, depth / 3.0),
        DARK_WOOD,
        0.6,
        0.0,
    ));
    // Wardrobe
    set.push(FurniturePrimitive::boxed(
        (0.6, 1.6, 0.5),
        (-width / 3.0, 0.8, depth / 4.0),
        SLATE,
        0.7,
        0.0,
    ));

    set
}

/// Work wall along the back (counters, stove, sink, fridge, uppers) with a
/// freestanding island at the room center
fn kitchen(width: f64, depth: f64) -> FurnitureSet {
    let mut set = FurnitureSet::new();
    let work_wall_z = -depth / 3.0;

    // Counters
    set.push(FurniturePrimitive::boxed(
        (width / 2.0, 0.8, 0.6),
        (-width / 3.0, 0.4, work_wall_z),
        COUNTER_WHITE,
        0.1,
        0.1,
    ));
    // Island
    set.push(FurniturePrimitive::boxed(
        (1.2, 0.8, 0.8),
        (0.0, 0.4, 0.0),
        LINEN,
        0.2,
        0.0,
    ));
    // Refrigerator
    set.push(FurniturePrimitive::boxed(
        (0.6, 1.6, 0.6),
        (width / 3.0, 0.8, work_wall_z),
        PORCELAIN,
        0.1,
        0.3,
    ));
    // Stove
    set.push(FurniturePrimitive::boxed(
        (0.6, 0.1, 0.6),
        (-width / 4.0, 0.45, work_wall_z),
        NEAR_BLACK,
        0.1,
        0.8,
    ));
    // Upper cabinets
    set.push(FurniturePrimitive::boxed(
        (width / 2.0, 0.6, 0.3),
        (-width / 3.0, 1.2, work_wall_z),
        WOOD,
        0.4,
        0.0,
    ));
    // Sink
    set.push(FurniturePrimitive::boxed(
        (0.4, 0.04, 0.3),
        (-width / 5.0, 0.42, work_wall_z),
        STEEL,
        0.1,
        0.9,
    ));

    set
}

/// Tub along the side, fixtures clustered on the vanity wall, toilet
/// toward a corner
fn bathroom(width: f64, depth: f64) -> FurnitureSet {
    let mut set = FurnitureSet::new();
    let vanity_wall_z = -depth / 3.0;

    // Bathtub
    set.push(FurniturePrimitive::boxed(
        (1.5, 0.3, 0.7),
        (-width / 3.0, 0.15, 0.0),
        WHITE,
        0.1,
        0.0,
    ));
    // Toilet
    set.push(FurniturePrimitive::boxed(
        (0.4, 0.4, 0.6),
        (width / 4.0, 0.2, depth / 4.0),
        PORCELAIN,
        0.2,
        0.0,
    ));
    // Vanity
    set.push(FurniturePrimitive::boxed(
        (1.0, 0.6, 0.5),
        (0.0, 0.3, vanity_wall_z),
        WOOD,
        0.5,
        0.0,
    ));
    // Mirror, a thin sheet just above the vanity
    set.push(FurniturePrimitive::boxed(
        (0.8, 0.6, 0.02),
        (0.0, 0.8, -depth / 2.8),
        MIRROR_BLUE,
        0.0,
        1.0,
    ));
    // Sink basin
    set.push(FurniturePrimitive::cylinder(
        (0.15, 0.04),
        (0.0, 0.32, vanity_wall_z),
        WHITE,
        0.1,
        0.0,
    ));

    set
}
