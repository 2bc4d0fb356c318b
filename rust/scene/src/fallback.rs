// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed demonstration scene shown when no floor plan is loaded

use crate::node::{Color, Geometry, Material, SceneNode, Transform, Vec3};

const GROUND: Color = Color::rgb(0xe2, 0xe8, 0xf0);
const SHELL: Color = Color::rgb(0xf8, 0xfa, 0xfc);
const ROOF: Color = Color::rgb(0x64, 0x74, 0x8b);
const HINT_TEXT: Color = Color::rgb(0x94, 0xa3, 0xb8);

/// Slow yaw sway applied to the demonstration house.
///
/// Intentionally a different formula and amplitude than
/// [`crate::assembler::idle_bob`]: the two idle effects are visually
/// distinct.
pub fn fallback_sway(elapsed_seconds: f64) -> f64 {
    (elapsed_seconds * 0.1).sin() * 0.1
}

/// Build the fixed house-shell scene: ground slab, four walls, a
/// four-sided cone roof, and an instructional label.
pub fn fallback_scene(elapsed_seconds: f64) -> SceneNode {
    let children = vec![
        // Ground slab
        SceneNode::mesh(
            Geometry::cuboid(8.0, 0.2, 6.0),
            Material::flat(GROUND),
            Transform::at(0.0, -0.1, 0.0),
        ),
        // Wall shell
        SceneNode::mesh(
            Geometry::cuboid(8.0, 3.0, 0.2),
            Material::flat(SHELL),
            Transform::at(0.0, 1.5, -3.0),
        ),
        SceneNode::mesh(
            Geometry::cuboid(8.0, 3.0, 0.2),
            Material::flat(SHELL),
            Transform::at(0.0, 1.5, 3.0),
        ),
        SceneNode::mesh(
            Geometry::cuboid(0.2, 3.0, 6.0),
            Material::flat(SHELL),
            Transform::at(-4.0, 1.5, 0.0),
        ),
        SceneNode::mesh(
            Geometry::cuboid(0.2, 3.0, 6.0),
            Material::flat(SHELL),
            Transform::at(4.0, 1.5, 0.0),
        ),
        // Four-sided roof
        SceneNode::mesh(
            Geometry::cone(5.0, 1.5, 4),
            Material::flat(ROOF),
            Transform::at(0.0, 3.5, 0.0),
        ),
        SceneNode::label(
            "Upload floor plan to generate 3D model",
            Transform::at(0.0, 5.0, 0.0),
            0.4,
            HINT_TEXT,
        ),
    ];

    SceneNode::group(
        Transform {
            position: Vec3::zero(),
            rotation: Vec3::new(0.0, fallback_sway(elapsed_seconds), 0.0),
        },
        children,
    )
}
