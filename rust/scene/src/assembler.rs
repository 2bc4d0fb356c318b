// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene assembly and the root idle transform
//!
//! Every generation call rebuilds the full tree from the plan; nothing is
//! cached or diffed. The host render loop is expected to reconcile
//! successive trees itself if it wants to avoid redundant uploads.

use crate::fallback::fallback_scene;
use crate::furniture::furniture_group;
use crate::mapper::{CoordinateMapper, PlanOrigin};
use crate::node::{Color, SceneNode, Transform, Vec3};
use crate::rooms::{build_floor, build_label, RoomFootprint};
use crate::walls::build_wall;
use planscape_core::FloorPlan;

const TITLE_HEIGHT: f64 = 5.0;
const TITLE_FONT_SIZE: f64 = 0.5;
const TITLE_COLOR: Color = Color::rgb(0x64, 0x74, 0x8b);

/// Subtle vertical breathing offset for the root group.
///
/// Pure in elapsed seconds: the same input always yields the same offset,
/// and zero elapsed time yields zero offset.
pub fn idle_bob(elapsed_seconds: f64) -> f64 {
    (elapsed_seconds * 0.5).sin() * 0.05
}

/// Build the flat element list for a plan: wall meshes in input order,
/// then each room's floor, furniture group (furnished kinds only), and
/// label, then the plan title label.
pub fn assemble_plan(plan: &FloorPlan, origin: PlanOrigin) -> Vec<SceneNode> {
    let mapper = CoordinateMapper::new(origin, plan.scale);
    let mut nodes = Vec::with_capacity(plan.walls.len() + plan.rooms.len() * 3 + 1);

    for wall in &plan.walls {
        nodes.push(build_wall(wall, &mapper));
    }

    for room in &plan.rooms {
        nodes.push(build_floor(room, &mapper));

        let footprint = RoomFootprint::of(room, &mapper);
        if let Some(group) = furniture_group(
            room.kind,
            footprint.center_x,
            footprint.center_z,
            footprint.width,
            footprint.depth,
        ) {
            nodes.push(group);
        }

        nodes.push(build_label(room, &mapper));
    }

    nodes.push(SceneNode::label(
        plan.name.clone(),
        Transform::at(0.0, TITLE_HEIGHT, 0.0),
        TITLE_FONT_SIZE,
        TITLE_COLOR,
    ));

    nodes
}

/// Generate the scene for an optional floor plan with the default canvas
/// origin.
///
/// With a plan, the root group carries the [`idle_bob`] vertical offset;
/// without one, the fixed fallback house is returned instead.
pub fn generate_scene(plan: Option<&FloorPlan>, elapsed_seconds: f64) -> SceneNode {
    generate_scene_with_origin(plan, PlanOrigin::default(), elapsed_seconds)
}

/// Generate the scene for an optional floor plan authored against an
/// explicit canvas origin
pub fn generate_scene_with_origin(
    plan: Option<&FloorPlan>,
    origin: PlanOrigin,
    elapsed_seconds: f64,
) -> SceneNode {
    match plan {
        Some(plan) => {
            tracing::debug!(
                name = %plan.name,
                walls = plan.walls.len(),
                rooms = plan.rooms.len(),
                "assembling floor plan scene"
            );
            SceneNode::group(
                Transform {
                    position: Vec3::new(0.0, idle_bob(elapsed_seconds), 0.0),
                    rotation: Vec3::zero(),
                },
                assemble_plan(plan, origin),
            )
        }
        None => {
            tracing::debug!("no floor plan loaded, using fallback scene");
            fallback_scene(elapsed_seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planscape_core::{sample_plan, FloorPlan, Point2D, Rect, Room, RoomKind, Wall};

    #[test]
    fn test_sample_plan_census() {
        let plan = sample_plan();
        let root = generate_scene(Some(&plan), 0.0);

        let SceneNode::Group { children, .. } = &root else {
            panic!("expected group root");
        };

        // 8 walls + 5 floors + 4 furniture groups (hallway has none)
        // + 5 room labels + 1 title
        assert_eq!(children.len(), 8 + 5 + 4 + 5 + 1);
        assert_eq!(root.label_count(), 6);
    }

    #[test]
    fn test_unfurnished_room_contributes_floor_and_label_only() {
        let mut plan = FloorPlan::new("Hall Only", 50.0);
        plan.rooms.push(Room::new(
            "r1",
            Rect::new(300.0, 250.0, 200.0, 100.0),
            RoomKind::Hallway,
            "Hallway",
        ));

        let SceneNode::Group { children, .. } = generate_scene(Some(&plan), 0.0) else {
            panic!("expected group root");
        };
        // floor + room label + title
        assert_eq!(children.len(), 3);
        assert!(matches!(children[0], SceneNode::Mesh { .. }));
        assert!(matches!(children[1], SceneNode::Label { .. }));
    }

    #[test]
    fn test_title_label_is_last_at_fixed_height() {
        let plan = sample_plan();
        let SceneNode::Group { children, .. } = generate_scene(Some(&plan), 0.0) else {
            panic!("expected group root");
        };

        let SceneNode::Label {
            text,
            transform,
            font_size,
            color,
        } = children.last().unwrap()
        else {
            panic!("expected title label");
        };
        assert_eq!(text, "Sample Apartment");
        assert_relative_eq!(transform.position.y, 5.0);
        assert_relative_eq!(*font_size, 0.5);
        assert_eq!(*color, Color::rgb(0x64, 0x74, 0x8b));
    }

    #[test]
    fn test_idle_bob_formula() {
        assert_relative_eq!(idle_bob(0.0), 0.0);
        assert_relative_eq!(idle_bob(2.0), (1.0f64).sin() * 0.05);
        // Pure: repeated evaluation is bit-identical
        assert_eq!(idle_bob(17.3).to_bits(), idle_bob(17.3).to_bits());
    }

    #[test]
    fn test_root_transform_carries_idle_bob() {
        let plan = sample_plan();
        let elapsed = 4.2;
        let SceneNode::Group { transform, .. } = generate_scene(Some(&plan), elapsed) else {
            panic!("expected group root");
        };
        assert_relative_eq!(transform.position.y, idle_bob(elapsed));
        assert_relative_eq!(transform.rotation.y, 0.0);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let plan = sample_plan();
        assert_eq!(
            generate_scene(Some(&plan), 1.5),
            generate_scene(Some(&plan), 1.5)
        );
    }

    #[test]
    fn test_absent_plan_yields_fallback() {
        let scene = generate_scene(None, 0.0);
        assert_eq!(scene, crate::fallback::fallback_scene(0.0));
        assert_eq!(scene.node_count(), 8);
    }

    #[test]
    fn test_identical_rooms_get_translated_furniture() {
        // Two living rooms with identical dimensions at different plan
        // positions must produce identical furniture up to translation.
        let mut plan = FloorPlan::new("Twins", 50.0);
        plan.rooms.push(Room::new(
            "a",
            Rect::new(100.0, 100.0, 200.0, 150.0),
            RoomKind::Living,
            "A",
        ));
        plan.rooms.push(Room::new(
            "b",
            Rect::new(500.0, 400.0, 200.0, 150.0),
            RoomKind::Living,
            "B",
        ));

        let SceneNode::Group { children, .. } = generate_scene(Some(&plan), 0.0) else {
            panic!("expected group root");
        };
        // children: floorA, furnA, labelA, floorB, furnB, labelB, title
        let (SceneNode::Group { children: furn_a, .. }, SceneNode::Group { children: furn_b, .. }) =
            (&children[1], &children[4])
        else {
            panic!("expected furniture groups");
        };

        let mapper = CoordinateMapper::new(PlanOrigin::default(), plan.scale);
        let (ax, az) = mapper.to_world(plan.rooms[0].bounds.center());
        let (bx, bz) = mapper.to_world(plan.rooms[1].bounds.center());

        for (piece_a, piece_b) in furn_a.iter().zip(furn_b.iter()) {
            let (SceneNode::Mesh { geometry: ga, transform: ta, material: ma },
                 SceneNode::Mesh { geometry: gb, transform: tb, material: mb }) =
                (piece_a, piece_b)
            else {
                panic!("expected furniture meshes");
            };
            assert_eq!(ga, gb);
            assert_eq!(ma, mb);
            assert_relative_eq!(ta.position.x - ax, tb.position.x - bx, epsilon = 1e-12);
            assert_relative_eq!(ta.position.z - az, tb.position.z - bz, epsilon = 1e-12);
            assert_relative_eq!(ta.position.y, tb.position.y);
        }
    }

    #[test]
    fn test_custom_origin_shifts_scene() {
        let mut plan = FloorPlan::new("Offset", 50.0);
        plan.walls.push(Wall::new(
            "w1",
            Point2D::new(0.0, 0.0),
            Point2D::new(50.0, 0.0),
        ));

        let SceneNode::Group { children, .. } =
            generate_scene_with_origin(Some(&plan), PlanOrigin::new(0.0, 0.0), 0.0)
        else {
            panic!("expected group root");
        };
        let SceneNode::Mesh { transform, .. } = &children[0] else {
            panic!("expected wall mesh");
        };
        // Wall from (0,0) to (1,0) in world space, centered at 0.5
        assert_relative_eq!(transform.position.x, 0.5);
        assert_relative_eq!(transform.position.z, 0.0);
    }
}
