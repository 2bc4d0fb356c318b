// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in sample floor plan for demos and validation

use crate::plan::{FloorPlan, Point2D, Rect, Room, RoomKind, Wall};

/// Create a fixed five-room apartment plan on an 800x600 canvas.
///
/// Useful for exercising the full generation pipeline without an authored
/// document: every furnished room kind appears once, plus a hallway.
pub fn sample_plan() -> FloorPlan {
    let walls = vec![
        // Perimeter
        Wall::new("w-north", Point2D::new(100.0, 100.0), Point2D::new(700.0, 100.0)),
        Wall::new("w-east", Point2D::new(700.0, 100.0), Point2D::new(700.0, 500.0)),
        Wall::new("w-south", Point2D::new(700.0, 500.0), Point2D::new(100.0, 500.0)),
        Wall::new("w-west", Point2D::new(100.0, 500.0), Point2D::new(100.0, 100.0)),
        // Interior partitions
        Wall::new("w-mid", Point2D::new(100.0, 300.0), Point2D::new(700.0, 300.0)),
        Wall::new("w-div-upper", Point2D::new(400.0, 100.0), Point2D::new(400.0, 300.0)),
        Wall::new("w-div-lower", Point2D::new(400.0, 300.0), Point2D::new(400.0, 500.0)),
        Wall::new("w-div-bath", Point2D::new(550.0, 300.0), Point2D::new(550.0, 500.0)),
    ];

    let rooms = vec![
        Room::new(
            "r-living",
            Rect::new(100.0, 100.0, 300.0, 200.0),
            RoomKind::Living,
            "Living Room",
        ),
        Room::new(
            "r-kitchen",
            Rect::new(400.0, 100.0, 300.0, 200.0),
            RoomKind::Kitchen,
            "Kitchen",
        ),
        Room::new(
            "r-bedroom",
            Rect::new(100.0, 300.0, 300.0, 200.0),
            RoomKind::Bedroom,
            "Bedroom",
        ),
        Room::new(
            "r-bathroom",
            Rect::new(400.0, 300.0, 150.0, 200.0),
            RoomKind::Bathroom,
            "Bathroom",
        ),
        Room::new(
            "r-hallway",
            Rect::new(550.0, 300.0, 150.0, 200.0),
            RoomKind::Hallway,
            "Hallway",
        ),
    ];

    FloorPlan {
        name: "Sample Apartment".to_string(),
        scale: 50.0,
        walls,
        rooms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_plan_is_valid() {
        let plan = sample_plan();
        plan.validate().unwrap();

        assert_eq!(plan.walls.len(), 8);
        assert_eq!(plan.rooms.len(), 5);
    }

    #[test]
    fn test_sample_plan_covers_all_furnished_kinds() {
        let plan = sample_plan();
        for kind in [
            RoomKind::Living,
            RoomKind::Bedroom,
            RoomKind::Kitchen,
            RoomKind::Bathroom,
        ] {
            assert!(
                plan.rooms.iter().any(|r| r.kind == kind),
                "sample plan missing {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_sample_plan_round_trips_through_json() {
        let plan = sample_plan();
        let json = plan.to_json().unwrap();
        let restored = FloorPlan::from_json(&json).unwrap();
        assert_eq!(restored.rooms.len(), plan.rooms.len());
        assert_eq!(restored.scale, plan.scale);
    }
}
