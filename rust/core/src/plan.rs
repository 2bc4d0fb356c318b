// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan document types
//!
//! A floor plan is expressed in plan space: a 2D canvas-pixel-like
//! coordinate system with a plan-supplied scale factor (plan units per
//! world unit). Walls are line segments with height and thickness; rooms
//! are axis-aligned rectangles with a semantic kind.

use crate::error::{PlanError, Result};
use nalgebra::Point2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 2D point in plan space (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        Point2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// An axis-aligned rectangle in plan space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A wall segment in plan space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub id: String,
    pub start: Point2D,
    pub end: Point2D,
    /// Wall height in world units
    pub height: f64,
    /// Wall thickness in world units
    pub thickness: f64,
}

impl Wall {
    pub fn new(id: impl Into<String>, start: Point2D, end: Point2D) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            height: 3.0,
            thickness: 0.2,
        }
    }

    /// Segment length in plan units (zero for degenerate walls)
    pub fn plan_length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Semantic room classification
///
/// Deserialization never fails: any label outside the six known ones maps
/// to `Other`, which resolves to the default material profile and an empty
/// furniture set downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Living,
    Bedroom,
    Kitchen,
    Bathroom,
    Hallway,
    Other,
}

impl RoomKind {
    /// Parse a room type label, treating anything unrecognized as `Other`
    pub fn from_label(label: &str) -> Self {
        match label {
            "living" => RoomKind::Living,
            "bedroom" => RoomKind::Bedroom,
            "kitchen" => RoomKind::Kitchen,
            "bathroom" => RoomKind::Bathroom,
            "hallway" => RoomKind::Hallway,
            _ => RoomKind::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomKind::Living => "living",
            RoomKind::Bedroom => "bedroom",
            RoomKind::Kitchen => "kitchen",
            RoomKind::Bathroom => "bathroom",
            RoomKind::Hallway => "hallway",
            RoomKind::Other => "other",
        }
    }
}

impl Serialize for RoomKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RoomKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(RoomKind::from_label(&label))
    }
}

/// A room in plan space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub bounds: Rect,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    /// Display label shown on the room floor
    pub name: String,
}

impl Room {
    pub fn new(id: impl Into<String>, bounds: Rect, kind: RoomKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bounds,
            kind,
            name: name.into(),
        }
    }
}

/// A complete floor plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Display name, shown as the scene title
    pub name: String,
    /// Plan units per world unit
    pub scale: f64,
    pub walls: Vec<Wall>,
    pub rooms: Vec<Room>,
}

impl FloorPlan {
    pub fn new(name: impl Into<String>, scale: f64) -> Self {
        Self {
            name: name.into(),
            scale,
            walls: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// Load a floor plan from its JSON document form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the floor plan to its JSON document form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the numeric preconditions of the document.
    ///
    /// Scene generation is total over well-formed input and performs no
    /// checks of its own; this is the data-entry boundary. Unknown room
    /// type labels are not an error (they are absorbed into
    /// [`RoomKind::Other`] at deserialization).
    pub fn validate(&self) -> Result<()> {
        if self.scale <= 0.0 {
            return Err(PlanError::InvalidScale(self.scale));
        }
        for wall in &self.walls {
            if wall.height <= 0.0 {
                return Err(PlanError::InvalidWall {
                    id: wall.id.clone(),
                    dimension: "height",
                    value: wall.height,
                });
            }
            if wall.thickness <= 0.0 {
                return Err(PlanError::InvalidWall {
                    id: wall.id.clone(),
                    dimension: "thickness",
                    value: wall.thickness,
                });
            }
        }
        for room in &self.rooms {
            if room.bounds.width <= 0.0 {
                return Err(PlanError::InvalidRoom {
                    id: room.id.clone(),
                    dimension: "width",
                    value: room.bounds.width,
                });
            }
            if room.bounds.height <= 0.0 {
                return Err(PlanError::InvalidRoom {
                    id: room.id.clone(),
                    dimension: "height",
                    value: room.bounds.height,
                });
            }
        }
        Ok(())
    }
}
