// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Planscape Core
//!
//! Floor plan document model: walls as measured line segments, rooms as
//! axis-aligned rectangles with a semantic kind, plus a plan-wide scale
//! factor (plan units per world unit).
//!
//! The document is caller-owned and read-only for scene generation; this
//! crate provides the types, JSON document I/O, and the numeric boundary
//! validation that generation itself deliberately skips.
//!
//! ## Quick Start
//!
//! ```rust
//! use planscape_core::{FloorPlan, Point2D, Rect, Room, RoomKind, Wall};
//!
//! let mut plan = FloorPlan::new("Studio", 50.0);
//! plan.walls.push(Wall::new(
//!     "w1",
//!     Point2D::new(400.0, 300.0),
//!     Point2D::new(450.0, 300.0),
//! ));
//! plan.rooms.push(Room::new(
//!     "r1",
//!     Rect::new(400.0, 300.0, 100.0, 100.0),
//!     RoomKind::Kitchen,
//!     "Kitchen",
//! ));
//! plan.validate().unwrap();
//!
//! let json = plan.to_json().unwrap();
//! let restored = FloorPlan::from_json(&json).unwrap();
//! assert_eq!(restored.rooms[0].kind, RoomKind::Kitchen);
//! ```

pub mod error;
pub mod plan;
pub mod sample;

pub use error::{PlanError, Result};
pub use plan::{FloorPlan, Point2D, Rect, Room, RoomKind, Wall};
pub use sample::sample_plan;
