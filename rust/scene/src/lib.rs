// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Planscape Scene
//!
//! Turns a measured 2D floor plan into a renderer-agnostic 3D scene graph:
//!
//! 1. Plan coordinates are remapped to centered world space
//! 2. Wall segments become oriented box volumes
//! 3. Rooms become floor slabs with kind-specific surfaces and flat labels
//! 4. Furnished room kinds get a procedural furniture layout scaled to the
//!    room's own extents
//! 5. Everything is assembled into one root group carrying a small idle
//!    transform derived from host-supplied elapsed time
//!
//! Generation is a pure function of `(plan, elapsed time)`: no caching, no
//! incremental updates, no hidden state. Without a plan, a fixed
//! demonstration house is produced instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use planscape_core::sample_plan;
//! use planscape_scene::generate_scene;
//!
//! let plan = sample_plan();
//! let scene = generate_scene(Some(&plan), 0.0);
//! assert!(scene.node_count() > 1);
//!
//! // No plan loaded: fixed demo house
//! let fallback = generate_scene(None, 0.0);
//! assert_eq!(fallback.mesh_count(), 6);
//! ```

pub mod assembler;
pub mod fallback;
pub mod furniture;
pub mod mapper;
pub mod materials;
pub mod node;
pub mod rooms;
pub mod walls;

pub use assembler::{assemble_plan, generate_scene, generate_scene_with_origin, idle_bob};
pub use fallback::{fallback_scene, fallback_sway};
pub use furniture::{furnish, furniture_group, FurniturePrimitive, FurnitureSet};
pub use mapper::{CoordinateMapper, PlanOrigin};
pub use materials::{floor_material, wall_material, MaterialProfile};
pub use node::{Color, Geometry, Material, SceneNode, Transform, Vec3};
pub use rooms::{build_floor, build_label, RoomFootprint};
pub use walls::build_wall;
