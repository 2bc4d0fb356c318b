// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan-space to world-space coordinate mapping

use planscape_core::Point2D;
use serde::{Deserialize, Serialize};

/// The plan-space point that maps to the world origin.
///
/// Authored plans assume an 800x600 canvas, so the default origin is its
/// center (400, 300). Pass a different origin to remap plans authored on
/// another canvas size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanOrigin {
    pub x: f64,
    pub y: f64,
}

impl Default for PlanOrigin {
    fn default() -> Self {
        Self { x: 400.0, y: 300.0 }
    }
}

impl PlanOrigin {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps 2D plan coordinates to centered world X/Z coordinates.
///
/// `scale` is the plan's plan-units-per-world-unit factor and must be
/// positive (caller precondition, enforced by `FloorPlan::validate`).
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    origin: PlanOrigin,
    scale: f64,
}

impl CoordinateMapper {
    pub fn new(origin: PlanOrigin, scale: f64) -> Self {
        Self { origin, scale }
    }

    /// Map a plan-space point to world (x, z)
    pub fn to_world(&self, point: Point2D) -> (f64, f64) {
        (
            (point.x - self.origin.x) / self.scale,
            (point.y - self.origin.y) / self.scale,
        )
    }

    /// Convert a plan-space extent (width/height) to world units
    pub fn to_world_extent(&self, extent: f64) -> f64 {
        extent / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_origin_maps_canvas_center_to_world_origin() {
        let mapper = CoordinateMapper::new(PlanOrigin::default(), 50.0);
        let (x, z) = mapper.to_world(Point2D::new(400.0, 300.0));
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(z, 0.0);
    }

    #[test]
    fn test_scale_division() {
        let mapper = CoordinateMapper::new(PlanOrigin::default(), 50.0);
        let (x, z) = mapper.to_world(Point2D::new(450.0, 300.0));
        assert_relative_eq!(x, 1.0);
        assert_relative_eq!(z, 0.0);

        let (x, z) = mapper.to_world(Point2D::new(400.0, 200.0));
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(z, -2.0);
    }

    #[test]
    fn test_custom_origin() {
        let mapper = CoordinateMapper::new(PlanOrigin::new(0.0, 0.0), 100.0);
        let (x, z) = mapper.to_world(Point2D::new(250.0, -50.0));
        assert_relative_eq!(x, 2.5);
        assert_relative_eq!(z, -0.5);
    }

    #[test]
    fn test_extent_conversion() {
        let mapper = CoordinateMapper::new(PlanOrigin::default(), 50.0);
        assert_relative_eq!(mapper.to_world_extent(100.0), 2.0);
    }
}
