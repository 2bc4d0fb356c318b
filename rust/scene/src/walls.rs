// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Oriented wall volumes from plan segments

use crate::mapper::CoordinateMapper;
use crate::materials::wall_material;
use crate::node::{Geometry, SceneNode, Transform, Vec3};
use planscape_core::Wall;

/// Build the oriented box mesh for one wall segment.
///
/// The box length runs along the segment, yaw is the segment's atan2 angle
/// about the vertical axis, and the base sits at world height 0. A
/// degenerate segment (start == end) yields a zero-length box with zero
/// yaw rather than an error.
pub fn build_wall(wall: &Wall, mapper: &CoordinateMapper) -> SceneNode {
    let (start_x, start_z) = mapper.to_world(wall.start);
    let (end_x, end_z) = mapper.to_world(wall.end);

    let dx = end_x - start_x;
    let dz = end_z - start_z;
    let length = (dx * dx + dz * dz).sqrt();
    let angle = if length == 0.0 { 0.0 } else { dz.atan2(dx) };

    let center_x = (start_x + end_x) / 2.0;
    let center_z = (start_z + end_z) / 2.0;

    SceneNode::mesh(
        Geometry::cuboid(length, wall.height, wall.thickness),
        wall_material(),
        Transform {
            position: Vec3::new(center_x, wall.height / 2.0, center_z),
            rotation: Vec3::new(0.0, angle, 0.0),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::PlanOrigin;
    use approx::assert_relative_eq;
    use planscape_core::Point2D;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(PlanOrigin::default(), 50.0)
    }

    #[test]
    fn test_axis_aligned_wall_scenario() {
        // scale=50, start=(400,300), end=(450,300) maps to a unit-length
        // wall from the world origin along +x.
        let mut wall = Wall::new("w1", Point2D::new(400.0, 300.0), Point2D::new(450.0, 300.0));
        wall.height = 3.0;
        wall.thickness = 0.2;

        let node = build_wall(&wall, &mapper());
        let SceneNode::Mesh {
            geometry,
            transform,
            ..
        } = node
        else {
            panic!("expected mesh");
        };

        assert_eq!(geometry, Geometry::cuboid(1.0, 3.0, 0.2));
        assert_relative_eq!(transform.position.x, 0.5);
        assert_relative_eq!(transform.position.y, 1.5);
        assert_relative_eq!(transform.position.z, 0.0);
        assert_relative_eq!(transform.rotation.y, 0.0);
    }

    #[test]
    fn test_diagonal_wall_length_and_yaw() {
        let wall = Wall::new("w1", Point2D::new(400.0, 300.0), Point2D::new(450.0, 350.0));
        let node = build_wall(&wall, &mapper());

        let SceneNode::Mesh {
            geometry: Geometry::Box { width, .. },
            transform,
            ..
        } = node
        else {
            panic!("expected box mesh");
        };

        // Endpoints map to (0,0) and (1,1): length sqrt(2), yaw 45 degrees
        assert_relative_eq!(width, std::f64::consts::SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(
            transform.rotation.y,
            std::f64::consts::FRAC_PI_4,
            epsilon = 1e-12
        );
        assert_relative_eq!(transform.position.x, 0.5);
        assert_relative_eq!(transform.position.z, 0.5);
    }

    #[test]
    fn test_length_matches_mapped_euclidean_distance() {
        let wall = Wall::new("w1", Point2D::new(120.0, 480.0), Point2D::new(610.0, 95.0));
        let m = mapper();
        let (sx, sz) = m.to_world(wall.start);
        let (ex, ez) = m.to_world(wall.end);
        let expected = ((ex - sx).powi(2) + (ez - sz).powi(2)).sqrt();

        let SceneNode::Mesh {
            geometry: Geometry::Box { width, .. },
            ..
        } = build_wall(&wall, &m)
        else {
            panic!("expected box mesh");
        };
        assert_relative_eq!(width, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_wall_is_zero_sized_not_an_error() {
        let wall = Wall::new("w1", Point2D::new(420.0, 310.0), Point2D::new(420.0, 310.0));
        let node = build_wall(&wall, &mapper());

        let SceneNode::Mesh {
            geometry: Geometry::Box { width, .. },
            transform,
            ..
        } = node
        else {
            panic!("expected box mesh");
        };
        assert_relative_eq!(width, 0.0);
        assert_relative_eq!(transform.rotation.y, 0.0);
    }

    #[test]
    fn test_wall_uses_fixed_material() {
        let wall = Wall::new("w1", Point2D::new(400.0, 300.0), Point2D::new(500.0, 300.0));
        let SceneNode::Mesh { material, .. } = build_wall(&wall, &mapper()) else {
            panic!("expected mesh");
        };
        assert_eq!(material, wall_material());
    }
}
