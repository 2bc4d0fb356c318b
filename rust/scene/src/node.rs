// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene graph value types
//!
//! The generated scene is a tree of [`SceneNode`] rooted at one group.
//! Everything here is plain data: the renderer host walks the tree and
//! owns tessellation, text layout, and draw state. Serialized form is
//! internally tagged JSON with camelCase fields so a three.js host can
//! consume it directly.

use nalgebra::Vector3;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 3D vector/position in world space (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn to_nalgebra(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(v: &Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Position and Euler XYZ rotation (radians) of a scene node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Translation-only transform
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rotation: Vec3::zero(),
        }
    }

    pub fn with_rotation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }
}

/// An sRGB color, serialized as a `#rrggbb` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (case-insensitive)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex)
            .ok_or_else(|| D::Error::custom(format!("invalid hex color: {}", hex)))
    }
}

/// Geometry primitive carried by a mesh node.
///
/// Dimensions follow the three.js constructor argument conventions
/// (BoxGeometry, CylinderGeometry, ConeGeometry).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
    #[serde(rename_all = "camelCase")]
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
    },
    #[serde(rename_all = "camelCase")]
    Cone {
        radius: f64,
        height: f64,
        radial_segments: u32,
    },
}

impl Geometry {
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        Geometry::Box {
            width,
            height,
            depth,
        }
    }

    pub fn cylinder(radius_top: f64, radius_bottom: f64, height: f64) -> Self {
        Geometry::Cylinder {
            radius_top,
            radius_bottom,
            height,
        }
    }

    pub fn cone(radius: f64, height: f64, radial_segments: u32) -> Self {
        Geometry::Cone {
            radius,
            height,
            radial_segments,
        }
    }
}

/// PBR surface parameters for a mesh node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn new(color: Color, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            roughness,
            metalness,
        }
    }

    /// Color-only material with the renderer's default finish
    pub fn flat(color: Color) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

/// A node in the generated scene tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneNode {
    Mesh {
        geometry: Geometry,
        material: Material,
        transform: Transform,
    },
    Group {
        transform: Transform,
        children: Vec<SceneNode>,
    },
    #[serde(rename_all = "camelCase")]
    Label {
        text: String,
        transform: Transform,
        font_size: f64,
        color: Color,
    },
}

impl SceneNode {
    pub fn mesh(geometry: Geometry, material: Material, transform: Transform) -> Self {
        SceneNode::Mesh {
            geometry,
            material,
            transform,
        }
    }

    pub fn group(transform: Transform, children: Vec<SceneNode>) -> Self {
        SceneNode::Group {
            transform,
            children,
        }
    }

    pub fn label(
        text: impl Into<String>,
        transform: Transform,
        font_size: f64,
        color: Color,
    ) -> Self {
        SceneNode::Label {
            text: text.into(),
            transform,
            font_size,
            color,
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            SceneNode::Mesh { transform, .. } => transform,
            SceneNode::Group { transform, .. } => transform,
            SceneNode::Label { transform, .. } => transform,
        }
    }

    /// Total node count including this node and all descendants
    pub fn node_count(&self) -> usize {
        match self {
            SceneNode::Group { children, .. } => {
                1 + children.iter().map(SceneNode::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Number of mesh nodes in this subtree
    pub fn mesh_count(&self) -> usize {
        match self {
            SceneNode::Mesh { .. } => 1,
            SceneNode::Group { children, .. } => {
                children.iter().map(SceneNode::mesh_count).sum()
            }
            SceneNode::Label { .. } => 0,
        }
    }

    /// Number of label nodes in this subtree
    pub fn label_count(&self) -> usize {
        match self {
            SceneNode::Label { .. } => 1,
            SceneNode::Group { children, .. } => {
                children.iter().map(SceneNode::label_count).sum()
            }
            SceneNode::Mesh { .. } => 0,
        }
    }
}
