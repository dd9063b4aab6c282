//! Axis-aligned bounding box

use crate::core::types::{IVec3, Vec3};

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// World-space box covering every voxel from `min` to `max` inclusive
    pub fn from_voxels(min: IVec3, max: IVec3) -> Self {
        // Float add: max + 1 in i32 overflows at i32::MAX
        Self {
            min: min.as_vec3(),
            max: max.as_vec3() + Vec3::ONE,
        }
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if point is inside AABB
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// The eight corners; bit 0 selects x, bit 1 y, bit 2 z
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 != 0 { self.max.x } else { self.min.x },
                if i & 2 != 0 { self.max.y } else { self.min.y },
                if i & 4 != 0 { self.max.z } else { self.min.z },
            )
        })
    }

    /// Squared distance from a point to the nearest point of the box
    pub fn distance_squared(&self, p: Vec3) -> f32 {
        let clamped = p.clamp(self.min, self.max);
        p.distance_squared(clamped)
    }
}
