//! Committed selection boxes and groups of them

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{IVec3, Result, Vec3};
use crate::math::{Aabb, Ray};

/// An axis-aligned box of voxels between two opposite corners.
///
/// Both corners are inclusive and may be given in any order, so a box with
/// `point1 == point2` covers exactly one voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionBox {
    pub point1: IVec3,
    pub point2: IVec3,
}

impl SelectionBox {
    pub fn new(point1: IVec3, point2: IVec3) -> Self {
        Self { point1, point2 }
    }

    /// Single-voxel box
    pub fn voxel(position: IVec3) -> Self {
        Self::new(position, position)
    }

    /// Smallest voxel coordinate covered
    pub fn min(&self) -> IVec3 {
        self.point1.min(self.point2)
    }

    /// Largest voxel coordinate covered
    pub fn max(&self) -> IVec3 {
        self.point1.max(self.point2)
    }

    /// Size in voxels along each axis
    pub fn size(&self) -> IVec3 {
        self.max() - self.min() + IVec3::ONE
    }

    /// Number of voxels covered
    pub fn volume(&self) -> u64 {
        let size = self.size();
        size.x as u64 * size.y as u64 * size.z as u64
    }

    pub fn contains_block(&self, position: IVec3) -> bool {
        position.cmpge(self.min()).all() && position.cmple(self.max()).all()
    }

    /// World-space extent (the max face sits one unit past the last voxel)
    pub fn world_bounds(&self) -> Aabb {
        Aabb::from_voxels(self.min(), self.max())
    }

    /// Distance along `direction` at which a ray from `origin` enters the box.
    ///
    /// Returns 0 when `origin` is inside and `None` when the ray misses or the
    /// box is behind it.
    pub fn intersects_vector(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        Ray::new(origin, direction).entry_distance(&self.world_bounds())
    }
}

/// An ordered collection of selection boxes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionGroup {
    boxes: Vec<SelectionBox>,
}

impl SelectionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionBox> {
        self.boxes.iter()
    }

    pub fn boxes(&self) -> &[SelectionBox] {
        &self.boxes
    }

    pub fn push(&mut self, selection: SelectionBox) {
        self.boxes.push(selection);
    }

    pub fn into_boxes(self) -> Vec<SelectionBox> {
        self.boxes
    }

    /// Inclusive voxel extent of every box, or `None` when empty
    pub fn bounds(&self) -> Option<(IVec3, IVec3)> {
        self.boxes.iter().fold(None, |acc, b| match acc {
            None => Some((b.min(), b.max())),
            Some((min, max)) => Some((min.min(b.min()), max.max(b.max()))),
        })
    }

    pub fn contains_block(&self, position: IVec3) -> bool {
        self.boxes.iter().any(|b| b.contains_block(position))
    }

    /// Sum of the box volumes; overlapping voxels are counted once per box
    pub fn volume(&self) -> u64 {
        self.boxes.iter().map(SelectionBox::volume).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let group: Self = serde_json::from_str(json)?;
        if group.volume_overflows() {
            return Err(Error::Selection("selection box too large".to_string()));
        }
        Ok(group)
    }

    fn volume_overflows(&self) -> bool {
        self.boxes.iter().any(|b| {
            let size = b.point1.as_i64vec3() - b.point2.as_i64vec3();
            size.abs().max_element() >= i32::MAX as i64
        })
    }
}

impl From<Vec<SelectionBox>> for SelectionGroup {
    fn from(boxes: Vec<SelectionBox>) -> Self {
        Self { boxes }
    }
}

impl FromIterator<SelectionBox> for SelectionGroup {
    fn from_iter<I: IntoIterator<Item = SelectionBox>>(iter: I) -> Self {
        Self { boxes: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a SelectionGroup {
    type Item = &'a SelectionBox;
    type IntoIter = std::slice::Iter<'a, SelectionBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
