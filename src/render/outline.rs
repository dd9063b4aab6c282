//! CPU line-list generation for box outlines

use std::cmp::Ordering;

use bytemuck::{Pod, Zeroable};

use crate::core::types::{Mat4, Vec3};
use crate::math::Aabb;
use super::{BoxRenderer, BoxStyle, BoxStyles};

/// Vertices emitted per box (12 edges, 2 ends each)
pub const VERTICES_PER_BOX: usize = 24;

/// Line vertex for GPU upload (must match shader struct exactly)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Transformed position (12 bytes, offset 0)
    pub position: [f32; 3],
    /// Padding for vec3 alignment (4 bytes, offset 12)
    pub _pad: f32,
    /// RGBA colour (16 bytes, offset 16)
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug)]
struct BatchedBox {
    first_vertex: usize,
    /// Squared camera distance; 0 when no camera was given
    depth: f32,
}

/// Collects box outlines drawn in one frame
#[derive(Clone, Debug, Default)]
pub struct LineBatch {
    styles: BoxStyles,
    vertices: Vec<LineVertex>,
    boxes: Vec<BatchedBox>,
}

impl LineBatch {
    pub fn new(styles: BoxStyles) -> Self {
        Self {
            styles,
            vertices: Vec::new(),
            boxes: Vec::new(),
        }
    }

    /// Vertices in draw order
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Raw bytes of the vertex data
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of boxes drawn since the last clear
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.boxes.clear();
    }

    /// Vertices with whole boxes reordered furthest first
    pub fn sorted_back_to_front(&self) -> Vec<LineVertex> {
        let mut order: Vec<&BatchedBox> = self.boxes.iter().collect();
        // Stable sort keeps draw order among equal depths
        order.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));
        order
            .into_iter()
            .flat_map(|b| &self.vertices[b.first_vertex..b.first_vertex + VERTICES_PER_BOX])
            .copied()
            .collect()
    }
}

impl BoxRenderer for LineBatch {
    fn draw_box(&mut self, bounds: &Aabb, style: BoxStyle, transform: &Mat4, camera_position: Option<Vec3>) {
        let color = self.styles.color(style);
        let corners = bounds.corners().map(|c| transform.project_point3(c));

        self.boxes.push(BatchedBox {
            first_vertex: self.vertices.len(),
            depth: camera_position.map_or(0.0, |p| bounds.distance_squared(p)),
        });

        // Corners differing in exactly one bit share an edge
        for i in 0..8 {
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    for corner in [corners[i], corners[i | bit]] {
                        self.vertices.push(LineVertex {
                            position: corner.to_array(),
                            _pad: 0.0,
                            color,
                        });
                    }
                }
            }
        }
    }
}
