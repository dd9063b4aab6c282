//! Drawing selection boxes
//!
//! The editor hands each box to a [`BoxRenderer`] together with the style it
//! should be drawn in. [`LineBatch`] turns them into a line list ready for
//! upload; GPU submission lives outside this crate.

pub mod outline;

use serde::{Deserialize, Serialize};

use crate::core::types::{Mat4, Vec3};
use crate::math::Aabb;

pub use outline::{LineBatch, LineVertex};

/// How a box should be drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxStyle {
    /// Committed box, not under the cursor
    Committed,
    /// Committed box under the cursor
    Hovered,
    /// Active box, locked
    ActiveStatic,
    /// Active box following the cursor
    ActiveDynamic,
}

/// RGBA colour per box style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyles {
    pub committed: [f32; 4],
    pub hovered: [f32; 4],
    pub active_static: [f32; 4],
    pub active_dynamic: [f32; 4],
}

impl Default for BoxStyles {
    fn default() -> Self {
        Self {
            committed: [1.0, 1.0, 1.0, 0.8],
            hovered: [1.0, 1.0, 0.3, 1.0],
            active_static: [0.2, 0.6, 1.0, 1.0],
            active_dynamic: [1.0, 0.5, 0.1, 1.0],
        }
    }
}

impl BoxStyles {
    pub fn color(&self, style: BoxStyle) -> [f32; 4] {
        match style {
            BoxStyle::Committed => self.committed,
            BoxStyle::Hovered => self.hovered,
            BoxStyle::ActiveStatic => self.active_static,
            BoxStyle::ActiveDynamic => self.active_dynamic,
        }
    }
}

/// Draw target for selection boxes
pub trait BoxRenderer {
    /// Draw one box. `camera_position` is used for depth ordering when given.
    fn draw_box(&mut self, bounds: &Aabb, style: BoxStyle, transform: &Mat4, camera_position: Option<Vec3>);
}
