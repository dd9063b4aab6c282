//! Voxsel - interactive box selection for voxel map editors

pub mod core;
pub mod math;
pub mod selection;
pub mod render;
