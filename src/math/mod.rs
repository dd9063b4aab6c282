//! Geometry used for picking and drawing selection boxes

pub mod aabb;
pub mod ray;

pub use aabb::Aabb;
pub use ray::Ray;
