//! Core data structures for pointview
//!
//! This crate provides the fundamental types shared by the loader and the
//! renderer: point aliases, the [`PointSet`] container, axis-aligned
//! [`Bounds`], and the error taxonomy.

pub mod bounds;
pub mod error;
pub mod point;
pub mod point_set;

pub use bounds::*;
pub use error::*;
pub use point::*;
pub use point_set::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};
