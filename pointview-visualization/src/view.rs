//! Presentation state derived from a point set

use crate::colormap::ColorScale;
use pointview_core::{Bounds, PointSet};

/// Initial camera pose, in degrees
pub const INITIAL_ELEVATION_DEG: f32 = 20.0;
pub const INITIAL_AZIMUTH_DEG: f32 = 45.0;

/// Transient presentation state for one render of a point set.
///
/// Derived entirely from the data at render time; nothing here is part of
/// the file format or persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    pub bounds: Bounds,
    pub color_scale: ColorScale,
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
}

impl RenderView {
    /// Derive the view for a point set, or `None` when there is nothing to
    /// show
    pub fn from_point_set(points: &PointSet) -> Option<Self> {
        let bounds = points.bounds()?;
        let color_scale = ColorScale::from_values(points.iter().map(|p| p.z))?;
        Some(Self {
            bounds,
            color_scale,
            elevation_deg: INITIAL_ELEVATION_DEG,
            azimuth_deg: INITIAL_AZIMUTH_DEG,
        })
    }
}
