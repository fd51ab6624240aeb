//! Interactive 3D scatter visualization
//!
//! This crate renders a [`pointview_core::PointSet`] as an interactive
//! scatter plot using wgpu and winit:
//! - one round marker per point, colored by z through the viridis colormap
//! - background reference grid and colored axis lines
//! - on-screen color legend for the z range
//! - turntable camera (drag to orbit, right-drag to pan, scroll to zoom,
//!   `R` to reset the view)

pub mod camera;
pub mod colormap;
pub mod renderer;
pub mod scene;
pub mod view;
pub mod viewer;

pub use camera::OrbitCamera;
pub use colormap::{viridis, ColorScale};
pub use renderer::{RenderConfig, ScatterRenderer};
pub use view::RenderView;
pub use viewer::{show, ViewerConfig};
